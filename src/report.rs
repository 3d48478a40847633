use crate::engine::EpcReport;

/// Render the fixed-format console summary. Display-time rounding only;
/// the result document itself carries full-precision values.
pub fn render_summary(report: &EpcReport) -> String {
    let c = &report.components;
    let t = &report.totals;
    let p = &report.pricing;

    let mut out = String::new();
    out.push_str("== EPC CALC RESULT ==\n");
    out.push_str(&format!("EPC (USD/click):         {:.6}\n", t.epc));
    out.push_str(&format!(
        "Revenue per 1000 clicks: ${:.2}\n",
        t.revenue_per_1000_clicks
    ));
    out.push_str(&format!(
        "Orders per 1000 clicks:   {:.2}\n",
        t.orders_per_1000_clicks
    ));
    out.push_str("--- Components ---\n");
    out.push_str(&format!("EPC - Products:          {:.6}\n", c.epc_products));
    out.push_str(&format!("EPC - Bounties:          {:.6}\n", c.epc_bounties));
    out.push_str(&format!("EPC - Bonuses:           {:.6}\n", c.epc_bonuses));
    out.push_str("--- Pricing Guidance ---\n");
    out.push_str(&format!("Break-even CPC:          ${:.4}\n", p.breakeven_cpc));
    out.push_str(&format!(
        "CPC cap @ margin {:.0}%: ${:.4}\n",
        p.target_margin * 100.0,
        p.cpc_cap_for_margin
    ));
    out
}
