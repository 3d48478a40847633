//! Blended EPC computation.
//!
//! E = E_prod + E_bty + E_bon
//!
//! where, over modules i, bounties j, bonuses k:
//!   O      = sum_i w_i * c_i                  (orders per click)
//!   E_prod = sum_i w_i * c_i * a_i * r_i      (EPC from products)
//!   E_bty  = sum_j beta_j * P_j               (EPC from bounties)
//!   E_bon  = O * sum_k q_k * v_k              (EPC from order-qualified bonuses)
//!
//! Pricing guidance: break-even CPC = E, CPC cap at margin m = E * (1 - m).
//!
//! All inputs are f64. Pure function: no I/O, no logging, no hidden state;
//! identical inputs always produce identical outputs.

use crate::errors::{EpcError, EpcResult};
use crate::model::EpcModel;
use serde::Serialize;

/// Module weights must sum to 1.0 within this tolerance (non-empty lists only).
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-category EPC breakdown. Stack-allocated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Components {
    pub orders_per_click: f64,
    pub epc_products: f64,
    pub epc_bounties: f64,
    pub epc_bonuses: f64,
}

/// Blended totals. Stack-allocated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Totals {
    pub epc: f64,
    pub revenue_per_1000_clicks: f64,
    pub orders_per_1000_clicks: f64,
}

/// Pricing guidance derived from blended EPC. Stack-allocated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pricing {
    pub breakeven_cpc: f64,
    pub cpc_cap_for_margin: f64,
    pub target_margin: f64,
}

/// Full evaluation result. Echoes the input model for traceability.
#[derive(Debug, Clone, Serialize)]
pub struct EpcReport {
    pub inputs: EpcModel,
    pub components: Components,
    pub totals: Totals,
    pub pricing: Pricing,
}

/// Validate then evaluate a model. Fails fast on the first violated
/// invariant; there is no partial result.
///
/// `margin` is deliberately unchecked -- callers may probe edge pricing with
/// negative or >1 margins. `strict` additionally requires at least one
/// product module.
pub fn compute(model: &EpcModel, margin: f64, strict: bool) -> EpcResult<EpcReport> {
    validate(model, strict)?;

    let orders_per_click: f64 = model.modules.iter().map(|m| m.weight * m.conv).sum();
    let epc_products: f64 = model
        .modules
        .iter()
        .map(|m| m.weight * m.conv * m.aov * m.rate)
        .sum();
    let epc_bounties: f64 = model.bounties.iter().map(|b| b.attach * b.payout).sum();
    let bonus_per_order: f64 = model.bonuses.iter().map(|k| k.order_share * k.payout).sum();
    let epc_bonuses = orders_per_click * bonus_per_order;

    let epc = epc_products + epc_bounties + epc_bonuses;

    Ok(EpcReport {
        inputs: model.clone(),
        components: Components {
            orders_per_click,
            epc_products,
            epc_bounties,
            epc_bonuses,
        },
        totals: Totals {
            epc,
            revenue_per_1000_clicks: epc * 1000.0,
            orders_per_1000_clicks: orders_per_click * 1000.0,
        },
        pricing: Pricing {
            breakeven_cpc: epc,
            cpc_cap_for_margin: epc * (1.0 - margin),
            target_margin: margin,
        },
    })
}

/// Invariant checks, in order. The weight-sum rule applies only to non-empty
/// module lists; an empty list has nothing to sum and is not enforced.
fn validate(model: &EpcModel, strict: bool) -> EpcResult<()> {
    if strict && model.modules.is_empty() {
        return Err(EpcError::Validation(
            "at least one module required".to_string(),
        ));
    }

    if !model.modules.is_empty() {
        let total_weight: f64 = model.modules.iter().map(|m| m.weight).sum();
        if (total_weight - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
            return Err(EpcError::Validation(format!(
                "module weights must sum to 1.0 (got {total_weight:.6})"
            )));
        }
    }

    for m in &model.modules {
        if m.weight < 0.0 || m.conv < 0.0 || m.aov < 0.0 || m.rate < 0.0 {
            return Err(EpcError::Validation(format!(
                "negative value in module '{}' (weight={}, conv={}, aov={}, rate={})",
                m.name, m.weight, m.conv, m.aov, m.rate
            )));
        }
    }

    for b in &model.bounties {
        if b.attach < 0.0 || b.payout < 0.0 {
            return Err(EpcError::Validation(format!(
                "negative value in bounty '{}' (attach={}, payout={})",
                b.name, b.attach, b.payout
            )));
        }
    }

    for k in &model.bonuses {
        if k.order_share < 0.0 || k.payout < 0.0 {
            return Err(EpcError::Validation(format!(
                "negative value in bonus '{}' (order_share={}, payout={})",
                k.name, k.order_share, k.payout
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bonus, Bounty, Module};

    fn module(name: &str, weight: f64, conv: f64, aov: f64, rate: f64) -> Module {
        Module {
            name: name.to_string(),
            weight,
            conv,
            aov,
            rate,
        }
    }

    fn reference_model() -> EpcModel {
        EpcModel {
            modules: vec![
                module("A", 0.60, 0.030, 45.0, 0.030),
                module("B", 0.25, 0.030, 90.0, 0.045),
                module("C", 0.15, 0.025, 150.0, 0.040),
            ],
            bounties: vec![
                Bounty {
                    name: "B1".to_string(),
                    attach: 0.008,
                    payout: 3.0,
                },
                Bounty {
                    name: "B2".to_string(),
                    attach: 0.002,
                    payout: 10.0,
                },
            ],
            bonuses: vec![Bonus {
                name: "Q1".to_string(),
                order_share: 0.10,
                payout: 3.0,
            }],
        }
    }

    #[test]
    fn test_reference_scenario() {
        let res = compute(&reference_model(), 0.30, true).expect("reference model is valid");
        assert!((res.components.epc_products - 0.077175).abs() < 1e-5);
        assert!((res.components.epc_bounties - 0.044000).abs() < 1e-5);
        assert!((res.components.epc_bonuses - 0.008775).abs() < 1e-5);
        assert!((res.totals.epc - 0.129950).abs() < 1e-5, "epc: {}", res.totals.epc);
        assert!((res.totals.revenue_per_1000_clicks - 129.950).abs() < 1e-2);
        assert!((res.pricing.breakeven_cpc - res.totals.epc).abs() < 1e-12);
    }

    #[test]
    fn test_weight_sum_enforced() {
        let mut model = reference_model();
        model.modules[0].weight = 0.50; // sums to 0.90
        let err = compute(&model, 0.30, false).unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"), "unexpected: {err}");
        assert!(err.to_string().contains("0.9"), "should name observed sum: {err}");
    }

    #[test]
    fn test_weight_sum_tolerance() {
        let mut model = reference_model();
        model.modules[0].weight = 0.60 + 5e-7; // within tolerance
        assert!(compute(&model, 0.30, false).is_ok());
        model.modules[0].weight = 0.60 + 2e-6; // outside tolerance
        assert!(compute(&model, 0.30, false).is_err());
    }

    #[test]
    fn test_weight_sum_skipped_for_empty_modules() {
        let model = EpcModel {
            bounties: vec![Bounty {
                name: "B1".to_string(),
                attach: 0.01,
                payout: 2.0,
            }],
            ..Default::default()
        };
        let res = compute(&model, 0.30, false).expect("no modules, no weight check");
        assert_eq!(res.components.orders_per_click, 0.0);
        assert_eq!(res.components.epc_products, 0.0);
        assert!((res.totals.epc - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_negative_module_field_rejected() {
        let mut model = reference_model();
        model.modules[1].aov = -90.0;
        let err = compute(&model, 0.30, false).unwrap_err();
        assert!(err.to_string().contains("module 'B'"), "should name the module: {err}");
    }

    #[test]
    fn test_negative_bounty_field_rejected() {
        let mut model = reference_model();
        model.bounties[1].payout = -10.0;
        let err = compute(&model, 0.30, false).unwrap_err();
        assert!(err.to_string().contains("bounty 'B2'"), "should name the bounty: {err}");
    }

    #[test]
    fn test_negative_bonus_field_rejected() {
        let mut model = reference_model();
        model.bonuses[0].order_share = -0.1;
        let err = compute(&model, 0.30, false).unwrap_err();
        assert!(err.to_string().contains("bonus 'Q1'"), "should name the bonus: {err}");
    }

    #[test]
    fn test_strict_requires_modules() {
        let empty = EpcModel::default();
        let err = compute(&empty, 0.30, true).unwrap_err();
        assert!(err.to_string().contains("at least one module"));

        let res = compute(&empty, 0.30, false).expect("non-strict empty model is fine");
        assert_eq!(res.components.orders_per_click, 0.0);
        assert_eq!(res.components.epc_products, 0.0);
        assert_eq!(res.totals.epc, 0.0);
    }

    #[test]
    fn test_empty_category_neutrality() {
        let mut model = reference_model();
        model.bounties.clear();
        let res = compute(&model, 0.30, true).unwrap();
        assert_eq!(res.components.epc_bounties, 0.0);
        assert!((res.components.epc_products - 0.077175).abs() < 1e-5);

        let mut model = reference_model();
        model.bonuses.clear();
        let res = compute(&model, 0.30, true).unwrap();
        assert_eq!(res.components.epc_bonuses, 0.0);
        assert!((res.components.epc_bounties - 0.044).abs() < 1e-12);
    }

    #[test]
    fn test_margin_linearity() {
        let model = reference_model();
        for margin in [-0.5, 0.0, 0.30, 0.75, 1.0, 1.5] {
            let res = compute(&model, margin, true).unwrap();
            let expected = res.pricing.breakeven_cpc * (1.0 - margin);
            assert!(
                (res.pricing.cpc_cap_for_margin - expected).abs() < 1e-12,
                "margin {margin}: cap {} != {}",
                res.pricing.cpc_cap_for_margin,
                expected
            );
            assert_eq!(res.pricing.target_margin, margin);
        }
    }

    #[test]
    fn test_idempotent() {
        let model = reference_model();
        let a = compute(&model, 0.30, true).unwrap();
        let b = compute(&model, 0.30, true).unwrap();
        assert_eq!(a.totals.epc.to_bits(), b.totals.epc.to_bits());
        assert_eq!(
            a.pricing.cpc_cap_for_margin.to_bits(),
            b.pricing.cpc_cap_for_margin.to_bits()
        );
        assert_eq!(
            a.components.orders_per_click.to_bits(),
            b.components.orders_per_click.to_bits()
        );
    }

    #[test]
    fn test_zero_fields_allowed() {
        // Zero is a legal value everywhere; only negatives are rejected.
        let model = EpcModel {
            modules: vec![module("Z", 1.0, 0.0, 0.0, 0.0)],
            ..Default::default()
        };
        let res = compute(&model, 0.30, true).unwrap();
        assert_eq!(res.totals.epc, 0.0);
        assert_eq!(res.pricing.cpc_cap_for_margin, 0.0);
    }
}
