use crate::errors::{EpcError, EpcResult};
use serde::{Deserialize, Serialize};

// ── Model entities ──
//
// One shape per entity kind, strict schema: an object with a missing or
// unknown key is rejected at parse time, before any arithmetic runs.

/// A product placement: its share of clicks, purchase conversion per click,
/// average order value, and commission rate (all decimals, not %).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    pub name: String,
    pub weight: f64,
    pub conv: f64,
    pub aov: f64,
    pub rate: f64,
}

/// A fixed-payout action (e.g. signup) with a per-click attach rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounty {
    pub name: String,
    pub attach: f64,
    pub payout: f64,
}

/// A per-order adder (e.g. first-purchase bonus): share of orders that
/// qualify, and the payout per qualifying order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bonus {
    pub name: String,
    pub order_share: f64,
    pub payout: f64,
}

/// The full monetization model. Any category key may be absent from the
/// source document; absent or empty means zero contribution from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpcModel {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub bounties: Vec<Bounty>,
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}

impl EpcModel {
    /// Parse a model document. Schema violations (unknown keys, missing
    /// fields, wrong types) surface on the validation channel, same as
    /// value-range violations caught later by the evaluator.
    pub fn from_json(raw: &str) -> EpcResult<Self> {
        serde_json::from_str(raw).map_err(|e| EpcError::Validation(format!("model schema: {e}")))
    }
}
