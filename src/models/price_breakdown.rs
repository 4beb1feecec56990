//! Output models for stay pricing and the audit trail.
//!
//! [`PriceBreakdown`] is derived data: it is returned to callers and never
//! persisted by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The priced result of a stay.
///
/// `total` always equals `base_total + extra_guest_charge`, and `base_total`
/// always equals the sum of `per_night_prices`.
///
/// # Example
///
/// ```
/// use stay_engine::models::PriceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PriceBreakdown {
///     nights: 2,
///     per_night_prices: vec![Decimal::new(400, 0), Decimal::new(500, 0)],
///     base_total: Decimal::new(900, 0),
///     extra_guests: 0,
///     extra_guest_charge: Decimal::ZERO,
///     total: Decimal::new(900, 0),
///     audit_steps: vec![],
/// };
/// assert_eq!(breakdown.per_night_prices.len() as u32, breakdown.nights);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Number of nights priced.
    pub nights: u32,
    /// Price of each night in stay order, surcharges included.
    pub per_night_prices: Vec<Decimal>,
    /// Sum of `per_night_prices`.
    pub base_total: Decimal,
    /// Guests charged for an extra bed.
    pub extra_guests: u32,
    /// Extra bed charge for the whole stay.
    pub extra_guest_charge: Decimal,
    /// Amount due for the stay.
    pub total: Decimal,
    /// How the total was reached.
    #[serde(default)]
    pub audit_steps: Vec<AuditStep>,
}
