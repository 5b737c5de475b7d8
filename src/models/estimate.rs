use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Savings calculator input. Location and archetype are catalog keys.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EstimateRequest {
    /// Monthly electricity bill in currency units
    pub monthly_bill: f64,
    pub roof_area_sq_ft: f64,
    /// e.g. "bangalore"
    pub location: String,
    /// "grid-tie", "hybrid" or "off-grid"
    pub system_type: String,
}

/// Recommended system and its projected return.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EstimateResult {
    pub system_size_kw: u32,
    pub total_cost: u64,
    pub monthly_bill: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
    /// Years to recoup the cost. Infinite (serialized as `null`) when nothing is saved.
    pub payback_years: f64,
    /// Tons of CO2 avoided per year
    pub carbon_offset_tons: f64,
}
