use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

fn default_roof_type() -> String { "concrete".to_string() }
fn default_installation_type() -> String { "grid-tie".to_string() }

/// Quotation form. Contact fields are carried through untouched; only the
/// size and brand keys take part in pricing.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct QuotationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub channel_partner: String,
    /// Shown on the quotation document; neither field affects the price
    #[serde(default = "default_roof_type")]
    pub roof_type: String,
    #[serde(default = "default_installation_type")]
    pub installation_type: String,
    #[serde(flatten)]
    pub system: SystemSelection,
}

/// The priced part of a quotation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SystemSelection {
    pub system_size_kw: u32,
    pub panel_brand: String,
    pub inverter_brand: String,
    pub wiring_brand: String,
}

/// Itemized cost of a quoted system, all in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuotationBreakdown {
    pub panel_cost: u64,
    pub inverter_count: u32,
    pub inverter_cost: u64,
    pub wiring_cost: u64,
    pub installation_cost: u64,
    pub misc_cost: u64,
    pub total_cost: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuotationResponse {
    pub reference: Uuid,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub breakdown: QuotationBreakdown,
    /// Whether the lead was handed to the external form collector
    pub lead_forwarded: bool,
}
