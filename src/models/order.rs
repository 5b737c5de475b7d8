use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStage {
    Pending,
    Survey,
    Approved,
    Manufacturing,
    Dispatched,
    Installation,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineStep {
    pub step: String,
    pub status: StepStatus,
    pub date: Option<NaiveDate>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub system_size: String,
    pub order_date: NaiveDate,
    pub status: OrderStage,
    pub expected_delivery: NaiveDate,
    /// Name and phone number of the assigned field contact
    pub contact_person: String,
    pub location: String,
    pub timeline: Vec<TimelineStep>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQuery {
    /// Order identifier, matched ignoring case
    #[serde(default)]
    pub order_id: String,
    /// Phone number; its last four digits are matched against the contact
    #[serde(default)]
    pub phone: String,
}
