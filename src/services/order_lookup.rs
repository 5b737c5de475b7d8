use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::order::{Order, OrderStage, StepStatus, TimelineStep};

pub const NOT_FOUND_MESSAGE: &str = "Order not found. Please check your Order ID or Phone Number.";

/// Order-status backend. The estimators never depend on it.
pub trait OrderLookup: Send + Sync {
    fn find_order(&self, order_id: &str, phone: &str) -> Result<Order, AppError>;
}

/// Demo backend over a fixed set of canned orders.
#[derive(Debug, Clone)]
pub struct MockOrderLookup {
    orders: Vec<Order>,
}

/// Last four characters of a phone number, or all of it when shorter.
fn phone_suffix(phone: &str) -> &str {
    match phone.char_indices().rev().nth(3) {
        Some((idx, _)) => &phone[idx..],
        None => phone,
    }
}

fn matches(order: &Order, order_id: &str, phone: &str) -> bool {
    if !order_id.is_empty() && order.id.eq_ignore_ascii_case(order_id) {
        return true;
    }
    !phone.is_empty() && order.contact_person.contains(phone_suffix(phone))
}

impl MockOrderLookup {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn with_fixtures() -> Self {
        Self::new(fixture_orders())
    }
}

impl Default for MockOrderLookup {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

impl OrderLookup for MockOrderLookup {
    fn find_order(&self, order_id: &str, phone: &str) -> Result<Order, AppError> {
        let order_id = order_id.trim();
        let phone = phone.trim();
        self.orders
            .iter()
            .find(|o| matches(o, order_id, phone))
            .cloned()
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

const STEPS: [&str; 8] = [
    "Order Placed",
    "Site Survey",
    "Design Approval",
    "Manufacturing",
    "Dispatch",
    "Installation",
    "Commissioning",
    "Completed",
];

/// Builds an eight-step timeline: `dates.len()` completed steps, then the
/// current one, then pending ones.
fn timeline(dates: &[Option<NaiveDate>], descriptions: [&str; 8]) -> Vec<TimelineStep> {
    STEPS
        .iter()
        .zip(descriptions)
        .enumerate()
        .map(|(i, (step, description))| {
            let status = match i.cmp(&dates.len()) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            };
            TimelineStep {
                step: (*step).to_string(),
                status,
                date: dates.get(i).copied().flatten(),
                description: description.to_string(),
            }
        })
        .collect()
}

pub fn fixture_orders() -> Vec<Order> {
    let mut orders = Vec::new();

    if let (Some(order_date), Some(expected_delivery)) = (date(2025, 1, 15), date(2025, 1, 30)) {
        orders.push(Order {
            id: "SV2025001".into(),
            customer_name: "Rajesh Kumar".into(),
            system_size: "5 kW".into(),
            order_date,
            status: OrderStage::Installation,
            expected_delivery,
            contact_person: "Amit Sharma - +91 9876543210".into(),
            location: "Bangalore, Karnataka".into(),
            timeline: timeline(
                &[
                    date(2025, 1, 15),
                    date(2025, 1, 18),
                    date(2025, 1, 20),
                    date(2025, 1, 25),
                    date(2025, 1, 28),
                ],
                [
                    "Order received and payment confirmed",
                    "Technical site assessment completed",
                    "System design approved by customer",
                    "Components manufactured and quality checked",
                    "System dispatched to site location",
                    "Installation team deployed, work in progress",
                    "System testing and grid connection",
                    "Project handover and warranty activation",
                ],
            ),
        });
    }

    if let (Some(order_date), Some(expected_delivery)) = (date(2025, 1, 20), date(2025, 2, 10)) {
        orders.push(Order {
            id: "SV2025002".into(),
            customer_name: "Priya Patel".into(),
            system_size: "3 kW".into(),
            order_date,
            status: OrderStage::Survey,
            expected_delivery,
            contact_person: "Suresh Reddy - +91 9876543211".into(),
            location: "Mumbai, Maharashtra".into(),
            timeline: timeline(
                &[date(2025, 1, 20)],
                [
                    "Order received and payment confirmed",
                    "Site survey scheduled for tomorrow",
                    "Awaiting site survey completion",
                    "Will begin after design approval",
                    "Components will be dispatched",
                    "Professional installation",
                    "System testing and grid connection",
                    "Project handover and warranty activation",
                ],
            ),
        });
    }

    orders
}
