//! Self-contained HTML quotation document offered as a download.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::catalog::{ComponentClass, find_brand};
use crate::models::quotation::{QuotationBreakdown, QuotationRequest};

const COMPANY_NAME: &str = "SRIYAVEDA SOLAR ENERGIES";
const COMPANY_PHONE: &str = "+91 9999999999";
const COMPANY_EMAIL: &str = "info@sriyavedasolar.com";
const DATE_FORMAT: &str = "%d/%m/%Y";

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; }
.header { text-align: center; margin-bottom: 40px; }
.content { margin: 20px 0; }
.table { width: 100%; border-collapse: collapse; margin: 20px 0; }
.table th, .table td { border: 1px solid #ddd; padding: 12px; text-align: left; }
.table th { background-color: #f4f4f4; }
.total { background-color: #fff3cd; font-weight: bold; }";

/// Whole rupees with Indian digit grouping, e.g. `₹2,15,000`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("₹{},{tail}", groups.join(","))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Download name derived from the customer name, whitespace runs collapsed to `_`.
pub fn report_filename(customer_name: &str) -> String {
    let slug = customer_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let slug: String = slug
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    format!("Sriyaveda_Solar_Quotation_{slug}.html")
}

/// Last day a quotation issued on `issued_on` stays valid.
pub fn validity_window(issued_on: NaiveDate, validity_days: i64) -> Result<NaiveDate, AppError> {
    let days = u64::try_from(validity_days)
        .map_err(|_| AppError::Config(format!("negative quotation validity: {validity_days} days")))?;
    issued_on
        .checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::Config(format!("quotation validity of {validity_days} days overflows the calendar")))
}

pub struct ReportContext<'a> {
    pub reference: Uuid,
    pub request: &'a QuotationRequest,
    pub breakdown: &'a QuotationBreakdown,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
}

pub fn render_report(ctx: &ReportContext<'_>) -> Result<String, AppError> {
    let req = ctx.request;
    let sel = &req.system;
    let b = ctx.breakdown;

    let panel = find_brand(ComponentClass::Panel, &sel.panel_brand)?;
    let inverter = find_brand(ComponentClass::Inverter, &sel.inverter_brand)?;
    let wiring = find_brand(ComponentClass::Wiring, &sel.wiring_brand)?;

    let rows = [
        ("Solar Panels", panel.label.to_string(), format!("{} kW", sel.system_size_kw), b.panel_cost),
        ("Inverter", inverter.label.to_string(), format!("{} units", b.inverter_count), b.inverter_cost),
        ("Wiring &amp; Cables", wiring.label.to_string(), "Complete set".to_string(), b.wiring_cost),
        ("Installation", "Professional".to_string(), "Complete setup".to_string(), b.installation_cost),
        ("Other Components", "Mounting, Earthing".to_string(), "Complete kit".to_string(), b.misc_cost),
    ];

    let customer = [
        ("Name", &req.name),
        ("Email", &req.email),
        ("Phone", &req.phone),
        ("Address", &req.address),
        ("Location", &req.location),
        ("Channel Partner", &req.channel_partner),
        ("Roof Type", &req.roof_type),
        ("Installation Type", &req.installation_type),
    ]
    .iter()
    .map(|(label, value)| format!("<p><strong>{label}:</strong> {}</p>\n", escape_html(value)))
    .collect::<String>();

    let items = rows
        .iter()
        .map(|(component, brand, spec, cost)| {
            format!(
                "<tr><td>{component}</td><td>{}</td><td>{spec}</td><td>{}</td></tr>\n",
                escape_html(brand),
                format_inr(*cost)
            )
        })
        .collect::<String>();

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Solar Quotation - Sriyaveda Solar Energies</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <div class=\"header\">\n<h1>{COMPANY_NAME}</h1>\n<h2>Solar Installation Quotation</h2>\n\
         <p>Reference: {reference}</p>\n</div>\n\
         <div class=\"content\">\n<h3>Customer Details</h3>\n{customer}\
         <h3>System Specification</h3>\n<table class=\"table\">\n\
         <tr><th>Component</th><th>Brand/Type</th><th>Specification</th><th>Cost</th></tr>\n{items}\
         <tr class=\"total\"><td colspan=\"3\"><strong>Total System Cost</strong></td><td><strong>{total}</strong></td></tr>\n</table>\n\
         <p><strong>Quotation Date:</strong> {issued}</p>\n<p><strong>Valid Until:</strong> {valid}</p>\n\
         <h3>Contact Information</h3>\n<p>{COMPANY_NAME}<br>\nPhone: {COMPANY_PHONE}<br>\nEmail: {COMPANY_EMAIL}</p>\n\
         </div>\n</body>\n</html>\n",
        reference = ctx.reference,
        total = format_inr(b.total_cost),
        issued = ctx.issued_on.format(DATE_FORMAT),
        valid = ctx.valid_until.format(DATE_FORMAT),
    );

    Ok(html)
}
