pub mod lead_form;
pub mod order_lookup;
pub mod quotation_pricer;
pub mod quotation_report;
pub mod savings_estimator;
pub mod settings_store;
