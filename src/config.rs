use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

fn default_port() -> u16 { 8080 }
fn default_static_dir() -> String { "static".to_string() }
fn default_ui_latency_ms() -> u64 { 0 }
fn default_settings_path() -> String { "settings.json".to_string() }
fn default_request_timeout_s() -> u64 { 10 }

/// Upper limit for `pricing.quotation_validity_days` (ten years)
pub const MAX_QUOTATION_VALIDITY_DAYS: i64 = 3650;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub estimator: EstimatorParams,
    #[serde(default)]
    pub pricing: PricingParams,
    #[serde(default)]
    pub bounds: InputBounds,
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// External form collector for quotation leads; submission is skipped when absent
    #[serde(default)]
    pub lead_form: Option<LeadFormConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Artificial delay before estimator responses, for front-ends that want a
    /// "calculating" affordance. Never applied inside the estimators themselves.
    #[serde(default = "default_ui_latency_ms")]
    pub ui_latency_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            ui_latency_ms: default_ui_latency_ms(),
        }
    }
}

/// Tuning constants of the savings estimator.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
#[serde(default)]
pub struct EstimatorParams {
    /// Flat electricity tariff, currency per kWh
    pub tariff_per_unit: f64,
    /// Sizing headroom applied to the raw kW requirement
    pub sizing_buffer: f64,
    /// Upper bound of monthly savings as a fraction of the bill
    pub savings_cap_ratio: f64,
    pub roof_sq_ft_per_kw: f64,
    pub days_per_month: f64,
    /// Tons of CO2 avoided per installed kW per year
    pub carbon_offset_tons_per_kw: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            tariff_per_unit: 6.0,
            sizing_buffer: 1.2,
            savings_cap_ratio: 0.95,
            roof_sq_ft_per_kw: 100.0,
            days_per_month: 30.0,
            carbon_offset_tons_per_kw: 1.5,
        }
    }
}

/// Flat per-kW rates of the quotation pricer.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
#[serde(default)]
pub struct PricingParams {
    pub installation_rate_per_kw: u64,
    /// Mounting, earthing and other sundries
    pub misc_rate_per_kw: u64,
    /// Capacity of a single inverter unit
    pub inverter_block_kw: u32,
    pub quotation_validity_days: i64,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            installation_rate_per_kw: 8000,
            misc_rate_per_kw: 5000,
            inverter_block_kw: 5,
            quotation_validity_days: 30,
        }
    }
}

/// Closed ranges accepted by the estimators.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
#[serde(default)]
pub struct InputBounds {
    pub min_monthly_bill: f64,
    pub max_monthly_bill: f64,
    pub min_roof_area_sq_ft: f64,
    pub max_roof_area_sq_ft: f64,
    pub min_system_size_kw: u32,
    pub max_system_size_kw: u32,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_monthly_bill: 1000.0,
            max_monthly_bill: 50000.0,
            min_roof_area_sq_ft: 200.0,
            max_roof_area_sq_ft: 5000.0,
            min_system_size_kw: 1,
            max_system_size_kw: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LeadFormConfig {
    pub endpoint: String,
    #[serde(default = "default_request_timeout_s")]
    pub request_timeout_s: u64,
    pub fields: LeadFormFields,
}

/// Field names the external collector expects for each lead attribute.
#[derive(Debug, Deserialize, Clone)]
pub struct LeadFormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub system_size: String,
    pub panel_brand: String,
    pub inverter_brand: String,
    pub location: String,
    pub channel_partner: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        let e = &self.estimator;
        let positive = [
            ("estimator.tariff_per_unit", e.tariff_per_unit),
            ("estimator.sizing_buffer", e.sizing_buffer),
            ("estimator.savings_cap_ratio", e.savings_cap_ratio),
            ("estimator.roof_sq_ft_per_kw", e.roof_sq_ft_per_kw),
            ("estimator.days_per_month", e.days_per_month),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::Config(format!("{name} must be a positive number")));
            }
        }
        if self.pricing.inverter_block_kw == 0 {
            return Err(AppError::Config("pricing.inverter_block_kw must be at least 1".into()));
        }
        if !(1..=MAX_QUOTATION_VALIDITY_DAYS).contains(&self.pricing.quotation_validity_days) {
            return Err(AppError::Config(format!(
                "pricing.quotation_validity_days must be between 1 and {MAX_QUOTATION_VALIDITY_DAYS}"
            )));
        }

        let b = &self.bounds;
        if b.min_monthly_bill > b.max_monthly_bill
            || b.min_roof_area_sq_ft > b.max_roof_area_sq_ft
            || b.min_system_size_kw > b.max_system_size_kw
        {
            return Err(AppError::Config("bounds: minimum exceeds maximum".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            estimator: EstimatorParams::default(),
            pricing: PricingParams::default(),
            bounds: InputBounds::default(),
            settings_path: default_settings_path(),
            lead_form: None,
        }
    }
}
