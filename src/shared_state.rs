use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::AppError;
use crate::services::lead_form::LeadFormClient;
use crate::services::order_lookup::{MockOrderLookup, OrderLookup};
use crate::services::settings_store::SettingsStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Theme preference, persisted on every update
    pub settings: Arc<SettingsStore>,
    pub orders: Arc<dyn OrderLookup>,
    /// `None` when no external form collector is configured
    pub lead_form: Option<LeadFormClient>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, orders: Arc<dyn OrderLookup>) -> Result<Self, AppError> {
        let settings = SettingsStore::load(&config.settings_path)?;
        let lead_form = match &config.lead_form {
            Some(cfg) => Some(
                LeadFormClient::new(cfg)
                    .map_err(|e| AppError::Config(format!("lead form client: {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            settings: Arc::new(settings),
            orders,
            lead_form,
            started_at: Instant::now(),
        })
    }

    /// State backed by the canned demo orders.
    pub fn with_mock_orders(config: Config) -> Result<Self, AppError> {
        Self::new(config, Arc::new(MockOrderLookup::with_fixtures()))
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Presentation delay for the estimator endpoints, if configured.
    pub async fn ui_delay(&self) {
        let ms = self.config.server.ui_latency_ms;
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
