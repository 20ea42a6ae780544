//! Runtime configuration.
//!
//! Built from hardcoded defaults layered with `CART_*` environment variables
//! (plus the conventional `DATABASE_URL` override). The default checklist
//! steps live here rather than inside the checklist service so the fallback
//! policy is visible and overridable per deployment.

use config::{Config, Environment};
use serde::Deserialize;

use crate::constants::DEFAULT_CHECKLIST_STEPS;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct CartConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Step descriptions used when an order's products carry no checklist
    /// template. All steps are required.
    pub default_checklist_steps: Vec<String>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/cart_core_development".to_string(),
            max_connections: 10,
            default_checklist_steps: DEFAULT_CHECKLIST_STEPS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl CartConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `CART_DATABASE_URL`, `CART_MAX_CONNECTIONS`,
    /// `CART_DEFAULT_CHECKLIST_STEPS` (comma-separated), and `DATABASE_URL`
    /// as a fallback for the connection string.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("default_checklist_steps", defaults.default_checklist_steps)?
            .add_source(
                Environment::with_prefix("CART")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("default_checklist_steps"),
            )
            .build()?;

        let mut cart_config: CartConfig = settings.try_deserialize()?;

        if std::env::var("CART_DATABASE_URL").is_err() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                cart_config.database_url = url;
            }
        }

        Ok(cart_config)
    }
}
