// Application settings, loaded with the 'config' crate and 'dotenv'

use anyhow::{Result, ensure};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::filter::PriceScale;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_address: String,
    // Bounds from the shared price control are divided by this for per-day prices
    pub rental_price_divisor: u32,
    pub session_ttl_minutes: i64,
    pub dashboard_recent_limit: usize,
    pub dashboard_rental_limit: usize,
    // JSON inventory replacing the built-in seed data
    pub inventory_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:3000".to_string(),
            rental_price_divisor: 30,
            session_ttl_minutes: 720,
            dashboard_recent_limit: 6,
            dashboard_rental_limit: 2,
            inventory_path: None,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let defaults = Settings::default();
        let builder = Config::builder()
            // Add default values
            .set_default("server_address", defaults.server_address)?
            .set_default("rental_price_divisor", i64::from(defaults.rental_price_divisor))?
            .set_default("session_ttl_minutes", defaults.session_ttl_minutes)?
            .set_default("dashboard_recent_limit", defaults.dashboard_recent_limit as i64)?
            .set_default("dashboard_rental_limit", defaults.dashboard_rental_limit as i64)?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., APP_RENTAL_PRICE_DIVISOR)
            .add_source(Environment::with_prefix("APP").try_parsing(true));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.rental_price_divisor > 0, "rental_price_divisor must be greater than zero");
        ensure!(self.session_ttl_minutes > 0, "session_ttl_minutes must be greater than zero");
        Ok(())
    }

    pub fn rental_price_scale(&self) -> PriceScale {
        PriceScale::divided_by(self.rental_price_divisor).unwrap_or(PriceScale::ONE_TIME)
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }
}
