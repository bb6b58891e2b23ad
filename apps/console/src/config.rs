use std::env;

/// Process configuration, read once at startup
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub currency_label: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: "Rs.".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads `CURRENCY_LABEL` and `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            currency_label: env::var("CURRENCY_LABEL").unwrap_or(defaults.currency_label),
            log_filter: env::var("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
