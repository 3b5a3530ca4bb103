//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Forecast configuration.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Budget burn-rate configuration.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Cost alert configuration.
    #[serde(default)]
    pub alerts: AlertConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "finpack=info,br_fin=info".to_string()
}

/// Forecast configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Moving-average window used when none is given.
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

fn default_window() -> usize {
    3
}

/// Budget burn-rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Monthly budget limit.
    #[serde(default = "default_budget_limit")]
    pub limit: Decimal,
    /// Chat channel that receives weekly reports.
    #[serde(default = "default_budget_channel")]
    pub channel: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            limit: default_budget_limit(),
            channel: default_budget_channel(),
        }
    }
}

fn default_budget_limit() -> Decimal {
    Decimal::new(5000, 0)
}

fn default_budget_channel() -> String {
    "#finops".to_string()
}

/// Cost alert configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Spend at or above this value triggers an alert.
    #[serde(default = "default_alert_threshold")]
    pub threshold: Decimal,
    /// Chat channel that receives alerts.
    #[serde(default = "default_alert_channel")]
    pub channel: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            threshold: default_alert_threshold(),
            channel: default_alert_channel(),
        }
    }
}

fn default_alert_threshold() -> Decimal {
    Decimal::ONE_HUNDRED
}

fn default_alert_channel() -> String {
    "#finops-alerts".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `FINPACK__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPACK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
