use std::env;
use std::fmt;

use crate::matching::{CompatibilityWeights, DEFAULT_LEADERBOARD_LIMIT};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub matching: MatchingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let canonical = CompatibilityWeights::CANONICAL;
        let weights = CompatibilityWeights {
            iq: weight_var("MATCH_WEIGHT_IQ", canonical.iq)?,
            eq: weight_var("MATCH_WEIGHT_EQ", canonical.eq)?,
            personality: weight_var("MATCH_WEIGHT_TYPE", canonical.personality)?,
            intent: weight_var("MATCH_WEIGHT_INTENT", canonical.intent)?,
        };
        if !weights.sum().is_finite() {
            return Err(ConfigError::WeightOverflow);
        }

        let leaderboard_limit = match env::var("LEADERBOARD_LIMIT") {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidLimit { value })?,
            Err(_) => DEFAULT_LEADERBOARD_LIMIT,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            matching: MatchingConfig {
                weights,
                leaderboard_limit,
            },
        })
    }
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(default);
    };

    match value.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        _ => Err(ConfigError::InvalidWeight { name, value }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Compatibility weight split and leaderboard sizing.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: CompatibilityWeights,
    pub leaderboard_limit: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { name: &'static str, value: String },
    InvalidLimit { value: String },
    WeightOverflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { name, value } => write!(
                f,
                "{} must be a non-negative number, got '{}'",
                name, value
            ),
            ConfigError::InvalidLimit { value } => {
                write!(f, "LEADERBOARD_LIMIT must be a valid usize, got '{}'", value)
            }
            ConfigError::WeightOverflow => {
                write!(f, "MATCH_WEIGHT_* values must sum to a finite number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
