use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::weights::{
    EngineConfig, MatchWeights, AVAILABILITY_WEIGHT, MATCH_FAIR_THRESHOLD, RATING_WEIGHT,
    SKILL_WEIGHT,
};
use crate::error::WeightsError;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Request limits for the HTTP surface
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_max_batch_tickets")]
    pub max_batch_tickets: usize,
    #[serde(default = "default_max_developers")]
    pub max_developers: usize,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_batch_tickets: default_max_batch_tickets(),
            max_developers: default_max_developers(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_batch_tickets() -> usize { 500 }
fn default_max_developers() -> usize { 5000 }
fn default_max_body_bytes() -> usize { 8 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_fair_threshold")]
    pub fair_threshold: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            fair_threshold: default_fair_threshold(),
        }
    }
}

impl ScoringSettings {
    /// Build the engine configuration, rejecting incoherent overrides
    pub fn engine_config(&self) -> Result<EngineConfig, WeightsError> {
        let mut config = EngineConfig {
            matching: MatchWeights {
                skills: self.weights.skills,
                availability: self.weights.availability,
                rating: self.weights.rating,
            },
            ..EngineConfig::default()
        };
        config.thresholds.fair = self.fair_threshold;

        config.validate()?;
        Ok(config)
    }
}

fn default_fair_threshold() -> u32 { MATCH_FAIR_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            availability: default_availability_weight(),
            rating: default_rating_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { SKILL_WEIGHT }
fn default_availability_weight() -> f64 { AVAILABILITY_WEIGHT }
fn default_rating_weight() -> f64 { RATING_WEIGHT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEVMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DEVMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("DEVMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
