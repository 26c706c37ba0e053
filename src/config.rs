use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{FilterSettings, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scoring: ScoringSettings,
    pub candidate_filter: CandidateFilterSettings,
    pub matching: MatchingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_demographic_weight")]
    pub demographic: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            lifestyle: default_lifestyle_weight(),
            demographic: default_demographic_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_lifestyle_weight() -> f64 { 0.4 }
fn default_demographic_weight() -> f64 { 0.3 }
fn default_location_weight() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateFilterSettings {
    #[serde(default = "default_max_crime_rate")]
    pub max_crime_rate: f64,
    #[serde(default = "default_min_safety_score")]
    pub min_safety_score: f64,
    #[serde(default = "default_min_candidates")]
    pub min_candidates: usize,
}

impl Default for CandidateFilterSettings {
    fn default() -> Self {
        Self {
            max_crime_rate: default_max_crime_rate(),
            min_safety_score: default_min_safety_score(),
            min_candidates: default_min_candidates(),
        }
    }
}

fn default_max_crime_rate() -> f64 { 0.1 }
fn default_min_safety_score() -> f64 { 6.0 }
fn default_min_candidates() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Upper bound on one whole match request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }
fn default_timeout_secs() -> u64 { 30 }

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
    /// 4. Environment variables (prefixed with NEIGHBORFIT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NEIGHBORFIT__SCORING__WEIGHTS__LIFESTYLE -> scoring.weights.lifestyle
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        let weights = &self.scoring.weights;
        ScoringWeights {
            lifestyle: weights.lifestyle,
            demographic: weights.demographic,
            location: weights.location,
        }
    }

    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings {
            max_crime_rate: self.candidate_filter.max_crime_rate,
            min_safety_score: self.candidate_filter.min_safety_score,
            min_candidates: self.candidate_filter.min_candidates,
        }
    }

    /// Requested limit, or the default, capped at `max_limit`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("NEIGHBORFIT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
