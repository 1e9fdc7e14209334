use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

/// Fixed option catalogs the filter and creation UIs enumerate.
///
/// Set-valued filter fields are expected to stay subsets of these lists;
/// the UI only ever offers catalog entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub activity_types: Vec<String>,
    pub gender_options: Vec<String>,
    pub gear_options: Vec<String>,
    pub location_ranges_km: Vec<u32>,
    pub popular_locations: Vec<String>,
    pub tennis_match_types: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            activity_types: to_strings(&[
                "Cycling", "Climbing", "Running", "Hiking", "Skiing", "Surfing", "Tennis",
            ]),
            gender_options: to_strings(&["All genders", "Female only", "Male only", "Mixed"]),
            gear_options: to_strings(&[
                "Own gear required",
                "Gear provided",
                "Rental available",
                "No gear needed",
            ]),
            location_ranges_km: vec![10, 20, 50, 100],
            popular_locations: to_strings(&[
                "Central London",
                "Oxford",
                "Cambridge",
                "Surrey Hills",
                "Peak District",
                "Lake District",
            ]),
            tennis_match_types: to_strings(&[
                "Singles",
                "Doubles",
                "Mixed Doubles",
                "Practice Session",
                "Coaching",
                "Tournament",
            ]),
        }
    }
}

impl CatalogSettings {
    pub fn is_activity_type(&self, name: &str) -> bool {
        self.activity_types.iter().any(|t| t == name)
    }

    pub fn is_gender_option(&self, name: &str) -> bool {
        self.gender_options.iter().any(|g| g == name)
    }

    pub fn is_gear_option(&self, name: &str) -> bool {
        self.gear_options.iter().any(|g| g == name)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Limits for the browse result list
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with EXPLORE_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. EXPLORE__SEARCH__DEFAULT_LIMIT -> search.default_limit
            .add_source(
                Environment::with_prefix("EXPLORE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EXPLORE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
