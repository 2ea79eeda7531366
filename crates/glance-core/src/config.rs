use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Panel ids the widgets render into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelsConfig {
    /// Panel for the clock widget
    #[serde(default = "default_clock_panel")]
    pub clock: String,

    /// Panel for the day/night and moon-phase widget
    #[serde(default = "default_astronomy_panel")]
    pub astronomy: String,

    /// Panel for the weather widget
    #[serde(default = "default_weather_panel")]
    pub weather: String,
}

fn default_clock_panel() -> String {
    "clock".to_string()
}

fn default_astronomy_panel() -> String {
    "astronomy-info".to_string()
}

fn default_weather_panel() -> String {
    "weather-info".to_string()
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            clock: default_clock_panel(),
            astronomy: default_astronomy_panel(),
            weather: default_weather_panel(),
        }
    }
}

/// Fallback locale when none is configured
pub const DEFAULT_LOCALE: &str = "en-AU";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone identifier (e.g. "Australia/Melbourne")
    pub timezone: String,

    /// Latitude in degrees, -90 to 90
    pub latitude: f64,

    /// Longitude in degrees, -180 to 180
    pub longitude: f64,

    /// Locale for time formatting (e.g. "en-AU", "en-US")
    pub locale: String,

    /// Display name of the configured place
    pub city: String,

    /// Panel ids
    #[serde(default)]
    pub panels: PanelsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "Australia/Melbourne".to_string(),
            latitude: -37.8136,
            longitude: 144.9631,
            locale: DEFAULT_LOCALE.to_string(),
            city: "Melbourne".to_string(),
            panels: PanelsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.timezone.is_empty() {
            result.add_error("timezone", "Timezone must not be empty");
        } else if self.timezone.parse::<Tz>().is_err() {
            result.add_error(
                "timezone",
                format!("Unknown IANA timezone: {}", self.timezone),
            );
        }

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            result.add_error(
                "latitude",
                format!("Latitude must be between -90 and 90, got {}", self.latitude),
            );
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            result.add_error(
                "longitude",
                format!(
                    "Longitude must be between -180 and 180, got {}",
                    self.longitude
                ),
            );
        }

        if self.locale.is_empty() {
            result.add_warning(
                "locale",
                format!("Locale is empty, falling back to {}", DEFAULT_LOCALE),
            );
        }

        if self.city.is_empty() {
            result.add_warning("city", "City name is empty");
        }

        for (field, id) in [
            ("panels.clock", &self.panels.clock),
            ("panels.astronomy", &self.panels.astronomy),
            ("panels.weather", &self.panels.weather),
        ] {
            if id.is_empty() {
                result.add_error(field, "Panel id must not be empty");
            }
        }

        result
    }

    /// Parse the configured timezone.
    ///
    /// Only meaningful after validation; an unparsable timezone is a
    /// validation error, not a per-tick condition.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Unknown IANA timezone {}: {}", self.timezone, e))
    }

    /// Effective locale, falling back to the default when unset.
    pub fn effective_locale(&self) -> &str {
        if self.locale.is_empty() {
            DEFAULT_LOCALE
        } else {
            &self.locale
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("glance");

        Ok(config_dir.join("config.toml"))
    }
}
