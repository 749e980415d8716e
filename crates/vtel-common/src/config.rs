//! ---
//! vtel_section: "01-core-functionality"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Shared primitives and utilities for the generator tooling."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vtel_sim::{Bounds, GeneratorProfile, ProfileKind};

use crate::logging::LogFormat;

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_rate() -> f64 {
    0.2
}

fn default_threshold() -> f64 {
    0.2
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Primary configuration object for the generator binaries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    /// `None` when no file was found and built-in defaults apply.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "VTEL_CONFIG";

    /// Load configuration from an explicit path, the `VTEL_CONFIG` override,
    /// or fall back to built-in defaults.
    pub fn load_with_source(explicit: Option<&Path>) -> Result<LoadedAppConfig> {
        if let Some(path) = explicit {
            let config = Self::from_path(path)?;
            return Ok(LoadedAppConfig {
                config,
                source: Some(path.to_path_buf()),
            });
        }

        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: Some(path),
                });
            }
        }

        Ok(LoadedAppConfig {
            config: AppConfig::default(),
            source: None,
        })
    }

    fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        contents
            .parse::<AppConfig>()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.generator.resolve(ProfileKind::default(), None)?;
        self.batch.validate()?;
        Ok(())
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

/// Base profile selection plus optional per-field range overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub profile: Option<ProfileKind>,
    #[serde(default)]
    pub speed_max: Option<u32>,
    #[serde(default)]
    pub latitude: Option<Bounds>,
    #[serde(default)]
    pub longitude: Option<Bounds>,
    #[serde(default)]
    pub fuel_max: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<u32>,
}

impl GeneratorConfig {
    /// Build the effective profile.
    ///
    /// `requested` (usually a CLI flag) wins over the configured profile,
    /// which wins over `fallback`. Field overrides apply on top.
    pub fn resolve(
        &self,
        fallback: ProfileKind,
        requested: Option<ProfileKind>,
    ) -> Result<GeneratorProfile> {
        let kind = requested.or(self.profile).unwrap_or(fallback);
        let mut profile = GeneratorProfile::from_kind(kind);
        if let Some(speed_max) = self.speed_max {
            profile.speed_max = speed_max;
        }
        if let Some(latitude) = self.latitude {
            profile.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            profile.longitude = longitude;
        }
        if let Some(fuel_max) = self.fuel_max {
            profile.fuel_max = fuel_max;
        }
        if let Some(temp_max) = self.temp_max {
            profile.temp_max = temp_max;
        }
        profile
            .validate()
            .with_context(|| format!("invalid generator settings for profile '{kind}'"))?;
        Ok(profile)
    }
}

/// Settings for multi-vehicle fan-out runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_output_root")]
    pub output: PathBuf,
    /// Reserved for time-series drift; currently has no effect.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Reserved for time-series drift; currently has no effect.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl BatchConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() || !self.threshold.is_finite() {
            return Err(anyhow!("batch rate and threshold must be finite numbers"));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output: default_output_root(),
            rate: default_rate(),
            threshold: default_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_yields_defaults() {
        let config: AppConfig = "".parse().unwrap();
        assert_eq!(config.batch.output, PathBuf::from("."));
        assert_eq!(config.batch.rate, 0.2);
        assert_eq!(config.batch.threshold, 0.2);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.generator.profile.is_none());
    }

    #[test]
    fn overrides_apply_on_top_of_base_profile() {
        let config: AppConfig = r#"
            [generator]
            profile = "global"
            speed_max = 200
            latitude = { min = -10.0, max = 10.0 }
        "#
        .parse()
        .unwrap();
        let profile = config
            .generator
            .resolve(ProfileKind::Geofence, None)
            .unwrap();
        assert_eq!(profile.speed_max, 200);
        assert_eq!(profile.latitude, Bounds::new(-10.0, 10.0));
        assert_eq!(profile.longitude, Bounds::new(-180.0, 180.0));
    }

    #[test]
    fn requested_profile_wins_over_configured_profile() {
        let config: AppConfig = "[generator]\nprofile = \"global\"\n".parse().unwrap();
        let profile = config
            .generator
            .resolve(ProfileKind::Global, Some(ProfileKind::Geofence))
            .unwrap();
        assert_eq!(profile, GeneratorProfile::geofence());
    }

    #[test]
    fn fallback_applies_when_nothing_is_configured() {
        let config = AppConfig::default();
        let profile = config.generator.resolve(ProfileKind::Global, None).unwrap();
        assert_eq!(profile, GeneratorProfile::global());
    }

    #[test]
    fn inverted_override_fails_validation() {
        let err = "[generator]\nlongitude = { min = 10.0, max = -10.0 }\n"
            .parse::<AppConfig>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("longitude"));
    }

    #[test]
    fn overflowing_coordinate_span_fails_validation() {
        let err = "[generator]\nlatitude = { min = -1.7e308, max = 1.7e308 }\n"
            .parse::<AppConfig>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("latitude"));
    }

    #[test]
    fn env_override_is_loaded_when_no_explicit_path() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[batch]\noutput = \"from-env\"")?;
        file.flush()?;
        std::env::set_var(AppConfig::ENV_CONFIG_PATH, file.path());
        let loaded = AppConfig::load_with_source(None);
        std::env::remove_var(AppConfig::ENV_CONFIG_PATH);
        let loaded = loaded?;
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert_eq!(loaded.config.batch.output, PathBuf::from("from-env"));
        Ok(())
    }

    #[test]
    fn unknown_profile_name_fails_to_parse() {
        assert!("[generator]\nprofile = \"lunar\"\n"
            .parse::<AppConfig>()
            .is_err());
    }

    #[test]
    fn explicit_path_is_loaded() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[batch]\noutput = \"fleet\"\nrate = 0.5")?;
        writeln!(file, "[logging]\nformat = \"structured-json\"")?;
        file.flush()?;
        let loaded = AppConfig::load_with_source(Some(file.path()))?;
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert_eq!(loaded.config.batch.output, PathBuf::from("fleet"));
        assert_eq!(loaded.config.batch.rate, 0.5);
        assert_eq!(loaded.config.batch.threshold, 0.2);
        assert_eq!(loaded.config.logging.format, LogFormat::StructuredJson);
        Ok(())
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let missing = Path::new("/definitely/not/here/vtel.toml");
        assert!(AppConfig::load_with_source(Some(missing)).is_err());
    }
}
