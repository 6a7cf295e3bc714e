//! Layered runtime configuration.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `CRISIS_*` environment variables, `__` separating sections
//!    (`CRISIS_SOURCES__WARNING_ERRORS` -> `sources.warning_errors`)
//!
//! # Invariants
//! - A loaded config has passed `validate`.
//! - A missing TOML file is an error; omitting the path is not.

use crate::logging::{default_log_level, normalize_level};
use crate::model::source::SourceHealthThresholds;
use crate::view::dashboard::DashboardTab;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "CRISIS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_tab: DashboardTab,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    pub sources: SourceHealthThresholds,
    pub dashboard: DashboardConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(PathBuf),
    Extract(Box<figment::Error>),
    Invalid { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "config file `{}` does not exist", path.display()),
            Self::Extract(err) => write!(f, "configuration error: {err}"),
            Self::Invalid { field, reason } => {
                write!(f, "invalid configuration value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Extract(err) => Some(err.as_ref()),
            Self::Missing(_) | Self::Invalid { .. } => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

impl CoreConfig {
    /// Loads and validates defaults, `file` (when given), then environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.logging.level).map_err(|err| ConfigError::Invalid {
            field: "logging.level",
            reason: err.to_string(),
        })?;

        if let Some(dir) = &self.logging.dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid {
                    field: "logging.dir",
                    reason: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
        }

        let thresholds = &self.sources;
        if thresholds.warning_errors == 0 || thresholds.warning_errors >= thresholds.inactive_errors
        {
            return Err(ConfigError::Invalid {
                field: "sources",
                reason: format!(
                    "expected 0 < warning_errors < inactive_errors, got {} and {}",
                    thresholds.warning_errors, thresholds.inactive_errors
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::view::dashboard::DashboardTab;

    #[test]
    fn defaults_are_valid() {
        let config = CoreConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.sources.warning_errors, 3);
        assert_eq!(config.sources.inactive_errors, 10);
        assert_eq!(config.dashboard.default_tab, DashboardTab::Zones);
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let mut config = CoreConfig::default();
        config.sources.warning_errors = 10;
        config.sources.inactive_errors = 3;
        let error = config.validate().expect_err("thresholds must be ordered");
        assert!(matches!(error, ConfigError::Invalid { field: "sources", .. }));
    }

    #[test]
    fn unknown_level_is_rejected() {
        let mut config = CoreConfig::default();
        config.logging.level = "loud".to_string();
        let error = config.validate().expect_err("level must be known");
        assert!(error.to_string().contains("logging.level"));
    }
}
