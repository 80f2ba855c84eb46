//! User configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculator::{DecimalFormat, NumberFormat};

/// Largest number of fraction digits an `f64` can meaningfully show.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Display settings for the calculator.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Separator between integer and fraction parts, both typed and shown.
    pub decimal_separator: char,
    /// Results are rounded to this many fraction digits.
    pub max_fraction_digits: usize,
    /// Display text after a failed calculation.
    pub error_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_separator: DecimalFormat::DEFAULT_SEPARATOR,
            max_fraction_digits: DecimalFormat::DEFAULT_FRACTION_DIGITS,
            error_text: "Ошибка".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the file in the user's
    /// config directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or(path, default_path())
    }

    fn load_or(path: Option<&Path>, fallback: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match fallback.filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents, &path)?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the separator cannot be confused with another key, the
    /// rounding is within `f64` precision and the error label can never be
    /// read back as an operand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.decimal_separator;
        if sep.is_ascii_digit()
            || sep.is_whitespace()
            || matches!(sep, '-' | '+' | 'x' | '*' | '/' | '=' | 'c' | 'C')
        {
            return Err(ConfigError::Invalid(format!(
                "decimal separator {sep:?} clashes with a keypad key"
            )));
        }

        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "max_fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                self.max_fraction_digits
            )));
        }

        if self.error_text.is_empty() {
            return Err(ConfigError::Invalid("error_text must not be empty".to_string()));
        }

        if self.number_format().parse(&self.error_text).is_some() {
            return Err(ConfigError::Invalid(format!(
                "error_text {:?} reads as a number",
                self.error_text
            )));
        }

        // The separator key is ignored while the display already contains one
        if self.error_text.contains(sep) {
            return Err(ConfigError::Invalid(format!(
                "error_text {:?} contains the decimal separator {sep:?}",
                self.error_text
            )));
        }

        Ok(())
    }

    /// Number format matching these settings.
    pub fn number_format(&self) -> DecimalFormat {
        DecimalFormat::new(self.decimal_separator, self.max_fraction_digits)
    }
}

/// Location of the config file in the user's config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("padcalc").join("config.toml"))
}
