use crate::Result;
use crate::evaluation::DoseType;
use crate::misc::ReportFormat;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Log target for configuration loading
const LOG_TARGET: &str = "config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "oar-risk.toml";

/// Upper bound for `precision`.
pub const MAX_PRECISION: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dose type recorded with an evaluation when `--dose-type` is not given
    #[serde(default)]
    pub dose_type: DoseType,

    /// Report format used when `--format` is not given
    #[serde(default)]
    pub format: ReportFormat,

    /// Number of decimal places used for doses and volumes in console reports
    #[serde(default = "default_precision")]
    pub precision: usize,
}

const fn default_precision() -> usize {
    1
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `oar-risk.toml` in `base_dir` is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        log::info!(target: LOG_TARGET, "Using configuration file '{final_path}'");

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to '{output_path}'"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(app_err!("precision must be at most {}, got {}", MAX_PRECISION, self.precision));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
