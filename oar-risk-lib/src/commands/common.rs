use super::config::{CONFIG_FILE_NAME, Config};
use crate::Result;
use crate::misc::ColorMode;
use camino::Utf8PathBuf;
use ohno::IntoAppError;

/// State shared by every command: where to find configuration and whether to color output.
#[derive(Debug, Clone)]
pub struct Common {
    base_dir: Utf8PathBuf,
    config_path: Option<Utf8PathBuf>,
    color: bool,
}

impl Common {
    /// Resolve shared state against the current directory.
    pub fn new(config_path: Option<Utf8PathBuf>, color: ColorMode) -> Result<Self> {
        let cwd = std::env::current_dir().into_app_err("determining the current directory")?;
        let base_dir = Utf8PathBuf::try_from(cwd).into_app_err("the current directory is not valid UTF-8")?;
        Ok(Self::with_base_dir(base_dir, config_path, color.enabled()))
    }

    #[must_use]
    pub const fn with_base_dir(base_dir: Utf8PathBuf, config_path: Option<Utf8PathBuf>, color: bool) -> Self {
        Self {
            base_dir,
            config_path,
            color,
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.base_dir, self.config_path.as_ref())
    }

    /// The configuration file that would be read: the `--config` path or `oar-risk.toml`.
    #[must_use]
    pub fn config_path(&self) -> Utf8PathBuf {
        self.config_path.clone().unwrap_or_else(|| self.base_dir.join(CONFIG_FILE_NAME))
    }

    #[must_use]
    pub const fn base_dir(&self) -> &Utf8PathBuf {
        &self.base_dir
    }

    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }
}
