use super::{Common, Config, Host};
use crate::Result;
use ohno::bail;
use std::io::Write;

/// Log target for the validate command
const LOG_TARGET: &str = "validate";

/// Load and check the configuration file. Unlike other commands, a missing file is an error.
pub fn validate_config(host: &mut impl Host, common: &Common) -> Result<()> {
    let path = common.config_path();
    if !path.is_file() {
        bail!("could not find configuration file '{path}'");
    }

    log::debug!(target: LOG_TARGET, "Validating '{path}'");
    let _ = Config::load(common.base_dir(), Some(&path))?;
    writeln!(host.output(), "Configuration file '{path}' is valid")?;
    Ok(())
}
