use super::{CONFIG_FILE_NAME, Common, Config, Host};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Args;
use ohno::bail;
use std::io::Write;

/// Log target for the init command
const LOG_TARGET: &str = "init";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration [default: ./oar-risk.toml]
    pub path: Option<Utf8PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn init_config(host: &mut impl Host, common: &Common, args: &InitArgs) -> Result<()> {
    let path = args.path.clone().unwrap_or_else(|| common.base_dir().join(CONFIG_FILE_NAME));

    if path.exists() && !args.force {
        bail!("'{path}' already exists; use --force to overwrite it");
    }

    Config::save_default(&path)?;
    log::info!(target: LOG_TARGET, "Wrote default configuration to '{path}'");
    writeln!(host.output(), "Wrote default configuration to '{path}'")?;
    Ok(())
}
