mod common;
mod config;
mod evaluate;
mod init;
mod organs;
mod summary;
mod validate;

pub use common::Common;
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML, MAX_PRECISION};
pub use evaluate::{EvaluateArgs, evaluate};
pub use init::{InitArgs, init_config};
pub use organs::list_organs;
pub use summary::{SummaryArgs, summarize};
pub use validate::validate_config;

use crate::Result;
use crate::misc::{ColorMode, LogLevel};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

/// Exit code for any failure.
pub const ERROR_EXIT_CODE: i32 = 1;

/// Exit code when `--error-if-medium-risk` or `--error-if-high-risk` trips.
pub const RISK_EXIT_CODE: i32 = 3;

/// Abstraction over the process environment so that `run` can be driven from tests.
pub trait Host {
    fn output(&mut self) -> impl Write;
    fn error(&mut self) -> impl Write;
    fn exit(&mut self, code: i32);
}

#[derive(Parser, Debug)]
#[command(name = "oar-risk", version, about = "Classify organ-at-risk radiation doses against clinical dose constraints")]
struct Cli {
    /// Path to a configuration file [default: ./oar-risk.toml when present]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Logging verbosity; `RUST_LOG` takes precedence
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// When to color console output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a dose for one organ
    Evaluate(EvaluateArgs),

    /// Show one representative dose constraint per organ
    Summary(SummaryArgs),

    /// List the organ identifiers with constraint data
    Organs,

    /// Write the default configuration file
    Init(InitArgs),

    /// Check that the configuration file is valid
    Validate,
}

/// Parse the command line and run the selected command.
///
/// Errors are reported on the host's error stream followed by `host.exit(1)`. Successful
/// runs only call `exit` when a risk gate asks for a non-zero code.
pub fn run<I, T>(host: &mut impl Host, args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            let rendered = e.render();
            if e.use_stderr() {
                let _ = write!(host.error(), "{rendered}");
            } else {
                let _ = write!(host.output(), "{rendered}");
            }

            if code != 0 {
                host.exit(code);
            }
            return;
        }
    };

    init_logging(cli.log_level);

    match dispatch(host, cli) {
        Ok(0) => {}
        Ok(code) => host.exit(code),
        Err(e) => {
            let _ = writeln!(host.error(), "error: {e}");
            host.exit(ERROR_EXIT_CODE);
        }
    }
}

fn dispatch(host: &mut impl Host, cli: Cli) -> Result<i32> {
    // `organs` reads neither the working directory nor the configuration.
    let common = || Common::new(cli.config.clone(), cli.color);

    match &cli.command {
        Commands::Evaluate(args) => evaluate(host, &common()?, args),
        Commands::Summary(args) => summarize(host, &common()?, args).map(|()| 0),
        Commands::Organs => list_organs(host).map(|()| 0),
        Commands::Init(args) => init_config(host, &common()?, args).map(|()| 0),
        Commands::Validate => validate_config(host, &common()?).map(|()| 0),
    }
}

fn init_logging(level: LogLevel) {
    // Repeated runs in one process keep the first logger.
    let _ = env_logger::Builder::new().filter_level(level.into()).parse_default_env().try_init();
}
