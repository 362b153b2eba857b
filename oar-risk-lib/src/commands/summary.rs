use super::{Common, Host};
use crate::Result;
use crate::constraints::ConstraintTable;
use crate::misc::ReportFormat;
use crate::reports;
use clap::Args;

/// Log target for the summary command
const LOG_TARGET: &str = "summary";

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Report format [default: from configuration]
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

pub fn summarize(host: &mut impl Host, common: &Common, args: &SummaryArgs) -> Result<()> {
    let config = common.load_config()?;
    let rows = crate::summary::summarize(&ConstraintTable::standard());
    let format = args.format.unwrap_or(config.format);

    log::debug!(target: LOG_TARGET, "Writing {} summary row(s) as {format}", rows.len());

    let mut out = host.output();
    match format {
        ReportFormat::Console => reports::console_summary(&mut out, &rows, common.color()),
        ReportFormat::Json => reports::json_summary(&mut out, &rows),
        ReportFormat::Csv => reports::csv_summary(&mut out, &rows),
    }
}
