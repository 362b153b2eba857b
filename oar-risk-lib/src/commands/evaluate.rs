use super::{Common, Host, RISK_EXIT_CODE};
use crate::Result;
use crate::evaluation::{Assessment, DoseType, EvaluationRequest, RiskLevel};
use crate::misc::ReportFormat;
use crate::reports;
use clap::Args;

/// Log target for the evaluate command
const LOG_TARGET: &str = "evaluate";

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Organ identifier, e.g. `optic_nerve` (see `oar-risk organs`)
    pub organ: String,

    /// Dose in Gy
    #[arg(long, allow_negative_numbers = true)]
    pub dose: f64,

    /// Irradiated volume in cc; 0 means not specified
    #[arg(long, allow_negative_numbers = true)]
    pub volume: Option<f64>,

    /// How the dose was measured [default: from configuration]
    #[arg(long, value_enum)]
    pub dose_type: Option<DoseType>,

    /// Report format [default: from configuration]
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Exit with a non-zero code when the result is medium or high risk
    #[arg(long)]
    pub error_if_medium_risk: bool,

    /// Exit with a non-zero code when the result is high risk
    #[arg(long)]
    pub error_if_high_risk: bool,
}

impl EvaluateArgs {
    const fn gate_trips(&self, assessment: &Assessment) -> bool {
        match assessment.risk.level() {
            Some(RiskLevel::High) => self.error_if_high_risk || self.error_if_medium_risk,
            Some(RiskLevel::Medium) => self.error_if_medium_risk,
            Some(RiskLevel::Low) | None => false,
        }
    }
}

/// Validate the inputs, classify the dose and write the report. Returns the exit code.
pub fn evaluate(host: &mut impl Host, common: &Common, args: &EvaluateArgs) -> Result<i32> {
    let config = common.load_config()?;
    let dose_type = args.dose_type.unwrap_or(config.dose_type);

    let request = EvaluationRequest::new(args.organ.as_str(), args.dose, args.volume, dose_type)?;

    log::debug!(
        target: LOG_TARGET,
        "Evaluating '{}' at {} Gy ({}), volume {:?}",
        request.organ_id(),
        request.dose(),
        request.dose_type(),
        request.specified_volume()
    );

    let assessment = request.evaluate();
    if !assessment.is_known_organ() {
        log::warn!(target: LOG_TARGET, "No constraint data for organ '{}'", request.organ_id());
    }

    let mut out = host.output();
    match args.format.unwrap_or(config.format) {
        ReportFormat::Console => reports::console_evaluation(&mut out, &request, &assessment, config.precision, common.color())?,
        ReportFormat::Json => reports::json_evaluation(&mut out, &request, &assessment)?,
        ReportFormat::Csv => reports::csv_evaluation(&mut out, &request, &assessment)?,
    }

    if args.gate_trips(&assessment) {
        log::info!(target: LOG_TARGET, "'{}' is {}", request.organ_id(), assessment.risk);
        return Ok(RISK_EXIT_CODE);
    }

    Ok(0)
}
