//! Rendering of evaluation results and the constraint summary.

mod console;
mod csv;
mod json;

pub use self::console::{evaluation as console_evaluation, summary as console_summary};
pub use self::csv::{evaluation as csv_evaluation, summary as csv_summary};
pub use self::json::{evaluation as json_evaluation, summary as json_summary};

use crate::evaluation::{Assessment, DoseType, EvaluationRequest, RiskCategory, RiskLevel};
use crate::misc::title_case;
use serde::Serialize;

/// Flat, serializable view of one evaluation, shared by the machine-readable formats.
#[derive(Debug, Serialize)]
struct EvaluationRecord<'a> {
    organ: &'a str,
    name: String,
    dose_gy: f64,
    dose_type: DoseType,
    volume_cc: Option<f64>,
    risk: RiskCategory,
    risk_level: Option<RiskLevel>,
    notes: &'static str,
}

impl<'a> EvaluationRecord<'a> {
    fn new(request: &'a EvaluationRequest, assessment: &Assessment) -> Self {
        Self {
            organ: request.organ_id(),
            name: title_case(request.organ_id()),
            dose_gy: request.dose(),
            dose_type: request.dose_type(),
            volume_cc: request.specified_volume(),
            risk: assessment.risk,
            risk_level: assessment.risk.level(),
            notes: assessment.notes,
        }
    }
}
