use super::EvaluationRecord;
use crate::Result;
use crate::evaluation::{Assessment, EvaluationRequest};
use crate::summary::SummaryRow;
use ohno::IntoAppError;
use std::io::Write;

pub fn evaluation(out: &mut impl Write, request: &EvaluationRequest, assessment: &Assessment) -> Result<()> {
    let record = EvaluationRecord::new(request, assessment);
    serde_json::to_writer_pretty(&mut *out, &record).into_app_err("serializing the evaluation report")?;
    writeln!(out)?;
    Ok(())
}

pub fn summary(out: &mut impl Write, rows: &[SummaryRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows).into_app_err("serializing the constraint summary")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintTable;
    use crate::evaluation::DoseType;
    use crate::summary::summarize;
    use serde_json::{Value, json};

    #[test]
    fn test_evaluation_json() {
        let request = EvaluationRequest::new("brainstem", 59.0, Some(11.0), DoseType::D2cc).unwrap();
        let mut out = Vec::new();
        evaluation(&mut out, &request, &request.evaluate()).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "organ": "brainstem",
                "name": "Brainstem",
                "dose_gy": 59.0,
                "dose_type": "d2cc",
                "volume_cc": 11.0,
                "risk": "Exceeds safe limit",
                "risk_level": "high",
                "notes": "1–10 cc ≤59 Gy → minimal risk",
            })
        );
    }

    #[test]
    fn test_unknown_organ_json() {
        let request = EvaluationRequest::new("liver", 20.0, None, DoseType::Max).unwrap();
        let mut out = Vec::new();
        evaluation(&mut out, &request, &request.evaluate()).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["risk"], "Unknown OAR");
        assert_eq!(value["notes"], "No data");
        assert!(value["risk_level"].is_null());
        assert!(value["volume_cc"].is_null());
    }

    #[test]
    fn test_summary_json() {
        let rows = summarize(&ConstraintTable::standard());
        let mut out = Vec::new();
        summary(&mut out, &rows).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5]["organ"], "temporal_lobe");
        assert_eq!(rows[5]["name"], "Temporal Lobe");
        assert_eq!(rows[5]["dose_constraint"], 74.0);
    }
}
