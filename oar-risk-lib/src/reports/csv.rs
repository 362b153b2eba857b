use super::EvaluationRecord;
use crate::Result;
use crate::evaluation::{Assessment, EvaluationRequest};
use crate::summary::SummaryRow;
use ohno::IntoAppError;
use std::io::Write;

pub fn evaluation(out: &mut impl Write, request: &EvaluationRequest, assessment: &Assessment) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .serialize(EvaluationRecord::new(request, assessment))
        .into_app_err("writing the evaluation CSV row")?;
    writer.flush()?;
    Ok(())
}

pub fn summary(out: &mut impl Write, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["organ", "name", "dose_constraint_gy", "notes"])
        .into_app_err("writing the summary CSV header")?;

    for row in rows {
        writer
            .write_record([row.organ.id(), row.name, &row.dose_constraint_text(), row.notes])
            .into_app_err_with(|| format!("writing the summary CSV row for '{}'", row.organ))?;
    }

    writer.flush()?;
    Ok(())
}
