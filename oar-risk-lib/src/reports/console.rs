use crate::Result;
use crate::evaluation::{Assessment, EvaluationRequest, RiskLevel};
use crate::misc::title_case;
use crate::summary::SummaryRow;
use owo_colors::{OwoColorize, Style};
use std::io::Write;

const OAR_HEADER: &str = "OAR";
const DOSE_HEADER: &str = "Dose Constraint (Gy)";
const NOTES_HEADER: &str = "Notes";

fn paint(text: &str, style: Style, color: bool) -> String {
    if color { text.style(style).to_string() } else { text.to_string() }
}

const fn risk_style(level: Option<RiskLevel>) -> Style {
    match level {
        Some(RiskLevel::Low) => Style::new().green(),
        Some(RiskLevel::Medium) => Style::new().yellow(),
        Some(RiskLevel::High) => Style::new().red().bold(),
        None => Style::new().dimmed(),
    }
}

/// Write a human-readable evaluation report.
///
/// Doses and volumes are printed with `precision` decimal places. The volume line only
/// appears when a volume greater than zero was given.
pub fn evaluation(
    out: &mut impl Write,
    request: &EvaluationRequest,
    assessment: &Assessment,
    precision: usize,
    color: bool,
) -> Result<()> {
    let title = format!("Evaluation Result for: {}", title_case(request.organ_id()));
    writeln!(out, "{}", paint(&title, Style::new().bold(), color))?;
    writeln!(out, "Dose Entered: {:.precision$} Gy ({})", request.dose(), request.dose_type())?;
    if let Some(volume) = request.specified_volume() {
        writeln!(out, "Volume: {volume:.precision$} cc")?;
    }

    let risk = paint(assessment.risk.label(), risk_style(assessment.risk.level()), color);
    writeln!(out, "Risk Assessment: {risk}")?;
    writeln!(out, "Clinical Notes: {}", assessment.notes)?;
    Ok(())
}

/// Write the constraint summary as an aligned text table.
pub fn summary(out: &mut impl Write, rows: &[SummaryRow], color: bool) -> Result<()> {
    let doses: Vec<String> = rows.iter().map(SummaryRow::dose_constraint_text).collect();

    let name_width = rows.iter().map(|row| row.name.len()).chain([OAR_HEADER.len()]).max().unwrap_or_default();
    let dose_width = doses.iter().map(String::len).chain([DOSE_HEADER.len()]).max().unwrap_or_default();

    let header = format!("{OAR_HEADER:<name_width$}  {DOSE_HEADER:>dose_width$}  {NOTES_HEADER}");
    writeln!(out, "{}", paint(&header, Style::new().bold(), color))?;

    for (row, dose) in rows.iter().zip(&doses) {
        writeln!(out, "{:<name_width$}  {dose:>dose_width$}  {}", row.name, row.notes)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintTable;
    use crate::evaluation::DoseType;
    use crate::summary::summarize;

    fn render_evaluation(organ: &str, dose: f64, volume: Option<f64>, precision: usize) -> String {
        let request = EvaluationRequest::new(organ, dose, volume, DoseType::Max).unwrap();
        let mut out = Vec::new();
        evaluation(&mut out, &request, &request.evaluate(), precision, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_evaluation_report() {
        let text = render_evaluation("optic_nerve", 55.0, None, 1);
        assert_eq!(
            text,
            "Evaluation Result for: Optic Nerve\n\
             Dose Entered: 55.0 Gy (max)\n\
             Risk Assessment: Minimal risk\n\
             Clinical Notes: 55–60 Gy → 3–7% risk; >60 Gy → 7–20% risk of RION\n"
        );
    }

    #[test]
    fn test_evaluation_report_with_volume() {
        let text = render_evaluation("brainstem", 59.0, Some(10.0), 2);
        assert!(text.contains("Dose Entered: 59.00 Gy (max)\n"));
        assert!(text.contains("Volume: 10.00 cc\n"));
        assert!(text.contains("Risk Assessment: Low risk (<5%)\n"));
    }

    #[test]
    fn test_zero_volume_not_echoed() {
        let text = render_evaluation("brainstem", 40.0, Some(0.0), 1);
        assert!(!text.contains("Volume:"));
    }

    #[test]
    fn test_unknown_organ_report() {
        let text = render_evaluation("unknown_organ_xyz", 50.0, None, 1);
        assert!(text.starts_with("Evaluation Result for: Unknown Organ Xyz\n"));
        assert!(text.contains("Risk Assessment: Unknown OAR\n"));
        assert!(text.contains("Clinical Notes: No data\n"));
    }

    #[test]
    fn test_color_adds_escape_codes() {
        let request = EvaluationRequest::new("spinal_cord", 60.0, None, DoseType::Max).unwrap();
        let mut out = Vec::new();
        evaluation(&mut out, &request, &request.evaluate(), 1, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Exceeds safe limit"));
    }

    #[test]
    fn test_summary_table() {
        let rows = summarize(&ConstraintTable::standard());
        let mut out = Vec::new();
        summary(&mut out, &rows, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "OAR            Dose Constraint (Gy)  Notes");
        assert_eq!(lines[1], "Spinal Cord                      50  >50 Gy → increased risk of myelopathy");
        assert_eq!(lines[5], "Hippocampus                     7.3  >7.3 Gy to 40% → potential memory decline");
    }
}
