//! The constraint summary table: one representative dose limit per organ.

use crate::constraints::{ConstraintTable, Organ};
use serde::Serialize;

/// Text shown in place of a missing representative dose.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub organ: Organ,
    pub name: &'static str,
    /// The quoted constraint in Gy, if the organ defines one.
    pub dose_constraint: Option<f64>,
    pub notes: &'static str,
}

impl SummaryRow {
    /// The dose constraint as text, `N/A` when there is none.
    #[must_use]
    pub fn dose_constraint_text(&self) -> String {
        self.dose_constraint.map_or_else(|| NOT_AVAILABLE.to_string(), |dose| dose.to_string())
    }
}

/// Build the summary rows, in table order.
#[must_use]
pub fn summarize(table: &ConstraintTable) -> Vec<SummaryRow> {
    table
        .iter()
        .map(|entry| SummaryRow {
            organ: entry.organ,
            name: entry.organ.display_name(),
            dose_constraint: entry.limits.representative_dose(),
            notes: entry.notes,
        })
        .collect()
}
