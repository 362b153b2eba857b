use super::RiskCategory;
use serde::Serialize;

/// Notes reported for organs that are not in the constraint table.
pub const NO_DATA_NOTES: &str = "No data";

/// The outcome of evaluating a dose for one organ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub risk: RiskCategory,
    pub notes: &'static str,
}

impl Assessment {
    #[must_use]
    pub const fn new(risk: RiskCategory, notes: &'static str) -> Self {
        Self { risk, notes }
    }

    /// The result for an organ identifier with no table entry.
    #[must_use]
    pub const fn unknown_organ() -> Self {
        Self::new(RiskCategory::UnknownOar, NO_DATA_NOTES)
    }

    #[must_use]
    pub const fn is_known_organ(&self) -> bool {
        !matches!(self.risk, RiskCategory::UnknownOar)
    }
}
