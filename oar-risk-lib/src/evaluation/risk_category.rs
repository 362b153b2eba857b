use super::RiskLevel;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Serialize, Serializer};

/// The qualitative outcome of evaluating a dose against an organ's constraints.
///
/// The percentages in the labels are fixed literature figures, not computed probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    NegligibleRisk,
    MinimalRisk,
    LowRisk,
    ModerateRisk,
    ModerateToHighRisk,
    HighRisk,
    LowMemoryImpairmentRisk,
    PotentialMemoryDecline,
    AcceptableExposure,
    IncreasedTliRisk,
    WithinSafeLimit,
    ExceedsSafeLimit,
    UnknownOar,
}

impl RiskCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NegligibleRisk => "Negligible risk",
            Self::MinimalRisk => "Minimal risk",
            Self::LowRisk => "Low risk (<5%)",
            Self::ModerateRisk => "Moderate risk (3–7%)",
            Self::ModerateToHighRisk => "Moderate to high risk (>5%)",
            Self::HighRisk => "High risk (>10%)",
            Self::LowMemoryImpairmentRisk => "Low risk of memory impairment",
            Self::PotentialMemoryDecline => "Potential memory decline",
            Self::AcceptableExposure => "Acceptable exposure",
            Self::IncreasedTliRisk => "Increased risk of TLI",
            Self::WithinSafeLimit => "Within safe limit",
            Self::ExceedsSafeLimit => "Exceeds safe limit",
            Self::UnknownOar => "Unknown OAR",
        }
    }

    /// The lowest band of each rule is low, the optic nerve's middle band is medium and the
    /// highest band of each rule is high. Unknown organs have no level.
    #[must_use]
    pub const fn level(self) -> Option<RiskLevel> {
        match self {
            Self::NegligibleRisk
            | Self::MinimalRisk
            | Self::LowRisk
            | Self::LowMemoryImpairmentRisk
            | Self::AcceptableExposure
            | Self::WithinSafeLimit => Some(RiskLevel::Low),
            Self::ModerateRisk => Some(RiskLevel::Medium),
            Self::ModerateToHighRisk
            | Self::HighRisk
            | Self::PotentialMemoryDecline
            | Self::IncreasedTliRisk
            | Self::ExceedsSafeLimit => Some(RiskLevel::High),
            Self::UnknownOar => None,
        }
    }
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl Serialize for RiskCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
