//! Dose-to-risk classification.

use super::{Assessment, DoseType, RiskCategory};
use crate::constraints::{ConstraintTable, Limits, OarConstraint};

/// Volumes up to this many cc qualify for the brainstem's small-volume ceiling.
pub const SMALL_VOLUME_LIMIT_CC: f64 = 10.0;

/// Ceiling applied by the generic rule when an entry has no `max_dose`.
pub const DEFAULT_CEILING_GY: f64 = 100.0;

/// Classify a dose for the organ named by `organ_id` using the standard constraint table.
///
/// `dose` is in Gy and `volume` in cc; both are expected to be non-negative. A zero volume
/// counts as not specified. `dose_type` is accepted for the caller's record but does not
/// affect the outcome.
///
/// Unknown organs produce [`RiskCategory::UnknownOar`] with `"No data"` notes. Every
/// threshold is inclusive: a dose equal to a limit lands in the lower-risk band.
#[must_use]
pub fn evaluate(organ_id: &str, dose: f64, volume: Option<f64>, _dose_type: DoseType) -> Assessment {
    ConstraintTable::standard()
        .lookup(organ_id)
        .map_or_else(Assessment::unknown_organ, |entry| Assessment::new(classify(entry, dose, volume), entry.notes))
}

/// Apply an entry's rule to a dose.
///
/// A brainstem dose only uses the small-volume ceiling when a volume of at most 10 cc is
/// given; otherwise it falls through to the generic `max_dose` rule.
#[must_use]
pub fn classify(entry: &OarConstraint, dose: f64, volume: Option<f64>) -> RiskCategory {
    match entry.limits {
        Limits::Brainstem { max_dose_10cc, .. } if is_small_volume(volume) => {
            if dose <= max_dose_10cc {
                RiskCategory::LowRisk
            } else {
                RiskCategory::HighRisk
            }
        }

        Limits::OpticNerve { max_dose, caution_dose } => {
            if dose <= max_dose {
                RiskCategory::MinimalRisk
            } else if dose <= caution_dose {
                RiskCategory::ModerateRisk
            } else {
                RiskCategory::HighRisk
            }
        }

        Limits::Retina { max_dose, threshold } => {
            if dose <= threshold {
                RiskCategory::NegligibleRisk
            } else if dose <= max_dose {
                RiskCategory::LowRisk
            } else {
                RiskCategory::ModerateToHighRisk
            }
        }

        Limits::Hippocampus { mean_dose_40pct } => {
            if dose <= mean_dose_40pct {
                RiskCategory::LowMemoryImpairmentRisk
            } else {
                RiskCategory::PotentialMemoryDecline
            }
        }

        Limits::TemporalLobe { d2cc } => {
            if dose <= d2cc {
                RiskCategory::AcceptableExposure
            } else {
                RiskCategory::IncreasedTliRisk
            }
        }

        Limits::SpinalCord { .. } | Limits::Brainstem { .. } => {
            if dose <= entry.limits.max_dose().unwrap_or(DEFAULT_CEILING_GY) {
                RiskCategory::WithinSafeLimit
            } else {
                RiskCategory::ExceedsSafeLimit
            }
        }
    }
}

fn is_small_volume(volume: Option<f64>) -> bool {
    volume.is_some_and(|v| v > 0.0 && v <= SMALL_VOLUME_LIMIT_CC)
}
