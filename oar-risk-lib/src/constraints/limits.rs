use serde::Serialize;

/// Organ-specific dose limits, all in Gy.
///
/// Each variant carries exactly the thresholds its organ's rule reads, so a rule can never
/// reach for a limit its organ does not define.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Limits {
    SpinalCord {
        max_dose: f64,
    },

    Brainstem {
        max_dose: f64,
        /// Ceiling when the irradiated volume is at most 10 cc.
        max_dose_10cc: f64,
    },

    OpticNerve {
        max_dose: f64,
        /// Above this the risk escalates to high.
        caution_dose: f64,
    },

    Retina {
        max_dose: f64,
        /// Below this the risk is negligible.
        threshold: f64,
    },

    Hippocampus {
        /// Mean dose to 40% of the volume.
        mean_dose_40pct: f64,
    },

    TemporalLobe {
        /// Dose to the maximally exposed 2 cc.
        d2cc: f64,
    },
}

impl Limits {
    /// The whole-organ or point-dose ceiling, for organs that define one.
    #[must_use]
    pub const fn max_dose(&self) -> Option<f64> {
        match *self {
            Self::SpinalCord { max_dose }
            | Self::Brainstem { max_dose, .. }
            | Self::OpticNerve { max_dose, .. }
            | Self::Retina { max_dose, .. } => Some(max_dose),
            Self::Hippocampus { .. } | Self::TemporalLobe { .. } => None,
        }
    }

    #[must_use]
    pub const fn d2cc(&self) -> Option<f64> {
        match *self {
            Self::TemporalLobe { d2cc } => Some(d2cc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn mean_dose_40pct(&self) -> Option<f64> {
        match *self {
            Self::Hippocampus { mean_dose_40pct } => Some(mean_dose_40pct),
            _ => None,
        }
    }

    /// The single dose constraint quoted for this organ in summaries.
    ///
    /// Precedence is `max_dose`, then `d2cc`, then `mean_dose_40pct`.
    #[must_use]
    pub fn representative_dose(&self) -> Option<f64> {
        self.max_dose().or_else(|| self.d2cc()).or_else(|| self.mean_dose_40pct())
    }
}
