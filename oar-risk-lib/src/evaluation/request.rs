use super::{Assessment, DoseType, evaluate};
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Rejection of an evaluation input that is outside the evaluator's domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    NegativeDose(f64),
    NonFiniteDose(f64),
    NegativeVolume(f64),
    NonFiniteVolume(f64),
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NegativeDose(dose) => write!(f, "dose must not be negative, got {dose} Gy"),
            Self::NonFiniteDose(dose) => write!(f, "dose must be a finite number, got {dose}"),
            Self::NegativeVolume(volume) => write!(f, "volume must not be negative, got {volume} cc"),
            Self::NonFiniteVolume(volume) => write!(f, "volume must be a finite number, got {volume}"),
        }
    }
}

impl core::error::Error for InvalidInput {}

/// A validated set of evaluation inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    organ_id: String,
    dose: f64,
    volume: Option<f64>,
    dose_type: DoseType,
}

impl EvaluationRequest {
    /// Validate the inputs.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the dose or volume is negative, NaN or infinite.
    pub fn new(organ_id: impl Into<String>, dose: f64, volume: Option<f64>, dose_type: DoseType) -> Result<Self, InvalidInput> {
        if !dose.is_finite() {
            return Err(InvalidInput::NonFiniteDose(dose));
        }

        if dose < 0.0 {
            return Err(InvalidInput::NegativeDose(dose));
        }

        if let Some(volume) = volume {
            if !volume.is_finite() {
                return Err(InvalidInput::NonFiniteVolume(volume));
            }

            if volume < 0.0 {
                return Err(InvalidInput::NegativeVolume(volume));
            }
        }

        Ok(Self {
            organ_id: organ_id.into(),
            dose,
            volume,
            dose_type,
        })
    }

    #[must_use]
    pub fn organ_id(&self) -> &str {
        &self.organ_id
    }

    #[must_use]
    pub const fn dose(&self) -> f64 {
        self.dose
    }

    #[must_use]
    pub const fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// The volume if one was given and it is greater than zero.
    #[must_use]
    pub fn specified_volume(&self) -> Option<f64> {
        self.volume.filter(|v| *v > 0.0)
    }

    #[must_use]
    pub const fn dose_type(&self) -> DoseType {
        self.dose_type
    }

    #[must_use]
    pub fn evaluate(&self) -> Assessment {
        evaluate(&self.organ_id, self.dose, self.volume, self.dose_type)
    }
}
