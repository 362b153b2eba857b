//! Risk evaluation for a single organ dose.

mod assessment;
mod dose_type;
mod evaluator;
mod request;
mod risk_category;
mod risk_level;

pub use assessment::{Assessment, NO_DATA_NOTES};
pub use dose_type::DoseType;
pub use evaluator::{DEFAULT_CEILING_GY, SMALL_VOLUME_LIMIT_CC, classify, evaluate};
pub use request::{EvaluationRequest, InvalidInput};
pub use risk_category::RiskCategory;
pub use risk_level::RiskLevel;
