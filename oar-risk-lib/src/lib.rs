#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Organ-at-risk dose evaluation.
//!
//! Maps a radiation dose (and optionally an irradiated volume) for a named organ at risk to a
//! qualitative risk category and a clinical note, using a small fixed table of per-organ dose
//! thresholds drawn from published guidelines. This is a planning-room reference, not a
//! certified clinical decision system.
//!
//! ```
//! use oar_risk_lib::evaluation::{DoseType, RiskCategory, evaluate};
//!
//! let assessment = evaluate("optic_nerve", 58.0, None, DoseType::Max);
//! assert_eq!(assessment.risk, RiskCategory::ModerateRisk);
//! ```
//!
//! # Module Organization
//!
//! - [`constraints`]: The organ constraint table
//! - [`evaluation`]: Dose-to-risk classification and input validation
//! - [`summary`]: One representative constraint per organ
//! - `reports`: Console, JSON and CSV rendering
//! - `commands`: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod constraints;
pub mod evaluation;
pub mod summary;

macro_rules! declare_modules {
    ($($mod:ident),+ $(,)?) => {
        $(
            #[cfg(debug_assertions)]
            pub mod $mod;
            #[cfg(not(debug_assertions))]
            mod $mod;
        )+
    };
}

declare_modules!(commands, misc, reports);

pub use crate::commands::{Host, run};
