use super::{Limits, Organ};
use serde::Serialize;

/// One row of the constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OarConstraint {
    pub organ: Organ,
    pub limits: Limits,
    pub notes: &'static str,
}

impl OarConstraint {
    #[must_use]
    pub const fn new(organ: Organ, limits: Limits, notes: &'static str) -> Self {
        Self { organ, limits, notes }
    }
}
