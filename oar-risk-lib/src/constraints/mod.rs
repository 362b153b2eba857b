//! Per-organ dose constraints.

mod constraint_table;
mod limits;
mod oar_constraint;
mod organ;

pub use constraint_table::ConstraintTable;
pub use limits::Limits;
pub use oar_constraint::OarConstraint;
pub use organ::Organ;
