//! The fixed table of clinical dose constraints.
//!
//! Values follow published normal-tissue guidelines (QUANTEC and related literature).

use super::{Limits, OarConstraint, Organ};

static STANDARD_CONSTRAINTS: [OarConstraint; 6] = [
    OarConstraint::new(Organ::SpinalCord, Limits::SpinalCord { max_dose: 50.0 }, ">50 Gy → increased risk of myelopathy"),
    OarConstraint::new(
        Organ::Brainstem,
        Limits::Brainstem {
            max_dose: 54.0,
            max_dose_10cc: 59.0,
        },
        "1–10 cc ≤59 Gy → minimal risk",
    ),
    OarConstraint::new(
        Organ::OpticNerve,
        Limits::OpticNerve {
            max_dose: 55.0,
            caution_dose: 60.0,
        },
        "55–60 Gy → 3–7% risk; >60 Gy → 7–20% risk of RION",
    ),
    OarConstraint::new(
        Organ::Retina,
        Limits::Retina {
            max_dose: 45.0,
            threshold: 30.0,
        },
        "30–50 Gy → risk increases; >50 Gy → ~5% retinopathy risk",
    ),
    OarConstraint::new(
        Organ::Hippocampus,
        Limits::Hippocampus { mean_dose_40pct: 7.3 },
        ">7.3 Gy to 40% → potential memory decline",
    ),
    OarConstraint::new(
        Organ::TemporalLobe,
        Limits::TemporalLobe { d2cc: 74.0 },
        ">70 Gy → risk of TLI; D2cc >74 Gy → high risk",
    ),
];

/// Read-only view over the organ constraint table.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintTable {
    entries: &'static [OarConstraint],
}

impl ConstraintTable {
    /// The built-in table used by the evaluator.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: &STANDARD_CONSTRAINTS,
        }
    }

    /// Find the entry for an organ identifier such as `"spinal_cord"`.
    ///
    /// Returns `None` for identifiers that are not in the table; that is an ordinary outcome
    /// rather than an error.
    #[must_use]
    pub fn lookup(&self, organ_id: &str) -> Option<&'static OarConstraint> {
        let organ = organ_id.parse::<Organ>().ok()?;
        self.find(organ)
    }

    /// Find the entry for a known organ.
    #[must_use]
    pub fn get(&self, organ: Organ) -> Option<&'static OarConstraint> {
        self.find(organ)
    }

    fn find(&self, organ: Organ) -> Option<&'static OarConstraint> {
        self.entries.iter().find(|entry| entry.organ == organ)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static OarConstraint> + use<> {
        self.entries.iter()
    }

    /// Identifiers accepted by [`lookup`](Self::lookup), in table order.
    pub fn organ_ids(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.iter().map(|entry| entry.organ.id())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConstraintTable {
    fn default() -> Self {
        Self::standard()
    }
}
