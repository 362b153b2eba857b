use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// An organ at risk with an entry in the constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, EnumString, IntoStaticStr, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Organ {
    SpinalCord,
    Brainstem,
    OpticNerve,
    Retina,
    Hippocampus,
    TemporalLobe,
}

impl Organ {
    /// The `snake_case` identifier used to select this organ, e.g. `optic_nerve`.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SpinalCord => "Spinal Cord",
            Self::Brainstem => "Brainstem",
            Self::OpticNerve => "Optic Nerve",
            Self::Retina => "Retina",
            Self::Hippocampus => "Hippocampus",
            Self::TemporalLobe => "Temporal Lobe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ids_are_snake_case() {
        let ids: Vec<_> = Organ::iter().map(Organ::id).collect();
        assert_eq!(
            ids,
            ["spinal_cord", "brainstem", "optic_nerve", "retina", "hippocampus", "temporal_lobe"]
        );
    }

    #[test]
    fn test_parse_round_trips_through_id() {
        for organ in Organ::iter() {
            assert_eq!(organ.id().parse::<Organ>().unwrap(), organ);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let _ = "Spinal_Cord".parse::<Organ>().unwrap_err();
        let _ = "OPTIC_NERVE".parse::<Organ>().unwrap_err();
        let _ = "optic nerve".parse::<Organ>().unwrap_err();
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Organ::TemporalLobe.to_string(), "temporal_lobe");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Organ::SpinalCord.display_name(), "Spinal Cord");
        assert_eq!(Organ::OpticNerve.display_name(), "Optic Nerve");
        assert_eq!(Organ::Brainstem.display_name(), "Brainstem");
    }

    #[test]
    fn test_serializes_as_id() {
        for organ in Organ::iter() {
            assert_eq!(serde_json::to_string(&organ).unwrap(), format!("\"{}\"", organ.id()));
        }
    }
}
