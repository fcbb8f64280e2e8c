/// Facility coverage scoring
///
/// Additive keyword rules over the free-text fields, minus a penalty when the
/// record carries quality flags, floored at zero. The table is fixed: changing
/// it changes every downstream intensity.

use crate::constants::{
    FLAG_PENALTY, ICU_WEIGHT, OBSTETRICS_WEIGHT, OXYGEN_WEIGHT, PEDIATRICS_WEIGHT, SURGERY_WEIGHT,
};
use crate::facility::Facility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Specialties,
    Capabilities,
    Equipment,
    Services,
}

impl TextField {
    pub fn read(self, facility: &Facility) -> Option<&str> {
        match self {
            TextField::Specialties => facility.specialties.as_deref(),
            TextField::Capabilities => facility.capabilities.as_deref(),
            TextField::Equipment => facility.equipment.as_deref(),
            TextField::Services => facility.services.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub keyword: &'static str,
    pub fields: &'static [TextField],
    pub weight: f64,
}

impl ScoringRule {
    /// Case-insensitive substring match in any of the rule's fields
    pub fn matches(&self, facility: &Facility) -> bool {
        self.fields.iter().any(|field| {
            field
                .read(facility)
                .is_some_and(|text| text.to_lowercase().contains(self.keyword))
        })
    }
}

pub const SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        keyword: "oxygen",
        fields: &[TextField::Equipment, TextField::Capabilities],
        weight: OXYGEN_WEIGHT,
    },
    ScoringRule {
        keyword: "icu",
        fields: &[TextField::Capabilities, TextField::Equipment],
        weight: ICU_WEIGHT,
    },
    ScoringRule {
        keyword: "surgery",
        fields: &[TextField::Capabilities, TextField::Services],
        weight: SURGERY_WEIGHT,
    },
    ScoringRule {
        keyword: "obstetrics",
        fields: &[TextField::Specialties],
        weight: OBSTETRICS_WEIGHT,
    },
    ScoringRule {
        keyword: "pediatrics",
        fields: &[TextField::Specialties],
        weight: PEDIATRICS_WEIGHT,
    },
];

pub fn coverage_score(facility: &Facility) -> f64 {
    let earned: f64 = SCORING_RULES
        .iter()
        .filter(|rule| rule.matches(facility))
        .map(|rule| rule.weight)
        .sum();
    let penalty = if facility.has_flags() { FLAG_PENALTY } else { 0.0 };
    (earned - penalty).max(0.0)
}
