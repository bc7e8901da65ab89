//! Per-lesion scoring for multiparametric scales.
//!
//! A [`Guideline`] is data: which sequence dominates in each zone, and an
//! ordered list of modifier rules that may lift the dominant score by one
//! step. Swapping guideline versions never touches [`score_lesion`].

use std::fmt;

use laudo_core::category::{Category, ScaleId};
use laudo_core::models::{ContrastUptake, Lesion};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Valid range of a sequence sub-score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SEQUENCE_SCORE_RANGE: ScoreRange = ScoreRange { min: 1, max: 5 };

/// An imaging sequence that carries its own score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sequence {
    T2,
    Dwi,
}

impl Sequence {
    pub fn other(self) -> Sequence {
        match self {
            Sequence::T2 => Sequence::Dwi,
            Sequence::Dwi => Sequence::T2,
        }
    }

    fn score(self, lesion: &Lesion) -> Option<u8> {
        match self {
            Sequence::T2 => lesion.t2,
            Sequence::Dwi => lesion.dwi,
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::T2 => f.write_str("T2"),
            Sequence::Dwi => f.write_str("DWI"),
        }
    }
}

/// Anatomical zone class, as far as scoring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ZoneClass {
    Peripheral,
    Transition,
    /// Central zone and anterior fibromuscular stroma.
    CentralStroma,
}

impl ZoneClass {
    /// Map a zone catalog value to its class.
    pub fn from_value(value: &str) -> Option<ZoneClass> {
        match value {
            "peripheral" => Some(ZoneClass::Peripheral),
            "transition" => Some(ZoneClass::Transition),
            "central" | "anterior_stroma" => Some(ZoneClass::CentralStroma),
            _ => None,
        }
    }
}

/// How the dominant score of a zone is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Sequence(Sequence),
    /// The higher of the two sequence scores.
    HigherOf,
}

/// The values a modifier predicate can look at.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub dominant: u8,
    pub secondary: Option<u8>,
    pub dce: ContrastUptake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Dominant score equals `dominant` and contrast uptake is positive.
    ContrastPositive { dominant: u8 },
    /// Dominant score equals `dominant` and the other sequence scores at
    /// least `secondary`.
    SecondaryAtLeast { dominant: u8, secondary: u8 },
}

impl Predicate {
    pub fn matches(&self, inputs: &ScoreInputs) -> bool {
        match *self {
            Predicate::ContrastPositive { dominant } => {
                inputs.dominant == dominant && inputs.dce == ContrastUptake::Positive
            }
            Predicate::SecondaryAtLeast {
                dominant,
                secondary,
            } => inputs.dominant == dominant && inputs.secondary.is_some_and(|s| s >= secondary),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    StepUp,
    SetTo(u8),
}

impl Transform {
    /// A transform only ever raises the dominant score, by one step at most.
    pub fn apply(&self, dominant: u8) -> u8 {
        let target = match *self {
            Transform::StepUp => dominant.saturating_add(1),
            Transform::SetTo(value) => value,
        };
        target.clamp(dominant, dominant.saturating_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierRule {
    pub zone: ZoneClass,
    pub when: Predicate,
    pub then: Transform,
}

/// A versioned scoring guideline.
#[derive(Debug, Clone, Copy)]
pub struct Guideline {
    pub version: &'static str,
    pub dominance: &'static [(ZoneClass, Dominance)],
    /// Evaluated in order; the first matching rule applies.
    pub modifiers: &'static [ModifierRule],
}

impl Guideline {
    pub fn dominance_for(&self, zone: ZoneClass) -> Dominance {
        self.dominance
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, d)| *d)
            .unwrap_or(Dominance::HigherOf)
    }

    /// Look a guideline up by version string ("2.1", "2").
    pub fn by_version(version: &str) -> Option<&'static Guideline> {
        GUIDELINES
            .iter()
            .copied()
            .find(|g| g.version == version.trim().trim_start_matches(['v', 'V']))
    }
}

const DOMINANCE: &[(ZoneClass, Dominance)] = &[
    (ZoneClass::Peripheral, Dominance::Sequence(Sequence::Dwi)),
    (ZoneClass::Transition, Dominance::Sequence(Sequence::T2)),
    (ZoneClass::CentralStroma, Dominance::HigherOf),
];

/// PI-RADS v2.1.
pub const PIRADS_V2_1: Guideline = Guideline {
    version: "2.1",
    dominance: DOMINANCE,
    modifiers: &[
        ModifierRule {
            zone: ZoneClass::Peripheral,
            when: Predicate::ContrastPositive { dominant: 3 },
            then: Transform::SetTo(4),
        },
        ModifierRule {
            zone: ZoneClass::Transition,
            when: Predicate::SecondaryAtLeast {
                dominant: 2,
                secondary: 4,
            },
            then: Transform::SetTo(3),
        },
        ModifierRule {
            zone: ZoneClass::Transition,
            when: Predicate::SecondaryAtLeast {
                dominant: 3,
                secondary: 5,
            },
            then: Transform::SetTo(4),
        },
    ],
};

/// PI-RADS v2. Same as v2.1 without the transition-zone T2 2 upgrade.
pub const PIRADS_V2: Guideline = Guideline {
    version: "2",
    dominance: DOMINANCE,
    modifiers: &[
        ModifierRule {
            zone: ZoneClass::Peripheral,
            when: Predicate::ContrastPositive { dominant: 3 },
            then: Transform::SetTo(4),
        },
        ModifierRule {
            zone: ZoneClass::Transition,
            when: Predicate::SecondaryAtLeast {
                dominant: 3,
                secondary: 5,
            },
            then: Transform::SetTo(4),
        },
    ],
};

pub const GUIDELINES: &[&Guideline] = &[&PIRADS_V2_1, &PIRADS_V2];

/// Score one lesion against `guideline`.
///
/// Pure function of the lesion's fields. Fails on an out-of-range
/// sub-score, an unset or unknown zone, or an unset dominant sequence.
pub fn score_lesion(lesion: &Lesion, guideline: &Guideline) -> Result<Category, ScoringError> {
    for sequence in [Sequence::T2, Sequence::Dwi] {
        if let Some(value) = sequence.score(lesion)
            && !SEQUENCE_SCORE_RANGE.contains(value)
        {
            return Err(ScoringError::OutOfRangeScore { sequence, value });
        }
    }

    let zone = lesion
        .zone
        .as_deref()
        .and_then(ZoneClass::from_value)
        .ok_or(ScoringError::MissingZone)?;

    let (dominant, secondary) = match guideline.dominance_for(zone) {
        Dominance::Sequence(sequence) => {
            let dominant = sequence
                .score(lesion)
                .ok_or(ScoringError::MissingScore(sequence))?;
            (dominant, sequence.other().score(lesion))
        }
        Dominance::HigherOf => match (lesion.t2, lesion.dwi) {
            (Some(t2), Some(dwi)) => (t2.max(dwi), Some(t2.min(dwi))),
            (Some(only), None) | (None, Some(only)) => (only, None),
            (None, None) => return Err(ScoringError::MissingScore(Sequence::Dwi)),
        },
    };

    let inputs = ScoreInputs {
        dominant,
        secondary,
        dce: lesion.dce,
    };
    let score = guideline
        .modifiers
        .iter()
        .find(|rule| rule.zone == zone && rule.when.matches(&inputs))
        .map(|rule| rule.then.apply(dominant))
        .unwrap_or(dominant);

    Ok(Category(score).min(ScaleId::Pirads.max_category()))
}
