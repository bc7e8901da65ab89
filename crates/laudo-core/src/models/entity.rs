use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::measurements;

/// Maximum number of finding entities (nodules or lesions) per case.
pub const MAX_FINDING_ENTITIES: usize = 6;

/// Three linear measurements of a structure, in centimetres. Never
/// negative, however it was built or deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Dimensions {
    /// Negative and non-finite inputs are stored as 0.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: non_negative(x),
            y: non_negative(y),
            z: non_negative(z),
        }
    }

    /// The same measurements with negative and non-finite values zeroed.
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y, self.z)
    }

    /// Build from the three raw form inputs.
    pub fn parse(x: &str, y: &str, z: &str) -> Self {
        Self::new(
            measurements::parse_locale_number(x),
            measurements::parse_locale_number(y),
            measurements::parse_locale_number(z),
        )
    }

    pub fn volume(&self) -> f64 {
        measurements::volume(self.x, self.y, self.z)
    }

    pub fn is_empty(&self) -> bool {
        self.measured().is_empty()
    }

    /// The dimensions actually filled in, in entry order.
    pub fn measured(&self) -> Vec<f64> {
        [self.x, self.y, self.z]
            .into_iter()
            .filter(|d| d.is_finite() && *d > 0.0)
            .collect()
    }

    /// `"1,2 x 0,8 x 1,0 cm"`, or `None` when nothing is measured.
    pub fn describe(&self) -> Option<String> {
        let measured = self.measured();
        if measured.is_empty() {
            return None;
        }
        let parts: Vec<String> = measured
            .iter()
            .map(|d| measurements::format_locale_number(*d, 1))
            .collect();
        Some(format!("{} cm", parts.join(" x ")))
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            x: f64,
            #[serde(default)]
            y: f64,
            #[serde(default)]
            z: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Dimensions::new(raw.x, raw.y, raw.z))
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// How an entity relates to the same entity on a prior exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComparisonState {
    Stable,
    Grew,
    Shrank,
    New,
}

/// Per-entity comparison with a prior study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorComparison {
    #[serde(default)]
    pub has_comparison: bool,
    #[serde(default)]
    pub prior_date: Option<String>,
    #[serde(default)]
    pub state: Option<ComparisonState>,
}

impl PriorComparison {
    /// The comparison state, only when the comparison is switched on.
    pub fn active_state(&self) -> Option<ComparisonState> {
        if self.has_comparison { self.state } else { None }
    }

    pub fn apply(&mut self, field: PriorComparisonField) {
        match field {
            PriorComparisonField::HasComparison(v) => self.has_comparison = v,
            PriorComparisonField::PriorDate(v) => self.prior_date = v,
            PriorComparisonField::State(v) => self.state = v,
        }
    }
}

/// Field-level update of a [`PriorComparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum PriorComparisonField {
    HasComparison(bool),
    PriorDate(Option<String>),
    State(Option<ComparisonState>),
}

/// Append `make()` to `list` unless it is full. Returns the new index.
pub(crate) fn push_capped<T>(list: &mut Vec<T>, make: impl FnOnce() -> T) -> Option<usize> {
    if list.len() >= MAX_FINDING_ENTITIES {
        return None;
    }
    list.push(make());
    Some(list.len() - 1)
}

/// Remove by index; an out-of-range index is a no-op.
pub(crate) fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}
