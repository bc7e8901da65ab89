use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The reporting scale a case is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleId {
    /// Breast imaging (mammography), categories 0–6.
    Birads,
    /// Prostate multiparametric MRI, categories 1–5.
    Pirads,
}

impl ScaleId {
    /// Lowest category of the scale. For BI-RADS this is the "incomplete"
    /// category forced by a technically inadequate study.
    pub fn min_category(self) -> Category {
        match self {
            ScaleId::Birads => Category(0),
            ScaleId::Pirads => Category(1),
        }
    }

    pub fn max_category(self) -> Category {
        match self {
            ScaleId::Birads => Category(6),
            ScaleId::Pirads => Category(5),
        }
    }

    /// Category of a case with nothing suspicious selected.
    pub fn baseline(self) -> Category {
        match self {
            ScaleId::Birads => Category(1),
            ScaleId::Pirads => Category(2),
        }
    }

    pub fn contains(self, category: Category) -> bool {
        category >= self.min_category() && category <= self.max_category()
    }

    /// Every category of the scale, lowest first.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        (self.min_category().0..=self.max_category().0).map(Category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleId::Birads => "birads",
            ScaleId::Pirads => "pirads",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity category. Ordering is the clinical severity order, so
/// "most severe wins" is a plain `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Category(pub u8);

impl Category {
    /// Parse a category code (e.g. `"4"`) for the given scale. Returns
    /// `None` for anything that is not a category of that scale.
    pub fn parse(scale: ScaleId, text: &str) -> Option<Category> {
        let value: u8 = text.trim().parse().ok()?;
        let category = Category(value);
        scale.contains(category).then_some(category)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One step up, saturating at the scale maximum.
    pub fn step_up(self, scale: ScaleId) -> Category {
        Category(self.0.saturating_add(1)).min(scale.max_category())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
