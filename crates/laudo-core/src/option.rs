use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::category::Category;

/// Key of a selectable-option list in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogKey {
    Indication,
    Laterality,
    Comparison,
    LymphNode,
    // Breast
    Density,
    BreastLocation,
    NoduleShape,
    Margins,
    NoduleDensity,
    CalcificationMorphology,
    Distribution,
    Asymmetry,
    // Prostate
    Zone,
    Sector,
    SeminalVesicles,
    Bone,
}

impl CatalogKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogKey::Indication => "indication",
            CatalogKey::Laterality => "laterality",
            CatalogKey::Comparison => "comparison",
            CatalogKey::LymphNode => "lymph_node",
            CatalogKey::Density => "density",
            CatalogKey::BreastLocation => "breast_location",
            CatalogKey::NoduleShape => "nodule_shape",
            CatalogKey::Margins => "margins",
            CatalogKey::NoduleDensity => "nodule_density",
            CatalogKey::CalcificationMorphology => "calcification_morphology",
            CatalogKey::Distribution => "distribution",
            CatalogKey::Asymmetry => "asymmetry",
            CatalogKey::Zone => "zone",
            CatalogKey::Sector => "sector",
            CatalogKey::SeminalVesicles => "seminal_vesicles",
            CatalogKey::Bone => "bone",
        }
    }

    /// Look a key up by its wire name.
    pub fn from_key(key: &str) -> Option<CatalogKey> {
        serde_json::from_value(serde_json::Value::String(key.to_string())).ok()
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable value of a finding, with the clinical metadata the
/// classifier and the narrative generators read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
    pub associated_category: Category,
    #[serde(default)]
    pub weight: i32,
    /// The rendered clause names the side ("na mama direita").
    #[serde(default)]
    pub uses_laterality: bool,
    /// The rendered clause carries an elapsed time in months.
    #[serde(default)]
    pub uses_months: bool,
}

impl CatalogOption {
    pub fn new(value: &str, label: &str, associated_category: u8) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            associated_category: Category(associated_category),
            weight: 0,
            uses_laterality: false,
            uses_months: false,
        }
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_laterality(mut self) -> Self {
        self.uses_laterality = true;
        self
    }

    pub fn with_months(mut self) -> Self {
        self.uses_months = true;
        self
    }
}
