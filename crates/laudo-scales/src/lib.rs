//! laudo-scales
//!
//! Reporting-scale definitions. Pure data and pure functions, no I/O.
//! Defines the categories, risk labels, recommendation tables, and fallback
//! option catalog of each supported scale, plus the lesion scorer and the
//! case classifier that turn a `Case` into one category.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod scales;
pub mod scoring;

use laudo_core::category::{Category, ScaleId};
use laudo_core::option::{CatalogKey, CatalogOption};

/// Static description of one category of a scale.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub category: u8,
    pub risk_label: &'static str,
    pub recommendation: &'static str,
}

/// Trait implemented by each supported reporting scale.
pub trait Scale: Send + Sync {
    fn id(&self) -> ScaleId;

    /// Display name, e.g. "BI-RADS®".
    fn name(&self) -> &str;

    /// Exam title used as the full report's heading.
    fn exam_title(&self) -> &str;

    /// Whether the report has a technique section.
    fn records_technique(&self) -> bool;

    /// One entry per category, lowest first.
    fn categories(&self) -> &[CategoryInfo];

    /// Keys this scale's findings draw options from.
    fn catalog_keys(&self) -> &[CatalogKey];

    /// Built-in options for `key`. Non-empty for every key in
    /// [`Scale::catalog_keys`].
    fn fallback_options(&self, key: CatalogKey) -> &[CatalogOption];

    fn category_info(&self, category: Category) -> Option<&CategoryInfo> {
        self.categories()
            .iter()
            .find(|info| info.category == category.value())
    }

    fn risk_label(&self, category: Category) -> &str {
        self.category_info(category)
            .map(|info| info.risk_label)
            .unwrap_or_default()
    }

    fn recommendation(&self, category: Category) -> &str {
        self.category_info(category)
            .map(|info| info.recommendation)
            .unwrap_or_default()
    }

    /// Format as "BI-RADS® 4".
    fn category_code(&self, category: Category) -> String {
        format!("{} {}", self.name(), category)
    }
}

/// Return all registered scales.
pub fn all_scales() -> Vec<&'static dyn Scale> {
    vec![scale_for(ScaleId::Birads), scale_for(ScaleId::Pirads)]
}

/// The definition of a scale.
pub fn scale_for(id: ScaleId) -> &'static dyn Scale {
    match id {
        ScaleId::Birads => &scales::birads::Birads,
        ScaleId::Pirads => &scales::pirads::Pirads,
    }
}
