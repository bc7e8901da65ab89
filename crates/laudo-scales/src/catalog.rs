//! The option catalog seen by the classifier and the narrative generators.
//!
//! The catalog is an injected capability. [`FallbackCatalog`] serves the
//! built-in tables; [`LayeredCatalog`] serves options fetched by the host
//! and falls back per key whenever the live list is missing or empty.

use std::borrow::Cow;
use std::collections::HashMap;

use laudo_core::category::ScaleId;
use laudo_core::option::{CatalogKey, CatalogOption};

use crate::error::CatalogError;
use crate::scale_for;

pub trait OptionCatalog: Send + Sync {
    /// Ordered options for `key`. Non-empty for every key the scale knows.
    fn options(&self, scale: ScaleId, key: CatalogKey) -> Cow<'_, [CatalogOption]>;

    /// String-keyed lookup. Unknown keys yield an empty list.
    fn get_options(&self, scale: ScaleId, key: &str) -> Vec<CatalogOption> {
        match CatalogKey::from_key(key) {
            Some(key) => self.options(scale, key).into_owned(),
            None => Vec::new(),
        }
    }

    /// The option with `value` under `key`, if the catalog has it.
    fn find(&self, scale: ScaleId, key: CatalogKey, value: &str) -> Option<CatalogOption> {
        self.options(scale, key)
            .iter()
            .find(|option| option.value == value)
            .cloned()
    }

    /// Display label for `value`, or the raw value when the catalog does
    /// not know it.
    fn label(&self, scale: ScaleId, key: CatalogKey, value: &str) -> String {
        self.find(scale, key, value)
            .map(|option| option.label)
            .unwrap_or_else(|| value.to_string())
    }
}

/// The built-in option tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

impl OptionCatalog for FallbackCatalog {
    fn options(&self, scale: ScaleId, key: CatalogKey) -> Cow<'_, [CatalogOption]> {
        Cow::Borrowed(fallback(scale, key))
    }
}

fn fallback(scale: ScaleId, key: CatalogKey) -> &'static [CatalogOption] {
    scale_for(scale).fallback_options(key)
}

/// Live options with per-key fallback to the built-in tables.
#[derive(Debug, Clone, Default)]
pub struct LayeredCatalog {
    live: HashMap<(ScaleId, CatalogKey), Vec<CatalogOption>>,
}

impl LayeredCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live list for one key. Options whose category lies
    /// outside the scale are dropped; a list left empty serves the
    /// built-in options instead.
    pub fn insert(&mut self, scale: ScaleId, key: CatalogKey, options: Vec<CatalogOption>) {
        let options: Vec<CatalogOption> = options
            .into_iter()
            .filter(|option| {
                let valid = scale.contains(option.associated_category);
                if !valid {
                    tracing::warn!(
                        %scale,
                        %key,
                        value = %option.value,
                        category = %option.associated_category,
                        "dropping live option with a category outside the scale"
                    );
                }
                valid
            })
            .collect();
        if options.is_empty() {
            tracing::warn!(%scale, %key, "live catalog list is empty, using fallback");
        }
        self.live.insert((scale, key), options);
    }

    /// Load live options from JSON shaped as
    /// `{ "<scale>": { "<key>": [option, ...] } }`. Unknown keys are
    /// skipped.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, Vec<CatalogOption>>> =
            serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (scale_key, lists) in raw {
            let Ok(scale) =
                serde_json::from_value::<ScaleId>(serde_json::Value::String(scale_key.clone()))
            else {
                tracing::warn!(scale = %scale_key, "skipping unknown scale in catalog");
                continue;
            };
            for (key, options) in lists {
                match CatalogKey::from_key(&key) {
                    Some(known) => catalog.insert(scale, known, options),
                    None => tracing::warn!(%scale, key = %key, "skipping unknown catalog key"),
                }
            }
        }
        Ok(catalog)
    }

    pub fn live_len(&self) -> usize {
        self.live.len()
    }
}

impl OptionCatalog for LayeredCatalog {
    fn options(&self, scale: ScaleId, key: CatalogKey) -> Cow<'_, [CatalogOption]> {
        match self.live.get(&(scale, key)) {
            Some(options) if !options.is_empty() => Cow::Borrowed(options.as_slice()),
            _ => Cow::Borrowed(fallback(scale, key)),
        }
    }
}
