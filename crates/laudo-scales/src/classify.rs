//! Case classification: one category for the whole exam.
//!
//! Both aggregation modes are total: an unset field contributes nothing,
//! so a half-filled case still classifies and the live preview never
//! breaks.

use jiff::civil::Date;
use laudo_core::category::{Category, ScaleId};
use laudo_core::error::CoreError;
use laudo_core::measurements::{self, SUFFICIENT_FOLLOW_UP_MONTHS};
use laudo_core::models::{
    BreastFindings, Case, ComparisonState, Exam, Nodule, PriorComparison, ProstateFindings,
};
use laudo_core::option::{CatalogKey, CatalogOption};
use serde::Serialize;

use crate::catalog::OptionCatalog;
use crate::error::ScoringError;
use crate::scales::birads::{DISTORTION_CATEGORY, EvolutionRule, NODULE_EVOLUTION};
use crate::scoring::{Guideline, PIRADS_V2_1, score_lesion};

/// Tunables that are configuration rather than case data.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub guideline: &'static Guideline,
    pub sufficient_follow_up_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            guideline: &PIRADS_V2_1,
            sufficient_follow_up_months: SUFFICIENT_FOLLOW_UP_MONTHS,
        }
    }
}

/// Everything besides the case that classification and narrative read:
/// the catalog, the reference date for follow-up arithmetic, and settings.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    pub catalog: &'a dyn OptionCatalog,
    pub today: Date,
    pub settings: Settings,
}

impl<'a> ReportContext<'a> {
    pub fn new(catalog: &'a dyn OptionCatalog, today: Date) -> Self {
        Self {
            catalog,
            today,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The catalog option for a selected value, if any is selected.
    pub fn lookup(
        &self,
        scale: ScaleId,
        key: CatalogKey,
        value: Option<&str>,
    ) -> Option<CatalogOption> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        let found = self.catalog.find(scale, key, value);
        if found.is_none() {
            tracing::debug!(%scale, %key, value, "selected value not in catalog");
        }
        found
    }

    /// Label of a selected value; the raw value when the catalog lacks it.
    pub fn label(&self, scale: ScaleId, key: CatalogKey, value: Option<&str>) -> Option<String> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        Some(self.catalog.label(scale, key, value))
    }

    pub fn follow_up_months(&self, prior_date: &str) -> Result<u32, CoreError> {
        measurements::follow_up_months(prior_date, self.today)
    }

    pub fn is_sufficient(&self, months: u32) -> bool {
        measurements::is_sufficient_follow_up(months, self.settings.sufficient_follow_up_months)
    }

    fn sufficient_follow_up(&self, prior: &PriorComparison) -> bool {
        let Some(date) = prior.prior_date.as_deref() else {
            return false;
        };
        match self.follow_up_months(date) {
            Ok(months) => self.is_sufficient(months),
            Err(error) => {
                tracing::debug!(%error, "ignoring comparison date");
                false
            }
        }
    }
}

/// Where the final category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    Computed,
    ManualOverride,
    ProvenMalignancy,
    TechnicallyInadequate,
}

/// The finding that set the computed category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", content = "index", rename_all = "snake_case")]
pub enum Driver {
    Density,
    Nodule(usize),
    Calcifications,
    Distortion,
    Asymmetry,
    LymphNodes,
    Lesion(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub scale: ScaleId,
    /// The category to report.
    pub category: Category,
    /// The category before any manual override. The recommendation table
    /// is keyed on this one.
    pub computed: Category,
    pub source: CategorySource,
    pub driver: Option<Driver>,
}

/// Classify a case. Deterministic for a given case and context.
pub fn classify(case: &Case, ctx: &ReportContext<'_>) -> Classification {
    let scale = case.scale();
    let (computed, source, driver) = match &case.exam {
        Exam::Mammography(findings) => classify_breast(case, findings, ctx),
        Exam::ProstateMri(findings) => classify_prostate(findings, ctx),
    };

    let mut category = computed;
    let mut source = source;
    if let Some(value) = case.category_override.effective() {
        match Category::parse(scale, value) {
            Some(manual) => {
                category = manual;
                source = CategorySource::ManualOverride;
            }
            None => tracing::warn!(%scale, value, "ignoring manual category outside the scale"),
        }
    }

    Classification {
        scale,
        category,
        computed,
        source,
        driver,
    }
}

/// Most severe contribution seen so far. Ties go to the higher weight,
/// then to the earlier finding.
struct Strongest {
    category: Category,
    weight: i32,
    driver: Driver,
}

fn offer(best: &mut Option<Strongest>, category: Category, weight: i32, driver: Driver) {
    let wins = match best {
        None => true,
        Some(current) => {
            category > current.category || (category == current.category && weight > current.weight)
        }
    };
    if wins {
        *best = Some(Strongest {
            category,
            weight,
            driver,
        });
    }
}

fn offer_option(best: &mut Option<Strongest>, option: Option<CatalogOption>, driver: Driver) {
    if let Some(option) = option {
        offer(best, option.associated_category, option.weight, driver);
    }
}

fn classify_breast(
    case: &Case,
    findings: &BreastFindings,
    ctx: &ReportContext<'_>,
) -> (Category, CategorySource, Option<Driver>) {
    let scale = ScaleId::Birads;
    let mut best = None;

    offer_option(
        &mut best,
        ctx.lookup(scale, CatalogKey::Density, findings.density.as_deref()),
        Driver::Density,
    );

    for (index, nodule) in findings.nodules.iter().enumerate() {
        if let Some((category, weight)) = nodule_score(nodule, ctx) {
            offer(&mut best, category, weight, Driver::Nodule(index));
        }
    }

    let calcifications = &findings.calcifications;
    if calcifications.present {
        offer_option(
            &mut best,
            ctx.lookup(
                scale,
                CatalogKey::CalcificationMorphology,
                calcifications.morphology.as_deref(),
            ),
            Driver::Calcifications,
        );
        offer_option(
            &mut best,
            ctx.lookup(
                scale,
                CatalogKey::Distribution,
                calcifications.distribution.as_deref(),
            ),
            Driver::Calcifications,
        );
    }

    if findings.distortion.present {
        offer(&mut best, DISTORTION_CATEGORY, 0, Driver::Distortion);
    }

    if findings.asymmetry.present {
        offer_option(
            &mut best,
            ctx.lookup(scale, CatalogKey::Asymmetry, findings.asymmetry.kind.as_deref()),
            Driver::Asymmetry,
        );
    }

    if findings.lymph_nodes.present {
        offer_option(
            &mut best,
            ctx.lookup(scale, CatalogKey::LymphNode, findings.lymph_nodes.kind.as_deref()),
            Driver::LymphNodes,
        );
    }

    let baseline = scale.baseline();
    let (mut category, driver) = match best {
        Some(strongest) if strongest.category > baseline => {
            (strongest.category, Some(strongest.driver))
        }
        _ => (baseline, None),
    };

    // Lowest precedence first, so the stronger signal overwrites.
    let mut source = CategorySource::Computed;
    if findings.technically_inadequate {
        category = scale.min_category();
        source = CategorySource::TechnicallyInadequate;
    }
    if case.indication.proven_malignancy {
        category = scale.max_category();
        source = CategorySource::ProvenMalignancy;
    }

    (category, source, driver)
}

/// Category of one nodule: its most severe descriptor, adjusted by its
/// evolution against a prior exam. `None` when nothing is described.
pub fn nodule_category(nodule: &Nodule, ctx: &ReportContext<'_>) -> Option<Category> {
    nodule_score(nodule, ctx).map(|(category, _)| category)
}

fn nodule_score(nodule: &Nodule, ctx: &ReportContext<'_>) -> Option<(Category, i32)> {
    let scale = ScaleId::Birads;
    let descriptors = [
        (CatalogKey::NoduleShape, nodule.shape.as_deref()),
        (CatalogKey::Margins, nodule.margins.as_deref()),
        (CatalogKey::NoduleDensity, nodule.density.as_deref()),
    ];

    let mut described: Option<(Category, i32)> = None;
    for (key, value) in descriptors {
        if let Some(option) = ctx.lookup(scale, key, value) {
            described = Some(match described {
                Some((category, weight)) => (
                    category.max(option.associated_category),
                    weight.max(option.weight),
                ),
                None => (option.associated_category, option.weight),
            });
        }
    }

    let weight = described.map_or(0, |(_, weight)| weight);
    apply_evolution(described.map(|(category, _)| category), &nodule.prior, ctx)
        .map(|category| (category, weight))
}

fn apply_evolution(
    base: Option<Category>,
    prior: &PriorComparison,
    ctx: &ReportContext<'_>,
) -> Option<Category> {
    let Some(state) = prior.active_state() else {
        return base;
    };

    for rule in NODULE_EVOLUTION {
        match *rule {
            EvolutionRule::StableLongTerm { ceiling, becomes } => {
                if state == ComparisonState::Stable
                    && let Some(category) = base
                    && category.value() <= ceiling
                    && ctx.sufficient_follow_up(prior)
                {
                    return Some(category.min(Category(becomes)));
                }
            }
            EvolutionRule::Floor { state: when, floor } => {
                if state == when {
                    let floor = Category(floor);
                    return Some(base.map_or(floor, |category| category.max(floor)));
                }
            }
        }
    }
    base
}

fn classify_prostate(
    findings: &ProstateFindings,
    ctx: &ReportContext<'_>,
) -> (Category, CategorySource, Option<Driver>) {
    let mut best = None;
    for (index, score) in lesion_scores(findings, ctx).into_iter().enumerate() {
        match score {
            Ok(category) => offer(&mut best, category, 0, Driver::Lesion(index)),
            Err(error) => tracing::debug!(lesion = index, %error, "lesion not scored"),
        }
    }

    match best {
        Some(index_lesion) => (
            index_lesion.category,
            CategorySource::Computed,
            Some(index_lesion.driver),
        ),
        None => (ScaleId::Pirads.baseline(), CategorySource::Computed, None),
    }
}

/// Score of every lesion, in entry order.
pub fn lesion_scores(
    findings: &ProstateFindings,
    ctx: &ReportContext<'_>,
) -> Vec<Result<Category, ScoringError>> {
    findings
        .lesions
        .iter()
        .map(|lesion| score_lesion(lesion, ctx.settings.guideline))
        .collect()
}
