use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::entity::{self, Dimensions, PriorComparison, PriorComparisonField};

/// Findings of a mammography exam. Option-valued fields hold catalog
/// values; `None` means nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreastFindings {
    /// Parenchymal composition (a–d).
    #[serde(default)]
    pub density: Option<String>,
    #[serde(default)]
    pub nodules: Vec<Nodule>,
    #[serde(default)]
    pub calcifications: Calcifications,
    #[serde(default)]
    pub distortion: Distortion,
    #[serde(default)]
    pub asymmetry: Asymmetry,
    #[serde(default)]
    pub lymph_nodes: LymphNodes,
    #[serde(default)]
    pub technically_inadequate: bool,
}

impl BreastFindings {
    /// Append an empty nodule. `None` when the list is already full.
    pub fn add_nodule(&mut self) -> Option<usize> {
        entity::push_capped(&mut self.nodules, Nodule::new)
    }

    pub fn remove_nodule(&mut self, index: usize) -> bool {
        entity::remove_at(&mut self.nodules, index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Nodule {
    pub id: Uuid,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size: Dimensions,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub margins: Option<String>,
    #[serde(default)]
    pub density: Option<String>,
    #[serde(default)]
    pub prior: PriorComparison,
}

impl Nodule {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            side: None,
            location: None,
            size: Dimensions::default(),
            shape: None,
            margins: None,
            density: None,
            prior: PriorComparison::default(),
        }
    }

    pub fn apply(&mut self, field: NoduleField) {
        match field {
            NoduleField::Side(v) => self.side = v,
            NoduleField::Location(v) => self.location = v,
            NoduleField::Size(v) => self.size = v.clamped(),
            NoduleField::Shape(v) => self.shape = v,
            NoduleField::Margins(v) => self.margins = v,
            NoduleField::Density(v) => self.density = v,
            NoduleField::Prior(v) => self.prior.apply(v),
        }
    }
}

impl Default for Nodule {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Calcifications {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub morphology: Option<String>,
    #[serde(default)]
    pub distribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Distortion {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Asymmetry {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LymphNodes {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum NoduleField {
    Side(Option<String>),
    Location(Option<String>),
    Size(Dimensions),
    Shape(Option<String>),
    Margins(Option<String>),
    Density(Option<String>),
    Prior(PriorComparisonField),
}

/// A single-field edit to a breast finding group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum BreastUpdate {
    Density(Option<String>),
    AddNodule,
    RemoveNodule(usize),
    Nodule { index: usize, change: NoduleField },
    CalcificationsPresent(bool),
    CalcificationsSide(Option<String>),
    CalcificationMorphology(Option<String>),
    CalcificationDistribution(Option<String>),
    DistortionPresent(bool),
    DistortionSide(Option<String>),
    DistortionLocation(Option<String>),
    AsymmetryPresent(bool),
    AsymmetryKind(Option<String>),
    AsymmetrySide(Option<String>),
    LymphNodesPresent(bool),
    LymphNodeKind(Option<String>),
    LymphNodeSide(Option<String>),
    TechnicallyInadequate(bool),
}

impl BreastFindings {
    /// Apply one edit. Returns `false` when it targets a nodule that does
    /// not exist or when a nodule cannot be added.
    pub fn apply(&mut self, update: BreastUpdate) -> bool {
        match update {
            BreastUpdate::Density(v) => self.density = v,
            BreastUpdate::AddNodule => return self.add_nodule().is_some(),
            BreastUpdate::RemoveNodule(index) => return self.remove_nodule(index),
            BreastUpdate::Nodule { index, change } => match self.nodules.get_mut(index) {
                Some(nodule) => nodule.apply(change),
                None => return false,
            },
            BreastUpdate::CalcificationsPresent(v) => self.calcifications.present = v,
            BreastUpdate::CalcificationsSide(v) => self.calcifications.side = v,
            BreastUpdate::CalcificationMorphology(v) => self.calcifications.morphology = v,
            BreastUpdate::CalcificationDistribution(v) => self.calcifications.distribution = v,
            BreastUpdate::DistortionPresent(v) => self.distortion.present = v,
            BreastUpdate::DistortionSide(v) => self.distortion.side = v,
            BreastUpdate::DistortionLocation(v) => self.distortion.location = v,
            BreastUpdate::AsymmetryPresent(v) => self.asymmetry.present = v,
            BreastUpdate::AsymmetryKind(v) => self.asymmetry.kind = v,
            BreastUpdate::AsymmetrySide(v) => self.asymmetry.side = v,
            BreastUpdate::LymphNodesPresent(v) => self.lymph_nodes.present = v,
            BreastUpdate::LymphNodeKind(v) => self.lymph_nodes.kind = v,
            BreastUpdate::LymphNodeSide(v) => self.lymph_nodes.side = v,
            BreastUpdate::TechnicallyInadequate(v) => self.technically_inadequate = v,
        }
        true
    }
}
