use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::entity::{self, Dimensions, PriorComparison, PriorComparisonField};

/// Findings of a prostate multiparametric MRI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProstateFindings {
    #[serde(default)]
    pub technique: Technique,
    /// Gland dimensions (transverse, anteroposterior, longitudinal).
    #[serde(default)]
    pub gland: Dimensions,
    #[serde(default)]
    pub lesions: Vec<Lesion>,
    #[serde(default)]
    pub seminal_vesicles: Option<String>,
    #[serde(default)]
    pub lymph_nodes: Option<String>,
    #[serde(default)]
    pub bone: Option<String>,
}

impl ProstateFindings {
    /// Append an empty lesion. `None` when the list is already full.
    pub fn add_lesion(&mut self) -> Option<usize> {
        entity::push_capped(&mut self.lesions, Lesion::new)
    }

    pub fn remove_lesion(&mut self, index: usize) -> bool {
        entity::remove_at(&mut self.lesions, index)
    }

    pub fn gland_volume(&self) -> f64 {
        self.gland.volume()
    }
}

/// Acquisition parameters of the exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Technique {
    /// Free text as typed, e.g. "3,0".
    #[serde(default)]
    pub field_strength: Option<String>,
    #[serde(default)]
    pub endorectal_coil: bool,
    #[serde(default)]
    pub contrast: bool,
}

/// Dynamic contrast-enhanced assessment of a lesion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContrastUptake {
    Positive,
    Negative,
    #[default]
    NotAssessed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lesion {
    pub id: Uuid,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub size: Dimensions,
    /// T2-weighted score, 1–5.
    #[serde(default)]
    pub t2: Option<u8>,
    /// Diffusion-weighted score, 1–5.
    #[serde(default)]
    pub dwi: Option<u8>,
    #[serde(default)]
    pub dce: ContrastUptake,
    #[serde(default)]
    pub prior: PriorComparison,
}

impl Lesion {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            zone: None,
            sector: None,
            side: None,
            size: Dimensions::default(),
            t2: None,
            dwi: None,
            dce: ContrastUptake::NotAssessed,
            prior: PriorComparison::default(),
        }
    }

    pub fn apply(&mut self, field: LesionField) {
        match field {
            LesionField::Zone(v) => self.zone = v,
            LesionField::Sector(v) => self.sector = v,
            LesionField::Side(v) => self.side = v,
            LesionField::Size(v) => self.size = v.clamped(),
            LesionField::T2(v) => self.t2 = v,
            LesionField::Dwi(v) => self.dwi = v,
            LesionField::Dce(v) => self.dce = v,
            LesionField::Prior(v) => self.prior.apply(v),
        }
    }
}

impl Default for Lesion {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum LesionField {
    Zone(Option<String>),
    Sector(Option<String>),
    Side(Option<String>),
    Size(Dimensions),
    T2(Option<u8>),
    Dwi(Option<u8>),
    Dce(ContrastUptake),
    Prior(PriorComparisonField),
}

/// A single-field edit to the prostate findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum ProstateUpdate {
    FieldStrength(Option<String>),
    EndorectalCoil(bool),
    Contrast(bool),
    Gland(Dimensions),
    AddLesion,
    RemoveLesion(usize),
    Lesion { index: usize, change: LesionField },
    SeminalVesicles(Option<String>),
    LymphNodes(Option<String>),
    Bone(Option<String>),
}

impl ProstateFindings {
    /// Apply one edit. Returns `false` when it targets a lesion that does
    /// not exist or when a lesion cannot be added.
    pub fn apply(&mut self, update: ProstateUpdate) -> bool {
        match update {
            ProstateUpdate::FieldStrength(v) => self.technique.field_strength = v,
            ProstateUpdate::EndorectalCoil(v) => self.technique.endorectal_coil = v,
            ProstateUpdate::Contrast(v) => self.technique.contrast = v,
            ProstateUpdate::Gland(v) => self.gland = v.clamped(),
            ProstateUpdate::AddLesion => return self.add_lesion().is_some(),
            ProstateUpdate::RemoveLesion(index) => return self.remove_lesion(index),
            ProstateUpdate::Lesion { index, change } => match self.lesions.get_mut(index) {
                Some(lesion) => lesion.apply(change),
                None => return false,
            },
            ProstateUpdate::SeminalVesicles(v) => self.seminal_vesicles = v,
            ProstateUpdate::LymphNodes(v) => self.lymph_nodes = v,
            ProstateUpdate::Bone(v) => self.bone = v,
        }
        true
    }
}
