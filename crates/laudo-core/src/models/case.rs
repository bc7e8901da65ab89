use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::category::ScaleId;
use crate::error::CoreError;

use super::breast::{BreastFindings, BreastUpdate};
use super::entity::MAX_FINDING_ENTITIES;
use super::prostate::{ProstateFindings, ProstateUpdate};

/// One exam being reported. Owned by the caller; nothing in this
/// workspace persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Case {
    pub id: Uuid,
    #[serde(default)]
    pub indication: Indication,
    pub exam: Exam,
    #[serde(default)]
    pub comparison: Comparison,
    #[serde(default)]
    pub category_override: ManualOverride,
    #[serde(default)]
    pub recommendation_override: ManualOverride,
    #[serde(default)]
    pub notes: Notes,
}

/// Modality-specific findings. The variant decides the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "modality", rename_all = "snake_case")]
#[ts(export)]
pub enum Exam {
    Mammography(BreastFindings),
    ProstateMri(ProstateFindings),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Indication {
    /// Catalog value of the indication type.
    #[serde(default)]
    pub kind: Option<String>,
    /// Free-text clinical reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Used when the selected indication uses laterality.
    #[serde(default)]
    pub side: Option<String>,
    /// Used when the selected indication uses months.
    #[serde(default)]
    pub months: Option<u32>,
    #[serde(default)]
    pub family_history: bool,
    #[serde(default)]
    pub personal_history: bool,
    #[serde(default)]
    pub prior_surgery: PriorSurgery,
    /// Histologically proven malignancy being staged or followed.
    #[serde(default)]
    pub proven_malignancy: bool,
    /// Serum PSA in ng/mL.
    #[serde(default)]
    pub psa: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorSurgery {
    #[serde(default)]
    pub right_mastectomy: bool,
    #[serde(default)]
    pub left_mastectomy: bool,
    #[serde(default)]
    pub right_conservative: bool,
    #[serde(default)]
    pub left_conservative: bool,
    #[serde(default)]
    pub implants: bool,
    #[serde(default)]
    pub transurethral_resection: bool,
}

impl PriorSurgery {
    pub fn any(&self) -> bool {
        self.right_mastectomy
            || self.left_mastectomy
            || self.right_conservative
            || self.left_conservative
            || self.implants
            || self.transurethral_resection
    }
}

/// Relationship with a prior study of the whole exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comparison {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub prior_date: Option<String>,
}

/// A user-supplied value that supersedes a computed one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ManualOverride {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub value: String,
}

impl ManualOverride {
    pub fn new(value: &str) -> Self {
        Self {
            active: true,
            value: value.to_string(),
        }
    }

    /// The override text when active and non-blank.
    pub fn effective(&self) -> Option<&str> {
        let value = self.value.trim();
        (self.active && !value.is_empty()).then_some(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notes {
    #[serde(default)]
    pub dense_breast_ultrasound: bool,
    #[serde(default)]
    pub clinical_correlation: bool,
    #[serde(default)]
    pub request_prior_exams: bool,
    #[serde(default)]
    pub targeted_biopsy: bool,
    #[serde(default)]
    pub text: Option<String>,
}

/// Boilerplate clauses a report can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteFlag {
    DenseBreastUltrasound,
    ClinicalCorrelation,
    RequestPriorExams,
    TargetedBiopsy,
}

impl Notes {
    pub fn is_set(&self, flag: NoteFlag) -> bool {
        match flag {
            NoteFlag::DenseBreastUltrasound => self.dense_breast_ultrasound,
            NoteFlag::ClinicalCorrelation => self.clinical_correlation,
            NoteFlag::RequestPriorExams => self.request_prior_exams,
            NoteFlag::TargetedBiopsy => self.targeted_biopsy,
        }
    }

    pub fn set(&mut self, flag: NoteFlag, value: bool) {
        match flag {
            NoteFlag::DenseBreastUltrasound => self.dense_breast_ultrasound = value,
            NoteFlag::ClinicalCorrelation => self.clinical_correlation = value,
            NoteFlag::RequestPriorExams => self.request_prior_exams = value,
            NoteFlag::TargetedBiopsy => self.targeted_biopsy = value,
        }
    }
}

/// A single-field edit to a [`Case`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum CaseUpdate {
    IndicationKind(Option<String>),
    IndicationReason(Option<String>),
    IndicationSide(Option<String>),
    IndicationMonths(Option<u32>),
    FamilyHistory(bool),
    PersonalHistory(bool),
    PriorSurgery(PriorSurgery),
    ProvenMalignancy(bool),
    Psa(Option<f64>),
    ComparisonKind(Option<String>),
    ComparisonDate(Option<String>),
    CategoryOverride(ManualOverride),
    RecommendationOverride(ManualOverride),
    Note { flag: NoteFlag, set: bool },
    NoteText(Option<String>),
    Breast(BreastUpdate),
    Prostate(ProstateUpdate),
}

impl Case {
    /// An empty case for the given scale.
    pub fn new(scale: ScaleId) -> Self {
        let exam = match scale {
            ScaleId::Birads => Exam::Mammography(BreastFindings::default()),
            ScaleId::Pirads => Exam::ProstateMri(ProstateFindings::default()),
        };
        Self {
            id: Uuid::new_v4(),
            indication: Indication::default(),
            exam,
            comparison: Comparison::default(),
            category_override: ManualOverride::default(),
            recommendation_override: ManualOverride::default(),
            notes: Notes::default(),
        }
    }

    /// Decode a case, rejecting one with more finding entities than
    /// [`MAX_FINDING_ENTITIES`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let case: Case = serde_json::from_str(json)?;
        let count = case.entity_count();
        if count > MAX_FINDING_ENTITIES {
            return Err(CoreError::TooManyEntities {
                count,
                max: MAX_FINDING_ENTITIES,
            });
        }
        Ok(case)
    }

    pub fn scale(&self) -> ScaleId {
        match self.exam {
            Exam::Mammography(_) => ScaleId::Birads,
            Exam::ProstateMri(_) => ScaleId::Pirads,
        }
    }

    pub fn breast(&self) -> Option<&BreastFindings> {
        match &self.exam {
            Exam::Mammography(findings) => Some(findings),
            Exam::ProstateMri(_) => None,
        }
    }

    pub fn prostate(&self) -> Option<&ProstateFindings> {
        match &self.exam {
            Exam::ProstateMri(findings) => Some(findings),
            Exam::Mammography(_) => None,
        }
    }

    /// Number of nodules or lesions, whichever the exam carries.
    pub fn entity_count(&self) -> usize {
        match &self.exam {
            Exam::Mammography(findings) => findings.nodules.len(),
            Exam::ProstateMri(findings) => findings.lesions.len(),
        }
    }

    /// Apply one edit in place. Returns `false` when the update does not
    /// fit this case (other modality, missing entity, full entity list).
    pub fn apply(&mut self, update: CaseUpdate) -> bool {
        match update {
            CaseUpdate::IndicationKind(v) => self.indication.kind = v,
            CaseUpdate::IndicationReason(v) => self.indication.reason = v,
            CaseUpdate::IndicationSide(v) => self.indication.side = v,
            CaseUpdate::IndicationMonths(v) => self.indication.months = v,
            CaseUpdate::FamilyHistory(v) => self.indication.family_history = v,
            CaseUpdate::PersonalHistory(v) => self.indication.personal_history = v,
            CaseUpdate::PriorSurgery(v) => self.indication.prior_surgery = v,
            CaseUpdate::ProvenMalignancy(v) => self.indication.proven_malignancy = v,
            CaseUpdate::Psa(v) => self.indication.psa = v.map(|psa| psa.max(0.0)),
            CaseUpdate::ComparisonKind(v) => self.comparison.kind = v,
            CaseUpdate::ComparisonDate(v) => self.comparison.prior_date = v,
            CaseUpdate::CategoryOverride(v) => self.category_override = v,
            CaseUpdate::RecommendationOverride(v) => self.recommendation_override = v,
            CaseUpdate::Note { flag, set } => self.notes.set(flag, set),
            CaseUpdate::NoteText(v) => self.notes.text = v,
            CaseUpdate::Breast(change) => {
                return match &mut self.exam {
                    Exam::Mammography(findings) => findings.apply(change),
                    Exam::ProstateMri(_) => false,
                };
            }
            CaseUpdate::Prostate(change) => {
                return match &mut self.exam {
                    Exam::ProstateMri(findings) => findings.apply(change),
                    Exam::Mammography(_) => false,
                };
            }
        }
        true
    }
}
