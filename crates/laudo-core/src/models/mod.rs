pub mod breast;
pub mod case;
pub mod entity;
pub mod prostate;

pub use breast::{
    Asymmetry, BreastFindings, BreastUpdate, Calcifications, Distortion, LymphNodes, Nodule,
    NoduleField,
};
pub use case::{
    Case, CaseUpdate, Comparison, Exam, Indication, ManualOverride, NoteFlag, Notes,
    PriorSurgery,
};
pub use entity::{
    ComparisonState, Dimensions, MAX_FINDING_ENTITIES, PriorComparison, PriorComparisonField,
};
pub use prostate::{
    ContrastUptake, Lesion, LesionField, ProstateFindings, ProstateUpdate, Technique,
};
