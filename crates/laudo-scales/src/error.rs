use thiserror::Error;

use crate::scoring::Sequence;

/// Why a lesion could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("{sequence} score {value} is outside range [1, 5]")]
    OutOfRangeScore { sequence: Sequence, value: u8 },

    #[error("lesion has no zone")]
    MissingZone,

    #[error("lesion has no {0} score")]
    MissingScore(Sequence),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
