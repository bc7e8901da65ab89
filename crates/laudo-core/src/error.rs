use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("case has {count} finding entities, at most {max} are allowed")]
    TooManyEntities { count: usize, max: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
