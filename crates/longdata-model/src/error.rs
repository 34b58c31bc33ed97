use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("vocabulary must contain at least one field")]
    EmptyVocabulary,
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
}
