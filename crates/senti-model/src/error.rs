use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("vocabulary has no labels")]
    Empty,
    #[error("duplicate label name: {0}")]
    DuplicateName(String),
    #[error("duplicate label code: {0}")]
    DuplicateCode(i64),
}
