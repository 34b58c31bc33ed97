use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    #[error("cannot serialize a table without columns")]
    EmptyColumnSet,
}
