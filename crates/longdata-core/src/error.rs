use thiserror::Error;

use longdata_ingest::DatasetError;
use longdata_map::MapError;
use longdata_output::OutputError;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error("invalid input {input:?}: {reason}")]
    ToolInput { input: String, reason: String },
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
