use thiserror::Error;

use crate::core::LoadError;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("record collection is empty; no domain can be computed")]
    EmptyDataset,

    #[error("record `{record_id}` has no numeric field `{field}`")]
    MissingField { record_id: String, field: String },

    #[error("duplicate record id `{0}`")]
    DuplicateRecordId(String),

    #[error("unknown record id `{0}`")]
    UnknownRecord(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}
