use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Attribute, Axis};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load dataset from `{}`: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("attribute `{attribute}` cannot drive the {axis} axis")]
    AxisMismatch { attribute: Attribute, axis: Axis },

    #[error("serialization failed: {0}")]
    Serialization(String),
}
