use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("dataset not found at {0}")]
    DatasetMissing(PathBuf),

    #[error("no trained artifacts at {0}")]
    ArtifactMissing(PathBuf),

    #[error("unknown {field}: {value:?} (not seen during training)")]
    UnknownCategory { field: &'static str, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact (de)serialization failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("classifier error: {0}")]
    Model(String),
}

impl PipelineError {
    pub fn unknown_category(field: &'static str, value: &str) -> Self {
        PipelineError::UnknownCategory {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
