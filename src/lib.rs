//! Train crowd prediction pipeline: a label-encoded random forest over a
//! static schedule/crowd snapshot, plus an exact-match schedule lookup.
//!
//! The pipeline is presentation-agnostic; the HTTP frontend in `main.rs` is
//! one consumer of [`predictor::Predictor`].

pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod log_store;
pub mod model;
pub mod predictor;
pub mod train_names;
pub mod trainer;

pub use config::Config;
pub use error::{PipelineError, Result};
pub use predictor::{PredictionResult, Predictor, NOT_AVAILABLE};
