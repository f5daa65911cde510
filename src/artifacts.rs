use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::model::CrowdModel;
use crate::predictor::Predictor;
use crate::trainer::{self, EncoderBundle, BUNDLE_FILE, MODEL_FILE};

/// Load the persisted artifact pair. Both blobs must be present; they are
/// written together by one training run and only make sense together.
pub fn load(artifact_dir: &Path) -> Result<Predictor> {
    let model_path = artifact_dir.join(MODEL_FILE);
    let bundle_path = artifact_dir.join(BUNDLE_FILE);
    if !model_path.exists() || !bundle_path.exists() {
        return Err(PipelineError::ArtifactMissing(artifact_dir.to_path_buf()));
    }

    let model: CrowdModel = bincode::deserialize(&fs::read(&model_path)?)?;
    let mut bundle: EncoderBundle = bincode::deserialize(&fs::read(&bundle_path)?)?;
    bundle.encoders.rebuild_indexes();

    Ok(Predictor::new(model, bundle.encoders, bundle.rows))
}

/// Build-or-load step, run once at process start before the server accepts
/// requests: load the bundle if it exists, otherwise train from the dataset.
/// `ArtifactMissing` is recoverable here; `DatasetMissing` is not.
pub fn build_or_load(config: &Config) -> Result<Predictor> {
    match load(&config.artifact_dir) {
        Ok(predictor) => {
            tracing::info!(
                "loaded artifacts from {} ({} rows retained)",
                config.artifact_dir.display(),
                predictor.rows().len()
            );
            Ok(predictor)
        }
        Err(PipelineError::ArtifactMissing(_)) => {
            tracing::info!(
                "no artifacts at {}, training from {}",
                config.artifact_dir.display(),
                config.dataset_path.display()
            );
            let trained = trainer::train(&config.dataset_path, &config.artifact_dir)?;
            Ok(Predictor::new(trained.model, trained.encoders, trained.rows))
        }
        Err(e) => Err(e),
    }
}
