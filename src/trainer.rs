use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::{self, ScheduleRow};
use crate::encoder::EncoderSet;
use crate::error::Result;
use crate::model::CrowdModel;

pub const MODEL_FILE: &str = "model.bin";
pub const BUNDLE_FILE: &str = "bundle.bin";

/// Encoders plus the full retained dataset, persisted as one blob so the
/// classifier can never be paired with a vocabulary fit on different data.
#[derive(Serialize, Deserialize)]
pub struct EncoderBundle {
    pub encoders: EncoderSet,
    pub rows: Vec<ScheduleRow>,
}

pub struct TrainedArtifacts {
    pub model: CrowdModel,
    pub encoders: EncoderSet,
    pub rows: Vec<ScheduleRow>,
}

/// Fit encoders and classifier from the dataset and persist both blobs to
/// `artifact_dir`. Fails with `DatasetMissing` if the file is absent; never
/// leaves a partially written artifact behind.
pub fn train(dataset_path: &Path, artifact_dir: &Path) -> Result<TrainedArtifacts> {
    let rows = dataset::load(dataset_path)?;
    tracing::info!("training on {} dataset rows from {}", rows.len(), dataset_path.display());

    let encoders = EncoderSet::fit(&rows);

    let mut features = Vec::with_capacity(rows.len());
    let mut targets = Vec::with_capacity(rows.len());
    for row in &rows {
        // Rows come from the same dataset the encoders were fit on, so
        // every category is in-vocabulary here.
        features.push(encoders.encode_query(&row.source, &row.destination, &row.preferred_time)?);
        targets.push(encoders.crowd.encode("crowd", &row.crowd_level)?);
    }

    let model = CrowdModel::fit(&features, &targets)?;

    fs::create_dir_all(artifact_dir)?;
    write_atomic(&artifact_dir.join(MODEL_FILE), &bincode::serialize(&model)?)?;
    let bundle = EncoderBundle {
        encoders: encoders.clone(),
        rows: rows.clone(),
    };
    write_atomic(&artifact_dir.join(BUNDLE_FILE), &bincode::serialize(&bundle)?)?;
    tracing::info!("artifacts written to {}", artifact_dir.display());

    Ok(TrainedArtifacts {
        model,
        encoders,
        rows,
    })
}

/// Write to a sibling temp file, then rename over the final path. Rename is
/// atomic on the same filesystem, so readers see either the old blob or the
/// new one, never a torn write.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
