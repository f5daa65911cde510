use std::path::PathBuf;

/// Runtime configuration, read from the environment with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub artifact_dir: PathBuf,
    pub log_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let dataset_path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "data/train_crowd_data.csv".to_string())
            .into();
        let artifact_dir = std::env::var("ARTIFACT_DIR")
            .unwrap_or_else(|_| "model".to_string())
            .into();
        let log_path = std::env::var("LOG_PATH")
            .unwrap_or_else(|_| "predictions.log.jsonl".to_string())
            .into();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        Self {
            dataset_path,
            artifact_dir,
            log_path,
            port,
        }
    }
}
