use crowd_predictor::{trainer, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let trained = trainer::train(&config.dataset_path, &config.artifact_dir)?;
    tracing::info!(
        "trained on {} rows; {} stations, {} time buckets, {} crowd levels",
        trained.rows.len(),
        trained.encoders.source.len(),
        trained.encoders.time.len(),
        trained.encoders.crowd.len()
    );
    Ok(())
}
