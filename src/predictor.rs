use serde::{Deserialize, Serialize};

use crate::dataset::{self, ScheduleRow};
use crate::encoder::EncoderSet;
use crate::error::Result;
use crate::log_store::{PredictionLog, PredictionLogEntry};
use crate::model::CrowdModel;

/// Fallback sentinel for schedule fields when no dataset row matches.
pub const NOT_AVAILABLE: &str = "N/A";

/// The structured answer for one query. `crowd` always comes from the
/// classifier; the schedule fields come from the first matching dataset row
/// or fall back to "N/A". The two can disagree on crowd level by design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub train: String,
    pub departure: String,
    pub arrival: String,
    pub crowd: String,
    pub standing_time: String,
    pub seat_available_after: String,
    pub alternate_train: String,
}

/// The request-time pipeline: encode -> classify -> decode -> lookup.
/// Holds the loaded artifact bundle; immutable after construction and safe
/// to share behind an `Arc` across concurrent requests.
pub struct Predictor {
    model: CrowdModel,
    encoders: EncoderSet,
    rows: Vec<ScheduleRow>,
}

impl Predictor {
    pub fn new(model: CrowdModel, encoders: EncoderSet, rows: Vec<ScheduleRow>) -> Self {
        Self {
            model,
            encoders,
            rows,
        }
    }

    /// Station names known at training time (sorted source vocabulary).
    pub fn stations(&self) -> &[String] {
        self.encoders.source.classes()
    }

    /// Time-of-day buckets known at training time.
    pub fn times(&self) -> &[String] {
        self.encoders.time.classes()
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Predict the crowd level for a query triple and attach schedule
    /// metadata from the dataset. Fails with `UnknownCategory` before any
    /// other work if an input was never seen during training.
    pub fn predict(
        &self,
        source: &str,
        destination: &str,
        preferred_time: &str,
    ) -> Result<PredictionResult> {
        let encoded = self.encoders.encode_query(source, destination, preferred_time)?;
        let class = self.model.predict(encoded)?;
        let crowd = self.encoders.crowd.decode(class)?.to_string();

        // Lookup is on the raw strings, not the codes; first match wins in
        // dataset file order.
        let result = match dataset::find_exact(&self.rows, source, destination, preferred_time) {
            Some(row) => PredictionResult {
                train: row.best_train.clone(),
                departure: row.departure.clone(),
                arrival: row.arrival.clone(),
                crowd,
                standing_time: row.expected_standing_time.clone(),
                seat_available_after: row.seat_likely_available_after.clone(),
                alternate_train: row.alternate_train.clone(),
            },
            None => PredictionResult {
                train: NOT_AVAILABLE.to_string(),
                departure: NOT_AVAILABLE.to_string(),
                arrival: NOT_AVAILABLE.to_string(),
                crowd,
                standing_time: NOT_AVAILABLE.to_string(),
                seat_available_after: NOT_AVAILABLE.to_string(),
                alternate_train: NOT_AVAILABLE.to_string(),
            },
        };
        Ok(result)
    }
}

/// Predict, then append a log entry for the completed prediction. A failed
/// prediction writes nothing; a failed append is logged and never surfaced
/// to the caller.
pub fn predict_and_log(
    predictor: &Predictor,
    log: &PredictionLog,
    source: &str,
    destination: &str,
    preferred_time: &str,
) -> Result<PredictionResult> {
    let result = predictor.predict(source, destination, preferred_time)?;
    let entry = PredictionLogEntry::new(source, destination, preferred_time, &result.crowd);
    if let Err(e) = log.append(&entry) {
        tracing::warn!("failed to append prediction log entry: {}", e);
    }
    Ok(result)
}
