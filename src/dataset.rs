use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// One historical trip record, exactly as it appears in the CSV snapshot.
/// Row order in the file is preserved; lookups take the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRow {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Preferred_Time")]
    pub preferred_time: String,
    #[serde(rename = "Crowd_Level")]
    pub crowd_level: String,
    #[serde(rename = "Best_Train")]
    pub best_train: String,
    #[serde(rename = "Departure")]
    pub departure: String,
    #[serde(rename = "Arrival")]
    pub arrival: String,
    #[serde(rename = "Expected_Standing_Time")]
    pub expected_standing_time: String,
    #[serde(rename = "Seat_Likely_Available_After")]
    pub seat_likely_available_after: String,
    #[serde(rename = "Alternate_Train")]
    pub alternate_train: String,
}

/// Load the dataset, keeping the file's natural row order.
pub fn load(path: &Path) -> Result<Vec<ScheduleRow>> {
    if !path.exists() {
        return Err(PipelineError::DatasetMissing(path.to_path_buf()));
    }
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// First row matching all three query strings exactly. Raw string equality,
/// case-sensitive; source must equal source, not destination.
pub fn find_exact<'a>(
    rows: &'a [ScheduleRow],
    source: &str,
    destination: &str,
    preferred_time: &str,
) -> Option<&'a ScheduleRow> {
    rows.iter().find(|r| {
        r.source == source && r.destination == destination && r.preferred_time == preferred_time
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(src: &str, dst: &str, time: &str, train: &str) -> ScheduleRow {
        ScheduleRow {
            source: src.into(),
            destination: dst.into(),
            preferred_time: time.into(),
            crowd_level: "Low".into(),
            best_train: train.into(),
            departure: "06:00".into(),
            arrival: "08:00".into(),
            expected_standing_time: "10 mins".into(),
            seat_likely_available_after: "Guntur".into(),
            alternate_train: "12712".into(),
        }
    }

    #[test]
    fn exact_match_takes_first_row_in_file_order() {
        let rows = vec![
            row("Vijayawada", "Guntur", "Morning", "12723"),
            row("Vijayawada", "Guntur", "Morning", "99999"),
        ];
        let hit = find_exact(&rows, "Vijayawada", "Guntur", "Morning").unwrap();
        assert_eq!(hit.best_train, "12723");
    }

    #[test]
    fn match_is_direction_sensitive() {
        let rows = vec![row("Vijayawada", "Guntur", "Morning", "12723")];
        assert!(find_exact(&rows, "Guntur", "Vijayawada", "Morning").is_none());
    }

    #[test]
    fn match_is_case_sensitive() {
        let rows = vec![row("Vijayawada", "Guntur", "Morning", "12723")];
        assert!(find_exact(&rows, "vijayawada", "Guntur", "Morning").is_none());
    }

    #[test]
    fn missing_file_is_dataset_missing() {
        let err = load(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::DatasetMissing(_)));
    }
}
