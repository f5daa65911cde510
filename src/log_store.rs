use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One logged prediction. Append-only; never read back by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionLogEntry {
    pub source: String,
    pub destination: String,
    pub preferred_time: String,
    pub crowd_level: String,
    pub timestamp: DateTime<Utc>,
}

impl PredictionLogEntry {
    pub fn new(source: &str, destination: &str, preferred_time: &str, crowd_level: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            preferred_time: preferred_time.to_string(),
            crowd_level: crowd_level.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// JSON-lines log file, one entry per line. Appends are serialized behind a
/// mutex; durability relative to the response is not guaranteed.
pub struct PredictionLog {
    file: Mutex<File>,
}

impl PredictionLog {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    pub fn append(&self, entry: &PredictionLogEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        line.push('\n');
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_entries_are_one_json_line_each() {
        let path = std::env::temp_dir().join(format!(
            "crowd_predictor_log_test_{}.jsonl",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let log = PredictionLog::open(&path).unwrap();
        log.append(&PredictionLogEntry::new("Vijayawada", "Guntur", "Morning", "Low"))
            .unwrap();
        log.append(&PredictionLogEntry::new("Guntur", "Tenali", "Evening", "High"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: PredictionLogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.source, "Vijayawada");
        assert_eq!(first.crowd_level, "Low");

        let _ = std::fs::remove_file(&path);
    }
}
