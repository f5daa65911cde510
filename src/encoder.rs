use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::ScheduleRow;
use crate::error::{PipelineError, Result};

/// A category <-> dense code bijection, fit from the sorted unique values of
/// one dataset column. There is no UNK bucket: encoding an unseen value is a
/// hard error, never a silent mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Fit from observed values: sorted, deduplicated.
    pub fn fit<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut classes: Vec<String> = values.map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        let index = Self::build_index(&classes);
        Self { classes, index }
    }

    fn build_index(classes: &[String]) -> HashMap<String, usize> {
        classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect()
    }

    /// The index map is skipped during serialization; rebuild it after load.
    pub fn rebuild_index(&mut self) {
        self.index = Self::build_index(&self.classes);
    }

    pub fn encode(&self, field: &'static str, value: &str) -> Result<usize> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| PipelineError::unknown_category(field, value))
    }

    pub fn decode(&self, code: usize) -> Result<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| PipelineError::Model(format!("class code {} out of range", code)))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The four encoders fit together from one dataset. Immutable after fit;
/// persisted alongside the dataset so classifier and vocabulary never drift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncoderSet {
    pub source: LabelEncoder,
    pub destination: LabelEncoder,
    pub time: LabelEncoder,
    pub crowd: LabelEncoder,
}

impl EncoderSet {
    pub fn fit(rows: &[ScheduleRow]) -> Self {
        Self {
            source: LabelEncoder::fit(rows.iter().map(|r| r.source.as_str())),
            destination: LabelEncoder::fit(rows.iter().map(|r| r.destination.as_str())),
            time: LabelEncoder::fit(rows.iter().map(|r| r.preferred_time.as_str())),
            crowd: LabelEncoder::fit(rows.iter().map(|r| r.crowd_level.as_str())),
        }
    }

    pub fn rebuild_indexes(&mut self) {
        self.source.rebuild_index();
        self.destination.rebuild_index();
        self.time.rebuild_index();
        self.crowd.rebuild_index();
    }

    /// Encode one query triple into classifier feature space.
    pub fn encode_query(
        &self,
        source: &str,
        destination: &str,
        preferred_time: &str,
    ) -> Result<[usize; 3]> {
        Ok([
            self.source.encode("source", source)?,
            self.destination.encode("destination", destination)?,
            self.time.encode("time", preferred_time)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_sorts_and_dedups() {
        let enc = LabelEncoder::fit(["b", "a", "b", "c"].into_iter());
        assert_eq!(enc.classes(), &["a", "b", "c"]);
        assert_eq!(enc.len(), 3);
    }

    #[test]
    fn roundtrip_is_identity() {
        let enc = LabelEncoder::fit(["Morning", "Evening", "Afternoon"].into_iter());
        for class in enc.classes().to_vec() {
            let code = enc.encode("time", &class).unwrap();
            assert_eq!(enc.decode(code).unwrap(), class);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let enc = LabelEncoder::fit(["Guntur", "Vijayawada"].into_iter());
        let err = enc.encode("destination", "Nowhere").unwrap_err();
        match err {
            PipelineError::UnknownCategory { field, value } => {
                assert_eq!(field, "destination");
                assert_eq!(value, "Nowhere");
            }
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn index_survives_serde() {
        let enc = LabelEncoder::fit(["Low", "Medium", "High"].into_iter());
        let bytes = bincode::serialize(&enc).unwrap();
        let mut back: LabelEncoder = bincode::deserialize(&bytes).unwrap();
        back.rebuild_index();
        assert_eq!(back.encode("crowd", "Medium").unwrap(), enc.encode("crowd", "Medium").unwrap());
    }
}
