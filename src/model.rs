use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{PipelineError, Result};

/// Fixed ensemble size and seed so repeated training on the same dataset is
/// reproducible.
const N_TREES: u16 = 100;
const SEED: u64 = 42;

type Forest = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

/// Random-forest crowd classifier over the 3-dimensional encoded feature
/// space (source, destination, time) -> encoded crowd level. Fit once,
/// frozen, read-only at request time.
#[derive(Serialize, Deserialize)]
pub struct CrowdModel {
    forest: Forest,
}

impl CrowdModel {
    /// Fit on encoded features and targets. `features` is one [src, dst,
    /// time] code triple per dataset row; `targets` the encoded crowd level.
    pub fn fit(features: &[[usize; 3]], targets: &[usize]) -> Result<Self> {
        let x: Vec<Vec<f64>> = features
            .iter()
            .map(|f| f.iter().map(|&c| c as f64).collect())
            .collect();
        let x = DenseMatrix::from_2d_vec(&x);
        let y: Vec<u32> = targets.iter().map(|&t| t as u32).collect();

        let params = RandomForestClassifierParameters::default()
            .with_n_trees(N_TREES)
            .with_seed(SEED);
        let forest = Forest::fit(&x, &y, params)
            .map_err(|e| PipelineError::Model(e.to_string()))?;
        Ok(Self { forest })
    }

    /// Predict the encoded crowd class for one query triple.
    pub fn predict(&self, encoded: [usize; 3]) -> Result<usize> {
        let x = DenseMatrix::from_2d_vec(&vec![encoded.iter().map(|&c| c as f64).collect()]);
        let pred = self
            .forest
            .predict(&x)
            .map_err(|e| PipelineError::Model(e.to_string()))?;
        pred.first()
            .map(|&c| c as usize)
            .ok_or_else(|| PipelineError::Model("classifier returned no prediction".to_string()))
    }
}
