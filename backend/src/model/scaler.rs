use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

use super::{ArtifactError, ModelError, Scaler, check_width, ensure_finite};

/// Fitted scaler parameters as exported by the training job.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl ScalerArtifact {
    pub fn into_scaler(self) -> Result<Box<dyn Scaler>, ArtifactError> {
        match self {
            ScalerArtifact::Standard { mean, scale } => {
                check_params(("mean", &mean), ("scale", &scale))?;
                Ok(Box::new(StandardScaler::new(mean, scale)))
            }
            ScalerArtifact::MinMax { min, scale } => {
                check_params(("min", &min), ("scale", &scale))?;
                Ok(Box::new(MinMaxScaler::new(min, scale)))
            }
        }
    }
}

fn check_params(a: (&str, &[f64]), b: (&str, &[f64])) -> Result<(), ArtifactError> {
    ensure_finite(a.0, a.1)?;
    ensure_finite(b.0, b.1)?;
    if a.1.len() != b.1.len() {
        return Err(ArtifactError::Invalid(format!(
            "'{}' has {} entries but '{}' has {}",
            a.0,
            a.1.len(),
            b.0,
            b.1.len()
        )));
    }
    Ok(())
}

/// `(x - mean) / scale`
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        // Constant columns are exported with a zero scale; they pass through centred only.
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect::<Vec<_>>();
        Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        }
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_width("StandardScaler", self.n_features(), row.len())?;
        let x = ArrayView1::from(row);
        let scaled = (&x - &self.mean) / &self.scale;
        Ok(scaled.to_vec())
    }
}

/// `x * scale + min`
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    min: Array1<f64>,
    scale: Array1<f64>,
}

impl MinMaxScaler {
    pub fn new(min: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            min: Array1::from(min),
            scale: Array1::from(scale),
        }
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.min.len()
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_width("MinMaxScaler", self.n_features(), row.len())?;
        let x = ArrayView1::from(row);
        let scaled = &x * &self.scale + &self.min;
        Ok(scaled.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scaler_centres_and_scales() {
        let scaler = StandardScaler::new(vec![1.0, 10.0, -2.0], vec![2.0, 5.0, 0.5]);
        let out = scaler.transform(&[3.0, 0.0, -2.0]).unwrap();
        assert_eq!(out, vec![1.0, -2.0, 0.0]);
    }

    #[test]
    fn zero_scale_is_treated_as_one() {
        let scaler = StandardScaler::new(vec![4.0, 0.0], vec![0.0, 1.0]);
        assert_eq!(scaler.transform(&[6.0, 3.0]).unwrap(), vec![2.0, 3.0]);
    }

    #[test]
    fn min_max_scaler_applies_affine_map() {
        let scaler = MinMaxScaler::new(vec![0.0, -1.0], vec![0.5, 0.1]);
        let out = scaler.transform(&[4.0, 10.0]).unwrap();
        assert!((out[0] - 2.0).abs() < 1e-12);
        assert!((out[1] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]);
        let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "X has 2 features, but StandardScaler is expecting 3 features as input"
        );
    }

    #[test]
    fn artifact_decodes_by_kind() {
        let artifact: ScalerArtifact =
            serde_json::from_str(r#"{"kind":"min_max","min":[0.0],"scale":[2.0]}"#).unwrap();
        let scaler = artifact.into_scaler().unwrap();
        assert_eq!(scaler.n_features(), 1);
        assert_eq!(scaler.transform(&[3.0]).unwrap(), vec![6.0]);
    }

    #[test]
    fn mismatched_parameter_lengths_are_invalid() {
        let artifact = ScalerArtifact::Standard {
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
        };
        assert!(matches!(artifact.into_scaler(), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn non_finite_parameters_are_invalid() {
        let artifact = ScalerArtifact::Standard {
            mean: vec![0.0, f64::NAN],
            scale: vec![1.0, 1.0],
        };
        let err = artifact.into_scaler().err().unwrap();
        assert!(err.to_string().contains("non-finite"));
    }
}
