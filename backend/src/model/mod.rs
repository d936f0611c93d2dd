//! Fitted scaler and classifier capabilities, plus the loader that builds them
//! from the artifacts on disk.

pub mod classifier;
pub mod codec;
pub mod loader;
pub mod scaler;

pub use classifier::ClassifierArtifact;
pub use codec::{ArtifactCodec, JsonCodec};
pub use loader::{ArtifactError, ArtifactKind, ArtifactPaths, load_artifacts, try_load_artifacts};
pub use scaler::ScalerArtifact;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("X has {got} features, but {stage} is expecting {expected} features as input")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        got: usize,
    },
}

/// A fitted feature transform.
pub trait Scaler: Send + Sync {
    fn n_features(&self) -> usize;
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// A fitted binary classifier returning the class label (0 or 1) of one row.
pub trait Classifier: Send + Sync {
    fn n_features(&self) -> usize;
    fn predict(&self, row: &[f64]) -> Result<u8, ModelError>;
}

/// The scaler and classifier that are only ever served together.
pub struct ModelPair {
    scaler: Box<dyn Scaler>,
    classifier: Box<dyn Classifier>,
}

impl ModelPair {
    pub fn new(scaler: Box<dyn Scaler>, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    pub fn classify(&self, row: &[f64]) -> Result<u8, ModelError> {
        let scaled = self.scaler.transform(row)?;
        self.classifier.predict(&scaled)
    }
}

pub(crate) fn check_width(stage: &'static str, expected: usize, got: usize) -> Result<(), ModelError> {
    if expected != got {
        return Err(ModelError::DimensionMismatch {
            stage,
            expected,
            got,
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite(name: &str, values: &[f64]) -> Result<(), ArtifactError> {
    if values.is_empty() {
        return Err(ArtifactError::Invalid(format!("'{}' is empty", name)));
    }
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(ArtifactError::Invalid(format!(
            "'{}' has a non-finite value at position {}",
            name, pos
        )));
    }
    Ok(())
}
