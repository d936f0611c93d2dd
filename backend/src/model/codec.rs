use super::{ArtifactError, Classifier, ClassifierArtifact, Scaler, ScalerArtifact};

/// Turns raw artifact bytes into usable model objects.
pub trait ArtifactCodec {
    fn decode_scaler(&self, bytes: &[u8]) -> Result<Box<dyn Scaler>, ArtifactError>;
    fn decode_classifier(&self, bytes: &[u8]) -> Result<Box<dyn Classifier>, ArtifactError>;
}

/// Fitted parameters stored as JSON documents tagged by `kind`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ArtifactCodec for JsonCodec {
    fn decode_scaler(&self, bytes: &[u8]) -> Result<Box<dyn Scaler>, ArtifactError> {
        serde_json::from_slice::<ScalerArtifact>(bytes)?.into_scaler()
    }

    fn decode_classifier(&self, bytes: &[u8]) -> Result<Box<dyn Classifier>, ArtifactError> {
        serde_json::from_slice::<ClassifierArtifact>(bytes)?.into_classifier()
    }
}
