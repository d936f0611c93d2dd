use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Number of features every prediction request must carry.
pub const FEATURE_COUNT: usize = 30;

pub const PREDICTION_MESSAGE: &str = "Prediction made without probability estimation";

/// Input columns in the order the scaler and classifier were fitted on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum FeatureName {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
    V17,
    V18,
    V19,
    V20,
    V21,
    V22,
    V23,
    V24,
    V25,
    V26,
    V27,
    V28,
    Amount,
    Time,
}

impl FeatureName {
    /// JSON key of this feature.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Position of this feature in the model input vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The anonymised principal components `V1..V28`.
    pub fn is_component(self) -> bool {
        !matches!(self, FeatureName::Amount | FeatureName::Time)
    }
}

/// All required features, in model column order.
pub fn required_features() -> impl Iterator<Item = FeatureName> {
    FeatureName::iter()
}

/// A single transaction as sent by clients, keyed by feature name.
pub type TransactionRecord = BTreeMap<String, f64>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    Normal,
    Fraud,
}

impl PredictionLabel {
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction == 1 {
            PredictionLabel::Fraud
        } else {
            PredictionLabel::Normal
        }
    }

    pub fn is_fraud(self) -> bool {
        self == PredictionLabel::Fraud
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub prediction_label: PredictionLabel,
    pub status: ResponseStatus,
    pub message: String,
}

impl PredictionResponse {
    pub fn new(prediction: u8) -> Self {
        Self {
            prediction,
            prediction_label: PredictionLabel::from_prediction(prediction),
            status: ResponseStatus::Success,
            message: PREDICTION_MESSAGE.to_string(),
        }
    }
}

/// Configured artifact locations and whether they exist on disk right now.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub model_path: String,
    pub scaler_path: String,
    pub model_exists: bool,
    pub scaler_exists: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub status: ResponseStatus,
    #[serde(flatten)]
    pub artifacts: Option<ArtifactReport>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: ResponseStatus::Error,
            artifacts: None,
        }
    }

    pub fn with_artifacts(mut self, artifacts: ArtifactReport) -> Self {
        self.artifacts = Some(artifacts);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileSizes {
    pub model: Option<u64>,
    pub scaler: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: ResponseStatus,
    pub model_loaded: bool,
    pub scaler_loaded: bool,
    #[serde(flatten)]
    pub artifacts: ArtifactReport,
    pub file_sizes: FileSizes,
}
