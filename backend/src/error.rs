use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::{ArtifactReport, ErrorResponse};

use crate::features::FeatureError;
use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Model or scaler not loaded properly. Check server logs for details.")]
    NotLoaded(ArtifactReport),
    #[error("Request body exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("Failed to read request body: {0}")]
    Read(String),
    #[error("Failed to decode JSON object: {0}")]
    Body(#[from] serde_json::Error),
    #[error(transparent)]
    Features(#[from] FeatureError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl PredictError {
    /// Whether the client caused the failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, PredictError::Features(FeatureError::Missing(_)))
    }
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ErrorResponse::new(self.to_string());
        if let PredictError::NotLoaded(report) = self {
            body = body.with_artifacts(report.clone());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_features_map_to_bad_request() {
        let err = PredictError::from(FeatureError::Missing(vec!["Time".into()]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing features: Time");
    }

    #[test]
    fn everything_else_is_a_server_error() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            PredictError::from(bad_json).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = PredictError::from(ModelError::DimensionMismatch {
            stage: "StandardScaler",
            expected: 30,
            got: 29,
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn oversized_body_renders_json_error() {
        let err = PredictError::TooLarge { limit: 1024 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Request body exceeds the 1024 byte limit");
    }
}
