use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use shared::{HealthResponse, PredictionResponse, ResponseStatus};

use crate::error::PredictError;
use crate::features::feature_vector;
use crate::model::ModelPair;
use crate::state::AppState;

/// Largest `/predict` body read before the request is rejected.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: Option<PathBuf>) {
    cfg.service(web::resource("/predict").route(web::post().to(predict)))
        .service(web::resource("/health").route(web::get().to(health)));

    if let Some(dir) = frontend_dir {
        cfg.service(Files::new("/", dir).index_file("index.html"));
    }
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

async fn predict(state: web::Data<AppState>, payload: web::Payload) -> Result<HttpResponse, PredictError> {
    let Some(models) = state.models() else {
        return Err(PredictError::NotLoaded(state.paths().report()));
    };

    let result = match read_body(payload).await {
        Ok(body) => classify(models, &body),
        Err(e) => Err(e),
    };

    match result {
        Ok(prediction) => {
            info!("Prediction: {}", prediction);
            Ok(HttpResponse::Ok().json(PredictionResponse::new(prediction)))
        }
        Err(e) => {
            if e.is_validation() {
                warn!("Rejected prediction request: {}", e);
            } else {
                error!("Error during prediction: {}", e);
                error!("{:?}", e);
            }
            Err(e)
        }
    }
}

async fn read_body(payload: web::Payload) -> Result<web::Bytes, PredictError> {
    match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(body) => body.map_err(|e| PredictError::Read(e.to_string())),
        Err(_) => Err(PredictError::TooLarge {
            limit: MAX_BODY_BYTES,
        }),
    }
}

fn classify(models: &ModelPair, body: &[u8]) -> Result<u8, PredictError> {
    let record: serde_json::Value = serde_json::from_slice(body)?;
    let row = feature_vector(&record)?;
    Ok(models.classify(&row)?)
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    let loaded = state.is_loaded();
    HttpResponse::Ok().json(HealthResponse {
        status: ResponseStatus::Healthy,
        model_loaded: loaded,
        scaler_loaded: loaded,
        artifacts: state.paths().report(),
        file_sizes: state.paths().file_sizes(),
    })
}
