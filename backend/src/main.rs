use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use backend::config::ServerConfig;
use backend::model::{ArtifactPaths, JsonCodec};
use backend::model::loader::file_size;
use backend::routes::{configure_routes, cors};
use backend::state::AppState;
use std::env;
use std::path::Path;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let paths = config.artifact_paths();
    log_startup_info(&config, &paths);

    let state = web::Data::new(AppState::load(paths, &JsonCodec));
    if state.is_loaded() {
        log::info!("Model and scaler ready");
    } else {
        log::warn!("Model or scaler unavailable; /predict will fail until the service is restarted");
    }

    let frontend_dir = config.frontend_dir();
    if let Some(dir) = &frontend_dir {
        log::info!("Serving frontend from {}", dir.display());
    }

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

fn log_startup_info(config: &ServerConfig, paths: &ArtifactPaths) {
    log::info!("Startup information:");
    match env::current_dir() {
        Ok(current_dir) => log::info!("Current working directory: {}", current_dir.display()),
        Err(e) => log::error!("Failed to get the current working directory: {}", e),
    }
    log::info!("Base directory: {}", config.base_dir.display());
    log::info!("Model path: {}", paths.model.display());
    log::info!("Scaler path: {}", paths.scaler.display());
    log::info!("Model file exists: {}", paths.model.exists());
    log::info!("Model file size: {}", describe_size(&paths.model));
    log::info!("Scaler file exists: {}", paths.scaler.exists());
    log::info!("Scaler file size: {}", describe_size(&paths.scaler));
}

fn describe_size(path: &Path) -> String {
    file_size(path)
        .map(|bytes| format!("{} bytes", bytes))
        .unwrap_or_else(|| "N/A".to_string())
}
