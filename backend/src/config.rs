use std::env;
use std::path::{Path, PathBuf};

use crate::model::ArtifactPaths;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`; artifacts are always resolved from the base directory.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            host,
            port,
            base_dir: resolve_base_dir(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::under(&self.base_dir)
    }

    /// Built frontend bundle, when one sits next to the backend crate.
    pub fn frontend_dir(&self) -> Option<PathBuf> {
        let dir = self.base_dir.join("..").join("frontend").join("dist");
        dir.is_dir().then_some(dir)
    }
}

/// The backend crate directory under `cargo run`, otherwise the directory
/// holding the executable.
pub fn resolve_base_dir() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir);
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_at(base_dir: &Path) -> ServerConfig {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_dir: base_dir.to_path_buf(),
        }
    }

    #[test]
    fn binds_to_host_and_port() {
        assert_eq!(config_at(Path::new("/srv")).bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn artifacts_resolve_under_base_dir() {
        let paths = config_at(Path::new("/srv/fraud")).artifact_paths();
        assert_eq!(paths.model, PathBuf::from("/srv/fraud/model/model.pkl"));
    }

    #[test]
    fn frontend_dir_requires_a_build() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("backend");
        std::fs::create_dir_all(&base).unwrap();
        assert!(config_at(&base).frontend_dir().is_none());

        std::fs::create_dir_all(root.path().join("frontend").join("dist")).unwrap();
        assert!(config_at(&base).frontend_dir().is_some());
    }
}
