use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use shared::{ArtifactReport, FEATURE_COUNT, FileSizes};

use super::{ArtifactCodec, ModelPair};

pub const MODEL_DIR: &str = "model";
pub const MODEL_FILE: &str = "model.pkl";
pub const SCALER_FILE: &str = "scaler.pkl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Scaler,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Model => write!(f, "Model"),
            ArtifactKind::Scaler => write!(f, "Scaler"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("{kind} file not found at {}", path.display())]
    Missing { kind: ArtifactKind, path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode artifact: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

/// Locations of the two artifacts, fixed at `<base>/model/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    pub fn under(base_dir: &Path) -> Self {
        let dir = base_dir.join(MODEL_DIR);
        Self {
            model: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
        }
    }

    /// Stats both files now; the result reflects the disk, not what was loaded.
    pub fn report(&self) -> ArtifactReport {
        ArtifactReport {
            model_path: self.model.display().to_string(),
            scaler_path: self.scaler.display().to_string(),
            model_exists: self.model.exists(),
            scaler_exists: self.scaler.exists(),
        }
    }

    pub fn file_sizes(&self) -> FileSizes {
        FileSizes {
            model: file_size(&self.model),
            scaler: file_size(&self.scaler),
        }
    }
}

pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Loads the scaler and classifier together. Any failure is logged and
/// discards both, so the service never runs with half a pair.
pub fn load_artifacts<C: ArtifactCodec + ?Sized>(paths: &ArtifactPaths, codec: &C) -> Option<ModelPair> {
    match try_load_artifacts(paths, codec) {
        Ok(pair) => Some(pair),
        Err(e @ ArtifactError::Missing { .. }) => {
            log::error!("{}", e);
            None
        }
        Err(e) => {
            log::error!("Unexpected error loading artifacts: {}", e);
            log::error!("{:?}", e);
            None
        }
    }
}

pub fn try_load_artifacts<C: ArtifactCodec + ?Sized>(
    paths: &ArtifactPaths,
    codec: &C,
) -> Result<ModelPair, ArtifactError> {
    ensure_exists(ArtifactKind::Model, &paths.model)?;
    ensure_exists(ArtifactKind::Scaler, &paths.scaler)?;

    let classifier = load_one(ArtifactKind::Model, &paths.model, |bytes| {
        codec.decode_classifier(bytes)
    })?;
    let scaler = load_one(ArtifactKind::Scaler, &paths.scaler, |bytes| codec.decode_scaler(bytes))?;

    for (kind, width) in [
        (ArtifactKind::Model, classifier.n_features()),
        (ArtifactKind::Scaler, scaler.n_features()),
    ] {
        if width != FEATURE_COUNT {
            return Err(ArtifactError::Invalid(format!(
                "{} was fitted on {} features, expected {}",
                kind, width, FEATURE_COUNT
            )));
        }
    }

    Ok(ModelPair::new(scaler, classifier))
}

fn ensure_exists(kind: ArtifactKind, path: &Path) -> Result<(), ArtifactError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ArtifactError::Missing {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn load_one<T, F>(kind: ArtifactKind, path: &Path, decode: F) -> Result<T, ArtifactError>
where
    F: FnOnce(&[u8]) -> Result<T, ArtifactError>,
{
    log::info!("Attempting to load {} from: {}", kind, path.display());
    let loaded = fs::read(path)
        .map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|bytes| decode(&bytes))
        .inspect_err(|e| log::error!("Error loading {}: {}", kind, e))?;
    log::info!("{} loaded successfully", kind);
    Ok(loaded)
}
