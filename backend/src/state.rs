use crate::model::{ArtifactCodec, ArtifactPaths, ModelPair, load_artifacts};

/// Everything the handlers read. Built once before the server starts and
/// never mutated afterwards.
pub struct AppState {
    paths: ArtifactPaths,
    models: Option<ModelPair>,
}

impl AppState {
    pub fn new(paths: ArtifactPaths, models: Option<ModelPair>) -> Self {
        Self { paths, models }
    }

    pub fn load<C: ArtifactCodec + ?Sized>(paths: ArtifactPaths, codec: &C) -> Self {
        let models = load_artifacts(&paths, codec);
        Self::new(paths, models)
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    pub fn models(&self) -> Option<&ModelPair> {
        self.models.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.models.is_some()
    }
}
