use serde::{Deserialize, Serialize};

/// Everything collected for one image during the configuration pass.
/// Assembled field by field and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// 0-based position in the configuration order
    pub index: usize,

    /// Base image identifier, e.g. "python:3.9-slim"
    pub base_image: String,

    /// User-supplied name, used as the image tag and in the build filename
    pub image_name: String,

    /// Kept as the raw answer string; no numeric validation is applied
    pub exposed_port: String,

    /// Written verbatim into the CMD directive
    pub run_command: String,

    /// Paths chosen by the user; selection order drives COPY order
    pub selected_files: Vec<String>,
}

impl ImageConfig {
    /// Filename the build file is written under
    pub fn buildfile_name(&self) -> String {
        format!("Dockerfile.{}", self.image_name)
    }

    /// Deterministic container name for the run step
    pub fn container_name(&self) -> String {
        format!("container_{}", self.index)
    }
}
