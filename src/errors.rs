use std::path::PathBuf;
use thiserror::Error;

/// Error kinds for the wizard. Filesystem and configuration errors abort the
/// whole run; generation and engine errors stay local to one image.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("failed to read directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration failed: {0}")]
    Configuration(String),

    #[error("failed to write build file {path}: {source}")]
    Generation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("build failed for image {tag}:\n{stderr}")]
    EngineBuild { tag: String, stderr: String },

    #[error("run failed for image {tag}:\n{stderr}")]
    EngineRun { tag: String, stderr: String },
}
