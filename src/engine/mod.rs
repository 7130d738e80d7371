pub mod docker;

pub use docker::DockerEngine;

use std::path::Path;

use crate::errors::WizardError;

/// Captured output of one engine invocation, stdout and stderr kept apart.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Capability interface over the external container engine.
pub trait ContainerEngine {
    /// Build an image from `buildfile` (relative to `context_dir`), tagged `tag`
    fn build(
        &self,
        context_dir: &Path,
        buildfile: &str,
        tag: &str,
    ) -> Result<EngineOutput, WizardError>;

    /// Run `tag` detached, publishing `host_port` to `container_port`
    fn run(
        &self,
        tag: &str,
        host_port: u16,
        container_port: &str,
        container_name: &str,
    ) -> Result<EngineOutput, WizardError>;
}
