use std::path::Path;
use std::process::Command;

use log::{debug, info};

use super::{ContainerEngine, EngineOutput};
use crate::errors::WizardError;

/// Engine implementation that shells out to a docker-compatible binary.
/// Arguments are passed as a vector, so user-supplied image names and
/// commands never go through a shell.
#[derive(Debug, Clone)]
pub struct DockerEngine {
    binary: String,
}

impl DockerEngine {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

impl ContainerEngine for DockerEngine {
    fn build(
        &self,
        context_dir: &Path,
        buildfile: &str,
        tag: &str,
    ) -> Result<EngineOutput, WizardError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("build")
            .arg("-t")
            .arg(tag)
            .arg("-f")
            .arg(buildfile)
            .arg(".")
            .current_dir(context_dir);

        debug!("Running build command: {:?}", command);

        let output = command.output().map_err(|e| WizardError::EngineBuild {
            tag: tag.to_string(),
            stderr: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(WizardError::EngineBuild {
                tag: tag.to_string(),
                stderr,
            });
        }

        info!("Built image {}", tag);
        Ok(EngineOutput { stdout, stderr })
    }

    fn run(
        &self,
        tag: &str,
        host_port: u16,
        container_port: &str,
        container_name: &str,
    ) -> Result<EngineOutput, WizardError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("run")
            .arg("-d")
            .arg("-p")
            .arg(format!("{}:{}", host_port, container_port))
            .arg("--name")
            .arg(container_name)
            .arg(tag);

        debug!("Running container command: {:?}", command);

        let output = command.output().map_err(|e| WizardError::EngineRun {
            tag: tag.to_string(),
            stderr: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(WizardError::EngineRun {
                tag: tag.to_string(),
                stderr,
            });
        }

        info!("Started container {} from {}", container_name, tag);
        Ok(EngineOutput { stdout, stderr })
    }
}
