use std::path::Path;

use colored::Colorize;
use log::{info, warn};

use crate::config::EngineConfig;
use crate::engine::ContainerEngine;
use crate::models::artifact::BuildFileArtifact;
use crate::models::image::ImageConfig;

/// What happened to one image during the build/run pass.
#[derive(Debug, Clone)]
pub struct BuildRunOutcome {
    pub image_name: String,
    pub container_name: String,
    pub host_port: u16,
    pub built: bool,
    pub ran: bool,
}

/// Build and run each image in list order. Each image's build+run sequence
/// is independent: a failure is surfaced (captured stderr included) and the
/// pass moves on to the next image. A failed build skips that image's run
/// step. Nothing is rolled back.
pub fn build_and_run(
    engine: &dyn ContainerEngine,
    context_dir: &Path,
    pairs: &[(ImageConfig, BuildFileArtifact)],
    config: &EngineConfig,
    launch_browser: bool,
) -> Vec<BuildRunOutcome> {
    let mut outcomes = Vec::with_capacity(pairs.len());

    for (image, artifact) in pairs {
        // Sequential host ports keep concurrently running images from
        // colliding on the published port.
        let host_port = config.host_port_base.saturating_add(image.index as u16);
        let container_name = image.container_name();
        let mut outcome = BuildRunOutcome {
            image_name: image.image_name.clone(),
            container_name: container_name.clone(),
            host_port,
            built: false,
            ran: false,
        };

        info!(
            "Building image {} from {}",
            image.image_name, artifact.filename
        );
        println!("\nBuilding image {}...", image.image_name.bold());

        match engine.build(context_dir, &artifact.filename, &image.image_name) {
            Ok(output) => {
                outcome.built = true;
                if !output.stdout.is_empty() {
                    println!("Build output:\n{}", output.stdout);
                }
            }
            Err(e) => {
                warn!("Build failed for {}", image.image_name);
                eprintln!("{}", format!("{}", e).red());
                outcomes.push(outcome);
                continue;
            }
        }

        info!(
            "Running container {} on host port {}",
            container_name, host_port
        );
        match engine.run(&image.image_name, host_port, &image.exposed_port, &container_name) {
            Ok(output) => {
                outcome.ran = true;
                if !output.stdout.is_empty() {
                    println!("Container run output:\n{}", output.stdout);
                }
                if launch_browser {
                    let url = format!("http://localhost:{}", host_port);
                    println!("Opening browser to {}...", url);
                    if let Err(e) = webbrowser::open(&url) {
                        // Best effort only, never fails the image.
                        warn!("Failed to open browser: {}", e);
                    }
                }
            }
            Err(e) => {
                warn!("Run failed for {}", image.image_name);
                eprintln!("{}", format!("{}", e).red());
            }
        }

        outcomes.push(outcome);
    }

    outcomes
}
