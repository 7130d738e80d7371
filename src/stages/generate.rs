use std::fs;
use std::path::Path;

use colored::Colorize;
use log::{info, warn};

use crate::errors::WizardError;
use crate::models::artifact::BuildFileArtifact;
use crate::models::catalog::BaseImageCatalog;
use crate::models::image::ImageConfig;

/// Render the build file for `image`. Output is deterministic: same inputs
/// produce byte-identical text, and every line ends with `\n` regardless of
/// host platform.
pub fn render_buildfile(image: &ImageConfig, catalog: &BaseImageCatalog) -> BuildFileArtifact {
    let dest_root = catalog.dest_root(&image.base_image);

    let mut content = String::new();
    content.push_str(&format!("FROM {}\n", image.base_image));

    for file in &image.selected_files {
        let normalized = file.replace('\\', "/");
        match normalized.rfind('/') {
            Some(split) => content.push_str(&format!(
                "COPY {} {}{}/\n",
                normalized,
                dest_root,
                &normalized[..split]
            )),
            // No directory join for root-level files: a trailing slash here
            // would nest the copy one level deep.
            None => content.push_str(&format!("COPY {} {}\n", normalized, dest_root)),
        }
    }

    content.push_str(&format!("EXPOSE {}\n", image.exposed_port));
    content.push_str(&format!("CMD {}\n", image.run_command));

    BuildFileArtifact {
        filename: image.buildfile_name(),
        content,
    }
}

/// Write `artifact` into `dir`. Images sharing a name overwrite each other
/// silently.
pub fn write_buildfile(dir: &Path, artifact: &BuildFileArtifact) -> Result<(), WizardError> {
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.content).map_err(|source| WizardError::Generation { path, source })
}

/// Generate and write one build file per image. A write failure drops that
/// image from the returned list and is reported; remaining images still get
/// their artifacts.
pub fn generate_buildfiles(
    dir: &Path,
    images: &[ImageConfig],
    catalog: &BaseImageCatalog,
) -> Vec<(ImageConfig, BuildFileArtifact)> {
    let mut pairs = Vec::with_capacity(images.len());

    for image in images {
        let artifact = render_buildfile(image, catalog);
        match write_buildfile(dir, &artifact) {
            Ok(()) => {
                info!("Wrote build file {:?}", dir.join(&artifact.filename));
                println!(
                    "Dockerfile for {} created: {}",
                    image.image_name, artifact.filename
                );
                pairs.push((image.clone(), artifact));
            }
            Err(e) => {
                warn!("Skipping image {}: {}", image.image_name, e);
                eprintln!("{}", format!("{}", e).red());
            }
        }
    }

    pairs
}
