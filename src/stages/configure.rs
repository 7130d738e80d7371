use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::ScanConfig;
use crate::errors::WizardError;
use crate::models::catalog::BaseImageCatalog;
use crate::models::image::ImageConfig;
use crate::prompt::Prompter;
use crate::stages::scan::enumerate_files;
use crate::stages::selection::select_files;

/// Run one full configuration pass per requested image, returning the
/// complete ordered list or an error. A failed or cancelled prompt aborts
/// the pass; the caller never sees a partially-populated image.
pub fn configure_images(
    prompter: &mut dyn Prompter,
    root: &Path,
    scan: &ScanConfig,
    catalog: &BaseImageCatalog,
) -> Result<Vec<ImageConfig>> {
    let count_answer = prompter.input("How many images do you want to generate?", "1")?;
    let image_count: usize = count_answer.trim().parse().map_err(|_| {
        WizardError::Configuration(format!(
            "image count must be a number, got {:?}",
            count_answer
        ))
    })?;
    if image_count == 0 {
        return Err(WizardError::Configuration("image count must be at least 1".to_string()).into());
    }

    info!("Configuring {} image(s)", image_count);

    let identifiers: Vec<String> = catalog
        .identifiers()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut images = Vec::with_capacity(image_count);
    for index in 0..image_count {
        println!(
            "\n{}",
            format!("--- Configuring Image {} ---", index + 1).bold()
        );

        let base_choice = prompter.select(
            &format!("Select the base image for Image {}", index + 1),
            &identifiers,
        )?;
        let base_image = identifiers[base_choice].clone();

        let default_run_command = catalog.default_command(&base_image).to_string();

        // Selection is re-run per image; files are never shared across images.
        let all_files = enumerate_files(root, scan)?;
        let selected_files = select_files(prompter, &all_files, scan.page_size)?;

        let image_name = prompter.input(
            &format!("Name for Image {}", index + 1),
            &format!("image_{}", index + 1),
        )?;
        let exposed_port = prompter.input(&format!("Port to expose for Image {}", index + 1), "8000")?;
        let run_command = prompter.input(
            &format!("Command to run Image {}", index + 1),
            &default_run_command,
        )?;

        images.push(ImageConfig {
            index,
            base_image,
            image_name,
            exposed_port,
            run_command,
            selected_files,
        });
    }

    Ok(images)
}
