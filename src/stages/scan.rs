use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::errors::WizardError;

/// Enumerate files under `root` as paths relative to it, separators
/// normalized to `/`. Excluded directories are pruned before descent, and a
/// directory holding more direct files than the configured threshold
/// contributes no files while its subdirectories are still traversed.
///
/// Symlinks are not followed, so link cycles cannot loop the walk.
pub fn enumerate_files(root: &Path, config: &ScanConfig) -> Result<Vec<String>, WizardError> {
    // Surfaces both a missing and an unreadable root before the walk starts.
    fs::read_dir(root).map_err(|source| WizardError::Filesystem {
        path: root.to_path_buf(),
        source,
    })?;

    info!("Starting file tree traversal at: {:?}", root);

    // (containing directory, relative path), in deterministic walk order
    let mut files: Vec<(String, String)> = Vec::new();
    let mut direct_counts: HashMap<String, usize> = HashMap::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let keep = entry
                .file_name()
                .to_str()
                .map(|name| !config.exclude_dirs.iter().any(|d| d == name))
                .unwrap_or(true);
            if !keep {
                debug!("Pruning excluded directory: {:?}", entry.path());
            }
            keep
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error accessing path: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let Some(rel_str) = rel.to_str() else {
            warn!("Skipping non-UTF-8 path: {:?}", rel);
            continue;
        };
        let rel_str = rel_str.replace('\\', "/");

        let parent = rel_str.rfind('/').map_or("", |i| &rel_str[..i]).to_string();
        *direct_counts.entry(parent.clone()).or_insert(0) += 1;
        files.push((parent, rel_str));
    }

    let paths: Vec<String> = files
        .into_iter()
        .filter(|(parent, _)| direct_counts[parent] <= config.max_files_per_folder)
        .map(|(_, path)| path)
        .collect();

    info!("File tree traversal complete: {} files retained", paths.len());

    Ok(paths)
}
