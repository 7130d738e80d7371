use anyhow::Result;
use log::info;

use crate::prompt::Prompter;

/// Sentinel choice appended to every page except the last.
pub const LOAD_MORE: &str = "[Load more]";

/// Page through `files`, accumulating the user's picks. Picking the sentinel
/// advances to the next page; leaving it out stops browsing, even if more
/// pages exist. Each page offers previously-unseen items only, so the result
/// is duplicate-free and in first-selected order.
pub fn select_files(
    prompter: &mut dyn Prompter,
    files: &[String],
    page_size: usize,
) -> Result<Vec<String>> {
    let page_size = page_size.max(1);
    let mut selected = Vec::new();
    let mut start = 0;

    while start < files.len() {
        let end = (start + page_size).min(files.len());
        let page = &files[start..end];
        let more_remaining = end < files.len();

        let mut choices: Vec<String> = page.to_vec();
        if more_remaining {
            choices.push(LOAD_MORE.to_string());
        }

        let picked = prompter.multi_select("Select files to include (or load more):", &choices)?;

        let load_more = more_remaining && picked.iter().any(|&i| i == choices.len() - 1);
        for &i in &picked {
            if i < page.len() {
                selected.push(page[i].clone());
            }
        }

        if !load_more {
            break;
        }
        start = end;
    }

    info!(
        "Selected {} of {} enumerated files",
        selected.len(),
        files.len()
    );

    Ok(selected)
}
