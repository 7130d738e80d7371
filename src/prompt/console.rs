use dialoguer::{Confirm, Input, MultiSelect, Select};

use super::Prompter;
use crate::errors::WizardError;

/// Terminal prompter backed by dialoguer widgets. A cancelled or failed
/// prompt (e.g. a non-interactive terminal) surfaces as a configuration
/// error, which aborts the run.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_failed(e: dialoguer::Error) -> WizardError {
    WizardError::Configuration(format!("prompt failed: {}", e))
}

impl Prompter for ConsolePrompter {
    fn input(&mut self, message: &str, default: &str) -> Result<String, WizardError> {
        Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_failed)
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, WizardError> {
        Select::new()
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .map_err(prompt_failed)
    }

    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>, WizardError> {
        MultiSelect::new()
            .with_prompt(message)
            .items(choices)
            .interact()
            .map_err(prompt_failed)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, WizardError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }
}
