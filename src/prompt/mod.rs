pub mod console;

pub use console::ConsolePrompter;

use crate::errors::WizardError;

/// Interactive answers consumed by the wizard. The core never renders UI
/// itself; implementations own the terminal, and every call blocks until
/// the user responds.
pub trait Prompter {
    /// Free-text answer, pre-filled with `default`
    fn input(&mut self, message: &str, default: &str) -> Result<String, WizardError>;

    /// Single choice out of `choices`; returns the chosen index
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, WizardError>;

    /// Multi-choice out of `choices`; returns the chosen indices
    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>, WizardError>;

    /// Yes/no answer, defaulting to `default`
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, WizardError>;
}
