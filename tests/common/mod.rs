#![allow(dead_code)]

use std::collections::VecDeque;

use autodocker::errors::WizardError;
use autodocker::prompt::Prompter;

/// One scripted answer per prompt call, consumed in order.
pub enum Answer {
    /// Free-text answer; an empty string accepts the prompt's default
    Input(String),
    Select(usize),
    MultiSelect(Vec<usize>),
    Confirm(bool),
}

/// Prompter double that replays a fixed script and records every
/// multi-select page it was shown.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub shown_pages: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown_pages: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<Answer, WizardError> {
        self.answers
            .pop_front()
            .ok_or_else(|| WizardError::Configuration("no scripted answer left".to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, _message: &str, default: &str) -> Result<String, WizardError> {
        match self.next()? {
            Answer::Input(s) if s.is_empty() => Ok(default.to_string()),
            Answer::Input(s) => Ok(s),
            _ => Err(WizardError::Configuration(
                "expected a scripted input answer".to_string(),
            )),
        }
    }

    fn select(&mut self, _message: &str, _choices: &[String]) -> Result<usize, WizardError> {
        match self.next()? {
            Answer::Select(i) => Ok(i),
            _ => Err(WizardError::Configuration(
                "expected a scripted select answer".to_string(),
            )),
        }
    }

    fn multi_select(
        &mut self,
        _message: &str,
        choices: &[String],
    ) -> Result<Vec<usize>, WizardError> {
        self.shown_pages.push(choices.to_vec());
        match self.next()? {
            Answer::MultiSelect(picks) => Ok(picks),
            _ => Err(WizardError::Configuration(
                "expected a scripted multi-select answer".to_string(),
            )),
        }
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> Result<bool, WizardError> {
        match self.next()? {
            Answer::Confirm(b) => Ok(b),
            _ => Err(WizardError::Configuration(
                "expected a scripted confirm answer".to_string(),
            )),
        }
    }
}
