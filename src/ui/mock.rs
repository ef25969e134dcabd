//! Scripted user input for testing

use std::cell::RefCell;
use std::collections::VecDeque;

use super::input::{InputError, Result, UserInput};

/// User input that replays predetermined answers
///
/// Text and confirmation answers are consumed in order. When a queue runs
/// dry the prompt fails with [`InputError::Cancelled`], which lets tests
/// exercise the fallback paths.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    /// Create scripted input answering text prompts with `lines`
    #[must_use]
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|l| (*l).to_string()).collect()),
            ..Self::default()
        }
    }

    /// Queue answers for confirmation prompts
    #[must_use]
    pub fn with_confirms(self, answers: &[bool]) -> Self {
        self.confirms.borrow_mut().extend(answers.iter().copied());
        self
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str, _default: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.lines.borrow_mut().pop_front().ok_or(InputError::Cancelled)
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.confirms.borrow_mut().pop_front().ok_or(InputError::Cancelled)
    }

    fn pause(&self) -> Result<()> {
        Ok(())
    }
}
