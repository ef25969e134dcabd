//! User input abstraction layer
//!
//! Interactive runs read a line (sift selection) or a yes/no answer (clean
//! confirmation) through [`UserInput`], so the commands can be driven by
//! [`DialoguerInput`] on a terminal or by a scripted implementation in
//! tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use romsift::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// let line = input.prompt_text("Files to keep", "").unwrap();
/// if input.prompt_confirm("Rename 3 file(s)?", true).unwrap() {
///     println!("Renaming {line}...");
/// }
/// ```
pub trait UserInput {
    /// Prompt user for one line of text
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `default` - Value used when the user just presses enter
    ///
    /// # Errors
    /// Returns `InputError` if the terminal cannot be read.
    fn prompt_text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Prompt user for confirmation (yes/no)
    ///
    /// # Errors
    /// Returns `InputError` if the terminal cannot be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Block until the user presses enter
    ///
    /// # Errors
    /// Returns `InputError` if the terminal cannot be read.
    fn pause(&self) -> Result<()>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str, default: &str) -> Result<String> {
        use dialoguer::Input;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn pause(&self) -> Result<()> {
        use dialoguer::Input;

        Input::<String>::new()
            .with_prompt("Press enter to continue...")
            .allow_empty(true)
            .interact_text()
            .map(|_| ())
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
