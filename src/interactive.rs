use anyhow::{Context, Result};
use inquire::{Confirm, InquireError, MultiSelect, Password, PasswordDisplayMode, Select, Text};
use tracing::{debug, warn};

use crate::error::Error;
use crate::parameters::{BuildRequest, ParameterSet};

/// Ways the tool asks the operator for input
pub trait Prompter {
    /// Yes/No confirmation before a mutating call
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Checkbox list; cancelling yields no selection
    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<String>>;

    /// Single choice; `None` when the operator cancels
    fn select(&self, message: &str, options: &[String]) -> Result<Option<String>>;

    /// Free text line, empty allowed
    fn text(&self, message: &str, help: Option<&str>) -> Result<String>;

    /// Masked input for secrets
    fn secret(&self, message: &str, help: Option<&str>) -> Result<String>;
}

/// Terminal prompts backed by inquire
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new(message)
            .with_default(false)
            .prompt()
            .context("Prompt failed")
    }

    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<String>> {
        let result = MultiSelect::new(message, options.to_vec())
            .with_help_message("Use ↑↓ to navigate, Space to select/deselect, Enter to confirm")
            .prompt();

        match result {
            Ok(selected) => Ok(selected),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                debug!("Multi-select '{}' cancelled", message);
                Ok(Vec::new())
            }
            Err(e) => Err(e).context("Prompt failed"),
        }
    }

    fn select(&self, message: &str, options: &[String]) -> Result<Option<String>> {
        let result = Select::new(message, options.to_vec())
            .with_help_message("Use ↑↓ to navigate, type to search, Enter to select")
            .prompt();

        match result {
            Ok(selected) => Ok(Some(selected)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e).context("Prompt failed"),
        }
    }

    fn text(&self, message: &str, help: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        prompt.prompt().context("Prompt failed")
    }

    fn secret(&self, message: &str, help: Option<&str>) -> Result<String> {
        let mut prompt = Password::new(message)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation();
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        prompt.prompt().context("Prompt failed")
    }
}

/// Ask the operator for a value for every parameter in `parameters`.
///
/// Every boolean gets an explicit `"true"` or `"false"`. Cancelling a choice
/// aborts, since the job cannot run without it.
pub fn collect_build_request(prompter: &dyn Prompter, parameters: &ParameterSet) -> Result<BuildRequest> {
    let mut request = BuildRequest::new();

    if !parameters.booleans.is_empty() {
        let checked = prompter.multi_select("Select deploy parameters", &parameters.booleans)?;
        for name in &parameters.booleans {
            let value = if checked.contains(name) { "true" } else { "false" };
            request.set(name.as_str(), value);
        }
    }

    for name in &parameters.strings {
        let value = prompter.text(&format!("{}:", name), parameters.description(name))?;
        request.set(name.as_str(), value);
    }

    for (name, choices) in &parameters.choices {
        if choices.is_empty() {
            warn!("Choice parameter '{}' declares no values, skipping", name);
            continue;
        }

        let selected = prompter
            .select(name, choices)?
            .ok_or_else(|| Error::ChoiceCancelled(name.clone()))?;
        request.set(name.as_str(), selected);
    }

    Ok(request)
}
