//! # Operator Prompts
//!
//! Every question the desk asks goes through [`Prompter`], so the menus can
//! be driven by a terminal or by a script.
//!
//! ```text
//! commands/*  ──► &mut dyn Prompter
//!                      │
//!                      ├── ConsolePrompter   dialoguer Input / Password / Select
//!                      │
//!                      └── ScriptedPrompter  canned answers, records output (tests)
//! ```

use std::fmt::Display;
use std::str::FromStr;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::error::{CliError, CliResult};

/// How a status line is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Questions and messages between the desk and its operator.
pub trait Prompter {
    /// Prints text as is.
    fn say(&mut self, text: &str);

    /// Prints a one-line status with a success or failure mark.
    fn report(&mut self, outcome: Outcome, text: &str);

    /// Reads one line of free text. May be empty.
    fn prompt_line(&mut self, prompt: &str) -> CliResult<String>;

    /// Reads a non-negative integer, asking again until one is given.
    fn prompt_integer(&mut self, prompt: &str) -> CliResult<u32>;

    /// Reads a secret without echoing it.
    fn prompt_masked_secret(&mut self, prompt: &str) -> CliResult<String>;

    /// Lets the operator pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> CliResult<usize>;
}

/// Reads a line and parses it, asking again until it parses.
pub fn prompt_parsed<T>(prompter: &mut dyn Prompter, prompt: &str) -> CliResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let raw = prompter.prompt_line(prompt)?;
        match raw.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => prompter.report(Outcome::Failure, &format!("Invalid input: {}", e)),
        }
    }
}

// =============================================================================
// Console
// =============================================================================

/// Terminal prompter built on `dialoguer`.
pub struct ConsolePrompter {
    theme: ColorfulTheme,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        ConsolePrompter {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn report(&mut self, outcome: Outcome, text: &str) {
        match outcome {
            Outcome::Success => println!("{} {}", style("✓").green().bold(), text),
            Outcome::Failure => println!("{} {}", style("✗").red().bold(), style(text).red()),
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> CliResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CliError::interactive(format!("Failed to read input: {}", e)))
    }

    fn prompt_integer(&mut self, prompt: &str) -> CliResult<u32> {
        // Input<u32> re-asks on its own when the text does not parse.
        Input::<u32>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| CliError::interactive(format!("Failed to read number: {}", e)))
    }

    fn prompt_masked_secret(&mut self, prompt: &str) -> CliResult<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()
            .map_err(|e| CliError::interactive(format!("Failed to read password: {}", e)))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> CliResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| CliError::interactive(format!("Failed to get selection: {}", e)))
    }
}

// =============================================================================
// Scripted (tests)
// =============================================================================

#[cfg(test)]
pub(crate) use scripted::ScriptedPrompter;
