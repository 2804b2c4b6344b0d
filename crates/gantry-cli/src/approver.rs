//! Terminal-backed change approver.
//!
//! Implements the core's `ChangeApprover` port: renders the added-lines
//! preview and blocks on a yes/no prompt. With the default `interactive`
//! feature the prompt goes through `dialoguer`; without it a plain stdin
//! read is used. `--yes` turns the prompt into an unconditional accept so
//! the command stays usable in scripts.

use console::Term;
use owo_colors::OwoColorize;

use gantry_core::{
    application::ports::ChangeApprover,
    domain::FileRevision,
    error::{GantryError, GantryResult},
};

/// Change approver bound to the controlling terminal.
pub struct TerminalApprover {
    no_color: bool,
    assume_yes: bool,
    term: Term,
}

impl TerminalApprover {
    pub fn new(no_color: bool, assume_yes: bool) -> Self {
        Self {
            no_color,
            assume_yes,
            term: Term::stdout(),
        }
    }

    fn write_line(&self, line: &str) -> GantryResult<()> {
        self.term.write_line(line).map_err(|e| GantryError::Internal {
            message: format!("terminal write failed: {e}"),
        })
    }
}

impl ChangeApprover for TerminalApprover {
    fn present(&self, revision: &FileRevision, description: &str) -> GantryResult<()> {
        let header = format!(
            "Proposed changes to {} — {}:",
            revision.path.display(),
            description
        );
        if self.no_color {
            self.write_line(&header)?;
        } else {
            self.write_line(&header.cyan().bold().to_string())?;
        }
        self.write_line("")?;

        let changes = revision.changes();
        for line in &changes.added {
            let rendered = if self.no_color {
                format!("+ {line}")
            } else {
                format!("+ {line}").green().to_string()
            };
            self.write_line(&rendered)?;
        }

        self.write_line("")?;
        self.write_line(&format!("{} line(s) added", changes.len()))?;
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> GantryResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        read_confirmation(prompt)
    }
}

#[cfg(feature = "interactive")]
fn read_confirmation(prompt: &str) -> GantryResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| GantryError::Internal {
            message: format!("confirmation prompt failed: {e}"),
        })
}

#[cfg(not(feature = "interactive"))]
fn read_confirmation(prompt: &str) -> GantryResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [Y/n] ");
    io::stdout().flush().map_err(|e| GantryError::Internal {
        message: format!("failed to flush stdout: {e}"),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| GantryError::Internal {
            message: format!("failed to read confirmation input: {e}"),
        })?;
    if read == 0 {
        // EOF (piped stdin): treat as a refusal rather than silently
        // accepting a file mutation.
        return Ok(false);
    }

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── tests ─────────────────────────────────────────────────────────────────────
