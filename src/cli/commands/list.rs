//! List command implementation.
//!
//! The `ai-readiness list` command lists the built-in checks.

use crate::checks::builtin_checks;
use crate::error::Result;
use crate::ui::{should_use_colors, ReadinessTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
#[derive(Debug, Default)]
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = ReadinessTheme::for_color(should_use_colors());

        ui.message(&format!("  {}", theme.key.apply_to("Checks:")));
        for check in builtin_checks() {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(check.id()),
                theme.dim.apply_to(format!("({})", check.label()))
            ));
            ui.message(&format!("      {}", check.description()));
        }

        Ok(CommandResult::success())
    }
}
