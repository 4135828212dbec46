//! Schema command implementation.
//!
//! The `ai-readiness schema` command prints the JSON Schema describing the
//! site snapshot file, for editor validation and snapshot exporters.

use crate::error::Result;
use crate::site::SiteSnapshot;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }

    /// Render the snapshot schema as pretty-printed JSON.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(SiteSnapshot);
        serde_json::to_string_pretty(&schema).map_err(|e| anyhow::Error::new(e).into())
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&Self::render()?);
        Ok(CommandResult::success())
    }
}
