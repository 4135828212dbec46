//! Check command implementation.
//!
//! The `ai-readiness check` command runs every readiness check against the
//! site and prints the report.

use std::path::{Path, PathBuf};

use crate::checks::{
    CheckRegistry, HumanFormatter, JsonFormatter, OutputFormat, Report, ReportFormatter,
};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, ReadinessConfig};
use crate::error::{ReadinessError, Result};
use crate::site::{LocalSiteFiles, SiteContext, SiteSnapshot};
use crate::ui::{should_use_colors, OutputMode, ReadinessTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Build the site under inspection. Flags win over config.
    pub fn site_context(&self, config: &ReadinessConfig) -> Result<SiteContext> {
        let root = self
            .args
            .root
            .clone()
            .unwrap_or_else(|| config.site.resolve_root(&self.project_root));
        let snapshot_path = self
            .args
            .snapshot
            .clone()
            .unwrap_or_else(|| config.site.resolve_snapshot(&self.project_root));

        tracing::debug!(
            root = %root.display(),
            snapshot = %snapshot_path.display(),
            "resolved site"
        );

        let snapshot = SiteSnapshot::load(&snapshot_path)?;
        Ok(SiteContext::from_snapshot(snapshot, LocalSiteFiles::new(root)))
    }

    fn format_report(&self, report: &Report, format: OutputFormat) -> String {
        let mut output = Vec::new();

        match format {
            OutputFormat::Json => {
                JsonFormatter::new().format(report, &mut output).ok();
            }
            OutputFormat::Human => {
                HumanFormatter::new(should_use_colors())
                    .format(report, &mut output)
                    .ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }

    fn exit_code(&self, report: &Report) -> i32 {
        if report.has_failures() || (self.args.strict && !report.all_passed()) {
            1
        } else {
            0
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(
                e @ (ReadinessError::ConfigNotFound { .. }
                | ReadinessError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let format = self.args.format.unwrap_or(config.settings.default_format);

        let site = match self.site_context(&config) {
            Ok(site) => site,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let registry = CheckRegistry::builtin(site);
        let report = registry.run_all();
        let output = self.format_report(&report, format);

        match format {
            OutputFormat::Json => ui.message(output.trim_end()),
            OutputFormat::Human => {
                ui.show_header("AI Search Readiness");

                if ui.output_mode().shows_details() {
                    let theme = ReadinessTheme::for_color(should_use_colors());
                    for check in registry.iter() {
                        ui.message(&format!(
                            "  {} {}",
                            theme.key.apply_to(check.label()),
                            theme.dim.apply_to(check.description())
                        ));
                    }
                    ui.message("");
                }

                ui.message(output.trim_end());

                let summary = report.summary();
                if report.all_passed() {
                    ui.success("Site is ready for AI search");
                } else {
                    ui.warning(&format!(
                        "{} of {} checks need attention",
                        summary.total - summary.passed,
                        summary.total
                    ));
                }
            }
        }

        let exit_code = self.exit_code(&report);
        if exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(exit_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const READY_SNAPSHOT: &str = r#"
posts:
  - id: 1
    title: Hello
    published_at: 2024-03-01T10:00:00Z
    content: "<h2>What is it?</h2><p>An answer.</p>"
users:
  - id: 1
    login: admin
    roles: [administrator]
    description: Editor in chief.
environment:
  active_plugins: [wordpress-seo/wp-seo.php]
  object_cache: true
  sitemap_index_url: https://example.com/sitemap_index.xml
"#;

    fn setup_site(snapshot: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        if let Some(snapshot) = snapshot {
            let dir = temp.path().join(".ai-readiness");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("site.yml"), snapshot).unwrap();
        }
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().strict);
    }

    #[test]
    fn empty_site_warns_but_succeeds() {
        let temp = setup_site(None);
        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_message("No posts found to analyze structure."));
        assert!(ui.has_message("0 passed, 9 warning(s), 0 failed"));
        assert!(ui.has_warning("9 of 9 checks need attention"));
        assert_eq!(ui.headers(), ["AI Search Readiness"]);
    }

    #[test]
    fn strict_mode_fails_on_warnings() {
        let temp = setup_site(None);
        let args = CheckArgs {
            strict: true,
            ..Default::default()
        };
        let (result, _) = run(&temp, args);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn ready_site_passes_computed_checks() {
        let temp = setup_site(Some(READY_SNAPSHOT));
        fs::write(temp.path().join("robots.txt"), "User-agent: GPTBot\nAllow: /").unwrap();
        fs::write(temp.path().join("llms.txt"), "# Example").unwrap();

        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_message("7 passed, 2 warning(s), 0 failed"));
        assert!(ui.has_message("Caching is active."));
    }

    #[test]
    fn json_format_emits_parseable_report() {
        let temp = setup_site(Some(READY_SNAPSHOT));
        let args = CheckArgs {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let (result, ui) = run(&temp, args);

        assert!(result.success);
        assert!(ui.headers().is_empty());
        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["checks"]["performance"]["status"], "pass");
        assert_eq!(parsed["checks"]["llms_txt"]["status"], "warn");
        assert_eq!(parsed["summary"]["total"], 9);
    }

    #[test]
    fn config_default_format_applies() {
        let temp = setup_site(Some(""));
        fs::write(
            temp.path().join(".ai-readiness").join("config.yml"),
            "settings:\n  default_format: json",
        )
        .unwrap();

        let (_, ui) = run(&temp, CheckArgs::default());
        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["summary"]["warnings"], 9);
    }

    #[test]
    fn config_default_output_applies() {
        let temp = setup_site(Some(""));
        fs::write(
            temp.path().join(".ai-readiness").join("config.yml"),
            "settings:\n  default_output: quiet",
        )
        .unwrap();

        let (_, ui) = run(&temp, CheckArgs::default());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn config_site_root_is_used() {
        let temp = setup_site(None);
        let public = temp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("llms.txt"), "# Site").unwrap();
        let dir = temp.path().join(".ai-readiness");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "site:\n  root: public").unwrap();

        let (_, ui) = run(&temp, CheckArgs::default());
        assert!(ui.has_message("llms.txt found."));
    }

    #[test]
    fn root_flag_overrides_config() {
        let temp = setup_site(None);
        let other = TempDir::new().unwrap();
        fs::write(other.path().join("llms.txt"), "# Other").unwrap();
        let args = CheckArgs {
            root: Some(other.path().to_path_buf()),
            ..Default::default()
        };

        let (_, ui) = run(&temp, args);
        assert!(ui.has_message("llms.txt found."));
    }

    #[test]
    fn snapshot_flag_overrides_config() {
        let temp = setup_site(None);
        let snapshot = temp.path().join("custom.json");
        fs::write(&snapshot, r#"{"environment": {"object_cache": true}}"#).unwrap();
        let args = CheckArgs {
            snapshot: Some(snapshot),
            ..Default::default()
        };

        let (_, ui) = run(&temp, args);
        assert!(ui.has_message("Caching is active."));
    }

    #[test]
    fn malformed_snapshot_exits_with_2() {
        let temp = setup_site(Some("posts: [unterminated"));
        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Failed to parse site snapshot"));
    }

    #[test]
    fn malformed_config_exits_with_2() {
        let temp = setup_site(Some(""));
        fs::write(temp.path().join(".ai-readiness").join("config.yml"), "site: [").unwrap();

        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Failed to parse config"));
    }

    #[test]
    fn missing_config_override_exits_with_2() {
        let temp = setup_site(None);
        let missing = temp.path().join("missing.yml");
        let cmd = CheckCommand::new(temp.path(), Some(&missing), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Configuration not found"));
    }

    #[test]
    fn verbose_lists_check_descriptions() {
        let temp = setup_site(None);
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();
        assert!(ui.has_message("7b. LLMS.txt"));
        assert!(ui.messages().len() > 2);
    }
}
