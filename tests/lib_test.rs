//! Library integration tests.

use ai_readiness::checks::{CheckRegistry, CheckStatus, JsonFormatter, ReportFormatter};
use ai_readiness::site::{LocalSiteFiles, SiteContext, SiteSnapshot};
use ai_readiness::ReadinessError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = ReadinessError::SnapshotParseError {
        path: "site.yml".into(),
        message: "bad indent".into(),
    };
    assert!(err.to_string().contains("site.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ai_readiness::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use ai_readiness::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["ai-readiness", "check", "--strict"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.strict);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn report_from_files_on_disk() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("robots.txt"), "User-agent: *\nAllow: /").unwrap();
    fs::write(temp.path().join("llms.txt"), "# Docs").unwrap();
    fs::write(
        temp.path().join("site.yml"),
        r#"
posts:
  - id: 1
    content: "<h2>Overview</h2>"
users:
  - id: 4
    login: writer
    capabilities: [publish_posts]
    description: ""
"#,
    )
    .unwrap();

    let snapshot = SiteSnapshot::load(&temp.path().join("site.yml")).unwrap();
    let site = SiteContext::from_snapshot(snapshot, LocalSiteFiles::new(temp.path()));
    let report = CheckRegistry::builtin(site).run_all();

    assert_eq!(report.len(), 9);
    assert_eq!(report.get("content_structure").unwrap().status, CheckStatus::Pass);
    assert_eq!(report.get("robots_txt").unwrap().status, CheckStatus::Warn);
    assert_eq!(report.get("llms_txt").unwrap().status, CheckStatus::Pass);
    assert_eq!(report.get("eeat_signals").unwrap().status, CheckStatus::Warn);
    assert!(!report.has_failures());
}

#[test]
fn missing_snapshot_behaves_as_empty_site() {
    let snapshot = SiteSnapshot::load(Path::new("/nonexistent/site.yml")).unwrap();
    let site = SiteContext::from_snapshot(snapshot, LocalSiteFiles::new("/nonexistent"));
    let report = CheckRegistry::builtin(site).run_all();

    assert!(report
        .iter()
        .all(|entry| entry.result.status == CheckStatus::Warn));
}

#[test]
fn json_formatter_is_usable_from_outside() {
    let site = SiteContext::from_snapshot(SiteSnapshot::default(), LocalSiteFiles::new("/"));
    let report = CheckRegistry::builtin(site).run_all();

    let mut out = Vec::new();
    JsonFormatter::new().format(&report, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["summary"]["total"], 9);
}
