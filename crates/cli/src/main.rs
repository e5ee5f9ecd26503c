use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use folio_api::{API_BASE_ENV, GitHubClient};
use folio_content::Portfolio;
use folio_engine::{EnrichmentMap, RepoMetadataSource, enrich_all};
use folio_tui::TuiOptions;
use folio_types::ProjectDescriptor;
use folio_util::{env_flag, init_file_tracing, init_stderr_tracing, resolve_log_path};
use serde_json::{Value, json};
use tracing::info;

/// Environment switch equivalent to `--offline`.
const OFFLINE_ENV: &str = "FOLIO_OFFLINE";

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let portfolio = Arc::new(Portfolio::embedded().context("load embedded portfolio")?);

    if let Some(("projects", sub)) = matches.subcommand() {
        init_stderr_tracing();
        return run_projects(&matches, sub, &portfolio).await;
    }

    // No subcommands => TUI
    let log_path = resolve_log_path();
    init_file_tracing(&log_path)?;
    info!(log = %log_path.display(), "logging to file");
    folio_tui::run(TuiOptions {
        portfolio,
        metadata_source: metadata_source(&matches)?,
        theme: matches.get_one::<String>("theme").cloned(),
    })
    .await
}

fn build_cli() -> Command {
    Command::new("folio")
        .about("Terminal portfolio with live GitHub project metadata")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .global(true)
                .env(API_BASE_ENV)
                .action(ArgAction::Set)
                .help("GitHub API base URL"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Skip fetching repository metadata"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .action(ArgAction::Set)
                .value_parser(["dracula", "nord"])
                .help("Color theme (defaults to FOLIO_THEME, then dracula)"),
        )
        .subcommand(
            Command::new("projects")
                .about("Print each project with its repository metadata and exit")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON array instead of text"),
                ),
        )
}

/// The metadata source for this run, or `None` when offline.
fn metadata_source(matches: &ArgMatches) -> Result<Option<Arc<dyn RepoMetadataSource>>> {
    if matches.get_flag("offline") || env_flag(OFFLINE_ENV) {
        info!("offline; skipping repository metadata");
        return Ok(None);
    }
    let client = match matches.get_one::<String>("api-base") {
        Some(base_url) => GitHubClient::with_base_url(base_url.as_str())?,
        None => GitHubClient::new_from_env()?,
    };
    Ok(Some(Arc::new(client)))
}

async fn run_projects(matches: &ArgMatches, sub: &ArgMatches, portfolio: &Portfolio) -> Result<()> {
    let enrichment = match metadata_source(matches)? {
        Some(source) => enrich_all(source, &portfolio.projects).await,
        None => EnrichmentMap::new(),
    };

    if sub.get_flag("json") {
        let report = projects_json(&portfolio.projects, &enrichment);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", projects_listing(&portfolio.projects, &enrichment));
    }
    Ok(())
}

fn projects_json(projects: &[ProjectDescriptor], enrichment: &EnrichmentMap) -> Value {
    let entries: Vec<Value> = projects
        .iter()
        .map(|project| {
            let result = enrichment.get(&project.id);
            json!({
                "id": project.id,
                "title": project.title,
                "repository": project.full_name(),
                "stars": result.map(|result| result.stars),
                "language": result.and_then(|result| result.language.clone()),
                "url": enrichment.link_for(project),
                "tags": project.tags,
            })
        })
        .collect();
    Value::Array(entries)
}

fn projects_listing(projects: &[ProjectDescriptor], enrichment: &EnrichmentMap) -> String {
    let mut out = String::new();
    for project in projects {
        let _ = writeln!(out, "{} ({})", project.title, project.full_name());
        if let Some(result) = enrichment.get(&project.id) {
            let language = result.language.as_deref().unwrap_or("-");
            let _ = writeln!(out, "  ★ {}  {}", result.stars, language);
        }
        let _ = writeln!(out, "  {}", enrichment.link_for(project));
    }
    out
}

#[cfg(test)]
mod tests {
    use folio_types::{EnrichmentResult, ProjectId};

    use super::*;

    fn sample() -> (Vec<ProjectDescriptor>, EnrichmentMap) {
        let projects = Portfolio::embedded().expect("embedded portfolio").projects;
        let mut enrichment = EnrichmentMap::new();
        enrichment.record(
            ProjectId::new("project-one"),
            EnrichmentResult {
                stars: 42,
                language: Some("TypeScript".into()),
                url: "https://github.com/levalleyjack/slugtistics".into(),
            },
        );
        (projects, enrichment)
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["folio", "projects", "--json", "--offline"])
            .expect("parse");
        assert!(matches.get_flag("offline"));
        let (name, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(name, "projects");
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn cli_rejects_unknown_theme() {
        assert!(build_cli().try_get_matches_from(["folio", "--theme", "solarized"]).is_err());
    }

    #[test]
    fn listing_shows_badge_only_when_enriched() {
        let (projects, enrichment) = sample();
        let listing = projects_listing(&projects, &enrichment);
        assert!(listing.contains("Slugtistics (levalleyjack/slugtistics)\n  ★ 42  TypeScript\n"));
        assert!(listing.contains("Multipass Manager (levalleyjack/multipass-manager-vscode)\n  https://github.com/levalleyjack/multipass-manager-vscode\n"));
    }

    #[test]
    fn json_report_has_one_entry_per_project() {
        let (projects, enrichment) = sample();
        let report = projects_json(&projects, &enrichment);
        let entries = report.as_array().expect("array");
        assert_eq!(entries.len(), projects.len());
        assert_eq!(entries[0]["stars"], 42);
        assert_eq!(entries[0]["language"], "TypeScript");
        assert!(entries[1]["stars"].is_null());
        assert_eq!(entries[1]["url"], "https://github.com/levalleyjack/multipass-manager-vscode");
    }
}
