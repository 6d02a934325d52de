//! One-shot commands: search, open and list.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use iconpal_search::{Catalog, Matcher, Record, ScoredRecord, SearchConfig, icon_route};

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query words (joined with spaces)
    #[arg(value_name = "QUERY", num_args = 0..)]
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show score and matched field
    #[arg(long)]
    pub scores: bool,

    /// Override the maximum number of ranked results (an empty query
    /// still lists the configured number of icons)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the open command.
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Query words (joined with spaces)
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One search result, as printed or serialized.
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    name: &'a str,
    route: String,
    score: f64,
    matched_field: &'static str,
    matched_text: &'a str,
}

impl<'a> ResultRow<'a> {
    fn new(scored: &ScoredRecord<'a>, route_prefix: &str) -> Self {
        Self {
            name: &scored.record.name,
            route: icon_route(route_prefix, &scored.record.name),
            score: scored.score,
            matched_field: scored.matched_field.label(),
            matched_text: scored.matched_text,
        }
    }
}

/// Ranks the catalog for `args`, applying a `--limit` override.
fn search_rows<'a>(
    catalog: &'a Catalog,
    mut config: SearchConfig,
    args: &SearchArgs,
) -> Result<Vec<ResultRow<'a>>> {
    if let Some(limit) = args.limit {
        config.result_limit = limit;
        config.validate()?;
    }

    let query = args.query.join(" ");
    let route_prefix = config.route_prefix.clone();
    let mut matcher = Matcher::with_config(config);

    Ok(matcher
        .search_scored(catalog.records(), &query)
        .iter()
        .map(|scored| ResultRow::new(scored, &route_prefix))
        .collect())
}

/// Route of the best match, if anything matches.
fn open_route(catalog: &Catalog, config: SearchConfig, query: &str) -> Option<String> {
    let route_prefix = config.route_prefix.clone();
    let mut matcher = Matcher::with_config(config);

    matcher
        .search(catalog.records(), query)
        .first()
        .map(|record| icon_route(&route_prefix, &record.name))
}

fn list_line(record: &Record) -> String {
    let mut line = record.name.clone();
    if !record.aliases.is_empty() {
        line.push_str(&format!("  aka {}", record.aliases.join(", ")));
    }
    if !record.categories.is_empty() {
        line.push_str(&format!("  [{}]", record.categories.join(", ")));
    }
    line
}

pub fn run_search(catalog: &Catalog, config: SearchConfig, args: &SearchArgs) -> Result<ExitCode> {
    let rows = search_rows(catalog, config, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    if rows.is_empty() {
        println!("No icons match '{}'", args.query.join(" "));
        return Ok(ExitCode::SUCCESS);
    }

    for (i, row) in rows.iter().enumerate() {
        if args.scores {
            println!(
                "{:>2}. {:<32} {:.3}  {} ({})",
                i + 1,
                row.name,
                row.score,
                row.matched_field,
                row.matched_text
            );
        } else {
            println!("{:>2}. {}", i + 1, row.name);
        }
    }

    Ok(ExitCode::SUCCESS)
}

pub fn run_open(catalog: &Catalog, config: SearchConfig, args: &OpenArgs) -> Result<ExitCode> {
    let query = args.query.join(" ");

    match open_route(catalog, config, &query) {
        Some(route) => {
            println!("{}", route);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            tracing::warn!("No icons match '{}'", query);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn run_list(catalog: &Catalog, args: &ListArgs) -> Result<ExitCode> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.records())?);
        return Ok(ExitCode::SUCCESS);
    }

    for record in catalog.records() {
        println!("{}", list_line(record));
    }

    Ok(ExitCode::SUCCESS)
}
