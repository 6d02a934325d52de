//! Line-based palette session.
//!
//! Each input line replaces the query, like typing into the dialog.
//! `:open N` jumps to result N, `:q` quits.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use iconpal_search::{Catalog, Navigator, PaletteResult, PaletteState, SearchConfig};

/// Arguments for the interactive command.
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Do not print the prompt
    #[arg(long)]
    pub quiet: bool,
}

/// Prints routes to stdout in place of a browser router.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&mut self, route: &str) -> PaletteResult<()> {
        println!("-> {}", route);
        Ok(())
    }
}

enum Input<'a> {
    Quit,
    Open(usize),
    Query(&'a str),
}

fn parse_line(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed == ":q" || trimmed == ":quit" {
        return Input::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix(":open")
        && let Ok(n) = rest.trim().parse::<usize>()
    {
        return Input::Open(n);
    }
    Input::Query(line)
}

fn print_results(state: &PaletteState) {
    let results = state.results();
    if results.is_empty() {
        println!("  (no matches)");
        return;
    }
    for (i, record) in results.iter().enumerate() {
        println!("{:>3}. {}", i + 1, record.name);
    }
}

pub fn run(catalog: Catalog, config: SearchConfig, args: &InteractiveArgs) -> Result<ExitCode> {
    let mut state = PaletteState::with_config(catalog, config);
    let mut navigator = StdoutNavigator;
    state.open();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if !args.quiet {
        print_results(&state);
    }

    loop {
        if !args.quiet {
            print!("> ");
            stdout.flush().context("Failed to flush stdout")?;
        }

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?
            == 0
        {
            break;
        }

        match parse_line(line.trim_end_matches(['\n', '\r'])) {
            Input::Quit => break,
            Input::Open(n) => {
                if n == 0 || !state.select(n - 1) {
                    println!("  no result #{}", n);
                    continue;
                }
                state.confirm(&mut navigator)?;
                // Keep the session going with a fresh palette
                state.open();
            }
            Input::Query(query) => {
                state.set_query(query);
                print_results(&state);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
