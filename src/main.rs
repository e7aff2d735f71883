//! poultry-search CLI
//!
//! Dual-mode application:
//! - Subcommand mode: evaluate one search or filter, print, exit
//! - Interactive mode (default): prompt loop, one full catalog scan per
//!   submitted line
//!
//! The catalog is read once per process and memoized; every interaction is a
//! synchronous re-evaluation over the in-memory table.

mod catalog;
mod cli;
mod error;
mod output;
mod search;

use anyhow::Result;
use catalog::CatalogStore;
use clap::Parser;
use cli::{Cli, Commands, FilterArgs, OptionsArgs, SearchArgs};
use error::AppError;
use search::{filter, FilterSelection, MatchConfig, SearchEngine};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr) // Log to stderr to keep stdout clean
        .init();

    let store = CatalogStore::new(&cli.data);

    let result = match cli.command {
        Some(Commands::Search(args)) => run_search(&store, args).map(Some),
        Some(Commands::Filter(args)) => run_filter(&store, args).map(Some),
        Some(Commands::Options(args)) => run_options(&store, args).map(Some),
        None => run_interactive(&store).map(|_| None),
    };

    match result {
        Ok(Some(text)) => {
            println!("{}", text);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute one search query
fn run_search(store: &CatalogStore, args: SearchArgs) -> Result<String, AppError> {
    let engine = SearchEngine::with_config(match_config(args.cutoff)?);
    let catalog = store.load()?;
    let outcome = engine.search(&catalog, &args.query);

    if args.json {
        output::render_search_json(&outcome)
    } else {
        Ok(output::render_search_text(&outcome))
    }
}

/// Execute one exact-filter evaluation
fn run_filter(store: &CatalogStore, args: FilterArgs) -> Result<String, AppError> {
    let selection = FilterSelection {
        category: args.category,
        dosage_form: args.dosage_form,
        brand: args.brand,
    };

    let catalog = store.load()?;
    let records = filter::filter_catalog(&catalog, &selection);

    if args.json {
        output::render_filter_json(&records)
    } else {
        Ok(output::render_filter_text(&records))
    }
}

/// List the discrete filter choices drawn from the loaded catalog
fn run_options(store: &CatalogStore, args: OptionsArgs) -> Result<String, AppError> {
    let catalog = store.load()?;
    let forms = filter::dosage_form_options(&catalog);
    let brands = filter::brand_options(&catalog);

    if args.json {
        output::render_options_json(filter::CATEGORY_OPTIONS, &forms, &brands)
    } else {
        Ok(output::render_options_text(
            filter::CATEGORY_OPTIONS,
            &forms,
            &brands,
        ))
    }
}

/// Prompt loop: one search per submitted line, until EOF or `:quit`
fn run_interactive(store: &CatalogStore) -> Result<(), AppError> {
    let engine = SearchEngine::new();
    let catalog = store.load()?;

    println!("Poultry Medicine Search");
    println!("Search by disease, symptom, brand, or ingredient. Type :quit to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("search> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let query = line.trim();
        if query == ":quit" || query == ":q" {
            break;
        }

        let outcome = engine.search(&catalog, query);
        println!("{}", output::render_search_text(&outcome));
    }

    Ok(())
}

/// Validate the similarity cutoff argument
fn match_config(cutoff: f64) -> Result<MatchConfig, AppError> {
    if !(cutoff > 0.0 && cutoff <= 1.0) {
        return Err(AppError::InvalidInput(format!(
            "similarity cutoff must be in (0, 1], got {}",
            cutoff
        )));
    }
    Ok(MatchConfig::with_cutoff(cutoff))
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) => 1,
        AppError::DataUnavailable(_) => 2,
        AppError::Internal(_) => 5,
    }
}
