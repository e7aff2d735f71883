//! CLI mode definitions
//!
//! Subcommands map one-to-one onto the query and filter paths; running with
//! no subcommand enters the interactive prompt loop.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// poultry-search CLI
#[derive(Parser)]
#[command(name = "poultry-search")]
#[command(about = "Poultry medicine lookup by disease, symptom, brand, or ingredient", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog CSV file
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "POULTRY_SEARCH_DATA",
        default_value = "poultry_medicines_for_app.csv"
    )]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog with a free-text query
    Search(SearchArgs),
    /// Filter the catalog by exact category, dosage form, and brand
    Filter(FilterArgs),
    /// List the available filter choices
    Options(OptionsArgs),
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Disease, symptom, brand, or ingredient (case-insensitive)
    pub query: String,

    /// Similarity cutoff for approximate token matches, in (0, 1]
    #[arg(short = 'c', long, default_value_t = crate::search::matcher::DEFAULT_SIMILARITY_CUTOFF)]
    pub cutoff: f64,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Filter command arguments
#[derive(Parser, Clone, Debug)]
pub struct FilterArgs {
    /// Disease category keyword (e.g. Bacterial); "All" or omitted = any
    #[arg(short = 'g', long)]
    pub category: Option<String>,

    /// Exact dosage form (e.g. Tablet); "All" or omitted = any
    #[arg(short = 'f', long = "dosage-form")]
    pub dosage_form: Option<String>,

    /// Exact brand name; "All" or omitted = any
    #[arg(short = 'b', long)]
    pub brand: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Options command arguments
#[derive(Parser, Clone, Debug)]
pub struct OptionsArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_parsing() {
        let cli = Cli::parse_from(["poultry-search", "search", "crd", "--cutoff", "0.8"]);
        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.query, "crd");
                assert_eq!(args.cutoff, 0.8);
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_search_default_cutoff() {
        let cli = Cli::parse_from(["poultry-search", "search", "coccidiosis"]);
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.cutoff, 0.6),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_filter_parsing() {
        let cli = Cli::parse_from([
            "poultry-search",
            "filter",
            "--dosage-form",
            "Tablet",
            "--brand",
            "All",
            "--json",
        ]);
        match cli.command {
            Some(Commands::Filter(args)) => {
                assert_eq!(args.dosage_form.as_deref(), Some("Tablet"));
                assert_eq!(args.brand.as_deref(), Some("All"));
                assert_eq!(args.category, None);
                assert!(args.json);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive_mode() {
        let cli = Cli::parse_from(["poultry-search", "--data", "catalog.csv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.data, PathBuf::from("catalog.csv"));
    }
}
