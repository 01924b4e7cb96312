mod commands;
mod config;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::compare::CompareArgs;
use commands::project::ProjectArgs;

/// Compare how investment fees erode long-run returns
#[derive(Parser)]
#[command(
    name = "feecalc",
    version,
    about = "Compare how investment fees erode long-run returns",
    long_about = "Projects an investment year by year under two fee rates with \
                  decimal precision and reports the balance each fee leaves you with, \
                  the difference between them, and the full yearly ledgers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// YAML file with extra or replacement calculator variants
    #[arg(long, env = "FEECALC_CONFIG", global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a lower and a higher fee over the same horizon
    Compare(CompareArgs),
    /// Project a single fee scenario
    Project(ProjectArgs),
    /// List the configured calculator variants
    Variants,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<output::Report, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::compare::run_compare(args, config),
        Commands::Project(args) => commands::project::run_project(args, config),
        Commands::Variants => commands::variants::run_variants(config),
        Commands::Version => {
            println!("feecalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    let rendered = result.and_then(|report| output::format_output(&cli.output, &report));

    match rendered {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
