//! CLI frontend for the background generator.

mod commands;
mod logging;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use bg_resolver::PolicyKind;

#[derive(Parser)]
#[command(
    name = "bg",
    about = "Roll a character background: a category, then a profession",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that rolls.
#[derive(Args, Debug, Clone)]
pub struct RollOpts {
    /// Table file (JSON); the built-in tables are used if omitted
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Special-case handling: reroll (discard disallowed results) or branch
    /// (keep apprenticeships and roll an extra profession)
    #[arg(short, long, default_value = "reroll")]
    policy: PolicyKind,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Forced die results, comma-separated, used before random rolls
    #[arg(short, long)]
    rolls: Option<String>,

    /// Maximum rolls when rerolling disallowed results (ignored by the
    /// branch policy, which never rerolls)
    #[arg(long, default_value = "100")]
    max_attempts: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a background (primary and secondary roll)
    Generate {
        #[command(flatten)]
        opts: RollOpts,

        /// Number of backgrounds to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also print the debug representation of each result
        #[arg(long)]
        debug: bool,
    },

    /// Interactive session with generate and reroll commands
    Session {
        #[command(flatten)]
        opts: RollOpts,
    },

    /// Validate a table file without rolling
    Check {
        /// Table file (JSON); the built-in tables are checked if omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Print the router table or one category table
    Show {
        /// Category name (case-insensitive); the router is shown if omitted
        category: Option<String>,

        /// Table file (JSON); the built-in tables are used if omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            opts,
            count,
            json,
            debug,
        } => commands::generate::run(&opts, count, json, debug),
        Commands::Session { opts } => commands::session::run(&opts),
        Commands::Check { tables } => commands::check::run(tables.as_deref()),
        Commands::Show { category, tables } => {
            commands::show::run(tables.as_deref(), category.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
