//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use declmark::output::OutputMode;

/// declmark - Report metadata markers attached to declarations
#[derive(Parser, Debug)]
#[command(
    name = "declmark",
    version,
    about = "Report metadata markers attached to declarations",
    long_about = "Inspect an explicit registry of program declarations.\n\n\
                  Declarations (types, constructors, methods, fields) carry\n\
                  metadata markers; reports enumerate and print them."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report structured task markers on types and their methods
    Tasks {
        /// Registry file to report over (defaults to declmark.toml, then the built-in sample)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print every annotation on every declaration of a type
    Inspect {
        /// Type to inspect (defaults to the first type in the registry)
        type_name: Option<String>,

        /// Registry file to report over (defaults to declmark.toml, then the built-in sample)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write the sample registry to declmark.toml
    Init {
        /// Overwrite an existing registry file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a registry file against the model invariants
    Validate {
        /// Registry file to validate (defaults to declmark.toml)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Tasks { file }) => commands::tasks(file.as_deref(), output_mode),
        Some(Command::Inspect { type_name, file }) => {
            commands::inspect(type_name.as_deref(), file.as_deref(), output_mode)
        },
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Validate { file }) => commands::validate(file.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("declmark v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("declmark v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'declmark --help' for usage");
                println!("Run 'declmark tasks' to report on the built-in sample");
            }
            Ok(())
        },
    }
}
