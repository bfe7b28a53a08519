//! OxiLZ CLI - text-to-text dictionary compression
//!
//! Compresses text into wide UTF-16, Base64, URI-safe, raw byte or
//! `lz:`-marked paint-data form, and back.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{Format, cmd_compress, cmd_decompress, cmd_info};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxilz")]
#[command(author, version, about = "OxiLZ - Pure Rust text compression")]
#[command(long_about = "
OxiLZ compresses text into text using a growing-width dictionary coder.
Input defaults to stdin and output to stdout; '-' also means stdin/stdout.

Examples:
  oxilz compress layer.txt -o layer.lz
  oxilz compress -f uri < query.txt
  oxilz compress -f paint layer.dataurl
  oxilz decompress -f base64 layer.lz
  oxilz info --json layer.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Base64)]
        format: Format,
    },

    /// Decompress text
    #[command(alias = "d")]
    Decompress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format
        #[arg(short, long, value_enum, default_value_t = Format::Base64)]
        format: Format,
    },

    /// Compare compressed sizes across all formats
    #[command(alias = "i")]
    Info {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            format,
        } => cmd_compress(input.as_deref(), output.as_deref(), format),
        Commands::Decompress {
            input,
            output,
            format,
        } => cmd_decompress(input.as_deref(), output.as_deref(), format),
        Commands::Info { input, json } => cmd_info(input.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
