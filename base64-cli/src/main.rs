use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "b64")]
#[command(about = "Encode and decode standard base64")]
struct Cli {
    /// Output file, or `-` for stdout
    #[arg(short, long, global = true, default_value = "-", env = "B64_OUTPUT")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary input as base64 text
    Encode {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Do not append a newline after the encoded text
        #[arg(long, env = "B64_NO_NEWLINE")]
        no_newline: bool,
    },
    /// Decode base64 text back to binary
    Decode {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only data
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Encode { input, no_newline } => commands::encode(input, &cli.output, !no_newline),
        Commands::Decode { input } => commands::decode(input, &cli.output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("b64: {}", e);
            ExitCode::FAILURE
        }
    }
}
