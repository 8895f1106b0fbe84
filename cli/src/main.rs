//! phonoseq CLI - Command-line interface for the TTS text front end.
//!
//! This is the main entry point for the `phonoseq` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, SplitCommand, SymbolsCommand};

#[derive(Parser)]
#[command(name = "phonoseq")]
#[command(about = "Text to symbol ID sequences for speech synthesis", long_about = None)]
#[command(version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to symbol IDs
    Encode(EncodeCommand),
    /// Decode symbol IDs back to text
    Decode(DecodeCommand),
    /// Split text into sentences
    Split(SplitCommand),
    /// List the symbol table
    Symbols(SymbolsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Split(cmd) => commands::split::run(cmd)?,
        Commands::Symbols(cmd) => commands::symbols::run(cmd)?,
    }

    Ok(())
}
