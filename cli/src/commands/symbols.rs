//! Symbols command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Symbols command arguments.
#[derive(Parser)]
pub struct SymbolsCommand {
    /// Model config JSON with custom alphabets
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the phoneme table instead of the grapheme table
    #[arg(short, long, default_value_t = false)]
    pub phonemes: bool,
}

use anyhow::Result as AnyhowResult;
use phonoseq_text::{load_config, CharactersConfig};

pub fn run(cmd: SymbolsCommand) -> AnyhowResult<()> {
    let characters = match &cmd.config {
        Some(path) => load_config(path)?.characters.unwrap_or_default(),
        None => CharactersConfig::default(),
    };
    let set = characters.build()?;
    let table = if cmd.phonemes {
        set.phonemes()?
    } else {
        set.graphemes()
    };

    for (id, symbol) in table.symbols().enumerate() {
        println!("{}\t{:?}", id, symbol);
    }
    println!("{}\t<blank>", table.blank_id());

    Ok(())
}
