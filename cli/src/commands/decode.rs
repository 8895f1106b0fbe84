//! Decode command implementation.

use super::CodecArgs;
use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Symbol IDs, separated by commas or whitespace (`-` reads stdin)
    pub ids: String,

    #[command(flatten)]
    pub codec: CodecArgs,
}

use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let codec = cmd.codec.build_codec()?;
    let input = super::read_input(cmd.ids)?;

    // Parse symbol IDs
    let ids: Vec<u32> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().with_context(|| format!("invalid symbol ID {s:?}")))
        .collect::<AnyhowResult<Vec<_>>>()?;

    println!("{}", codec.decode(&ids)?);

    Ok(())
}
