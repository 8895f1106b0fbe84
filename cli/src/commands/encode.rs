//! Encode command implementation.

use super::CodecArgs;
use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Text to encode (`-` reads stdin)
    pub input: String,

    /// Split into sentences first, one sequence per line
    #[arg(short, long, default_value_t = false)]
    pub sentences: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

use anyhow::Result as AnyhowResult;
use phonoseq_text::EncodedSequence;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let codec = cmd.codec.build_codec()?;
    let text = super::read_input(cmd.input)?;

    let sequences = if cmd.sentences {
        codec.encode_sentences(&text)?
    } else {
        vec![codec.encode(&text)?]
    };

    let dropped: usize = sequences.iter().map(|seq| seq.dropped).sum();
    if dropped > 0 {
        log::info!("{dropped} symbol(s) were not in the table and were skipped");
    }

    let output: Vec<String> = sequences.iter().map(format_ids).collect();
    let output = output.join("\n");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            let total: usize = sequences.iter().map(EncodedSequence::len).sum();
            println!("Encoded {} IDs in {} sequence(s) to {}", total, sequences.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn format_ids(seq: &EncodedSequence) -> String {
    let ids: Vec<String> = seq.ids.iter().map(|id| id.to_string()).collect();
    ids.join(" ")
}
