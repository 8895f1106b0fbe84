//! Split command implementation.

use clap::Parser;

/// Split command arguments.
#[derive(Parser)]
pub struct SplitCommand {
    /// Text to split (`-` reads stdin)
    pub input: String,

    /// Language of the text
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Split inside quotes and brackets too
    #[arg(long, default_value_t = false)]
    pub ignore_quotes: bool,
}

use anyhow::Result as AnyhowResult;
use phonoseq_text::{Segmenter, SegmenterConfig};

pub fn run(cmd: SplitCommand) -> AnyhowResult<()> {
    let config = SegmenterConfig {
        defer_inside_quotes: !cmd.ignore_quotes,
        ..Default::default()
    };
    let segmenter = Segmenter::with_config(&cmd.language, config)?;
    let text = super::read_input(cmd.input)?;

    for sentence in segmenter.segment(&text) {
        println!("{}", sentence);
    }

    Ok(())
}
