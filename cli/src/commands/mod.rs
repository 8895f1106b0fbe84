//! CLI commands for phonoseq.

pub mod decode;
pub mod encode;
pub mod split;
pub mod symbols;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use split::SplitCommand;
pub use symbols::SymbolsCommand;

use anyhow::{bail, Context, Result as AnyhowResult};
use clap::Args;
use phonoseq_text::{load_config, CodecConfig, PhonemizerRegistry, TextCodec};
use std::path::PathBuf;

/// Codec options shared by `encode` and `decode`.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Model config JSON; its text settings replace the flags below
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cleaner names, applied in order
    #[arg(long = "cleaner", default_values_t = vec!["english_cleaners".to_string()])]
    pub cleaners: Vec<String>,

    /// Encode phonemes instead of graphemes
    #[arg(short, long, default_value_t = false)]
    pub phonemes: bool,

    /// Phonemizer language
    #[arg(short, long, default_value = "en-us")]
    pub language: String,

    /// CMU dictionary (cmudict.dict format) for phoneme mode
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Interleave blank IDs
    #[arg(short, long, default_value_t = false)]
    pub blank: bool,

    /// Wrap in bos/eos IDs
    #[arg(short, long, default_value_t = false)]
    pub eos_bos: bool,
}

impl CodecArgs {
    /// Build the codec these options describe.
    pub fn build_codec(&self) -> AnyhowResult<TextCodec> {
        let config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("reading model config {}", path.display()))?
                .codec_config(),
            None => CodecConfig {
                cleaners: self.cleaners.clone(),
                use_phonemes: self.phonemes,
                language: self.language.clone(),
                add_blank: self.blank,
                enable_eos_bos: self.eos_bos,
                ..Default::default()
            },
        };

        let phonemizers = match (&self.dict, config.use_phonemes) {
            (Some(dict), _) => PhonemizerRegistry::with_english(dict)?,
            (None, true) => bail!("phoneme mode needs a CMU dictionary (--dict)"),
            (None, false) => PhonemizerRegistry::new(),
        };

        Ok(TextCodec::builder()
            .with_config(config)
            .phonemizers(phonemizers)
            .build()?)
    }
}

/// Read an argument, or stdin when it is `-`.
pub fn read_input(input: String) -> AnyhowResult<String> {
    if input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input)
    }
}
