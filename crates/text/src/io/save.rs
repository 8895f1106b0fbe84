//! Writing model configs to disk.

use super::format::ModelTextConfig;
use phonoseq_core::{Result, TextError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save `config` as pretty-printed JSON, creating parent directories.
pub fn save_config(config: &ModelTextConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |err| TextError::Io {
        path: path.to_path_buf(),
        err,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::debug!("saved text config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_config;
    use phonoseq_core::CharactersConfig;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ModelTextConfig {
            characters: Some(CharactersConfig {
                characters: "xyz ".to_string(),
                ..Default::default()
            }),
            enable_eos_bos_chars: true,
            ..Default::default()
        };
        save_config(&config, &path).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }
}
