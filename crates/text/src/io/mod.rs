//! Model text configuration files.
//!
//! A trained model records how its input was prepared: alphabets, cleaner,
//! phoneme language and the blank/bos/eos switches. These modules read and
//! write that part of the model's JSON config.

pub mod format;
pub mod load;
pub mod save;

pub use format::ModelTextConfig;
pub use load::{load_config, parse_config};
pub use save::save_config;
