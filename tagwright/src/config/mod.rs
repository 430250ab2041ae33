//! Various configuration options to control tagwright
//!
//! Options are plain values passed into every read and write. Nothing is stored globally, so
//! tags for different files can be decoded and encoded on separate threads.

mod parse_options;
mod write_options;

pub use parse_options::{ParseOptions, ParsingMode};
pub use write_options::WriteOptions;
