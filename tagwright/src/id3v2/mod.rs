//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]
//! * [`catalog`](util::catalog) for how frame IDs relate across versions

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
pub(crate) mod tag;
pub mod util;
pub(crate) mod write;

// Exports

pub use header::{Id3v2TagFlags, Id3v2Version};

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::header::FrameId;
pub use frame::{Frame, FrameBody, FrameFlags};

pub use crate::util::text::TextEncoding;
