//! Read, write, and convert ID3v2 tags.
//!
//! tagwright handles the three ID3v2 versions in use (`ID3v2.2`, `ID3v2.3`, and `ID3v2.4`). Their
//! wire formats differ in frame ID length, size encoding, flags, and available text encodings,
//! but all of them are represented by the same [`Id3v2Tag`](id3v2::Id3v2Tag).
//!
//! # Examples
//!
//! ## Reading a tag
//!
//! ```rust
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::config::ParseOptions;
//! use tagwright::field::FieldKey;
//! use tagwright::id3v2::Id3v2Tag;
//!
//! let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x0E\
//! 	TPE1\x00\x00\x00\x04\x00\x00\x03Foo";
//!
//! let (tag, diagnostics) = Id3v2Tag::read_from(bytes, ParseOptions::new())?;
//! assert_eq!(tag.get_first(FieldKey::Artist).as_deref(), Some("Foo"));
//!
//! // Frames that failed to decode are reported, not fatal (depending on the `ParsingMode`)
//! assert!(diagnostics.is_empty());
//! # Ok(()) }
//! ```
//!
//! ## Working with fields
//!
//! Frame IDs differ between versions. A [`FieldKey`](field::FieldKey) names a field the same way
//! for every version:
//!
//! ```rust
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::field::FieldKey;
//! use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
//!
//! for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
//! 	let mut tag = Id3v2Tag::new(version);
//! 	tag.set_field(FieldKey::Title, "Foo")?;
//! 	tag.set_field(FieldKey::TrackNumber, "1")?;
//! 	tag.set_field(FieldKey::TrackTotal, "12")?;
//!
//! 	assert_eq!(tag.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));
//! }
//! # Ok(()) }
//! ```
//!
//! ## Converting between versions
//!
//! ```rust
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::config::WriteOptions;
//! use tagwright::field::FieldKey;
//! use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
//!
//! let mut tag = Id3v2Tag::new(Id3v2Version::V4);
//! tag.set_field(FieldKey::Year, "2024-03-09T10:30")?;
//!
//! let (downgraded, diagnostics) = tag.convert(Id3v2Version::V3);
//! assert!(diagnostics.is_empty());
//!
//! // The timestamp was split into TYER, TDAT, and TIME
//! assert_eq!(downgraded.len(), 3);
//!
//! let bytes = downgraded.as_bytes(WriteOptions::default())?;
//! assert_eq!(&bytes[..4], b"ID3\x03");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod id3v2;
pub(crate) mod macros;
mod util;

mod accessor;

pub use accessor::Accessor;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use tagwright::prelude::*;
	//! ```

	pub use crate::Accessor;
	pub use crate::field::FieldKey;
	pub use crate::id3v2::{Id3v2Tag, Id3v2Version};
}
