#![allow(missing_docs)]

mod dates;
mod frames;

use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::id3v2::Id3v2Tag;

pub fn reread(tag: &Id3v2Tag) -> Id3v2Tag {
	let bytes = tag.as_bytes(WriteOptions::new()).unwrap();
	let (reread, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty(), "{diagnostics:?}");
	assert_eq!(reread.version(), tag.version());
	reread
}
