#![allow(missing_docs)]

mod accessor;
mod keys;
mod values;

use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::id3v2::{Id3v2Tag, Id3v2Version};

pub const VERSIONS: [Id3v2Version; 3] = [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4];

pub fn reread(tag: &Id3v2Tag) -> Id3v2Tag {
	let bytes = tag.as_bytes(WriteOptions::new()).unwrap();
	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty(), "{diagnostics:?}");
	tag
}
