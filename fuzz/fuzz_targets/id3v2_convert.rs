#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::id3v2::{Id3v2Tag, Id3v2Version};

fuzz_target!(|data: Vec<u8>| {
	let Ok((tag, _)) = Id3v2Tag::read_from(&data, ParseOptions::new()) else {
		return;
	};

	for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
		let (converted, _) = tag.convert(version);
		let _ = converted.as_bytes(WriteOptions::new());
	}
});
