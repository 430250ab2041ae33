#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::id3v2::{Frame, Id3v2Version};

fuzz_target!(|data: Vec<u8>| {
	for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
		if let Ok(Some((frame, _))) = Frame::decode(&data, version, ParseOptions::new()) {
			let _ = frame.encode(version, WriteOptions::new());
		}
	}
});
