#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwright::config::ParseOptions;
use tagwright::id3v2::Id3v2Tag;

fuzz_target!(|data: Vec<u8>| {
	let _ = Id3v2Tag::read_from(&data, ParseOptions::new());
});
