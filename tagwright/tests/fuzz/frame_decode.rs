use crate::{mutate, no_panic};

use rand::SeedableRng;
use rand::rngs::StdRng;

use tagwright::config::{ParseOptions, ParsingMode, WriteOptions};
use tagwright::id3v2::{Frame, Id3v2Version};

const FRAMES: &[(Id3v2Version, &[u8])] = &[
	(Id3v2Version::V2, b"TT2\x00\x00\x04\x00Foo"),
	(Id3v2Version::V2, b"RVA\x00\x00\x0A\x03\x10\x01\x00\x00\x80\x12\x34\x00\x00"),
	(Id3v2Version::V3, b"TXXX\x00\x00\x00\x09\x00\x00\x00BAR\x00CODE"),
	(Id3v2Version::V3, b"TIT2\x00\x00\x00\x07\x00\x80\x00\x00\x00\x0Axyz"),
	(Id3v2Version::V3, b"COMM\x00\x00\x00\x08\x00\x00\x00eng\x00Foo"),
	(Id3v2Version::V4, b"UFID\x00\x00\x00\x0A\x00\x00owner\x00abcd"),
	(Id3v2Version::V4, b"RVA2\x00\x00\x00\x08\x00\x00id\x00\x01\x01\x00\x08\x7F"),
	(Id3v2Version::V4, b"TRCK\x00\x00\x00\x06\x00\x02\x0301/11"),
	(Id3v2Version::V4, b"WXXX\x00\x00\x00\x06\x00\x00\x00a\x00url"),
];

#[test_log::test]
fn mutated_frames() {
	no_panic(|| {
		let mut rng = StdRng::seed_from_u64(0xF4A3_E000);
		for (version, frame) in FRAMES {
			for _ in 0..300 {
				let data = mutate(&mut rng, frame);
				for mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
					let options = ParseOptions::new().parsing_mode(mode);
					if let Ok(Some((frame, len))) = Frame::decode(&data, *version, options) {
						assert!(len <= data.len());
						let _ = frame.encode(*version, WriteOptions::new());
					}
				}
			}
		}
	});
}

#[test_log::test]
fn decoded_frames_reencode() {
	// Valid frames decode, and encode back to the same bytes
	for (version, bytes) in FRAMES {
		let (frame, len) = Frame::decode(bytes, *version, ParseOptions::new())
			.unwrap()
			.unwrap();
		assert_eq!(len, bytes.len());
		assert_eq!(
			frame.encode(*version, WriteOptions::new()).unwrap(),
			*bytes,
			"{}",
			frame.id_str()
		);
	}
}
