use crate::{mutate, no_panic};

use rand::SeedableRng;
use rand::rngs::StdRng;

use tagwright::config::{ParseOptions, ParsingMode, WriteOptions};
use tagwright::field::FieldKey;
use tagwright::id3v2::{Id3v2Tag, Id3v2Version};

const MODES: [ParsingMode; 3] = [
	ParsingMode::Strict,
	ParsingMode::BestAttempt,
	ParsingMode::Relaxed,
];

fn seed_tag(version: Id3v2Version) -> Vec<u8> {
	let mut tag = Id3v2Tag::new(version);
	tag.set_field(FieldKey::Title, "Foo title").unwrap();
	tag.set_field(FieldKey::Artist, "Bär").unwrap();
	tag.set_field(FieldKey::TrackNumber, "3").unwrap();
	tag.set_field(FieldKey::TrackTotal, "12").unwrap();
	tag.set_field(FieldKey::Comment, "Qux").unwrap();
	tag.set_field(FieldKey::Barcode, "0123456789").unwrap();
	tag.set_field(FieldKey::MusicBrainzTrackId, "ae3f").unwrap();
	tag.set_field(FieldKey::UrlPublisherSite, "https://example.com").unwrap();

	tag.as_bytes(WriteOptions::new().preferred_padding(16))
		.unwrap()
}

fn read_everything(data: &[u8]) {
	for mode in MODES {
		let options = ParseOptions::new().parsing_mode(mode);
		let Ok((tag, _)) = Id3v2Tag::read_from(data, options) else {
			continue;
		};

		// Anything that was read should be usable
		for key in FieldKey::ALL {
			let _ = tag.get_all(*key);
		}

		for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
			let (converted, _) = tag.convert(version);
			let _ = converted.as_bytes(WriteOptions::new());
		}
	}
}

#[test_log::test]
fn mutated_tags() {
	for (seed, version) in [
		(0x5EED_0002, Id3v2Version::V2),
		(0x5EED_0003, Id3v2Version::V3),
		(0x5EED_0004, Id3v2Version::V4),
	] {
		no_panic(move || {
			let original = seed_tag(version);
			let mut rng = StdRng::seed_from_u64(seed);
			for _ in 0..500 {
				read_everything(&mutate(&mut rng, &original));
			}
		});
	}
}

#[test_log::test]
fn truncated_tags() {
	no_panic(|| {
		let original = seed_tag(Id3v2Version::V4);
		for len in 0..original.len() {
			read_everything(&original[..len]);
		}
	});
}

#[test_log::test]
fn oversized_lengths() {
	no_panic(|| {
		// Declared tag size far beyond the input
		read_everything(b"ID3\x04\x00\x00\x7F\x7F\x7F\x7F");
		// Extended header claiming the whole tag
		read_everything(b"ID3\x03\x00\x40\x00\x00\x00\x0A\xFF\xFF\xFF\xFF\x00\x00\x00\x00\x00\x00");
		// Frame claiming more than the tag holds
		read_everything(b"ID3\x03\x00\x00\x00\x00\x00\x0BTIT2\xFF\xFF\xFF\xFF\x00\x00\x00");
	});
}
