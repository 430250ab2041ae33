use crate::util::{tag, v3_frame};

use tagwright::config::{ParseOptions, ParsingMode, WriteOptions};
use tagwright::error::ErrorKind;
use tagwright::field::FieldKey;
use tagwright::id3v2::{FrameBody, Id3v2Tag, Id3v2TagFlags, Id3v2Version, TextEncoding};

#[test_log::test]
fn compressed_frame_is_kept_as_binary() {
	let frame = v3_frame(b"TIT2", 0x0080, b"\x00\x00\x00\x0Axyz");
	let bytes = tag(3, 0, &[frame.clone()]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());

	let title = tag.get("TIT2").unwrap();
	assert!(title.flags.compression);
	assert_eq!(title.flags.data_length_indicator, Some(10));

	let FrameBody::Binary(compressed) = &title.body else {
		panic!("Expected a binary TIT2 frame");
	};
	assert_eq!(compressed.data, b"xyz");

	// Not a readable field, but still written back untouched
	assert!(!tag.has_field(FieldKey::Title));
	assert_eq!(title.encode(Id3v2Version::V3, WriteOptions::new()).unwrap(), frame);
}

#[test_log::test]
fn utf16_with_bom() {
	let bytes = tag(3, 0, &[
		v3_frame(b"TIT2", 0, b"\x01\xFF\xFEF\x00o\x00o\x00"),
		v3_frame(b"TPE1", 0, b"\x01\xFE\xFF\x00B\x00a\x00r"),
	]);

	let (tag, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Foo"));
	assert_eq!(tag.get_first(FieldKey::Artist).as_deref(), Some("Bar"));
}

#[test_log::test]
fn utf16_text_keeps_inner_byte_order_marks() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_field(FieldKey::Title, "a\u{FEFF}b\u{3042}").unwrap();

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(0))
		.unwrap();
	let (reread, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(
		reread.get_first(FieldKey::Title).as_deref(),
		Some("a\u{FEFF}b\u{3042}")
	);
}

#[test_log::test]
fn non_latin1_text_is_written_as_utf16() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_field(FieldKey::Title, "Fö✓").unwrap();

	let FrameBody::Text(title) = &tag.get("TIT2").unwrap().body else {
		panic!("Expected a text TIT2 frame");
	};
	assert_eq!(title.encoding, TextEncoding::UTF16);

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(0))
		.unwrap();
	assert!(bytes[10..].starts_with(b"TIT2\x00\x00\x00\x09\x00\x00\x01\xFF\xFE"));

	let (reread, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(reread.get_first(FieldKey::Title).as_deref(), Some("Fö✓"));
}

#[test_log::test]
fn utf8_text() {
	let bytes = tag(3, 0, &[v3_frame(b"TIT2", 0, b"\x03F\xC3\xB6o")]);

	// Read as-is by default
	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Föo"));

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let err = Id3v2Tag::read_from(&bytes, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFrameBody(_)));
}

#[test_log::test]
fn extended_header_is_skipped() {
	let extended_header = b"\x00\x00\x00\x06\x00\x00\x00\x00\x00\x00".to_vec();
	let bytes = tag(3, 0x40, &[
		extended_header,
		v3_frame(b"TIT2", 0, b"\x00Foo"),
	]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Foo"));
}

#[test_log::test]
fn whole_tag_unsynchronisation() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_flags(Id3v2TagFlags {
		unsynchronisation: true,
		..Id3v2TagFlags::default()
	});
	tag.set_field(FieldKey::Title, "\u{FF}\u{E0}").unwrap();

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(0))
		.unwrap();
	assert_eq!(bytes[5], 0x80);
	assert!(bytes.windows(3).any(|w| w == [0xFF, 0x00, 0xE0]));

	let (reread, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert!(reread.flags().unsynchronisation);
	assert_eq!(reread.get_first(FieldKey::Title).as_deref(), Some("\u{FF}\u{E0}"));
}

#[test_log::test]
fn bad_frames_are_skipped() {
	let bytes = tag(3, 0, &[
		v3_frame(b"TIT2", 0, b"\x00Foo"),
		// Lowercase IDs are invalid
		v3_frame(b"tpe1", 0, b"\x00Bar"),
		v3_frame(b"TALB", 0, b"\x00Baz"),
	]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(diagnostics.len(), 1);
	assert_eq!(diagnostics.failed_frames().count(), 1);

	assert_eq!(tag.len(), 2);
	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Foo"));
	assert_eq!(tag.get_first(FieldKey::Album).as_deref(), Some("Baz"));
}
