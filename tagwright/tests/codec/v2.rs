use crate::util::{tag, v2_frame};

use tagwright::config::{ParseOptions, ParsingMode, WriteOptions};
use tagwright::error::{Diagnostic, ErrorKind, Id3v2ErrorKind};
use tagwright::field::FieldKey;
use tagwright::id3v2::{FrameBody, Id3v2Tag, Id3v2Version};

fn sample() -> Vec<u8> {
	tag(2, 0, &[
		v2_frame(b"TT2", b"\x00Title"),
		v2_frame(b"TP1", b"\x00Artist"),
		v2_frame(b"TRK", b"\x003/12"),
		v2_frame(b"COM", b"\x00eng\x00Comment"),
		v2_frame(b"PIC", b"\x00JPG\x03\x00data"),
	])
}

#[test_log::test]
fn read_fields() {
	let (tag, diagnostics) = Id3v2Tag::read_from(&sample(), ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());

	assert_eq!(tag.version(), Id3v2Version::V2);
	assert_eq!(tag.len(), 5);

	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Title"));
	assert_eq!(tag.get_first(FieldKey::Artist).as_deref(), Some("Artist"));
	assert_eq!(tag.get_first(FieldKey::TrackNumber).as_deref(), Some("3"));
	assert_eq!(tag.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));
	assert_eq!(tag.get_first(FieldKey::Comment).as_deref(), Some("Comment"));
}

#[test_log::test]
fn upgrade_to_v4() {
	let (tag, _) = Id3v2Tag::read_from(&sample(), ParseOptions::new()).unwrap();

	let (upgraded, diagnostics) = tag.convert(Id3v2Version::V4);
	assert!(diagnostics.is_empty());
	assert_eq!(upgraded.version(), Id3v2Version::V4);

	let mut ids = upgraded.iter().map(|f| f.id_str()).collect::<Vec<_>>();
	ids.sort_unstable();
	assert_eq!(ids, ["APIC", "COMM", "TIT2", "TPE1", "TRCK"]);

	let FrameBody::Binary(picture) = &upgraded.get("APIC").unwrap().body else {
		panic!("Expected a binary APIC frame");
	};
	assert_eq!(picture.data, b"\x00image/jpeg\x00\x03\x00data");

	// Every field survives, and the upgraded tag can be written
	for key in [
		FieldKey::Title,
		FieldKey::Artist,
		FieldKey::TrackNumber,
		FieldKey::TrackTotal,
		FieldKey::Comment,
	] {
		assert_eq!(upgraded.get_first(key), tag.get_first(key), "{key}");
	}

	let bytes = upgraded.as_bytes(WriteOptions::new()).unwrap();
	let (reread, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(reread.get("APIC"), upgraded.get("APIC"));
}

#[test_log::test]
fn compressed_tag_is_rejected() {
	let bytes = tag(2, 0x40, &[v2_frame(b"TT2", b"\x00Title")]);

	let err = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::CannotReadTag(e) if matches!(e.kind(), Id3v2ErrorKind::V2Compression)
	));
}

#[test_log::test]
fn utf8_text_is_invalid() {
	let bytes = tag(2, 0, &[
		v2_frame(b"TT2", b"\x03Title"),
		v2_frame(b"TP1", b"\x00Artist"),
	]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(tag.len(), 2);
	assert_eq!(diagnostics.len(), 1);
	assert!(matches!(
		diagnostics.iter().next(),
		Some(Diagnostic::RetainedFrame(err)) if err.id().as_str() == "TT2"
	));

	let FrameBody::Binary(raw) = &tag.get("TT2").unwrap().body else {
		panic!("Expected TT2 to be kept as binary");
	};
	assert_eq!(raw.data, b"\x03Title");
	assert_eq!(tag.get_first(FieldKey::Artist).as_deref(), Some("Artist"));

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let err = Id3v2Tag::read_from(&bytes, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidFrameBody(_)));
}

#[test_log::test]
fn frames_are_written_with_24_bit_sizes() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V2);
	tag.set_field(FieldKey::Title, "Title").unwrap();

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(0))
		.unwrap();
	assert_eq!(
		bytes,
		b"ID3\x02\x00\x00\x00\x00\x00\x0CTT2\x00\x00\x06\x00Title"
	);
}
