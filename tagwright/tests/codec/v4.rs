use crate::util::{synchsafe, tag, v4_frame};

use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::field::FieldKey;
use tagwright::id3v2::{
	Frame, FrameBody, FrameId, Id3v2Tag, Id3v2TagFlags, Id3v2Version, TextEncoding,
	TextInformationFrame,
};

#[test_log::test]
fn frame_unsynchronisation() {
	let frame = v4_frame(b"TIT2", 0x0002, b"\x00\xFF\x00\xE0");
	let bytes = tag(4, 0, &[frame.clone()]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("\u{FF}\u{E0}"));

	let title = tag.get("TIT2").unwrap();
	assert!(title.flags.unsynchronisation);
	assert_eq!(title.encode(Id3v2Version::V4, WriteOptions::new()).unwrap(), frame);
}

#[test_log::test]
fn utf16_values_with_different_byte_orders() {
	let bytes = tag(4, 0, &[v4_frame(
		b"TPE1",
		0,
		b"\x01\xFF\xFEA\x00\x00\x00\xFE\xFF\x00B",
	)]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(tag.get_all(FieldKey::Artist), ["A", "B"]);
}

#[test_log::test]
fn tag_unsynchronisation_applies_to_every_frame() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_flags(Id3v2TagFlags {
		unsynchronisation: true,
		..Id3v2TagFlags::default()
	});
	tag.insert(Frame::new(
		FrameId::new("TIT2").unwrap(),
		TextInformationFrame::new(TextEncoding::Latin1, "\u{FF}\u{E0}"),
	))
	.unwrap();

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(0))
		.unwrap();
	assert_eq!(
		&bytes[10..],
		b"TIT2\x00\x00\x00\x04\x00\x02\x00\xFF\x00\xE0"
	);

	let (reread, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(reread.get_first(FieldKey::Title).as_deref(), Some("\u{FF}\u{E0}"));
}

#[test_log::test]
fn data_length_indicator_is_recomputed() {
	let mut body = synchsafe(9).to_vec();
	body.extend(b"\x03Foo");
	let bytes = tag(4, 0, &[v4_frame(b"TIT2", 0x0001, &body)]);

	let (tag, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	let title = tag.get("TIT2").unwrap();
	assert_eq!(title.flags.data_length_indicator, Some(9));

	let FrameBody::Text(text) = &title.body else {
		panic!("Expected a text TIT2 frame");
	};
	assert_eq!(text.value, "Foo");

	let mut expected = synchsafe(4).to_vec();
	expected.extend(b"\x03Foo");
	assert_eq!(
		title.encode(Id3v2Version::V4, WriteOptions::new()).unwrap(),
		v4_frame(b"TIT2", 0x0001, &expected)
	);
}

#[test_log::test]
fn footer() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_flags(Id3v2TagFlags {
		footer: true,
		..Id3v2TagFlags::default()
	});
	tag.set_field(FieldKey::Title, "Foo").unwrap();

	// Padding is never written alongside a footer
	let bytes = tag.as_bytes(WriteOptions::new()).unwrap();
	assert_eq!(bytes.len(), 10 + 14 + 10);
	assert_eq!(&bytes[..3], b"ID3");
	assert_eq!(&bytes[24..27], b"3DI");
	assert_eq!(bytes[3..10], bytes[27..]);

	let (reread, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert!(reread.flags().footer);
	assert_eq!(reread.get_first(FieldKey::Title).as_deref(), Some("Foo"));
}

#[test_log::test]
fn padding() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Title, "Foo").unwrap();

	let bytes = tag
		.as_bytes(WriteOptions::new().preferred_padding(100))
		.unwrap();
	assert_eq!(bytes.len(), 10 + 14 + 100);
	assert!(bytes[24..].iter().all(|b| *b == 0));

	// The declared size covers the padding
	assert_eq!(bytes[6..10], synchsafe(114));

	let (reread, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());
	assert_eq!(reread.len(), 1);
}

#[test_log::test]
fn truncated_frame_is_skipped() {
	let mut frame = v4_frame(b"TIT2", 0, b"\x00Foo");
	// Claim more data than the tag holds
	frame[7] = 0x7F;
	let bytes = tag(4, 0, &[v4_frame(b"TPE1", 0, b"\x00Bar"), frame]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.get_first(FieldKey::Artist).as_deref(), Some("Bar"));
	assert_eq!(diagnostics.failed_frames().count(), 1);
}
