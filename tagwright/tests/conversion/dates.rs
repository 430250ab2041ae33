use crate::reread;

use tagwright::field::FieldKey;
use tagwright::id3v2::{
	Frame, FrameBody, FrameId, Id3v2Tag, Id3v2Version, TextEncoding, TextInformationFrame,
};

fn text<'a>(tag: &'a Id3v2Tag, id: &str) -> &'a str {
	match &tag.get(id).unwrap().body {
		FrameBody::Text(text) => &text.value,
		body => panic!("Expected a text frame, got: {body:?}"),
	}
}

#[test_log::test]
fn timestamp_survives_v2() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Year, "2024-03-09T10:30").unwrap();
	tag.set_field(FieldKey::OriginalYear, "1999-12-31").unwrap();

	let (v2, diagnostics) = tag.convert(Id3v2Version::V2);
	assert!(diagnostics.is_empty());

	let v2 = reread(&v2);
	assert_eq!(v2.len(), 4);
	assert_eq!(text(&v2, "TYE"), "2024");
	assert_eq!(text(&v2, "TDA"), "0903");
	assert_eq!(text(&v2, "TIM"), "1030");
	assert_eq!(text(&v2, "TOR"), "1999");

	let (v4, diagnostics) = v2.convert(Id3v2Version::V4);
	assert!(diagnostics.is_empty());
	assert_eq!(v4.len(), 2);
	assert_eq!(v4.get_first(FieldKey::Year).as_deref(), Some("2024-03-09T10:30"));

	// The month and day of the original release are lost
	assert_eq!(v4.get_first(FieldKey::OriginalYear).as_deref(), Some("1999"));
}

#[test_log::test]
fn partial_timestamps() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Year, "2024-03").unwrap();

	let (v3, diagnostics) = tag.convert(Id3v2Version::V3);
	assert!(diagnostics.is_empty());
	assert_eq!(v3.len(), 1);
	assert_eq!(text(&v3, "TYER"), "2024");
}

#[test_log::test]
fn date_without_year() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_field(FieldKey::Title, "Foo").unwrap();
	tag.insert(Frame::new(
		FrameId::new("TDAT").unwrap(),
		TextInformationFrame::new(TextEncoding::Latin1, "0903"),
	))
	.unwrap();

	let (v4, diagnostics) = tag.convert(Id3v2Version::V4);
	assert_eq!(v4.len(), 1);

	let dropped = diagnostics.dropped_frames().collect::<Vec<_>>();
	assert_eq!(dropped.len(), 1);
	assert_eq!(dropped[0].id().as_str(), "TDAT");
	assert_eq!(dropped[0].from(), Id3v2Version::V3);
	assert_eq!(dropped[0].to(), Id3v2Version::V4);
}
