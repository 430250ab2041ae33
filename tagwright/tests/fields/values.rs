use crate::{VERSIONS, reread};

use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::error::{ErrorKind, FieldOperationErrorKind};
use tagwright::field::FieldKey;
use tagwright::id3v2::{FrameBody, Id3v2Tag, Id3v2Version};

fn error_kind(result: tagwright::error::Result<()>) -> FieldOperationErrorKind {
	match result.unwrap_err().kind() {
		ErrorKind::InvalidFieldOperation(err) => err.kind(),
		other => panic!("Expected a field operation error, got: {other:?}"),
	}
}

#[test_log::test]
fn multiple_values_share_a_frame() {
	for version in VERSIONS {
		let mut tag = Id3v2Tag::new(version);
		tag.add_field(FieldKey::Artist, "Foo").unwrap();
		tag.add_field(FieldKey::Artist, "Bar").unwrap();
		tag.add_field(FieldKey::Artist, "Baz").unwrap();

		assert_eq!(tag.len(), 1);
		assert_eq!(tag.get_all(FieldKey::Artist), ["Foo", "Bar", "Baz"]);
		assert_eq!(tag.get_field_at(FieldKey::Artist, 1).as_deref(), Some("Bar"));
		assert!(tag.get_field_at(FieldKey::Artist, 3).is_none());

		let reread = reread(&tag);
		assert_eq!(reread.get_all(FieldKey::Artist), ["Foo", "Bar", "Baz"]);

		tag.delete_field_at(FieldKey::Artist, 0).unwrap();
		assert_eq!(tag.get_all(FieldKey::Artist), ["Bar", "Baz"]);
	}
}

#[test_log::test]
fn user_defined_fields_are_separate() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Barcode, "0123456789").unwrap();
	tag.set_field(FieldKey::CatalogNumber, "CAT-1").unwrap();
	tag.set_field(FieldKey::Script, "Latn").unwrap();

	assert_eq!(tag.len(), 3);
	assert!(tag.iter().all(|frame| frame.id_str() == "TXXX"));

	tag.delete_field(FieldKey::CatalogNumber).unwrap();
	assert_eq!(tag.len(), 2);
	assert_eq!(tag.get_first(FieldKey::Barcode).as_deref(), Some("0123456789"));
	assert_eq!(tag.get_first(FieldKey::Script).as_deref(), Some("Latn"));
}

#[test_log::test]
fn number_pair_components() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_field(FieldKey::DiscTotal, "2").unwrap();
	assert!(!tag.has_field(FieldKey::DiscNumber));

	tag.set_field(FieldKey::DiscNumber, "1").unwrap();
	assert_eq!(tag.len(), 1);

	let FrameBody::NumberPair(pair) = &tag.get("TPOS").unwrap().body else {
		panic!("Expected a number pair");
	};
	assert_eq!((pair.numerator, pair.denominator), (Some(1), Some(2)));

	assert_eq!(
		error_kind(tag.add_field(FieldKey::DiscNumber, "3")),
		FieldOperationErrorKind::SingleValued
	);
	assert_eq!(
		error_kind(tag.set_field(FieldKey::DiscNumber, "-1")),
		FieldOperationErrorKind::InvalidValue("expected an unsigned integer")
	);

	tag.delete_field(FieldKey::DiscTotal).unwrap();
	assert_eq!(tag.get_first(FieldKey::DiscNumber).as_deref(), Some("1"));
	assert!(tag.get_first(FieldKey::DiscTotal).is_none());
}

#[test_log::test]
fn deleted_track_number_stays_deleted() {
	for version in VERSIONS {
		let mut tag = Id3v2Tag::new(version);
		tag.set_field(FieldKey::TrackNumber, "3").unwrap();
		tag.set_field(FieldKey::TrackTotal, "12").unwrap();
		tag.delete_field(FieldKey::TrackNumber).unwrap();
		assert!(!tag.has_field(FieldKey::TrackNumber));

		let reread = reread(&tag);
		assert!(!reread.has_field(FieldKey::TrackNumber));
		assert!(reread.get_first(FieldKey::TrackNumber).is_none());
		assert_eq!(reread.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));
	}
}

#[test_log::test]
fn total_only_pair_round_trip() {
	let (tag, _) = Id3v2Tag::read_from(
		b"ID3\x04\x00\x00\x00\x00\x00\x0E\
		TRCK\x00\x00\x00\x04\x00\x00\x00/12",
		ParseOptions::new(),
	)
	.unwrap();
	assert!(tag.get_first(FieldKey::TrackNumber).is_none());
	assert_eq!(tag.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));

	let bytes = tag.as_bytes(WriteOptions::new().preferred_padding(0)).unwrap();
	assert!(bytes.ends_with(b"TRCK\x00\x00\x00\x04\x00\x00\x00/12"));

	let reread = reread(&tag);
	assert!(reread.get_first(FieldKey::TrackNumber).is_none());
	assert_eq!(reread.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));
}

#[test_log::test]
fn invalid_operations() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);

	assert_eq!(
		error_kind(tag.set_field(FieldKey::Title, "")),
		FieldOperationErrorKind::EmptyValue
	);
	assert_eq!(
		error_kind(tag.set_field(FieldKey::UrlPublisherSite, "https://example.com/✓")),
		FieldOperationErrorKind::InvalidValue("URLs must be valid Latin-1")
	);
	assert_eq!(
		error_kind(tag.delete_field_at(FieldKey::Title, 0)),
		FieldOperationErrorKind::IndexOutOfRange { index: 0, len: 0 }
	);

	// Nothing was written
	assert!(tag.is_empty());
}
