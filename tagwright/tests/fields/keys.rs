use crate::{VERSIONS, reread};

use std::str::FromStr;

use tagwright::error::{ErrorKind, FieldOperationErrorKind};
use tagwright::field::{FieldKey, SubKey};
use tagwright::id3v2::{Id3v2Tag, Id3v2Version};

#[test_log::test]
fn string_forms() {
	assert_eq!(FieldKey::from_str("TRACK_TOTAL"), Ok(FieldKey::TrackTotal));
	assert_eq!(FieldKey::CatalogNumber.to_string(), "CATALOG_NO");

	for key in FieldKey::ALL {
		assert_eq!(key.to_string().parse::<FieldKey>(), Ok(*key));
	}

	let err = FieldKey::from_str("NOT_A_KEY").unwrap_err();
	assert_eq!(err.to_string(), "Unknown field key: \"NOT_A_KEY\"");
}

#[test_log::test]
fn every_mapped_key_is_usable() {
	for version in VERSIONS {
		for key in FieldKey::ALL {
			if key.mapping(version).is_none() {
				continue;
			}

			let mut tag = Id3v2Tag::new(version);
			tag.set_field(*key, "1").unwrap();
			assert!(tag.has_field(*key), "{key} in {version}");
			assert_eq!(tag.get_first(*key).as_deref(), Some("1"), "{key} in {version}");

			let reread = reread(&tag);
			assert_eq!(reread.get_first(*key).as_deref(), Some("1"), "{key} in {version}");

			tag.delete_field(*key).unwrap();
			assert!(!tag.has_field(*key), "{key} in {version}");
			assert!(tag.is_empty(), "{key} in {version}");
		}
	}
}

#[test_log::test]
fn unmapped_keys_are_errors() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	assert!(FieldKey::EncodingTime.mapping(Id3v2Version::V3).is_none());

	let err = tag.set_field(FieldKey::EncodingTime, "2024").unwrap_err();
	let ErrorKind::InvalidFieldOperation(err) = err.kind() else {
		panic!("Expected a field operation error");
	};

	assert_eq!(err.key(), FieldKey::EncodingTime);
	assert_eq!(err.version(), Id3v2Version::V3);
	assert_eq!(err.kind(), FieldOperationErrorKind::NoMapping);

	assert!(!tag.has_field(FieldKey::EncodingTime));
	assert!(tag.get_first(FieldKey::EncodingTime).is_none());
	assert!(tag.get_all(FieldKey::EncodingTime).is_empty());
}

#[test_log::test]
fn same_key_different_frames() {
	let ids = |key: FieldKey| {
		VERSIONS.map(|version| {
			key.mapping(version)
				.map(|mapping| mapping.id().as_str().to_owned())
		})
	};

	assert_eq!(ids(FieldKey::Title), [
		Some(String::from("TT2")),
		Some(String::from("TIT2")),
		Some(String::from("TIT2")),
	]);
	assert_eq!(ids(FieldKey::OriginalYear), [
		Some(String::from("TOR")),
		Some(String::from("TORY")),
		Some(String::from("TDOR")),
	]);
	assert_eq!(ids(FieldKey::EncodingTime), [None, None, Some(String::from("TDEN"))]);

	let mood = FieldKey::Mood.mapping(Id3v2Version::V2).unwrap();
	assert_eq!(mood.id().as_str(), "TXX");
	assert_eq!(mood.sub_key(), Some(SubKey::Description("MOOD")));
}
