use crate::reread;

use tagwright::Accessor;
use tagwright::field::FieldKey;
use tagwright::id3v2::{Id3v2Tag, Id3v2Version};

#[test_log::test]
fn accessors_use_field_keys() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_title(String::from("Foo title"));
	tag.set_artist(String::from("Bar artist"));
	tag.set_album(String::from("Baz album"));
	tag.set_genre(String::from("Classical"));
	tag.set_comment(String::from("Qux comment"));
	tag.set_track(1);
	tag.set_track_total(2);
	tag.set_disk(3);
	tag.set_disk_total(4);

	assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Foo title"));
	assert_eq!(tag.get_first(FieldKey::TrackTotal).as_deref(), Some("2"));
	assert_eq!(tag.get_first(FieldKey::DiscNumber).as_deref(), Some("3"));

	let reread = reread(&tag);
	assert_eq!(reread.title().as_deref(), Some("Foo title"));
	assert_eq!(reread.artist().as_deref(), Some("Bar artist"));
	assert_eq!(reread.album().as_deref(), Some("Baz album"));
	assert_eq!(reread.genre().as_deref(), Some("Classical"));
	assert_eq!(reread.comment().as_deref(), Some("Qux comment"));
	assert_eq!(reread.track(), Some(1));
	assert_eq!(reread.track_total(), Some(2));
	assert_eq!(reread.disk(), Some(3));
	assert_eq!(reread.disk_total(), Some(4));
}

#[test_log::test]
fn removing_the_last_value_removes_the_frame() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Title, "Foo").unwrap();

	assert_eq!(tag.track(), None);
	tag.remove_title();
	assert!(tag.title().is_none());
	assert!(tag.is_empty());
}
