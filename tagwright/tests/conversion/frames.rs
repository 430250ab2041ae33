use crate::reread;

use tagwright::config::{ParseOptions, WriteOptions};
use tagwright::field::FieldKey;
use tagwright::id3v2::{
	ChannelType, Frame, FrameBody, FrameId, Id3v2Tag, Id3v2Version, TextEncoding,
	TextInformationFrame,
};

fn v3_tag(frames: &[(&[u8; 4], u16, &[u8])]) -> Vec<u8> {
	let mut body: Vec<u8> = Vec::new();
	for (id, flags, content) in frames {
		body.extend(*id);
		body.extend((content.len() as u32).to_be_bytes());
		body.extend(flags.to_be_bytes());
		body.extend(*content);
	}

	let size = body.len() as u32;
	let mut tag = b"ID3\x03\x00\x00".to_vec();
	tag.extend([21, 14, 7, 0].map(|shift| ((size >> shift) & 0x7F) as u8));
	tag.extend(body);
	tag
}

#[test_log::test]
fn volume_adjustment() {
	// Right +256 with a peak of 0x1234, left +128 with no peak
	let rvad: &[u8] = b"\x03\x10\x01\x00\x00\x80\x12\x34\x00\x00";
	let bytes = v3_tag(&[(b"RVAD", 0, rvad)]);

	let (tag, diagnostics) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();
	assert!(diagnostics.is_empty());

	let (v4, diagnostics) = tag.convert(Id3v2Version::V4);
	assert!(diagnostics.is_empty());

	let v4 = reread(&v4);
	let FrameBody::RelativeVolumeAdjustment(rva2) = &v4.get("RVA2").unwrap().body else {
		panic!("Expected an RVA2 frame");
	};

	assert!(rva2.identification.is_empty());
	assert_eq!(rva2.channels.len(), 2);

	let right = rva2.channel(ChannelType::FrontRight).unwrap();
	assert_eq!(right.volume_adjustment, 256);
	assert_eq!(right.bits_representing_peak, 16);
	assert_eq!(right.peak_volume.as_deref(), Some(&[0x12, 0x34][..]));

	let left = rva2.channel(ChannelType::FrontLeft).unwrap();
	assert_eq!(left.volume_adjustment, 128);
	assert_eq!(left.peak_volume, None);

	// And back again
	let (v3, diagnostics) = v4.convert(Id3v2Version::V3);
	assert!(diagnostics.is_empty());

	let rvad_frame = v3.get("RVAD").unwrap();
	let mut expected = b"RVAD\x00\x00\x00\x0A\x00\x00".to_vec();
	expected.extend(rvad);
	assert_eq!(
		rvad_frame.encode(Id3v2Version::V3, WriteOptions::new()).unwrap(),
		expected
	);
}

#[test_log::test]
fn credit_lists_merge() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	for (id, value) in [("TIPL", "producer\0Foo"), ("TMCL", "guitar\0Bar")] {
		tag.push(Frame::new(
			FrameId::new(id).unwrap(),
			TextInformationFrame::new(TextEncoding::UTF8, value),
		))
		.unwrap();
	}

	let (v3, diagnostics) = tag.convert(Id3v2Version::V3);
	assert!(diagnostics.is_empty());

	let v3 = reread(&v3);
	assert_eq!(v3.len(), 1);

	let FrameBody::Text(credits) = &v3.get("IPLS").unwrap().body else {
		panic!("Expected a text IPLS frame");
	};
	assert_eq!(
		credits.values().collect::<Vec<_>>(),
		["producer", "Foo", "guitar", "Bar"]
	);

	let (v4, _) = v3.convert(Id3v2Version::V4);
	assert_eq!(v4.len(), 1);
	assert!(v4.get("TIPL").is_some());
}

#[test_log::test]
fn compressed_frames() {
	let bytes = v3_tag(&[
		(b"TIT2", 0x0080, &b"\x00\x00\x00\x0Axyz"[..]),
		(b"TALB", 0, &b"\x00Foo"[..]),
	]);
	let (tag, _) = Id3v2Tag::read_from(&bytes, ParseOptions::new()).unwrap();

	// Kept as-is in ID3v2.4
	let (v4, diagnostics) = tag.convert(Id3v2Version::V4);
	assert!(diagnostics.is_empty());
	assert_eq!(
		v4.get("TIT2")
			.unwrap()
			.encode(Id3v2Version::V4, WriteOptions::new())
			.unwrap(),
		b"TIT2\x00\x00\x00\x07\x00\x09\x00\x00\x00\x0Axyz"
	);

	// ID3v2.2 has no way to represent them
	let (v2, diagnostics) = tag.convert(Id3v2Version::V2);
	assert_eq!(v2.len(), 1);
	assert_eq!(v2.get_first(FieldKey::Album).as_deref(), Some("Foo"));
	assert_eq!(
		diagnostics
			.dropped_frames()
			.map(|dropped| dropped.id().as_str())
			.collect::<Vec<_>>(),
		["TIT2"]
	);
}

#[test_log::test]
fn v4_only_frames_are_reported() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	tag.set_field(FieldKey::Title, "Foo").unwrap();
	tag.set_field(FieldKey::Mood, "Happy").unwrap();
	tag.set_field(FieldKey::EncodingTime, "2024").unwrap();

	let (v3, diagnostics) = tag.convert(Id3v2Version::V3);
	assert_eq!(v3.len(), 1);
	assert_eq!(diagnostics.len(), 2);

	let mut dropped = diagnostics
		.dropped_frames()
		.map(|dropped| dropped.id().as_str())
		.collect::<Vec<_>>();
	dropped.sort_unstable();
	assert_eq!(dropped, ["TDEN", "TMOO"]);

	// The original tag is untouched
	assert_eq!(tag.len(), 3);
	assert_eq!(tag.version(), Id3v2Version::V4);
}

#[test_log::test]
fn same_version_is_a_copy() {
	let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	tag.set_field(FieldKey::Year, "2024").unwrap();
	tag.set_field(FieldKey::Title, "Foo").unwrap();

	let (converted, diagnostics) = tag.convert(Id3v2Version::V3);
	assert!(diagnostics.is_empty());
	assert_eq!(converted, tag);
}
