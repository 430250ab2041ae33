use crate::no_panic;

use tagwright::config::ParsingMode;
use tagwright::id3v2::{
	CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, Id3v2Version, NumberPairFrame,
	RelativeVolumeAdjustmentFrame, TextInformationFrame, UniqueFileIdentifierFrame,
	VolumeAdjustmentFrame,
};

// Every prefix of every input is handed to every body parser
const INPUTS: &[&[u8]] = &[
	&[1, 0, 0, 0],
	&[1, 0xFF],
	&[1, 0xFE, 0xFF, 0xD8],
	&[0x03, 0xC3],
	&[0, 0xFF, 0x40],
	&[0x03, 0x00, 0x00, 0x00, 0x00, 0x00],
	&[b'a', 0, 0x02, 0x80, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
	&[0x57, 0x19, 0x19, 0x00, 0x04, 0x01, 0x36, 0x00, 0x33, 0x06, 0x06, 0x06, 0x19, 0x81],
];

fn parse_all(data: &[u8]) {
	let mode = ParsingMode::BestAttempt;
	for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
		let _ = TextInformationFrame::parse(&mut &data[..], version, mode);
		let _ = NumberPairFrame::parse(&mut &data[..], version, mode);
		let _ = ExtendedTextFrame::parse(&mut &data[..], version, mode);
		let _ = ExtendedUrlFrame::parse(&mut &data[..], version, mode);
		let _ = CommentFrame::parse(&mut &data[..], version, mode);
	}

	let _ = UniqueFileIdentifierFrame::parse(&mut &data[..], mode);
	let _ = RelativeVolumeAdjustmentFrame::parse(&mut &data[..], mode);
	let _ = VolumeAdjustmentFrame::parse(&mut &data[..]);
}

#[test_log::test]
fn malformed_bodies() {
	no_panic(|| {
		for input in INPUTS {
			for len in 0..=input.len() {
				parse_all(&input[..len]);
			}
		}
	});
}

#[test_log::test]
fn rva2_peak_overflow() {
	// 255 bits representing the peak, but no data to back it
	no_panic(|| {
		let data = b"\x00\x01\x00\x08\xFF";
		let _ = RelativeVolumeAdjustmentFrame::parse(&mut &data[..], ParsingMode::Strict);
	});
}

#[test_log::test]
fn rvad_bit_counts() {
	no_panic(|| {
		for bits in [0_u8, 1, 7, 9, 63, 64, 65, 255] {
			let mut data = vec![0xFF, bits];
			data.extend([0xFF; 32]);
			let _ = VolumeAdjustmentFrame::parse(&mut &data[..]);
		}
	});
}
