use crate::config::ParsingMode;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::items::{
	BinaryFrame, CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, NumberPairFrame,
	RelativeVolumeAdjustmentFrame, TextInformationFrame, UniqueFileIdentifierFrame, UrlLinkFrame,
	VolumeAdjustmentFrame,
};
use crate::id3v2::util::catalog::{self, FrameKind};
use crate::id3v2::{FrameBody, FrameId, Id3v2Version};
use crate::macros::{err, parse_mode_choice};
use crate::util::text::TextEncoding;

use std::io::Read;

#[rustfmt::skip]
pub(super) fn parse_content<R: Read>(
	reader: &mut R,
	id: &FrameId,
	version: Id3v2Version,
	parse_mode: ParsingMode,
) -> Result<FrameBody> {
	log::trace!("Parsing frame content for ID: {}", id);

	Ok(match catalog::body_kind(id.as_str(), version) {
		FrameKind::Text => TextInformationFrame::parse(reader, version, parse_mode)?.into(),
		FrameKind::NumberPair => NumberPairFrame::parse(reader, version, parse_mode)?.into(),
		FrameKind::Url => UrlLinkFrame::parse(reader)?.into(),
		FrameKind::UserText => ExtendedTextFrame::parse(reader, version, parse_mode)?.into(),
		FrameKind::UserUrl => ExtendedUrlFrame::parse(reader, version, parse_mode)?.into(),
		FrameKind::Comment => CommentFrame::parse(reader, version, parse_mode)?.into(),
		FrameKind::UniqueFileIdentifier => UniqueFileIdentifierFrame::parse(reader, parse_mode)?.into(),
		FrameKind::RelativeVolumeAdjustment => RelativeVolumeAdjustmentFrame::parse(reader, parse_mode)?.into(),
		FrameKind::VolumeAdjustment => VolumeAdjustmentFrame::parse(reader)?.into(),
		// APIC, GEOB, SYLT, and any unknown frames
		FrameKind::Binary => BinaryFrame::parse(reader)?.into(),
	})
}

pub(crate) fn verify_encoding(
	encoding: u8,
	version: Id3v2Version,
	parse_mode: ParsingMode,
) -> Result<TextEncoding> {
	if version == Id3v2Version::V2 && (encoding != 0 && encoding != 1) {
		return Err(Id3v2Error::new(Id3v2ErrorKind::V2InvalidTextEncoding).into());
	}

	let Some(encoding) = TextEncoding::from_u8(encoding) else {
		err!(TextDecode("Found invalid encoding"));
	};

	if !encoding.is_valid_in(version) {
		parse_mode_choice!(
			parse_mode,
			STRICT: return Err(Id3v2Error::new(Id3v2ErrorKind::V3InvalidTextEncoding).into()),
			DEFAULT: log::warn!("Found {encoding:?} text in an {version} frame, reading as-is")
		);
	}

	Ok(encoding)
}
