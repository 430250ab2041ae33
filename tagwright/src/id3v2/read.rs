use super::frame::read::ParsedFrame;
use super::header::{Id3v2Header, Id3v2Version};
use super::tag::Id3v2Tag;
use super::util::synchsafe::resynchronise;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Diagnostic, Diagnostics, Id3v2Error, Id3v2ErrorKind, Result};

use std::borrow::Cow;

pub(crate) fn parse_id3v2(
	bytes: &[u8],
	parse_options: ParseOptions,
) -> Result<(Id3v2Tag, Diagnostics)> {
	if !bytes.starts_with(b"ID3") {
		return Err(Id3v2Error::new(Id3v2ErrorKind::MissingSignature).into());
	}

	let mut reader = bytes;
	let header = Id3v2Header::parse(&mut reader)?;

	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {}",
		header.size,
		header.version
	);

	let Some(body) = bytes.get(Id3v2Header::LEN..Id3v2Header::LEN + header.size as usize) else {
		log::warn!(
			"Tag claims to be {} bytes, only {} remain",
			header.size,
			bytes.len().saturating_sub(Id3v2Header::LEN)
		);
		return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedTag).into());
	};

	// ID3v2.4 unsynchronises each frame separately, see `ParsedFrame::read`
	let body = if header.flags.unsynchronisation && header.version != Id3v2Version::V4 {
		log::trace!("Resynchronising the tag body");
		Cow::Owned(resynchronise(body))
	} else {
		Cow::Borrowed(body)
	};

	let mut tag = Id3v2Tag::new(header.version);
	tag.set_flags(header.flags);

	let diagnostics = read_all_frames_into_tag(&mut tag, &body, header, parse_options)?;
	Ok((tag, diagnostics))
}

fn read_all_frames_into_tag(
	tag: &mut Id3v2Tag,
	body: &[u8],
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Diagnostics> {
	let mut diagnostics = Diagnostics::default();

	// Skip the extended header
	let start = (header.extended_size as usize).min(body.len());
	let mut reader = &body[start..];

	let force_unsync = header.flags.unsynchronisation && header.version == Id3v2Version::V4;
	let parsing_mode = parse_options.parsing_mode;

	loop {
		let offset = Id3v2Header::LEN + body.len() - reader.len();
		match ParsedFrame::read(
			&mut reader,
			offset,
			header.version,
			parse_options,
			force_unsync,
		) {
			ParsedFrame::Next(frame) => tag.frames.push(frame),
			ParsedFrame::Invalid(frame, err) => match parsing_mode {
				ParsingMode::Strict => return Err(err.into()),
				ParsingMode::BestAttempt => {
					log::warn!("Keeping frame \"{}\" as binary: {err}", frame.id());
					tag.frames.push(frame);
					diagnostics.push(Diagnostic::RetainedFrame(err));
				},
				ParsingMode::Relaxed => {
					log::warn!("Discarding frame \"{}\": {err}", frame.id());
					diagnostics.push(Diagnostic::SkippedFrame {
						offset,
						error: err.into(),
					});
				},
			},
			// No frame content found or ignored due to errors, but we can expect more frames
			ParsedFrame::Skip(error) => {
				if parsing_mode == ParsingMode::Strict {
					return Err(error);
				}

				diagnostics.push(Diagnostic::SkippedFrame { offset, error });
			},
			// No frame content found, and we can expect there are no more frames
			ParsedFrame::Eof => break,
		}
	}

	Ok(diagnostics)
}
