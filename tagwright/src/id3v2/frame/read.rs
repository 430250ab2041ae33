use super::Frame;
use super::header::parse::RawFrameHeader;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Id3v2Error, Id3v2ErrorKind, InvalidFrameBody, Result, TagwrightError};
use crate::id3v2::frame::content::parse_content;
use crate::id3v2::header::Id3v2Version;
use crate::id3v2::util::synchsafe::{SynchsafeInteger, resynchronise};
use crate::id3v2::{BinaryFrame, FrameFlags};

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) enum ParsedFrame {
	Next(Frame),
	/// The header was valid, but the body could not be decoded
	///
	/// The frame holds the raw body as a [`BinaryFrame`].
	Invalid(Frame, InvalidFrameBody),
	Skip(TagwrightError),
	Eof,
}

impl ParsedFrame {
	/// Read the next frame from `reader`, advancing it past the frame
	///
	/// `offset` is the position of `reader` relative to the start of the tag, used for
	/// error reporting.
	pub(crate) fn read(
		reader: &mut &[u8],
		offset: usize,
		version: Id3v2Version,
		parse_options: ParseOptions,
		force_unsync: bool,
	) -> Self {
		let Some(header) = RawFrameHeader::read(reader, version) else {
			return Self::Eof;
		};

		let size = header.size;
		let id = match header.frame_id(parse_options) {
			Ok(id) => id,
			Err(err) => {
				log::warn!("Failed to read frame header, skipping: {}", err);

				// The size doesn't depend on the ID, so we can still skip past the frame
				skip_frame(reader, size);
				return Self::Skip(err);
			},
		};
		let mut flags = header.frame_flags();

		if size == 0 {
			log::debug!("Encountered a zero length frame ({}), skipping", id);
			return Self::Skip(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		}

		if size as usize > reader.len() {
			log::warn!(
				"Frame {} claims to be {} bytes, only {} remain",
				id,
				size,
				reader.len()
			);

			*reader = &[];
			return Self::Skip(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		}

		let data = *reader;
		let (mut content, rest) = data.split_at(size as usize);
		*reader = rest;

		if let Err(err) = read_additional_data(&mut content, &mut flags, version) {
			return Self::Skip(err);
		}

		// Frames must have at least 1 byte, *after* all of the additional data flags can provide
		if content.is_empty() {
			return Self::Skip(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		}

		let body_offset = offset + version.frame_header_len() + (size as usize - content.len());

		// Only ID3v2.4 frames are unsynchronised individually, ID3v2.2 and ID3v2.3 tags are
		// resynchronised as a whole before we get here
		if version == Id3v2Version::V4 {
			flags.unsynchronisation |= force_unsync;
		}

		let raw = if flags.unsynchronisation {
			resynchronise(content)
		} else {
			content.to_vec()
		};

		// Nothing further we can do with compressed or encrypted frames
		if flags.compression || flags.encryption.is_some() {
			log::debug!("Keeping compressed/encrypted frame {} as binary", id);
			return Self::Next(Frame {
				id,
				flags,
				body: BinaryFrame::new(raw).into(),
			});
		}

		match parse_content(&mut &raw[..], &id, version, parse_options.parsing_mode) {
			Ok(body) => Self::Next(Frame { id, flags, body }),
			Err(err) => {
				log::warn!("Failed to decode the body of frame {}: {}", id, err);

				let error = InvalidFrameBody::new(id.clone(), body_offset, err);
				Self::Invalid(
					Frame {
						id,
						flags,
						body: BinaryFrame::new(raw).into(),
					},
					error,
				)
			},
		}
	}
}

// The extra bytes some flags add to the frame header, in the order they are stored in
fn read_additional_data(
	content: &mut &[u8],
	flags: &mut FrameFlags,
	version: Id3v2Version,
) -> Result<()> {
	let has_data_length_indicator = flags.data_length_indicator.is_some() || flags.compression;

	let mut required = 0;
	if flags.grouping_identity.is_some() {
		required += 1;
	}
	if flags.encryption.is_some() {
		required += 1;
	}
	if has_data_length_indicator {
		required += 4;
	}

	if content.len() < required {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	}

	match version {
		Id3v2Version::V4 => {
			if let Some(group) = flags.grouping_identity.as_mut() {
				log::trace!("Reading group identifier");
				*group = content.read_u8()?;
			}

			if let Some(enc) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*enc = content.read_u8()?;
			}

			// Some writers include a data length indicator without setting its flag
			if has_data_length_indicator {
				log::trace!("Reading data length indicator");
				flags.data_length_indicator = Some(content.read_u32::<BigEndian>()?.unsynch());
			}
		},
		Id3v2Version::V3 => {
			if flags.compression {
				log::trace!("Reading decompressed size");
				flags.data_length_indicator = Some(content.read_u32::<BigEndian>()?);
			}

			if let Some(enc) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*enc = content.read_u8()?;
			}

			if let Some(group) = flags.grouping_identity.as_mut() {
				log::trace!("Reading group identifier");
				*group = content.read_u8()?;
			}
		},
		Id3v2Version::V2 => {},
	}

	Ok(())
}

// Skip up to `size` bytes, stopping at the end of the reader
fn skip_frame(reader: &mut &[u8], size: u32) {
	log::trace!("Skipping frame of size {}", size);

	let data = *reader;
	let skip = data.len().min(size as usize);
	*reader = &data[skip..];
}

impl Frame {
	/// Decode a single frame from the start of `bytes`
	///
	/// On success, this returns the frame and the number of bytes it occupied, including its
	/// header. `None` is returned when `bytes` is too short to hold a frame header, or starts
	/// with padding.
	///
	/// `bytes` is expected to already be resynchronised for `ID3v2.2` and `ID3v2.3` tags with
	/// [`Id3v2TagFlags::unsynchronisation`](crate::id3v2::Id3v2TagFlags::unsynchronisation) set.
	///
	/// # Errors
	///
	/// * The frame header is invalid, see [`ErrorKind::FrameDecode`](crate::error::ErrorKind::FrameDecode)
	/// * The frame body is invalid, see [`ErrorKind::InvalidFrameBody`](crate::error::ErrorKind::InvalidFrameBody).
	///   In [`ParsingMode::BestAttempt`], the body is instead kept as a [`BinaryFrame`].
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::ParseOptions;
	/// use tagwright::id3v2::{Frame, FrameBody, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let bytes = [b'T', b'T', b'2', 0, 0, 4, 0, b'F', b'o', b'o'];
	///
	/// let (frame, len) = Frame::decode(&bytes, Id3v2Version::V2, ParseOptions::new())?.unwrap();
	/// assert_eq!(frame.id_str(), "TT2");
	/// assert_eq!(len, bytes.len());
	///
	/// let FrameBody::Text(title) = &frame.body else {
	/// 	unreachable!()
	/// };
	/// assert_eq!(title.value, "Foo");
	/// # Ok(()) }
	/// ```
	pub fn decode(
		bytes: &[u8],
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Option<(Frame, usize)>> {
		let mut reader = bytes;
		match ParsedFrame::read(&mut reader, 0, version, parse_options, false) {
			ParsedFrame::Next(frame) => Ok(Some((frame, bytes.len() - reader.len()))),
			ParsedFrame::Invalid(frame, _) if parse_options.parsing_mode == ParsingMode::BestAttempt => {
				Ok(Some((frame, bytes.len() - reader.len())))
			},
			ParsedFrame::Invalid(_, err) => Err(err.into()),
			ParsedFrame::Skip(err) => Err(err),
			ParsedFrame::Eof => Ok(None),
		}
	}
}
