use crate::config::WriteOptions;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::util::catalog::{self, FrameKind};
use crate::id3v2::util::synchsafe::{SynchsafeInteger, unsynchronise};
use crate::id3v2::{Frame, Id3v2Version};
use crate::macros::err;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

pub(in crate::id3v2) fn create_items<'a, W>(
	writer: &mut W,
	frames: impl Iterator<Item = &'a Frame>,
	version: Id3v2Version,
	write_options: WriteOptions,
	force_unsync: bool,
) -> Result<()>
where
	W: Write,
{
	for frame in frames {
		write_frame(writer, frame, version, write_options, force_unsync)?;
	}

	Ok(())
}

impl Frame {
	/// Encode the frame, including its header, for a tag of `version`
	///
	/// # Errors
	///
	/// * The frame ID is not valid in `version`
	/// * The body kind is not allowed for the frame ID, see [`catalog::body_kind`]
	/// * The body cannot be encoded
	/// * The frame is too large
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	/// use tagwright::id3v2::{Frame, FrameId, Id3v2Version, TextEncoding, TextInformationFrame};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let title = Frame::new(
	/// 	FrameId::new("TIT2")?,
	/// 	TextInformationFrame::new(TextEncoding::Latin1, "Foo"),
	/// );
	///
	/// let bytes = title.encode(Id3v2Version::V3, WriteOptions::new())?;
	/// assert_eq!(bytes, b"TIT2\x00\x00\x00\x04\x00\x00\x00Foo");
	/// # Ok(()) }
	/// ```
	pub fn encode(&self, version: Id3v2Version, write_options: WriteOptions) -> Result<Vec<u8>> {
		let mut bytes = Vec::new();
		write_frame(&mut bytes, self, version, write_options, false)?;
		Ok(bytes)
	}
}

pub(crate) fn verify_frame(frame: &Frame, version: Id3v2Version) -> Result<()> {
	if !frame.id().is_valid_in(version) {
		return Err(Id3v2Error::new(Id3v2ErrorKind::FrameVersionMismatch(
			frame.id().clone(),
			version,
		))
		.into());
	}

	match (catalog::body_kind(frame.id_str(), version), frame.body.kind()) {
		(_, FrameKind::Binary) => Ok(()),
		(expected, actual) if expected == actual => Ok(()),
		_ => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrame(
			frame.id_str().to_string(),
			frame.body.name(),
		))
		.into()),
	}
}

fn write_frame<W>(
	writer: &mut W,
	frame: &Frame,
	version: Id3v2Version,
	write_options: WriteOptions,
	force_unsync: bool,
) -> Result<()>
where
	W: Write,
{
	verify_frame(frame, version)?;

	let mut flags = frame.flags;
	let value = frame.body.as_bytes(version, write_options)?;

	if let Some(method_symbol) = flags.encryption {
		if !(0x80..=0xF0).contains(&method_symbol) {
			return Err(
				Id3v2Error::new(Id3v2ErrorKind::InvalidEncryptionMethodSymbol(method_symbol))
					.into(),
			);
		}
	}

	let name = frame.id_str();
	match version {
		Id3v2Version::V2 => {
			let len = value.len() as u32;
			if len > 0xFF_FFFF {
				err!(TooMuchData);
			}

			writer.write_all(name.as_bytes())?;
			writer.write_u24::<BigEndian>(len)?;
			writer.write_all(&value)?;
		},
		Id3v2Version::V3 => {
			let mut additional_data = Vec::new();
			if flags.compression {
				let Some(decompressed_size) = flags.data_length_indicator else {
					return Err(Id3v2Error::new(Id3v2ErrorKind::MissingDataLengthIndicator).into());
				};

				additional_data.write_u32::<BigEndian>(decompressed_size)?;
			}

			if let Some(method_symbol) = flags.encryption {
				additional_data.push(method_symbol);
			}

			if let Some(group) = flags.grouping_identity {
				additional_data.push(group);
			}

			let len = (additional_data.len() + value.len()) as u32;
			write_frame_header(writer, name, len, flags.as_id3v23_bytes(), false)?;
			writer.write_all(&additional_data)?;
			writer.write_all(&value)?;
		},
		Id3v2Version::V4 => {
			flags.unsynchronisation |= force_unsync;

			let mut additional_data = Vec::new();
			if let Some(group) = flags.grouping_identity {
				additional_data.push(group);
			}

			if let Some(method_symbol) = flags.encryption {
				additional_data.push(method_symbol);
			}

			if flags.compression || flags.data_length_indicator.is_some() {
				// Compressed and encrypted bodies are stored as-is, so we can't know their real size
				let data_length = if flags.compression || flags.encryption.is_some() {
					match flags.data_length_indicator {
						Some(len) => len,
						None => {
							return Err(Id3v2Error::new(
								Id3v2ErrorKind::MissingDataLengthIndicator,
							)
							.into());
						},
					}
				} else {
					value.len() as u32
				};

				flags.data_length_indicator = Some(data_length);
				additional_data.write_u32::<BigEndian>(data_length.synch()?)?;
			}

			let value = if flags.unsynchronisation {
				unsynchronise(&value)
			} else {
				value
			};

			let len = (additional_data.len() + value.len()) as u32;
			write_frame_header(writer, name, len, flags.as_id3v24_bytes(), true)?;
			writer.write_all(&additional_data)?;
			writer.write_all(&value)?;
		},
	}

	Ok(())
}

fn write_frame_header<W>(
	writer: &mut W,
	name: &str,
	mut len: u32,
	flags: u16,
	synchsafe: bool,
) -> Result<()>
where
	W: Write,
{
	writer.write_all(name.as_bytes())?;
	if synchsafe {
		len = len.synch()?;
	}

	writer.write_u32::<BigEndian>(len)?;
	writer.write_u16::<BigEndian>(flags)?;

	Ok(())
}
