use super::split_values;
use crate::config::{ParsingMode, WriteOptions};
use crate::error::Result;
use crate::id3v2::Id3v2Version;
use crate::id3v2::frame::content::verify_encoding;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::ReadBytesExt;

/// An extended `ID3v2` URL frame
///
/// This is used in the `WXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`](crate::id3v2::FrameId)s.
/// This means for each `ExtendedUrlFrame` in the tag, the description
/// must be unique.
///
/// The encoding only applies to the description, the URL itself is always Latin-1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedUrlFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl ExtendedUrlFrame {
	/// Create a new [`ExtendedUrlFrame`]
	pub fn new(
		encoding: TextEncoding,
		description: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			encoding,
			description: description.into(),
			content: content.into(),
		}
	}

	/// Read an [`ExtendedUrlFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Unable to decode the text
	/// * The encoding is not valid for `version`, see [`ParsingMode`]
	pub fn parse<R>(reader: &mut R, version: Id3v2Version, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read,
	{
		let encoding = verify_encoding(reader.read_u8()?, version, parse_mode)?;

		let description = decode_text(
			reader,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?
		.content;
		let content = decode_text(
			reader,
			TextDecodeOptions::new().encoding(TextEncoding::Latin1),
		)?
		.content;

		Ok(ExtendedUrlFrame {
			encoding,
			description,
			content,
		})
	}

	/// Convert an [`ExtendedUrlFrame`] to a byte vec
	///
	/// # Errors
	///
	/// * [`WriteOptions::lossy_text_encoding()`] is disabled and the content cannot be encoded in the specified [`TextEncoding`].
	pub fn as_bytes(&self, version: Id3v2Version, write_options: WriteOptions) -> Result<Vec<u8>> {
		let encoding = self.encoding.for_version(version);

		let mut bytes = vec![encoding as u8];
		bytes.extend(encoding.encode(
			&self.description,
			true,
			write_options.lossy_text_encoding,
		)?);
		bytes.extend(TextEncoding::Latin1.encode(
			&self.content,
			false,
			write_options.lossy_text_encoding,
		)?);

		Ok(bytes)
	}

	/// Returns an iterator over the URLs in the frame
	pub fn values(&self) -> impl Iterator<Item = &str> {
		split_values(&self.content)
	}
}
