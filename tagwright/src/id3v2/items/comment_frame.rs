use super::split_values;
use crate::config::{ParsingMode, WriteOptions};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::Id3v2Version;
use crate::id3v2::frame::content::verify_encoding;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` comment or unsynchronized lyrics frame ("COMM", "USLT")
///
/// Similar to `TXXX` and `WXXX` frames, comments are told apart by their descriptions, and their
/// languages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommentFrame {
	/// The encoding of the description and comment text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl CommentFrame {
	/// The language used for comments created through a [`FieldKey`](crate::field::FieldKey)
	pub const DEFAULT_LANGUAGE: [u8; 3] = *b"eng";

	/// Create a new [`CommentFrame`]
	pub fn new(
		encoding: TextEncoding,
		language: [u8; 3],
		description: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			encoding,
			language,
			description: description.into(),
			content: content.into(),
		}
	}

	/// Read a [`CommentFrame`] from a slice
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

		let mut language = [0; 3];
		reader.read_exact(&mut language)?;

		let description = decode_text(
			reader,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;
		let content = decode_text(
			reader,
			TextDecodeOptions::new()
				.encoding(encoding)
				.bom(description.bom),
		)?;

		Ok(Self {
			encoding,
			language,
			description: description.content,
			content: content.content,
		})
	}

	/// Convert a [`CommentFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	///
	/// # Errors
	///
	/// * `language` contains invalid characters (Only `'a'..='z'` and `'A'..='Z'` allowed)
	/// * [`WriteOptions::lossy_text_encoding()`] is disabled and the content cannot be encoded in the specified [`TextEncoding`].
	pub fn as_bytes(&self, version: Id3v2Version, write_options: WriteOptions) -> Result<Vec<u8>> {
		if self.language.iter().any(|c| !c.is_ascii_alphabetic()) {
			return Err(Id3v2Error::new(Id3v2ErrorKind::InvalidLanguage(self.language)).into());
		}

		let encoding = self.encoding.for_version(version);

		let mut bytes = vec![encoding as u8];
		bytes.extend(self.language);
		bytes.extend(encoding.encode(
			&self.description,
			true,
			write_options.lossy_text_encoding,
		)?);
		bytes.extend(encoding.encode(&self.content, false, write_options.lossy_text_encoding)?);

		Ok(bytes)
	}

	/// Returns an iterator over the values in the frame
	pub fn values(&self) -> impl Iterator<Item = &str> {
		split_values(&self.content)
	}
}
