use super::{VALUE_SEPARATOR, split_values};
use crate::config::{ParsingMode, WriteOptions};
use crate::error::Result;
use crate::id3v2::Id3v2Version;
use crate::id3v2::frame::content::verify_encoding;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` text frame
///
/// Multiple values are separated by a null character (`'\0'`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	pub value: String,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	pub fn new(encoding: TextEncoding, value: impl Into<String>) -> Self {
		Self {
			encoding,
			value: value.into(),
		}
	}

	/// Read a [`TextInformationFrame`] from a slice
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
		let value = decode_text(reader, TextDecodeOptions::new().encoding(encoding))?.content;

		Ok(TextInformationFrame { encoding, value })
	}

	/// Convert a [`TextInformationFrame`] to a byte vec
	///
	/// # Errors
	///
	/// * [`WriteOptions::lossy_text_encoding()`] is disabled and the content cannot be encoded in the specified [`TextEncoding`].
	pub fn as_bytes(&self, version: Id3v2Version, write_options: WriteOptions) -> Result<Vec<u8>> {
		let encoding = self.encoding.for_version(version);

		let mut content = encoding.encode(&self.value, false, write_options.lossy_text_encoding)?;
		content.insert(0, encoding as u8);
		Ok(content)
	}

	/// Returns an iterator over the values in the frame
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::{TextEncoding, TextInformationFrame};
	///
	/// let frame = TextInformationFrame::new(TextEncoding::UTF8, "Foo\0Bar");
	/// assert_eq!(frame.values().collect::<Vec<_>>(), ["Foo", "Bar"]);
	/// ```
	pub fn values(&self) -> impl Iterator<Item = &str> {
		split_values(&self.value)
	}

	/// Append a value, widening the encoding if necessary
	pub(crate) fn push_value(&mut self, value: &str, version: Id3v2Version) {
		self.encoding = self.encoding.accommodate(version, value);

		if !self.value.is_empty() {
			self.value.push(VALUE_SEPARATOR);
		}

		self.value.push_str(value);
	}
}
