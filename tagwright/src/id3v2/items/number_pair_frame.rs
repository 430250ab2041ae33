use crate::config::{ParsingMode, WriteOptions};
use crate::error::Result;
use crate::id3v2::Id3v2Version;
use crate::id3v2::frame::content::verify_encoding;
use crate::id3v2::util::pairs::{format_number_pair, split_number_pair};
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` numeric pair frame, such as "TRCK" (track number/total) and "TPOS" (disc number/total)
///
/// The frame is stored as text in the form `N` or `N/D`. Either side may be missing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberPairFrame {
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The number, e.g. the track number
	pub numerator: Option<u32>,
	/// The total, e.g. the number of tracks
	pub denominator: Option<u32>,
	pub(crate) numerator_width: usize,
}

impl NumberPairFrame {
	/// Create a new [`NumberPairFrame`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::{NumberPairFrame, TextEncoding};
	///
	/// let track = NumberPairFrame::new(TextEncoding::Latin1, Some(3), Some(12));
	/// assert_eq!(track.numerator_text().as_deref(), Some("3"));
	/// assert_eq!(track.denominator_text().as_deref(), Some("12"));
	/// ```
	pub fn new(encoding: TextEncoding, numerator: Option<u32>, denominator: Option<u32>) -> Self {
		Self {
			encoding,
			numerator,
			denominator,
			numerator_width: 0,
		}
	}

	/// Read a [`NumberPairFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// A side of the pair that isn't a valid number is treated as missing.
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
		let text = decode_text(reader, TextDecodeOptions::new().encoding(encoding))?.content;

		let (numerator, denominator) = split_number_pair(&text);
		Ok(Self {
			encoding,
			numerator: numerator.map(|n| n.value),
			denominator,
			numerator_width: numerator.map_or(0, |n| n.width),
		})
	}

	/// Convert a [`NumberPairFrame`] to a byte vec
	///
	/// With [`WriteOptions::pad_numbers()`], the numerator is zero padded to the width of the
	/// denominator.
	///
	/// # Errors
	///
	/// * [`WriteOptions::lossy_text_encoding()`] is disabled and the content cannot be encoded in the specified [`TextEncoding`].
	pub fn as_bytes(&self, version: Id3v2Version, write_options: WriteOptions) -> Result<Vec<u8>> {
		let encoding = self.encoding.for_version(version);
		let text = format_number_pair(
			self.numerator,
			self.denominator,
			self.numerator_width,
			write_options.pad_numbers,
		);

		let mut content = encoding.encode(&text, false, write_options.lossy_text_encoding)?;
		content.insert(0, encoding as u8);
		Ok(content)
	}

	/// The numerator as it is displayed, keeping any zero padding it was read with
	pub fn numerator_text(&self) -> Option<String> {
		let width = self.numerator_width;
		self.numerator.map(|n| format!("{n:0width$}"))
	}

	/// The denominator as it is displayed
	pub fn denominator_text(&self) -> Option<String> {
		self.denominator.map(|d| d.to_string())
	}

	pub(crate) fn set_numerator(&mut self, numerator: Option<u32>, width: usize) {
		self.numerator = numerator;
		self.numerator_width = width;
	}
}
