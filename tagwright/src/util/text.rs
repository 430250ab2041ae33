use crate::error::{ErrorKind, Result, TagwrightError};
use crate::id3v2::Id3v2Version;
use crate::macros::err;

use std::io::Read;

/// Errors that can occur while encoding text
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextEncodingError {
	encoding: TextEncoding,
	valid_up_to: usize,
}

impl TextEncodingError {
	/// The target text encoding
	pub fn encoding(&self) -> TextEncoding {
		self.encoding
	}

	/// The character index in the provided string up to which the encoding was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl core::fmt::Display for TextEncodingError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(
			f,
			"invalid {} sequence from index {}",
			self.encoding.name(),
			self.valid_up_to
		)
	}
}

impl core::error::Error for TextEncodingError {}

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(3), Some(TextEncoding::UTF8));
	/// assert_eq!(TextEncoding::from_u8(4), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	fn name(self) -> &'static str {
		match self {
			TextEncoding::Latin1 => "Latin-1",
			TextEncoding::UTF16 => "UTF-16",
			TextEncoding::UTF8 => "UTF-8",
			TextEncoding::UTF16BE => "UTF-16 BE",
		}
	}

	/// Whether this encoding can be written in a tag of `version`
	///
	/// ID3v2.4 introduced [`TextEncoding::UTF16BE`] and [`TextEncoding::UTF8`].
	pub fn is_valid_in(self, version: Id3v2Version) -> bool {
		match self {
			TextEncoding::Latin1 | TextEncoding::UTF16 => true,
			TextEncoding::UTF16BE | TextEncoding::UTF8 => version == Id3v2Version::V4,
		}
	}

	pub(crate) fn verify_latin1(text: &str) -> bool {
		text.chars().all(|c| c as u32 <= 255)
	}

	/// The encoding used for newly created frames holding `text`
	pub(crate) fn preferred(version: Id3v2Version, text: &str) -> Self {
		match version {
			Id3v2Version::V4 => TextEncoding::UTF8,
			_ if Self::verify_latin1(text) => TextEncoding::Latin1,
			_ => TextEncoding::UTF16,
		}
	}

	/// Widen the encoding if it is unable to hold `text`
	pub(crate) fn accommodate(self, version: Id3v2Version, text: &str) -> Self {
		if self == TextEncoding::Latin1 && !Self::verify_latin1(text) {
			return match version {
				Id3v2Version::V4 => TextEncoding::UTF8,
				_ => TextEncoding::UTF16,
			};
		}

		self
	}

	/// The encoding to actually write when targeting `version`
	///
	/// ID3v2.4 introduced two new text encodings.
	///
	/// When writing ID3v2.2 and ID3v2.3, we just substitute with UTF-16.
	pub(crate) fn for_version(self, version: Id3v2Version) -> Self {
		if self.is_valid_in(version) {
			return self;
		}

		log::warn!(
			"Text encoding {:?} is not supported in {}, substituting with UTF-16",
			self,
			version
		);
		Self::UTF16
	}

	/// The width of a string terminator in this encoding
	fn null_width(self) -> usize {
		match self {
			TextEncoding::Latin1 | TextEncoding::UTF8 => 1,
			TextEncoding::UTF16 | TextEncoding::UTF16BE => 2,
		}
	}

	pub(crate) fn encode(
		self,
		text: &str,
		terminated: bool,
		lossy: bool,
	) -> std::result::Result<Vec<u8>, TextEncodingError> {
		let mut out = match self {
			TextEncoding::Latin1 => {
				let mut out = Vec::with_capacity(text.len() + 1);
				for (index, c) in text.chars().enumerate() {
					match u8::try_from(c) {
						Ok(byte) => out.push(byte),
						Err(_) if lossy => out.push(b'?'),
						Err(_) => {
							return Err(TextEncodingError {
								encoding: self,
								valid_up_to: index,
							});
						},
					}
				}

				out
			},
			TextEncoding::UTF16 => utf16_encode(text, true, u16::to_le_bytes),
			TextEncoding::UTF16BE => utf16_encode(text, false, u16::to_be_bytes),
			TextEncoding::UTF8 => text.as_bytes().to_vec(),
		};

		if terminated {
			out.resize(out.len() + self.null_width(), 0);
		}

		Ok(out)
	}
}

fn utf16_encode(text: &str, bom: bool, to_bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
	bom.then_some(0xFEFF)
		.into_iter()
		.chain(text.encode_utf16())
		.flat_map(to_bytes)
		.collect()
}

/// A decoded string
///
/// `bom` is only set for [`TextEncoding::UTF16`], and is needed to decode any strings that follow
/// in the same frame.
#[derive(Eq, PartialEq, Debug, Default)]
pub(crate) struct DecodeTextResult {
	pub(crate) content: String,
	pub(crate) bytes_read: usize,
	pub(crate) bom: [u8; 2],
}

/// Specify how to decode the provided text
///
/// Defaults to unterminated UTF-8 with no fallback byte order mark.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TextDecodeOptions {
	pub encoding: TextEncoding,
	pub terminated: bool,
	pub bom: [u8; 2],
}

impl TextDecodeOptions {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn encoding(mut self, encoding: TextEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub(crate) fn terminated(mut self, terminated: bool) -> Self {
		self.terminated = terminated;
		self
	}

	/// The byte order to assume when a UTF-16 string has no BOM of its own
	pub(crate) fn bom(mut self, bom: [u8; 2]) -> Self {
		self.bom = bom;
		self
	}
}

impl Default for TextDecodeOptions {
	fn default() -> Self {
		Self {
			encoding: TextEncoding::UTF8,
			terminated: false,
			bom: [0, 0],
		}
	}
}

/// Decode a single string from `reader`
///
/// Unterminated strings consume the rest of the reader. Trailing nulls are never part of the
/// content.
pub(crate) fn decode_text<R>(reader: &mut R, options: TextDecodeOptions) -> Result<DecodeTextResult>
where
	R: Read,
{
	let (raw, bytes_read) = if options.terminated {
		let width = options.encoding.null_width();
		let (raw, found_terminator) = take_terminated(reader, width);
		let consumed = raw.len() + if found_terminator { width } else { 0 };
		(raw, consumed)
	} else {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		let consumed = raw.len();
		(raw, consumed)
	};

	if raw.is_empty() {
		return Ok(DecodeTextResult {
			bytes_read,
			..DecodeTextResult::default()
		});
	}

	let mut bom = [0, 0];
	let mut content: String = match options.encoding {
		TextEncoding::Latin1 => raw.iter().copied().map(char::from).collect(),
		TextEncoding::UTF8 => String::from_utf8(raw).map_err(|_| {
			TagwrightError::new(ErrorKind::TextDecode("Expected a UTF-8 string"))
		})?,
		TextEncoding::UTF16BE => {
			let units = utf16_units(&raw)?;
			utf16_decode(&units, u16::from_be_bytes)?
		},
		TextEncoding::UTF16 => {
			if raw.len() < 2 {
				err!(TextDecode("UTF-16 string has an invalid length (< 2)"));
			}

			let units = utf16_units(&raw)?;

			// Multiple null separated values can share one buffer. Each may have its own BOM,
			// otherwise it uses the byte order of the value before it. Only the first value of
			// a frame is guaranteed to have a BOM.
			let mut order = options.bom;
			let mut values = Vec::new();
			for (index, value) in units.split(|unit| *unit == [0, 0]).enumerate() {
				let value = match value {
					[unit @ ([0xFE, 0xFF] | [0xFF, 0xFE]), rest @ ..] => {
						order = *unit;
						rest
					},
					[] => value,
					_ if order != [0, 0] => value,
					_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
				};

				if index == 0 {
					bom = order;
				}

				values.push(if order == [0xFE, 0xFF] {
					utf16_decode(value, u16::from_be_bytes)?
				} else {
					utf16_decode(value, u16::from_le_bytes)?
				});
			}

			values.join("\0")
		},
	};

	content.truncate(content.trim_end_matches('\0').len());

	Ok(DecodeTextResult {
		content,
		bytes_read,
		bom,
	})
}

/// Read up to (and including) a null of `width` bytes
///
/// Returns the bytes before the terminator, and whether one was found before the end of the reader.
fn take_terminated<R>(reader: &mut R, width: usize) -> (Vec<u8>, bool)
where
	R: Read,
{
	let mut text = Vec::new();
	let mut buf = [0; 2];
	let unit = &mut buf[..width];

	while reader.read_exact(unit).is_ok() {
		if unit.iter().all(|b| *b == 0) {
			return (text, true);
		}

		text.extend_from_slice(unit);
	}

	(text, false)
}

fn utf16_units(bytes: &[u8]) -> Result<Vec<[u8; 2]>> {
	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	Ok(bytes.chunks_exact(2).map(|unit| [unit[0], unit[1]]).collect())
}

fn utf16_decode(units: &[[u8; 2]], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
	let units = units.iter().copied().map(from_bytes).collect::<Vec<u16>>();

	String::from_utf16(&units)
		.map_err(|_| TagwrightError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}
