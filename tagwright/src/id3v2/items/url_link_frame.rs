use super::split_values;
use crate::config::WriteOptions;
use crate::error::Result;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

/// An `ID3v2` URL frame
///
/// The URL is always Latin-1 encoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlLinkFrame {
	/// The URL
	pub url: String,
}

impl UrlLinkFrame {
	/// Create a new [`UrlLinkFrame`]
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}

	/// Read a [`UrlLinkFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Unable to decode the text as Latin-1
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let url = decode_text(
			reader,
			TextDecodeOptions::new().encoding(TextEncoding::Latin1),
		)?
		.content;

		Ok(Self { url })
	}

	/// Convert a [`UrlLinkFrame`] to a byte vec
	///
	/// # Errors
	///
	/// * [`WriteOptions::lossy_text_encoding()`] is disabled and the URL isn't valid Latin-1
	pub fn as_bytes(&self, write_options: WriteOptions) -> Result<Vec<u8>> {
		Ok(TextEncoding::Latin1.encode(&self.url, false, write_options.lossy_text_encoding)?)
	}

	/// Returns an iterator over the URLs in the frame
	pub fn values(&self) -> impl Iterator<Item = &str> {
		split_values(&self.url)
	}
}
