use crate::config::ParsingMode;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::macros::parse_mode_choice;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

/// An `ID3v2` unique file identifier frame (UFID).
///
/// Frames are told apart by their owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniqueFileIdentifierFrame {
	/// The non-empty owner of the identifier.
	pub owner: String,
	/// The binary payload with up to 64 bytes of data.
	pub identifier: Vec<u8>,
}

impl UniqueFileIdentifierFrame {
	/// The owner used for MusicBrainz recording IDs
	pub const MUSICBRAINZ_OWNER: &'static str = "http://musicbrainz.org";

	/// Create a new [`UniqueFileIdentifierFrame`]
	pub fn new(owner: impl Into<String>, identifier: Vec<u8>) -> Self {
		Self {
			owner: owner.into(),
			identifier,
		}
	}

	/// Decode the frame contents from bytes
	///
	/// # Errors
	///
	/// Owner is missing (in [`ParsingMode::Strict`]) or improperly encoded
	pub fn parse<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read,
	{
		let owner = decode_text(
			reader,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		if owner.is_empty() {
			parse_mode_choice!(
				parse_mode,
				STRICT: return Err(Id3v2Error::new(Id3v2ErrorKind::MissingUfidOwner).into()),
				DEFAULT: log::warn!("UFID frame is missing an owner")
			);
		}

		let mut identifier = Vec::new();
		reader.read_to_end(&mut identifier)?;

		Ok(Self { owner, identifier })
	}

	/// Encode the frame contents as bytes
	///
	/// # Errors
	///
	/// The owner isn't valid Latin-1
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		let mut content = Vec::with_capacity(self.owner.len() + 1 + self.identifier.len());
		content.extend(TextEncoding::Latin1.encode(&self.owner, true, false)?);
		content.extend_from_slice(&self.identifier);

		Ok(content)
	}

	/// The identifier as text
	///
	/// Identifiers are binary, though in practice they are nearly always ASCII.
	pub fn identifier_text(&self) -> String {
		String::from_utf8_lossy(&self.identifier).into_owned()
	}
}
