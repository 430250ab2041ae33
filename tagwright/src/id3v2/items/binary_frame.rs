use crate::error::Result;

use std::io::Read;

/// A binary fallback for all unknown `ID3v2` frames
///
/// This is also used for attached pictures, as well as compressed or encrypted frames, whose
/// contents are never interpreted.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct BinaryFrame {
	/// The binary data
	pub data: Vec<u8>,
}

impl BinaryFrame {
	/// Create a new [`BinaryFrame`]
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	/// Read a [`BinaryFrame`]
	///
	/// NOTE: This will exhaust the entire reader
	///
	/// # Errors
	///
	/// * Failure to read from `reader`
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;

		Ok(BinaryFrame { data })
	}

	/// Convert a [`BinaryFrame`] to a byte vec
	pub fn as_bytes(&self) -> Vec<u8> {
		self.data.clone()
	}
}
