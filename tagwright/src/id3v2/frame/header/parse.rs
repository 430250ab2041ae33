use crate::config::ParseOptions;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::util::catalog;
use crate::id3v2::util::synchsafe::SynchsafeInteger;
use crate::id3v2::{FrameFlags, FrameId, Id3v2Version};

use byteorder::{BigEndian, ByteOrder};

/// A frame header as it is stored, before the ID is verified
pub(crate) struct RawFrameHeader {
	version: Id3v2Version,
	id: [u8; 4],
	id_len: usize,
	pub(crate) size: u32,
	flags: u16,
}

impl RawFrameHeader {
	/// Read the next frame header, advancing `reader` past it
	///
	/// Returns `None` once there are no frames left, either at the end of `reader` or at the
	/// start of padding.
	pub(crate) fn read(reader: &mut &[u8], version: Id3v2Version) -> Option<Self> {
		let header_len = version.frame_header_len();
		if reader.len() < header_len || reader[0] == 0 {
			return None;
		}

		let (header, rest) = reader.split_at(header_len);
		*reader = rest;

		let (id_len, size, flags) = match version {
			Id3v2Version::V2 => (3, BigEndian::read_u24(&header[3..]), 0),
			Id3v2Version::V3 => {
				// Some apps write v3 headers around v2 frame IDs, padding the ID with a null
				let id_len = if header[3] == 0 { 3 } else { 4 };
				(
					id_len,
					BigEndian::read_u32(&header[4..8]),
					BigEndian::read_u16(&header[8..]),
				)
			},
			Id3v2Version::V4 => (
				4,
				BigEndian::read_u32(&header[4..8]).unsynch(),
				BigEndian::read_u16(&header[8..]),
			),
		};

		let mut id = [0; 4];
		id[..id_len].copy_from_slice(&header[..id_len]);

		Some(Self {
			version,
			id,
			id_len,
			size,
			flags,
		})
	}

	/// Verify the frame ID, upgrading v2 IDs found in v3 headers if allowed
	pub(crate) fn frame_id(&self, parse_options: ParseOptions) -> Result<FrameId> {
		let id_bytes = &self.id[..self.id_len];
		let bad_id = || Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id_bytes.to_vec()));

		let id = std::str::from_utf8(id_bytes).map_err(|_| bad_id())?;
		let id = FrameId::new(id.to_owned())?;

		if self.id_len == 4 || self.version == Id3v2Version::V2 {
			return Ok(id);
		}

		let upgraded = parse_options
			.implicit_conversions
			.then(|| catalog::translate(&id, Id3v2Version::V2, Id3v2Version::V3))
			.flatten();

		match upgraded {
			Some(upgraded) => {
				log::warn!("Found a v2 frame ID ({id}) in a v3 tag, upgrading to {upgraded}");
				Ok(upgraded)
			},
			None => Err(bad_id().into()),
		}
	}

	pub(crate) fn frame_flags(&self) -> FrameFlags {
		match self.version {
			Id3v2Version::V2 => FrameFlags::default(),
			Id3v2Version::V3 => FrameFlags::parse_id3v23(self.flags),
			Id3v2Version::V4 => FrameFlags::parse_id3v24(self.flags),
		}
	}
}
