use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::util::synchsafe::SynchsafeInteger;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// The major version number, as stored in the tag header
	pub const fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}

	/// The length of a frame ID in this version
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::Id3v2Version;
	///
	/// assert_eq!(Id3v2Version::V2.frame_id_len(), 3);
	/// assert_eq!(Id3v2Version::V4.frame_id_len(), 4);
	/// ```
	pub const fn frame_id_len(self) -> usize {
		match self {
			Self::V2 => 3,
			Self::V3 | Self::V4 => 4,
		}
	}

	pub(crate) const fn frame_header_len(self) -> usize {
		match self {
			Self::V2 => 6,
			Self::V3 | Self::V4 => 10,
		}
	}

	/// The next version on the path from `self` to `target`
	///
	/// Conversions only ever happen between adjacent versions, so ID3v2.2 <-> ID3v2.4 goes through
	/// ID3v2.3.
	pub(crate) fn step_towards(self, target: Self) -> Option<Self> {
		match (self, target) {
			(a, b) if a == b => None,
			(Self::V2, _) => Some(Self::V3),
			(Self::V4, _) => Some(Self::V3),
			(Self::V3, Self::V2) => Some(Self::V2),
			(Self::V3, _) => Some(Self::V4),
		}
	}
}

impl Display for Id3v2Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2.{}", self.major())
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised. See [`FrameFlags::unsynchronisation`](crate::id3v2::FrameFlags::unsynchronisation)
	///
	/// In ID3v2.2 and ID3v2.3, the whole tag body is unsynchronised at once. In ID3v2.4, every
	/// frame is unsynchronised individually.
	pub unsynchronisation: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	///
	/// A footer will be created if an ID3v2.4 tag is written. Other versions ignore this flag.
	pub footer: bool,
}

impl Id3v2TagFlags {
	/// Get the byte representation of the flags in `version`
	///
	/// NOTE: This never includes the extended header flag, extended headers are not written
	pub fn as_byte(&self, version: Id3v2Version) -> u8 {
		let mut byte = 0;

		if self.unsynchronisation {
			byte |= 0x80;
		}

		if version == Id3v2Version::V2 {
			return byte;
		}

		if self.experimental {
			byte |= 0x20;
		}

		if self.footer && version == Id3v2Version::V4 {
			byte |= 0x10;
		}

		byte
	}
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
	/// The size of the extended header, which is included in `size`
	pub extended_size: u32,
}

impl Id3v2Header {
	pub(crate) const LEN: usize = 10;

	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		if bytes.read_exact(&mut header).is_err() {
			return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedTag).into());
		}

		if &header[..3] != b"ID3" {
			return Err(Id3v2Error::new(Id3v2ErrorKind::MissingSignature).into());
		}

		// Version is stored as [major, minor], but here we don't care about minor revisions unless there's an error.
		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => {
				return Err(
					Id3v2Error::new(Id3v2ErrorKind::BadId3v2Version(major, header[4])).into(),
				);
			},
		};

		let flags = header[5];

		// Compression was a flag only used in ID3v2.2 (bit 2).
		// At the time the ID3v2.2 standard was written, a compression scheme wasn't decided.
		// The ID3v2.2 standard recommends ignoring the tag in this case.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			return Err(Id3v2Error::new(Id3v2ErrorKind::V2Compression).into());
		}

		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			experimental: version != Id3v2Version::V2 && flags & 0x20 == 0x20,
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
		};

		let size = BigEndian::read_u32(&header[6..]).unsynch();
		let mut extended_size = 0;

		let extended_header = version != Id3v2Version::V2 && flags & 0x40 == 0x40;
		if extended_header {
			let Ok(declared_size) = bytes.read_u32::<BigEndian>() else {
				return Err(Id3v2Error::new(Id3v2ErrorKind::TruncatedTag).into());
			};

			// ID3v2.3 doesn't include the size field itself, ID3v2.4 uses a synchsafe
			// size that does
			extended_size = match version {
				Id3v2Version::V3 => declared_size.saturating_add(4),
				_ => declared_size.unsynch(),
			};

			log::trace!("Skipping extended header of size {}", extended_size);

			if extended_size < 6 || extended_size > size {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}
		}

		Ok(Id3v2Header {
			version,
			flags: flags_parsed,
			size,
			extended_size,
		})
	}
}
