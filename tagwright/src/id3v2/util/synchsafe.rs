//! Utilities for working with unsynchronized ID3v2 content
//!
//! See [`FrameFlags::unsynchronisation`](crate::id3v2::FrameFlags::unsynchronisation) for an explanation.

use crate::error::Result;
use crate::macros::err;

/// Apply the unsynchronisation scheme to a buffer
///
/// A `0x00` is inserted after every `0xFF` that is followed by a byte `>= 0xE0` or by `0x00`,
/// as well as after a trailing `0xFF`.
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::util::synchsafe::unsynchronise;
///
/// let content = [0xFF, 0xE0, 0x12, 0xFF];
/// assert_eq!(unsynchronise(&content), [0xFF, 0x00, 0xE0, 0x12, 0xFF, 0x00]);
/// ```
pub fn unsynchronise(content: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(content.len() + content.len() / 8);

	let mut iter = content.iter().copied().peekable();
	while let Some(byte) = iter.next() {
		out.push(byte);

		if byte != 0xFF {
			continue;
		}

		match iter.peek() {
			Some(&next) if next < 0xE0 && next != 0 => {},
			_ => out.push(0),
		}
	}

	out
}

/// Reverse the unsynchronisation scheme
///
/// Every `0x00` directly following an `0xFF` is removed.
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::util::synchsafe::resynchronise;
///
/// let content = [0xFF, 0x00, 0xE0, 0x12, 0xFF, 0x00];
/// assert_eq!(resynchronise(&content), [0xFF, 0xE0, 0x12, 0xFF]);
/// ```
pub fn resynchronise(content: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(content.len());

	let mut encountered_ff = false;
	for &byte in content {
		if encountered_ff && byte == 0 {
			encountered_ff = false;
			continue;
		}

		encountered_ff = byte == 0xFF;
		out.push(byte);
	}

	out
}

/// An integer that can be converted to and from synchsafe variants
///
/// A synchsafe integer only uses the lower 7 bits of each byte, so it never contains a false
/// MPEG frame sync. This limits a `u32` to 28 bits, and a `u16` to 14.
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in the 7 usable bits of each byte
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// // The largest tag size that can be stored
	/// let size = 0xFFF_FFFF_u32;
	/// assert_eq!(size.synch()?, 0x7F7F_7F7F);
	///
	/// assert!(0x1000_0000_u32.synch().is_err());
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The high bit of each byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::util::synchsafe::SynchsafeInteger;
	///
	/// assert_eq!(0x0000_0201_u32.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;
}

macro_rules! impl_synchsafe {
	($($ty:ty),+) => {
		$(
			impl SynchsafeInteger for $ty {
				fn synch(self) -> Result<Self> {
					const BYTES: u32 = <$ty>::BITS / 8;
					if self >> (BYTES * 7) != 0 {
						err!(TooMuchData);
					}

					let mut synched = 0;
					for byte in 0..BYTES {
						synched |= ((self >> (byte * 7)) & 0x7F) << (byte * 8);
					}

					Ok(synched)
				}

				fn unsynch(self) -> Self {
					const BYTES: u32 = <$ty>::BITS / 8;

					let mut value = 0;
					for byte in 0..BYTES {
						value |= ((self >> (byte * 8)) & 0x7F) << (byte * 7);
					}

					value
				}
			}
		)+
	};
}

impl_synchsafe!(u16, u32);
