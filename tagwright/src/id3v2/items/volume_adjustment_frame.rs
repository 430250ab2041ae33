use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

use std::io::Read;

use byteorder::ReadBytesExt;

/// A channel described by an `ID3v2.2`/`ID3v2.3` volume adjustment frame (RVA/RVAD)
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[allow(missing_docs)]
pub enum VolumeChannel {
	Right = 0,
	Left = 1,
	RightBack = 2,
	LeftBack = 3,
	Centre = 4,
	Bass = 5,
}

impl VolumeChannel {
	// Order of the channels within the frame, grouped the way they must be written
	const GROUPS: [&'static [VolumeChannel]; 4] = [
		&[VolumeChannel::Right, VolumeChannel::Left],
		&[VolumeChannel::RightBack, VolumeChannel::LeftBack],
		&[VolumeChannel::Centre],
		&[VolumeChannel::Bass],
	];

	fn increment_bit(self) -> u8 {
		1 << self as u8
	}

	fn group(self) -> usize {
		match self {
			VolumeChannel::Right | VolumeChannel::Left => 0,
			VolumeChannel::RightBack | VolumeChannel::LeftBack => 1,
			VolumeChannel::Centre => 2,
			VolumeChannel::Bass => 3,
		}
	}
}

/// The adjustment for a single [`VolumeChannel`]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct VolumeChannelAdjustment {
	/// The channel being adjusted
	pub channel: VolumeChannel,
	/// Whether the volume is increased (`true`) or decreased (`false`)
	pub increment: bool,
	/// The unsigned size of the adjustment
	pub magnitude: u64,
	/// The peak volume of the channel
	pub peak: u64,
}

/// An `ID3v2.2`/`ID3v2.3` relative volume adjustment frame (RVA/RVAD)
///
/// Replaced by [`RelativeVolumeAdjustmentFrame`](crate::id3v2::RelativeVolumeAdjustmentFrame) in `ID3v2.4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VolumeAdjustmentFrame {
	/// The number of bits used to store each value, between 1 and 64
	pub bits_used: u8,
	/// The adjustment of each channel, in frame order
	pub channels: Vec<VolumeChannelAdjustment>,
}

impl VolumeAdjustmentFrame {
	/// Create a new [`VolumeAdjustmentFrame`]
	pub fn new(bits_used: u8, channels: Vec<VolumeChannelAdjustment>) -> Self {
		Self {
			bits_used,
			channels,
		}
	}

	/// Get the adjustment for a channel, if it is present
	pub fn channel(&self, channel: VolumeChannel) -> Option<&VolumeChannelAdjustment> {
		self.channels.iter().find(|adj| adj.channel == channel)
	}

	/// Read a [`VolumeAdjustmentFrame`]
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The bit count is 0 or larger than 64 (See [`Id3v2ErrorKind::BadRvadBitCount`])
	/// * The right and left channels are missing
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let increment_flags = reader.read_u8()?;
		let bits_used = reader.read_u8()?;
		let value_len = value_byte_len(bits_used)?;

		let mut values = Vec::new();
		reader.read_to_end(&mut values)?;

		let mut values = values.chunks_exact(value_len).map(|chunk| {
			chunk
				.iter()
				.fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte))
		});

		let mut channels = Vec::new();
		for (index, group) in VolumeChannel::GROUPS.iter().enumerate() {
			// Each group holds its adjustments, followed by the matching peaks
			let group_values = values.by_ref().take(group.len() * 2).collect::<Vec<_>>();
			if group_values.len() < group.len() * 2 {
				if index == 0 {
					return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
				}

				if !group_values.is_empty() {
					log::warn!("RVAD: Ignoring incomplete channel group");
				}

				break;
			}

			let (magnitudes, peaks) = group_values.split_at(group.len());
			for ((channel, magnitude), peak) in group.iter().zip(magnitudes).zip(peaks) {
				channels.push(VolumeChannelAdjustment {
					channel: *channel,
					increment: increment_flags & channel.increment_bit() != 0,
					magnitude: *magnitude,
					peak: *peak,
				});
			}
		}

		Ok(Self {
			bits_used,
			channels,
		})
	}

	/// Convert a [`VolumeAdjustmentFrame`] to a byte vec
	///
	/// Channel groups are written up to the last one holding a channel, missing channels are
	/// written as zero.
	///
	/// # Errors
	///
	/// The bit count is 0 or larger than 64 (See [`Id3v2ErrorKind::BadRvadBitCount`])
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		let value_len = value_byte_len(self.bits_used)?;
		let max = match self.bits_used {
			64 => u64::MAX,
			bits => (1_u64 << bits) - 1,
		};

		let group_count = self
			.channels
			.iter()
			.map(|adj| adj.channel.group() + 1)
			.max()
			.unwrap_or(1);

		let mut increment_flags = 0;
		for adj in &self.channels {
			if adj.increment {
				increment_flags |= adj.channel.increment_bit();
			}
		}

		let mut content = vec![increment_flags, self.bits_used];

		let mut write_value = |value: u64| {
			if value > max {
				log::warn!(
					"RVAD: Value {value} does not fit in {} bits, truncating",
					self.bits_used
				);
			}

			let bytes = (value & max).to_be_bytes();
			content.extend_from_slice(&bytes[bytes.len() - value_len..]);
		};

		for group in &VolumeChannel::GROUPS[..group_count] {
			for channel in *group {
				write_value(self.channel(*channel).map_or(0, |adj| adj.magnitude));
			}
			for channel in *group {
				write_value(self.channel(*channel).map_or(0, |adj| adj.peak));
			}
		}

		Ok(content)
	}
}

fn value_byte_len(bits_used: u8) -> Result<usize> {
	match bits_used {
		1..=64 => Ok(usize::from(bits_used).div_ceil(8)),
		_ => Err(Id3v2Error::new(Id3v2ErrorKind::BadRvadBitCount).into()),
	}
}
