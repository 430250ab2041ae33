use crate::config::{ParsingMode, WriteOptions};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

/// A channel identifier used in the RVA2 frame
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[allow(missing_docs)]
pub enum ChannelType {
	Other = 0,
	MasterVolume = 1,
	FrontRight = 2,
	FrontLeft = 3,
	BackRight = 4,
	BackLeft = 5,
	FrontCentre = 6,
	BackCentre = 7,
	Subwoofer = 8,
}

impl ChannelType {
	/// Get a [`ChannelType`] from a `u8`
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::ChannelType;
	///
	/// assert_eq!(ChannelType::from_u8(1), Some(ChannelType::MasterVolume));
	///
	/// // The valid range is 0..=8
	/// assert_eq!(ChannelType::from_u8(10), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::MasterVolume),
			2 => Some(Self::FrontRight),
			3 => Some(Self::FrontLeft),
			4 => Some(Self::BackRight),
			5 => Some(Self::BackLeft),
			6 => Some(Self::FrontCentre),
			7 => Some(Self::BackCentre),
			8 => Some(Self::Subwoofer),
			_ => None,
		}
	}
}

/// Volume adjustment information for a specific channel
///
/// This is used in the RVA2 frame through [`RelativeVolumeAdjustmentFrame`]
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ChannelInformation {
	/// The type of channel this describes
	pub channel_type: ChannelType,
	/// A fixed point decibel value representing (adjustment*512), giving +/- 64 dB with a precision of 0.001953125 dB.
	pub volume_adjustment: i16,
	/// The number of bits the peak volume field occupies, with 0 meaning there is no peak volume.
	pub bits_representing_peak: u8,
	/// An optional peak volume
	pub peak_volume: Option<Vec<u8>>,
}

impl ChannelInformation {
	/// Create a new [`ChannelInformation`] with no peak volume
	pub fn new(channel_type: ChannelType, volume_adjustment: i16) -> Self {
		Self {
			channel_type,
			volume_adjustment,
			bits_representing_peak: 0,
			peak_volume: None,
		}
	}
}

/// An `ID3v2.4` relative volume adjustment frame (RVA2)
///
/// Channels are kept in the order they appear in the frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeVolumeAdjustmentFrame {
	/// The identifier used to identify the situation and/or device where this adjustment should apply
	pub identification: String,
	/// The information for each channel described in the frame
	pub channels: Vec<ChannelInformation>,
}

impl RelativeVolumeAdjustmentFrame {
	/// Create a new [`RelativeVolumeAdjustmentFrame`]
	pub fn new(identification: impl Into<String>, channels: Vec<ChannelInformation>) -> Self {
		Self {
			identification: identification.into(),
			channels,
		}
	}

	/// Get the information for a channel, if it is present
	pub fn channel(&self, channel_type: ChannelType) -> Option<&ChannelInformation> {
		self.channels
			.iter()
			.find(|info| info.channel_type == channel_type)
	}

	/// Read a [`RelativeVolumeAdjustmentFrame`]
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Bad channel type (See [Id3v2ErrorKind::BadRva2ChannelType])
	/// * Not enough data
	pub fn parse<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read,
	{
		let identification = decode_text(
			reader,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let mut channels = Vec::new();
		while let Ok(channel_type_byte) = reader.read_u8() {
			let channel_type = match ChannelType::from_u8(channel_type_byte) {
				Some(channel_type) => channel_type,
				None if parse_mode != ParsingMode::Strict => {
					log::warn!("Unknown RVA2 channel type {channel_type_byte}, using `Other`");
					ChannelType::Other
				},
				None => return Err(Id3v2Error::new(Id3v2ErrorKind::BadRva2ChannelType).into()),
			};

			let volume_adjustment = reader.read_i16::<BigEndian>()?;
			let bits_representing_peak = reader.read_u8()?;

			let mut peak_volume = None;
			if bits_representing_peak > 0 {
				let mut peak_volume_bytes = vec![0; peak_byte_len(bits_representing_peak)];
				reader.read_exact(&mut peak_volume_bytes)?;
				peak_volume = Some(peak_volume_bytes);
			}

			channels.push(ChannelInformation {
				channel_type,
				volume_adjustment,
				bits_representing_peak,
				peak_volume,
			});
		}

		Ok(Self {
			identification,
			channels,
		})
	}

	/// Convert a [`RelativeVolumeAdjustmentFrame`] to a byte vec
	///
	/// # Errors
	///
	/// If [`WriteOptions::lossy_text_encoding()`] is disabled and the identifier cannot be Latin-1 encoded.
	pub fn as_bytes(&self, write_options: WriteOptions) -> Result<Vec<u8>> {
		let mut content = TextEncoding::Latin1.encode(
			&self.identification,
			true,
			write_options.lossy_text_encoding,
		)?;

		for info in &self.channels {
			content.push(info.channel_type as u8);
			content.extend(info.volume_adjustment.to_be_bytes());

			let Some(peak) = info.peak_volume.as_deref().filter(|peak| !peak.is_empty()) else {
				content.push(0);
				continue;
			};

			// The bit count must agree with the number of peak bytes written
			let mut bits_representing_peak = info.bits_representing_peak;
			if bits_representing_peak == 0 || peak_byte_len(bits_representing_peak) != peak.len() {
				bits_representing_peak = (peak.len().min(32) * 8).min(255) as u8;
			}

			content.push(bits_representing_peak);
			content.extend(peak.iter().take(peak_byte_len(bits_representing_peak)));
		}

		Ok(content)
	}
}

fn peak_byte_len(bits: u8) -> usize {
	(usize::from(bits) + 7) >> 3
}
