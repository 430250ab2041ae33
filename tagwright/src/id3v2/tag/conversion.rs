//! Conversions between tag versions
//!
//! Frames are converted one version at a time, so an `ID3v2.2` tag is upgraded to `ID3v2.4`
//! through `ID3v2.3`. Most frames only need their ID translated, leaving the body untouched. The
//! rest are reinterpreted:
//!
//! * `TYER`, `TDAT`, and `TIME` are folded into `TDRC` (and split back out of it)
//! * `TDOR` is reduced to the year for `TORY`
//! * `TIPL` and `TMCL` are merged into `IPLS`
//! * `RVAD` and `RVA2` have their channels remapped
//! * `PIC` and `APIC` swap between an image format and a MIME type

use super::Id3v2Tag;
use crate::error::{Diagnostic, Diagnostics, UnmappableFrame};
use crate::id3v2::items::attached_picture::{apic_to_pic, pic_to_apic};
use crate::id3v2::items::join_values;
use crate::id3v2::util::catalog;
use crate::id3v2::{
	BinaryFrame, ChannelInformation, ChannelType, Frame, FrameBody, FrameFlags, FrameId,
	Id3v2Version, RelativeVolumeAdjustmentFrame, TextInformationFrame, VolumeAdjustmentFrame,
	VolumeChannel, VolumeChannelAdjustment,
};

use std::ops::Range;

impl Id3v2Tag {
	/// Convert the tag to another version
	///
	/// The original tag is left untouched. Every frame without an equivalent in `version` is
	/// reported as a [`Diagnostic::DroppedFrame`].
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	/// tag.set_field(FieldKey::Year, "2024-03-09")?;
	/// tag.set_field(FieldKey::EncodingTime, "2024-03-10")?;
	///
	/// let (converted, diagnostics) = tag.convert(Id3v2Version::V3);
	/// assert_eq!(converted.get_first(FieldKey::Year).as_deref(), Some("2024"));
	/// assert!(converted.get("TDAT").is_some());
	///
	/// // There's nowhere to store the encoding time in ID3v2.3
	/// let dropped = diagnostics.dropped_frames().next().unwrap();
	/// assert_eq!(dropped.id().as_str(), "TDEN");
	/// # Ok(()) }
	/// ```
	pub fn convert(&self, version: Id3v2Version) -> (Id3v2Tag, Diagnostics) {
		let mut diagnostics = Diagnostics::default();
		let mut frames = self.frames.clone();

		let mut current = self.version;
		while let Some(next) = current.step_towards(version) {
			log::debug!("Converting {} frames from {current} to {next}", frames.len());

			let mut step = Step::new(current, next, &frames, &mut diagnostics);
			for frame in frames {
				step.convert(frame);
			}

			frames = step.converted;
			current = next;
		}

		let tag = Id3v2Tag {
			version,
			flags: self.flags,
			frames,
		};

		(tag, diagnostics)
	}
}

#[derive(Copy, Clone, Debug)]
enum Reinterpret {
	Year,
	// TDAT/TIME, once they've been folded into TDRC
	DatePart,
	Timestamp,
	OriginalYear,
	Credits,
	Volume,
	Picture,
}

// A conversion between two adjacent versions
struct Step<'a> {
	from: Id3v2Version,
	to: Id3v2Version,
	diagnostics: &'a mut Diagnostics,
	converted: Vec<Frame>,
	year_present: bool,
	year_upgraded: bool,
	date: Option<String>,
	time: Option<String>,
	credits: Option<TextInformationFrame>,
}

impl<'a> Step<'a> {
	fn new(
		from: Id3v2Version,
		to: Id3v2Version,
		frames: &[Frame],
		diagnostics: &'a mut Diagnostics,
	) -> Self {
		let upgrading_dates = from == Id3v2Version::V3 && to == Id3v2Version::V4;

		let mut step = Self {
			from,
			to,
			diagnostics,
			converted: Vec::with_capacity(frames.len()),
			year_present: false,
			year_upgraded: false,
			date: None,
			time: None,
			credits: None,
		};

		if upgrading_dates {
			step.year_present = first_text(frames, "TYER").is_some();
			step.date = first_text(frames, "TDAT").map(str::to_owned);
			step.time = first_text(frames, "TIME").map(str::to_owned);
		}

		if from == Id3v2Version::V4 && to == Id3v2Version::V3 {
			step.credits = merged_credits(frames);
		}

		step
	}

	fn convert(&mut self, frame: Frame) {
		let id = frame.id.clone();
		if let Err(reason) = self.convert_frame(frame) {
			log::warn!(
				"Dropping \"{id}\" while converting {} to {}: {reason}",
				self.from,
				self.to
			);

			self.diagnostics
				.push(Diagnostic::DroppedFrame(UnmappableFrame {
					id,
					from: self.from,
					to: self.to,
				}));
		}
	}

	fn convert_frame(&mut self, mut frame: Frame) -> Result<(), &'static str> {
		if self.to == Id3v2Version::V2 {
			if frame.flags.compression || frame.flags.encryption.is_some() {
				return Err("ID3v2.2 frames cannot be compressed or encrypted");
			}

			frame.flags = FrameFlags::default();
		}

		let Some(reinterpret) = self.reinterpretation(&frame) else {
			return self.translate(frame);
		};

		let flags = frame.flags;
		match (reinterpret, frame.body) {
			(Reinterpret::Year, FrameBody::Text(_)) if self.year_upgraded => {
				return Err("the date was already taken from an earlier TYER frame");
			},
			(Reinterpret::Year, FrameBody::Text(text)) => self.upgrade_year(flags, text),
			(Reinterpret::Timestamp, FrameBody::Text(text)) => self.split_timestamp(flags, &text),
			(Reinterpret::OriginalYear, FrameBody::Text(text)) => {
				self.downgrade_original_year(flags, text);
			},
			(Reinterpret::Credits, _) => {
				if let Some(credits) = self.credits.take() {
					self.emit("IPLS", flags, credits);
				}
			},
			(Reinterpret::Volume, FrameBody::VolumeAdjustment(rvad)) => {
				self.emit("RVA2", flags, rvad_to_rva2(&rvad));
			},
			(Reinterpret::Volume, FrameBody::RelativeVolumeAdjustment(rva2)) => {
				self.emit("RVAD", flags, rva2_to_rvad(&rva2));
			},
			(Reinterpret::Picture, FrameBody::Binary(picture)) => {
				return self.convert_picture(flags, &picture);
			},
			_ => {},
		}

		Ok(())
	}

	fn reinterpretation(&self, frame: &Frame) -> Option<Reinterpret> {
		use Id3v2Version::{V2, V3, V4};

		let reinterpret = match (self.from, self.to, frame.id_str(), &frame.body) {
			(V3, V4, "TYER", FrameBody::Text(_)) => Reinterpret::Year,
			(V3, V4, "TDAT" | "TIME", FrameBody::Text(_)) if self.year_present => {
				Reinterpret::DatePart
			},
			(V3, V4, "RVAD", FrameBody::VolumeAdjustment(_))
			| (V4, V3, "RVA2", FrameBody::RelativeVolumeAdjustment(_)) => Reinterpret::Volume,
			(V4, V3, "TDRC", FrameBody::Text(_)) => Reinterpret::Timestamp,
			(V4, V3, "TDOR", FrameBody::Text(_)) => Reinterpret::OriginalYear,
			(V4, V3, "TIPL" | "TMCL", FrameBody::Text(_)) => Reinterpret::Credits,
			(V2, V3, "PIC", FrameBody::Binary(_)) | (V3, V2, "APIC", FrameBody::Binary(_)) => {
				Reinterpret::Picture
			},
			_ => return None,
		};

		Some(reinterpret)
	}

	// Frames with the same layout in both versions, the body is kept as-is
	fn translate(&mut self, mut frame: Frame) -> Result<(), &'static str> {
		let Some(id) = catalog::translate_step(&frame.id, self.from, self.to) else {
			return Err("no equivalent frame exists");
		};

		if catalog::body_kind(frame.id_str(), self.from) != catalog::body_kind(id.as_str(), self.to) {
			return Err("the frame body cannot be reinterpreted");
		}

		if id != frame.id {
			log::trace!("Translating \"{}\" to \"{id}\"", frame.id);
		}

		frame.id = id;
		self.converted.push(frame);
		Ok(())
	}

	fn emit(&mut self, id: &'static str, flags: FrameFlags, body: impl Into<FrameBody>) {
		self.converted.push(Frame {
			id: FrameId::new_static(id),
			flags,
			body: body.into(),
		});
	}

	fn upgrade_year(&mut self, flags: FrameFlags, mut text: TextInformationFrame) {
		let year = text.values().next().unwrap_or_default().trim().to_owned();
		text.value = fold_timestamp(&year, self.date.as_deref(), self.time.as_deref());

		log::debug!("Upgrading TYER to TDRC \"{}\"", text.value);
		self.year_upgraded = true;
		self.emit("TDRC", flags, text);
	}

	fn split_timestamp(&mut self, flags: FrameFlags, text: &TextInformationFrame) {
		let encoding = text.encoding;
		let Some(timestamp) = text.values().next().map(str::trim) else {
			return;
		};

		log::debug!("Splitting TDRC \"{timestamp}\" into TYER, TDAT, and TIME");

		let year = digits(timestamp, 0..4).unwrap_or(timestamp);
		self.emit("TYER", flags, TextInformationFrame::new(encoding, year));

		// DDMM
		if let (Some(month), Some(day)) = (digits(timestamp, 5..7), digits(timestamp, 8..10)) {
			let date = TextInformationFrame::new(encoding, format!("{day}{month}"));
			self.emit("TDAT", FrameFlags::default(), date);
		}

		// HHMM
		if let (Some(hour), Some(minute)) = (digits(timestamp, 11..13), digits(timestamp, 14..16))
		{
			let time = TextInformationFrame::new(encoding, format!("{hour}{minute}"));
			self.emit("TIME", FrameFlags::default(), time);
		}
	}

	fn downgrade_original_year(&mut self, flags: FrameFlags, mut text: TextInformationFrame) {
		let years = join_values(
			text.values()
				.map(|value| digits(value.trim(), 0..4).unwrap_or(value)),
		);

		text.value = years;
		self.emit("TORY", flags, text);
	}

	fn convert_picture(&mut self, flags: FrameFlags, picture: &BinaryFrame) -> Result<(), &'static str> {
		let (id, converted) = match self.to {
			Id3v2Version::V2 => ("PIC", apic_to_pic(&picture.data)),
			_ => ("APIC", pic_to_apic(&picture.data)),
		};

		let Ok(data) = converted else {
			return Err("the picture header is malformed");
		};

		self.emit(id, flags, BinaryFrame::new(data));
		Ok(())
	}
}

fn first_text<'a>(frames: &'a [Frame], id: &str) -> Option<&'a str> {
	frames
		.iter()
		.filter(|frame| frame.id_str() == id)
		.find_map(|frame| match &frame.body {
			FrameBody::Text(text) => text.values().next(),
			_ => None,
		})
}

// Every TIPL and TMCL value, in frame order
fn merged_credits(frames: &[Frame]) -> Option<TextInformationFrame> {
	let mut lists = frames
		.iter()
		.filter(|frame| matches!(frame.id_str(), "TIPL" | "TMCL"))
		.filter_map(|frame| match &frame.body {
			FrameBody::Text(text) => Some(text),
			_ => None,
		});

	let mut merged = lists.next()?.clone();
	for list in lists {
		for value in list.values() {
			merged.push_value(value, Id3v2Version::V3);
		}
	}

	Some(merged)
}

// A substring made up entirely of ASCII digits
fn digits(value: &str, range: Range<usize>) -> Option<&str> {
	value
		.get(range)
		.filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

// Builds a "YYYY-MM-DDTHH:MM" timestamp from TYER, TDAT (DDMM), and TIME (HHMM)
fn fold_timestamp(year: &str, date: Option<&str>, time: Option<&str>) -> String {
	let mut timestamp = year.to_owned();

	let Some((day, month)) = date.and_then(split_digit_pair) else {
		return timestamp;
	};

	timestamp.push_str(&format!("-{month}-{day}"));

	if let Some((hour, minute)) = time.and_then(split_digit_pair) {
		timestamp.push_str(&format!("T{hour}:{minute}"));
	}

	timestamp
}

fn split_digit_pair(value: &str) -> Option<(&str, &str)> {
	let value = value.trim();
	digits(value, 0..4)
		.filter(|_| value.len() == 4)
		.map(|value| value.split_at(2))
}

fn rvad_to_rva2(rvad: &VolumeAdjustmentFrame) -> RelativeVolumeAdjustmentFrame {
	let bits_used = rvad.bits_used.clamp(1, 64);
	let peak_len = usize::from(bits_used).div_ceil(8);

	let channels = rvad
		.channels
		.iter()
		.map(|adjustment| {
			let channel_type = match adjustment.channel {
				VolumeChannel::Right => ChannelType::FrontRight,
				VolumeChannel::Left => ChannelType::FrontLeft,
				VolumeChannel::RightBack => ChannelType::BackRight,
				VolumeChannel::LeftBack => ChannelType::BackLeft,
				VolumeChannel::Centre => ChannelType::FrontCentre,
				VolumeChannel::Bass => ChannelType::Subwoofer,
			};

			let magnitude = i16::try_from(adjustment.magnitude).unwrap_or(i16::MAX);
			let volume_adjustment = if adjustment.increment {
				magnitude
			} else {
				-magnitude
			};

			let mut info = ChannelInformation::new(channel_type, volume_adjustment);
			if adjustment.peak != 0 {
				let peak = adjustment.peak.to_be_bytes();
				info.bits_representing_peak = bits_used;
				info.peak_volume = Some(peak[peak.len() - peak_len..].to_vec());
			}

			info
		})
		.collect();

	RelativeVolumeAdjustmentFrame::new(String::new(), channels)
}

fn rva2_to_rvad(rva2: &RelativeVolumeAdjustmentFrame) -> VolumeAdjustmentFrame {
	let has_channel = |channel_type| rva2.channel(channel_type).is_some();

	let mut bits_used = 16;
	let mut channels = Vec::with_capacity(rva2.channels.len());
	for info in &rva2.channels {
		let channel = match info.channel_type {
			ChannelType::FrontRight => VolumeChannel::Right,
			ChannelType::FrontLeft => VolumeChannel::Left,
			ChannelType::BackRight => VolumeChannel::RightBack,
			ChannelType::BackLeft => VolumeChannel::LeftBack,
			ChannelType::FrontCentre => VolumeChannel::Centre,
			ChannelType::Subwoofer => VolumeChannel::Bass,
			// The master volume stands in for missing front channels
			ChannelType::MasterVolume => {
				if !has_channel(ChannelType::FrontRight) {
					push_rvad_channel(&mut channels, VolumeChannel::Right, info);
				}
				if !has_channel(ChannelType::FrontLeft) {
					push_rvad_channel(&mut channels, VolumeChannel::Left, info);
				}

				bits_used = bits_used.max(info.bits_representing_peak.min(64));
				continue;
			},
			ChannelType::Other | ChannelType::BackCentre => {
				log::warn!(
					"RVA2: Dropping {:?} channel, RVAD has no equivalent",
					info.channel_type
				);
				continue;
			},
		};

		bits_used = bits_used.max(info.bits_representing_peak.min(64));
		push_rvad_channel(&mut channels, channel, info);
	}

	VolumeAdjustmentFrame::new(bits_used, channels)
}

// RVAD holds each channel once, the first adjustment for a channel wins
fn push_rvad_channel(
	channels: &mut Vec<VolumeChannelAdjustment>,
	channel: VolumeChannel,
	info: &ChannelInformation,
) {
	if channels.iter().any(|existing| existing.channel == channel) {
		log::warn!("RVA2: Ignoring duplicate adjustment for the {channel:?} channel");
		return;
	}

	channels.push(rvad_adjustment(channel, info));
}

fn rvad_adjustment(channel: VolumeChannel, info: &ChannelInformation) -> VolumeChannelAdjustment {
	// Only the low 64 bits of the peak fit
	let peak = info.peak_volume.as_deref().map_or(0, |peak| {
		peak[peak.len().saturating_sub(8)..]
			.iter()
			.fold(0_u64, |acc, b| (acc << 8) | u64::from(*b))
	});

	VolumeChannelAdjustment {
		channel,
		increment: info.volume_adjustment >= 0,
		magnitude: u64::from(info.volume_adjustment.unsigned_abs()),
		peak,
	}
}
