pub(crate) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	BinaryFrame, CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, NumberPairFrame,
	RelativeVolumeAdjustmentFrame, TextInformationFrame, UniqueFileIdentifierFrame, UrlLinkFrame,
	VolumeAdjustmentFrame,
};
use super::util::catalog::FrameKind;
use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3v2::Id3v2Version;
use header::FrameId;

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum FrameBody {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum FrameBody {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
		}

		impl FrameBody {
			/// The [`FrameKind`] of the body
			pub fn kind(&self) -> FrameKind {
				match self {
					$(
						FrameBody::$variant(_) => FrameKind::$variant,
					)*
				}
			}

			/// Used for errors in write::frame::verify_frame
			pub(crate) fn name(&self) -> &'static str {
				match self {
					$(
						FrameBody::$variant(_) => stringify!($variant),
					)*
				}
			}
		}

		$(
			impl From<$type> for FrameBody {
				fn from(value: $type) -> Self {
					FrameBody::$variant(value)
				}
			}
		)*
	}
}

define_frames! {
	/// The contents of an `ID3v2` frame
	///
	/// The variant a frame is decoded as depends on its ID and the tag version, see
	/// [`catalog::body_kind`](crate::id3v2::util::catalog::body_kind).
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum FrameBody {
		/// Represents a "T..." frame (excluding TXXX, TRCK, and TPOS)
		Text(TextInformationFrame),
		/// Represents a "TRCK" or "TPOS" frame
		NumberPair(NumberPairFrame),
		/// Represents a "W..." (excluding WXXX) frame
		Url(UrlLinkFrame),
		/// Represents a "TXXX" frame
		UserText(ExtendedTextFrame),
		/// Represents a "WXXX" frame
		UserUrl(ExtendedUrlFrame),
		/// Represents a "COMM" or "USLT" frame
		Comment(CommentFrame),
		/// Represents a "UFID" frame
		UniqueFileIdentifier(UniqueFileIdentifierFrame),
		/// Represents an "RVA2" frame
		RelativeVolumeAdjustment(RelativeVolumeAdjustmentFrame),
		/// Represents an "RVAD" or "RVA" frame
		VolumeAdjustment(VolumeAdjustmentFrame),
		/// Binary data
		///
		/// NOTES:
		///
		/// * This is used for frames without a dedicated layout, such as APIC, GEOB, and SYLT
		/// * This is used for compressed and encrypted frames
		/// * This is used for frames that failed to decode in [`ParsingMode::BestAttempt`](crate::config::ParsingMode::BestAttempt)
		Binary(BinaryFrame),
	}
}

impl FrameBody {
	pub(crate) fn as_bytes(
		&self,
		version: Id3v2Version,
		write_options: WriteOptions,
	) -> Result<Vec<u8>> {
		Ok(match self {
			FrameBody::Text(frame) => frame.as_bytes(version, write_options)?,
			FrameBody::NumberPair(frame) => frame.as_bytes(version, write_options)?,
			FrameBody::Url(frame) => frame.as_bytes(write_options)?,
			FrameBody::UserText(frame) => frame.as_bytes(version, write_options)?,
			FrameBody::UserUrl(frame) => frame.as_bytes(version, write_options)?,
			FrameBody::Comment(frame) => frame.as_bytes(version, write_options)?,
			FrameBody::UniqueFileIdentifier(frame) => frame.as_bytes()?,
			FrameBody::RelativeVolumeAdjustment(frame) => frame.as_bytes(write_options)?,
			FrameBody::VolumeAdjustment(frame) => frame.as_bytes()?,
			FrameBody::Binary(frame) => frame.as_bytes(),
		})
	}

	/// Check for empty content
	pub(crate) fn is_empty(&self) -> bool {
		match self {
			FrameBody::Text(text) => text.value.is_empty(),
			FrameBody::NumberPair(pair) => pair.numerator.is_none() && pair.denominator.is_none(),
			FrameBody::Url(link) => link.url.is_empty(),
			FrameBody::UserText(extended_text) => extended_text.content.is_empty(),
			FrameBody::UserUrl(extended_url) => extended_url.content.is_empty(),
			FrameBody::Comment(comment) => comment.content.is_empty(),
			FrameBody::UniqueFileIdentifier(ufid) => ufid.identifier.is_empty(),
			FrameBody::RelativeVolumeAdjustment(rva2) => rva2.channels.is_empty(),
			FrameBody::VolumeAdjustment(rvad) => rvad.channels.is_empty(),
			FrameBody::Binary(binary) => binary.data.is_empty(),
		}
	}
}

/// Represents an `ID3v2` frame
///
/// A frame is made up of its [`FrameId`], [`FrameFlags`], and [`FrameBody`]. The ID is fixed at
/// creation, and must be valid in the version of the tag it is stored in.
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::{Frame, FrameId, TextEncoding, TextInformationFrame};
///
/// # fn main() -> tagwright::error::Result<()> {
/// let title = Frame::new(
/// 	FrameId::new("TIT2")?,
/// 	TextInformationFrame::new(TextEncoding::UTF8, "Foo title"),
/// );
///
/// assert_eq!(title.id_str(), "TIT2");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
	pub(crate) id: FrameId,
	/// The flags of the frame
	pub flags: FrameFlags,
	/// The contents of the frame
	pub body: FrameBody,
}

impl Frame {
	/// Create a new [`Frame`] with default flags
	pub fn new(id: FrameId, body: impl Into<FrameBody>) -> Self {
		Self {
			id,
			flags: FrameFlags::default(),
			body: body.into(),
		}
	}

	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// Extract the string from the [`FrameId`]
	pub fn id_str(&self) -> &str {
		self.id.as_str()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.body.is_empty()
	}

	/// Whether two frames occupy the same slot in a tag
	///
	/// Most frames may only appear once per ID. Some are told apart by a secondary key:
	///
	/// * TXXX/WXXX - The description
	/// * COMM/USLT - The language and description
	/// * UFID - The owner
	/// * RVA2 - The identification
	pub fn same_identity(&self, other: &Frame) -> bool {
		if self.id != other.id {
			return false;
		}

		match (&self.body, &other.body) {
			(FrameBody::UserText(a), FrameBody::UserText(b)) => a.description == b.description,
			(FrameBody::UserUrl(a), FrameBody::UserUrl(b)) => a.description == b.description,
			(FrameBody::Comment(a), FrameBody::Comment(b)) => {
				a.language == b.language && a.description == b.description
			},
			(FrameBody::UniqueFileIdentifier(a), FrameBody::UniqueFileIdentifier(b)) => {
				a.owner == b.owner
			},
			(FrameBody::RelativeVolumeAdjustment(a), FrameBody::RelativeVolumeAdjustment(b)) => {
				a.identification == b.identification
			},
			_ => true,
		}
	}
}

/// Various flags to describe the content of an item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	///
	/// All frames with the same group identifier byte belong to the same group.
	pub grouping_identity: Option<u8>,
	/// Frame is zlib compressed
	///
	/// Compressed frames are never decompressed, their body is kept as a [`BinaryFrame`].
	/// It is **required** `data_length_indicator` be set if this is set.
	pub compression: bool,
	/// Frame encryption method symbol
	///
	/// NOTE: Since the encryption method is unknown, tagwright cannot do anything with these frames
	///
	/// The encryption method symbol **must** be within `0x80..=0xF0`.
	pub encryption: Option<u8>,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	///
	/// This is only stored per frame in `ID3v2.4`. Setting the tag-wide flag,
	/// [`Id3v2TagFlags::unsynchronisation`](crate::id3v2::Id3v2TagFlags::unsynchronisation), sets it
	/// for every frame.
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// The data length indicator is the size of the frame if the flags were all zeroed out.
	/// For `ID3v2.3` compressed frames, this holds the decompressed size.
	///
	/// This is only kept as-is for compressed or encrypted frames, otherwise it is
	/// recalculated when writing.
	pub data_length_indicator: Option<u32>,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	/// * `data_length_indicator`
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: (flags & 0x0040 == 0x0040).then_some(0),
			compression: flags & 0x0008 == 0x0008,
			encryption: (flags & 0x0004 == 0x0004).then_some(0),
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
			compression: flags & 0x0080 == 0x0080,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			unsynchronisation: false,
			data_length_indicator: None,
		}
	}

	/// Get the ID3v2.4 byte representation of the flags
	pub fn as_id3v24_bytes(&self) -> u16 {
		let mut flags = 0;

		if *self == FrameFlags::default() {
			return flags;
		}

		if self.tag_alter_preservation {
			flags |= 0x4000
		}

		if self.file_alter_preservation {
			flags |= 0x2000
		}

		if self.read_only {
			flags |= 0x1000
		}

		if self.grouping_identity.is_some() {
			flags |= 0x0040
		}

		if self.compression {
			flags |= 0x0008
		}

		if self.encryption.is_some() {
			flags |= 0x0004
		}

		if self.unsynchronisation {
			flags |= 0x0002
		}

		if self.data_length_indicator.is_some() {
			flags |= 0x0001
		}

		flags
	}

	/// Get the ID3v2.3 byte representation of the flags
	///
	/// NOTE: `ID3v2.3` has no per-frame unsynchronisation or data length indicator flags
	pub fn as_id3v23_bytes(&self) -> u16 {
		let mut flags = 0;

		if self.tag_alter_preservation {
			flags |= 0x8000
		}

		if self.file_alter_preservation {
			flags |= 0x4000
		}

		if self.read_only {
			flags |= 0x2000
		}

		if self.grouping_identity.is_some() {
			flags |= 0x0020
		}

		if self.compression {
			flags |= 0x0080
		}

		if self.encryption.is_some() {
			flags |= 0x0040
		}

		flags
	}
}

#[cfg(test)]
mod tests {
	use super::{Frame, FrameFlags};
	use crate::id3v2::{CommentFrame, ExtendedTextFrame, FrameId, TextEncoding};

	#[test_log::test]
	fn flags_v4() {
		let flags = FrameFlags::parse_id3v24(0x604D);
		assert!(flags.tag_alter_preservation);
		assert!(flags.file_alter_preservation);
		assert!(!flags.read_only);
		assert_eq!(flags.grouping_identity, Some(0));
		assert!(flags.compression);
		assert_eq!(flags.encryption, Some(0));
		assert!(!flags.unsynchronisation);
		assert_eq!(flags.data_length_indicator, Some(0));

		assert_eq!(flags.as_id3v24_bytes(), 0x604D);
	}

	#[test_log::test]
	fn flags_v3() {
		let flags = FrameFlags::parse_id3v23(0xE0E0);
		assert!(flags.tag_alter_preservation && flags.file_alter_preservation && flags.read_only);
		assert!(flags.compression);
		assert_eq!(flags.encryption, Some(0));
		assert_eq!(flags.grouping_identity, Some(0));

		assert_eq!(flags.as_id3v23_bytes(), 0xE0E0);
	}

	#[test_log::test]
	fn identity() {
		let barcode = Frame::new(
			FrameId::new("TXXX").unwrap(),
			ExtendedTextFrame::new(TextEncoding::UTF8, "BARCODE", "1"),
		);
		let barcode2 = Frame::new(
			FrameId::new("TXXX").unwrap(),
			ExtendedTextFrame::new(TextEncoding::Latin1, "BARCODE", "2"),
		);
		let catalog = Frame::new(
			FrameId::new("TXXX").unwrap(),
			ExtendedTextFrame::new(TextEncoding::UTF8, "CATALOGNUMBER", "1"),
		);

		assert!(barcode.same_identity(&barcode2));
		assert!(!barcode.same_identity(&catalog));

		let comment = Frame::new(
			FrameId::new("COMM").unwrap(),
			CommentFrame::new(TextEncoding::UTF8, *b"eng", "", "Foo"),
		);
		let german_comment = Frame::new(
			FrameId::new("COMM").unwrap(),
			CommentFrame::new(TextEncoding::UTF8, *b"deu", "", "Foo"),
		);
		assert!(!comment.same_identity(&german_comment));
	}
}
