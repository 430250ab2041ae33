//! Contains the errors that can arise within tagwright
//!
//! The primary error is [`TagwrightError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Not every problem is fatal. Frames that fail to decode, and frames lost during a version
//! conversion, are reported through [`Diagnostics`] alongside the tag that was produced.

use crate::field::FieldKey;
use crate::id3v2::{FrameId, Id3v2Version};
pub use crate::util::text::TextEncodingError;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, TagwrightError>`
pub type Result<T> = std::result::Result<T, TagwrightError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Tag related errors
	/// The tag header could not be read, the whole tag is unusable
	///
	/// This covers a missing `"ID3"` signature, a truncated buffer, and unsupported versions.
	CannotReadTag(Id3v2Error),
	/// A frame header is malformed (bad size, non-alphanumeric identifier)
	FrameDecode(Id3v2Error),
	/// A frame body does not match the layout expected for its identifier
	InvalidFrameBody(InvalidFrameBody),
	/// A frame could not be written
	FrameEncode(Id3v2Error),
	/// No equivalent frame exists in the target version of a conversion
	UnmappableFrame(UnmappableFrame),
	/// A [`FieldKey`] operation was used incorrectly
	InvalidFieldOperation(FieldOperationError),

	// Data related errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while encoding text
	TextEncode(TextEncodingError),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while interacting with ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when the input does not start with `"ID3"`
	MissingSignature,
	/// Arises when the input is shorter than the size declared in the tag header
	TruncatedTag,
	/// Arises when an invalid ID3v2 version is found
	BadId3v2Version(u8, u8),
	/// Arises when a compressed ID3v2.2 tag is encountered
	///
	/// At the time the ID3v2.2 standard was written, a compression scheme wasn't decided.
	/// As such, it is recommended to ignore the tag entirely.
	V2Compression,
	/// Arises when an extended header has an invalid size
	BadExtendedHeaderSize,

	// Frame
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	/// or if the ID is too short/long.
	BadFrameId(Vec<u8>),
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// Arises when writing a compressed frame with no data length indicator
	MissingDataLengthIndicator,
	/// Arises when a text encoding other than Latin-1 or UTF-16 appear in an ID3v2.2 tag
	V2InvalidTextEncoding,
	/// Arises when an ID3v2.4 only text encoding (UTF-8, UTF-16 BE) appears in an ID3v2.3 tag
	V3InvalidTextEncoding,
	/// Arises when decoding a [`UniqueFileIdentifierFrame`](crate::id3v2::UniqueFileIdentifierFrame) with no owner
	MissingUfidOwner,
	/// Arises when decoding a [`RelativeVolumeAdjustmentFrame`](crate::id3v2::RelativeVolumeAdjustmentFrame) with an invalid channel type
	BadRva2ChannelType,
	/// Arises when a [`VolumeAdjustmentFrame`](crate::id3v2::VolumeAdjustmentFrame) uses 0, or more than 64, bits per value
	BadRvadBitCount,

	// Writing
	/// Arises when attempting to write an encrypted frame with an invalid encryption method symbol (must be within `0x80..=0xF0`)
	InvalidEncryptionMethodSymbol(u8),
	/// Arises when attempting to write an invalid Frame (Bad `FrameId`/`FrameBody` pairing)
	BadFrame(String, &'static str),
	/// Arises when attempting to write a [`CommentFrame`](crate::id3v2::CommentFrame) with an invalid language
	InvalidLanguage([u8; 3]),
	/// Arises when a frame is placed in a tag whose version uses a different identifier length
	FrameVersionMismatch(FrameId, Id3v2Version),
}

impl Id3v2ErrorKind {
	fn into_error_kind(self) -> ErrorKind {
		match self {
			Self::MissingSignature
			| Self::TruncatedTag
			| Self::BadId3v2Version(..)
			| Self::V2Compression
			| Self::BadExtendedHeaderSize => ErrorKind::CannotReadTag(Id3v2Error::new(self)),
			Self::InvalidEncryptionMethodSymbol(_)
			| Self::MissingDataLengthIndicator
			| Self::BadFrame(..)
			| Self::InvalidLanguage(_)
			| Self::FrameVersionMismatch(..) => ErrorKind::FrameEncode(Id3v2Error::new(self)),
			_ => ErrorKind::FrameDecode(Id3v2Error::new(self)),
		}
	}
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::MissingSignature => write!(f, "Expected an \"ID3\" signature"),
			Self::TruncatedTag => write!(f, "Tag is shorter than its declared size"),
			Self::BadId3v2Version(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			Self::V2Compression => write!(f, "Encountered a compressed ID3v2.2 tag"),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},

			// Frame
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::MissingDataLengthIndicator => write!(
				f,
				"Attempted to write a compressed frame without a data length indicator"
			),
			Self::V2InvalidTextEncoding => {
				write!(f, "ID3v2.2 only supports Latin-1 and UTF-16 encodings")
			},
			Self::V3InvalidTextEncoding => {
				write!(f, "ID3v2.3 only supports Latin-1 and UTF-16 encodings")
			},
			Self::MissingUfidOwner => write!(f, "Missing owner in UFID frame"),
			Self::BadRva2ChannelType => write!(f, "Encountered invalid channel type in RVA2 frame"),
			Self::BadRvadBitCount => write!(f, "Encountered an RVAD frame with an unsupported bit count"),

			// Writing
			Self::InvalidEncryptionMethodSymbol(symbol) => write!(
				f,
				"Attempted to write an encrypted frame with an invalid method symbol ({symbol})"
			),
			Self::BadFrame(frame_id, frame_value) => write!(
				f,
				"Attempted to write an invalid frame. ID: \"{frame_id}\", Value: \"{frame_value}\"",
			),
			Self::InvalidLanguage(lang) => write!(
				f,
				"Invalid frame language found: {lang:?} (expected 3 ascii characters)"
			),
			Self::FrameVersionMismatch(id, version) => write!(
				f,
				"Frame ID \"{id}\" cannot be stored in an {version} tag"
			),
		}
	}
}

/// An error that arises while interacting with an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// A frame body that could not be decoded
///
/// The frame header was valid, so the rest of the tag is still readable.
#[derive(Debug)]
pub struct InvalidFrameBody {
	id: FrameId,
	offset: usize,
	source: Box<TagwrightError>,
}

impl InvalidFrameBody {
	pub(crate) fn new(id: FrameId, offset: usize, source: TagwrightError) -> Self {
		Self {
			id,
			offset,
			source: Box::new(source),
		}
	}

	/// The ID of the frame that failed to decode
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The byte offset, relative to the start of the tag, at which decoding failed
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// The underlying error
	pub fn source(&self) -> &TagwrightError {
		&self.source
	}
}

impl Display for InvalidFrameBody {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Invalid body in frame \"{}\" at offset {}: {}",
			self.id, self.offset, self.source
		)
	}
}

/// A frame that was dropped during a version conversion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmappableFrame {
	pub(crate) id: FrameId,
	pub(crate) from: Id3v2Version,
	pub(crate) to: Id3v2Version,
}

impl UnmappableFrame {
	/// The ID of the dropped frame, as it appeared in the source tag
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The version of the source tag
	pub fn from(&self) -> Id3v2Version {
		self.from
	}

	/// The version being converted to
	pub fn to(&self) -> Id3v2Version {
		self.to
	}
}

impl Display for UnmappableFrame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame \"{}\" has no equivalent when converting {} to {}",
			self.id, self.from, self.to
		)
	}
}

/// The reason a [`FieldKey`] operation failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldOperationErrorKind {
	/// The key has no mapping in the tag's version
	NoMapping,
	/// The index does not point to an existing value
	IndexOutOfRange {
		/// The requested index
		index: usize,
		/// The number of values available
		len: usize,
	},
	/// The field only holds one value, and it is already present
	SingleValued,
	/// The value cannot be stored in this field
	InvalidValue(&'static str),
	/// Attempted to store an empty value
	EmptyValue,
}

/// An error that arises from misusing a [`FieldKey`] operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOperationError {
	pub(crate) key: FieldKey,
	pub(crate) version: Id3v2Version,
	pub(crate) kind: FieldOperationErrorKind,
}

impl FieldOperationError {
	/// The key the operation was called with
	pub fn key(&self) -> FieldKey {
		self.key
	}

	/// The version of the tag the operation was called on
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// Returns the [`FieldOperationErrorKind`]
	pub fn kind(&self) -> FieldOperationErrorKind {
		self.kind
	}
}

impl Display for FieldOperationError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let key = self.key.as_str();
		match self.kind {
			FieldOperationErrorKind::NoMapping => {
				write!(f, "{key} has no mapping in {}", self.version)
			},
			FieldOperationErrorKind::IndexOutOfRange { index, len } => write!(
				f,
				"{key}: index {index} is out of range (field has {len} values)"
			),
			FieldOperationErrorKind::SingleValued => {
				write!(f, "{key} only holds a single value, which is already set")
			},
			FieldOperationErrorKind::InvalidValue(reason) => write!(f, "{key}: {reason}"),
			FieldOperationErrorKind::EmptyValue => write!(f, "{key}: value cannot be empty"),
		}
	}
}

/// Errors that could occur within tagwright
pub struct TagwrightError {
	pub(crate) kind: ErrorKind,
}

impl TagwrightError {
	/// Create a `TagwrightError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::error::{ErrorKind, TagwrightError};
	///
	/// let too_much_data = TagwrightError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::error::{ErrorKind, TagwrightError};
	///
	/// let too_much_data = TagwrightError::new(ErrorKind::TooMuchData);
	/// if let ErrorKind::TooMuchData = too_much_data.kind() {
	/// 	println!("That's a big tag!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagwrightError {}

impl Debug for TagwrightError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for TagwrightError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: input.kind.into_error_kind(),
		}
	}
}

impl From<InvalidFrameBody> for TagwrightError {
	fn from(input: InvalidFrameBody) -> Self {
		Self {
			kind: ErrorKind::InvalidFrameBody(input),
		}
	}
}

impl From<UnmappableFrame> for TagwrightError {
	fn from(input: UnmappableFrame) -> Self {
		Self {
			kind: ErrorKind::UnmappableFrame(input),
		}
	}
}

impl From<FieldOperationError> for TagwrightError {
	fn from(input: FieldOperationError) -> Self {
		Self {
			kind: ErrorKind::InvalidFieldOperation(input),
		}
	}
}

impl From<TextEncodingError> for TagwrightError {
	fn from(input: TextEncodingError) -> Self {
		Self {
			kind: ErrorKind::TextEncode(input),
		}
	}
}

impl From<std::io::Error> for TagwrightError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for TagwrightError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::CannotReadTag(ref err) => write!(f, "Unable to read tag: {err}"),
			ErrorKind::FrameDecode(ref err) => write!(f, "Unable to decode frame: {err}"),
			ErrorKind::InvalidFrameBody(ref err) => write!(f, "{err}"),
			ErrorKind::FrameEncode(ref err) => write!(f, "Unable to encode frame: {err}"),
			ErrorKind::UnmappableFrame(ref err) => write!(f, "{err}"),
			ErrorKind::InvalidFieldOperation(ref err) => {
				write!(f, "Invalid field operation: {err}")
			},
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::TextEncode(message) => write!(f, "Text encoding: {message}"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
		}
	}
}

/// A non-fatal problem encountered while decoding or converting a tag
#[derive(Debug)]
#[non_exhaustive]
pub enum Diagnostic {
	/// A frame could not be decoded and was left out of the tag
	SkippedFrame {
		/// The offset of the frame header, relative to the start of the tag
		offset: usize,
		/// The reason the frame was skipped
		error: TagwrightError,
	},
	/// A frame body could not be decoded, and its raw bytes were kept as a
	/// [`BinaryFrame`](crate::id3v2::BinaryFrame)
	RetainedFrame(InvalidFrameBody),
	/// A frame has no equivalent in the target version, and was dropped
	DroppedFrame(UnmappableFrame),
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::SkippedFrame { offset, error } => {
				write!(f, "Skipped frame at offset {offset}: {error}")
			},
			Self::RetainedFrame(err) => write!(f, "Kept undecodable frame as binary: {err}"),
			Self::DroppedFrame(err) => write!(f, "Dropped frame: {err}"),
		}
	}
}

/// The [`Diagnostic`]s collected while producing a tag
///
/// An empty list means nothing was lost.
#[derive(Debug, Default)]
pub struct Diagnostics {
	items: Vec<Diagnostic>,
}

impl Diagnostics {
	pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
		self.items.push(diagnostic);
	}

	/// Whether any problems were encountered
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The number of problems encountered
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns an iterator over the diagnostics, in the order they were encountered
	pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
		self.items.iter()
	}

	/// Returns an iterator over the frames dropped during a conversion
	pub fn dropped_frames(&self) -> impl Iterator<Item = &UnmappableFrame> {
		self.items.iter().filter_map(|d| match d {
			Diagnostic::DroppedFrame(dropped) => Some(dropped),
			_ => None,
		})
	}

	/// Returns an iterator over the frames that failed to decode, whether they were kept or not
	pub fn failed_frames(&self) -> impl Iterator<Item = &Diagnostic> {
		self.items.iter().filter(|d| {
			matches!(
				d,
				Diagnostic::SkippedFrame { .. } | Diagnostic::RetainedFrame(_)
			)
		})
	}
}

impl IntoIterator for Diagnostics {
	type Item = Diagnostic;
	type IntoIter = std::vec::IntoIter<Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Diagnostic;
	type IntoIter = std::slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
