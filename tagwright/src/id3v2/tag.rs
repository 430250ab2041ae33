pub(crate) mod conversion;
mod fields;

use super::frame::Frame;
use super::header::{Id3v2TagFlags, Id3v2Version};
use super::write::{create_tag, verify_frame};
use crate::accessor::Accessor;
use crate::config::{ParseOptions, WriteOptions};
use crate::error::{Diagnostics, ErrorKind, Id3v2ErrorKind, Result};
use crate::field::FieldKey;

use std::io::Write;

macro_rules! impl_accessor {
	($($name:ident => $key:ident;)+) => {
		paste::paste! {
			$(
				fn $name(&self) -> Option<String> {
					self.get_first(FieldKey::$key)
				}

				fn [<set_ $name>](&mut self, value: String) {
					self.overwrite_field(FieldKey::$key, &value);
				}

				fn [<remove_ $name>](&mut self) {
					self.remove_field(FieldKey::$key);
				}
			)+
		}
	}
}

macro_rules! impl_number_accessor {
	($($name:ident => $key:ident;)+) => {
		paste::paste! {
			$(
				fn $name(&self) -> Option<u32> {
					self.get_first(FieldKey::$key)?.parse().ok()
				}

				fn [<set_ $name>](&mut self, value: u32) {
					self.overwrite_field(FieldKey::$key, &value.to_string());
				}

				fn [<remove_ $name>](&mut self) {
					self.remove_field(FieldKey::$key);
				}
			)+
		}
	}
}

/// An `ID3v2` tag
///
/// A tag is an ordered list of [`Frame`]s, all belonging to a single [`Id3v2Version`]. Multiple
/// frames may share an ID, such as `TXXX` frames with different descriptions.
///
/// Frames can be accessed directly, or through the version-agnostic [`FieldKey`] API.
///
/// ## Conversions
///
/// Tags can be converted between versions with [`Id3v2Tag::convert`]. Frames with no equivalent
/// in the target version are dropped, and reported through the returned [`Diagnostics`].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Id3v2Tag {
	version: Id3v2Version,
	flags: Id3v2TagFlags,
	pub(crate) frames: Vec<Frame>,
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// Create a new empty `Id3v2Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// let id3v2_tag = Id3v2Tag::new(Id3v2Version::V4);
	/// assert!(id3v2_tag.is_empty());
	/// ```
	pub fn new(version: Id3v2Version) -> Self {
		Self {
			version,
			flags: Id3v2TagFlags::default(),
			frames: Vec::new(),
		}
	}

	/// The version of the tag
	///
	/// All frames must be valid in this version, see [`Id3v2Tag::convert`] to change it.
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// Returns the [`Id3v2TagFlags`]
	pub fn flags(&self) -> &Id3v2TagFlags {
		&self.flags
	}

	/// Restrict the tag's flags
	pub fn set_flags(&mut self, flags: Id3v2TagFlags) {
		self.flags = flags
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Remove all frames
	pub fn clear(&mut self) {
		self.frames.clear();
	}

	/// Returns an iterator over the frames, in the order they will be written
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// Gets the first [`Frame`] with the ID `id`
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{FrameBody, Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	/// tag.set_field(FieldKey::Title, "Foo title")?;
	///
	/// let Some(FrameBody::Text(title)) = tag.get("TIT2").map(|f| &f.body) else {
	/// 	unreachable!()
	/// };
	/// assert_eq!(title.value, "Foo title");
	/// # Ok(()) }
	/// ```
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|f| f.id_str() == id)
	}

	/// Gets a mutable reference to the first [`Frame`] with the ID `id`
	///
	/// NOTE: The ID of a frame cannot be changed, only its flags and body.
	pub fn get_mut(&mut self, id: &str) -> Option<&mut Frame> {
		self.frames.iter_mut().find(|f| f.id_str() == id)
	}

	/// Appends a [`Frame`], keeping any existing frames with the same ID
	///
	/// # Errors
	///
	/// * The frame ID is not valid in the tag's version
	/// * The body kind is not allowed for the frame ID
	pub fn push(&mut self, frame: Frame) -> Result<()> {
		verify_frame(&frame, self.version)?;
		self.frames.push(frame);
		Ok(())
	}

	/// Inserts a [`Frame`]
	///
	/// This will replace the first frame with the same identity (See [`Frame::same_identity`]),
	/// keeping its position in the tag. Otherwise, the frame is appended.
	///
	/// # Errors
	///
	/// * The frame ID is not valid in the tag's version
	/// * The body kind is not allowed for the frame ID
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::{
	/// 	ExtendedTextFrame, Frame, FrameId, Id3v2Tag, Id3v2Version, TextEncoding,
	/// };
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	///
	/// let user_text = |content| {
	/// 	Frame::new(
	/// 		FrameId::new("TXXX").unwrap(),
	/// 		ExtendedTextFrame::new(TextEncoding::Latin1, "FOO", content),
	/// 	)
	/// };
	///
	/// assert!(tag.insert(user_text("Bar"))?.is_none());
	/// assert!(tag.insert(user_text("Baz"))?.is_some());
	/// assert_eq!(tag.len(), 1);
	///
	/// // A 3 character ID is only valid in ID3v2.2
	/// let frame = Frame::new(
	/// 	FrameId::new("TXX")?,
	/// 	ExtendedTextFrame::new(TextEncoding::Latin1, "FOO", "Bar"),
	/// );
	/// assert!(tag.insert(frame).is_err());
	/// # Ok(()) }
	/// ```
	pub fn insert(&mut self, frame: Frame) -> Result<Option<Frame>> {
		verify_frame(&frame, self.version)?;

		if let Some(existing) = self.frames.iter_mut().find(|f| f.same_identity(&frame)) {
			return Ok(Some(std::mem::replace(existing, frame)));
		}

		self.frames.push(frame);
		Ok(None)
	}

	/// Removes all [`Frame`]s with the ID `id`
	///
	/// To remove a single frame of a multi-instance ID, such as a `TXXX` frame by its description,
	/// see [`Id3v2Tag::retain`] or [`Id3v2Tag::delete_field`].
	pub fn remove(&mut self, id: &str) -> impl Iterator<Item = Frame> + '_ {
		// TODO: Use `Vec::extract_if` once the MSRV allows it
		let mut split_idx = 0_usize;

		for read_idx in 0..self.frames.len() {
			if self.frames[read_idx].id_str() == id {
				self.frames[split_idx..=read_idx].rotate_right(1);
				split_idx += 1;
			}
		}

		self.frames.drain(..split_idx)
	}

	/// Retains [`Frame`]s by evaluating the predicate
	pub fn retain<P>(&mut self, predicate: P)
	where
		P: FnMut(&Frame) -> bool,
	{
		self.frames.retain(predicate)
	}
}

impl Id3v2Tag {
	/// Read an `Id3v2Tag` from a buffer starting with `"ID3"`
	///
	/// Frames that fail to decode are handled according to the
	/// [`ParsingMode`](crate::config::ParsingMode), and reported through the returned
	/// [`Diagnostics`].
	///
	/// # Errors
	///
	/// * The tag header is invalid, see [`ErrorKind::CannotReadTag`]
	/// * The buffer is shorter than the size the header claims
	/// * A frame fails to decode with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::ParseOptions;
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let bytes = b"ID3\x03\x00\x00\x00\x00\x00\x0E\
	/// 	TIT2\x00\x00\x00\x04\x00\x00\x00Foo";
	///
	/// let (tag, diagnostics) = Id3v2Tag::read_from(bytes, ParseOptions::new())?;
	/// assert_eq!(tag.version(), Id3v2Version::V3);
	/// assert_eq!(tag.get_first(FieldKey::Title).as_deref(), Some("Foo"));
	/// assert!(diagnostics.is_empty());
	/// # Ok(()) }
	/// ```
	pub fn read_from(bytes: &[u8], parse_options: ParseOptions) -> Result<(Self, Diagnostics)> {
		super::read::parse_id3v2(bytes, parse_options)
	}

	/// Read an `Id3v2Tag` from a buffer, or use `fallback` if the buffer has no tag
	///
	/// Any error other than a missing `"ID3"` signature is still returned.
	///
	/// # Errors
	///
	/// See [`Id3v2Tag::read_from`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::ParseOptions;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let fallback = Id3v2Tag::new(Id3v2Version::V4);
	/// let (tag, _) = Id3v2Tag::read_or(b"fLaC", fallback, ParseOptions::new())?;
	/// assert!(tag.is_empty());
	/// # Ok(()) }
	/// ```
	pub fn read_or(
		bytes: &[u8],
		fallback: Self,
		parse_options: ParseOptions,
	) -> Result<(Self, Diagnostics)> {
		match Self::read_from(bytes, parse_options) {
			Err(err)
				if matches!(
					err.kind(),
					ErrorKind::CannotReadTag(id3v2) if matches!(id3v2.kind(), Id3v2ErrorKind::MissingSignature)
				) =>
			{
				log::debug!("No ID3v2 tag found, using fallback");
				Ok((fallback, Diagnostics::default()))
			},
			result => result,
		}
	}

	/// Dumps the tag to a writer, in the tag's version
	///
	/// # Errors
	///
	/// * [`std::io::Error`]
	/// * [`ErrorKind::TooMuchData`]
	/// * A frame cannot be encoded, see [`Frame::encode`]
	pub fn dump_to<W: Write>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()> {
		let tag = create_tag(self, write_options)?;
		writer.write_all(&tag)?;
		Ok(())
	}

	/// Encode the tag, in the tag's version
	///
	/// # Errors
	///
	/// See [`Id3v2Tag::dump_to`]
	pub fn as_bytes(&self, write_options: WriteOptions) -> Result<Vec<u8>> {
		create_tag(self, write_options)
	}
}

impl Id3v2Tag {
	// Used by the `Accessor` setters, which replace every value
	fn overwrite_field(&mut self, key: FieldKey, value: &str) {
		self.remove_field(key);
		if value.is_empty() {
			return;
		}

		if let Err(err) = self.set_field(key, value) {
			log::warn!("Unable to set {key}: {err}");
		}
	}

	fn remove_field(&mut self, key: FieldKey) {
		if let Err(err) = self.delete_field(key) {
			log::warn!("Unable to remove {key}: {err}");
		}
	}
}

/// ## [`Accessor`] Methods
///
/// These are backed by the [`FieldKey`] API. The getters return the first value of a field,
/// while the setters replace every value.
impl Accessor for Id3v2Tag {
	impl_accessor!(
		title   => Title;
		artist  => Artist;
		album   => Album;
		genre   => Genre;
		comment => Comment;
	);

	impl_number_accessor!(
		track       => TrackNumber;
		track_total => TrackTotal;
		disk        => DiscNumber;
		disk_total  => DiscTotal;
	);
}
