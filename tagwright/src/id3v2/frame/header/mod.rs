pub(super) mod parse;

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3v2::Id3v2Version;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An `ID3v2` frame ID
///
/// IDs are 3 characters in `ID3v2.2`, and 4 characters in `ID3v2.3` and `ID3v2.4`. The same ID
/// may mean different things in different versions, see [`catalog`](crate::id3v2::util::catalog)
/// for how they are translated.
#[derive(PartialEq, Clone, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(Cow<'static, str>);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// NOTE: This will not upgrade IDs.
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::FrameId;
	///
	/// assert!(FrameId::new("TIT2").is_ok());
	/// assert!(FrameId::new("TT2").is_ok());
	///
	/// assert!(FrameId::new("tit2").is_err());
	/// assert!(FrameId::new("TITLE").is_err());
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<Cow<'static, str>>,
	{
		Self::new_cow(id.into())
	}

	// Split from generic, public method to avoid code bloat by monomorphization.
	pub(crate) fn new_cow(id: Cow<'static, str>) -> Result<Self> {
		Self::verify_id(&id)?;

		match id.len() {
			3 | 4 => Ok(Self(id)),
			_ => Err(
				Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.into_owned().into_bytes())).into(),
			),
		}
	}

	/// Used for IDs from the catalog, which are known to be valid
	pub(crate) const fn new_static(id: &'static str) -> Self {
		Self(Cow::Borrowed(id))
	}

	/// Whether this frame ID is an outdated (ID3v2.2) ID
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3v2::FrameId;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let id_valid = FrameId::new("TPE1")?;
	/// assert!(!id_valid.is_outdated());
	///
	/// let id_outdated = FrameId::new("TP1")?;
	/// assert!(id_outdated.is_outdated());
	/// # Ok(()) }
	/// ```
	pub fn is_outdated(&self) -> bool {
		self.0.len() == 3
	}

	/// Whether this frame ID has the correct length for a tag of `version`
	pub fn is_valid_in(&self, version: Id3v2Version) -> bool {
		self.0.len() == version.frame_id_len()
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the [`FrameId`], returning the inner value
	pub fn into_inner(self) -> Cow<'static, str> {
		self.0
	}

	fn verify_id(id_str: &str) -> Result<()> {
		for c in id_str.chars() {
			if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(
					id_str.as_bytes().to_vec(),
				))
				.into());
			}
		}

		Ok(())
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for FrameId {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl From<FrameId> for Cow<'static, str> {
	fn from(value: FrameId) -> Self {
		value.into_inner()
	}
}
