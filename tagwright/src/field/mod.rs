//! Version-agnostic access to tag fields
//!
//! A [`FieldKey`] names a logical field, such as [`FieldKey::Artist`] or [`FieldKey::TrackTotal`].
//! Each key maps to a frame ID in every [`Id3v2Version`](crate::id3v2::Id3v2Version), optionally
//! narrowed down by a [`SubKey`], see [`FieldKey::mapping`].
//!
//! The field operations themselves live on [`Id3v2Tag`](crate::id3v2::Id3v2Tag):
//!
//! ```rust
//! use tagwright::field::FieldKey;
//! use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
//!
//! # fn main() -> tagwright::error::Result<()> {
//! let mut tag = Id3v2Tag::new(Id3v2Version::V3);
//!
//! tag.add_field(FieldKey::Composer, "Foo")?;
//! tag.add_field(FieldKey::Composer, "Bar")?;
//!
//! assert_eq!(tag.get_all(FieldKey::Composer), ["Foo", "Bar"]);
//! assert_eq!(tag.get_fields(FieldKey::Composer).len(), 1);
//! # Ok(()) }
//! ```

mod key;
mod mapping;

pub use key::{FieldKey, UnknownFieldKey};
pub use mapping::{FieldMapping, SubKey};
