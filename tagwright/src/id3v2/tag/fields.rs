//! The [`FieldKey`] operations of [`Id3v2Tag`]
//!
//! A field is made up of every frame matching its [`FieldMapping`]. A frame may hold multiple
//! values, separated by `'\0'`, so a field's values are ordered by frame first, then by their
//! position in the frame.

use super::Id3v2Tag;
use crate::error::{FieldOperationError, FieldOperationErrorKind, Result, TagwrightError};
use crate::field::{FieldKey, FieldMapping, SubKey};
use crate::id3v2::items::{join_values, split_values};
use crate::id3v2::util::catalog::FrameKind;
use crate::id3v2::{
	CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, Frame, FrameBody, Id3v2Version,
	NumberPairFrame, TextInformationFrame, UniqueFileIdentifierFrame, UrlLinkFrame,
};
use crate::util::text::TextEncoding;

impl Id3v2Tag {
	/// Whether any frame holds a non-empty value for `key`
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	/// tag.set_field(FieldKey::MusicBrainzTrackId, "fred")?;
	///
	/// assert!(tag.has_field(FieldKey::MusicBrainzTrackId));
	/// assert!(!tag.has_field(FieldKey::MusicBrainzArtistId));
	/// # Ok(()) }
	/// ```
	pub fn has_field(&self, key: FieldKey) -> bool {
		let Some(mapping) = key.mapping(self.version) else {
			return false;
		};

		self.matching_frames(&mapping)
			.any(|frame| !frame_values(frame, mapping.sub_key).is_empty())
	}

	/// The first value of `key`
	pub fn get_first(&self, key: FieldKey) -> Option<String> {
		let mapping = key.mapping(self.version)?;
		self.matching_frames(&mapping)
			.find_map(|frame| frame_values(frame, mapping.sub_key).into_iter().next())
	}

	/// Every value of `key`
	///
	/// This will be empty if `key` has no mapping in the tag's version.
	pub fn get_all(&self, key: FieldKey) -> Vec<String> {
		let Some(mapping) = key.mapping(self.version) else {
			return Vec::new();
		};

		self.matching_frames(&mapping)
			.flat_map(|frame| frame_values(frame, mapping.sub_key))
			.collect()
	}

	/// The value at `index`, in the same order as [`Id3v2Tag::get_all`]
	pub fn get_field_at(&self, key: FieldKey, index: usize) -> Option<String> {
		self.get_all(key).into_iter().nth(index)
	}

	/// The frames holding at least one value of `key`
	///
	/// A single frame may hold multiple values, so this is never longer than
	/// [`Id3v2Tag::get_all`].
	pub fn get_fields(&self, key: FieldKey) -> Vec<&Frame> {
		let Some(mapping) = key.mapping(self.version) else {
			return Vec::new();
		};

		self.matching_frames(&mapping)
			.filter(|frame| !frame_values(frame, mapping.sub_key).is_empty())
			.collect()
	}

	/// Replace the first value of `key`, creating the field if necessary
	///
	/// For [`FieldKey::TrackNumber`], [`FieldKey::TrackTotal`], [`FieldKey::DiscNumber`], and
	/// [`FieldKey::DiscTotal`], only that half of the pair is changed.
	///
	/// # Errors
	///
	/// * `key` has no mapping in the tag's version
	/// * `value` is empty
	/// * `key` is numeric, and `value` is not an unsigned integer
	/// * `key` is a URL, and `value` is not valid Latin-1
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	/// tag.set_field(FieldKey::TrackNumber, "3")?;
	/// tag.set_field(FieldKey::TrackTotal, "12")?;
	///
	/// assert_eq!(tag.get_first(FieldKey::TrackNumber).as_deref(), Some("3"));
	/// assert_eq!(tag.get_first(FieldKey::TrackTotal).as_deref(), Some("12"));
	/// assert_eq!(tag.len(), 1);
	///
	/// assert!(tag.set_field(FieldKey::TrackTotal, "twelve").is_err());
	/// # Ok(()) }
	/// ```
	pub fn set_field(&mut self, key: FieldKey, value: &str) -> Result<()> {
		let mapping = self.checked_mapping(key, value)?;
		let version = self.version;

		match mapping.sub_key {
			Some(sub_key @ (SubKey::Numerator | SubKey::Denominator)) => {
				let number = self.parse_number(key, value)?;

				let existing = self
					.frames
					.iter_mut()
					.filter(|frame| in_field(frame, &mapping))
					.find_map(|frame| match &mut frame.body {
						FrameBody::NumberPair(pair) => Some(pair),
						_ => None,
					});

				match existing {
					Some(pair) => set_pair_component(pair, sub_key, number),
					None => {
						let mut pair =
							NumberPairFrame::new(TextEncoding::preferred(version, value), None, None);
						set_pair_component(&mut pair, sub_key, number);
						self.push(Frame::new(mapping.id.clone(), pair))?;
					},
				}
			},
			Some(SubKey::Owner(_)) => {
				let existing = self
					.frames
					.iter_mut()
					.filter(|frame| in_field(frame, &mapping))
					.find_map(|frame| match &mut frame.body {
						FrameBody::UniqueFileIdentifier(ufid) => Some(ufid),
						_ => None,
					});

				match existing {
					Some(ufid) => ufid.identifier = value.as_bytes().to_vec(),
					None => self.push_new_frame(key, &mapping, value)?,
				}
			},
			_ => {
				let existing = self
					.frames
					.iter_mut()
					.filter(|frame| in_field(frame, &mapping))
					.find_map(|frame| text_content_mut(&mut frame.body));

				match existing {
					Some((content, encoding)) => {
						let mut values = split_values(content)
							.map(String::from)
							.collect::<Vec<_>>();

						match values.first_mut() {
							Some(first) => *first = value.to_string(),
							None => values.push(value.to_string()),
						}

						*content = join_values(values.iter().map(String::as_str));
						widen(encoding, version, value);
					},
					None => self.push_new_frame(key, &mapping, value)?,
				}
			},
		}

		Ok(())
	}

	/// Append a value to `key`
	///
	/// The value is added to the first frame of the field, so this never creates a new frame if one
	/// already exists. For fields that only hold one value (number pairs and `UFID` frames), this
	/// acts like [`Id3v2Tag::set_field`] if there is no value yet.
	///
	/// # Errors
	///
	/// * See [`Id3v2Tag::set_field`]
	/// * The field only holds one value, and it is already present
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V3);
	/// tag.add_field(FieldKey::Barcode, "BARCODE1")?;
	/// tag.add_field(FieldKey::Barcode, "BARCODE2")?;
	///
	/// assert_eq!(tag.get_all(FieldKey::Barcode), ["BARCODE1", "BARCODE2"]);
	/// assert_eq!(tag.get_fields(FieldKey::Barcode).len(), 1);
	///
	/// tag.add_field(FieldKey::TrackNumber, "1")?;
	/// assert!(tag.add_field(FieldKey::TrackNumber, "2").is_err());
	/// # Ok(()) }
	/// ```
	pub fn add_field(&mut self, key: FieldKey, value: &str) -> Result<()> {
		let mapping = self.checked_mapping(key, value)?;
		let version = self.version;

		if matches!(
			mapping.sub_key,
			Some(SubKey::Numerator | SubKey::Denominator | SubKey::Owner(_))
		) {
			if self.get_first(key).is_some() {
				return Err(self.field_error(key, FieldOperationErrorKind::SingleValued));
			}

			return self.set_field(key, value);
		}

		let existing = self
			.frames
			.iter_mut()
			.filter(|frame| in_field(frame, &mapping))
			.find_map(|frame| text_content_mut(&mut frame.body));

		match existing {
			Some((content, encoding)) => {
				let mut values = split_values(content).collect::<Vec<_>>();
				values.push(value);

				*content = join_values(values);
				widen(encoding, version, value);
			},
			None => self.push_new_frame(key, &mapping, value)?,
		}

		Ok(())
	}

	/// Remove every value of `key`
	///
	/// Frames left empty are removed. For number pairs, only that half of the pair is removed.
	///
	/// # Errors
	///
	/// * `key` has no mapping in the tag's version
	pub fn delete_field(&mut self, key: FieldKey) -> Result<()> {
		let mapping = self.mapping(key)?;

		match mapping.sub_key {
			Some(sub_key @ (SubKey::Numerator | SubKey::Denominator)) => {
				for frame in self.frames.iter_mut().filter(|f| in_field(f, &mapping)) {
					if let FrameBody::NumberPair(pair) = &mut frame.body {
						clear_pair_component(pair, sub_key);
					}
				}

				self.frames
					.retain(|frame| !(in_field(frame, &mapping) && frame.is_empty()));
			},
			_ => self.frames.retain(|frame| !in_field(frame, &mapping)),
		}

		Ok(())
	}

	/// Remove the value at `index`, in the same order as [`Id3v2Tag::get_all`]
	///
	/// If the frame holding the value is left empty, it is removed.
	///
	/// # Errors
	///
	/// * `key` has no mapping in the tag's version
	/// * `index` is out of range
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::FieldKey;
	/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let mut tag = Id3v2Tag::new(Id3v2Version::V4);
	/// tag.add_field(FieldKey::Composer, "Foo")?;
	/// tag.add_field(FieldKey::Composer, "Bar")?;
	///
	/// tag.delete_field_at(FieldKey::Composer, 0)?;
	/// assert_eq!(tag.get_all(FieldKey::Composer), ["Bar"]);
	///
	/// assert!(tag.delete_field_at(FieldKey::Composer, 1).is_err());
	/// # Ok(()) }
	/// ```
	pub fn delete_field_at(&mut self, key: FieldKey, index: usize) -> Result<()> {
		let mapping = self.mapping(key)?;

		let mut len = 0;
		let mut target = None;
		for (frame_idx, frame) in self.frames.iter().enumerate() {
			if !in_field(frame, &mapping) {
				continue;
			}

			let count = frame_values(frame, mapping.sub_key).len();
			if target.is_none() && index < len + count {
				target = Some((frame_idx, index - len));
			}

			len += count;
		}

		let Some((frame_idx, value_idx)) = target else {
			return Err(self.field_error(
				key,
				FieldOperationErrorKind::IndexOutOfRange { index, len },
			));
		};

		let frame = &mut self.frames[frame_idx];
		match (&mut frame.body, mapping.sub_key) {
			(FrameBody::NumberPair(pair), Some(sub_key)) => clear_pair_component(pair, sub_key),
			(FrameBody::UniqueFileIdentifier(ufid), _) => ufid.identifier.clear(),
			(body, _) => {
				if let Some((content, _)) = text_content_mut(body) {
					let mut values = split_values(content).collect::<Vec<_>>();
					values.remove(value_idx);
					*content = join_values(values);
				}
			},
		}

		if frame.is_empty() {
			self.frames.remove(frame_idx);
		}

		Ok(())
	}
}

impl Id3v2Tag {
	fn matching_frames<'a, 'm>(
		&'a self,
		mapping: &'m FieldMapping,
	) -> impl Iterator<Item = &'a Frame> + use<'a, 'm> {
		self.frames.iter().filter(move |frame| in_field(frame, mapping))
	}

	fn field_error(&self, key: FieldKey, kind: FieldOperationErrorKind) -> TagwrightError {
		FieldOperationError {
			key,
			version: self.version,
			kind,
		}
		.into()
	}

	fn mapping(&self, key: FieldKey) -> Result<FieldMapping> {
		key.mapping(self.version)
			.ok_or_else(|| self.field_error(key, FieldOperationErrorKind::NoMapping))
	}

	// The mapping for a field about to be written to
	fn checked_mapping(&self, key: FieldKey, value: &str) -> Result<FieldMapping> {
		let mapping = self.mapping(key)?;

		if value.is_empty() {
			return Err(self.field_error(key, FieldOperationErrorKind::EmptyValue));
		}

		if matches!(mapping.kind, FrameKind::Url | FrameKind::UserUrl)
			&& !TextEncoding::verify_latin1(value)
		{
			return Err(self.field_error(
				key,
				FieldOperationErrorKind::InvalidValue("URLs must be valid Latin-1"),
			));
		}

		Ok(mapping)
	}

	fn parse_number(&self, key: FieldKey, value: &str) -> Result<(u32, usize)> {
		let trimmed = value.trim();
		match trimmed.parse::<u32>() {
			Ok(number) => Ok((number, trimmed.len())),
			Err(_) => Err(self.field_error(
				key,
				FieldOperationErrorKind::InvalidValue("expected an unsigned integer"),
			)),
		}
	}

	fn push_new_frame(&mut self, key: FieldKey, mapping: &FieldMapping, value: &str) -> Result<()> {
		let Some(body) = new_body(mapping, self.version, value) else {
			return Err(self.field_error(key, FieldOperationErrorKind::NoMapping));
		};

		log::trace!("Creating a new {} frame for {key}", mapping.id);
		self.push(Frame::new(mapping.id.clone(), body))
	}
}

// Whether the frame is part of the field described by `mapping`
fn in_field(frame: &Frame, mapping: &FieldMapping) -> bool {
	if frame.id() != mapping.id() {
		return false;
	}

	match (&frame.body, mapping.sub_key) {
		(FrameBody::UserText(frame), Some(SubKey::Description(description))) => {
			frame.description == description
		},
		(FrameBody::UserUrl(frame), Some(SubKey::Description(description))) => {
			frame.description == description
		},
		(FrameBody::Comment(frame), Some(SubKey::Description(description))) => {
			frame.description == description
		},
		(FrameBody::UniqueFileIdentifier(frame), Some(SubKey::Owner(owner))) => frame.owner == owner,
		(FrameBody::NumberPair(_), Some(SubKey::Numerator | SubKey::Denominator)) => true,
		(FrameBody::Text(_) | FrameBody::Url(_), None) => true,
		_ => false,
	}
}

fn frame_values(frame: &Frame, sub_key: Option<SubKey>) -> Vec<String> {
	match (&frame.body, sub_key) {
		(FrameBody::NumberPair(pair), Some(SubKey::Numerator)) => {
			pair.numerator_text().into_iter().collect()
		},
		(FrameBody::NumberPair(pair), Some(SubKey::Denominator)) => {
			pair.denominator_text().into_iter().collect()
		},
		(FrameBody::UniqueFileIdentifier(ufid), _) => {
			if ufid.identifier.is_empty() {
				return Vec::new();
			}

			vec![ufid.identifier_text()]
		},
		(body, _) => text_content(body)
			.map(|content| split_values(content).map(String::from).collect())
			.unwrap_or_default(),
	}
}

fn text_content(body: &FrameBody) -> Option<&str> {
	match body {
		FrameBody::Text(frame) => Some(frame.value.as_str()),
		FrameBody::Url(frame) => Some(frame.url.as_str()),
		FrameBody::UserText(frame) => Some(frame.content.as_str()),
		FrameBody::UserUrl(frame) => Some(frame.content.as_str()),
		FrameBody::Comment(frame) => Some(frame.content.as_str()),
		_ => None,
	}
}

// The content of a text-like frame, along with its encoding if the content is affected by it
fn text_content_mut(body: &mut FrameBody) -> Option<(&mut String, Option<&mut TextEncoding>)> {
	match body {
		FrameBody::Text(frame) => Some((&mut frame.value, Some(&mut frame.encoding))),
		FrameBody::Url(frame) => Some((&mut frame.url, None)),
		FrameBody::UserText(frame) => Some((&mut frame.content, Some(&mut frame.encoding))),
		// The encoding of a WXXX frame only applies to its description
		FrameBody::UserUrl(frame) => Some((&mut frame.content, None)),
		FrameBody::Comment(frame) => Some((&mut frame.content, Some(&mut frame.encoding))),
		_ => None,
	}
}

fn widen(encoding: Option<&mut TextEncoding>, version: Id3v2Version, value: &str) {
	if let Some(encoding) = encoding {
		*encoding = encoding.accommodate(version, value);
	}
}

fn set_pair_component(pair: &mut NumberPairFrame, sub_key: SubKey, (number, width): (u32, usize)) {
	match sub_key {
		SubKey::Numerator => pair.set_numerator(Some(number), width),
		_ => pair.denominator = Some(number),
	}
}

fn clear_pair_component(pair: &mut NumberPairFrame, sub_key: SubKey) {
	match sub_key {
		SubKey::Numerator => pair.set_numerator(None, 0),
		_ => pair.denominator = None,
	}
}

fn new_body(mapping: &FieldMapping, version: Id3v2Version, value: &str) -> Option<FrameBody> {
	let encoding = TextEncoding::preferred(version, value);

	let description = match mapping.sub_key {
		Some(SubKey::Description(description)) => description,
		_ => "",
	};

	let body = match mapping.kind {
		FrameKind::Text => TextInformationFrame::new(encoding, value).into(),
		FrameKind::Url => UrlLinkFrame::new(value).into(),
		FrameKind::UserText => ExtendedTextFrame::new(encoding, description, value).into(),
		FrameKind::UserUrl => ExtendedUrlFrame::new(
			TextEncoding::preferred(version, description),
			description,
			value,
		)
		.into(),
		FrameKind::Comment => CommentFrame::new(
			encoding,
			CommentFrame::DEFAULT_LANGUAGE,
			description,
			value,
		)
		.into(),
		FrameKind::UniqueFileIdentifier => {
			let Some(SubKey::Owner(owner)) = mapping.sub_key else {
				return None;
			};

			UniqueFileIdentifierFrame::new(owner, value.as_bytes().to_vec()).into()
		},
		_ => return None,
	};

	Some(body)
}
