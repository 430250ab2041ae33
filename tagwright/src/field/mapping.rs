use super::FieldKey;
use crate::id3v2::util::catalog;
use crate::id3v2::util::catalog::FrameKind;
use crate::id3v2::{FrameId, Id3v2Version, UniqueFileIdentifierFrame};

/// Narrows a [`FieldMapping`] down to part of a frame
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubKey {
	/// The description of a `TXXX`, `WXXX`, `COMM`, or `USLT` frame
	Description(&'static str),
	/// The owner of a `UFID` frame
	Owner(&'static str),
	/// The first half of a number pair (`TRCK`, `TPOS`)
	Numerator,
	/// The second half of a number pair (`TRCK`, `TPOS`)
	Denominator,
}

/// Where a [`FieldKey`] is stored in a tag of a specific version
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldMapping {
	pub(crate) id: FrameId,
	pub(crate) sub_key: Option<SubKey>,
	pub(crate) kind: FrameKind,
}

impl FieldMapping {
	/// The ID of the frame(s) holding the field
	pub fn id(&self) -> &FrameId {
		&self.id
	}

	/// The part of the frame(s) holding the field, if the frame alone isn't enough
	pub fn sub_key(&self) -> Option<SubKey> {
		self.sub_key
	}

	/// The body layout of the frame(s)
	pub fn kind(&self) -> FrameKind {
		self.kind
	}
}

impl FieldKey {
	/// Where the key is stored in a tag of `version`
	///
	/// Returns `None` if `version` has nowhere to store the key.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::field::{FieldKey, SubKey};
	/// use tagwright::id3v2::Id3v2Version;
	///
	/// let mapping = FieldKey::TrackTotal.mapping(Id3v2Version::V2).unwrap();
	/// assert_eq!(mapping.id().as_str(), "TRK");
	/// assert_eq!(mapping.sub_key(), Some(SubKey::Denominator));
	///
	/// let mapping = FieldKey::Barcode.mapping(Id3v2Version::V4).unwrap();
	/// assert_eq!(mapping.id().as_str(), "TXXX");
	/// assert_eq!(mapping.sub_key(), Some(SubKey::Description("BARCODE")));
	///
	/// // The encoding time only exists in ID3v2.4
	/// assert!(FieldKey::EncodingTime.mapping(Id3v2Version::V3).is_none());
	/// ```
	pub fn mapping(self, version: Id3v2Version) -> Option<FieldMapping> {
		let (id, sub_key) = match version {
			Id3v2Version::V4 => {
				let (id, sub_key) = v4_mapping(self);
				(FrameId::new_static(id), sub_key)
			},
			Id3v2Version::V3 => v3_mapping(self)?,
			Id3v2Version::V2 => {
				let (id, sub_key) = v3_mapping(self)?;
				let id = catalog::translate_step(&id, Id3v2Version::V3, Id3v2Version::V2)?;
				(id, sub_key)
			},
		};

		let kind = catalog::body_kind(id.as_str(), version);
		Some(FieldMapping { id, sub_key, kind })
	}
}

// ID3v2.3 differs from ID3v2.4 only where a frame has no equivalent
fn v3_mapping(key: FieldKey) -> Option<(FrameId, Option<SubKey>)> {
	if key == FieldKey::Mood {
		return Some((
			FrameId::new_static("TXXX"),
			Some(SubKey::Description("MOOD")),
		));
	}

	let (id, sub_key) = v4_mapping(key);
	let id = catalog::translate_step(
		&FrameId::new_static(id),
		Id3v2Version::V4,
		Id3v2Version::V3,
	)?;

	Some((id, sub_key))
}

fn v4_mapping(key: FieldKey) -> (&'static str, Option<SubKey>) {
	let user_text = |description| ("TXXX", Some(SubKey::Description(description)));
	let user_url = |description| ("WXXX", Some(SubKey::Description(description)));

	match key {
		FieldKey::Album => ("TALB", None),
		FieldKey::AlbumArtist => ("TPE2", None),
		FieldKey::AlbumArtistSort => ("TSO2", None),
		FieldKey::AlbumSort => ("TSOA", None),
		FieldKey::AmazonId => user_text("ASIN"),
		FieldKey::Artist => ("TPE1", None),
		FieldKey::ArtistSort => ("TSOP", None),
		FieldKey::Barcode => user_text("BARCODE"),
		FieldKey::Bpm => ("TBPM", None),
		FieldKey::CatalogNumber => user_text("CATALOGNUMBER"),
		FieldKey::Comment => ("COMM", Some(SubKey::Description(""))),
		FieldKey::Composer => ("TCOM", None),
		FieldKey::ComposerSort => ("TSOC", None),
		FieldKey::Conductor => ("TPE3", None),
		FieldKey::Copyright => ("TCOP", None),
		FieldKey::DiscNumber => ("TPOS", Some(SubKey::Numerator)),
		FieldKey::DiscTotal => ("TPOS", Some(SubKey::Denominator)),
		FieldKey::Encoder => ("TENC", None),
		FieldKey::EncodingTime => ("TDEN", None),
		FieldKey::Genre => ("TCON", None),
		FieldKey::Grouping => ("TIT1", None),
		FieldKey::IsCompilation => ("TCMP", None),
		FieldKey::Isrc => ("TSRC", None),
		FieldKey::InitialKey => ("TKEY", None),
		FieldKey::Language => ("TLAN", None),
		FieldKey::Label => ("TPUB", None),
		FieldKey::Lyricist => ("TEXT", None),
		FieldKey::Lyrics => ("USLT", Some(SubKey::Description(""))),
		FieldKey::Media => ("TMED", None),
		FieldKey::Mood => ("TMOO", None),
		FieldKey::MusicBrainzArtistId => user_text("MusicBrainz Artist Id"),
		FieldKey::MusicBrainzReleaseId => user_text("MusicBrainz Album Id"),
		FieldKey::MusicBrainzReleaseArtistId => user_text("MusicBrainz Album Artist Id"),
		FieldKey::MusicBrainzReleaseGroupId => user_text("MusicBrainz Release Group Id"),
		FieldKey::MusicBrainzReleaseTrackId => user_text("MusicBrainz Release Track Id"),
		FieldKey::MusicBrainzTrackId => (
			"UFID",
			Some(SubKey::Owner(UniqueFileIdentifierFrame::MUSICBRAINZ_OWNER)),
		),
		FieldKey::MusicBrainzWorkId => user_text("MusicBrainz Work Id"),
		FieldKey::OriginalYear => ("TDOR", None),
		FieldKey::Script => user_text("SCRIPT"),
		FieldKey::Subtitle => ("TIT3", None),
		FieldKey::Title => ("TIT2", None),
		FieldKey::TitleSort => ("TSOT", None),
		FieldKey::TrackNumber => ("TRCK", Some(SubKey::Numerator)),
		FieldKey::TrackTotal => ("TRCK", Some(SubKey::Denominator)),
		FieldKey::UrlDiscogsArtistSite => user_url("DISCOGS_ARTIST"),
		FieldKey::UrlDiscogsReleaseSite => user_url("DISCOGS_RELEASE"),
		FieldKey::UrlLyricsSite => user_url("LYRICS_SITE"),
		FieldKey::UrlOfficialArtistSite => ("WOAR", None),
		FieldKey::UrlOfficialReleaseSite => ("WOAF", None),
		FieldKey::UrlPublisherSite => ("WPUB", None),
		FieldKey::UrlWikipediaArtistSite => user_url("WIKIPEDIA_ARTIST"),
		FieldKey::UrlWikipediaReleaseSite => user_url("WIKIPEDIA_RELEASE"),
		FieldKey::Year => ("TDRC", None),
	}
}
