use std::fmt::{Display, Formatter};
use std::str::FromStr;

// This defines `FieldKey`, along with its string representations
//
// Usage:
//
// gen_field_keys! {
//     /// Doc comment
//     Variant => "STRING_FORM",
// }
macro_rules! gen_field_keys {
	(
		$(
			$(#[$variant_meta:meta])*
			$variant:ident => $name:literal
		),+ $(,)?
	) => {
		/// A version-agnostic representation of a tag field
		///
		/// See [`FieldKey::mapping`] for how each key is stored in a tag.
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
		#[non_exhaustive]
		pub enum FieldKey {
			$(
				$(#[$variant_meta])*
				$variant,
			)+
		}

		impl FieldKey {
			/// Every available key
			pub const ALL: &'static [FieldKey] = &[$(FieldKey::$variant,)+];

			/// The stable string form of the key
			///
			/// # Examples
			///
			/// ```rust
			/// use tagwright::field::FieldKey;
			///
			/// assert_eq!(FieldKey::TrackTotal.as_str(), "TRACK_TOTAL");
			/// ```
			pub fn as_str(self) -> &'static str {
				match self {
					$(FieldKey::$variant => $name,)+
				}
			}
		}

		impl FromStr for FieldKey {
			type Err = UnknownFieldKey;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($name => Ok(FieldKey::$variant),)+
					_ => Err(UnknownFieldKey(s.to_string())),
				}
			}
		}
	};
}

gen_field_keys! {
	/// The album title
	Album => "ALBUM",
	/// The album artist
	AlbumArtist => "ALBUM_ARTIST",
	/// The album artist used for sorting
	AlbumArtistSort => "ALBUM_ARTIST_SORT",
	/// The album title used for sorting
	AlbumSort => "ALBUM_SORT",
	/// The Amazon standard identification number
	AmazonId => "AMAZON_ID",
	/// The performing artist
	Artist => "ARTIST",
	/// The performing artist used for sorting
	ArtistSort => "ARTIST_SORT",
	/// The barcode of the release (UPC, EAN, etc.)
	Barcode => "BARCODE",
	/// Beats per minute
	Bpm => "BPM",
	/// The catalog number assigned by the record label
	CatalogNumber => "CATALOG_NO",
	/// A comment without a description
	Comment => "COMMENT",
	/// The composer
	Composer => "COMPOSER",
	/// The composer used for sorting
	ComposerSort => "COMPOSER_SORT",
	/// The conductor
	Conductor => "CONDUCTOR",
	/// The copyright message
	Copyright => "COPYRIGHT",
	/// The disc number
	DiscNumber => "DISC_NO",
	/// The total number of discs
	DiscTotal => "DISC_TOTAL",
	/// The software used to encode the audio
	Encoder => "ENCODER",
	/// The time the audio was encoded
	EncodingTime => "ENCODING_TIME",
	/// The genre
	Genre => "GENRE",
	/// The content group
	Grouping => "GROUPING",
	/// Whether the track is part of a compilation
	///
	/// The value is stored and returned as-is, so it may be `"1"`/`"0"` or `"true"`/`"false"`
	/// depending on the application that wrote it.
	IsCompilation => "IS_COMPILATION",
	/// The International Standard Recording Code
	Isrc => "ISRC",
	/// The initial key
	InitialKey => "KEY",
	/// The language(s) of the lyrics
	Language => "LANGUAGE",
	/// The label or publisher
	Label => "RECORD_LABEL",
	/// The lyricist
	Lyricist => "LYRICIST",
	/// Unsynchronized lyrics without a description
	Lyrics => "LYRICS",
	/// The media type the audio was sourced from
	Media => "MEDIA",
	/// The mood
	Mood => "MOOD",
	/// The MusicBrainz artist ID
	MusicBrainzArtistId => "MUSICBRAINZ_ARTISTID",
	/// The MusicBrainz release ID
	MusicBrainzReleaseId => "MUSICBRAINZ_RELEASEID",
	/// The MusicBrainz release artist ID
	MusicBrainzReleaseArtistId => "MUSICBRAINZ_RELEASEARTISTID",
	/// The MusicBrainz release group ID
	MusicBrainzReleaseGroupId => "MUSICBRAINZ_RELEASE_GROUP_ID",
	/// The MusicBrainz release track ID
	MusicBrainzReleaseTrackId => "MUSICBRAINZ_RELEASE_TRACK_ID",
	/// The MusicBrainz recording ID, stored in a `UFID` frame
	MusicBrainzTrackId => "MUSICBRAINZ_TRACK_ID",
	/// The MusicBrainz work ID
	MusicBrainzWorkId => "MUSICBRAINZ_WORK_ID",
	/// The original release year
	OriginalYear => "ORIGINAL_YEAR",
	/// The script used for the track listing
	Script => "SCRIPT",
	/// The subtitle
	Subtitle => "SUBTITLE",
	/// The track title
	Title => "TITLE",
	/// The track title used for sorting
	TitleSort => "TITLE_SORT",
	/// The track number
	TrackNumber => "TRACK",
	/// The total number of tracks
	TrackTotal => "TRACK_TOTAL",
	/// The artist's Discogs page
	UrlDiscogsArtistSite => "URL_DISCOGS_ARTIST_SITE",
	/// The release's Discogs page
	UrlDiscogsReleaseSite => "URL_DISCOGS_RELEASE_SITE",
	/// A page containing the lyrics
	UrlLyricsSite => "URL_LYRICS_SITE",
	/// The artist's official page
	UrlOfficialArtistSite => "URL_OFFICIAL_ARTIST_SITE",
	/// The release's official page
	UrlOfficialReleaseSite => "URL_OFFICIAL_RELEASE_SITE",
	/// The publisher's official page
	UrlPublisherSite => "URL_PUBLISHER_SITE",
	/// The artist's Wikipedia page
	UrlWikipediaArtistSite => "URL_WIKIPEDIA_ARTIST_SITE",
	/// The release's Wikipedia page
	UrlWikipediaReleaseSite => "URL_WIKIPEDIA_RELEASE_SITE",
	/// The recording date
	Year => "YEAR",
}

impl Display for FieldKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The error returned when parsing an unrecognized [`FieldKey`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFieldKey(String);

impl Display for UnknownFieldKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Unknown field key: \"{}\"", self.0)
	}
}

impl std::error::Error for UnknownFieldKey {}
