//! Known frame IDs, and how they relate across versions
//!
//! Every version has its own set of frame IDs. The IDs defined by the version's standard
//! are "supported", while those popularized by other software (mostly iTunes) are
//! "extensions". Both are valid to read and write.
//!
//! Frame IDs can only be translated between adjacent versions. Translating between ID3v2.2 and
//! ID3v2.4 goes through ID3v2.3.

use crate::id3v2::{FrameId, Id3v2Version};

/// The body layout of a frame
///
/// This decides which [`FrameBody`](crate::id3v2::FrameBody) variant a frame is decoded as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameKind {
	/// See [`TextInformationFrame`](crate::id3v2::TextInformationFrame)
	Text,
	/// See [`NumberPairFrame`](crate::id3v2::NumberPairFrame)
	NumberPair,
	/// See [`UrlLinkFrame`](crate::id3v2::UrlLinkFrame)
	Url,
	/// See [`ExtendedTextFrame`](crate::id3v2::ExtendedTextFrame)
	UserText,
	/// See [`ExtendedUrlFrame`](crate::id3v2::ExtendedUrlFrame)
	UserUrl,
	/// See [`CommentFrame`](crate::id3v2::CommentFrame)
	Comment,
	/// See [`UniqueFileIdentifierFrame`](crate::id3v2::UniqueFileIdentifierFrame)
	UniqueFileIdentifier,
	/// See [`RelativeVolumeAdjustmentFrame`](crate::id3v2::RelativeVolumeAdjustmentFrame)
	RelativeVolumeAdjustment,
	/// See [`VolumeAdjustmentFrame`](crate::id3v2::VolumeAdjustmentFrame)
	VolumeAdjustment,
	/// See [`BinaryFrame`](crate::id3v2::BinaryFrame)
	Binary,
}

#[rustfmt::skip]
const V4_SUPPORTED: &[&str] = &[
	"AENC", "APIC", "ASPI", "COMM", "COMR", "ENCR", "EQU2", "ETCO", "GEOB", "GRID", "LINK",
	"MCDI", "MLLT", "OWNE", "PRIV", "PCNT", "POPM", "POSS", "RBUF", "RVA2", "RVRB", "SEEK",
	"SIGN", "SYLT", "SYTC", "TALB", "TBPM", "TCOM", "TCON", "TCOP", "TDEN", "TDLY", "TDOR",
	"TDRC", "TDRL", "TDTG", "TENC", "TEXT", "TFLT", "TIPL", "TIT1", "TIT2", "TIT3", "TKEY",
	"TLAN", "TLEN", "TMCL", "TMED", "TMOO", "TOAL", "TOFN", "TOLY", "TOPE", "TOWN", "TPE1",
	"TPE2", "TPE3", "TPE4", "TPOS", "TPRO", "TPUB", "TRCK", "TRSN", "TRSO", "TSOA", "TSOP",
	"TSOT", "TSRC", "TSSE", "TSST", "TXXX", "UFID", "USER", "USLT", "WCOM", "WCOP", "WOAF",
	"WOAR", "WOAS", "WORS", "WPAY", "WPUB", "WXXX",
];

#[rustfmt::skip]
const V4_EXTENSIONS: &[&str] = &[
	"TCMP", "TSO2", "TSOC", "GRP1", "MVNM", "MVIN", "PCST", "TCAT", "TDES", "TGID", "WFED",
];

#[rustfmt::skip]
const V3_SUPPORTED: &[&str] = &[
	"AENC", "APIC", "COMM", "COMR", "ENCR", "EQUA", "ETCO", "GEOB", "GRID", "IPLS", "LINK",
	"MCDI", "MLLT", "OWNE", "PRIV", "PCNT", "POPM", "POSS", "RBUF", "RVAD", "RVRB", "SYLT",
	"SYTC", "TALB", "TBPM", "TCOM", "TCON", "TCOP", "TDAT", "TDLY", "TENC", "TEXT", "TFLT",
	"TIME", "TIT1", "TIT2", "TIT3", "TKEY", "TLAN", "TLEN", "TMED", "TOAL", "TOFN", "TOLY",
	"TOPE", "TORY", "TOWN", "TPE1", "TPE2", "TPE3", "TPE4", "TPOS", "TPUB", "TRCK", "TRDA",
	"TRSN", "TRSO", "TSIZ", "TSRC", "TSSE", "TYER", "TXXX", "UFID", "USER", "USLT", "WCOM",
	"WCOP", "WOAF", "WOAR", "WOAS", "WORS", "WPAY", "WPUB", "WXXX",
];

#[rustfmt::skip]
const V3_EXTENSIONS: &[&str] = &[
	"TCMP", "TSO2", "TSOC", "TSOA", "TSOP", "TSOT", "GRP1", "MVNM", "MVIN", "PCST", "TCAT",
	"TDES", "TGID", "WFED",
];

#[rustfmt::skip]
const V2_SUPPORTED: &[&str] = &[
	"BUF", "CNT", "COM", "CRA", "CRM", "EQU", "ETC", "GEO", "IPL", "LNK", "MCI", "MLL", "PIC",
	"POP", "REV", "RVA", "SLT", "STC", "TAL", "TBP", "TCM", "TCO", "TCR", "TDA", "TDY", "TEN",
	"TFT", "TIM", "TKE", "TLA", "TLE", "TMT", "TOA", "TOF", "TOL", "TOR", "TOT", "TP1", "TP2",
	"TP3", "TP4", "TPA", "TPB", "TRC", "TRD", "TRK", "TSI", "TSS", "TT1", "TT2", "TT3", "TXT",
	"TXX", "TYE", "UFI", "ULT", "WAF", "WAR", "WAS", "WCM", "WCP", "WPB", "WXX",
];

#[rustfmt::skip]
const V2_EXTENSIONS: &[&str] = &[
	"TCP", "TS2", "TSC", "TSA", "TSP", "TST", "GP1", "MVN", "MVI", "PCS", "TCT", "TDS", "TID",
	"WFD",
];

// ID3v2.2 <-> ID3v2.3, every pair maps both ways
#[rustfmt::skip]
const V2_V3_PAIRS: &[(&str, &str)] = &[
	("BUF", "RBUF"), ("CNT", "PCNT"), ("COM", "COMM"), ("CRA", "AENC"), ("EQU", "EQUA"),
	("ETC", "ETCO"), ("GEO", "GEOB"), ("IPL", "IPLS"), ("LNK", "LINK"), ("MCI", "MCDI"),
	("MLL", "MLLT"), ("PIC", "APIC"), ("POP", "POPM"), ("REV", "RVRB"), ("RVA", "RVAD"),
	("SLT", "SYLT"), ("STC", "SYTC"), ("TAL", "TALB"), ("TBP", "TBPM"), ("TCM", "TCOM"),
	("TCO", "TCON"), ("TCR", "TCOP"), ("TDA", "TDAT"), ("TDY", "TDLY"), ("TEN", "TENC"),
	("TFT", "TFLT"), ("TIM", "TIME"), ("TKE", "TKEY"), ("TLA", "TLAN"), ("TLE", "TLEN"),
	("TMT", "TMED"), ("TOA", "TOPE"), ("TOF", "TOFN"), ("TOL", "TOLY"), ("TOR", "TORY"),
	("TOT", "TOAL"), ("TP1", "TPE1"), ("TP2", "TPE2"), ("TP3", "TPE3"), ("TP4", "TPE4"),
	("TPA", "TPOS"), ("TPB", "TPUB"), ("TRC", "TSRC"), ("TRD", "TRDA"), ("TRK", "TRCK"),
	("TSI", "TSIZ"), ("TSS", "TSSE"), ("TT1", "TIT1"), ("TT2", "TIT2"), ("TT3", "TIT3"),
	("TXT", "TEXT"), ("TXX", "TXXX"), ("TYE", "TYER"), ("UFI", "UFID"), ("ULT", "USLT"),
	("WAF", "WOAF"), ("WAR", "WOAR"), ("WAS", "WOAS"), ("WCM", "WCOM"), ("WCP", "WCOP"),
	("WPB", "WPUB"), ("WXX", "WXXX"),
	// Extensions
	("TCP", "TCMP"), ("TS2", "TSO2"), ("TSC", "TSOC"), ("TSA", "TSOA"), ("TSP", "TSOP"),
	("TST", "TSOT"), ("GP1", "GRP1"), ("MVN", "MVNM"), ("MVI", "MVIN"), ("PCS", "PCST"),
	("TCT", "TCAT"), ("TDS", "TDES"), ("TID", "TGID"), ("WFD", "WFED"),
];

// ID3v2.3 -> ID3v2.4, anything not listed keeps its ID
const V3_TO_V4: &[(&str, Option<&str>)] = &[
	("TORY", Some("TDOR")),
	("IPLS", Some("TIPL")),
	("RVAD", Some("RVA2")),
	("TYER", Some("TDRC")),
	("EQUA", None),
	("TRDA", None),
	("TSIZ", None),
	// Folded into TDRC
	("TDAT", None),
	("TIME", None),
];

// ID3v2.4 -> ID3v2.3, anything not listed keeps its ID
const V4_TO_V3: &[(&str, Option<&str>)] = &[
	("TDOR", Some("TORY")),
	("TIPL", Some("IPLS")),
	("TMCL", Some("IPLS")),
	("RVA2", Some("RVAD")),
	("TDRC", Some("TYER")),
	("ASPI", None),
	("EQU2", None),
	("SEEK", None),
	("SIGN", None),
	("TDEN", None),
	("TDRL", None),
	("TDTG", None),
	("TMOO", None),
	("TPRO", None),
	("TSST", None),
];

/// Whether `id` is defined by the ID3v2 standard for `version`
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::Id3v2Version;
/// use tagwright::id3v2::util::catalog::is_supported;
///
/// assert!(is_supported("TDRC", Id3v2Version::V4));
/// assert!(!is_supported("TDRC", Id3v2Version::V3));
/// assert!(is_supported("TT2", Id3v2Version::V2));
/// ```
pub fn is_supported(id: &str, version: Id3v2Version) -> bool {
	let supported = match version {
		Id3v2Version::V2 => V2_SUPPORTED,
		Id3v2Version::V3 => V3_SUPPORTED,
		Id3v2Version::V4 => V4_SUPPORTED,
	};

	supported.iter().any(|supported_id| *supported_id == id)
}

/// Whether `id` is a vendor extension commonly found in `version` tags
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::Id3v2Version;
/// use tagwright::id3v2::util::catalog::is_extension;
///
/// // iTunes compilation flag
/// assert!(is_extension("TCMP", Id3v2Version::V4));
/// assert!(is_extension("TCP", Id3v2Version::V2));
///
/// // The sort order frames were only standardized in ID3v2.4
/// assert!(is_extension("TSOP", Id3v2Version::V3));
/// assert!(!is_extension("TSOP", Id3v2Version::V4));
/// ```
pub fn is_extension(id: &str, version: Id3v2Version) -> bool {
	let extensions = match version {
		Id3v2Version::V2 => V2_EXTENSIONS,
		Id3v2Version::V3 => V3_EXTENSIONS,
		Id3v2Version::V4 => V4_EXTENSIONS,
	};

	extensions.iter().any(|extension_id| *extension_id == id)
}

/// The body layout used by frames with `id` in `version`
///
/// Unknown IDs are treated as [`FrameKind::Binary`].
pub fn body_kind(id: &str, version: Id3v2Version) -> FrameKind {
	if version == Id3v2Version::V2 {
		return match id {
			"TXX" => FrameKind::UserText,
			"WXX" => FrameKind::UserUrl,
			"COM" | "ULT" => FrameKind::Comment,
			"UFI" => FrameKind::UniqueFileIdentifier,
			"RVA" => FrameKind::VolumeAdjustment,
			"TRK" | "TPA" => FrameKind::NumberPair,
			// IPL is laid out like a text frame, the rest are Apple's
			"IPL" | "GP1" | "MVN" | "MVI" | "WFD" => FrameKind::Text,
			_ if id.starts_with('T') => FrameKind::Text,
			_ if id.starts_with('W') => FrameKind::Url,
			_ => FrameKind::Binary,
		};
	}

	match id {
		"TXXX" => FrameKind::UserText,
		"WXXX" => FrameKind::UserUrl,
		"COMM" | "USLT" => FrameKind::Comment,
		"UFID" => FrameKind::UniqueFileIdentifier,
		"RVA2" if version == Id3v2Version::V4 => FrameKind::RelativeVolumeAdjustment,
		"RVAD" if version == Id3v2Version::V3 => FrameKind::VolumeAdjustment,
		"TRCK" | "TPOS" => FrameKind::NumberPair,
		"IPLS" if version == Id3v2Version::V3 => FrameKind::Text,
		_ if id.starts_with('T') => FrameKind::Text,
		// Apple proprietary frames
		// WFED (Podcast URL), GRP1 (Grouping), MVNM (Movement Name), MVIN (Movement Number)
		"GRP1" | "MVNM" | "MVIN" | "WFED" => FrameKind::Text,
		_ if id.starts_with('W') => FrameKind::Url,
		_ => FrameKind::Binary,
	}
}

/// Translate a frame ID from one version to another
///
/// Returns `None` if there is no equivalent frame in `to`.
///
/// # Examples
///
/// ```rust
/// use tagwright::id3v2::util::catalog::translate;
/// use tagwright::id3v2::{FrameId, Id3v2Version};
///
/// # fn main() -> tagwright::error::Result<()> {
/// let title = FrameId::new("TT2")?;
/// let upgraded = translate(&title, Id3v2Version::V2, Id3v2Version::V4);
/// assert_eq!(upgraded, Some(FrameId::new("TIT2")?));
///
/// // There is no TDRL in ID3v2.3
/// let release_time = FrameId::new("TDRL")?;
/// assert_eq!(translate(&release_time, Id3v2Version::V4, Id3v2Version::V3), None);
/// # Ok(()) }
/// ```
pub fn translate(id: &FrameId, from: Id3v2Version, to: Id3v2Version) -> Option<FrameId> {
	let mut id = id.clone();
	let mut current = from;

	while let Some(next) = current.step_towards(to) {
		id = translate_step(&id, current, next)?;
		current = next;
	}

	Some(id)
}

/// Translate a frame ID between two adjacent versions
pub(crate) fn translate_step(
	id: &FrameId,
	from: Id3v2Version,
	to: Id3v2Version,
) -> Option<FrameId> {
	let id_str = id.as_str();

	let mapped = match (from, to) {
		(Id3v2Version::V2, Id3v2Version::V3) => V2_V3_PAIRS
			.iter()
			.find(|(v2, _)| *v2 == id_str)
			.map(|(_, v3)| *v3),
		(Id3v2Version::V3, Id3v2Version::V2) => V2_V3_PAIRS
			.iter()
			.find(|(_, v3)| *v3 == id_str)
			.map(|(v2, _)| *v2),
		(Id3v2Version::V3, Id3v2Version::V4) => return remap(id, V3_TO_V4),
		(Id3v2Version::V4, Id3v2Version::V3) => return remap(id, V4_TO_V3),
		_ => return (from == to).then(|| id.clone()),
	};

	mapped.map(FrameId::new_static)
}

fn remap(id: &FrameId, table: &[(&str, Option<&'static str>)]) -> Option<FrameId> {
	match table.iter().find(|(src, _)| *src == id.as_str()) {
		Some((_, mapped)) => mapped.map(FrameId::new_static),
		None => Some(id.clone()),
	}
}

#[cfg(test)]
mod tests {
	use super::{FrameKind, body_kind, is_extension, is_supported, translate};
	use crate::id3v2::{FrameId, Id3v2Version};

	fn id(s: &'static str) -> FrameId {
		FrameId::new(s).unwrap()
	}

	#[test_log::test]
	fn v2_v3_pairs_are_supported() {
		for (v2, v3) in super::V2_V3_PAIRS {
			assert!(
				is_supported(v2, Id3v2Version::V2) || is_extension(v2, Id3v2Version::V2),
				"{v2}"
			);
			assert!(
				is_supported(v3, Id3v2Version::V3) || is_extension(v3, Id3v2Version::V3),
				"{v3}"
			);
		}
	}

	#[test_log::test]
	fn translate_composes_through_v3() {
		assert_eq!(
			translate(&id("TYE"), Id3v2Version::V2, Id3v2Version::V4),
			Some(id("TDRC"))
		);
		assert_eq!(
			translate(&id("TDOR"), Id3v2Version::V4, Id3v2Version::V2),
			Some(id("TOR"))
		);
		assert_eq!(
			translate(&id("TIT2"), Id3v2Version::V4, Id3v2Version::V4),
			Some(id("TIT2"))
		);
	}

	#[test_log::test]
	fn unmappable() {
		assert_eq!(translate(&id("CRM"), Id3v2Version::V2, Id3v2Version::V3), None);
		assert_eq!(translate(&id("PRIV"), Id3v2Version::V3, Id3v2Version::V2), None);
		assert_eq!(translate(&id("TSIZ"), Id3v2Version::V3, Id3v2Version::V4), None);
		assert_eq!(translate(&id("TMOO"), Id3v2Version::V4, Id3v2Version::V3), None);
	}

	#[test_log::test]
	fn both_credit_lists_merge() {
		for list in ["TIPL", "TMCL"] {
			assert_eq!(
				translate(&id(list), Id3v2Version::V4, Id3v2Version::V3),
				Some(id("IPLS"))
			);
		}
	}

	#[test_log::test]
	fn kinds() {
		assert_eq!(body_kind("TRCK", Id3v2Version::V4), FrameKind::NumberPair);
		assert_eq!(body_kind("TPA", Id3v2Version::V2), FrameKind::NumberPair);
		assert_eq!(body_kind("TXXX", Id3v2Version::V3), FrameKind::UserText);
		assert_eq!(body_kind("WFED", Id3v2Version::V4), FrameKind::Text);
		assert_eq!(body_kind("WOAR", Id3v2Version::V4), FrameKind::Url);
		assert_eq!(body_kind("RVAD", Id3v2Version::V3), FrameKind::VolumeAdjustment);
		assert_eq!(body_kind("RVAD", Id3v2Version::V4), FrameKind::Binary);
		assert_eq!(body_kind("RVA", Id3v2Version::V2), FrameKind::VolumeAdjustment);
		assert_eq!(body_kind("APIC", Id3v2Version::V4), FrameKind::Binary);
		assert_eq!(body_kind("PIC", Id3v2Version::V2), FrameKind::Binary);
		assert_eq!(body_kind("IPLS", Id3v2Version::V3), FrameKind::Text);
	}
}
