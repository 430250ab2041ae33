mod frame;

pub(crate) use frame::verify_frame;

use super::header::Id3v2Header;
use super::util::synchsafe::{SynchsafeInteger, unsynchronise};
use super::{Id3v2Tag, Id3v2Version};
use crate::config::WriteOptions;
use crate::error::Result;
use crate::macros::err;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

/// Serializes the entire tag in its own version
///
/// The header is always written, even if the tag has no frames. Extended headers are never
/// written.
pub(super) fn create_tag(tag: &Id3v2Tag, write_options: WriteOptions) -> Result<Vec<u8>> {
	let version = tag.version();
	let flags = tag.flags();

	log::debug!("Writing {version} tag with {} frame(s)", tag.len());

	let per_frame_unsync = flags.unsynchronisation && version == Id3v2Version::V4;

	let mut frames = Vec::new();
	frame::create_items(
		&mut frames,
		tag.iter(),
		version,
		write_options,
		per_frame_unsync,
	)?;

	if flags.unsynchronisation && version != Id3v2Version::V4 {
		log::trace!("Unsynchronising the tag body");
		frames = unsynchronise(&frames);
	}

	let has_footer = flags.footer && version == Id3v2Version::V4;

	// https://mutagen-specs.readthedocs.io/en/latest/id3/id3v2.4.0-structure.html#padding:
	//
	// "[A tag] MUST NOT have any padding when a tag footer is added to the tag"
	let padding_len = if has_footer {
		log::trace!("Footer requested, not padding tag");
		0
	} else {
		write_options.preferred_padding.unwrap_or(0) as usize
	};

	let Ok(len) = u32::try_from(frames.len() + padding_len) else {
		err!(TooMuchData);
	};

	let mut header = [0; Id3v2Header::LEN];
	{
		let mut writer = &mut header[..];
		writer.write_all(b"ID3")?;
		// Revision is always 0
		writer.write_all(&[version.major(), 0])?;
		writer.write_u8(flags.as_byte(version))?;
		writer.write_u32::<BigEndian>(len.synch()?)?;
	}

	let mut id3v2 = Vec::with_capacity(Id3v2Header::LEN * 2 + frames.len() + padding_len);
	id3v2.write_all(&header)?;
	id3v2.write_all(&frames)?;
	id3v2.resize(id3v2.len() + padding_len, 0);

	if has_footer {
		// The footer is the same as the header, but with the identifier reversed
		id3v2.write_all(b"3DI")?;
		id3v2.write_all(&header[3..])?;
	}

	Ok(id3v2)
}
