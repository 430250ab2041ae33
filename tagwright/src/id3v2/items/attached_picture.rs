//! Conversions between the `ID3v2.2` PIC and `ID3v2.3+` APIC layouts
//!
//! Attached pictures are stored as [`BinaryFrame`](super::BinaryFrame)s. The only difference
//! between the two layouts is how the image format is described:
//!
//! * PIC: a 3 character image format (`"JPG"`, `"PNG"`)
//! * APIC: a null-terminated MIME type (`"image/jpeg"`, `"image/png"`)
//!
//! Both are preceded by a text encoding byte, and followed by the picture type, description
//! and image data, which are copied as-is.

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

// Used by some taggers to indicate the picture data is a URL
const LINKED_IMAGE_FORMAT: &str = "-->";

/// Rewrite the body of a PIC frame as an APIC body
pub(crate) fn pic_to_apic(pic: &[u8]) -> Result<Vec<u8>> {
	let [encoding, f1, f2, f3, rest @ ..] = pic else {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	};

	let format = [*f1, *f2, *f3];
	let mime_type = match &format {
		b"JPG" => String::from("image/jpeg"),
		b"PNG" => String::from("image/png"),
		_ => {
			let format = String::from_utf8_lossy(&format);
			if format == LINKED_IMAGE_FORMAT {
				format.into_owned()
			} else {
				log::debug!("PIC: Guessing MIME type for image format \"{format}\"");
				format!("image/{}", format.trim_end_matches('\0').to_lowercase())
			}
		},
	};

	let mut apic = Vec::with_capacity(pic.len() + mime_type.len());
	apic.push(*encoding);
	apic.extend_from_slice(mime_type.as_bytes());
	apic.push(0);
	apic.extend_from_slice(rest);

	Ok(apic)
}

/// Rewrite the body of an APIC frame as a PIC body
pub(crate) fn apic_to_pic(apic: &[u8]) -> Result<Vec<u8>> {
	let [encoding, rest @ ..] = apic else {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	};

	let Some(mime_end) = rest.iter().position(|b| *b == 0) else {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	};

	let mime_type = String::from_utf8_lossy(&rest[..mime_end]).to_lowercase();
	let format: [u8; 3] = match mime_type.as_str() {
		"image/jpeg" | "image/jpg" => *b"JPG",
		"image/png" => *b"PNG",
		LINKED_IMAGE_FORMAT => *b"-->",
		_ => {
			let subtype = mime_type.rsplit('/').next().unwrap_or_default();

			let mut format = [b' '; 3];
			for (dst, src) in format
				.iter_mut()
				.zip(subtype.bytes().filter(u8::is_ascii_alphanumeric))
			{
				*dst = src.to_ascii_uppercase();
			}

			log::debug!(
				"APIC: Using image format \"{}\" for MIME type \"{mime_type}\"",
				String::from_utf8_lossy(&format)
			);
			format
		},
	};

	let mut pic = Vec::with_capacity(apic.len());
	pic.push(*encoding);
	pic.extend_from_slice(&format);
	pic.extend_from_slice(&rest[mime_end + 1..]);

	Ok(pic)
}

#[cfg(test)]
mod tests {
	use super::{apic_to_pic, pic_to_apic};

	#[test_log::test]
	fn pic_apic_known_formats() {
		let pic = [0, b'P', b'N', b'G', 3, b'c', 0, 0x89, b'P'];
		let apic = pic_to_apic(&pic).unwrap();

		assert_eq!(&apic[..11], b"\0image/png\0");
		assert_eq!(&apic[11..], &[3, b'c', 0, 0x89, b'P']);
		assert_eq!(apic_to_pic(&apic).unwrap(), pic);
	}

	#[test_log::test]
	fn unknown_formats() {
		let pic = [1, b'G', b'I', b'F', 0];
		let apic = pic_to_apic(&pic).unwrap();
		assert_eq!(apic, b"\x01image/gif\0\0");

		let apic = b"\0image/webp\0\x03\0";
		assert_eq!(apic_to_pic(apic).unwrap(), b"\0WEB\x03\0");
	}

	#[test_log::test]
	fn truncated() {
		assert!(pic_to_apic(&[0, b'J']).is_err());
		assert!(apic_to_pic(b"\0image/png").is_err());
	}
}
