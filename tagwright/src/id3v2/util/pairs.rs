//! Contains utilities for ID3v2 style number pairs

pub(crate) const NUMBER_PAIR_SEPARATOR: char = '/';

/// A number parsed out of a pair, along with the width it was written with
///
/// The width is kept so that zero padded values ("01") are written back unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PairComponent {
	pub(crate) value: u32,
	pub(crate) width: usize,
}

/// Splits an ID3v2 style number pair ("N", "N/D", "/D")
///
/// Either side is treated as absent if it isn't a valid number.
pub(crate) fn split_number_pair(text: &str) -> (Option<PairComponent>, Option<u32>) {
	let (numerator, denominator) = match text.split_once(NUMBER_PAIR_SEPARATOR) {
		Some((numerator, denominator)) => (numerator, Some(denominator)),
		None => (text, None),
	};

	(
		parse_number(numerator),
		denominator.and_then(parse_number).map(|d| d.value),
	)
}

/// Attempts to convert a string to a number, logging anything that doesn't fit
pub(crate) fn parse_number(text: &str) -> Option<PairComponent> {
	let trimmed_text = text.trim().trim_end_matches('\0');
	if trimmed_text.is_empty() {
		return None;
	}

	match trimmed_text.parse::<u32>() {
		Ok(value) => Some(PairComponent {
			value,
			width: trimmed_text.len(),
		}),
		Err(parse_error) => {
			log::warn!("\"{text}\" cannot be parsed as number: {parse_error}");
			None
		},
	}
}

/// Creates an ID3v2 style number pair
///
/// With `pad`, the numerator is zero padded to the digit width of the denominator. Otherwise, the
/// numerator is padded to `width`.
pub(crate) fn format_number_pair(
	numerator: Option<u32>,
	denominator: Option<u32>,
	width: usize,
	pad: bool,
) -> String {
	let width = match denominator {
		Some(denominator) if pad => denominator.to_string().len(),
		_ => width,
	};

	match (numerator, denominator) {
		(Some(numerator), None) => format!("{numerator:0width$}"),
		(Some(numerator), Some(denominator)) => {
			format!("{numerator:0width$}{NUMBER_PAIR_SEPARATOR}{denominator}")
		},
		// A missing numerator stays missing, "0" would read back as track 0
		(None, Some(denominator)) => format!("{NUMBER_PAIR_SEPARATOR}{denominator}"),
		(None, None) => String::new(),
	}
}
