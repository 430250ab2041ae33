/// Options to control how tagwright parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) implicit_conversions: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	///     implicit_conversions: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			implicit_conversions: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to upgrade ID3v2.2 frame IDs found inside ID3v2.3 tags
	///
	/// Some applications write ID3v2.3 frame headers carrying a 3 character ID3v2.2 frame ID.
	/// With this enabled, those IDs are translated to their ID3v2.3 equivalent. Otherwise, the
	/// frames are skipped.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::ParseOptions;
	///
	/// // By default, `implicit_conversions` is enabled. Here, we want the frames left out.
	/// let parsing_options = ParseOptions::new().implicit_conversions(false);
	/// ```
	pub fn implicit_conversions(&mut self, implicit_conversions: bool) -> Self {
		self.implicit_conversions = implicit_conversions;
		*self
	}
}

/// The parsing strictness mode
///
/// # Examples
///
/// ```rust
/// use tagwright::config::{ParseOptions, ParsingMode};
/// use tagwright::id3v2::Id3v2Tag;
///
/// # fn main() -> tagwright::error::Result<()> {
/// # let bytes = [b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 0];
/// // We only want to read standard-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let (tag, _diagnostics) = Id3v2Tag::read_from(&bytes, parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any non-compliant input.
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame - The parser will error and the entire tag is discarded
	/// * UTF-8 text in an ID3v2.3 tag - The parser will error and the entire tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// This mode will attempt to fill in any holes where possible in otherwise valid, standard-compliant input.
	///
	/// NOTE: A readable input does *not* necessarily make it writeable.
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame body - The raw body is kept as a [`BinaryFrame`](crate::id3v2::BinaryFrame)
	/// * Unable to decode a frame header - The frame is skipped
	/// * UTF-8 text in an ID3v2.3 tag - The text is read as-is
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// This mode will discard any invalid frames, and ignore the majority of non-fatal errors.
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame body - The entire frame is discarded and the parser moves on
	/// * UTF-8 text in an ID3v2.3 tag - The text is read as-is
	Relaxed,
}
