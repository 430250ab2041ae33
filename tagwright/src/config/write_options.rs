/// Options to control how tagwright writes a tag
///
/// These are passed to every encode call. There is no global state backing them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) preferred_padding: Option<u32>,
	pub(crate) lossy_text_encoding: bool,
	pub(crate) pad_numbers: bool,
}

impl WriteOptions {
	/// Default preferred padding size in bytes
	pub const DEFAULT_PREFERRED_PADDING: u32 = 1024;

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			preferred_padding: Some(Self::DEFAULT_PREFERRED_PADDING),
			lossy_text_encoding: false,
			pad_numbers: false,
		}
	}

	/// Set the preferred padding size in bytes
	///
	/// The padding is appended after the last frame. Tags with a footer are never padded.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// // I really don't want my files rewritten, so I'll double the padding size!
	/// let options = WriteOptions::new().preferred_padding(2048);
	///
	/// // ...Or I don't want padding under any circumstances!
	/// let options = WriteOptions::new().preferred_padding(0);
	/// ```
	pub fn preferred_padding(mut self, preferred_padding: u32) -> Self {
		match preferred_padding {
			0 => self.preferred_padding = None,
			_ => self.preferred_padding = Some(preferred_padding),
		}
		self
	}

	/// Whether to replace characters that cannot be represented in a frame's text encoding
	///
	/// When disabled, text that cannot be encoded (for example, CJK characters in a Latin-1 frame)
	/// causes an error. When enabled, those characters are written as `'?'`.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// let options = WriteOptions::new().lossy_text_encoding(true);
	/// ```
	pub fn lossy_text_encoding(mut self, lossy_text_encoding: bool) -> Self {
		self.lossy_text_encoding = lossy_text_encoding;
		self
	}

	/// Whether to zero-pad the numerator of number pairs (track, disc)
	///
	/// When enabled, the numerator is padded to the digit width of the denominator, so a
	/// track number of 1 out of 11 is written as `01/11`. Only affects values as they are encoded,
	/// nothing already stored in a tag is reformatted.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// let options = WriteOptions::new().pad_numbers(true);
	/// ```
	pub fn pad_numbers(mut self, pad_numbers: bool) -> Self {
		self.pad_numbers = pad_numbers;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	///     preferred_padding: 1024,
	///     lossy_text_encoding: false,
	///     pad_numbers: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
