pub(crate) mod attached_picture;
mod binary_frame;
mod comment_frame;
mod extended_text_frame;
mod extended_url_frame;
mod number_pair_frame;
mod relative_volume_adjustment_frame;
mod text_information_frame;
mod unique_file_identifier;
mod url_link_frame;
mod volume_adjustment_frame;

pub use binary_frame::BinaryFrame;
pub use comment_frame::CommentFrame;
pub use extended_text_frame::ExtendedTextFrame;
pub use extended_url_frame::ExtendedUrlFrame;
pub use number_pair_frame::NumberPairFrame;
pub use relative_volume_adjustment_frame::{
	ChannelInformation, ChannelType, RelativeVolumeAdjustmentFrame,
};
pub use text_information_frame::TextInformationFrame;
pub use unique_file_identifier::UniqueFileIdentifierFrame;
pub use url_link_frame::UrlLinkFrame;
pub use volume_adjustment_frame::{VolumeAdjustmentFrame, VolumeChannel, VolumeChannelAdjustment};

/// Separates multiple values stored in a single text field
pub(crate) const VALUE_SEPARATOR: char = '\0';

/// Splits a multi-valued field, skipping empty values
pub(crate) fn split_values(content: &str) -> impl Iterator<Item = &str> {
	content.split(VALUE_SEPARATOR).filter(|v| !v.is_empty())
}

/// Joins values with [`VALUE_SEPARATOR`]
pub(crate) fn join_values<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
	let mut content = String::new();
	for value in values {
		if !content.is_empty() {
			content.push(VALUE_SEPARATOR);
		}

		content.push_str(value);
	}

	content
}
