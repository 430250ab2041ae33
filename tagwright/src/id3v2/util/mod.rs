//! Utilities for working with ID3v2 tags

pub mod catalog;
pub(crate) mod pairs;
pub mod synchsafe;
