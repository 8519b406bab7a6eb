/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Error types returned by fallible operations in this crate.

use thiserror::Error;

/// The error type for every recoverable failure this crate can report.
///
/// Ways to handle `DataTooLong` include:
///
/// - Decrease the error correction level if it was greater than `QrCodeEcc::Low`.
/// - If `QrCode::encode_segments_advanced()` was called, increase the
///   `max_version` argument if it was less than `Version::MAX`.
/// - Split the text data into better or optimal segments to reduce the number of bits required.
/// - Change the text or binary data to be shorter.
/// - Change the text to fit the character set of a particular segment mode (e.g. alphanumeric).
/// - Propagate the error upward to the caller/user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
	/// A caller-supplied argument was outside its valid range
	/// (e.g. an inverted version range). Mask and version values out of
	/// their documented bounds are instead rejected by `Mask::new`/
	/// `Version::new` at construction time, since those types cannot be
	/// built in an invalid state; see those types' docs.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The payload contains a character that cannot be encoded in the requested mode.
	#[error("invalid character for this mode: {0}")]
	InvalidCharacter(String),

	/// No version within the requested range can hold the segment data at
	/// the requested error correction level.
	#[error(transparent)]
	DataTooLong(#[from] DataTooLong),
}

/// The specific way `QrError::DataTooLong` failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataTooLong {
	/// A single segment has more characters than its mode's length field
	/// can hold at any version in the requested range. No amount of
	/// raising `max_version` or boosting `ecl` can fix this; the segment
	/// itself must be split or shortened.
	SegmentTooLong,

	/// The segments fit their length fields, but their total bit length
	/// exceeds the data capacity at `max_version` for the requested ECL.
	DataOverCapacity {
		/// Number of bits the segments require.
		used_bits: usize,
		/// Number of bits available at `max_version` for the requested ECL.
		capacity_bits: usize,
	},
}

impl std::fmt::Display for DataTooLong {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::SegmentTooLong => write!(f, "segment too long for its character count field"),
			Self::DataOverCapacity { used_bits, capacity_bits } =>
				write!(f, "data length = {used_bits} bits, max capacity = {capacity_bits} bits"),
		}
	}
}

impl std::error::Error for DataTooLong {}
