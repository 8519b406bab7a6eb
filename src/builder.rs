/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Version/ECL search, data-bit assembly, ECC interleaving, and the
//! overall orchestration of `FunctionPatterns` -> `DataPlacer` -> `MaskEngine`
//! that turns a list of segments into a `QrCode`.

use std::convert::TryFrom;

use tracing::debug;

use crate::bitstream::BitStream;
use crate::canvas::Canvas;
use crate::capacity::{self, num_data_codewords, num_raw_data_modules};
use crate::data_placer::draw_codewords;
use crate::error::{DataTooLong, QrError};
use crate::function_patterns::{draw_format_bits, draw_function_patterns};
use crate::mask::{apply_mask, penalty_score};
use crate::reed_solomon::ReedSolomonDivisor;
use crate::segment::QrSegment;
use crate::symbol::QrCode;
use crate::types::{Mask, QrCodeEcc, Version};

impl QrCode {
	/*---- Static factory functions (high level) ----*/

	/// Returns a QR Code representing the given Unicode text string at the given error correction level.
	///
	/// As a conservative upper bound, this function is guaranteed to succeed for strings that have 738 or fewer Unicode
	/// code points (not UTF-8 code units) if the low error correction level is used. The smallest possible
	/// QR Code version is automatically chosen for the output. The ECC level of the result may be higher than
	/// the ecl argument if it can be done without increasing the version.
	pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self, QrError> {
		let segs: Vec<QrSegment> = QrSegment::make_segments(text);
		QrCode::encode_segments(&segs, ecl)
	}

	/// Returns a QR Code representing the given binary data at the given error correction level.
	///
	/// This function always encodes using the binary segment mode, not any text mode. The maximum number of
	/// bytes allowed is 2953. The smallest possible QR Code version is automatically chosen for the output.
	pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<Self, QrError> {
		let segs: [QrSegment; 1] = [QrSegment::make_bytes(data)];
		QrCode::encode_segments(&segs, ecl)
	}

	/*---- Static factory functions (mid level) ----*/

	/// Returns a QR Code representing the given segments at the given error correction level.
	///
	/// The smallest possible QR Code version is automatically chosen for the output. The ECC level
	/// of the result may be higher than the ecl argument if it can be done without increasing the version.
	pub fn encode_segments(segs: &[QrSegment], ecl: QrCodeEcc) -> Result<Self, QrError> {
		QrCode::encode_segments_advanced(segs, ecl, Version::MIN, Version::MAX, None, true)
	}

	/// Returns a QR Code representing the given segments with the given encoding parameters.
	///
	/// The smallest possible QR Code version within the given range is automatically
	/// chosen for the output. Iff `boost_ecl` is `true`, then the ECC level of the result
	/// may be higher than the `ecl` argument if it can be done without increasing the
	/// version. `mask` is either `Some` to force that mask, or `None` to automatically
	/// choose an appropriate mask (which may be slow).
	///
	/// This function allows the user to create a custom sequence of segments that switches
	/// between modes (such as alphanumeric and byte) to encode text in less space.
	pub fn encode_segments_advanced(
		segs: &[QrSegment],
		mut ecl: QrCodeEcc,
		min_version: Version,
		max_version: Version,
		mask: Option<Mask>,
		boost_ecl: bool,
	) -> Result<Self, QrError> {
		if min_version > max_version {
			return Err(QrError::InvalidArgument(
				"min_version must be <= max_version".to_string()));
		}

		// Find the minimal version number to use.
		let mut version: Version = min_version;
		let data_used_bits: usize = loop {
			let data_capacity_bits: usize = num_data_codewords(version, ecl) * 8;
			let data_used: Option<usize> = QrSegment::get_total_bits(segs, version);
			if data_used.is_some_and(|n| n <= data_capacity_bits) {
				break data_used.unwrap();
			} else if version >= max_version {
				return Err(match data_used {
					None => DataTooLong::SegmentTooLong.into(),
					Some(n) => DataTooLong::DataOverCapacity { used_bits: n, capacity_bits: data_capacity_bits }.into(),
				});
			} else {
				version = Version::new(version.value() + 1);
			}
		};
		debug!(version = version.value(), data_used_bits, "selected smallest version that fits");

		// Increase the error correction level while the data still fits in the current version number.
		for &newecl in &[QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
			if boost_ecl && data_used_bits <= num_data_codewords(version, newecl) * 8 {
				ecl = newecl;
			}
		}
		debug!(?ecl, "final error correction level after boosting");

		// Concatenate all segments to create the data bit string.
		let mut bs = BitStream::new();
		for seg in segs {
			bs.append_bits(seg.mode.mode_bits(), 4);
			bs.append_bits(u32::try_from(seg.numchars).unwrap(), seg.mode.num_char_count_bits(version));
			bs.0.extend_from_slice(&seg.data);
		}
		debug_assert_eq!(bs.0.len(), data_used_bits);

		// Add terminator and pad up to a byte if applicable.
		let data_capacity_bits: usize = num_data_codewords(version, ecl) * 8;
		debug_assert!(bs.0.len() <= data_capacity_bits);
		let num_zero_bits: usize = std::cmp::min(4, data_capacity_bits - bs.0.len());
		bs.append_bits(0, u8::try_from(num_zero_bits).unwrap());
		let num_zero_bits: usize = bs.0.len().wrapping_neg() & 7;
		bs.append_bits(0, u8::try_from(num_zero_bits).unwrap());
		debug_assert_eq!(bs.0.len() % 8, 0);

		// Pad with alternating bytes until data capacity is reached.
		for &padbyte in [0xECu32, 0x11].iter().cycle() {
			if bs.0.len() >= data_capacity_bits {
				break;
			}
			bs.append_bits(padbyte, 8);
		}

		let datacodewords = bs.to_bytes_padded();
		Ok(QrCode::encode_codewords(version, ecl, &datacodewords, mask))
	}

	/*---- Constructor (low level) ----*/

	/// Creates a new QR Code with the given version number,
	/// error correction level, data codeword bytes, and mask number.
	///
	/// This is a low-level API that most users should not use directly.
	/// A mid-level API is the `encode_segments()` function.
	pub fn encode_codewords(ver: Version, ecl: QrCodeEcc, datacodewords: &[u8], mut msk: Option<Mask>) -> Self {
		let size = i32::from(ver.value()) * 4 + 17;
		let mut canvas = Canvas::new(size);

		draw_function_patterns(&mut canvas, ver);
		let all_codewords: Vec<u8> = add_ecc_and_interleave(ver, ecl, datacodewords);
		draw_codewords(&mut canvas, &all_codewords);

		if msk.is_none() {
			let mut min_penalty = i32::MAX;
			for i in 0u8 .. 8 {
				let i = Mask::new(i);
				apply_mask(&mut canvas, i);
				draw_format_bits(&mut canvas, ver, ecl, i);
				let penalty: i32 = penalty_score(&canvas);
				if penalty < min_penalty {
					msk = Some(i);
					min_penalty = penalty;
				}
				apply_mask(&mut canvas, i); // Undo the mask (XOR is its own inverse).
			}
			debug!(chosen_mask = msk.unwrap().value(), min_penalty, "auto-selected mask by lowest penalty");
		}
		let msk: Mask = msk.unwrap();
		apply_mask(&mut canvas, msk);
		draw_format_bits(&mut canvas, ver, ecl, msk);

		QrCode {
			version: ver,
			size,
			error_correction_level: ecl,
			mask: msk,
			modules: canvas.into_modules(),
		}
	}
}

/// Splits `data` into blocks, computes each block's Reed-Solomon ECC bytes,
/// and interleaves data and ECC columns into one raw codeword stream ready
/// for `draw_codewords`.
fn add_ecc_and_interleave(ver: Version, ecl: QrCodeEcc, data: &[u8]) -> Vec<u8> {
	assert_eq!(data.len(), num_data_codewords(ver, ecl), "Illegal argument");

	let numblocks: usize = capacity::num_error_correction_blocks(ver, ecl);
	let blockecclen: usize = capacity::ecc_codewords_per_block(ver, ecl);
	let rawcodewords: usize = num_raw_data_modules(ver) / 8;
	let numshortblocks: usize = numblocks - rawcodewords % numblocks;
	let shortblocklen: usize = rawcodewords / numblocks;

	let mut blocks = Vec::<Vec<u8>>::with_capacity(numblocks);
	let rsdiv = ReedSolomonDivisor::cached(blockecclen);
	let mut k: usize = 0;
	for i in 0 .. numblocks {
		let datlen: usize = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
		let mut dat = data[k .. k + datlen].to_vec();
		k += datlen;
		let ecc: Vec<u8> = rsdiv.remainder(&dat);
		if i < numshortblocks {
			dat.push(0);
		}
		dat.extend_from_slice(&ecc);
		blocks.push(dat);
	}

	let mut result = Vec::<u8>::with_capacity(rawcodewords);
	for i in 0 ..= shortblocklen {
		for (j, block) in blocks.iter().enumerate() {
			if i != shortblocklen - blockecclen || j >= numshortblocks {
				result.push(block[i]);
			}
		}
	}
	result
}
