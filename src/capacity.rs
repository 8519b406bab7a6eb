/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Static capacity tables from ISO/IEC 18004 Annex E, and the derived
//! quantities (raw data modules, data codewords) computed from them.

use crate::types::{QrCodeEcc, Version};

// Indexed [ecl.ordinal()][version]. Index 0 along the version axis is an
// illegal sentinel (-1), since versions start at 1.
static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
	[-1,  7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
	[-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
	[-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
	[-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
	[-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4,  4,  4,  4,  4,  6,  6,  6,  6,  7,  8,  8,  9,  9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25],
	[-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5,  5,  8,  9,  9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49],
	[-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8,  8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68],
	[-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81],
];

fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrCodeEcc) -> usize {
	table[ecl.ordinal()][usize::from(ver.value())] as usize
}

/// The number of ECC codewords per block for the given version and ECL.
pub(crate) fn ecc_codewords_per_block(ver: Version, ecl: QrCodeEcc) -> usize {
	table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
}

/// The number of error-correction blocks the data is split into for the
/// given version and ECL.
pub(crate) fn num_error_correction_blocks(ver: Version, ecl: QrCodeEcc) -> usize {
	table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

/// The number of data modules available in a symbol of the given version,
/// after subtracting every function pattern. Always a multiple of 8.
pub(crate) fn num_raw_data_modules(ver: Version) -> usize {
	let ver = usize::from(ver.value());
	let mut result: usize = (16 * ver + 128) * ver + 64;
	if ver >= 2 {
		let numalign: usize = ver / 7 + 2;
		result -= (25 * numalign - 10) * numalign - 55;
		if ver >= 7 {
			result -= 36;
		}
	}
	debug_assert!((208 ..= 29648).contains(&result));
	result
}

/// The number of data codewords (excluding ECC) available at the given
/// version and ECL.
pub(crate) fn num_data_codewords(ver: Version, ecl: QrCodeEcc) -> usize {
	num_raw_data_modules(ver) / 8
		- ecc_codewords_per_block(ver, ecl) * num_error_correction_blocks(ver, ecl)
}
