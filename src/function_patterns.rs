/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Drawing of the fixed function patterns: timing, finders, alignment,
//! and the format/version metadata bits.

use crate::canvas::Canvas;
use crate::types::{get_bit, Mask, QrCodeEcc, Version};

/// Draws every fixed function pattern onto a freshly created canvas,
/// including a placeholder (mask 0) set of format bits. The real format
/// bits are stamped later, once the mask is chosen, by `draw_format_bits`.
pub(crate) fn draw_function_patterns(canvas: &mut Canvas, version: Version) {
	let size = canvas.size();

	// Timing patterns
	for i in 0 .. size {
		canvas.set_function(6, i, i % 2 == 0);
		canvas.set_function(i, 6, i % 2 == 0);
	}

	// Three finder patterns
	draw_finder_pattern(canvas, 3, 3);
	draw_finder_pattern(canvas, size - 4, 3);
	draw_finder_pattern(canvas, 3, size - 4);

	// Alignment patterns
	let positions = alignment_pattern_positions(version, size);
	let n = positions.len();
	for i in 0 .. n {
		for j in 0 .. n {
			let is_finder_corner = (i == 0 && j == 0) || (i == 0 && j == n - 1) || (i == n - 1 && j == 0);
			if !is_finder_corner {
				draw_alignment_pattern(canvas, positions[i], positions[j]);
			}
		}
	}

	// Placeholder configuration data; real values are stamped once the mask is known.
	draw_format_bits(canvas, version, QrCodeEcc::Low, Mask::new(0));
	draw_version(canvas, version);
}

/// Stamps the 15-bit BCH(15,5) format information (ECL + mask) at its two
/// redundant locations, plus the permanently-dark module at (8, size-8).
pub(crate) fn draw_format_bits(canvas: &mut Canvas, version: Version, ecl: QrCodeEcc, mask: Mask) {
	let bits: u32 = {
		let data = u32::from(ecl.format_bits() << 3 | mask.value());
		let mut rem: u32 = data;
		for _ in 0 .. 10 {
			rem = (rem << 1) ^ ((rem >> 9) * 0x537);
		}
		(data << 10 | rem) ^ 0x5412
	};
	debug_assert_eq!(bits >> 15, 0);

	// First copy
	for i in 0 .. 6 {
		canvas.set_function(8, i, get_bit(bits, i));
	}
	canvas.set_function(8, 7, get_bit(bits, 6));
	canvas.set_function(8, 8, get_bit(bits, 7));
	canvas.set_function(7, 8, get_bit(bits, 8));
	for i in 9 .. 15 {
		canvas.set_function(14 - i, 8, get_bit(bits, i));
	}

	// Second copy
	let size = canvas.size();
	for i in 0 .. 8 {
		canvas.set_function(size - 1 - i, 8, get_bit(bits, i));
	}
	for i in 8 .. 15 {
		canvas.set_function(8, size - 15 + i, get_bit(bits, i));
	}
	canvas.set_function(8, size - 8, true);
}

/// Stamps the 18-bit BCH(18,6) version information, required for version >= 7.
fn draw_version(canvas: &mut Canvas, version: Version) {
	if version.value() < 7 {
		return;
	}

	let bits: u32 = {
		let data = u32::from(version.value());
		let mut rem: u32 = data;
		for _ in 0 .. 12 {
			rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
		}
		data << 12 | rem
	};
	debug_assert_eq!(bits >> 18, 0);

	let size = canvas.size();
	for i in 0 .. 18 {
		let bit = get_bit(bits, i);
		let a = size - 11 + i % 3;
		let b = i / 3;
		canvas.set_function(a, b, bit);
		canvas.set_function(b, a, bit);
	}
}

fn draw_finder_pattern(canvas: &mut Canvas, x: i32, y: i32) {
	let size = canvas.size();
	for dy in -4 ..= 4 {
		for dx in -4 ..= 4 {
			let xx = x + dx;
			let yy = y + dy;
			if (0 .. size).contains(&xx) && (0 .. size).contains(&yy) {
				let dist = dx.abs().max(dy.abs());
				canvas.set_function(xx, yy, dist != 2 && dist != 4);
			}
		}
	}
}

fn draw_alignment_pattern(canvas: &mut Canvas, x: i32, y: i32) {
	for dy in -2 ..= 2 {
		for dx in -2 ..= 2 {
			canvas.set_function(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
		}
	}
}

/// Returns the ascending list of alignment pattern center coordinates
/// along one axis (the same list applies to both x and y). Empty for
/// version 1, which has no alignment patterns.
fn alignment_pattern_positions(version: Version, size: i32) -> Vec<i32> {
	let ver = i32::from(version.value());
	if ver == 1 {
		return vec![];
	}
	let numalign = ver / 7 + 2;
	let step = if ver == 32 {
		26
	} else {
		(ver * 8 + numalign * 3 + 5) / (numalign * 4 - 4) * 2
	};
	let mut result: Vec<i32> = (0 .. numalign - 1).map(|i| size - 7 - i * step).collect();
	result.push(6);
	result.reverse();
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_1_has_no_alignment_patterns() {
		assert!(alignment_pattern_positions(Version::new(1), 21).is_empty());
	}

	#[test]
	fn alignment_positions_start_at_6_and_end_near_edge() {
		let size = 4 * 7 + 17; // version 7
		let pos = alignment_pattern_positions(Version::new(7), size);
		assert_eq!(*pos.first().unwrap(), 6);
		assert_eq!(*pos.last().unwrap(), size - 7);
	}

	#[test]
	fn version_32_uses_fixed_step_26() {
		let size = 4 * 32 + 17;
		let pos = alignment_pattern_positions(Version::new(32), size);
		assert!(pos.len() >= 2);
		assert_eq!(pos[1] - pos[0], 26);
	}

	#[test]
	fn finder_patterns_occupy_three_corners() {
		let mut canvas = Canvas::new(21);
		draw_finder_pattern(&mut canvas, 3, 3);
		// Finder center is dark.
		assert!(canvas.get(3, 3));
		// One ring out (Chebyshev distance 2) is light.
		assert!(!canvas.get(5, 3));
	}

	#[test]
	fn version_bits_only_drawn_at_version_7_and_above() {
		let mut c6 = Canvas::new(4 * 6 + 17);
		draw_version(&mut c6, Version::new(6));
		assert!(!c6.is_function(0, 0));

		let mut c7 = Canvas::new(4 * 7 + 17);
		draw_version(&mut c7, Version::new(7));
		let size = c7.size();
		assert!(c7.is_function(size - 11, 0));
	}

	#[test]
	fn format_bits_mark_the_permanently_dark_module() {
		let mut canvas = Canvas::new(21);
		draw_format_bits(&mut canvas, Version::new(1), QrCodeEcc::Low, Mask::new(0));
		let size = canvas.size();
		assert!(canvas.get(8, size - 8));
	}
}
