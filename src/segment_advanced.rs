/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Optimal mode-switching segmentation: a dynamic program that chooses,
//! per code point, which of Byte/Alphanumeric/Numeric(/Kanji) mode
//! minimizes the total encoded bit length, instead of the single-mode
//! heuristic in `QrSegment::make_segments`.

#[cfg(feature = "kanji")]
use crate::bitstream::BitStream;
use crate::capacity::num_data_codewords;
use crate::error::{DataTooLong, QrError};
use crate::segment::{QrSegment, QrSegmentMode, ALPHANUMERIC_CHARSET};
use crate::types::{QrCodeEcc, Version};

#[cfg(feature = "kanji")]
const MODE_TYPES: [QrSegmentMode; 4] =
	[QrSegmentMode::Byte, QrSegmentMode::Alphanumeric, QrSegmentMode::Numeric, QrSegmentMode::Kanji];
#[cfg(not(feature = "kanji"))]
const MODE_TYPES: [QrSegmentMode; 3] =
	[QrSegmentMode::Byte, QrSegmentMode::Alphanumeric, QrSegmentMode::Numeric];
const NUM_MODES: usize = MODE_TYPES.len();

/// Returns a list of segments representing `text` that minimizes total
/// encoded bit length at some version in `[min_version, max_version]`
/// that can hold the given error correction level, re-deriving the
/// optimal split whenever the version crosses a character-count-field
/// boundary (1, 10, 27).
///
/// Returns `QrError::DataTooLong` if no version in range fits.
pub fn make_segments_optimally(
	text: &str,
	ecl: QrCodeEcc,
	min_version: Version,
	max_version: Version,
) -> Result<Vec<QrSegment>, QrError> {
	if min_version > max_version {
		return Err(QrError::InvalidArgument("min_version must be <= max_version".to_string()));
	}
	let code_points: Vec<char> = text.chars().collect();

	let mut segs = Vec::new();
	let mut last_capacity_bits = 0usize;
	for v in min_version.value() ..= max_version.value() {
		if v == min_version.value() || v == 10 || v == 27 {
			segs = make_segments_optimally_at_version(&code_points, Version::new(v));
		}
		let version = Version::new(v);
		let capacity_bits = num_data_codewords(version, ecl) * 8;
		last_capacity_bits = capacity_bits;
		if let Some(used) = QrSegment::get_total_bits(&segs, version) {
			if used <= capacity_bits {
				return Ok(segs);
			}
		}
	}
	let used = QrSegment::get_total_bits(&segs, max_version);
	Err(match used {
		None => DataTooLong::SegmentTooLong.into(),
		Some(n) => DataTooLong::DataOverCapacity { used_bits: n, capacity_bits: last_capacity_bits }.into(),
	})
}

fn make_segments_optimally_at_version(code_points: &[char], version: Version) -> Vec<QrSegment> {
	if code_points.is_empty() {
		return Vec::new();
	}
	let char_modes = compute_character_modes(code_points, version);
	split_into_segments(code_points, &char_modes)
}

/// Dynamic program over "1/6 bit" costs, matching the original QR Code
/// optimal-segmentation algorithm: extending a run costs a fractional
/// per-character amount, switching modes costs a (rounded-up) segment
/// header.
fn compute_character_modes(code_points: &[char], version: Version) -> Vec<QrSegmentMode> {
	let mut head_costs = [0usize; NUM_MODES];
	for (i, mode) in MODE_TYPES.iter().enumerate() {
		head_costs[i] = (4 + mode.num_char_count_bits(version) as usize) * 6;
	}

	let mut char_modes = vec![[None::<QrSegmentMode>; NUM_MODES]; code_points.len()];
	let mut prev_costs = head_costs;

	for (i, &c) in code_points.iter().enumerate() {
		let mut cur_costs = [0usize; NUM_MODES];

		// Byte mode can always extend.
		cur_costs[0] = prev_costs[0] + c.len_utf8() * 8 * 6;
		char_modes[i][0] = Some(MODE_TYPES[0]);

		if ALPHANUMERIC_CHARSET.contains(c) {
			cur_costs[1] = prev_costs[1] + 33; // 5.5 bits/char
			char_modes[i][1] = Some(MODE_TYPES[1]);
		}
		if c.is_ascii_digit() {
			cur_costs[2] = prev_costs[2] + 20; // 3.33 bits/char
			char_modes[i][2] = Some(MODE_TYPES[2]);
		}
		#[cfg(feature = "kanji")]
		if crate::kanji_table::is_kanji(c) {
			cur_costs[3] = prev_costs[3] + 78; // 13 bits/char
			char_modes[i][3] = Some(MODE_TYPES[3]);
		}

		for j in 0 .. NUM_MODES {
			for k in 0 .. NUM_MODES {
				let new_cost = (cur_costs[k] + 5) / 6 * 6 + head_costs[j];
				if char_modes[i][k].is_some() && (char_modes[i][j].is_none() || new_cost < cur_costs[j]) {
					cur_costs[j] = new_cost;
					char_modes[i][j] = Some(MODE_TYPES[k]);
				}
			}
		}

		prev_costs = cur_costs;
	}

	let mut cur_mode = None::<QrSegmentMode>;
	let mut min_cost = 0;
	for (i, &mode) in MODE_TYPES.iter().enumerate() {
		if cur_mode.is_none() || prev_costs[i] < min_cost {
			min_cost = prev_costs[i];
			cur_mode = Some(mode);
		}
	}
	let mut cur_mode = cur_mode.unwrap();

	let mut result = vec![QrSegmentMode::Byte; char_modes.len()];
	for i in (0 .. char_modes.len()).rev() {
		for (j, &mode) in MODE_TYPES.iter().enumerate() {
			if mode == cur_mode {
				cur_mode = char_modes[i][j].unwrap();
				result[i] = cur_mode;
				break;
			}
		}
	}
	result
}

fn split_into_segments(code_points: &[char], char_modes: &[QrSegmentMode]) -> Vec<QrSegment> {
	let mut result = Vec::new();
	let mut cur_mode = char_modes[0];
	let mut start = 0;
	let mut i = 0;
	loop {
		i += 1;
		if i < code_points.len() && char_modes[i] == cur_mode {
			continue;
		}

		let s = &code_points[start .. i];
		match cur_mode {
			QrSegmentMode::Byte => {
				let text: String = s.iter().collect();
				result.push(QrSegment::make_bytes(text.as_bytes()));
			}
			QrSegmentMode::Numeric => {
				let text: String = s.iter().collect();
				result.push(QrSegment::make_numeric(&text).unwrap());
			}
			QrSegmentMode::Alphanumeric => {
				let text: String = s.iter().collect();
				result.push(QrSegment::make_alphanumeric(&text).unwrap());
			}
			#[cfg(feature = "kanji")]
			QrSegmentMode::Kanji => {
				result.push(make_kanji(s).unwrap());
			}
			#[cfg(not(feature = "kanji"))]
			QrSegmentMode::Kanji => unreachable!("kanji feature is disabled"),
			QrSegmentMode::Eci => unreachable!("the optimal segmenter never selects ECI mode"),
		}

		if i >= code_points.len() {
			return result;
		}
		cur_mode = char_modes[i];
		start = i;
	}
}

/// Returns a segment representing `code_points` encoded in Kanji mode.
///
/// Returns `QrError::InvalidCharacter` if any code point is outside this
/// crate's supported Kanji subset (see `kanji_table`).
#[cfg(feature = "kanji")]
pub fn make_kanji(code_points: &[char]) -> Result<QrSegment, QrError> {
	let mut bs = BitStream::with_capacity(code_points.len() * 13);
	for &c in code_points {
		let val = crate::kanji_table::to_qr_kanji(c).ok_or_else(|| {
			QrError::InvalidCharacter(format!("'{c}' is not encodable in kanji mode"))
		})?;
		bs.append_bits(u32::from(val), 13);
	}
	Ok(QrSegment::new(QrSegmentMode::Kanji, code_points.len(), bs.0))
}
