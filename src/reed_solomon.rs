/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Reed-Solomon generator polynomials and remainder computation over GF(2^8).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::gf;

/// The Reed-Solomon ECC generator polynomial for a given degree.
///
/// Holds the `degree` coefficients of
/// `∏_{i=0..degree-1} (x - 2^i)`, stored highest-to-lowest power with the
/// leading 1 dropped, exactly as used by the QR Code ECC algorithm.
#[derive(Clone)]
pub struct ReedSolomonDivisor(Arc<[u8]>);

impl ReedSolomonDivisor {
	/// Computes the generator polynomial coefficients for the given degree.
	///
	/// Requires `1 <= degree <= 255`; this is a programmer-error precondition.
	pub fn new(degree: usize) -> Self {
		assert!((1 ..= 255).contains(&degree), "Degree out of range");
		let mut result = vec![0u8; degree - 1];
		result.push(1);

		let mut root: u8 = 1;
		for _ in 0 .. degree {
			for j in 0 .. degree {
				result[j] = gf::multiply(result[j], root);
				if j + 1 < result.len() {
					result[j] ^= result[j + 1];
				}
			}
			root = gf::multiply(root, 0x02);
		}
		Self(result.into())
	}

	/// Returns the divisor of the given degree, computing it once per
	/// degree and reusing it for every subsequent call from any thread.
	pub fn cached(degree: usize) -> Self {
		static CACHE: OnceLock<Mutex<HashMap<u8, Arc<[u8]>>>> = OnceLock::new();
		let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
		let key = degree as u8;
		let mut guard = cache.lock().unwrap();
		let coeffs = guard.entry(key).or_insert_with(|| ReedSolomonDivisor::new(degree).0).clone();
		Self(coeffs)
	}

	/// The degree of this generator polynomial (number of ECC bytes it produces).
	pub fn degree(&self) -> usize {
		self.0.len()
	}

	/// Computes the `degree()` error-correction bytes for `data` by polynomial
	/// long division against this divisor.
	pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
		let mut result = vec![0u8; self.0.len()];
		for &b in data {
			let factor: u8 = b ^ result.remove(0);
			result.push(0);
			for (x, &y) in result.iter_mut().zip(self.0.iter()) {
				*x ^= gf::multiply(y, factor);
			}
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn degree_matches_constructor_argument() {
		for d in [1usize, 2, 7, 30, 68] {
			assert_eq!(ReedSolomonDivisor::new(d).degree(), d);
		}
	}

	#[test]
	fn remainder_length_matches_degree() {
		let div = ReedSolomonDivisor::new(10);
		let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
		assert_eq!(div.remainder(&data).len(), 10);
	}

	#[test]
	fn remainder_of_all_zeros_is_all_zeros() {
		let div = ReedSolomonDivisor::new(7);
		let data = [0u8; 16];
		assert_eq!(div.remainder(&data), vec![0u8; 7]);
	}

	#[test]
	fn cached_divisor_matches_fresh_computation() {
		let fresh = ReedSolomonDivisor::new(18);
		let cached = ReedSolomonDivisor::cached(18);
		assert_eq!(&*fresh.0, &*cached.0);
	}

	#[test]
	#[should_panic]
	fn degree_zero_panics() {
		ReedSolomonDivisor::new(0);
	}
}
