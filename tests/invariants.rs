//! Property-based tests for the general invariants every successfully
//! encoded symbol must satisfy, regardless of the specific payload.

use proptest::prelude::*;
use qrcode_lib::{QrCode, QrCodeEcc};

fn arb_ecl() -> impl Strategy<Value = QrCodeEcc> {
	prop_oneof![
		Just(QrCodeEcc::Low),
		Just(QrCodeEcc::Medium),
		Just(QrCodeEcc::Quartile),
		Just(QrCodeEcc::High),
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(256))]

	/// `size = 4 * version + 17` holds for every successfully encoded symbol,
	/// and the size always lands within the documented [21, 177] range.
	#[test]
	fn size_matches_version_formula(text in "\\PC{0,400}", ecl in arb_ecl()) {
		if let Ok(qr) = QrCode::encode_text(&text, ecl) {
			prop_assert_eq!(qr.size(), i32::from(qr.version().value()) * 4 + 17);
			prop_assert!((21 ..= 177).contains(&qr.size()));
		}
	}

	/// Error correction can only ever be boosted upward from what was
	/// requested, never silently weakened.
	#[test]
	fn ecl_is_never_downgraded(text in "\\PC{0,200}", ecl in arb_ecl()) {
		if let Ok(qr) = QrCode::encode_text(&text, ecl) {
			prop_assert!(qr.error_correction_level() >= ecl);
		}
	}

	/// Encoding the same payload twice produces bit-for-bit identical
	/// symbols: there is no hidden nondeterminism (e.g. hash-iteration
	/// order) in version search, mask selection, or codeword assembly.
	#[test]
	fn encoding_is_deterministic(text in "\\PC{0,300}", ecl in arb_ecl()) {
		let a = QrCode::encode_text(&text, ecl);
		let b = QrCode::encode_text(&text, ecl);
		prop_assert_eq!(a.is_ok(), b.is_ok());
		if let (Ok(a), Ok(b)) = (a, b) {
			prop_assert_eq!(a.version(), b.version());
			prop_assert_eq!(a.mask(), b.mask());
			for y in 0 .. a.size() {
				for x in 0 .. a.size() {
					prop_assert_eq!(a.get_module(x, y), b.get_module(x, y));
				}
			}
		}
	}

	/// Binary encoding round-trips through the version search: whatever
	/// version is chosen, the raw data must actually have fit (this is
	/// really a regression guard on the version-search loop terminating
	/// with a version that the capacity check already approved).
	#[test]
	fn binary_payload_always_fits_chosen_version(data in prop::collection::vec(any::<u8>(), 0 .. 500)) {
		if let Ok(qr) = QrCode::encode_binary(&data, QrCodeEcc::Low) {
			prop_assert!(qr.version().value() >= 1);
		}
	}

	/// Every module query outside `[0, size)` reports light, in every
	/// direction, for any successfully encoded symbol.
	#[test]
	fn out_of_bounds_queries_are_always_light(text in "[A-Z0-9 ]{1,50}") {
		let qr = QrCode::encode_text(&text, QrCodeEcc::Medium).unwrap();
		let size = qr.size();
		prop_assert!(!qr.get_module(-1, -1));
		prop_assert!(!qr.get_module(size, size));
		prop_assert!(!qr.get_module(-1, size / 2));
		prop_assert!(!qr.get_module(size / 2, size));
	}
}
