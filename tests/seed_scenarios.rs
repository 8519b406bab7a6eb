//! Tabular seed scenarios: known inputs with a known expected outcome,
//! the kind of fact that is easy to get wrong in a reimplementation
//! (wrong version boundary, wrong mode choice, wrong error classification).

use qrcode_lib::{DataTooLong, QrCode, QrCodeEcc, QrError, QrSegment};
use test_case::test_case;

#[test_case("", QrCodeEcc::Low, 1 ; "empty string still needs a version 1 symbol")]
#[test_case("A", QrCodeEcc::Low, 1 ; "single character fits version 1")]
#[test_case("HELLO WORLD", QrCodeEcc::Quartile, 1 ; "short alphanumeric fits version 1 even at Quartile")]
fn encode_text_selects_expected_version(text: &str, ecl: QrCodeEcc, expected_version: u8) {
	let qr = QrCode::encode_text(text, ecl).unwrap();
	assert_eq!(qr.version().value(), expected_version);
}

#[test_case("12345", QrCodeEcc::Low ; "all-digit strings encode in numeric mode")]
#[test_case("HELLO WORLD", QrCodeEcc::Low ; "uppercase-plus-space strings encode in alphanumeric mode")]
fn make_segments_never_falls_back_to_byte_mode_when_a_tighter_mode_fits(text: &str, ecl: QrCodeEcc) {
	let byte_only = QrSegment::make_bytes(text.as_bytes());
	let auto = &QrSegment::make_segments(text)[0];
	assert!(auto.data().len() <= byte_only.data().len());
	let qr_auto = QrCode::encode_segments(&[auto.clone()], ecl).unwrap();
	let qr_byte = QrCode::encode_segments(&[byte_only], ecl).unwrap();
	assert!(qr_auto.version().value() <= qr_byte.version().value());
}

#[test_case(2953 ; "2953 bytes is the documented maximum byte-mode payload at version 40 Low")]
fn binary_payload_at_documented_maximum_succeeds(len: usize) {
	let data = vec![0u8; len];
	let qr = QrCode::encode_binary(&data, QrCodeEcc::Low).unwrap();
	assert_eq!(qr.version().value(), 40);
}

#[test]
fn binary_payload_one_byte_over_the_maximum_fails() {
	let data = vec![0u8; 2954];
	let err = QrCode::encode_binary(&data, QrCodeEcc::Low).unwrap_err();
	assert!(matches!(err, QrError::DataTooLong(DataTooLong::DataOverCapacity { .. })));
}

#[test]
fn lowercase_alphanumeric_payload_is_rejected_as_invalid_character() {
	let err = QrSegment::make_alphanumeric("hello").unwrap_err();
	assert!(matches!(err, QrError::InvalidCharacter(_)));
}

#[test]
fn inverted_version_range_is_an_invalid_argument() {
	use qrcode_lib::Version;
	let segs = QrSegment::make_segments("x");
	let err = QrCode::encode_segments_advanced(
		&segs, QrCodeEcc::Low, Version::new(10), Version::new(5), None, true,
	).unwrap_err();
	assert!(matches!(err, QrError::InvalidArgument(_)));
}

#[test]
fn forcing_every_mask_produces_a_valid_symbol() {
	use qrcode_lib::{Mask, Version};
	let segs = QrSegment::make_segments("https://example.com/");
	for m in 0u8 ..= 7 {
		let qr = QrCode::encode_segments_advanced(
			&segs, QrCodeEcc::Medium, Version::MIN, Version::MAX, Some(Mask::new(m)), true,
		).unwrap();
		assert_eq!(qr.mask().value(), m);
	}
}
