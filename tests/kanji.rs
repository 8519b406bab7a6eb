//! Kanji-mode integration tests, only compiled when the `kanji` feature
//! is enabled.

#![cfg(feature = "kanji")]

use qrcode_lib::{make_kanji, make_segments_optimally, QrCode, QrCodeEcc, QrError};

#[test]
fn hiragana_text_encodes_successfully() {
	let seg = make_kanji(&['あ', 'い', 'う', 'え', 'お']).unwrap();
	let qr = QrCode::encode_segments(&[seg], QrCodeEcc::Medium).unwrap();
	assert!(qr.version().value() >= 1);
}

#[test]
fn non_hiragana_katakana_kanji_is_rejected() {
	// CJK ideographs are outside this crate's supported subset.
	let err = make_kanji(&['漢', '字']).unwrap_err();
	assert!(matches!(err, QrError::InvalidCharacter(_)));
}

#[test]
fn optimal_segmenter_uses_kanji_mode_for_hiragana_runs() {
	let segs = make_segments_optimally(
		"ありがとう",
		QrCodeEcc::Low,
		qrcode_lib::Version::MIN,
		qrcode_lib::Version::MAX,
	).unwrap();
	assert!(segs.iter().any(|s| s.mode() == qrcode_lib::QrSegmentMode::Kanji));
}
