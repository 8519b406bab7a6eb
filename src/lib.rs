/*
 * QR Code generator library (Rust)
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * Copyright (c) Abdulrhman Alkhodiry (aalkhodiry@gmail.com)
 * https://www.nayuki.io/page/qr-code-generator-library
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the "Software"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 * - The above copyright notice and this permission notice shall be included in
 *   all copies or substantial portions of the Software.
 * - The Software is provided "as is", without warranty of any kind, express or
 *   implied, including but not limited to the warranties of merchantability,
 *   fitness for a particular purpose and noninfringement. In no event shall the
 *   authors or copyright holders be liable for any claim, damages or other
 *   liability, whether in an action of contract, tort or otherwise, arising from,
 *   out of or in connection with the Software or the use or other dealings in the
 *   Software.
 */

//! # QR Code Generator Library
//!
//! A QR Code Model 2 symbol generator: given text, binary data, or a
//! hand-built list of segments, produces the immutable grid of dark/light
//! modules that make up a finished QR Code symbol.
//!
//! This crate covers encoding only — all 40 versions (sizes) and all 4
//! error correction levels, with automatic version/mask selection and ECC
//! level boosting. It does not decode or scan QR Codes, and it does not
//! rasterize a symbol to an image format; callers consume
//! [`QrCode::get_module`] directly and render modules however they like.
//!
//! ## Features
//!
//! - Supports all 40 versions (sizes) and all 4 error correction levels
//! - Automatic smallest-version and lowest-penalty-mask selection
//! - Detects finder-like penalty patterns using the documented run-history rule
//! - Encodes numeric and special-alphanumeric text in less space than general text
//! - An optional `kanji` feature adds Kanji-mode segments and an optimal
//!   mode-switching segmenter that can mix Byte/Alphanumeric/Numeric/Kanji runs
//! - Open-source code under the permissive MIT License
//!
//! ## Examples
//!
//! ### Basic QR Code
//!
//! ```rust
//! use qrcode_lib::{QrCode, QrCodeEcc};
//!
//! let qr = QrCode::encode_text("Hello, world!", QrCodeEcc::Medium).unwrap();
//! println!("Size: {}x{}", qr.size(), qr.size());
//!
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let module = qr.get_module(x, y);
//!         print!("{}", if module { "██" } else { "  " });
//!     }
//!     println!();
//! }
//! ```
//!
//! ### Advanced segment usage
//!
//! ```rust
//! use qrcode_lib::{QrCode, QrCodeEcc, QrSegment, Version, Mask};
//!
//! let text = "3141592653589793238462643383";
//! let segs = QrSegment::make_segments(text);
//! let qr = QrCode::encode_segments_advanced(
//!     &segs,
//!     QrCodeEcc::High,
//!     Version::new(5),
//!     Version::new(5),
//!     Some(Mask::new(2)),
//!     false,
//! ).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bitstream;
mod builder;
mod canvas;
mod capacity;
mod data_placer;
mod error;
mod function_patterns;
mod gf;
#[cfg(feature = "kanji")]
mod kanji_table;
mod mask;
mod reed_solomon;
mod segment;
mod segment_advanced;
mod symbol;
mod types;

pub use error::{DataTooLong, QrError};
#[cfg(feature = "kanji")]
pub use segment_advanced::make_kanji;
pub use segment_advanced::make_segments_optimally;
pub use segment::{QrSegment, QrSegmentMode};
pub use symbol::QrCode;
pub use types::{Mask, QrCodeEcc, Version};
