/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! An 8-bit paletted BMP encoder fed one palette index byte at a time
//!
//! The encoder accumulates pixel bytes, lays them out as a near-square
//! top-down grid and emits a complete uncompressed WinBMPv3 buffer:
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════════╗
//! ║ Offset │ Contents                                                 ║
//! ╠════════╪══════════════════════════════════════════════════════════╣
//! ║ 0      │ "BM" magic                                               ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 2      │ total file size, 32-bit LE (patched at finish)           ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 6      │ reserved                                                 ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 10     │ pixel array offset, 32-bit LE                            ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 14     │ 40-byte info header: width, negative height (top-down),  ║
//! ║        │ 1 plane, 8 bpp, BI_RGB, image size, resolution           ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 54     │ color table, 256 × BGR0                                  ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 1078   │ pixel rows, each padded to a 4-byte multiple, then the   ║
//! ║        │ file tail padded to a 4-byte multiple                    ║
//! ╚════════╧══════════════════════════════════════════════════════════╝
//! ```
//!
//! Every byte value is a valid pixel: the image is indexed into a
//! 256-entry palette, so arbitrary binary data can be rendered by
//! feeding it through unchanged.

pub use crate::common::PIXEL_ARRAY_OFFSET;
pub use crate::encoder::{grid_dimensions, BmpEncoder};
pub use crate::errors::BmpEncodeErrors;

mod common;
mod encoder;
mod errors;
