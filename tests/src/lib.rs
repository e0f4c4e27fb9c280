/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! End to end checks for the binvis workspace
//!
//! Everything here drives the public API the way the command line tool
//! does and verifies produced buffers position by position; expectations
//! are computed from the file layout, no binary fixtures are kept.
#![allow(unused_imports)]

use serde_json::json;

use binvis_bmp::BmpEncoder;
use binvis_core::palette::{Palette, PaletteEntry, PALETTE_COLORS};

mod bmp;

/// Deterministic 256 color table shared by the tests
pub fn fixed_palette() -> Palette {
    let entries: Vec<PaletteEntry> = (0..PALETTE_COLORS)
        .map(|i| PaletteEntry {
            red:   i as u8,
            green: (i as u8).wrapping_mul(3),
            blue:  255 - i as u8
        })
        .collect();
    Palette::from_entries(&entries).unwrap()
}

/// A palette source in its JSON shape with `colors` records
pub fn palette_json(colors: usize) -> String {
    let records: Vec<serde_json::Value> = (0..colors)
        .map(|i| {
            json!({
                "name": format!("c{i}"),
                "rgb": { "r": i % 256, "g": (i * 3) % 256, "b": 255 - i % 256 }
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

/// Run a complete conversion over `bytes` with the fixed palette
pub fn encode(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = BmpEncoder::initialize(&fixed_palette(), ()).unwrap();
    encoder.add_pixels(bytes);
    encoder.finish()
}

pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

pub fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}
