/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use binvis_bmp::{grid_dimensions, BmpEncodeErrors, BmpEncoder, PIXEL_ARRAY_OFFSET};
use binvis_core::palette::{Palette, PaletteError, PaletteSource};

use crate::{encode, fixed_palette, palette_json, read_i32_le, read_u32_le};

#[test]
fn four_byte_scenario_byte_for_byte() {
    let data = encode(&[0x00, 0x01, 0x02, 0x03]);

    // 1078 bytes of header and color table, a 2x2 grid with two padding
    // bytes per row, then the tail padded from 1086 to 1088
    assert_eq!(data.len(), 1088);

    assert_eq!(&data[0..2], b"BM");
    assert_eq!(read_u32_le(&data, 2), 1088); // total file size
    assert_eq!(read_u32_le(&data, 6), 0); // reserved
    assert_eq!(read_u32_le(&data, 10), 1078); // pixel array offset
    assert_eq!(read_u32_le(&data, 14), 40); // info header size
    assert_eq!(read_i32_le(&data, 18), 2); // width
    assert_eq!(read_i32_le(&data, 22), -2); // top-down height
    assert_eq!(u16::from_le_bytes([data[26], data[27]]), 1); // planes
    assert_eq!(u16::from_le_bytes([data[28], data[29]]), 8); // bit depth
    assert_eq!(read_u32_le(&data, 30), 0); // BI_RGB
    assert_eq!(read_u32_le(&data, 34), 10); // 8 pixel bytes + 2 tail bytes
    assert_eq!(read_u32_le(&data, 38), 0x1C1F); // horizontal resolution
    assert_eq!(read_u32_le(&data, 42), 0x1C1F); // vertical resolution
    assert_eq!(read_u32_le(&data, 46), 0); // colors used, all
    assert_eq!(read_u32_le(&data, 50), 0); // important colors, all

    // the color table holds entry i as B, G, R, 0
    for (i, entry) in fixed_palette().entries().iter().enumerate() {
        let at = 54 + i * 4;
        assert_eq!(
            &data[at..at + 4],
            &[entry.blue, entry.green, entry.red, 0],
            "palette entry {i}"
        );
    }

    // two rows of two pixels, each padded with two zero bytes
    assert_eq!(&data[1078..1086], &[0x00, 0x01, 0, 0, 0x02, 0x03, 0, 0]);
    // tail padding
    assert_eq!(&data[1086..1088], &[0, 0]);
}

#[test]
fn dimension_formula_boundaries() {
    for (count, dims) in [
        (1, (1, 1)),
        (2, (2, 1)),
        (4, (2, 2)),
        (5, (3, 2)),
        (16, (4, 4)),
        (17, (5, 4))
    ] {
        assert_eq!(grid_dimensions(count), dims, "{count} pixels");
    }
}

#[test]
fn pixels_land_row_major_with_zero_fill() {
    // 10 pixels lay out as 4x3, the width is already aligned so the
    // pixel array is the bare grid
    let bytes: Vec<u8> = (10..20).collect();
    let data = encode(&bytes);
    let (w, h) = grid_dimensions(bytes.len());
    assert_eq!((w, h), (4, 3));

    for r in 0..h as usize {
        for c in 0..w as usize {
            let cell = r * w as usize + c;
            let expected = bytes.get(cell).copied().unwrap_or(0);
            assert_eq!(data[PIXEL_ARRAY_OFFSET + cell], expected, "pixel ({r},{c})");
        }
    }
}

#[test]
fn padded_rows_keep_pixels_in_place() {
    // 5 pixels lay out as 3x2, every row gains one padding byte
    let bytes = [7, 8, 9, 10, 11];
    let data = encode(&bytes);
    let stride = 3 + 1;

    for r in 0..2 {
        for c in 0..3 {
            let expected = bytes.get(r * 3 + c).copied().unwrap_or(0);
            assert_eq!(
                data[PIXEL_ARRAY_OFFSET + r * stride + c],
                expected,
                "pixel ({r},{c})"
            );
        }
        assert_eq!(data[PIXEL_ARRAY_OFFSET + r * stride + 3], 0, "row {r} padding");
    }
}

#[test]
fn identical_runs_produce_identical_buffers() {
    let bytes: Vec<u8> = (0u8..=255).cycle().take(5000).collect();
    assert_eq!(encode(&bytes), encode(&bytes));
}

#[test]
fn file_length_and_tail_padding_invariants() {
    for count in [0usize, 1, 2, 3, 4, 5, 15, 16, 17, 63, 64, 100, 1000] {
        let data = encode(&vec![0x5A; count]);
        assert_eq!(data.len() % 4, 0, "length for {count} pixels");

        let (w, h) = grid_dimensions(count);
        let grid = w as usize * h as usize;
        let row_padding = (4 - w as usize % 4) % 4;
        let padded = grid + h as usize * row_padding;

        let tail = read_u32_le(&data, 34) as usize - padded;
        assert!((1..=4).contains(&tail), "tail of {tail} for {count} pixels");
        assert_eq!(data.len(), PIXEL_ARRAY_OFFSET + padded + tail);
    }
}

#[test]
fn header_patches_reflect_geometry() {
    for count in [1usize, 9, 100, 300, 12345] {
        let bytes: Vec<u8> = (0..count).map(|i| (i % 251) as u8).collect();
        let data = encode(&bytes);
        let (w, h) = grid_dimensions(count);

        assert_eq!(read_u32_le(&data, 2) as usize, data.len());
        assert_eq!(read_i32_le(&data, 18), w as i32);
        assert_eq!(read_i32_le(&data, 22), -(h as i32));
    }
}

#[test]
fn empty_input_still_produces_a_valid_shell() {
    let data = encode(&[]);

    assert_eq!(data.len(), 1080);
    assert_eq!(read_u32_le(&data, 2), 1080);
    assert_eq!(read_i32_le(&data, 18), 0);
    assert_eq!(read_i32_le(&data, 22), 0);
    assert_eq!(read_u32_le(&data, 34), 2);
    assert_eq!(&data[PIXEL_ARRAY_OFFSET..], &[0, 0]);
}

#[test]
fn short_palette_never_yields_an_encoder() {
    assert!(Palette::from_json(&palette_json(255)).is_err());

    struct Short;
    impl PaletteSource for Short {
        fn load(&self) -> Result<Palette, PaletteError> {
            Palette::from_json(&palette_json(255))
        }
    }

    let result = BmpEncoder::initialize(&Short, ());
    assert!(matches!(
        result,
        Err(BmpEncodeErrors::PaletteUnavailable(_))
    ));
}

#[test]
fn json_palette_feeds_the_color_table() {
    let palette = Palette::from_json(&palette_json(256)).unwrap();
    let mut encoder = BmpEncoder::initialize(&palette, ()).unwrap();
    encoder.add_pixel(2);
    let data = encoder.finish();

    // record 2 of the JSON source: r = 2, g = 6, b = 253, stored as BGR0
    assert_eq!(&data[54 + 2 * 4..54 + 3 * 4], &[253, 6, 2, 0]);
    // and pixel 0 references it
    assert_eq!(data[PIXEL_ARRAY_OFFSET], 2);
}
