/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use binvis_core::palette::PALETTE_COLORS;

/// Offset of the total-file-size field in the file header
pub(crate) const FILE_SIZE_OFFSET: usize = 2;
/// Offset of the field pointing at the start of the pixel array
pub(crate) const PIXEL_ARRAY_OFFSET_FIELD: usize = 10;
/// Offset of the image width field in the info header
pub(crate) const IMAGE_WIDTH_OFFSET: usize = 18;
/// Offset of the image height field in the info header
pub(crate) const IMAGE_HEIGHT_OFFSET: usize = 22;
/// Offset of the image-data-size field in the info header
pub(crate) const IMAGE_SIZE_OFFSET: usize = 34;
/// First byte of the color table, right after the two headers
pub(crate) const COLOR_TABLE_OFFSET: usize = 54;

/// Size of the BITMAPINFOHEADER variant written by the encoder
pub(crate) const INFO_HEADER_SIZE: u32 = 40;

/// Horizontal and vertical resolution written into the info header,
/// in pixels per metre
pub(crate) const RESOLUTION_PELS_PER_METRE: u32 = 0x1C1F;

/// Pixel bytes between read-progress notifications
pub(crate) const READ_PROGRESS_INTERVAL: usize = 10 * 1024;

/// First byte of the pixel array, the headers plus the 4-bytes-per-entry
/// color table
pub const PIXEL_ARRAY_OFFSET: usize = COLOR_TABLE_OFFSET + 4 * PALETTE_COLORS;
