/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use binvis_core::bytestream::ByteWriter;
use binvis_core::events::{ProgressEvent, ProgressObserver};
use binvis_core::palette::PaletteSource;

use crate::common::{
    COLOR_TABLE_OFFSET, FILE_SIZE_OFFSET, IMAGE_HEIGHT_OFFSET, IMAGE_SIZE_OFFSET,
    IMAGE_WIDTH_OFFSET, INFO_HEADER_SIZE, PIXEL_ARRAY_OFFSET, PIXEL_ARRAY_OFFSET_FIELD,
    READ_PROGRESS_INTERVAL, RESOLUTION_PELS_PER_METRE
};
use crate::BmpEncodeErrors;

/// Pick the smallest near-square grid holding `count` pixels
///
/// Width grows on any fractional remainder of the square root, height
/// only once the remainder reaches one half, so a grid is never taller
/// than it is wide and `width * height >= count` always holds. The
/// unused tail of the grid is later filled with palette index 0.
///
/// # Example
/// ```
/// use binvis_bmp::grid_dimensions;
///
/// assert_eq!(grid_dimensions(0), (0, 0));
/// assert_eq!(grid_dimensions(4), (2, 2));
/// assert_eq!(grid_dimensions(5), (3, 2));
/// assert_eq!(grid_dimensions(17), (5, 4));
/// ```
pub fn grid_dimensions(count: usize) -> (u32, u32) {
    if count == 0 {
        return (0, 0);
    }
    let root = (count as f64).sqrt();
    let floor = root.floor();

    let width = floor as u32 + u32::from(root > floor);
    let height = floor as u32 + u32::from(root >= floor + 0.5);

    (width, height)
}

/// Zero bytes appended to each pixel row so rows start on
/// 4-byte boundaries
const fn row_padding(width: usize) -> usize {
    let rem = width % 4;
    if rem == 0 {
        0
    } else {
        4 - rem
    }
}

/// An 8-bit paletted BMP encoder
///
/// The encoder's entry point is [`initialize`](Self::initialize), which
/// writes the headers and the color table and fails fast when no full
/// 256-color palette can be resolved. Pixels are palette index bytes
/// fed one at a time; [`finish`](Self::finish) lays them out as a
/// near-square grid and returns the complete file buffer.
///
/// The encoder never touches the file system, it only accepts bytes
/// and returns bytes. One instance is one conversion run: `finish`
/// consumes the encoder, so nothing can be fed afterwards.
///
/// # Example
/// - Render four bytes as a 2×2 image
/// ```
/// use binvis_bmp::BmpEncoder;
/// use binvis_core::palette::JsonPalette;
///
/// fn main() -> Result<(), binvis_bmp::BmpEncodeErrors> {
///     let mut encoder = BmpEncoder::initialize(&JsonPalette::new(), ())?;
///     encoder.add_pixels(&[0x00, 0x01, 0x02, 0x03]);
///
///     let bitmap = encoder.finish();
///     // 1078 header bytes, two rows of 2 pixels padded to 4 bytes,
///     // 2 bytes of tail padding
///     assert_eq!(bitmap.len(), 1088);
///     Ok(())
/// }
/// ```
pub struct BmpEncoder<O: ProgressObserver> {
    data:     ByteWriter,
    pixels:   Vec<u8>,
    observer: O
}

impl<O: ProgressObserver> BmpEncoder<O> {
    /// Create an encoder, writing the headers and the color table
    ///
    /// The size fields (total file size, width, height, image data
    /// size) are written as zero placeholders and patched by
    /// [`finish`](Self::finish) once the pixel count is known.
    ///
    /// # Arguments
    /// - `source`: where the 256-color table comes from
    /// - `observer`: progress consumer, pass `()` when running headless
    ///
    /// # Errors
    /// [`BmpEncodeErrors::PaletteUnavailable`] when the source cannot
    /// produce 256 colors. A [`ProgressEvent::Cancelled`] is emitted on
    /// that path and the run is abandoned before any pixel is accepted.
    pub fn initialize<S: PaletteSource>(
        source: &S, observer: O
    ) -> Result<BmpEncoder<O>, BmpEncodeErrors> {
        let mut data = ByteWriter::with_capacity(PIXEL_ARRAY_OFFSET);

        // BITMAPFILEHEADER, 14 bytes
        data.write_all(b"BM");
        data.write_u32_le(0); // file size, patched in finish()
        data.write_u32_le(0); // reserved
        data.write_u32_le(COLOR_TABLE_OFFSET as u32); // pixel array offset, patched below

        // BITMAPINFOHEADER, 40 bytes
        data.write_u32_le(INFO_HEADER_SIZE);
        data.write_i32_le(0); // width in pixels, patched in finish()
        data.write_i32_le(0); // height in pixels, patched in finish()
        data.write_u16_le(1); // color planes
        data.write_u16_le(8); // bits per pixel, one palette index per byte
        data.write_u32_le(0); // BI_RGB, no compression
        data.write_u32_le(0); // image data size, patched in finish()
        data.write_u32_le(RESOLUTION_PELS_PER_METRE); // horizontal resolution
        data.write_u32_le(RESOLUTION_PELS_PER_METRE); // vertical resolution
        data.write_u32_le(0); // colors used, 0 means all of them
        data.write_u32_le(0); // important colors, 0 means all of them

        let palette = match source.load() {
            Ok(palette) => palette,
            Err(err) => {
                observer.notify(ProgressEvent::Cancelled);
                return Err(BmpEncodeErrors::PaletteUnavailable(err));
            }
        };

        for entry in palette.entries() {
            data.write_all(&[entry.blue, entry.green, entry.red, 0]);
        }
        data.patch_u32_le(PIXEL_ARRAY_OFFSET_FIELD, PIXEL_ARRAY_OFFSET as u32);

        trace!("wrote headers and color table, {} bytes", data.position());
        observer.notify(ProgressEvent::Init);

        Ok(BmpEncoder {
            data,
            pixels: Vec::new(),
            observer
        })
    }

    /// Add a single pixel, a palette index between 0 and 255
    ///
    /// Every 10 KiB of accumulated pixels a
    /// [`ProgressEvent::ReadProgress`] fires with the count in
    /// kilobytes. Purely informational, listeners must tolerate
    /// its absence.
    pub fn add_pixel(&mut self, index: u8) {
        self.pixels.push(index);
        if self.pixels.len() % READ_PROGRESS_INTERVAL == 0 {
            self.observer.notify(ProgressEvent::ReadProgress {
                kilobytes: self.pixels.len() / 1024
            });
        }
    }

    /// Add a run of pixels in order
    ///
    /// Equivalent to calling [`add_pixel`](Self::add_pixel) for every
    /// byte, including the 10 KiB notification boundaries.
    pub fn add_pixels(&mut self, indexes: &[u8]) {
        for index in indexes {
            self.add_pixel(*index);
        }
    }

    /// Number of pixels accumulated so far
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Finalize the bitmap and return the complete file buffer
    ///
    /// Selects the grid dimensions for the accumulated pixel count,
    /// fills the unused grid tail with palette index 0, pads each row
    /// to a 4-byte multiple, pads the file tail to a 4-byte multiple
    /// and patches the header size fields.
    ///
    /// The tail padding is always between 1 and 4 bytes, an already
    /// aligned file still gains a full 4 zero bytes. Downstream
    /// consumers depend on the exact byte count, so this is a hard
    /// contract of the format produced here.
    pub fn finish(mut self) -> Vec<u8> {
        let pixel_count = self.pixels.len();
        let (width, height) = grid_dimensions(pixel_count);
        trace!("laying out {pixel_count} pixels as {width}x{height}");

        self.data.patch_i32_le(IMAGE_WIDTH_OFFSET, width as i32);
        // negative height marks top-down row order
        self.data.patch_i32_le(IMAGE_HEIGHT_OFFSET, -(height as i32));

        self.observer.notify(ProgressEvent::ConversionStart {
            kilobytes: pixel_count / 1024
        });

        // fill the unused grid tail so every cell has a pixel
        self.pixels.resize(width as usize * height as usize, 0);

        let padded = pad_rows(&self.pixels, width as usize, &self.observer);
        let padded_len = padded.len();
        self.data.write_all(&padded);

        // always at least one byte, never zero
        let end_padding = 4 - (self.data.position() % 4);
        for _ in 0..end_padding {
            self.data.write_u8(0);
        }

        self.data
            .patch_u32_le(FILE_SIZE_OFFSET, self.data.position() as u32);
        self.data
            .patch_u32_le(IMAGE_SIZE_OFFSET, (padded_len + end_padding) as u32);

        trace!(
            "bitmap complete, {} bytes, {end_padding} tail padding",
            self.data.position()
        );
        self.observer.notify(ProgressEvent::ConversionEnd {
            pixels: pixel_count
        });

        self.data.into_inner()
    }
}

/// Copy `pixels` row by row, appending the per-row padding after every
/// `width`-th byte
///
/// When no padding is needed the buffer is returned as-is and no
/// progress fires. Otherwise one [`ProgressEvent::ConversionProgress`]
/// fires per completed row carrying the index of the row's last pixel
/// and the grid-filled total.
fn pad_rows<O: ProgressObserver>(pixels: &[u8], width: usize, observer: &O) -> Vec<u8> {
    let padding = row_padding(width);
    if padding == 0 {
        return pixels.to_vec();
    }

    let rows = pixels.len() / width;
    let mut padded = Vec::with_capacity(pixels.len() + rows * padding);

    for (i, index) in pixels.iter().enumerate() {
        padded.push(*index);
        if (i + 1) % width == 0 {
            padded.resize(padded.len() + padding, 0);
            observer.notify(ProgressEvent::ConversionProgress {
                offset: i,
                total:  pixels.len()
            });
        }
    }

    padded
}
