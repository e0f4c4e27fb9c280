/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use binvis_core::palette::PaletteError;

/// Errors possible when building a bitmap
///
/// Initialization is the only fallible step; once an encoder exists
/// every byte value is a defined input.
#[non_exhaustive]
pub enum BmpEncodeErrors {
    /// No usable 256-color palette could be resolved.
    ///
    /// Fatal to the run, raised before any pixel is accepted
    PaletteUnavailable(PaletteError)
}

impl Debug for BmpEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PaletteUnavailable(err) => {
                writeln!(f, "Palette unavailable: {err:?}")
            }
        }
    }
}

impl From<PaletteError> for BmpEncodeErrors {
    fn from(value: PaletteError) -> Self {
        BmpEncodeErrors::PaletteUnavailable(value)
    }
}
