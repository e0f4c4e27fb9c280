/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The 256 color palette pixel bytes index into
//!
//! A palette is loaded once before any pixel is fed and is immutable
//! afterwards. The canonical source is a JSON array of named colors;
//! a copy of the xterm-256 table ships inside the crate so the tools
//! work out of the box, a `colors.json` next to the invocation wins
//! over the bundled one.

use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::trace;
use serde::Deserialize;

/// Well known palette file name looked up in the working directory
pub const PALETTE_FILE: &str = "colors.json";

/// Number of colors a usable palette must provide, one per
/// possible pixel byte
pub const PALETTE_COLORS: usize = 256;

static DEFAULT_PALETTE: &str = include_str!("../resources/colors.json");

/// A single palette entry
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8
}

/// An immutable table of exactly [`PALETTE_COLORS`] entries
///
/// Sources with more entries are truncated, sources with fewer refuse
/// to load, see [`PaletteError::Insufficient`].
#[derive(Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>
}

/// Errors possible while resolving a palette
///
/// All of them are the same fatal condition to an encoder, the variants
/// exist for diagnostics only.
#[non_exhaustive]
pub enum PaletteError {
    /// The source parsed but defines fewer colors than
    /// [`PALETTE_COLORS`]. Payload is the number found
    Insufficient(usize),
    /// The source is not the expected JSON shape
    InvalidJson(serde_json::Error),
    /// The source could not be read at all
    IoErrors(std::io::Error)
}

impl Debug for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insufficient(found) => {
                writeln!(
                    f,
                    "Insufficient palette, expected {PALETTE_COLORS} colors but found {found}"
                )
            }
            Self::InvalidJson(err) => {
                writeln!(f, "Cannot parse palette: {err}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "Cannot read palette: {err}")
            }
        }
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(value: serde_json::Error) -> Self {
        PaletteError::InvalidJson(value)
    }
}

impl From<std::io::Error> for PaletteError {
    fn from(value: std::io::Error) -> Self {
        PaletteError::IoErrors(value)
    }
}

#[derive(Deserialize)]
struct ColorChannels {
    r: u8,
    g: u8,
    b: u8
}

#[derive(Deserialize)]
struct ColorRecord {
    // presence is part of the palette schema even though indexing
    // only ever uses the channels
    #[allow(dead_code)]
    name: String,
    rgb:  ColorChannels
}

impl Palette {
    /// Parse a palette from its JSON representation
    ///
    /// The source is an array of objects, each carrying a `name` and an
    /// `rgb` object with integer `r`, `g`, `b` channels. The first
    /// [`PALETTE_COLORS`] records are used in source order, record
    /// position determines palette index.
    ///
    /// # Example
    /// ```
    /// use binvis_core::palette::Palette;
    ///
    /// let source: String = (0..=255)
    ///     .map(|i| format!(r#"{{"name":"c{i}","rgb":{{"r":{i},"g":0,"b":0}}}}"#))
    ///     .collect::<Vec<String>>()
    ///     .join(",");
    /// let palette = Palette::from_json(&format!("[{source}]")).unwrap();
    /// assert_eq!(palette.entries()[7].red, 7);
    /// ```
    pub fn from_json(text: &str) -> Result<Palette, PaletteError> {
        let records: Vec<ColorRecord> = serde_json::from_str(text)?;

        if records.len() < PALETTE_COLORS {
            return Err(PaletteError::Insufficient(records.len()));
        }
        let entries = records[..PALETTE_COLORS]
            .iter()
            .map(|record| PaletteEntry {
                red:   record.rgb.r,
                green: record.rgb.g,
                blue:  record.rgb.b
            })
            .collect();

        Ok(Palette { entries })
    }

    /// Build a palette directly from entries, mainly useful for tests
    /// and callers that compute their table
    pub fn from_entries(entries: &[PaletteEntry]) -> Result<Palette, PaletteError> {
        if entries.len() < PALETTE_COLORS {
            return Err(PaletteError::Insufficient(entries.len()));
        }
        Ok(Palette {
            entries: entries[..PALETTE_COLORS].to_vec()
        })
    }

    /// Return the palette entries, always exactly
    /// [`PALETTE_COLORS`] of them
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

/// Anything that can produce a [`Palette`]
///
/// The encoder resolves its table through this seam so the data source
/// (file, bundled resource, in-memory table) stays outside the core.
pub trait PaletteSource {
    /// Produce the full color table or explain why there is none
    fn load(&self) -> Result<Palette, PaletteError>;
}

/// A palette is its own source, loading is a copy
impl PaletteSource for Palette {
    fn load(&self) -> Result<Palette, PaletteError> {
        Ok(self.clone())
    }
}

/// The default palette source
///
/// Without an explicit path this looks for [`PALETTE_FILE`] in the
/// working directory and falls back to the bundled xterm-256 table when
/// there is none. With an explicit path only that file is consulted and
/// a missing file is an error rather than a silent fallback.
#[derive(Default)]
pub struct JsonPalette {
    path: Option<PathBuf>
}

impl JsonPalette {
    /// Source resolving the working directory file or the bundled table
    pub fn new() -> JsonPalette {
        JsonPalette::default()
    }

    /// Source reading exactly the given file
    pub fn with_path<P: Into<PathBuf>>(path: P) -> JsonPalette {
        JsonPalette {
            path: Some(path.into())
        }
    }
}

impl PaletteSource for JsonPalette {
    fn load(&self) -> Result<Palette, PaletteError> {
        if let Some(path) = &self.path {
            trace!("reading palette from {path:?}");
            return Palette::from_json(&fs::read_to_string(path)?);
        }

        let local = Path::new(PALETTE_FILE);
        if local.exists() {
            trace!("reading palette from ./{PALETTE_FILE}");
            return Palette::from_json(&fs::read_to_string(local)?);
        }

        trace!("no {PALETTE_FILE} in the working directory, using the bundled table");
        Palette::from_json(DEFAULT_PALETTE)
    }
}
