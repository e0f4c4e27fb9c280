/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Textual progress rendering for interactive runs
//!
//! All rendering state lives here, the encoder only produces events.
//! The renderer drains the channel until every sender hung up, so a
//! finished (or failed) conversion always terminates the loop.

use std::io::{stdout, Write};
use std::sync::mpsc::Receiver;

use binvis_core::events::ProgressEvent;

const ERASE_LINE: &str = "\x1b[2K";

/// Total cells of the bar including the brackets
const BAR_CELLS: usize = 32;

/// Forward-only `[===>    ]` bar, it never moves backwards even if
/// progress fractions arrive out of line
struct ProgressBar {
    filled: usize
}

impl ProgressBar {
    fn new() -> ProgressBar {
        ProgressBar { filled: 0 }
    }

    fn update(&mut self, normalized: f64) {
        let interior = BAR_CELLS - 2;
        let cells = ((normalized * interior as f64).floor() as usize).min(interior);
        if cells > self.filled {
            self.filled = cells;
        }
    }

    fn render(&self) -> String {
        let interior = BAR_CELLS - 2;
        let head = usize::from(self.filled < interior);
        format!(
            "[{}{}{}]",
            "=".repeat(self.filled),
            ">".repeat(head),
            " ".repeat(interior - self.filled - head)
        )
    }
}

/// Consume events until the channel closes, drawing the read counter
/// and the conversion bar on stdout
pub fn render_events(receiver: Receiver<ProgressEvent>) {
    let mut bar = ProgressBar::new();
    let mut out = stdout();

    for event in receiver.iter() {
        match event {
            ProgressEvent::Init => {
                let _ = write!(out, "Read: 0 kb");
            }
            ProgressEvent::ReadProgress { kilobytes } => {
                let _ = write!(out, "{ERASE_LINE}\rRead: {kilobytes} kb");
            }
            ProgressEvent::ConversionStart { kilobytes } => {
                let _ = write!(out, "{ERASE_LINE}\rRead: {kilobytes} kb\nConversion:");
            }
            ProgressEvent::ConversionProgress { offset, total } => {
                let done = offset + 1;
                let normalized = done as f64 / total as f64;
                let percent = (normalized * 100.0).floor() as usize;
                bar.update(normalized);
                let _ = write!(
                    out,
                    "{ERASE_LINE}\rConversion: {done} / {total}   ({percent}%)  {}",
                    bar.render()
                );
            }
            ProgressEvent::ConversionEnd { pixels } => {
                let _ = write!(
                    out,
                    "{ERASE_LINE}\rConversion: {pixels} / {pixels}   (100%)\nFinished\n"
                );
            }
            ProgressEvent::Cancelled => {
                let _ = writeln!(out, "\nCancelled");
            }
        }
        let _ = out.flush();
    }
}
