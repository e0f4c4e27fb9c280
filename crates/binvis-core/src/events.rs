/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Progress events emitted while a bitmap is assembled
//!
//! Events are pure notifications, a conversion produces byte-identical
//! output whether or not anyone is listening. Observers must therefore
//! never influence the encoder; the seam is a fire-and-forget trait.

use std::sync::mpsc::Sender;

/// A single progress notification
///
/// The payloads are small counters, sizes are reported in the unit the
/// renderer displays them in (kilobytes for accumulation, raw byte
/// counts for the row-padding walk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The encoder wrote its headers and color table and is ready
    /// to accept pixels
    Init,
    /// Another 10 KiB of pixels have been accumulated
    ReadProgress { kilobytes: usize },
    /// Finalization started, payload is the accumulated pixel count
    /// in kilobytes
    ConversionStart { kilobytes: usize },
    /// A row finished the padding walk. `offset` is the index of the
    /// row's last pixel, `total` the grid-filled pixel count
    ConversionProgress { offset: usize, total: usize },
    /// The bitmap is complete, payload is the original unpadded
    /// pixel count
    ConversionEnd { pixels: usize },
    /// The run was abandoned before any pixel was accepted
    Cancelled
}

/// Consumer seam for [`ProgressEvent`]s
///
/// The encoder is generic over its observer; a headless caller passes
/// `()`, an interactive one a channel sender. Implementations must
/// preserve the order events were produced in.
pub trait ProgressObserver {
    /// Deliver a single event
    fn notify(&self, event: ProgressEvent);
}

/// The absent observer, every event is discarded
impl ProgressObserver for () {
    fn notify(&self, _event: ProgressEvent) {}
}

/// FIFO delivery over an unbounded channel
///
/// The channel keeps producer order and never drops an event. A hung up
/// receiver means nobody is listening anymore, and since listeners are
/// ignorable the send result is discarded.
impl ProgressObserver for Sender<ProgressEvent> {
    fn notify(&self, event: ProgressEvent) {
        let _ = self.send(event);
    }
}
