/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the binvis crates
//!
//! This crate provides the pieces the encoder and the command line
//! tool have in common
//!
//! It currently contains
//!
//! - A growable byte sink with endian aware writes and in-place patching
//!   of already written fields
//! - The 256 color palette, its JSON representation and the sources it
//!   can be loaded from
//! - Progress events emitted during a conversion and the observer seam
//!   they are delivered through

pub mod bytestream;
pub mod events;
pub mod palette;
