/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::process::exit;
use std::sync::mpsc;
use std::thread;

use clap::ArgMatches;
use log::{error, info};

use binvis_bmp::{BmpEncodeErrors, BmpEncoder};
use binvis_core::events::ProgressObserver;
use binvis_core::palette::JsonPalette;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod progress;

/// Errors surfaced to the user by the command line tool
pub enum CliError {
    /// The input file does not exist
    InputNotFound(PathBuf),
    /// The encoder refused to start
    Encode(BmpEncodeErrors),
    /// Reading the input or writing the output failed
    Io(std::io::Error)
}

impl Debug for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputNotFound(path) => {
                writeln!(f, "File {path:?} does not exist")
            }
            Self::Encode(err) => {
                writeln!(f, "{err:?}")
            }
            Self::Io(err) => {
                writeln!(f, "I/O error: {err}")
            }
        }
    }
}

impl From<BmpEncodeErrors> for CliError {
    fn from(value: BmpEncodeErrors) -> Self {
        CliError::Encode(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        CliError::Io(value)
    }
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    if let Err(err) = run(&options) {
        println!();
        error!(" Could not complete conversion, reason {err:?}");
        println!();
        exit(-1);
    }
}

fn run(options: &ArgMatches) -> Result<(), CliError> {
    let input = options.get_one::<PathBuf>("input").unwrap().clone();
    if !input.exists() {
        return Err(CliError::InputNotFound(input));
    }

    let source = match options.get_one::<PathBuf>("palette") {
        Some(path) => JsonPalette::with_path(path),
        None => JsonPalette::new()
    };
    let contents = file_io::read_input(&input)?;
    let output = file_io::output_file_name(&input);
    info!("read {} bytes from {input:?}", contents.len());

    let data = if *options.get_one::<bool>("no-progress").unwrap() {
        convert(&source, &contents, ())?
    } else {
        // the conversion runs on a worker, the main thread owns the
        // terminal and drains the event channel until the worker is done
        let (sender, receiver) = mpsc::channel();
        let worker = thread::spawn(move || convert(&source, &contents, sender));

        progress::render_events(receiver);

        match worker.join() {
            Ok(result) => result?,
            Err(panic) => std::panic::resume_unwind(panic)
        }
    };

    file_io::write_output(&output, &data)?;
    info!("wrote {} bytes to {output:?}", data.len());

    Ok(())
}

fn convert<O: ProgressObserver>(
    source: &JsonPalette, contents: &[u8], observer: O
) -> Result<Vec<u8>, CliError> {
    let mut encoder = BmpEncoder::initialize(source, observer)?;
    encoder.add_pixels(contents);
    Ok(encoder.finish())
}
