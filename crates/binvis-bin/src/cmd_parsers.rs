/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        // also covers the explicit --warn flag
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("logging initialized at level {log_level}");
}
