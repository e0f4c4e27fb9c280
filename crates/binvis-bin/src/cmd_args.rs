/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("binvis")
        .about("Render an arbitrary binary file as an 8-bit paletted bitmap image")
        .arg(Arg::new("input")
            .help("Input file to render, every byte becomes one pixel")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("palette")
            .long("palette")
            .short('p')
            .help("Palette definition file")
            .long_help("JSON palette file supplying the 256 colors pixels index into.\nDefaults to colors.json in the working directory, falling back to the bundled xterm-256 table.")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("no-progress")
            .long("no-progress")
            .action(ArgAction::SetTrue)
            .help("Run headless, without the textual progress bar"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}
