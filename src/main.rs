/*
Copyright 2024 Jakub Lewandowski

This file is part of wthfmt.

wthfmt is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

wthfmt is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with wthfmt. If not, see https://www.gnu.org/licenses/.
*/

//! `wthfmt` converts a daily weather CSV export into the fixed-width
//! weather text file read by FAO-56 dual crop coefficient water balance
//! models.
//!
//! The descriptive header of an existing weather file is used as a template
//! and the daily data below it is regenerated from the CSV, with numeric
//! values rounded to two decimals and right-aligned in fixed-width columns.

mod constants;
mod errors;
mod formatter;

use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

type Float = f64;

/// The main program function.
/// Prepares the runtime environment and calls the [`formatter::main`].
///
/// The `env_logger` needs to be initiated before any log messages
/// are possible to occur, so that errors from reading configuration
/// are reported as well.
fn main() {
    #[cfg(not(feature = "debug"))]
    let logger_env = Env::new().filter_or("WTHFMT_LOG_LEVEL", "info");

    #[cfg(feature = "debug")]
    let logger_env = Env::new().filter_or("WTHFMT_LOG_LEVEL", "debug");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("config.yaml"), PathBuf::from);

    match formatter::main(&config_path) {
        Ok(out_path) => info!(
            "Weather file formatting finished. Output written to {}",
            out_path.display()
        ),
        Err(err) => {
            error!("Weather file formatting failed with error: {}", err);
            std::process::exit(1);
        }
    }
}
