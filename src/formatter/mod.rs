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

//! Module containing the weather file formatting pipeline.
//!
//! The pipeline reads the configuration, the weather CSV and the
//! template weather file, then writes a single weather file consisting of
//! the template header, the column names line and one fixed-width
//! line per CSV row.

mod configuration;
mod reader;
mod record;
mod template;

#[cfg(test)]
mod super_tests;

use crate::{
    errors::FormatterError,
    formatter::{configuration::Config, template::TemplateDocument},
};
use log::{debug, info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Main formatter function, responsible for all steps
/// from reading the inputs to writing the weather file.
///
/// Returns the path of the written weather file.
pub fn main(config_path: &Path) -> Result<PathBuf, FormatterError> {
    info!("Reading configuration from {}", config_path.display());
    let config = Config::new_from_file(config_path)?;

    run(&config)?;

    Ok(config.output.weather_file)
}

/// Formats the weather data described by `config`.
fn run(config: &Config) -> Result<(), FormatterError> {
    check_output_file(&config.output.weather_file, config.output.overwrite)?;

    debug!("Reading template from {}", config.input.template.display());
    let template = TemplateDocument::new_from_file(&config.input.template)?;

    info!(
        "Reading weather data from {}",
        config.input.weather_data.display()
    );
    let records = reader::read_records(&config.input.weather_data, &config.columns.dropped)?;

    let missing: usize = records.iter().map(|record| record.count_missing()).sum();
    if missing > 0 {
        warn!("{} missing values will be written as NaN", missing);
    }

    let date_warnings = reader::check_day_sequence(&records);
    if date_warnings > 0 {
        warn!(
            "Found {} issues with record dates, check the weather data",
            date_warnings
        );
    }

    let document = template::format(&records, &template)?;

    info!(
        "Writing {} records to {}",
        document.rows().len(),
        config.output.weather_file.display()
    );
    fs::write(&config.output.weather_file, document.to_string())?;

    Ok(())
}

/// Checks whether the output file can be written.
///
/// An existing directory is never replaced and an existing
/// file only when overwriting is allowed.
fn check_output_file(out_path: &Path, overwrite: bool) -> Result<(), FormatterError> {
    if out_path.is_dir() {
        return Err(FormatterError::FaultyOutput(
            "Output path points to a directory",
        ));
    }

    if out_path.exists() {
        if overwrite {
            debug!("Output file exists and will be overwritten");
        } else {
            return Err(FormatterError::FaultyOutput(
                "Output file exists and overwriting is disabled",
            ));
        }
    }

    Ok(())
}
