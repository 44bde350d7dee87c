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

//! Module responsible for parsing and checking the configuration file.
//!
//! The configuration file uses [YAML](https://en.wikipedia.org/wiki/YAML)
//! and `serde` to enforce strong typing and automatic type checking.
//!
//! The structures and their fields in this module directly correspond to
//! the fields inside `config.yaml` so you can check this documentation
//! for more details how to set the config file.

use crate::constants::{find_column, DEFAULT_DROPPED_COLUMNS};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Fields with paths to input files.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Input {
    /// Daily weather data exported as CSV with a header row.
    pub weather_data: PathBuf,

    /// Existing weather file whose header (up to and including
    /// the `Daily weather data:` line) is copied to the output.
    pub template: PathBuf,
}

/// Fields with information about the produced weather file.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Output {
    /// Path of the formatted weather file.
    pub weather_file: PathBuf,

    /// _(Optional)_ Whether an existing file at [`Output::weather_file`]
    /// can be replaced.
    ///
    /// Defaults to `true`.
    #[serde(default = "Output::default_overwrite")]
    pub overwrite: bool,
}

impl Output {
    fn default_overwrite() -> bool {
        true
    }
}

/// _(Optional)_ Fields controlling which CSV columns are used.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Columns {
    /// _(Optional)_ CSV columns removed before formatting.
    ///
    /// Defaults to `["Date", "Srad Wh/m2"]`. Cannot contain
    /// any of the weather file columns.
    #[serde(default = "Columns::default_dropped")]
    pub dropped: Vec<String>,
}

impl Columns {
    fn default_dropped() -> Vec<String> {
        DEFAULT_DROPPED_COLUMNS
            .iter()
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Checks that no weather file column is dropped.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.dropped.iter().any(|name| find_column(name).is_some()) {
            return Err(ConfigError::OutOfBounds(
                "Dropped columns cannot include weather file columns",
            ));
        }

        Ok(())
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            dropped: Columns::default_dropped(),
        }
    }
}

/// Main config structure representing the fields in
/// configuration file.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Config {
    pub input: Input,

    pub output: Output,

    #[serde(default)]
    pub columns: Columns,
}

impl Config {
    /// Config structure constructor, responsible for
    /// deserializing configuration and checking it.
    pub fn new_from_file(file_path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read(file_path)?;
        Config::new_from_slice(&data)
    }

    fn new_from_slice(data: &[u8]) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_slice(data)?;

        config.check_paths()?;
        config.columns.check_bounds()?;

        Ok(config)
    }

    fn check_paths(&self) -> Result<(), ConfigError> {
        let paths = [
            &self.input.weather_data,
            &self.input.template,
            &self.output.weather_file,
        ];

        if paths.iter().any(|path| path.as_os_str().is_empty()) {
            return Err(ConfigError::OutOfBounds("File paths cannot be empty"));
        }

        Ok(())
    }
}
