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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Error while reading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Error while reading weather data: {0}")]
    Input(#[from] InputError),

    #[error("Error while reading template: {0}")]
    Template(#[from] TemplateError),

    #[error("Output file cannot be written: {0}")]
    FaultyOutput(&'static str),

    #[error("Error while writing output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot open configuration file: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Cannot deserialize configuration file: {0}")]
    CantDeserialize(#[from] serde_yaml::Error),

    #[error("Configuration component is out of bounds {0}")]
    OutOfBounds(&'static str),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read weather CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Weather CSV has no {0} column")]
    MissingColumn(&'static str),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Cannot open template file: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Template is malformed: {0}")]
    MalformedTemplate(&'static str),
}
