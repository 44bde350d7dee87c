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

//! Module handling the template weather file
//! and building the formatted output document.

use super::record::WeatherRecord;
use crate::constants::{COLUMN_HEADER, DATA_MARKER};
use crate::errors::TemplateError;
use log::debug;
use std::{fmt, fs, path::Path};

/// Existing weather file providing the descriptive header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TemplateDocument {
    text: String,
}

impl TemplateDocument {
    pub fn new(text: impl Into<String>) -> Self {
        TemplateDocument { text: text.into() }
    }

    pub fn new_from_file(file_path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(file_path)?;
        Ok(TemplateDocument::new(text))
    }

    /// Returns the template text up to and including the first
    /// [`DATA_MARKER`], followed by a newline.
    ///
    /// Anything after the marker, including the rest of its line, is discarded.
    pub fn header(&self) -> Result<String, TemplateError> {
        let marker_pos = self.text.find(DATA_MARKER).ok_or(
            TemplateError::MalformedTemplate("no \"Daily weather data:\" line found"),
        )?;

        if self.text.matches(DATA_MARKER).count() > 1 {
            debug!("Template contains the data marker more than once, using the first one");
        }

        let mut header = String::with_capacity(marker_pos + DATA_MARKER.len() + 1);
        header.push_str(&self.text[..marker_pos + DATA_MARKER.len()]);
        header.push('\n');

        Ok(header)
    }
}

/// Complete weather file ready to be written.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutputDocument {
    header: String,
    rows: Vec<String>,
}

impl OutputDocument {
    /// Formatted data lines in input order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\n{}", self.header, COLUMN_HEADER, self.rows.join("\n"))
    }
}

/// Combines the template header with fixed-width rendering of `records`.
///
/// The only failure is a template without the data marker,
/// missing and non-numeric values are rendered as text.
pub fn format(
    records: &[WeatherRecord],
    template: &TemplateDocument,
) -> Result<OutputDocument, TemplateError> {
    let header = template.header()?;
    let rows = records.iter().map(WeatherRecord::render_line).collect();

    Ok(OutputDocument { header, rows })
}
