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

//! Module with the in-memory representation of daily weather records
//! and their fixed-width rendering.

use crate::constants::{
    find_column, Column, ColumnKind, MISSING_SENTINEL, MISSING_TOKENS, OUTPUT_COLUMNS,
};
use crate::Float;
use rustc_hash::FxHashMap;

/// Single value of a weather record.
///
/// Whether the value is a number is decided once, when the record is read,
/// so rendering never needs to guess.
#[derive(Clone, PartialEq, Debug)]
pub enum Cell {
    Numeric(Float),
    Text(String),
}

impl Cell {
    /// Interprets raw CSV text as a number if possible.
    ///
    /// Only finite numbers are numeric, so `NaN` or `inf` stay as text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<Float>() {
            Ok(value) if value.is_finite() => Cell::Numeric(value),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Cell standing in for an empty or absent value.
    pub fn missing() -> Self {
        Cell::Text(MISSING_SENTINEL.to_string())
    }

    /// Textual form of the cell as written to the weather file.
    pub fn render(&self) -> String {
        match self {
            Cell::Numeric(value) => format!("{:.2}", value),
            Cell::Text(text) => text.clone(),
        }
    }
}

/// Checks if raw CSV text marks a missing value,
/// either by being empty or by one of [`MISSING_TOKENS`].
fn is_missing_token(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || MISSING_TOKENS.contains(&raw)
}

/// One day of weather data, keyed by the weather file column name.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WeatherRecord {
    cells: FxHashMap<&'static str, Cell>,
}

impl WeatherRecord {
    /// Builds a record from one CSV row.
    ///
    /// Columns listed in `dropped` and columns that are not a part of
    /// the weather file are skipped. Empty values, missing-value tokens
    /// such as `NA` or `null` and values missing from a short row
    /// become the missing sentinel.
    pub fn from_row<'h, 'r, H, R>(headers: H, row: R, dropped: &[String]) -> Self
    where
        H: IntoIterator<Item = &'h str>,
        R: IntoIterator<Item = &'r str>,
    {
        let mut row = row.into_iter();
        let mut record = WeatherRecord::default();

        for header in headers {
            let raw = row.next();

            if dropped.iter().any(|name| name.trim() == header.trim()) {
                continue;
            }

            if let Some(column) = find_column(header) {
                record.insert(column, raw);
            }
        }

        record
    }

    /// Sets the value of `column` from raw text,
    /// `None` meaning the value is absent.
    pub fn insert(&mut self, column: &'static Column, raw: Option<&str>) {
        let cell = match raw {
            None => Cell::missing(),
            Some(raw) if is_missing_token(raw) => Cell::missing(),
            Some(raw) => match column.kind {
                ColumnKind::Passthrough => Cell::Text(raw.trim().to_string()),
                ColumnKind::Numeric => Cell::parse(raw.trim()),
            },
        };

        self.cells.insert(column.name, cell);
    }

    /// Value of the column, or `None` when the record has no such field.
    pub fn get(&self, column_name: &str) -> Option<&Cell> {
        self.cells.get(column_name)
    }

    /// Renders the record as one line of the weather file data section.
    ///
    /// Each value is right-aligned to its column width and every field
    /// after the identifier is preceded by a single space.
    /// Values wider than the column are not truncated.
    pub fn render_line(&self) -> String {
        let mut line = String::with_capacity(96);

        for (i, column) in OUTPUT_COLUMNS.iter().enumerate() {
            let value = self
                .cells
                .get(column.name)
                .map_or_else(|| MISSING_SENTINEL.to_string(), Cell::render);

            if i > 0 {
                line.push(' ');
            }

            line.push_str(&format!("{:>width$}", value, width = column.width));
        }

        line
    }

    /// Number of missing values in numeric columns.
    pub fn count_missing(&self) -> usize {
        OUTPUT_COLUMNS
            .iter()
            .filter(|column| column.kind == ColumnKind::Numeric)
            .filter(|column| match self.cells.get(column.name) {
                None => true,
                Some(Cell::Text(text)) => text == MISSING_SENTINEL,
                Some(Cell::Numeric(_)) => false,
            })
            .count()
    }
}
