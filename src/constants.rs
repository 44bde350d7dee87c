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

//! Module containing constants describing the weather file format.

/// Line separating the descriptive header of the weather file
/// from the daily data.
pub const DATA_MARKER: &str = "Daily weather data:";

/// Token written in place of a missing value.
pub const MISSING_SENTINEL: &str = "NaN";

/// CSV values treated as missing, the same set spreadsheet
/// and dataframe exports write for empty cells.
pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column names line written directly below the [`DATA_MARKER`].
pub const COLUMN_HEADER: &str =
    "Year-DOY    Srad   Tmax   Tmin   Vapr   Tdew   RHmax   RHmin   Wndsp   Rain   ETref   MorP";

/// Raw CSV columns that are not a part of the weather file.
pub const DEFAULT_DROPPED_COLUMNS: [&str; 2] = ["Date", "Srad Wh/m2"];

/// How values of a column are rendered.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ColumnKind {
    /// Copied verbatim, even when the value looks like a number.
    Passthrough,
    /// Rendered with two decimals when the value is a number.
    Numeric,
}

/// Single column of the weather file data section.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Column {
    /// Column name in the input CSV.
    pub name: &'static str,
    /// Minimum width of the right-aligned field.
    pub width: usize,
    pub kind: ColumnKind,
}

const fn numeric(name: &'static str) -> Column {
    Column {
        name,
        width: 6,
        kind: ColumnKind::Numeric,
    }
}

/// Year and day of year of the record, e.g. `2024-123`.
pub const ID_COLUMN: Column = Column {
    name: "year-DOY",
    width: 8,
    kind: ColumnKind::Passthrough,
};

/// Measured or predicted flag of the record.
pub const FLAG_COLUMN: Column = Column {
    name: "MorP",
    width: 6,
    kind: ColumnKind::Passthrough,
};

/// Data section columns in the order they are written.
///
/// Units follow the FAO-56 weather file convention:
/// radiation in MJ/m2, temperatures in deg C, vapor pressure in kPa,
/// humidity in %, wind speed in m/s, rain and ETref in mm.
pub static OUTPUT_COLUMNS: [Column; 12] = [
    ID_COLUMN,
    numeric("Srad"),
    numeric("Tmax"),
    numeric("Tmin"),
    numeric("Vapr"),
    numeric("Tdew"),
    numeric("RHmax"),
    numeric("RHmin"),
    numeric("Wndsp"),
    numeric("Rain"),
    numeric("ETref"),
    FLAG_COLUMN,
];

/// Finds the output column matching the CSV header name.
///
/// Surrounding whitespace and letter case are ignored.
pub fn find_column(header: &str) -> Option<&'static Column> {
    let header = header.trim();
    OUTPUT_COLUMNS
        .iter()
        .find(|column| column.name.eq_ignore_ascii_case(header))
}

#[cfg(test)]
mod tests {
    use super::{find_column, ColumnKind, COLUMN_HEADER, OUTPUT_COLUMNS};

    #[test]
    fn header_names_match_columns() {
        let names: Vec<&str> = COLUMN_HEADER.split_whitespace().collect();

        assert_eq!(names.len(), OUTPUT_COLUMNS.len());

        for (name, column) in names.iter().zip(OUTPUT_COLUMNS.iter()) {
            assert!(name.eq_ignore_ascii_case(column.name));
        }
    }

    #[test]
    fn column_lookup() {
        assert_eq!(find_column(" Year-DOY ").unwrap().kind, ColumnKind::Passthrough);
        assert_eq!(find_column("tmax").unwrap().name, "Tmax");
        assert_eq!(find_column("morp").unwrap().kind, ColumnKind::Passthrough);
        assert!(find_column("Srad Wh/m2").is_none());
        assert!(find_column("Date").is_none());
    }
}
