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

//! Module reading daily weather records from the CSV export
//! and checking the continuity of their dates.

use super::record::{Cell, WeatherRecord};
use crate::constants::{find_column, ID_COLUMN};
use crate::errors::InputError;
use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use std::{io, path::Path};

/// Reads all records from the CSV file at `file_path`.
pub fn read_records(file_path: &Path, dropped: &[String]) -> Result<Vec<WeatherRecord>, InputError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(file_path)?;

    read_records_from(reader, dropped)
}

/// Reads all records from an already opened CSV reader.
///
/// Rows shorter than the header are accepted and the absent
/// values are treated as missing.
pub fn read_records_from<R: io::Read>(
    mut reader: csv::Reader<R>,
    dropped: &[String],
) -> Result<Vec<WeatherRecord>, InputError> {
    let headers = reader.headers()?.clone();

    if !headers.iter().any(|name| find_column(name) == Some(&ID_COLUMN)) {
        return Err(InputError::MissingColumn(ID_COLUMN.name));
    }

    for name in headers.iter() {
        let is_dropped = dropped.iter().any(|dropped| dropped.trim() == name.trim());

        if !is_dropped && find_column(name).is_none() {
            warn!("Column {:?} is not a part of the weather file and will be ignored", name);
        }
    }

    let mut records = vec![];

    for row in reader.records() {
        let row = row?;
        records.push(WeatherRecord::from_row(headers.iter(), row.iter(), dropped));
    }

    debug!("Read {} weather records", records.len());

    Ok(records)
}

/// Parses a `YYYY-DDD` record identifier into a date.
pub fn parse_year_doy(id: &str) -> Option<NaiveDate> {
    let (year, doy) = id.trim().split_once('-')?;
    NaiveDate::from_yo_opt(year.parse().ok()?, doy.parse().ok()?)
}

/// Warns about record identifiers that are not valid dates
/// and about records that do not follow the previous one by exactly one day.
///
/// Records are never changed or rejected, the returned value is
/// the number of issued warnings.
pub fn check_day_sequence(records: &[WeatherRecord]) -> usize {
    let mut warnings = 0;
    let mut previous: Option<NaiveDate> = None;

    for (i, record) in records.iter().enumerate() {
        let date = match record.get(ID_COLUMN.name) {
            Some(Cell::Text(id)) => parse_year_doy(id),
            _ => None,
        };

        let date = match date {
            Some(date) => date,
            None => {
                warn!("Record {} has no valid year-DOY identifier", i + 1);
                warnings += 1;
                previous = None;
                continue;
            }
        };

        if let Some(previous) = previous {
            if date - previous != Duration::days(1) {
                warn!(
                    "Record {} ({}) does not follow previous day ({})",
                    i + 1,
                    date.format("%Y-%j"),
                    previous.format("%Y-%j")
                );
                warnings += 1;
            }
        }

        previous = Some(date);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::{check_day_sequence, parse_year_doy, read_records_from};
    use crate::errors::InputError;
    use crate::formatter::record::Cell;
    use chrono::NaiveDate;

    fn dropped() -> Vec<String> {
        vec!["Date".to_string(), "Srad Wh/m2".to_string()]
    }

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    const CSV: &str = "\
Date,year-DOY,Srad Wh/m2,Srad,Tmax,Tmin,Vapr,Tdew,RHmax,RHmin,Wndsp,Rain,ETref,MorP
2024-06-06,2024-158,4800.5,17.28,27.1,14.2,1.52,13.3,88,41,1.9,0,4.31,M
2024-06-07,2024-159,5102.0,18.37,29.4,,1.61,14.1,90,38,2.2,0.4,4.75,M
2024-06-08,2024-160,3900.1,14.04,24.0,15.8
";

    #[test]
    fn read_csv() {
        let records = read_records_from(reader(CSV), &dropped()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("Srad"), Some(&Cell::Numeric(17.28)));
        assert_eq!(records[1].get("Tmin"), Some(&Cell::missing()));
        assert_eq!(records[2].get("MorP"), Some(&Cell::missing()));
        assert!(records[0].get("Srad Wh/m2").is_none());
        assert!(records[0].get("Date").is_none());
        assert_eq!(check_day_sequence(&records), 0);
    }

    #[test]
    fn missing_identifier_column() {
        let result = read_records_from(reader("Date,Srad,Tmax\n2024-06-06,1,2\n"), &dropped());

        assert!(matches!(result, Err(InputError::MissingColumn("year-DOY"))));
    }

    #[test]
    fn year_doy_parsing() {
        assert_eq!(
            parse_year_doy("2024-123"),
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
        assert_eq!(
            parse_year_doy("2024-366"),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert!(parse_year_doy("2023-366").is_none());
        assert!(parse_year_doy("2024123").is_none());
        assert!(parse_year_doy("NaN").is_none());
    }

    #[test]
    fn sequence_gaps() {
        let data = "\
year-DOY,MorP
2024-365,M
2024-366,M
2025-001,M
2025-003,P
bad,P
2025-004,P
2025-004,P
";
        let records = read_records_from(reader(data), &dropped()).unwrap();

        // gap after 2025-001, invalid id, duplicated day
        assert_eq!(check_day_sequence(&records), 3);
    }
}
