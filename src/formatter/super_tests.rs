//! This is a module for integration tests of the formatter,
//! but with access to private fields and methods.
//!
//! The whole pipeline is run on the example files from `test-data/`
//! with the output written into a temporary directory.

use std::{fs, path::Path};

use crate::constants::COLUMN_HEADER;
use crate::errors::FormatterError;
use crate::formatter::configuration::{Columns, Config, Input, Output};

fn test_config(out_dir: &Path, overwrite: bool) -> Config {
    Config {
        input: Input {
            weather_data: "./test-data/weatherdata.csv".into(),
            template: "./test-data/weatherdata_format.wth".into(),
        },
        output: Output {
            weather_file: out_dir.join("transformed_weather_data.wth"),
            overwrite,
        },
        columns: Columns::default(),
    }
}

#[test]
fn format_example_files() {
    let out_dir = tempfile::tempdir().unwrap();
    let config = test_config(out_dir.path(), true);

    super::run(&config).unwrap();

    let output = fs::read_to_string(&config.output.weather_file).unwrap();
    let template = fs::read_to_string(&config.input.template).unwrap();

    let marker_end = template.find("Daily weather data:").unwrap() + "Daily weather data:\n".len();
    assert_eq!(output[..marker_end], template[..marker_end]);
    assert_eq!(output.matches("Daily weather data:").count(), 1);

    let lines: Vec<&str> = output[marker_end..].lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], COLUMN_HEADER);
    assert_eq!(
        lines[1],
        "2024-158  17.28  27.10  14.20   1.52  13.30  88.00  41.00   1.90   0.00   4.31      M"
    );
    assert_eq!(
        lines[3],
        "2024-160  14.04  24.00  15.80   1.70  15.00 100.00  52.00   1.10   6.20   3.10      M"
    );
    assert_eq!(
        lines[4],
        "2024-161  12.50  22.35  13.90    NaN    NaN  95.00  60.00    NaN  12.00   2.66      P"
    );
    assert_eq!(
        lines[5],
        "2024-162  15.88  25.50  12.05   1.44  12.40  91.00  44.00    NaN   0.00   3.98      P"
    );

    // old template data is not carried over
    assert!(!output.contains("2023-001"));

    for line in &lines[1..] {
        assert_eq!(line.split_whitespace().count(), 12);
        assert_eq!(line.len(), 85);
    }
}

#[test]
fn refuse_overwrite() {
    let out_dir = tempfile::tempdir().unwrap();
    let config = test_config(out_dir.path(), false);

    fs::write(&config.output.weather_file, "keep me").unwrap();

    let result = super::run(&config);

    assert!(matches!(result, Err(FormatterError::FaultyOutput(_))));
    assert_eq!(
        fs::read_to_string(&config.output.weather_file).unwrap(),
        "keep me"
    );
}

#[test]
fn malformed_template() {
    let out_dir = tempfile::tempdir().unwrap();
    let mut config = test_config(out_dir.path(), true);

    let template_path = out_dir.path().join("broken.wth");
    fs::write(&template_path, "Station without data marker\n").unwrap();
    config.input.template = template_path;

    let result = super::run(&config);

    assert!(matches!(result, Err(FormatterError::Template(_))));
    assert!(!config.output.weather_file.exists());
}

#[test]
fn main_with_config_file() {
    let out_dir = tempfile::tempdir().unwrap();
    let config_path = out_dir.path().join("config.yaml");
    let out_path = out_dir.path().join("basil.wth");

    fs::write(
        &config_path,
        format!(
            "input:\n  weather_data: ./test-data/weatherdata.csv\n  template: ./test-data/weatherdata_format.wth\noutput:\n  weather_file: {}\n",
            out_path.display()
        ),
    )
    .unwrap();

    let written = super::main(&config_path).unwrap();

    assert_eq!(written, out_path);
    assert!(fs::read_to_string(&out_path)
        .unwrap()
        .starts_with("Weather file for a 2024 basil greenhouse trial\n"));
}
