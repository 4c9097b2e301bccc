//! Prints a tour of a city temperature file.
//!
//! ```text
//! cargo run --example summary -- path/to/city_temperature.csv
//! ```

use global_weather::{slope, IngestError, WeatherDataset, WeatherError};
use std::env;
use std::process::ExitCode;

const SAMPLE_INDEX: usize = 2_000_000;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: summary <city_temperature.csv>");
        return ExitCode::FAILURE;
    };

    let dataset = match WeatherDataset::open(&path) {
        Ok(dataset) => dataset,
        Err(WeatherError::Ingest(IngestError::SourceUnavailable(..))) => {
            println!("File not found. Exiting gracefully...");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_summary(&dataset) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_summary(dataset: &WeatherDataset) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nTotal Reading Count: {}", dataset.len());

    match dataset.reading(SAMPLE_INDEX) {
        Ok(reading) => println!("Reading at index {}: {}", SAMPLE_INDEX, reading),
        Err(e) => println!("No reading at index {}: {}", SAMPLE_INDEX, e),
    }

    if dataset.is_empty() {
        return Ok(());
    }

    let first_n = dataset.len().min(10);
    println!("\nFirst {} readings:", first_n);
    for reading in dataset.slice(0, first_n)? {
        println!("{}", reading);
    }

    println!("\nReadings on 1/2 from different years:");
    for reading in dataset.readings_on(0, dataset.len(), 1, 2)? {
        println!("{}", reading);
    }

    println!("\nStats for Caribou, Maine, US:");
    match dataset
        .city_stats()
        .country("US")
        .state("Maine")
        .city("Caribou")
        .call()
    {
        Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
        None => println!("City data is not available."),
    }

    println!(
        "\nTemperature Linear Regression Slope: {}",
        dataset.temperature_slope(0, dataset.len())?
    );
    println!(
        "Linear Regression Slope for provided data: {}",
        slope(&[2000.0, 2001.0, 2002.0, 2003.0], &[32.5, 33.0, 33.5, 34.0])
    );

    let report = dataset.load_report();
    println!(
        "\nLines read: {}, accepted: {}, skipped: {}",
        report.lines_read, report.rows_accepted, report.rows_skipped
    );
    Ok(())
}
