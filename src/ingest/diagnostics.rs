//! Destinations for the notices emitted when ingestion drops a line.

use crate::ingest::error::MalformedRow;
use log::warn;

/// Receives one notice per line that ingestion rejected.
///
/// Ingestion never stops because of a bad line; it reports the line here and moves on.
/// [`StderrSink`] is used when no sink is supplied.
///
/// # Examples
///
/// ```
/// use global_weather::{MalformedRow, WeatherDataset};
///
/// let data = "Region,Country,State,City,Month,Day,Year,AvgTemperature\n\
///             Europe,France,,Paris,1,x,1995,5.1\n";
///
/// let mut rejected: Vec<MalformedRow> = Vec::new();
/// let dataset = WeatherDataset::from_reader(data.as_bytes(), &mut rejected)?;
///
/// assert!(dataset.is_empty());
/// assert_eq!(rejected.len(), 1);
/// assert_eq!(rejected[0].line_number, 2);
/// # Ok::<(), global_weather::WeatherError>(())
/// ```
pub trait DiagnosticSink {
    fn malformed_row(&mut self, row: &MalformedRow);
}

/// Writes each rejected line to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn malformed_row(&mut self, row: &MalformedRow) {
        eprintln!("{}", row);
    }
}

/// Forwards each rejected line to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn malformed_row(&mut self, row: &MalformedRow) {
        warn!("{}", row);
    }
}

/// Collects the rejected lines for later inspection.
impl DiagnosticSink for Vec<MalformedRow> {
    fn malformed_row(&mut self, row: &MalformedRow) {
        self.push(row.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn malformed_row(&mut self, row: &MalformedRow) {
        (**self).malformed_row(row);
    }
}
