//! Load a city temperature file into memory and query it.
//!
//! A [`WeatherDataset`] holds every [`Reading`] of one source file in source order and
//! answers positional lookups, per-year samples of a calendar day
//! ([`WeatherDataset::readings_on`]), city windows ([`WeatherDataset::city_stats`]) and
//! temperature trends ([`temperature_slope`]).

mod dataset;
mod error;
mod ingest;
mod regression;
mod types;

pub use error::WeatherError;

pub use dataset::error::QueryError;
pub use dataset::weather_dataset::WeatherDataset;

pub use ingest::diagnostics::{DiagnosticSink, LogSink, StderrSink};
pub use ingest::error::{IngestError, MalformedRow, RowIssue};
pub use ingest::parser::{parse_line, LoadReport, FIELD_COUNT};

pub use regression::{slope, temperature_slope};

pub use types::city_stats::CityStats;
pub use types::reading::{IdentityKey, Reading, MISSING_TEMPERATURE};
