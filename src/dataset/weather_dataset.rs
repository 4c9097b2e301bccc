//! The in-memory dataset: construction from a file or reader, positional access and iteration.

use crate::dataset::error::QueryError;
use crate::error::WeatherError;
use crate::ingest::diagnostics::{DiagnosticSink, StderrSink};
use crate::ingest::error::IngestError;
use crate::ingest::parser::{read_readings, LoadReport};
use crate::regression;
use crate::types::reading::Reading;
use bon::bon;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

/// An ordered, immutable collection of [`Reading`]s loaded from one source.
///
/// Readings keep the order of the source; the dataset never sorts them. Once built the
/// dataset has no interior mutability, so a shared `&WeatherDataset` can be read from any
/// number of threads at once.
///
/// Queries assume that all readings of one locality form a single contiguous run, as
/// they do in the city temperature files this crate is written for. See
/// [`WeatherDataset::city_stats`] for what happens when they don't.
///
/// # Examples
///
/// ```no_run
/// use global_weather::{WeatherDataset, WeatherError};
///
/// # fn main() -> Result<(), WeatherError> {
/// let dataset = WeatherDataset::open("city_temperature.csv")?;
/// println!("{} readings", dataset.len());
///
/// for reading in dataset.slice(0, 10)? {
///     println!("{}", reading);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeatherDataset {
    pub(crate) readings: Vec<Reading>,
    report: LoadReport,
}

#[bon]
impl WeatherDataset {
    /// Loads the file at `path`, writing a notice for every rejected line to standard error.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::SourceUnavailable`] if the file cannot be opened and
    /// [`IngestError::Read`] if reading it fails midway. Malformed lines are not errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WeatherError> {
        Self::load(path.as_ref()).call()
    }

    /// Loads the file at `path` with optional settings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `path`: **Required.** The weather data file.
    /// * `.sink(&mut dyn DiagnosticSink)`: Optional. Receives rejected lines. Defaults to [`StderrSink`].
    ///
    /// # Errors
    ///
    /// Same as [`WeatherDataset::open`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use global_weather::{MalformedRow, WeatherDataset, WeatherError};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), WeatherError> {
    /// let mut rejected: Vec<MalformedRow> = Vec::new();
    /// let dataset = WeatherDataset::load(Path::new("city_temperature.csv"))
    ///     .sink(&mut rejected)
    ///     .call()?;
    /// println!("{} readings, {} lines rejected", dataset.len(), rejected.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = load)]
    #[doc(hidden)]
    pub fn build_load(
        #[builder(start_fn)] path: &Path,
        sink: Option<&mut dyn DiagnosticSink>,
    ) -> Result<Self, WeatherError> {
        let file = File::open(path)
            .map_err(|e| IngestError::SourceUnavailable(path.to_path_buf(), e))?;
        let reader = BufReader::new(file);

        let dataset = match sink {
            Some(sink) => Self::from_reader(reader, sink)?,
            None => Self::from_reader(reader, &mut StderrSink)?,
        };
        info!(
            "Loaded {} readings from {:?} ({} lines skipped)",
            dataset.report.rows_accepted,
            path,
            dataset.report.rows_skipped
        );
        Ok(dataset)
    }

    /// Builds a dataset from any buffered text source. The first line is treated as a header.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Read`] if the reader fails.
    pub fn from_reader<R: BufRead>(
        reader: R,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, WeatherError> {
        let (readings, report) = read_readings(reader, sink)?;
        Ok(Self { readings, report })
    }

    /// Wraps readings that are already in memory, keeping their order.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let report = LoadReport {
            lines_read: readings.len(),
            rows_accepted: readings.len(),
            rows_skipped: 0,
        };
        Self { readings, report }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Line counts from the load that produced this dataset.
    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    /// Returns the reading at `index`.
    ///
    /// # Errors
    ///
    /// [`QueryError::IndexOutOfBounds`] if `index >= self.len()`.
    pub fn reading(&self, index: usize) -> Result<&Reading, QueryError> {
        self.readings.get(index).ok_or(QueryError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns the `count` readings starting at `index`.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidRange`] if `count` is zero or the range runs past the end.
    pub fn slice(&self, index: usize, count: usize) -> Result<&[Reading], QueryError> {
        let range = self.checked_range(index, count)?;
        Ok(&self.readings[range])
    }

    /// All readings in source order.
    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    /// Iterates over all readings in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    /// Temperature trend over the `count` readings starting at `index`, in degrees per year.
    ///
    /// Shorthand for [`regression::temperature_slope`] over [`WeatherDataset::slice`].
    ///
    /// # Errors
    ///
    /// Same as [`WeatherDataset::slice`].
    pub fn temperature_slope(&self, index: usize, count: usize) -> Result<f64, QueryError> {
        Ok(regression::temperature_slope(self.slice(index, count)?))
    }

    pub(crate) fn checked_range(
        &self,
        index: usize,
        count: usize,
    ) -> Result<Range<usize>, QueryError> {
        let len = self.len();
        match index.checked_add(count) {
            Some(end) if count >= 1 && end <= len => Ok(index..end),
            _ => Err(QueryError::InvalidRange { index, count, len }),
        }
    }
}

impl<'a> IntoIterator for &'a WeatherDataset {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

impl FromIterator<Reading> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self::from_readings(iter.into_iter().collect())
    }
}
