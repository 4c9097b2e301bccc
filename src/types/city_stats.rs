use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Where a city's readings sit in a [`crate::WeatherDataset`] and which years they cover.
///
/// Produced by [`crate::WeatherDataset::city_stats`]. `count` is the length of the window
/// from the first to the last matching row, and `years` holds every distinct year found
/// inside that window. When a city's rows are contiguous, which the input format is
/// expected to guarantee, the window holds only that city's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStats {
    /// Index of the first matching reading.
    pub starting_index: usize,
    /// Number of rows from the first to the last matching reading, inclusive.
    pub count: usize,
    /// Distinct years inside the window, ascending.
    pub years: Vec<i32>,
}

impl CityStats {
    /// Index of the last matching reading.
    pub fn end_index(&self) -> usize {
        self.starting_index + self.count - 1
    }

    /// The window as an inclusive index range, usable with [`crate::WeatherDataset::slice`]
    /// via `starting_index` and `count`.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.starting_index..=self.end_index()
    }
}

impl fmt::Display for CityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
        write!(
            f,
            "starting index {}, {} readings, years [{}]",
            self.starting_index,
            self.count,
            years.join(", ")
        )
    }
}
