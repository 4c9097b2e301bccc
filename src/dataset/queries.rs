//! Filtering queries over a [`WeatherDataset`]: one reading per year for a calendar day,
//! and the window a city occupies.

use crate::dataset::error::QueryError;
use crate::dataset::weather_dataset::WeatherDataset;
use crate::types::city_stats::CityStats;
use crate::types::reading::Reading;
use bon::bon;
use log::debug;
use std::collections::{BTreeSet, HashSet};

#[bon]
impl WeatherDataset {
    /// Picks one reading per year for the calendar day `month`/`day` from the `count`
    /// readings starting at `index`.
    ///
    /// Readings are scanned in order and the first match of each year wins, so the result
    /// is in dataset order and never holds two readings of the same year. Years are
    /// de-duplicated regardless of locality: over a range spanning several cities, later
    /// cities only contribute years the earlier ones lacked.
    ///
    /// # Errors
    ///
    /// * [`QueryError::InvalidRange`] if `count` is zero or the range runs past the end.
    /// * [`QueryError::InvalidMonth`] unless `1 <= month <= 12`.
    /// * [`QueryError::InvalidDay`] unless `1 <= day <= 31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use global_weather::{Reading, WeatherDataset};
    ///
    /// let dataset: WeatherDataset = [(2000, 1.0), (2000, 2.0), (2001, 3.0)]
    ///     .into_iter()
    ///     .map(|(year, temp)| {
    ///         Reading::builder()
    ///             .country("US").state("Maine").city("Caribou")
    ///             .month(1).day(2).year(year).avg_temperature(temp)
    ///             .build()
    ///     })
    ///     .collect();
    ///
    /// let new_years_day = dataset.readings_on(0, dataset.len(), 1, 2)?;
    /// assert_eq!(new_years_day.len(), 2);
    /// assert_eq!(new_years_day[0].avg_temperature, Some(1.0));
    /// # Ok::<(), global_weather::QueryError>(())
    /// ```
    pub fn readings_on(
        &self,
        index: usize,
        count: usize,
        month: u32,
        day: u32,
    ) -> Result<Vec<&Reading>, QueryError> {
        let range = self.checked_range(index, count)?;
        if !(1..=12).contains(&month) {
            return Err(QueryError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(QueryError::InvalidDay(day));
        }
        debug!(
            "Selecting readings for {:02}-{:02} from {} rows at index {}",
            month, day, count, index
        );

        let mut included_years = HashSet::new();
        Ok(self.readings[range]
            .iter()
            .filter(|r| r.month == month && r.day == day && included_years.insert(r.year))
            .collect())
    }

    /// Locates the readings of one city.
    ///
    /// A reading matches when its country equals `country`, its city equals `city`, and,
    /// unless `state` is empty, its state equals `state`. Comparisons are exact and
    /// case-sensitive. Unset arguments count as empty strings; `state` and `city` are
    /// trimmed first, `country` is not.
    ///
    /// Returns `None` when nothing matches. Otherwise the result spans the first to the
    /// last match: `count` is that window's length and `years` are the distinct years of
    /// every row inside it. If the city's rows are not contiguous, rows of other
    /// localities lying between its matches are counted too.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.country(&str)`: Optional. Country to match.
    /// * `.state(&str)`: Optional. State to match; leave unset or empty to accept any state.
    /// * `.city(&str)`: Optional. City to match.
    ///
    /// # Examples
    ///
    /// ```
    /// use global_weather::{Reading, WeatherDataset};
    ///
    /// let dataset: WeatherDataset = [("Maine", 1995), ("", 1996)]
    ///     .into_iter()
    ///     .map(|(state, year)| {
    ///         Reading::builder()
    ///             .country("US").state(state).city("Caribou")
    ///             .month(1).day(1).year(year)
    ///             .build()
    ///     })
    ///     .collect();
    ///
    /// let stats = dataset.city_stats().country("US").city("Caribou").call().unwrap();
    /// assert_eq!((stats.starting_index, stats.count), (0, 2));
    /// assert_eq!(stats.years, vec![1995, 1996]);
    ///
    /// assert!(dataset.city_stats().country("US").city("Bangor").call().is_none());
    /// ```
    #[builder]
    pub fn city_stats(
        &self,
        country: Option<&str>,
        state: Option<&str>,
        city: Option<&str>,
    ) -> Option<CityStats> {
        let country = country.unwrap_or("");
        let state = state.map(str::trim).unwrap_or("");
        let city = city.map(str::trim).unwrap_or("");
        debug!(
            "Looking up city stats for country {:?}, state {:?}, city {:?}",
            country, state, city
        );

        let mut first_match = None;
        let mut last_match = None;
        for (i, reading) in self.readings.iter().enumerate() {
            if reading.country == country
                && (state.is_empty() || reading.state == state)
                && reading.city == city
            {
                first_match.get_or_insert(i);
                last_match = Some(i);
            }
        }

        let (first, last) = first_match.zip(last_match)?;
        let years: BTreeSet<i32> = self.readings[first..=last]
            .iter()
            .map(|r| r.year)
            .collect();

        Some(CityStats {
            starting_index: first,
            count: last - first + 1,
            years: years.into_iter().collect(),
        })
    }
}
