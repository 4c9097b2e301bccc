//! Defines [`Reading`], a single daily temperature observation for one locality,
//! together with the reduced [`IdentityKey`] that drives its equality, hashing and ordering.

use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Value used by the source files to mark a day without a temperature measurement.
///
/// The parser turns this value into `None`, so it never shows up in
/// [`Reading::avg_temperature`].
pub const MISSING_TEMPERATURE: f64 = -99.0;

/// One observation: a locality, a calendar day and the average temperature of that day.
///
/// Identity is defined by the [`IdentityKey`] `(country, state, city, year, month, day)`.
/// `region` and `avg_temperature` are carried along but never take part in
/// `==`, `Hash` or `Ord`, so two readings for the same locality and date compare equal
/// even when their temperatures differ.
///
/// Month and day are stored as read; no calendar validity is enforced (see [`Reading::date`]).
///
/// # Examples
///
/// ```
/// use global_weather::Reading;
///
/// let reading = Reading::builder()
///     .country("US")
///     .state("Maine")
///     .city("Caribou")
///     .month(1)
///     .day(2)
///     .year(1995)
///     .avg_temperature(-4.5)
///     .build();
///
/// assert_eq!(reading.region, "");
/// assert_eq!(reading.avg_temperature, Some(-4.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Continent or world region, e.g. "North America". Empty when absent.
    #[builder(into, default)]
    pub region: String,
    /// Country name, e.g. "US".
    #[builder(into)]
    pub country: String,
    /// Sub-national unit, e.g. "Maine". Empty for countries without one.
    #[builder(into, default)]
    pub state: String,
    /// City name, e.g. "Caribou".
    #[builder(into)]
    pub city: String,
    /// Month of the observation, nominally 1..=12.
    pub month: u32,
    /// Day of the month, nominally 1..=31.
    pub day: u32,
    /// Year of the observation.
    pub year: i32,
    /// Average temperature of the day, `None` when the source marked it as missing.
    pub avg_temperature: Option<f64>,
}

/// The fields that identify a [`Reading`]: locality plus date.
///
/// Field order is the sort order: country, state, city, then year, month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityKey<'a> {
    pub country: &'a str,
    pub state: &'a str,
    pub city: &'a str,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Reading {
    /// Returns the reduced key used for equality, hashing and ordering.
    pub fn identity_key(&self) -> IdentityKey<'_> {
        IdentityKey {
            country: &self.country,
            state: &self.state,
            city: &self.city,
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Returns the locality tuple `(country, state, city)`.
    pub fn locality(&self) -> (&str, &str, &str) {
        (&self.country, &self.state, &self.city)
    }

    /// Returns the observation day as a calendar date.
    ///
    /// `None` when month, day and year do not form a real date (e.g. February 30th),
    /// which the input format does not rule out.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Returns `true` when the source marked the temperature as missing.
    pub fn is_temperature_missing(&self) -> bool {
        self.avg_temperature.is_none()
    }
}

impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Reading {}

impl Hash for Reading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reading {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity_key().cmp(&other.identity_key())
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ", self.city)?;
        if !self.state.is_empty() {
            write!(f, "{}, ", self.state)?;
        }
        write!(
            f,
            "{} ({}) {:04}-{:02}-{:02}: ",
            self.country, self.region, self.year, self.month, self.day
        )?;
        match self.avg_temperature {
            Some(temp) => write!(f, "{:.1}", temp),
            None => write!(f, "missing"),
        }
    }
}
