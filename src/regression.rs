//! Ordinary least-squares slope and the temperature trend built on it.

use crate::types::reading::{Reading, MISSING_TEMPERATURE};

/// Slope of the ordinary least-squares line through the points `(xs[i], ys[i])`.
///
/// Computed from plain sums:
///
/// ```text
/// slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// ```
///
/// Only `min(xs.len(), ys.len())` pairs are used. With fewer than two points, or when
/// every `x` is the same, the denominator is zero and the result is not finite (NaN or
/// infinite). Callers check with [`f64::is_finite`].
///
/// # Examples
///
/// ```
/// use global_weather::slope;
///
/// assert_eq!(slope(&[2000.0, 2001.0], &[10.0, 20.0]), 10.0);
/// assert!(slope(&[2000.0], &[10.0]).is_nan());
/// ```
pub fn slope(xs: &[f64], ys: &[f64]) -> f64 {
    let mut n = 0.0;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x_square) = (0.0, 0.0, 0.0, 0.0);

    for (&x, &y) in xs.iter().zip(ys) {
        n += 1.0;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x_square += x * x;
    }

    (n * sum_xy - sum_x * sum_y) / (n * sum_x_square - sum_x * sum_x)
}

/// Temperature trend of `readings` in degrees per year.
///
/// Readings without a temperature are left out; the rest are regressed with the year as
/// `x` and the average temperature as `y` (see [`slope`]). Returns a non-finite value
/// when fewer than two readings have a temperature, or when they all share one year.
///
/// # Examples
///
/// ```
/// use global_weather::{temperature_slope, Reading};
///
/// let readings = [
///     Reading::builder().country("US").city("Caribou").month(1).day(1).year(2000).avg_temperature(10.0).build(),
///     Reading::builder().country("US").city("Caribou").month(1).day(1).year(2001).avg_temperature(20.0).build(),
/// ];
/// assert_eq!(temperature_slope(&readings), 10.0);
/// ```
pub fn temperature_slope<'a, I>(readings: I) -> f64
where
    I: IntoIterator<Item = &'a Reading>,
{
    // Hand-built readings may still carry the raw sentinel
    let (years, temperatures): (Vec<f64>, Vec<f64>) = readings
        .into_iter()
        .filter_map(|r| r.avg_temperature.map(|t| (f64::from(r.year), t)))
        .filter(|&(_, t)| t != MISSING_TEMPERATURE)
        .unzip();

    slope(&years, &temperatures)
}
