use thiserror::Error;

/// Invalid arguments passed to a [`crate::WeatherDataset`] query.
///
/// A failed query leaves the dataset untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Index {index} is out of bounds for a dataset of {len} readings")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid index and/or count: {count} readings from index {index} do not fit in a dataset of {len} readings")]
    InvalidRange {
        index: usize,
        count: usize,
        len: usize,
    },

    #[error("Invalid month value {0}. Month must be between 1 and 12.")]
    InvalidMonth(u32),

    #[error("Invalid day value {0}. Day must be between 1 and 31.")]
    InvalidDay(u32),
}
