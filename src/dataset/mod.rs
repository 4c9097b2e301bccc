pub mod error;
pub mod queries;
pub mod weather_dataset;
