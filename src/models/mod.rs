//! Domain models: city reference data and throughput samples.

pub mod city;
pub mod sample;

pub use city::{cities, city_by_id, default_city, City, DEFAULT_CITY_ID};
pub use sample::ThroughputSample;
