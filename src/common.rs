pub mod coerce;
pub mod error;
