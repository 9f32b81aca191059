mod precipitation;
mod stations;
mod temperature;
mod tobs;

pub use precipitation::precipitation;
pub use stations::stations;
pub use temperature::{temperature_between, temperature_since};
pub use tobs::tobs;
