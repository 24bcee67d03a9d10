//! Plan a temperature blanket: one row per day, colored by that day's
//! average temperature.

pub mod color;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gauge;
pub mod plan;
pub mod reading;
pub mod report;
pub mod size;

pub use color::{yarn_color, YarnColor};
pub use config::FetchConfig;
pub use error::Error;
pub use fetch::{extract_daily_average, DailyTemperatureSource, FetchError, TemperatureFetcher};
pub use gauge::{calculate_crochet_gauge, Gauge, GaugeError, MeasurementUnit};
pub use plan::{color_for_date, colors_between, ColorTally, DailyColor};
pub use reading::{parse_temperature, ReadingError};
pub use size::{calculate_blanket_size, BlanketSize};
