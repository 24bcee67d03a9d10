use std::collections::BTreeMap;

use time::Date;
use tracing::{debug, warn};

use crate::{
    color::{yarn_color, YarnColor},
    error::Error,
    fetch::DailyTemperatureSource,
    reading::parse_temperature,
};

/// One row of the blanket. The date is kept by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyColor {
    /// The text as displayed by the weather site.
    pub reading: String,
    pub temperature: f64,
    pub color: YarnColor,
}

pub fn color_for_date(
    source: &impl DailyTemperatureSource,
    date: &str,
) -> Result<DailyColor, Error> {
    let reading = source.daily_average(date)?;
    let temperature = parse_temperature(&reading)?;
    let color = yarn_color(temperature);
    debug!(date, temperature, %color, "picked yarn");

    Ok(DailyColor {
        reading,
        temperature,
        color,
    })
}

/// Every day from `start` to `end` included, one request at a time.
/// Days without a usable reading are `None`.
pub fn colors_between(
    source: &impl DailyTemperatureSource,
    start: Date,
    end: Date,
) -> Vec<(Date, Option<DailyColor>)> {
    let mut days = Vec::new();
    let mut date = start;

    while date <= end {
        let day = match color_for_date(source, &date.to_string()) {
            Ok(day) => Some(day),
            Err(e) => {
                warn!(%date, error = %e, "no color for day");
                None
            }
        };
        days.push((date, day));

        date = match date.next_day() {
            Some(next) => next,
            None => break,
        };
    }

    days
}

/// How many rows of each color the blanket needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTally {
    counts: BTreeMap<YarnColor, usize>,
    missing: usize,
}

impl ColorTally {
    pub fn from_days<'a>(days: impl IntoIterator<Item = Option<&'a DailyColor>>) -> Self {
        let mut tally = Self::default();
        for day in days {
            match day {
                Some(day) => *tally.counts.entry(day.color).or_default() += 1,
                None => tally.missing += 1,
            }
        }
        tally
    }

    pub fn count(&self, color: YarnColor) -> usize {
        self.counts.get(&color).copied().unwrap_or_default()
    }

    /// Days that could not be colored.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Only the colors in use, coldest first.
    pub fn iter(&self) -> impl Iterator<Item = (YarnColor, usize)> + '_ {
        self.counts.iter().map(|(color, count)| (*color, *count))
    }
}
