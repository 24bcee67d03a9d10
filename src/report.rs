//! The lines printed by the `blanket` binary.

use std::io::{self, Write};

use time::Date;

use crate::{
    color::yarn_color,
    fetch::DailyTemperatureSource,
    gauge::calculate_crochet_gauge,
    plan::{colors_between, ColorTally},
    size::calculate_blanket_size,
};

/// Returns the scraped reading so callers can keep going with it.
pub fn temperature(
    out: &mut impl Write,
    source: &impl DailyTemperatureSource,
    date: &str,
) -> io::Result<Option<String>> {
    let temperature = source.find_daily_temp(date);
    match &temperature {
        Some(temperature) => writeln!(out, "Daily Average Temperature on {date}: {temperature}")?,
        None => writeln!(out, "Temperature data not found for {date}.")?,
    }
    Ok(temperature)
}

pub fn gauge(out: &mut impl Write, stitches: f64, rows: f64, unit: &str) -> io::Result<()> {
    match calculate_crochet_gauge(stitches, rows, unit) {
        Some(gauge) => {
            writeln!(
                out,
                "Stitch gauge: {} stitches for every 1 inch",
                gauge.stitches_per_inch
            )?;
            writeln!(out, "Row gauge: {} rows for every 1 inch", gauge.rows_per_inch)
        }
        None => writeln!(out, "Wrong measurement unit, try inches"),
    }
}

pub fn size(
    out: &mut impl Write,
    width: f64,
    length: f64,
    stitch_gauge: f64,
    row_gauge: f64,
) -> io::Result<()> {
    let size = calculate_blanket_size(width, length, stitch_gauge, row_gauge);
    writeln!(out, "Total stitches: {}", size.stitches)?;
    writeln!(out, "Total rows: {}", size.rows)
}

pub fn color(out: &mut impl Write, temperature: f64) -> io::Result<()> {
    writeln!(out, "Yarn color: {}", yarn_color(temperature))
}

/// One line per day, a blank line, then the rows needed per color.
pub fn plan(
    out: &mut impl Write,
    source: &impl DailyTemperatureSource,
    start: Date,
    end: Date,
) -> io::Result<()> {
    let days = colors_between(source, start, end);

    for (date, day) in &days {
        match day {
            Some(day) => writeln!(out, "{date}: {} ({})", day.color, day.reading)?,
            None => writeln!(out, "{date}: temperature data not found")?,
        }
    }

    let tally = ColorTally::from_days(days.iter().map(|(_, day)| day.as_ref()));
    writeln!(out)?;
    for (color, rows) in tally.iter() {
        writeln!(out, "{color}: {rows} rows")?;
    }
    if tally.missing() > 0 {
        writeln!(out, "missing: {} days", tally.missing())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::plan::tests::march;

    fn printed(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn found_temperature() {
        let mut out = Vec::new();
        let reading = temperature(&mut out, &march(), "2024-03-19").unwrap();

        assert_eq!(reading.as_deref(), Some("61 °F"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Daily Average Temperature on 2024-03-19: 61 °F\n"
        );
    }

    #[test]
    fn missing_temperature() {
        let mut out = Vec::new();
        let reading = temperature(&mut out, &march(), "2024-03-20").unwrap();

        assert_eq!(reading, None);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Temperature data not found for 2024-03-20.\n"
        );
    }

    #[test]
    fn gauge_lines() {
        assert_eq!(
            printed(|out| gauge(out, 15.0, 9.0, "inches")),
            "Stitch gauge: 3.75 stitches for every 1 inch\nRow gauge: 2.25 rows for every 1 inch\n"
        );
        assert_eq!(
            printed(|out| gauge(out, 15.0, 9.0, "cm")),
            "Wrong measurement unit, try inches\n"
        );
    }

    #[test]
    fn size_lines() {
        assert_eq!(
            printed(|out| size(out, 65.0, 90.0, 15.0, 9.0)),
            "Total stitches: 975\nTotal rows: 810\n"
        );
    }

    #[test]
    fn color_line() {
        assert_eq!(printed(|out| color(out, 31.0)), "Yarn color: light blue\n");
    }

    #[test]
    fn plan_lines() {
        assert_eq!(
            printed(|out| plan(out, &march(), date!(2024 - 03 - 18), date!(2024 - 03 - 21))),
            "2024-03-18: green (58)\n\
             2024-03-19: yellow (61 °F)\n\
             2024-03-20: temperature data not found\n\
             2024-03-21: temperature data not found\n\
             \n\
             green: 1 rows\n\
             yellow: 1 rows\n\
             missing: 2 days\n"
        );
    }

    #[test]
    fn plan_without_gaps() {
        assert_eq!(
            printed(|out| plan(out, &march(), date!(2024 - 03 - 22), date!(2024 - 03 - 22))),
            "2024-03-22: white (29)\n\nwhite: 1 rows\n"
        );
    }
}
