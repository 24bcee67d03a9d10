use std::time::Duration;

use blanket::{parse_temperature, report, FetchConfig, TemperatureFetcher};
use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use time::{format_description::well_known::Iso8601, Date};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "blanket")]
#[command(about = "Plan a temperature blanket.")]
struct CommandLine {
    /// Weather history page, `{date}` is replaced by the requested day
    #[arg(long, global = true, env = "BLANKET_URL_TEMPLATE")]
    url_template: Option<String>,
    /// Seconds to wait for the weather site, 0 waits forever
    #[arg(long, global = true, env = "BLANKET_TIMEOUT", default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily average temperature of a day
    #[command(alias = "t")]
    Temp { date: String },
    /// Stitch and row gauge of a 4 inch swatch
    #[command(alias = "g")]
    Gauge {
        stitches: f64,
        rows: f64,
        #[arg(long, default_value = "inches")]
        unit: String,
    },
    /// Stitches and rows needed for a blanket
    #[command(alias = "s")]
    Size {
        width: f64,
        length: f64,
        stitch_gauge: f64,
        row_gauge: f64,
    },
    /// Yarn color of a temperature
    #[command(alias = "c")]
    Color {
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
    },
    /// Yarn color of every day between two dates
    #[command(alias = "p")]
    Plan {
        #[arg(value_parser = parse_date)]
        start: Date,
        #[arg(value_parser = parse_date)]
        end: Date,
    },
    /// Walk through every calculation with sample values
    Demo,
}

fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &Iso8601::DATE)
}

fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let commands = CommandLine::parse();

    let mut config = FetchConfig::default().with_timeout(match commands.timeout {
        0 => None,
        seconds => Some(Duration::from_secs(seconds)),
    });
    if let Some(url_template) = commands.url_template {
        config = config.with_url_template(url_template);
    }
    let fetcher = TemperatureFetcher::new(&config);
    let mut out = std::io::stdout().lock();

    let written = match commands.command {
        Commands::Temp { date } => report::temperature(&mut out, &fetcher, &date).map(drop),
        Commands::Gauge {
            stitches,
            rows,
            unit,
        } => report::gauge(&mut out, stitches, rows, &unit),
        Commands::Size {
            width,
            length,
            stitch_gauge,
            row_gauge,
        } => report::size(&mut out, width, length, stitch_gauge, row_gauge),
        Commands::Color { temperature } => report::color(&mut out, temperature),
        Commands::Plan { start, end } => report::plan(&mut out, &fetcher, start, end),
        Commands::Demo => {
            let reading = report::temperature(&mut out, &fetcher, "2024-03-19").into_diagnostic()?;
            if let Some(reading) = reading {
                report::color(&mut out, parse_temperature(&reading)?).into_diagnostic()?;
            }
            report::gauge(&mut out, 15.0, 9.0, "inches").into_diagnostic()?;
            report::size(&mut out, 65.0, 90.0, 15.0, 9.0)
        }
    };

    written.into_diagnostic()
}
