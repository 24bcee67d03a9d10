use miette::Diagnostic;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FetchConfig;

/// The daily average cell of the history table.
const DAILY_AVERAGE: &str = "span.wu-value.wu-value-to";

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("Could not reach `{url}`")]
    #[diagnostic(
        code(blanket::fetch::transport),
        help("check the network or raise --timeout")
    )]
    Transport {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("`{url}` answered with status {status}")]
    #[diagnostic(code(blanket::fetch::status))]
    Status { url: String, status: u16 },
    #[error("Could not read the page of `{url}`")]
    #[diagnostic(code(blanket::fetch::body))]
    Body {
        url: String,
        source: std::io::Error,
    },
    #[error("No daily average on `{url}`")]
    #[diagnostic(
        code(blanket::fetch::not_found),
        help("the date may have no record, or the page layout changed")
    )]
    NotFound { url: String },
}

/// Anything that can hand out the scraped daily average for a date.
pub trait DailyTemperatureSource {
    fn daily_average(&self, date: &str) -> Result<String, FetchError>;

    /// Every failure collapses to `None`.
    fn find_daily_temp(&self, date: &str) -> Option<String> {
        match self.daily_average(date) {
            Ok(temperature) => Some(temperature),
            Err(e) => {
                warn!(date, error = %e, "daily average lookup failed");
                None
            }
        }
    }
}

pub struct TemperatureFetcher {
    agent: ureq::Agent,
    url_template: String,
}

impl TemperatureFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            url_template: config.url_template.clone(),
        }
    }

    /// The date isn't validated nor escaped.
    pub fn url_for(&self, date: &str) -> String {
        self.url_template.replace("{date}", date)
    }

    pub fn fetch(&self, date: &str) -> Result<String, FetchError> {
        let url = self.url_for(date);
        debug!(%url, "fetching daily history");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => return Err(FetchError::Status { url, status }),
            Err(e) => {
                return Err(FetchError::Transport {
                    url,
                    source: Box::new(e),
                })
            }
        };

        let status = response.status();
        if status != 200 {
            return Err(FetchError::Status { url, status });
        }

        let page = match response.into_string() {
            Ok(page) => page,
            Err(source) => return Err(FetchError::Body { url, source }),
        };

        match extract_daily_average(&page) {
            Some(temperature) => {
                debug!(%url, %temperature, "found daily average");
                Ok(temperature)
            }
            None => Err(FetchError::NotFound { url }),
        }
    }
}

impl DailyTemperatureSource for TemperatureFetcher {
    fn daily_average(&self, date: &str) -> Result<String, FetchError> {
        self.fetch(date)
    }
}

/// Text of the first daily average cell of a history page.
pub fn extract_daily_average(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let selector = Selector::parse(DAILY_AVERAGE).expect("DAILY_AVERAGE is a valid selector");

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect())
}
