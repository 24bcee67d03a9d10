use std::time::Duration;

/// Weather Underground history for the San Diego airport station.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://www.wunderground.com/history/daily/us/ca/la-jolla/KSAN/date/{date}";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// `{date}` is replaced verbatim by the requested date.
    pub url_template: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: String::from(DEFAULT_URL_TEMPLATE),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl FetchConfig {
    pub fn with_url_template(mut self, url_template: impl Into<String>) -> Self {
        self.url_template = url_template.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
