use miette::Diagnostic;
use thiserror::Error;

use crate::{fetch::FetchError, gauge::GaugeError, reading::ReadingError};

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Reading(#[from] ReadingError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gauge(#[from] GaugeError),
}
