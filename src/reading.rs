use logos::Logos;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip "[ \t\r\n\u{a0}]+")] // The site pads values with non-breaking spaces
enum Token {
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    #[token("°")]
    Degree,
    #[token("F")]
    Fahrenheit,
}

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum ReadingError {
    #[error("Empty temperature reading")]
    #[diagnostic(code(blanket::reading::empty))]
    Empty,
    #[error("Unexpected `{0}` in temperature reading")]
    #[diagnostic(
        code(blanket::reading::unexpected),
        help("readings look like `62` or `62 °F`")
    )]
    Unexpected(String),
}

/// Parse a scraped daily average such as `"62"` or `"62 °F"` into degrees
/// Fahrenheit.
pub fn parse_temperature(text: &str) -> Result<f64, ReadingError> {
    let mut lexer = Token::lexer(text);

    let value = match lexer.next() {
        Some(Ok(Token::Number)) => lexer
            .slice()
            .parse()
            .map_err(|_| ReadingError::Unexpected(lexer.slice().to_string()))?,
        None => return Err(ReadingError::Empty),
        _ => return Err(ReadingError::Unexpected(lexer.slice().to_string())),
    };

    // Only the unit marks may follow the value
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Degree) | Ok(Token::Fahrenheit) => (),
            _ => return Err(ReadingError::Unexpected(lexer.slice().to_string())),
        }
    }

    Ok(value)
}
