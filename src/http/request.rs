use crate::http::LINE_TERMINATOR;
use crate::http::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

// METHOD SP TARGET [SP VERSION], single spaces only. The target may be empty.
static REQUEST_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<method>[^ ]+) (?P<target>[^ ]*)(?: (?P<version>[^ ]+))?$")
        .expect("request line pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub target: String,
}

impl Request {
    /// Extracts method and target from the first line of `buf`. The whole
    /// buffer must be UTF-8; lines after the first and the version token are
    /// otherwise ignored.
    pub fn parse(buf: &[u8]) -> Result<Request, ParseError> {
        if buf.is_empty() {
            return Err(ParseError::Empty);
        }

        let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidUtf8)?;
        let first_line = text.split(LINE_TERMINATOR).next().unwrap_or_default();

        let caps = REQUEST_LINE_RE
            .captures(first_line)
            .ok_or_else(|| ParseError::MalformedRequestLine(first_line.to_string()))?;

        Ok(Request {
            method: caps["method"].to_string(),
            target: caps["target"].to_string(),
        })
    }
}
