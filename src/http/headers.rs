use crate::http::mime::DEFAULT_CONTENT_TYPE;
use std::time::SystemTime;

/// Ordered header list. Insertion order is the wire order; a name appears at
/// most once (compared case-insensitively).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers::default()
    }

    /// The set every response starts from: `Connection`, `Content-Type`, `Date`.
    pub fn base(now: SystemTime) -> Headers {
        let mut headers = Headers::new();
        headers.set("Connection", "close");
        headers.set("Content-Type", DEFAULT_CONTENT_TYPE);
        headers.set("Date", httpdate::fmt_http_date(now));
        headers
    }

    /// Replaces the value of an existing header in place, or appends it.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}
