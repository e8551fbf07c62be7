use crate::http::LINE_TERMINATOR;
use crate::http::headers::Headers;
use crate::http::status::Status;
use bytes::{BufMut, Bytes, BytesMut};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub headers: Headers,
    pub content: Option<Bytes>,
}

impl Response {
    /// A response carrying the base header set stamped with the current time.
    pub fn new(status: Status) -> Response {
        Response::from_parts(status, Headers::base(SystemTime::now()), None)
    }

    pub fn from_parts(status: Status, headers: Headers, content: Option<Bytes>) -> Response {
        Response {
            status,
            headers,
            content,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Response {
        self.headers.set(name, value);
        self
    }

    /// Attaches a body and sets `Content-Length` to its exact byte length.
    pub fn with_content(mut self, content: impl Into<Bytes>) -> Response {
        let content = content.into();
        self.headers.set("Content-Length", content.len().to_string());
        self.content = Some(content);
        self
    }

    /// Wire form: status line, headers, blank line, raw body.
    pub fn serialize(&self, version: &str) -> Bytes {
        let content_len = self.content.as_ref().map(|c| c.len()).unwrap_or(0);
        let mut buf = BytesMut::with_capacity(content_len + (self.headers.len() + 2) * 32);

        buf.put_slice(
            format!(
                "{} {} {}{}",
                version, self.status.code_num, self.status.message, LINE_TERMINATOR
            )
            .as_bytes(),
        );

        for (key, value) in self.headers.iter() {
            buf.put_slice(format!("{}: {}{}", key, value, LINE_TERMINATOR).as_bytes());
        }

        if let Some(c) = &self.content {
            if !self.headers.contains("Content-Length") {
                buf.put_slice(format!("Content-Length: {}{}", c.len(), LINE_TERMINATOR).as_bytes());
            }
            buf.put_slice(LINE_TERMINATOR.as_bytes());
            buf.put_slice(c);
        } else {
            buf.put_slice(LINE_TERMINATOR.as_bytes());
        }

        buf.freeze()
    }
}
