use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a raw request buffer cannot be turned into a `Request`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("request line is not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Error pages could not be loaded. Always a deployment defect.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("error page {} does not exist", .path.display())]
    Missing { path: PathBuf },
    #[error("error page {} could not be read", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
