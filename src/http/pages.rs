use crate::http::ASSETS_PREFIX;
use crate::http::error::AssetError;
use bytes::Bytes;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const NOT_FOUND_PAGE: &str = "404.html";
pub const NOT_IMPLEMENTED_PAGE: &str = "501.html";

/// Error documents, read once from `<root>/.pages`.
#[derive(Debug, Clone)]
pub struct ErrorPages {
    pub not_found: Bytes,
    pub not_implemented: Bytes,
}

impl ErrorPages {
    pub fn load(root: &Path) -> Result<ErrorPages, AssetError> {
        let dir = root.join(ASSETS_PREFIX);
        Ok(ErrorPages {
            not_found: read_page(dir.join(NOT_FOUND_PAGE))?,
            not_implemented: read_page(dir.join(NOT_IMPLEMENTED_PAGE))?,
        })
    }
}

fn read_page(path: PathBuf) -> Result<Bytes, AssetError> {
    match fs::read(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "loaded error page");
            Ok(Bytes::from(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::Missing { path }),
        Err(source) => Err(AssetError::Unreadable { path, source }),
    }
}
