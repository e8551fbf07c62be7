use crate::http::engine::Engine;
use crate::http::method::Method;
use crate::http::mime;
use crate::http::response::Response;
use crate::http::status::Status;
use crate::http::{ASSETS_PREFIX, DEFAULT_DOCUMENT};
use bytes::Bytes;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub type HandlerFunc = fn(&Engine, &str) -> Response;

/// Serves a file below the content root. Anything that cannot be served is a 404.
pub fn get(engine: &Engine, target: &str) -> Response {
    let Some(relative) = resolve(target) else {
        return not_found(engine, target);
    };

    let path = engine.root().join(&relative);
    if !path.is_file() {
        return not_found(engine, target);
    }

    match fs::read(&path) {
        Ok(content) => Response::new(Status::OK)
            .with_header("Content-Type", mime::content_type_for(&relative))
            .with_content(content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "content not readable");
            not_found(engine, target)
        }
    }
}

pub fn options(_engine: &Engine, _target: &str) -> Response {
    Response::new(Status::OK).with_header("Allow", Method::allow_header())
}

pub fn not_found(engine: &Engine, _target: &str) -> Response {
    Response::new(Status::NOT_FOUND).with_content(Bytes::clone(&engine.pages().not_found))
}

pub fn not_implemented(engine: &Engine, _target: &str) -> Response {
    Response::new(Status::NOT_IMPLEMENTED)
        .with_content(Bytes::clone(&engine.pages().not_implemented))
}

/// Maps a request target to a path relative to the content root, or `None`
/// when it must not be served.
fn resolve(target: &str) -> Option<PathBuf> {
    let path = target
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_matches('/');

    if path.starts_with(ASSETS_PREFIX) {
        return None;
    }

    let path = if path.is_empty() { DEFAULT_DOCUMENT } else { path };
    let relative = Path::new(path);

    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then(|| relative.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_targets_resolve_to_default_document() {
        assert_eq!(resolve("/"), Some(PathBuf::from(DEFAULT_DOCUMENT)));
        assert_eq!(resolve(""), Some(PathBuf::from(DEFAULT_DOCUMENT)));
        assert_eq!(resolve("//"), Some(PathBuf::from(DEFAULT_DOCUMENT)));
        assert_eq!(resolve("/?lang=en"), Some(PathBuf::from(DEFAULT_DOCUMENT)));
    }

    #[test]
    fn separators_are_stripped() {
        assert_eq!(resolve("/css/site.css/"), Some(PathBuf::from("css/site.css")));
    }

    #[test]
    fn internal_assets_are_never_resolved() {
        assert_eq!(resolve("/.pages/404.html"), None);
        assert_eq!(resolve("/.pages"), None);
        assert_eq!(resolve("/.pagesextra/a.html"), None);
    }

    #[test]
    fn traversal_is_rejected() {
        assert_eq!(resolve("/../secret"), None);
        assert_eq!(resolve("/a/../../secret"), None);
        assert_eq!(resolve("/./index.html"), None);
    }
}
