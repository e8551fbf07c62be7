#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const NOT_FOUND_HTML: &str = "<html><body><h1>404 Not Found</h1></body></html>\n";
pub const NOT_IMPLEMENTED_HTML: &str = "<html><body><h1>501 Not Implemented</h1></body></html>\n";

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Content root under the system temp dir, removed on drop.
pub struct Site {
    root: PathBuf,
}

impl Site {
    /// A root with both error pages in place.
    pub fn new() -> Site {
        let site = Site::bare();
        site.write(".pages/404.html", NOT_FOUND_HTML.as_bytes());
        site.write(".pages/501.html", NOT_IMPLEMENTED_HTML.as_bytes());
        site
    }

    /// A root with no files at all.
    pub fn bare() -> Site {
        let root = std::env::temp_dir().join(format!(
            "hyperlight-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&root).unwrap();
        Site { root }
    }

    pub fn write(&self, relative: &str, content: &[u8]) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Splits a serialized response into status line, header lines and body.
pub fn split_response(bytes: &[u8]) -> (String, Vec<String>, Vec<u8>) {
    let head_end = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has a blank line");
    let head = std::str::from_utf8(&bytes[..head_end]).unwrap();
    let mut lines = head.split("\r\n").map(String::from);
    let status_line = lines.next().unwrap();

    (status_line, lines.collect(), bytes[head_end + 4..].to_vec())
}

pub fn header<'a>(headers: &'a [String], name: &str) -> Option<&'a str> {
    headers.iter().find_map(|line| {
        let (k, v) = line.split_once(": ")?;
        k.eq_ignore_ascii_case(name).then_some(v)
    })
}
