use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Server settings, from the command line or `HYPERLIGHT_*` variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "hyperlight")]
#[command(about = "Single-exchange static file HTTP/1.1 server")]
#[command(version)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, default_value = "127.0.0.1", env = "HYPERLIGHT_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 4444, env = "HYPERLIGHT_PORT")]
    pub port: u16,

    /// Directory content is served from; error pages live in its `.pages`
    #[arg(short, long, default_value = ".", env = "HYPERLIGHT_ROOT")]
    pub root: PathBuf,

    /// Bytes read from each connection
    #[arg(
        long,
        default_value_t = crate::http::BUFFER_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        env = "HYPERLIGHT_BUFFER_SIZE"
    )]
    pub buffer_size: usize,

    /// Worker threads; 0 serves every connection on the accepting thread
    #[arg(short, long, default_value_t = 0, env = "HYPERLIGHT_WORKERS")]
    pub workers: usize,

    /// Socket read timeout in seconds; blocks forever when unset
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "HYPERLIGHT_READ_TIMEOUT"
    )]
    pub read_timeout: Option<u64>,

    /// Maximum log level
    #[arg(long, default_value_t = Level::INFO, env = "HYPERLIGHT_LOG_LEVEL")]
    pub log_level: Level,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
