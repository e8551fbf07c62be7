use crate::concurrency::ThreadPool;
use crate::config::Config;
use crate::http::engine::Engine;
use anyhow::Context;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::time::Duration;

/// Accept loop around an [`Engine`]: one read, one write, close.
pub struct Server {
    listener: TcpListener,
    engine: Arc<Engine>,
    pool: Option<ThreadPool>,
    buffer_size: usize,
    read_timeout: Option<Duration>,
}

impl Server {
    pub fn new(listener: TcpListener, engine: Engine) -> Server {
        Server {
            listener,
            engine: Arc::new(engine),
            pool: None,
            buffer_size: crate::http::BUFFER_SIZE,
            read_timeout: None,
        }
    }

    pub fn from_config(config: &Config, engine: Engine) -> anyhow::Result<Server> {
        let addr = config.listen_addr();
        let listener =
            TcpListener::bind(&addr).with_context(|| format!("Can't bind address {}", addr))?;

        let mut server = Server::new(listener, engine)
            .with_buffer_size(config.buffer_size)
            .with_read_timeout(config.read_timeout.map(Duration::from_secs));
        if config.workers > 0 {
            server = server.with_workers(config.workers)?;
        }
        Ok(server)
    }

    /// Hands connections to `workers` pool threads instead of serving them on
    /// the accepting thread.
    pub fn with_workers(mut self, workers: usize) -> anyhow::Result<Server> {
        self.pool = Some(ThreadPool::new(workers)?);
        Ok(self)
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Server {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Server {
        self.read_timeout = timeout;
        self
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Can't read listener address")
    }

    pub fn run(self) -> anyhow::Result<()> {
        tracing::info!(addr = %self.local_addr()?, "listening");

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to accept connection");
                    continue;
                }
            };

            let engine = Arc::clone(&self.engine);
            let buffer_size = self.buffer_size;
            let read_timeout = self.read_timeout;

            match &self.pool {
                Some(pool) => pool.execute(move || {
                    serve_connection(&engine, stream, buffer_size, read_timeout)
                })?,
                None => serve_connection(&engine, stream, buffer_size, read_timeout),
            }
        }
        Ok(())
    }
}

fn serve_connection(
    engine: &Engine,
    stream: TcpStream,
    buffer_size: usize,
    read_timeout: Option<Duration>,
) {
    let peer = stream.peer_addr().ok();
    tracing::info!(peer = ?peer, "accepted connection");

    if let Err(e) = exchange(engine, stream, buffer_size, read_timeout) {
        tracing::warn!(peer = ?peer, error = %format!("{:#}", e), "dropped connection");
    }
}

fn exchange(
    engine: &Engine,
    mut stream: TcpStream,
    buffer_size: usize,
    read_timeout: Option<Duration>,
) -> anyhow::Result<()> {
    stream
        .set_read_timeout(read_timeout)
        .context("Can't set read timeout")?;

    let mut buf = vec![0u8; buffer_size];
    let n = stream.read(&mut buf).context("Error while reading request")?;

    let response = engine.handle(&buf[..n]).context("Can't handle request")?;

    stream
        .write_all(&response)
        .context("Error while writing response")?;
    stream.flush().context("Error while flushing response")?;

    // Peer may already be gone; nothing left to report.
    let _ = stream.shutdown(Shutdown::Both);
    Ok(())
}
