use anyhow::Context;
use clap::Parser;
use hyperlight::config::Config;
use hyperlight::http::engine::Engine;
use hyperlight::http::server::Server;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(config.log_level)
        .init();

    let engine = Engine::new(&config.root)
        .with_context(|| format!("Can't serve from {}", config.root.display()))?;

    Server::from_config(&config, engine)?.run()
}
