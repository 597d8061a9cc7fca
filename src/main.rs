use clap::Parser;
use tracing::{debug, info, warn};

use livedvr::config::Config;

#[derive(Parser)]
#[command(version)]
struct Args {
    /// Set config file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = Config::parse(args.config)?;

    livedvr::log::set(livedvr::log::directives(&cfg.log.level));

    warn!("set log level : {}", cfg.log.level);
    debug!("http : {:?}", cfg.http);
    debug!("upstream : {}", cfg.upstream.url);

    let listener = tokio::net::TcpListener::bind(cfg.http.listen).await?;
    livedvr::serve(cfg, listener, shutdown_signal()).await?;
    info!("Server shutdown");
    Ok(())
}

async fn shutdown_signal() {
    let str = livedvr::signal::wait_for_stop_signal().await;
    debug!("Received signal: {}", str);
}
