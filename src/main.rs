use clap::Parser;
use std::sync::Arc;
use tokio::sync::Notify;

mod api;
mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;
mod store;

use store::{SeedData, Store};

#[derive(Parser)]
#[command(version, about = "Mock REST API for the SportzHub court booking app", long_about = None)]
struct Cli {
    /// Port to listen on, overriding `server.port`
    port: Option<u16>,
    /// Configuration file, without extension
    #[arg(short, long, default_value = "config")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = config::Config::load_from(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    logger::init(&cfg)?;

    let store = match cfg.data.seed_file {
        Some(ref path) => Store::from_seed(SeedData::load(path)?),
        None => Store::seeded(),
    };

    // Requests are served one at a time against the store, so one thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg, store))
}

async fn async_main(cfg: config::Config, store: Store) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, store));
    {
        let router = state.router();
        let store = router.store();
        logger::log_seed_loaded(store.users().len(), store.courts().len());
    }
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, shutdown))
        .await;

    logger::log_server_stopped();
    Ok(())
}
