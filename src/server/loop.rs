// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections until `shutdown` is notified.
///
/// Must run inside a `LocalSet`; each connection is served by `spawn_local`.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr)) => handle_connection(stream, peer_addr, &state),
                Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
            },
            () = shutdown.notified() => break,
        }
    }
}
