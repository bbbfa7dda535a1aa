// Connection module
// Serves one accepted TCP connection with hyper on the local task set

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a connection in a task spawned on the current `LocalSet`.
///
/// The connection is closed once `http.request_timeout` elapses,
/// keep-alive follows `http.keep_alive`.
pub fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let state = Arc::clone(state);

    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);
        let timeout = Duration::from_secs(state.config.http.request_timeout);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.http.keep_alive);

        let service = service_fn(move |req| {
            handler::handle_request(req, Arc::clone(&state), peer_addr)
        });
        let conn = builder.serve_connection(io, service);

        match tokio::time::timeout(timeout, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {} seconds",
                timeout.as_secs()
            )),
        }
    });
}
