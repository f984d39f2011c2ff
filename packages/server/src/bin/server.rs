//! Room synchronization server for collaborative code editing.
//!
//! Clients join named rooms over WebSocket and converge on a shared code
//! buffer, language selection, and chat transcript.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bansho-server
//! cargo run --bin bansho-server -- --host 0.0.0.0 --port 3000
//! ```

use bansho_server::ui::{AppState, Server};
use bansho_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bansho-server")]
#[command(about = "Room synchronization server for collaborative editing", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let server = Server::new(AppState::in_memory());
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
