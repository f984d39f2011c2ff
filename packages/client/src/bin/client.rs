//! Interactive CLI client for the bansho room synchronization server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bansho-client -- --room r1
//! cargo run --bin bansho-client -- --url ws://127.0.0.1:8080/ws --room r1 --name alice
//! ```

use bansho_client::session::run_client_session;
use bansho_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bansho-client")]
#[command(about = "CLI client for collaborative code rooms", long_about = None)]
struct Args {
    /// WebSocket URL of the server
    #[arg(short, long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Room to join
    #[arg(short, long)]
    room: String,

    /// Display name sent to the server
    #[arg(short, long, default_value = "anon")]
    name: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client_session(&args.url, &args.room, &args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
