//! SecurePass RPC Server: JSON-RPC over stdin/stdout for desktop front ends.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"password.generate", "params":{"length":16}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Files are kept in the current working directory. Logs go to stderr.

use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use securepass::app::App;
use securepass::rpc_handler::{serve, write_message};

use serde_json::json;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn run() -> io::Result<()> {
    let app = Mutex::new(App::new("."));
    let mut stdout = io::stdout().lock();

    write_message(&mut stdout, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;
    info!("rpc server ready");

    serve(&app, io::stdin().lock(), &mut stdout)?;

    info!("stdin closed, shutting down");
    Ok(())
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install log subscriber");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "rpc server stopped");
            ExitCode::FAILURE
        }
    }
}
