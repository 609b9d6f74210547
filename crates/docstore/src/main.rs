//! # docstore binary
//!
//! Intentionally thin: everything lives in `cli.rs` (process concerns) and
//! the `docstore` library (HTTP gateway).

use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    cli::run().await
}
