//! roomlet entry point
//!
//! A minimal shell: parse, dispatch, report, exit. All wiring lives in
//! the CLI module.

#[tokio::main]
async fn main() {
    if let Err(e) = roomlet::cli::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
