//! # Fleetdesk Entry Point
//!
//! Thin wrapper: all setup lives in `lib.rs` so it can be tested.

fn main() {
    if let Err(e) = fleetdesk_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
