//! # Fleetdesk Console
//!
//! The operator-facing side of Fleetdesk: argument parsing, logging setup
//! and the menus.
//!
//! ## Module Organization
//! ```text
//! fleetdesk_cli/
//! ├── lib.rs          ◄─── You are here (setup & dispatch)
//! ├── args.rs         ◄─── clap arguments and subcommands
//! ├── prompt.rs       ◄─── Prompter trait, dialoguer console
//! ├── render.rs       ◄─── Tables, receipts, terms
//! ├── commands/
//! │   ├── mod.rs      ◄─── Error recovery shared by the menus
//! │   ├── menu.rs     ◄─── Main menu
//! │   ├── admin.rs    ◄─── Admin login and menu
//! │   ├── customer.rs ◄─── User menu and the rent flow
//! │   └── report.rs   ◄─── fleet / quote / reset / config
//! └── error.rs        ◄─── CliError
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod prompt;
pub mod render;

#[cfg(test)]
pub(crate) mod test_support;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetdesk_store::{FleetdeskConfig, RentalDesk};

use args::{Args, Commands};
use prompt::ConsolePrompter;

pub use error::{CliError, CliResult};

/// Parses arguments, sets up logging and runs the chosen command.
pub fn run() -> CliResult<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let mut desk = RentalDesk::open(&config)?;

    match args.command {
        None | Some(Commands::Desk) => {
            info!("Starting interactive desk");
            let mut prompter = ConsolePrompter::new();
            commands::menu::main_menu(&mut desk, &mut prompter)
        }
        Some(Commands::Fleet { available, json }) => {
            println!("{}", commands::report::fleet(&desk, available, json)?);
            Ok(())
        }
        Some(Commands::Quote { plate, hours, json }) => {
            println!("{}", commands::report::quote(&desk, &plate, hours, json)?);
            Ok(())
        }
        Some(Commands::Reset) => {
            println!("{}", commands::report::reset(&mut desk)?);
            Ok(())
        }
        Some(Commands::Config { save }) => {
            println!("{}", commands::report::config(desk.config(), save, args.config.clone())?);
            Ok(())
        }
    }
}

/// Loads `fleetdesk.toml` and applies the `--data-dir` flag on top.
pub fn load_config(args: &Args) -> CliResult<FleetdeskConfig> {
    let mut config = FleetdeskConfig::load(args.config.clone())?;
    if let Some(dir) = &args.data_dir {
        config.storage.data_dir = dir.clone();
    }
    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `warn`, so log lines stay out of the menus
/// - `--verbose`: `warn,fleetdesk=debug`
/// - `RUST_LOG` overrides both
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,fleetdesk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
