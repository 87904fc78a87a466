//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Car rental desk for a small fleet.
#[derive(Parser, Debug)]
#[command(name = "fleetdesk", version)]
pub struct Args {
    /// Configuration file path (default: <config dir>/fleetdesk.toml)
    #[arg(short, long, global = true, env = "FLEETDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the data files, overrides the config file
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive desk when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Non-interactive commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive desk
    Desk,

    /// List the fleet
    Fleet {
        /// Only cars that can be rented now
        #[arg(long)]
        available: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a rental without renting
    Quote {
        /// Plate of a car in the fleet
        #[arg(long)]
        plate: String,

        /// Rental length in hours
        #[arg(long)]
        hours: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Make every car in the fleet available again
    Reset,

    /// Print the effective configuration
    Config {
        /// Also write it to the config file
        #[arg(long)]
        save: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_desk() {
        let args = Args::try_parse_from(["fleetdesk"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_quote_arguments() {
        let args = Args::try_parse_from([
            "fleetdesk", "quote", "--plate", "ABC1", "--hours", "30", "--json", "-d", "/tmp/desk",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Quote { plate, hours, json }) => {
                assert_eq!(plate, "ABC1");
                assert_eq!(hours, 30);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/desk")));
    }

    #[test]
    fn test_quote_requires_hours() {
        assert!(Args::try_parse_from(["fleetdesk", "quote", "--plate", "ABC1"]).is_err());
    }
}
