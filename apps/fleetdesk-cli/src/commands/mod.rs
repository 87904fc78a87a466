//! # Console Commands
//!
//! ```text
//! commands/
//! ├── menu.rs      Main menu: admin, user, terms, exit
//! ├── admin.rs     Login, add admin, fleet upkeep, reset
//! ├── customer.rs  New / existing customer, rent flow
//! └── report.rs    Non-interactive fleet, quote, reset, config
//! ```
//!
//! Menu actions report recoverable errors to the operator and return to
//! the menu they came from. Terminal failures end the session.

pub mod admin;
pub mod customer;
pub mod menu;
pub mod report;

use tracing::warn;

use crate::error::CliResult;
use crate::prompt::{Outcome, Prompter};

/// Shows a recoverable error and carries on; passes anything else up.
pub(crate) fn recover(prompter: &mut dyn Prompter, result: CliResult<()>) -> CliResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, "Menu action failed");
            prompter.report(Outcome::Failure, &e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
