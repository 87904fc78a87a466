//! # Main Menu
//!
//! ```text
//! MAIN MENU
//!   1. Admin ──────────► password ──► admin menu
//!   2. User ───────────► user menu
//!   3. Terms & Conditions
//!   4. Exit
//! ```

use tracing::info;

use fleetdesk_store::RentalDesk;

use crate::commands::{admin, customer, recover};
use crate::error::CliResult;
use crate::prompt::Prompter;
use crate::render;

const MAIN_MENU: [&str; 4] = ["Admin", "User", "Terms & Conditions", "Exit"];

/// Runs the main menu until the operator exits.
pub fn main_menu(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    prompter.say("WELCOME TO FLEETDESK CAR RENTAL");

    loop {
        let result = match prompter.select("MAIN MENU", &MAIN_MENU)? {
            0 => admin::login(desk, prompter),
            1 => customer::user_menu(desk, prompter),
            2 => {
                prompter.say(&render::terms(desk.config().rental.min_hours));
                Ok(())
            }
            _ => {
                info!("Desk closed");
                prompter.say("Thank you for using Fleetdesk. Goodbye!");
                return Ok(());
            }
        };
        recover(prompter, result)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::test_support::TestDesk;

    #[test]
    fn test_exit() {
        let mut test = TestDesk::empty();
        let mut prompter = ScriptedPrompter::new(&["4"]);

        main_menu(&mut test.desk, &mut prompter).unwrap();
        assert!(prompter.saw("Goodbye"));
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_terms_show_minimum_hours() {
        let mut test = TestDesk::empty();
        let mut prompter = ScriptedPrompter::new(&["3", "4"]);

        main_menu(&mut test.desk, &mut prompter).unwrap();
        assert!(prompter.saw("1. MINIMUM RENT TIME IS 3 HOURS"));
        assert!(prompter.saw("6. DRIVE SAFELY!"));
    }

    #[test]
    fn test_closed_input_ends_the_session() {
        let mut test = TestDesk::empty();
        let mut prompter = ScriptedPrompter::new(&["3"]);

        let err = main_menu(&mut test.desk, &mut prompter).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
