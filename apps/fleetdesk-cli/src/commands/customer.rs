//! # User Menu and Rent Flow
//!
//! ```text
//! USER MENU
//!   1. New customer ──► shows the id it will get ──► details ──► rent
//!   2. Existing customer ──► id ──► "Welcome back, NAME!" ──► rent
//!                                └─► "Customer ID not found."
//!   3. Main menu
//!
//! rent:
//!   available cars ──► plate ──── not available ──► message, back to menu
//!        │
//!        ▼
//!   hours (asked again until >= rental.min_hours)
//!        │
//!        ▼
//!   RentalDesk::rent ──► receipt ("Total rental price for N hours is: RM X")
//! ```
//!
//! The minimum rental length is enforced here, at the desk, not by the
//! rental transaction.

use tracing::{debug, warn};

use fleetdesk_core::validation::validate_rental_hours;
use fleetdesk_core::{Customer, NewCustomer};
use fleetdesk_store::RentalDesk;

use crate::commands::recover;
use crate::error::CliResult;
use crate::prompt::{Outcome, Prompter};
use crate::render;

const USER_MENU: [&str; 3] = ["New customer", "Existing customer", "Main menu"];

const NOT_AVAILABLE: &str = "Invalid plate number or car is not available.";

/// Runs the user menu until the operator goes back to the main menu.
pub fn user_menu(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    loop {
        let result = match prompter.select("USER MENU", &USER_MENU)? {
            0 => new_customer(desk, prompter),
            1 => existing_customer(desk, prompter),
            _ => return Ok(()),
        };
        recover(prompter, result)?;
    }
}

fn new_customer(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    prompter.say(&format!(
        "Your customer ID will be: {}",
        desk.customers().next_id()
    ));

    let form = NewCustomer {
        name: prompter.prompt_line("Name")?.trim().to_string(),
        phone: prompter.prompt_line("Phone number")?.trim().to_string(),
        national_id: prompter.prompt_line("IC number")?.trim().to_string(),
        address: prompter.prompt_line("Address")?.trim().to_string(),
    };

    let customer = desk.customers_mut().register(form)?;
    prompter.report(
        Outcome::Success,
        &format!("Customer {} registered with ID {}.", customer.name, customer.id),
    );

    rent(desk, prompter, &customer)
}

fn existing_customer(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    let id = prompter.prompt_integer("Customer ID")?;

    let Some(customer) = desk.customers().find_by_id(id).cloned() else {
        debug!(customer_id = id, "Unknown customer id entered");
        prompter.report(Outcome::Failure, "Customer ID not found.");
        return Ok(());
    };

    prompter.say(&format!("Welcome back, {}!", customer.name));
    rent(desk, prompter, &customer)
}

/// Picks an available car and rents it to `customer`.
pub fn rent(desk: &mut RentalDesk, prompter: &mut dyn Prompter, customer: &Customer) -> CliResult<()> {
    let currency = desk.config().rental.currency_symbol.clone();
    let min_hours = desk.config().rental.min_hours;

    let available = desk.inventory().availability();
    if available.is_empty() {
        prompter.report(Outcome::Failure, "Sorry, no cars are available right now.");
        return Ok(());
    }
    prompter.say(&render::car_table(available.list(), &currency));

    let plate = prompter.prompt_line("Plate number")?.trim().to_string();
    if !desk.inventory().availability().contains(&plate) {
        prompter.report(Outcome::Failure, NOT_AVAILABLE);
        return Ok(());
    }

    let hours = loop {
        let hours = prompter.prompt_integer(&format!("Rental hours (minimum {})", min_hours))?;
        match validate_rental_hours(hours, min_hours) {
            Ok(()) => break hours,
            Err(e) => prompter.report(Outcome::Failure, &e.to_string()),
        }
    };

    let receipt = match desk.rent(customer, &plate, hours) {
        Ok(receipt) => receipt,
        Err(e) if e.is_not_available() => {
            prompter.report(Outcome::Failure, NOT_AVAILABLE);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for line in render::receipt(&receipt, &currency) {
        prompter.say(&line);
    }
    if !receipt.audit_logged {
        warn!(plate = %receipt.car.plate, "Receipt issued without an audit entry");
        prompter.report(
            Outcome::Failure,
            "The rental stands, but it could not be written to the log file.",
        );
    }
    prompter.report(Outcome::Success, "Enjoy your ride!");
    Ok(())
}
