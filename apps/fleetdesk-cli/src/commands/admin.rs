//! # Admin Menu
//!
//! ## Login
//! ```text
//! Password: ****
//!      │
//!      ▼
//! CredentialStore::verify(secret)
//!      ├── false ──► "Wrong password. Returning to main menu."
//!      └── true  ──► ADMIN MENU
//!                      1. Add new admin
//!                      2. Show all car data
//!                      3. Add new car        (rentable after the next reset)
//!                      4. Delete car         (also leaves availability)
//!                      5. Reset available cars
//!                      6. Log off
//! ```

use tracing::{info, warn};

use fleetdesk_core::{Car, Money, RateSchedule, Transmission};
use fleetdesk_store::RentalDesk;

use crate::commands::recover;
use crate::error::CliResult;
use crate::prompt::{prompt_parsed, Outcome, Prompter};
use crate::render;

const ADMIN_MENU: [&str; 6] = [
    "Add new admin",
    "Show all car data",
    "Add new car",
    "Delete car",
    "Reset available cars",
    "Log off",
];

const TRANSMISSIONS: [&str; 2] = ["Automatic (A)", "Manual (M)"];

/// Asks for the admin password and opens the admin menu on success.
pub fn login(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    let secret = prompter.prompt_masked_secret("Password")?;

    if !desk.credentials().verify(&secret) {
        warn!("Admin login rejected");
        prompter.report(Outcome::Failure, "Wrong password. Returning to main menu.");
        return Ok(());
    }

    info!("Admin logged in");
    prompter.report(Outcome::Success, "Login successful.");
    admin_menu(desk, prompter)
}

fn admin_menu(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    loop {
        let result = match prompter.select("ADMIN MENU", &ADMIN_MENU)? {
            0 => add_admin(desk, prompter),
            1 => {
                show_fleet(desk, prompter);
                Ok(())
            }
            2 => add_car(desk, prompter),
            3 => delete_car(desk, prompter),
            4 => reset_available(desk, prompter),
            _ => {
                info!("Admin logged off");
                return Ok(());
            }
        };
        recover(prompter, result)?;
    }
}

fn add_admin(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    prompter.say(&format!("New admin ID: {}", desk.credentials().next_id()));
    let secret = prompter.prompt_masked_secret("New admin password")?;

    let credential = desk.credentials_mut().register(&secret)?;
    prompter.report(
        Outcome::Success,
        &format!(
            "Admin {} added with password {}",
            credential.id,
            render::mask(&credential.secret)
        ),
    );
    Ok(())
}

fn show_fleet(desk: &RentalDesk, prompter: &mut dyn Prompter) {
    let currency = &desk.config().rental.currency_symbol;
    let inventory = desk.inventory();

    prompter.say(&render::car_table(inventory.fleet().list(), currency));
    prompter.say(&format!(
        "Fleet: {}, available: {}",
        inventory.fleet().len(),
        inventory.availability().len()
    ));
}

fn add_car(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    let plate = prompter.prompt_line("Plate number")?;
    let brand = prompter.prompt_line("Brand")?;
    let model = prompter.prompt_line("Model")?;
    let seat_capacity = prompter.prompt_integer("Seat capacity")?;
    let colour = prompter.prompt_line("Colour")?;
    let per_hour: Money = prompt_parsed(prompter, "Rate per hour")?;
    let per_half_day: Money = prompt_parsed(prompter, "Rate per 12 hours")?;
    let per_day: Money = prompt_parsed(prompter, "Rate per 24 hours")?;
    let transmission = match prompter.select("Transmission", &TRANSMISSIONS)? {
        0 => Transmission::Automatic,
        _ => Transmission::Manual,
    };

    let car = Car {
        plate: plate.trim().to_string(),
        brand: brand.trim().to_string(),
        model: model.trim().to_string(),
        seat_capacity,
        colour: colour.trim().to_string(),
        rates: RateSchedule::new(per_hour, per_half_day, per_day),
        transmission,
    };

    let plate = car.plate.clone();
    desk.inventory_mut().add_car(car)?;
    prompter.report(
        Outcome::Success,
        &format!("Car {} added. It can be rented after the next reset.", plate),
    );
    Ok(())
}

fn delete_car(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    show_fleet(desk, prompter);
    let plate = prompter.prompt_line("Plate number to delete")?;

    if desk.inventory_mut().delete_car(plate.trim())? {
        prompter.report(Outcome::Success, "Car deleted successfully!");
    } else {
        prompter.report(Outcome::Failure, "Car not found.");
    }
    Ok(())
}

fn reset_available(desk: &mut RentalDesk, prompter: &mut dyn Prompter) -> CliResult<()> {
    let count = desk.inventory_mut().reset_availability()?;
    prompter.report(
        Outcome::Success,
        &format!(
            "Available car list has been reset to full stock ({} available).",
            count
        ),
    );
    Ok(())
}
