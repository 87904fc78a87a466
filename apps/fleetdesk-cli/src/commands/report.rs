//! # Non-Interactive Commands
//!
//! `fleet`, `quote`, `reset` and `config`. Each returns the text to print so
//! the dispatcher in `lib.rs` stays a plain `println!`.

use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use fleetdesk_core::validation::validate_rental_hours;
use fleetdesk_core::Car;
use fleetdesk_store::{FleetdeskConfig, RentalDesk, StoreError};

use crate::error::CliResult;
use crate::render;

/// Car as printed by `fleet --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub seat_capacity: u32,
    pub colour: String,
    pub rate_per_hour: String,
    pub rate_per_half_day: String,
    pub rate_per_day: String,
    pub transmission: String,
    pub available: bool,
}

impl CarDto {
    fn new(car: &Car, available: bool) -> Self {
        CarDto {
            plate: car.plate.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            seat_capacity: car.seat_capacity,
            colour: car.colour.clone(),
            rate_per_hour: car.rates.per_hour.to_plain_string(),
            rate_per_half_day: car.rates.per_half_day.to_plain_string(),
            rate_per_day: car.rates.per_day.to_plain_string(),
            transmission: car.transmission.code().to_string(),
            available,
        }
    }
}

/// Quote as printed by `quote --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub plate: String,
    pub car: String,
    pub hours: u32,
    pub days: u32,
    pub half_days: u32,
    pub extra_hours: u32,
    /// Sum of the tiers before truncation.
    pub subtotal: String,
    pub total: String,
    pub currency: String,
}

/// Lists the fleet, or only the cars that can be rented now.
pub fn fleet(desk: &RentalDesk, available_only: bool, json: bool) -> CliResult<String> {
    let inventory = desk.inventory();
    let cars = if available_only {
        inventory.availability().list()
    } else {
        inventory.fleet().list()
    };

    if json {
        let dtos: Vec<CarDto> = cars
            .iter()
            .map(|car| CarDto::new(car, inventory.availability().contains(&car.plate)))
            .collect();
        return Ok(serde_json::to_string_pretty(&dtos)?);
    }

    Ok(render::car_table(cars, &desk.config().rental.currency_symbol))
}

/// Prices `hours` on a fleet car, whether or not it is rented out.
///
/// ## Errors
/// - `Validation` if `hours` is below the configured minimum
/// - `NotFound` if no car in the fleet has this plate
pub fn quote(desk: &RentalDesk, plate: &str, hours: u32, json: bool) -> CliResult<String> {
    validate_rental_hours(hours, desk.config().rental.min_hours)?;

    let car = desk
        .inventory()
        .fleet()
        .get(plate)
        .ok_or_else(|| StoreError::not_found("Car", plate))?;
    let quote = car.rates.quote(hours);
    let currency = &desk.config().rental.currency_symbol;

    if json {
        let dto = QuoteDto {
            plate: car.plate.clone(),
            car: car.display_name(),
            hours,
            days: quote.breakdown.days,
            half_days: quote.breakdown.half_days,
            extra_hours: quote.breakdown.hours,
            subtotal: quote.subtotal.to_plain_string(),
            total: quote.total.to_plain_string(),
            currency: currency.clone(),
        };
        return Ok(serde_json::to_string_pretty(&dto)?);
    }

    Ok(render::quote_line(car, &quote, currency))
}

/// Makes the whole fleet available again.
pub fn reset(desk: &mut RentalDesk) -> CliResult<String> {
    let count = desk.inventory_mut().reset_availability()?;
    info!(count, "Availability reset from the command line");
    Ok(format!(
        "Available car list has been reset to full stock ({} available).",
        count
    ))
}

/// Prints the effective configuration, optionally saving it first.
pub fn config(config: &FleetdeskConfig, save: bool, path: Option<PathBuf>) -> CliResult<String> {
    let text = toml::to_string_pretty(config)?;
    if !save {
        return Ok(text);
    }

    let saved = config.save(path)?;
    Ok(format!("{}\nSaved to {}", text, saved.display()))
}
