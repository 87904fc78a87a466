//! Text shown to the operator: car tables, receipts, the posted terms.

use fleetdesk_core::{Car, Money, Quote, RateBreakdown, RentalReceipt};
use tabled::{settings::Style, Table, Tabled};

/// Formats an amount the way it is quoted at the desk, e.g. `RM 5.5`.
pub fn amount(currency: &str, money: Money) -> String {
    format!("{} {}", currency, money.to_plain_string())
}

/// Renders cars as a table, or a one-line notice when there are none.
pub fn car_table(cars: &[Car], currency: &str) -> String {
    #[derive(Tabled)]
    struct CarRow {
        #[tabled(rename = "Plate")]
        plate: String,
        #[tabled(rename = "Car")]
        name: String,
        #[tabled(rename = "Seats")]
        seats: u32,
        #[tabled(rename = "Colour")]
        colour: String,
        #[tabled(rename = "Per Hour")]
        per_hour: String,
        #[tabled(rename = "Per 12 Hours")]
        per_half_day: String,
        #[tabled(rename = "Per 24 Hours")]
        per_day: String,
        #[tabled(rename = "Gearbox")]
        transmission: String,
    }

    if cars.is_empty() {
        return "No cars to show.".to_string();
    }

    let rows: Vec<CarRow> = cars
        .iter()
        .map(|car| CarRow {
            plate: car.plate.clone(),
            name: car.display_name(),
            seats: car.seat_capacity,
            colour: car.colour.clone(),
            per_hour: amount(currency, car.rates.per_hour),
            per_half_day: amount(currency, car.rates.per_half_day),
            per_day: amount(currency, car.rates.per_day),
            transmission: car.transmission.code().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// "1 x 24h + 0 x 12h + 6 x 1h"
pub fn breakdown(breakdown: &RateBreakdown) -> String {
    format!(
        "{} x 24h + {} x 12h + {} x 1h",
        breakdown.days, breakdown.half_days, breakdown.hours
    )
}

/// Lines printed after a committed rental.
pub fn receipt(receipt: &RentalReceipt, currency: &str) -> Vec<String> {
    vec![
        format!(
            "Car: {} ({}), customer ID {}",
            receipt.car.plate,
            receipt.car.display_name(),
            receipt.customer_id
        ),
        format!("Charged as: {}", breakdown(&receipt.breakdown)),
        format!(
            "Total rental price for {} hours is: {} {}",
            receipt.hours,
            currency,
            receipt.cost.units()
        ),
        format!("Rented at: {}", receipt.rented_at.format("%d/%m/%Y %H:%M:%S")),
    ]
}

/// One-line price of a quote.
pub fn quote_line(car: &Car, quote: &Quote, currency: &str) -> String {
    format!(
        "{} ({}) for {} hours: {} = {} {}",
        car.plate,
        car.display_name(),
        quote.hours,
        breakdown(&quote.breakdown),
        currency,
        quote.total.units()
    )
}

/// The rental terms, with the configured minimum rental length.
pub fn terms(min_hours: u32) -> String {
    [
        "TERMS & CONDITIONS".to_string(),
        format!("1. MINIMUM RENT TIME IS {} HOURS", min_hours),
        "2. RENT AT YOUR OWN RISK".to_string(),
        "3. IN CASE OF AN ACCIDENT, ALL COSTS ARE BORNE BY THE DRIVER".to_string(),
        "4. PLEASE PREPARE THE FOLLOWING ITEMS:".to_string(),
        "   - COPY OF IC, LICENSE".to_string(),
        "   - DEPOSIT (BASED ON CAR TYPE)".to_string(),
        "5. ADDITIONAL CHARGES WILL APPLY FOR LATE RETURNS".to_string(),
        "6. DRIVE SAFELY!".to_string(),
    ]
    .join("\n")
}

/// Masks a secret for display.
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
