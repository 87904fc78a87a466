//! # Demo Fleet Generator
//!
//! Fills an empty data directory with a demo fleet and makes it available.
//!
//! ## Usage
//! ```bash
//! # 12 cars (default) in the configured data directory
//! cargo run -p fleetdesk-store --bin seed
//!
//! # Custom amount
//! cargo run -p fleetdesk-store --bin seed -- --count 30
//!
//! # Specific data directory
//! cargo run -p fleetdesk-store --bin seed -- --data-dir ./demo
//! ```
//!
//! ## Generated Cars
//! - Plate: `{PREFIX}{NUMBER}`, e.g. `WXY1001`
//! - Brand / model / seats drawn from a local catalogue
//! - Hourly rate RM 5 - 14, half day and day priced below hourly totals
//! - Mix of automatic and manual gearboxes

use std::env;
use std::path::PathBuf;

use fleetdesk_core::{Car, Money, RateSchedule, Transmission};
use fleetdesk_store::{FleetdeskConfig, RentalDesk};

/// Catalogue of (brand, model, seats).
const MODELS: &[(&str, &str, u32)] = &[
    ("Perodua", "Myvi", 5),
    ("Perodua", "Axia", 5),
    ("Perodua", "Alza", 7),
    ("Proton", "Saga", 5),
    ("Proton", "Persona", 5),
    ("Proton", "X70", 5),
    ("Toyota", "Vios", 5),
    ("Toyota", "Innova", 8),
    ("Honda", "City", 5),
    ("Honda", "CR-V", 5),
    ("Nissan", "Almera", 5),
    ("Mitsubishi", "Xpander", 7),
];

const COLOURS: &[&str] = &["Silver", "White", "Black", "Red", "Grey", "Blue"];

const PLATE_PREFIXES: &[&str] = &["WXY", "BKT", "JHR", "PNG", "VAB"];

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SeedArgs {
    count: usize,
    data_dir: Option<PathBuf>,
    help: bool,
}

impl Default for SeedArgs {
    fn default() -> Self {
        SeedArgs {
            count: 12,
            data_dir: None,
            help: false,
        }
    }
}

/// Parses everything after the program name.
fn parse_args(args: &[String]) -> Result<SeedArgs, String> {
    let mut parsed = SeedArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{} needs a value", arg))?;
                parsed.count = value
                    .parse()
                    .map_err(|_| format!("invalid count '{}': expected a whole number", value))?;
            }
            "--data-dir" | "-d" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{} needs a value", arg))?;
                parsed.data_dir = Some(PathBuf::from(value));
            }
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }

    Ok(parsed)
}

fn print_usage() {
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>       Number of cars to generate (default: 12)");
    println!("  -d, --data-dir <DIR>  Data directory (default: from fleetdesk.toml)");
    println!("  -h, --help            Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let SeedArgs {
        count,
        data_dir,
        help,
    } = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if help {
        println!("Fleetdesk Demo Fleet Generator");
        println!();
        print_usage();
        return Ok(());
    }

    let mut config = FleetdeskConfig::load(None)?;
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir;
    }

    println!("🚗 Fleetdesk Demo Fleet Generator");
    println!("=================================");
    println!("Data directory: {}", config.storage.data_dir.display());
    println!("Cars:           {}", count);
    println!();

    let mut desk = RentalDesk::open(&config)?;
    println!("✓ Data files loaded");

    let existing = desk.inventory().fleet().len();
    if existing > 0 {
        println!("⚠ Fleet already has {} cars", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete '{}' to regenerate.", config.storage.fleet_file);
        return Ok(());
    }

    println!();
    println!("Generating cars...");

    let mut generated = 0;
    for seed in 0..count {
        let car = generate_car(seed);
        if let Err(e) = desk.inventory_mut().add_car(car.clone()) {
            eprintln!("Failed to add {}: {}", car.plate, e);
            continue;
        }
        generated += 1;
        println!(
            "  {} {} ({} seats, {}) RM {}/h",
            car.plate,
            car.display_name(),
            car.seat_capacity,
            car.transmission,
            car.rates.per_hour.to_plain_string()
        );
    }

    let available = desk.inventory_mut().reset_availability()?;

    println!();
    println!("✓ Generated {} cars", generated);
    println!("✓ {} cars available for rent", available);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one car with deterministic, plausible data.
fn generate_car(seed: usize) -> Car {
    let (brand, model, seats) = MODELS[seed % MODELS.len()];
    let prefix = PLATE_PREFIXES[(seed / MODELS.len()) % PLATE_PREFIXES.len()];
    let plate = format!("{}{}", prefix, 1001 + seed);

    // Hourly RM 5 - 14; half day ~7x hourly; day ~11x hourly.
    let per_hour = 5 + (seed * 7 % 10) as i64;
    let per_half_day = per_hour * 7;
    let per_day = per_hour * 11;

    let transmission = if seed % 4 == 3 {
        Transmission::Manual
    } else {
        Transmission::Automatic
    };

    Car {
        plate,
        brand: brand.to_string(),
        model: model.to_string(),
        seat_capacity: seats,
        colour: COLOURS[seed % COLOURS.len()].to_string(),
        rates: RateSchedule::new(
            Money::from_units(per_hour),
            Money::from_units(per_half_day),
            Money::from_units(per_day),
        ),
        transmission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&[]).unwrap(), SeedArgs::default());

        let parsed = parse_args(&args(&["--count", "30", "-d", "./demo"])).unwrap();
        assert_eq!(parsed.count, 30);
        assert_eq!(parsed.data_dir, Some(PathBuf::from("./demo")));
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_bad_count_is_an_error() {
        let err = parse_args(&args(&["--count", "lots"])).unwrap_err();
        assert_eq!(err, "invalid count 'lots': expected a whole number");
        assert_eq!(parse_args(&args(&["--count"])).unwrap_err(), "--count needs a value");
        assert!(parse_args(&args(&["--colour", "red"])).is_err());
    }

    #[test]
    fn test_generated_cars_are_valid() {
        for seed in 0..40 {
            let car = generate_car(seed);
            assert!(fleetdesk_core::validation::validate_car(&car).is_ok(), "{}", car.plate);
        }
    }
}
