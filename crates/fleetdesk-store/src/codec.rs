//! # Line Codecs
//!
//! Text layouts of the whitespace-delimited data files.
//!
//! ```text
//! car rental.txt / available.txt (9 fields):
//!   plate brand model seats colour per_hour per_half_day per_day transmission
//!   ABC1  Toyota Vios 5   Silver 5       50           90      A
//!
//! UserPass.txt (2 fields):
//!   id secret
//!   1  s3cret
//! ```
//!
//! Rates are written in their shortest decimal form (`90`, `5.5`). Older
//! files were written from floats, so reads also accept text like `7.125`
//! or `1e+06` for rates and `5.0` for seats, rounding to the nearest cent
//! or seat. A line that loads is never dropped by the next rewrite.

use fleetdesk_core::validation::{validate_car, validate_secret};
use fleetdesk_core::{Car, Credential, Money, RateSchedule, Transmission};

use crate::flatfile::LineRecord;

const CAR_FIELDS: usize = 9;

impl LineRecord for Car {
    const ENTITY: &'static str = "car";

    fn encode(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            self.plate,
            self.brand,
            self.model,
            self.seat_capacity,
            self.colour,
            self.rates.per_hour.to_plain_string(),
            self.rates.per_half_day.to_plain_string(),
            self.rates.per_day.to_plain_string(),
            self.transmission.code(),
        )
    }

    fn decode(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != CAR_FIELDS {
            return Err(format!(
                "expected {} fields, found {}",
                CAR_FIELDS,
                fields.len()
            ));
        }

        let rate = |name: &str, raw: &str| -> Result<Money, String> {
            Money::parse_rounded(raw)
                .map_err(|e| format!("{}: {}", name, e))
        };

        let car = Car {
            plate: fields[0].to_string(),
            brand: fields[1].to_string(),
            model: fields[2].to_string(),
            seat_capacity: parse_seats(fields[3])?,
            colour: fields[4].to_string(),
            rates: RateSchedule::new(
                rate("rate per hour", fields[5])?,
                rate("rate per half day", fields[6])?,
                rate("rate per day", fields[7])?,
            ),
            transmission: fields[8]
                .parse::<Transmission>()
                .map_err(|e| e.to_string())?,
        };

        validate_car(&car).map_err(|e| e.to_string())?;
        Ok(car)
    }
}

fn parse_seats(raw: &str) -> Result<u32, String> {
    if let Ok(seats) = raw.parse::<u32>() {
        return Ok(seats);
    }

    match raw.parse::<f64>().map(f64::round) {
        Ok(value) if value >= 0.0 && value <= u32::MAX as f64 => Ok(value as u32),
        _ => Err(format!("seat capacity '{}' is not a number", raw)),
    }
}

impl LineRecord for Credential {
    const ENTITY: &'static str = "credential";

    fn encode(&self) -> String {
        format!("{} {}", self.id, self.secret)
    }

    fn decode(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, secret] = fields.as_slice() else {
            return Err(format!("expected 2 fields, found {}", fields.len()));
        };

        let id = id
            .parse::<u32>()
            .map_err(|_| format!("id '{}' is not a number", id))?;
        validate_secret(secret).map_err(|e| e.to_string())?;

        Ok(Credential {
            id,
            secret: secret.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_legacy_car_line() {
        let car = Car::decode("ABC1 Toyota Vios 5 Silver 5 50 90 A").unwrap();
        assert_eq!(car.plate, "ABC1");
        assert_eq!(car.display_name(), "Toyota Vios");
        assert_eq!(car.seat_capacity, 5);
        assert_eq!(car.rates.per_day, Money::from_units(90));
        assert_eq!(car.transmission, Transmission::Automatic);
        assert_eq!(car.encode(), "ABC1 Toyota Vios 5 Silver 5 50 90 A");
    }

    #[test]
    fn test_decode_tolerates_extra_whitespace_and_float_seats() {
        let car = Car::decode("  WXY9  Honda\tCity 5.0 Grey 7.5 45 80.25 M\r").unwrap();
        assert_eq!(car.seat_capacity, 5);
        assert_eq!(car.rates.per_hour, Money::from_cents(750));
        assert_eq!(car.rates.per_day, Money::from_cents(8025));
        assert_eq!(car.transmission, Transmission::Manual);
        assert_eq!(car.encode(), "WXY9 Honda City 5 Grey 7.5 45 80.25 M");
    }

    #[test]
    fn test_decode_rejects_bad_car_lines() {
        let err = Car::decode("ABC1 Toyota Vios 5 Silver 5 50").unwrap_err();
        assert_eq!(err, "expected 9 fields, found 7");

        assert!(Car::decode("ABC1 Toyota Vios five Silver 5 50 90 A").is_err());
        assert!(Car::decode("ABC1 Toyota Vios nan Silver 5 50 90 A").is_err());
        assert!(Car::decode("ABC1 Toyota Vios 5 Silver 5 fifty 90 A").is_err());
        assert!(Car::decode("ABC1 Toyota Vios 5 Silver 5 50 90 X").is_err());
        assert!(Car::decode("ABC1 Toyota Vios 0 Silver 5 50 90 A").is_err());
        assert!(Car::decode("ABC1 Toyota Vios 5 Silver -5 50 90 A").is_err());
    }

    #[test]
    fn test_decode_float_text_from_older_files() {
        let car = Car::decode("QRS7 Proton Saga 4.6 White 7.125 45 80 M").unwrap();
        assert_eq!(car.seat_capacity, 5);
        assert_eq!(car.rates.per_hour, Money::from_cents(713));
        assert_eq!(car.encode(), "QRS7 Proton Saga 5 White 7.13 45 80 M");

        let car = Car::decode("BIG1 Toyota Alphard 7 Black 500 5000 1e+06 A").unwrap();
        assert_eq!(car.rates.per_day, Money::from_units(1_000_000));
        assert_eq!(car.encode(), "BIG1 Toyota Alphard 7 Black 500 5000 1000000 A");
    }

    #[test]
    fn test_credential_lines() {
        let credential = Credential::decode("7 s3cret").unwrap();
        assert_eq!(credential.id, 7);
        assert!(credential.matches("s3cret"));
        assert_eq!(credential.encode(), "7 s3cret");

        assert!(Credential::decode("7").is_err());
        assert!(Credential::decode("seven s3cret").is_err());
        assert!(Credential::decode("7 two words").is_err());
    }
}
