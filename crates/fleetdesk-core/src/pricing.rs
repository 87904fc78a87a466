//! # Pricing Module
//!
//! Turns a rental length in hours into a cost using the three rate tiers.
//!
//! ## Tier Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hours = 30                                                             │
//! │                                                                         │
//! │  days      = 30 / 24          = 1   ──► 1 × rate_per_day                │
//! │  half_days = (30 % 24) / 12   = 0   ──► 0 × rate_per_half_day           │
//! │  remaining = (30 % 24) % 12   = 6   ──► 6 × rate_per_hour               │
//! │                                                                         │
//! │  total = sum of the three, truncated to whole currency units           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The half-day tier is only ever 0 or 1 block and the blocks are fixed:
//! an 18-hour rental is one 12-hour block plus six hourly units, even when
//! a full day would be cheaper. There is no proration between tiers.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Car;

/// Hours billed by the day tier.
pub const HOURS_PER_DAY: u32 = 24;

/// Hours billed by the half-day tier.
pub const HOURS_PER_HALF_DAY: u32 = 12;

// =============================================================================
// Rate Schedule
// =============================================================================

/// The three rates a car is billed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Rate for each hour left over after days and half-days.
    pub per_hour: Money,
    /// Rate for a 12-hour block.
    pub per_half_day: Money,
    /// Rate for a 24-hour block.
    pub per_day: Money,
}

impl RateSchedule {
    /// Creates a rate schedule.
    pub const fn new(per_hour: Money, per_half_day: Money, per_day: Money) -> Self {
        RateSchedule {
            per_hour,
            per_half_day,
            per_day,
        }
    }

    /// Prices a rental of `hours` hours.
    ///
    /// ## Example
    /// ```rust
    /// use fleetdesk_core::{Money, RateSchedule};
    ///
    /// let rates = RateSchedule::new(
    ///     Money::from_units(5),
    ///     Money::from_units(50),
    ///     Money::from_units(90),
    /// );
    ///
    /// assert_eq!(rates.cost(0), Money::zero());
    /// assert_eq!(rates.cost(13), Money::from_units(55));
    /// ```
    pub fn cost(&self, hours: u32) -> Money {
        self.quote(hours).total
    }

    /// Prices a rental and keeps the intermediate figures.
    pub fn quote(&self, hours: u32) -> Quote {
        let breakdown = RateBreakdown::from_hours(hours);
        let subtotal = self.per_day * breakdown.days
            + self.per_half_day * breakdown.half_days
            + self.per_hour * breakdown.hours;

        Quote {
            hours,
            breakdown,
            subtotal,
            total: subtotal.truncate_to_units(),
        }
    }
}

// =============================================================================
// Breakdown & Quote
// =============================================================================

/// How many blocks of each tier a rental length decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub days: u32,
    pub half_days: u32,
    pub hours: u32,
}

impl RateBreakdown {
    /// Decomposes a rental length into days, half-days and hours.
    ///
    /// `half_days` is always 0 or 1 and `hours` is always below 12.
    pub const fn from_hours(hours: u32) -> Self {
        let rest = hours % HOURS_PER_DAY;
        RateBreakdown {
            days: hours / HOURS_PER_DAY,
            half_days: rest / HOURS_PER_HALF_DAY,
            hours: rest % HOURS_PER_HALF_DAY,
        }
    }

    /// Total hours covered by the breakdown.
    pub const fn total_hours(&self) -> u32 {
        self.days * HOURS_PER_DAY + self.half_days * HOURS_PER_HALF_DAY + self.hours
    }
}

/// A priced rental length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Requested rental length.
    pub hours: u32,
    /// Tier decomposition of `hours`.
    pub breakdown: RateBreakdown,
    /// Exact sum of the tiers, in cents.
    pub subtotal: Money,
    /// Amount billed: `subtotal` truncated to whole units.
    pub total: Money,
}

/// Computes the cost of renting `car` for `hours` hours.
///
/// Never faults: `hours = 0` costs nothing. Minimum rental length is a
/// business rule checked by the caller (see
/// [`validate_rental_hours`](crate::validation::validate_rental_hours)).
pub fn rental_cost(hours: u32, car: &Car) -> Money {
    car.rates.cost(hours)
}
