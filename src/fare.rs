//! Airfare calculation.
//!
//! Amounts are whole cents so totals stay exact; display converts to dollars.

use std::fmt;

/// Errors from quoting a fare.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    #[error("a fare needs at least one traveler")]
    NoTravelers,
}

pub type Result<T> = core::result::Result<T, FareError>;

/// A fare amount in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fare(u64);

impl Fare {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

}

/// US currency with thousands separators, e.g. `$1,250.00`.
impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}

/// Per-unit prices, all in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareSchedule {
    pub base_ticket: u64,
    pub per_bag: u64,
    pub per_mile: u64,
}

impl FareSchedule {
    /// $100.00 per ticket, $25.00 per checked bag, $0.10 per mile.
    pub const STANDARD: Self = Self {
        base_ticket: 10_000,
        per_bag: 2_500,
        per_mile: 10,
    };

    /// `base_ticket * travelers + per_bag * checked_bags + per_mile * distance`.
    ///
    /// Bags and miles are charged once per booking, not per traveler.
    pub fn quote(&self, checked_bags: u32, distance: u32, travelers: u32) -> Result<Fare> {
        if travelers == 0 {
            return Err(FareError::NoTravelers);
        }

        let total = self.base_ticket * u64::from(travelers)
            + self.per_bag * u64::from(checked_bags)
            + self.per_mile * u64::from(distance);

        tracing::debug!(checked_bags, distance, travelers, cents = total, "quoted fare");
        Ok(Fare(total))
    }
}

/// Quote a fare on the standard schedule.
pub fn calculate_airfare(checked_bags: u32, distance: u32, travelers: u32) -> Result<Fare> {
    FareSchedule::STANDARD.quote(checked_bags, distance, travelers)
}
