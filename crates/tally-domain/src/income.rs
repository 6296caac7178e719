//! Running income totals adjusted as income arrives and debts are cleared.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracks a running signed income total for a single owning context.
///
/// The total is only readable through [`IncomeTally::total`] and only
/// mutable through [`IncomeTally::increase`] and [`IncomeTally::decrease`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeTally {
    pub id: Uuid,
    total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeTally {
    /// Creates a tally with a zero total.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the current running total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Adds `amount` to the total. Negative amounts are accepted and
    /// effectively decrease the total.
    pub fn increase(&mut self, amount: Decimal) {
        self.total += amount;
        self.touch();
    }

    /// Subtracts `amount` from the total. The total may go negative.
    pub fn decrease(&mut self, amount: Decimal) {
        self.total -= amount;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for IncomeTally {
    fn default() -> Self {
        Self::new()
    }
}
