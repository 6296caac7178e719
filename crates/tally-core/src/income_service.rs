//! Service helpers for mutating and rendering income tallies.

use rust_decimal::Decimal;

use tally_config::Config;
use tally_domain::{
    income::IncomeTally,
    money::{self, NegativeStyle},
};

use crate::CoreResult;

/// Provides constructor and mutation helpers for [`IncomeTally`] instances.
pub struct IncomeService;

impl IncomeService {
    /// Creates a fresh tally with a zero total.
    pub fn create() -> IncomeTally {
        IncomeTally::new()
    }

    /// Adds `amount` to the running total.
    pub fn increase(tally: &mut IncomeTally, amount: Decimal) {
        tally.increase(amount);
        tracing::debug!(
            "Increased tally {} by {}; total {}",
            tally.id,
            amount,
            tally.total()
        );
    }

    /// Subtracts `amount` from the running total.
    pub fn decrease(tally: &mut IncomeTally, amount: Decimal) {
        tally.decrease(amount);
        tracing::debug!(
            "Decreased tally {} by {}; total {}",
            tally.id,
            amount,
            tally.total()
        );
    }

    /// Returns the current running total.
    pub fn total(tally: &IncomeTally) -> Decimal {
        tally.total()
    }

    /// Parses `input`, rounds it to `currency` minor units, and adds it to
    /// the total. Returns the amount actually applied.
    pub fn increase_from_input(
        tally: &mut IncomeTally,
        input: &str,
        currency: &str,
    ) -> CoreResult<Decimal> {
        let amount = money::round_to_minor_units(money::parse_amount(input)?, currency);
        Self::increase(tally, amount);
        Ok(amount)
    }

    /// Parses `input`, rounds it to `currency` minor units, and subtracts
    /// it from the total. Returns the amount actually applied.
    pub fn decrease_from_input(
        tally: &mut IncomeTally,
        input: &str,
        currency: &str,
    ) -> CoreResult<Decimal> {
        let amount = money::round_to_minor_units(money::parse_amount(input)?, currency);
        Self::decrease(tally, amount);
        Ok(amount)
    }

    /// Renders the running total according to the configured preferences.
    pub fn formatted_total(tally: &IncomeTally, config: &Config) -> String {
        let style = NegativeStyle::from_str(&config.negative_style);
        money::format_amount(tally.total(), &config.currency, style)
    }
}
