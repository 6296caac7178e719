//! Fixed-point money helpers: parsing, rounding, and display formatting.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Controls how negative amounts are rendered.
#[derive(Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

impl NegativeStyle {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "parentheses" => NegativeStyle::Parentheses,
            _ => NegativeStyle::Sign,
        }
    }
}

impl fmt::Display for NegativeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NegativeStyle::Sign => "sign",
            NegativeStyle::Parentheses => "parentheses",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when parsing amount text.
pub enum AmountParseError {
    Empty,
    Invalid(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => f.write_str("amount is empty"),
            AmountParseError::Invalid(raw) => write!(f, "`{}` is not a valid amount", raw),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Number of decimal places conventionally carried by the currency.
pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

/// Parses user-entered decimal text, tolerating `,` digit grouping.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountParseError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(AmountParseError::Empty);
    }
    raw.replace(',', "")
        .parse::<Decimal>()
        .map_err(|_| AmountParseError::Invalid(raw.to_string()))
}

/// Rounds to the currency's minor units, midpoints away from zero.
pub fn round_to_minor_units(amount: Decimal, code: &str) -> Decimal {
    amount.round_dp_with_strategy(minor_units_for(code), RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with currency symbol, digit grouping, and the
/// requested negative styling.
pub fn format_amount(amount: Decimal, code: &str, style: NegativeStyle) -> String {
    let precision = minor_units_for(code);
    let rounded = round_to_minor_units(amount, code);
    let negative = rounded < Decimal::ZERO;
    let body = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos..]),
        None => (body.as_str(), ""),
    };
    let magnitude = format!("{}{}", group_digits(int_part), frac_part);
    let symbol = symbol_for(code);
    match (style, negative) {
        (NegativeStyle::Sign, true) => format!("-{}{}", symbol, magnitude),
        (NegativeStyle::Parentheses, true) => format!("({}{})", symbol, magnitude),
        (_, false) => format!("{}{}", symbol, magnitude),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
