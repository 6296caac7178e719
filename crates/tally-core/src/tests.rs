use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{CoreError, IncomeService};
use tally_config::Config;
use tally_domain::money::AmountParseError;

#[test]
fn income_service_creates_zero_tally() {
    let tally = IncomeService::create();

    assert_eq!(IncomeService::total(&tally), Decimal::ZERO);
}

#[test]
fn income_service_increases_and_decreases() {
    let mut tally = IncomeService::create();

    IncomeService::increase(&mut tally, dec!(100.00));
    IncomeService::decrease(&mut tally, dec!(30.00));

    assert_eq!(IncomeService::total(&tally), dec!(70.00));
}

#[test]
fn income_service_allows_negative_totals() {
    let mut tally = IncomeService::create();

    IncomeService::decrease(&mut tally, dec!(50.00));

    assert_eq!(IncomeService::total(&tally), dec!(-50.00));
}

#[test]
fn input_helpers_parse_round_and_apply() {
    let mut tally = IncomeService::create();

    let applied =
        IncomeService::increase_from_input(&mut tally, "1,250.005", "USD").expect("increase");
    assert_eq!(applied, dec!(1250.01));
    assert_eq!(IncomeService::total(&tally), dec!(1250.01));

    let applied = IncomeService::decrease_from_input(&mut tally, "250.01", "USD").expect("decrease");
    assert_eq!(applied, dec!(250.01));
    assert_eq!(IncomeService::total(&tally), dec!(1000.00));
}

#[test]
fn input_helpers_reject_malformed_amounts() {
    let mut tally = IncomeService::create();

    let err = IncomeService::increase_from_input(&mut tally, "ten", "USD").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Amount(AmountParseError::Invalid(_))
    ));
    assert_eq!(IncomeService::total(&tally), Decimal::ZERO);

    let err = IncomeService::decrease_from_input(&mut tally, "", "USD").unwrap_err();
    assert!(matches!(err, CoreError::Amount(AmountParseError::Empty)));
}

#[test]
fn formatted_total_follows_config() {
    let mut tally = IncomeService::create();
    IncomeService::decrease(&mut tally, dec!(1234.5));

    let mut config = Config::default();
    assert_eq!(
        IncomeService::formatted_total(&tally, &config),
        "-$1,234.50"
    );

    config.negative_style = "parentheses".into();
    assert_eq!(
        IncomeService::formatted_total(&tally, &config),
        "($1,234.50)"
    );
}
