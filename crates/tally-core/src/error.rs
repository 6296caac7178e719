use thiserror::Error;

use tally_domain::money::AmountParseError;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountParseError),
}
