//! Balance aggregation
//!
//! Sums the quantities of a wallet's unspent tokens at the ledger precision.
//! One pass, constant extra space beyond the running total. The sum is
//! commutative, so token order does not affect the result.
//!
//! A token whose quantity text does not parse aborts the whole aggregation:
//! no partial or approximate total is ever returned.

use crate::types::{Balance, UnspentToken};
use tokenstate_core::{Quantity, Result};

/// Sum already type-filtered unspent tokens into a balance
pub fn aggregate<'a, I>(token_type: &str, tokens: I, precision: u32) -> Result<Balance>
where
    I: IntoIterator<Item = &'a UnspentToken>,
{
    let mut total = Quantity::zero(precision);
    for token in tokens {
        let quantity = Quantity::parse(&token.quantity, precision)?;
        total = total.add(&quantity)?;
    }
    Ok(Balance {
        token_type: token_type.to_string(),
        quantity: total.to_decimal_string(),
    })
}
