//! Exports with a `MM/DD/YYYY` date and one signed `Amount` column.
//!
//! ```text
//! Date,Description,Amount
//! 03/15/2024,Coffee Shop,-20.00
//! ```

use rust_decimal::Decimal;

use super::{date::DateLayout, row::RawRow, traits::BankAdapter};
use crate::{
    errors::{ReplayError, ReplayResult},
    types::display_amount,
};

pub(crate) fn parse_decimal(field: &str, raw: &str) -> ReplayResult<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| ReplayError::format(field, raw, e.to_string()))
}

#[derive(Debug, Clone)]
pub struct SignedAmountAdapter {
    bank_name: &'static str,
}

impl SignedAmountAdapter {
    pub fn new(bank_name: &'static str) -> Self {
        Self { bank_name }
    }
}

impl BankAdapter for SignedAmountAdapter {
    fn bank_name(&self) -> &str {
        self.bank_name
    }

    fn date_layout(&self) -> DateLayout {
        DateLayout::MonthDayYear
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &["Date", "Description", "Amount"]
    }

    fn parse_amount(&self, row: &RawRow) -> ReplayResult<(String, Decimal)> {
        let raw = row.trimmed("Amount")?;
        let signed = parse_decimal("Amount", raw)?;
        Ok((display_amount(raw), signed))
    }
}
