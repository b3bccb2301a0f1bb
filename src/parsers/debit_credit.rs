//! Exports with a `YYYY-MM-DD` date and separate `Debit`/`Credit` columns.
//!
//! ```text
//! Date,Description,Debit,Credit
//! 2024-03-15,Grocery Store,12.50,
//! 2024-03-16,Payroll,,1500.00
//! ```

use rust_decimal::Decimal;

use super::{date::DateLayout, row::RawRow, signed_amount::parse_decimal, traits::BankAdapter};
use crate::{
    errors::{ReplayError, ReplayResult},
    types::display_amount,
};

fn unsigned_display(raw: &str) -> String {
    display_amount(raw.trim_start_matches(['-', '+']))
}

#[derive(Debug, Clone)]
pub struct DebitCreditAdapter {
    bank_name: &'static str,
}

impl DebitCreditAdapter {
    pub fn new(bank_name: &'static str) -> Self {
        Self { bank_name }
    }
}

impl BankAdapter for DebitCreditAdapter {
    fn bank_name(&self) -> &str {
        self.bank_name
    }

    fn date_layout(&self) -> DateLayout {
        DateLayout::YearMonthDay
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &["Date", "Description", "Debit", "Credit"]
    }

    fn parse_amount(&self, row: &RawRow) -> ReplayResult<(String, Decimal)> {
        let debit = row.trimmed("Debit")?;
        let credit = row.trimmed("Credit")?;

        // The column decides the direction; the typed amount is always unsigned.
        if !debit.is_empty() {
            let value = parse_decimal("Debit", debit)?;
            return Ok((unsigned_display(debit), -value.abs()));
        }

        if credit.is_empty() {
            return Err(ReplayError::format(
                "Credit",
                credit,
                "both Debit and Credit are empty",
            ));
        }

        let value = parse_decimal("Credit", credit)?;
        Ok((unsigned_display(credit), value.abs()))
    }
}
