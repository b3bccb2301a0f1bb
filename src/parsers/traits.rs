use rust_decimal::Decimal;

use super::{date::DateLayout, row::RawRow};
use crate::{errors::ReplayResult, types::TransactionRecord};

/// Per-bank rules for turning a CSV row into a [`TransactionRecord`].
pub trait BankAdapter {
    /// Human-readable bank label, e.g. `"PC Bank"`.
    fn bank_name(&self) -> &str;

    fn date_layout(&self) -> DateLayout;

    /// Columns that must be present in the CSV header.
    fn required_columns(&self) -> &'static [&'static str];

    /// Display amount and signed value for a row.
    fn parse_amount(&self, row: &RawRow) -> ReplayResult<(String, Decimal)>;

    fn parse(&self, row: &RawRow) -> ReplayResult<TransactionRecord> {
        let date = self.date_layout().to_day_month_year(row.field("Date")?)?;
        let description = row.field("Description")?.to_string();
        let (amount, amount_signed) = self.parse_amount(row)?;

        Ok(TransactionRecord {
            date,
            description,
            amount,
            amount_signed,
        })
    }
}
