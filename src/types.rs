use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Bank-agnostic statement line, ready to be typed into the finance app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// `DD/MM/YYYY`
    pub date: String,
    pub description: String,
    /// Display amount with a comma decimal separator, e.g. `12,50`.
    pub amount: String,
    /// Signed value; negative means money left the account.
    pub amount_signed: Decimal,
}

impl TransactionRecord {
    /// Expenses are strictly negative; a zero amount is booked as income.
    pub fn is_expense(&self) -> bool {
        self.amount_signed < Decimal::ZERO
    }

    pub fn amount_f64(&self) -> f64 {
        self.amount_signed.to_f64().unwrap_or_default()
    }
}

/// Swaps the decimal point for the comma the finance app expects.
pub(crate) fn display_amount(raw: &str) -> String {
    raw.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn record(amount: &str) -> TransactionRecord {
        TransactionRecord {
            date: "15/03/2024".to_string(),
            description: "Coffee Shop".to_string(),
            amount: display_amount(amount),
            amount_signed: Decimal::from_str(amount).unwrap(),
        }
    }

    #[rstest]
    #[case("-20.00", true)]
    #[case("-0.01", true)]
    #[case("0.00", false)]
    #[case("-0.00", false)]
    #[case("8.00", false)]
    fn test_is_expense(#[case] amount: &str, #[case] expected: bool) {
        assert_eq!(record(amount).is_expense(), expected);
    }

    #[rstest]
    #[case("12.50", "12,50")]
    #[case("-20.00", "-20,00")]
    #[case("7", "7")]
    fn test_display_amount(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(display_amount(raw), expected);
    }

    #[test]
    fn test_amount_f64() {
        assert_eq!(record("-12.5").amount_f64(), -12.5);
    }

    #[test]
    fn test_record_serialization() {
        let rec = record("-20.00");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("15/03/2024"));
        assert!(json.contains("-20,00"));

        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
