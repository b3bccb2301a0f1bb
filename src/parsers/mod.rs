pub mod date;
pub mod debit_credit;
pub mod row;
pub mod signed_amount;
pub mod traits;

use crate::errors::{ReplayError, ReplayResult};
use debit_credit::DebitCreditAdapter;
use signed_amount::SignedAmountAdapter;
use traits::BankAdapter;

pub mod prelude {
    pub use super::Bank;
    pub use super::date::DateLayout;
    pub use super::debit_credit::DebitCreditAdapter;
    pub use super::row::RawRow;
    pub use super::signed_amount::SignedAmountAdapter;
    pub use super::traits::BankAdapter;
}

/// Supported banks, selected by the menu key shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    PcBank,
    Cibc,
    Rbc,
}

impl Bank {
    pub const ALL: [Bank; 3] = [Bank::PcBank, Bank::Cibc, Bank::Rbc];

    pub fn from_key(key: &str) -> ReplayResult<Self> {
        match key.trim() {
            "1" => Ok(Bank::PcBank),
            "2" => Ok(Bank::Cibc),
            "3" => Ok(Bank::Rbc),
            other => Err(ReplayError::UnknownBank(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Bank::PcBank => "1",
            Bank::Cibc => "2",
            Bank::Rbc => "3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Bank::PcBank => "PC Bank",
            Bank::Cibc => "CIBC Bank",
            Bank::Rbc => "RBC Bank",
        }
    }

    /// `"PC Bank"` -> `"pc_bank"`, used in output file names.
    pub fn slug(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }

    pub fn adapter(self) -> Box<dyn BankAdapter> {
        match self {
            Bank::PcBank | Bank::Rbc => Box::new(SignedAmountAdapter::new(self.name())),
            Bank::Cibc => Box::new(DebitCreditAdapter::new(self.name())),
        }
    }
}
