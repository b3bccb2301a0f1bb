//! Turn bank statement CSV exports into Selenium IDE scripts that replay each
//! transaction into a personal-finance web app.
//!
//! ```rust,ignore
//! use statement_replay::{BankConfiguration, StatementProcessor};
//!
//! let config = BankConfiguration::from_file("statement-replay.toml")?;
//! let output = StatementProcessor::new(&config).process("1", "march.csv")?;
//! println!("{}", output.script_path.display());
//! ```

mod types;

pub mod commands;
pub mod config;
pub mod errors;
pub mod generator;
pub mod ids;
pub mod parsers;
pub mod processor;
pub mod splice;

pub use commands::{Command, CommandKind};
pub use config::{BankConfiguration, ScriptSettings};
pub use generator::CommandGenerator;
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use parsers::prelude::*;
pub use processor::StatementProcessor;
pub use splice::{SpliceOutput, TemplateSplicer};
pub use types::TransactionRecord;
