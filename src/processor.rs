use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use chrono::Local;
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::{
    commands::Command,
    config::BankConfiguration,
    errors::{ReplayError, ReplayResult},
    generator::CommandGenerator,
    ids::{IdSource, UuidIds},
    parsers::{prelude::*, row::check_headers},
    splice::{SpliceOutput, TemplateSplicer},
    types::TransactionRecord,
};

/// Maps a csv failure onto the crate error. Record 0 is the header line and
/// carries no data row number.
fn csv_error(err: csv::Error, path: &Path) -> ReplayError {
    let record = err.position().map(|p| p.record());
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ReplayError::io(path, source),
        _ => match record {
            Some(row) if row > 0 => ReplayError::format("row", "", reason).at_row(row),
            _ => ReplayError::format("header", "", reason),
        },
    }
}

/// Reads every data row of a CSV export through `adapter`, in file order.
///
/// `source` only labels I/O errors.
pub fn read_records<R: Read>(
    adapter: &dyn BankAdapter,
    reader: R,
    source: &Path,
) -> ReplayResult<Vec<TransactionRecord>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = csv.headers().map_err(|e| csv_error(e, source))?.clone();
    check_headers(headers.iter(), adapter.required_columns())?;

    let mut records = Vec::new();
    for (index, result) in csv.deserialize::<HashMap<String, String>>().enumerate() {
        let line = index as u64 + 1;
        let row = RawRow::from(result.map_err(|e| csv_error(e, source))?);
        let record = adapter.parse(&row).map_err(|e| e.at_row(line))?;
        records.push(record);
    }

    debug!(
        "Parsed {} {} transactions from {}",
        records.len(),
        adapter.bank_name(),
        source.display()
    );
    Ok(records)
}

/// Drives one bank export from CSV to a spliced Selenium script.
pub struct StatementProcessor<'a, I: IdSource = UuidIds> {
    config: &'a BankConfiguration,
    ids: I,
}

impl<'a> StatementProcessor<'a, UuidIds> {
    pub fn new(config: &'a BankConfiguration) -> Self {
        Self::with_ids(config, UuidIds)
    }
}

impl<'a, I: IdSource> StatementProcessor<'a, I> {
    pub fn with_ids(config: &'a BankConfiguration, ids: I) -> Self {
        Self { config, ids }
    }

    /// `<bank_slug>_output_<yyyymmddhhmmss>_<suffix>.txt` inside `output_folder`.
    ///
    /// The suffix comes from the id source so two runs in the same second
    /// still get distinct files.
    fn intermediate_path(&mut self, bank: Bank) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d%H%M%S");
        let suffix: String = self
            .ids
            .next_id()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(8)
            .collect();
        self.config
            .output_folder
            .join(format!("{}_output_{timestamp}_{suffix}.txt", bank.slug()))
    }

    /// Builds the full command list for `records`: one dialog click, then
    /// the per-transaction steps in order.
    pub fn commands(&mut self, records: &[TransactionRecord]) -> Vec<Command> {
        CommandGenerator::new(&self.config.script, &mut self.ids).sequence(records)
    }

    /// Processes an already-open CSV source for `bank`.
    pub fn process_reader<R: Read>(
        &mut self,
        bank: Bank,
        reader: R,
        source: &Path,
    ) -> ReplayResult<SpliceOutput> {
        self.config.prepare()?;

        let adapter = bank.adapter();
        let records = read_records(adapter.as_ref(), reader, source)?;
        let commands = self.commands(&records);

        let intermediate = self.intermediate_path(bank);
        let master = self.config.master_template_path();
        let script = self.config.output_script_path();

        TemplateSplicer::new(&master, &self.config.placeholder_token).splice(
            &commands,
            &intermediate,
            &script,
        )
    }

    /// Processes `csv_file_name` from the configured input folder.
    pub fn process(&mut self, bank_key: &str, csv_file_name: &str) -> ReplayResult<SpliceOutput> {
        let bank = Bank::from_key(bank_key)?;
        let path = self.config.input_folder.join(csv_file_name);
        let file = File::open(&path).map_err(|e| ReplayError::io(&path, e))?;
        self.process_reader(bank, file, &path)
    }
}
