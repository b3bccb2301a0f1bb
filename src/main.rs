use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use statement_replay::{
    Bank, BankConfiguration, SpliceOutput, StatementProcessor, config::DEFAULT_CONFIG_FILE,
};
use tracing_subscriber::EnvFilter;

/// Convert a bank statement CSV into a Selenium IDE script.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file (defaults to ./statement-replay.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bank key: 1 = PC Bank, 2 = CIBC Bank, 3 = RBC Bank
    #[arg(short, long, requires = "file")]
    bank: Option<String>,

    /// CSV file name inside the configured input folder
    #[arg(short, long, requires = "bank")]
    file: Option<String>,
}

fn load_config(path: Option<PathBuf>) -> Result<BankConfiguration> {
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    match path {
        Some(path) => BankConfiguration::from_file(&path)
            .with_context(|| format!("load {}", path.display())),
        None if default.exists() => {
            BankConfiguration::from_file(&default).context("load default config")
        }
        None => {
            let cwd = std::env::current_dir().context("resolve current directory")?;
            Ok(BankConfiguration::with_base_dir(cwd))
        }
    }
}

fn report(bank_name: &str, output: &SpliceOutput) {
    println!(
        "{bank_name} data successfully processed and saved to {}",
        output.intermediate_path.display()
    );
    println!("Selenium file successfully created at {}", output.script_path.display());
}

fn display_menu() {
    println!("\nSelect a bank to process the file:");
    for bank in Bank::ALL {
        println!("{}. {}", bank.key(), bank.name());
    }
    println!("0. Exit");
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_string()))
}

fn interactive(config: &BankConfiguration) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut processor = StatementProcessor::new(config);

    loop {
        display_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            return Ok(());
        };

        if choice == "0" {
            println!("Exiting...");
            return Ok(());
        }

        let bank = match Bank::from_key(&choice) {
            Ok(bank) => bank,
            Err(_) => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        let message = format!("Enter the {} CSV file name (with extension): ", bank.name());
        let Some(file_name) = prompt(&mut lines, &message)? else {
            return Ok(());
        };

        match processor.process(bank.key(), &file_name) {
            Ok(output) => report(bank.name(), &output),
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "statement_replay=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config)?;

    match (args.bank, args.file) {
        (Some(bank_key), Some(file_name)) => {
            let bank = Bank::from_key(&bank_key)?;
            let output = StatementProcessor::new(&config)
                .process(bank.key(), &file_name)
                .with_context(|| format!("process {file_name}"))?;
            report(bank.name(), &output);
            Ok(())
        }
        _ => interactive(&config),
    }
}
