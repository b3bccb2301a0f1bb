use statement_replay::{Bank, BankConfiguration, StatementProcessor};
use std::{env, fs, path::Path};

const CIBC_CSV: &str = "\
Date,Description,Debit,Credit
2024-03-15,Grocery Store,12.50,
2024-03-16,Payroll,,1500.00
2024-03-17,Monthly Fee,5.00,
";

const MASTER: &str =
    r#"{"name":"MinhasEconomias","tests":[{"commands":[<REPLACE_CONTENT_HERE>]}]}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pass a folder to keep the generated files, otherwise they land in the temp dir
    let args: Vec<String> = env::args().collect();
    let base = if args.len() > 1 {
        args[1].clone().into()
    } else {
        env::temp_dir().join("statement-replay-demo")
    };

    let config = BankConfiguration::with_base_dir(&base);
    fs::create_dir_all(&config.selenium_template_folder)?;
    fs::write(config.master_template_path(), MASTER)?;

    let output = StatementProcessor::new(&config).process_reader(
        Bank::Cibc,
        CIBC_CSV.as_bytes(),
        Path::new("inline.csv"),
    )?;

    println!("Commands written to {}", output.intermediate_path.display());
    println!("Script written to {}\n", output.script_path.display());
    println!("{}", fs::read_to_string(&output.intermediate_path)?);

    Ok(())
}
