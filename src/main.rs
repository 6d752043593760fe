use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use finance_tracker::cli::Session;
use finance_tracker::config::paths::{DATA_FILE_ENV, DEFAULT_DATA_FILE};
use finance_tracker::config::{Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Record income and expenses, list them, and see your balance \
                  from an interactive menu. Transactions are kept in a JSON \
                  file in the working directory."
)]
struct Cli {
    /// Transactions file to load and save
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::with_data_file(cli.file);
    let settings = Settings::load_or_default(&paths).unwrap_or_else(|e| {
        println!("{}. Using default settings.", e);
        Settings::default()
    });

    let stdin = io::stdin();
    let mut session = Session::new(&paths, settings, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}
