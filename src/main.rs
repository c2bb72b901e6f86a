use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use savings_ledger::domain::DateRange;
use savings_ledger::engine::LedgerEngine;
use savings_ledger::output::LedgerFile;
use savings_ledger::source::CsvExportSource;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let range = DateRange::new(args.from, args.to)?;
    let source = CsvExportSource::new(args.accounts_file, args.statements_dir);

    let mut engine = LedgerEngine::new(source, LedgerFile::new(args.output), range);
    let summary = engine.run()?;

    println!(
        "{} accounts written to {}",
        summary.accounts,
        engine.ledger().path().display()
    );
    Ok(())
}

#[derive(Parser)]
struct Arguments {
    /// Account listing export: serial, name, account number.
    accounts_file: PathBuf,
    /// Directory holding one `<account number>.csv` statement export per account.
    statements_dir: PathBuf,
    #[arg(short, long, default_value = "data/transactions.csv")]
    output: PathBuf,
    #[arg(long, default_value = "2023-01-01")]
    from: NaiveDate,
    #[arg(long, default_value = "2023-12-31")]
    to: NaiveDate,
    #[arg(long)]
    log_level: Option<tracing::Level>,
}
