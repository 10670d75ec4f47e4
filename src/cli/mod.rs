// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// The only layer that prints to stdout.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConfigArgs, FitArgs, TestArgs};

#[derive(Parser, Debug)]
#[command(
    name = "event-datamodule",
    version,
    about = "Split event/label TSV files into seeded partitions and batch them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Fit(args)     => run_fit(args),
            Commands::Test(args)    => run_test(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_fit(args: FitArgs) -> Result<()> {
    use crate::application::fit_use_case::FitUseCase;

    let cfg = args.config.resolve()?;
    tracing::info!("Fit stage on data in: {}", cfg.data_dir.display());

    let report = FitUseCase::new(cfg, args.hparams_dir).execute()?;
    for p in [&report.train, &report.val] {
        println!("{:<10} {:>8} records {:>6} batches", p.name, p.records, p.batches);
    }
    Ok(())
}

fn run_test(args: TestArgs) -> Result<()> {
    use crate::application::test_use_case::TestUseCase;

    let cfg = args.config.resolve()?;
    tracing::info!("Test stage on data in: {}", cfg.data_dir.display());

    let p = TestUseCase::new(cfg).execute()?;
    println!("{:<10} {:>8} records {:>6} batches", p.name, p.records, p.batches);
    Ok(())
}

fn run_inspect(args: ConfigArgs) -> Result<()> {
    let cfg = args.resolve()?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
