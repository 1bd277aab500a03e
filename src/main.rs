use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;

mod commands;
mod domain;
mod logging;
mod state;
mod summary;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::domain::{DailyTotals, Dataset, group_by_customer};
use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LedgerLens - browse customer transactions in the terminal
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON dataset with `customers` and `transactions`
    /// (defaults to the configured dataset, then the bundled sample)
    dataset: Option<PathBuf>,

    /// Select this customer on startup
    #[arg(long, value_name = "NAME")]
    select: Option<String>,

    /// Initial name filter
    #[arg(long, value_name = "TEXT")]
    name_filter: Option<String>,

    /// Initial amount filter
    #[arg(long, value_name = "TEXT")]
    amount_filter: Option<String>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print per-customer totals without starting the TUI
    Summary {
        /// JSON dataset (same defaults as the TUI)
        dataset: Option<PathBuf>,

        /// Print daily totals for this customer only
        #[arg(long, value_name = "NAME")]
        customer: Option<String>,
    },
    /// Print the version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dataset_arg = match &cli.command {
        Some(Commands::Summary { dataset, .. }) => dataset.clone(),
        _ => cli.dataset.clone(),
    };
    let (config, config_warning) = AppConfig::load();
    let config = config.with_overrides(dataset_arg, cli.log_file.clone());

    if let Some(path) = &config.log_file {
        logging::init(path)?;
    }
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }
    color_eyre::install()?;

    match cli.command {
        Some(Commands::Version) => {
            println!("ledgerlens v{VERSION}");
            Ok(())
        }
        Some(Commands::Summary { customer, .. }) => run_summary(&config, customer.as_deref()),
        None => {
            let options = StartupOptions {
                select: cli.select,
                name_filter: cli.name_filter,
                amount_filter: cli.amount_filter,
            };
            run_tui(config, options)
        }
    }
}

fn run_tui(config: AppConfig, options: StartupOptions) -> Result<()> {
    let dataset = Dataset::load_or_bundled(config.dataset.as_deref())?;
    let mut app = App::new(&dataset, config, options);

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}

fn run_summary(config: &AppConfig, customer: Option<&str>) -> Result<()> {
    let dataset = Dataset::load_or_bundled(config.dataset.as_deref())?;
    let grouped = group_by_customer(&dataset.customers, &dataset.transactions);
    let currency = &config.currency_symbol;

    let output = match customer {
        Some(name) => {
            let transactions = grouped
                .transactions_for(name)
                .ok_or_else(|| eyre!("no customer named '{name}'"))?;
            let totals = DailyTotals::from_transactions(transactions);
            summary::render_customer_totals(name, &totals, currency)
        }
        None => summary::render_summary(&grouped, currency),
    };
    print!("{output}");
    Ok(())
}
