use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::accounting::RemainingPolicy;

/// Records income and expenses, tracks a budget ceiling and exports the
/// transaction list.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Profile directory holding the saved transactions and budget.
    #[arg(long, default_value = ".finledger")]
    pub data_dir: PathBuf,

    /// What the budget status reports as remaining.
    #[arg(long, value_enum, default_value_t = Remaining::Ceiling)]
    pub remaining: Remaining,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a transaction.
    Add {
        description: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// `income` or `expense`.
        #[arg(value_name = "TYPE")]
        kind: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Set the budget ceiling; 0 turns budget tracking off.
    Budget {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Print totals, budget status and the transaction list.
    Show,
    /// Print the income vs expenses pie chart as ECharts JSON options.
    Chart,
    /// Export the transaction list.
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file; standard output when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remaining {
    /// Report the budget ceiling itself.
    Ceiling,
    /// Report the budget minus total expenses.
    Headroom,
}

impl From<Remaining> for RemainingPolicy {
    fn from(remaining: Remaining) -> Self {
        match remaining {
            Remaining::Ceiling => RemainingPolicy::Ceiling,
            Remaining::Headroom => RemainingPolicy::Headroom,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}
