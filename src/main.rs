use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use finledger::accounting::Ledger;
use finledger::config::{Args, Command, ExportFormat};
use finledger::data;
use finledger::forms::{self, Submission, TransactionForm};
use finledger::presentation::{chart, pdf, ChartData, Presenter, Summary, TextPresenter};
use finledger::storage::{FileStore, KeyValueStore, Store};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let store = Store::from(FileStore::open(&args.data_dir)?);
    let mut ledger = Ledger::initialize(store, args.remaining.into());
    let mut presenter = TextPresenter::new(io::stdout().lock());

    match args.command {
        Command::Add {
            description,
            amount,
            kind,
            category,
        } => {
            let form = TransactionForm {
                description: &description,
                amount: &amount,
                kind: &kind,
                category: &category,
            };
            if forms::submit_transaction(&mut ledger, &form)? == Submission::Accepted {
                info!("transaction recorded, description={:?}", description.trim());
            }
            refresh(&ledger, &mut presenter)?;
        },
        Command::Budget { amount } => {
            if forms::submit_budget(&mut ledger, &amount)? == Submission::Accepted {
                info!("budget set, budget={}", ledger.budget());
            }
            refresh(&ledger, &mut presenter)?;
        },
        Command::Show => {
            presenter.render_summary(&Summary::from(&ledger))?;
            presenter.render_transactions(ledger.transactions())?;
        },
        Command::Chart => {
            let options = chart::pie_chart(&ChartData::from_transactions(ledger.transactions()));
            println!("{}", options);
        },
        Command::Export { format, output } => {
            let out = open_output(output)?;
            match format {
                ExportFormat::Csv => data::export_csv(ledger.transactions(), out)?,
                ExportFormat::Pdf => pdf::export_pdf(ledger.transactions(), out)?,
            }
            info!("exported {} transactions as {:?}", ledger.transactions().len(), format);
        },
    }

    Ok(())
}

fn refresh<S: KeyValueStore, P: Presenter>(ledger: &Ledger<S>, presenter: &mut P) -> Result<()> {
    presenter.render_summary(&Summary::from(ledger))?;
    presenter.render_chart(&ChartData::from_transactions(ledger.transactions()))?;

    Ok(())
}

fn open_output(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout())),
    }
}
