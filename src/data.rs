use std::io::Write;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::accounting::transactions::{parse_decimal, Transaction, TransactionKind, DEFAULT_CATEGORY};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Stored shape of a transaction: a JSON object with a numeric `amount`,
/// written with every digit of the decimal.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub type_: TransactionKind,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl From<&Transaction> for TransactionRecord {
    fn from(transaction: &Transaction) -> Self {
        TransactionRecord {
            description: transaction.description().clone(),
            amount: transaction.amount(),
            type_: transaction.kind(),
            category: transaction.category().clone(),
        }
    }
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        Transaction::from_parts(record.description, record.amount, record.type_, record.category)
    }
}

/// Row layout of the CSV export: `description,amount,type,category`.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    description: &'a str,
    amount: Decimal,
    #[serde(rename = "type")]
    type_: TransactionKind,
    category: &'a str,
}

pub fn encode_transactions(transactions: &[Transaction]) -> Result<String, serde_json::Error> {
    let records: Vec<TransactionRecord> = transactions.iter().map(TransactionRecord::from).collect();
    serde_json::to_string(&records)
}

/// Decodes the stored transaction list. A missing or unreadable entry yields
/// an empty list.
pub fn decode_transactions(stored: Option<&str>) -> Vec<Transaction> {
    let Some(stored) = stored else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<TransactionRecord>>(stored) {
        Ok(records) => records.into_iter().map(Transaction::from).collect(),
        Err(err) => {
            debug!("ignoring malformed transactions entry, err={}", err);
            Vec::new()
        },
    }
}

pub fn encode_budget(budget: Decimal) -> String {
    budget.normalize().to_string()
}

/// Decodes the stored budget ceiling, defaulting to zero (no ceiling).
pub fn decode_budget(stored: Option<&str>) -> Decimal {
    match stored.map(|value| (value, parse_decimal(value))) {
        Some((_, Some(budget))) => budget,
        Some((value, None)) => {
            debug!("ignoring malformed budget entry, value={:?}", value);
            Decimal::ZERO
        },
        None => Decimal::ZERO,
    }
}

/// Writes one CSV row per transaction, without a header. Fields containing
/// commas or quotes are quoted.
pub fn export_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    for transaction in transactions {
        csv_writer.serialize(CsvRow {
            description: transaction.description(),
            amount: transaction.amount().normalize(),
            type_: transaction.kind(),
            category: transaction.category(),
        })?;
    }

    csv_writer.flush()?;

    Ok(())
}
