use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the JSON encoded transaction list.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the budget ceiling as a decimal string.
pub const BUDGET_KEY: &str = "budget";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid key `{0}`")]
    InvalidKey(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage the ledger is loaded from and saved to.
///
/// `get` never fails: an entry that cannot be read is reported as absent.
#[enum_dispatch]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[enum_dispatch(KeyValueStore)]
#[derive(Debug)]
pub enum Store {
    MemoryStore,
    FileStore,
}

pub(crate) fn valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
