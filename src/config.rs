use crate::errors::AppError;
use crate::storage::{ContactStore, StorageMediums, parse_storage_type};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "./contacts.json";
pub const DEFAULT_EXPORT_PATH: &str = "./contacts.csv";

/// Resolved storage settings. The binary fills this from flags, the
/// environment and a `.env` file, in that order of precedence.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_medium: StorageMediums,
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_medium: StorageMediums::Json,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl Config {
    pub fn new(storage_choice: &str, storage_path: PathBuf) -> Result<Self, AppError> {
        Ok(Self {
            storage_medium: storage_choice.parse()?,
            storage_path,
        })
    }

    pub fn open_storage(&self) -> Box<dyn ContactStore> {
        parse_storage_type(self.storage_medium, &self.storage_path)
    }
}
