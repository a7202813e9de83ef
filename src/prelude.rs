pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    Uuid,
    contact::{self, Contact},
    manager::ContactManager,
    search::{search_by_name, sort_by_name},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, StorageMediums, export_csv::export_contacts_to_csv,
    memory::MemStorage, stores::JsonStorage,
};
