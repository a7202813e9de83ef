pub mod contact;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use crate::storage::{ContactStore, export_csv};
pub use uuid::Uuid;

pub use contact::Contact;
pub use manager::ContactManager;
