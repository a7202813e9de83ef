use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // Files written without ids still load.
    pub id: Uuid,

    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
        }
    }

    /// Names of the required fields that are empty, in column order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.name.is_empty() {
            missing.push("name");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        missing
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "All fields are required. Missing: {}",
                missing.join(", ")
            )))
        }
    }

    /// Carries the identity of `previous` over to this record.
    /// Used by in-place updates so an edited contact keeps its id.
    pub fn with_id_of(mut self, previous: &Contact) -> Self {
        self.id = previous.id;
        self
    }
}
