use super::*;

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use std::collections::HashSet;
use std::path::PathBuf;
use uuid::Uuid;

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        // Read raw bytes so undecodable content is reported as corrupt, not as I/O
        let data = fs::read(&self.path)?;

        // serde_json will give an error if data is empty
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_slice(&data)
            .map_err(|e| AppError::CorruptData(format!("{}: {}", self.path.display(), e)))?;

        if !value.is_array() {
            return Err(AppError::CorruptData(format!(
                "{}: expected an array of contacts",
                self.path.display()
            )));
        }

        let mut contacts: Vec<Contact> = serde_json::from_value(value)
            .map_err(|e| AppError::CorruptData(format!("{}: {}", self.path.display(), e)))?;

        for (index, contact) in contacts.iter().enumerate() {
            let missing = contact.missing_fields();
            if !missing.is_empty() {
                return Err(AppError::CorruptData(format!(
                    "{}: record {} has empty {}",
                    self.path.display(),
                    index,
                    missing.join(", ")
                )));
            }
        }

        // Copied records can share an id; later copies get a fresh one
        let mut seen = HashSet::with_capacity(contacts.len());
        for (index, contact) in contacts.iter_mut().enumerate() {
            if !seen.insert(contact.id) {
                let fresh = Uuid::new_v4();
                tracing::warn!(index, duplicate = %contact.id, %fresh, "re-minted duplicate contact id");
                contact.id = fresh;
                seen.insert(fresh);
            }
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Four-space indentation, same layout as hand-edited contact files
        let mut data = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;
        file.flush()?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
