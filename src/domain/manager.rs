use super::*;

use super::search::{search_by_name, sort_by_name};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owns the ordered contact list and keeps the storage backend in step with it.
///
/// Every mutating call rewrites the whole backing store before returning, so a
/// successful return means storage matches `contact_list()`. Validation and
/// bounds failures change nothing. A failed write leaves the attempted change
/// in memory and returns the error.
pub struct ContactManager {
    pub(crate) mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Creates a manager and loads whatever the backend currently holds.
    pub fn open(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self::new(storage);
        manager.load()?;
        Ok(manager)
    }

    pub fn load(&mut self) -> Result<&[Contact], AppError> {
        self.mem = self.storage.load()?;
        debug!(
            medium = self.storage.get_medium(),
            count = self.mem.len(),
            "loaded contacts"
        );
        Ok(self.mem.as_slice())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        debug!(
            medium = self.storage.get_medium(),
            count = self.mem.len(),
            "saved contacts"
        );
        Ok(())
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        if let Err(e) = contact.validate() {
            warn!(error = %e, "rejected new contact");
            return Err(e);
        }

        info!(id = %contact.id, "adding contact");
        self.mem.push(contact);
        self.save()
    }

    pub fn update_contact(&mut self, index: usize, contact: Contact) -> Result<(), AppError> {
        self.check_bounds(index)?;
        if let Err(e) = contact.validate() {
            warn!(index, error = %e, "rejected contact update");
            return Err(e);
        }

        let contact = contact.with_id_of(&self.mem[index]);
        info!(index, id = %contact.id, "updating contact");
        self.mem[index] = contact;
        self.save()
    }

    /// Removes and returns the contact at `index`. Later contacts move down one position.
    pub fn delete_contact(&mut self, index: usize) -> Result<Contact, AppError> {
        self.check_bounds(index)?;

        let removed = self.mem.remove(index);
        info!(index, id = %removed.id, "deleted contact");
        self.save()?;
        Ok(removed)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.mem.iter().position(|contact| &contact.id == id)
    }

    pub fn update_by_id(&mut self, id: &Uuid, contact: Contact) -> Result<(), AppError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {}", id)))?;
        self.update_contact(index, contact)
    }

    pub fn delete_by_id(&mut self, id: &Uuid) -> Result<Contact, AppError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {}", id)))?;
        self.delete_contact(index)
    }

    /// Matching contacts paired with their current list index.
    pub fn search_by_name(&self, term: &str) -> Vec<(usize, &Contact)> {
        search_by_name(&self.mem, term)
    }

    /// Sorts by name, ignoring case, and persists the result as the canonical order.
    pub fn sort_by_name(&mut self) -> Result<&[Contact], AppError> {
        sort_by_name(&mut self.mem);
        info!(count = self.mem.len(), "sorted contacts by name");
        self.save()?;
        Ok(self.mem.as_slice())
    }

    pub fn export_all(&self, des: &Path) -> Result<(PathBuf, u64), AppError> {
        export_csv::export_contacts_to_csv(&self.mem, des)
    }

    fn check_bounds(&self, index: usize) -> Result<(), AppError> {
        if index < self.mem.len() {
            Ok(())
        } else {
            warn!(index, len = self.mem.len(), "contact position out of range");
            Err(AppError::IndexOutOfBounds {
                index,
                len: self.mem.len(),
            })
        }
    }
}
