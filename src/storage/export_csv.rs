use super::*;

use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;

pub const EXPORT_FILE_NAME: &str = "contacts.csv";
pub const EXPORT_HEADER: [&str; 3] = ["Name", "Phone", "Email"];

/// Writes a one-shot CSV snapshot of `contacts`, replacing any file at `des`.
///
/// When `des` is an existing directory the snapshot goes to `contacts.csv`
/// inside it. Returns the path written and the number of contact rows.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: &Path,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = des.to_path_buf();

    if file_path.is_dir() {
        file_path = file_path.join(EXPORT_FILE_NAME);
    }

    let file = File::create(&file_path)?;
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(EXPORT_HEADER)?;

    let mut counter: u64 = 0;

    for contact in contacts {
        writer.write_record([&contact.name, &contact.phone, &contact.email])?;
        counter += 1;
    }

    writer.flush()?;

    tracing::info!(path = %file_path.display(), total = counter, "exported contacts");
    Ok((file_path, counter))
}
