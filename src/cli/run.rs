use super::{confirm_action, display_contact, get_input_to_lower, listing_row};
use crate::{
    config::Config,
    prelude::{
        AppError, Contact, ContactManager,
        command::{Cli, Commands},
    },
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    // .env values become visible to clap's `env` lookups
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::new(&cli.storage_choice, cli.storage_path.clone())?;
    tracing::debug!(?config, "resolved configuration");

    let mut storage = ContactManager::open(config.open_storage())?;

    match cli.command {
        Commands::Add { name, phone, email } => {
            storage.add_contact(Contact::new(name, phone, email))?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            if storage.contact_list().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in storage.contact_list().iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            index,
            name,
            phone,
            email,
        } => {
            let idx = position_to_index(index, storage.contact_list().len())?;
            let current = &storage.contact_list()[idx];

            let edited = Contact::new(
                name.unwrap_or_else(|| current.name.clone()),
                phone.unwrap_or_else(|| current.phone.clone()),
                email.unwrap_or_else(|| current.email.clone()),
            );

            storage.update_contact(idx, edited)?;
            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete { index, yes } => {
            let idx = position_to_index(index, storage.contact_list().len())?;

            if !yes {
                let message = format!(
                    "delete this contact from your contact list \n{}",
                    display_contact(&storage.contact_list()[idx])
                );
                confirm_action(&message)?;

                if get_input_to_lower()? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            storage.delete_contact(idx)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        // Search for a contact
        Commands::Search { name } => {
            let found = storage.search_by_name(&name);

            if found.is_empty() {
                println!("Couldn't find a name with {}", name);
                return Ok(());
            }

            // Show list positions so results can be passed to edit and delete
            for (index, c) in found {
                println!("{}", listing_row(index + 1, c));
            }
            Ok(())
        }

        Commands::Sort => {
            for (i, c) in storage.sort_by_name()?.iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            println!("Contacts sorted by name");
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = storage.export_all(&des)?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

/// Converts a 1-based listing position into a list index.
fn position_to_index(position: usize, len: usize) -> Result<usize, AppError> {
    match position.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(AppError::IndexOutOfBounds {
            index: position,
            len,
        }),
    }
}
