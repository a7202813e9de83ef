pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Number: {}\n\
        Email: {}",
        contact.name, contact.phone, contact.email
    )
}

/// One listing row, numbered from 1.
pub fn listing_row(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:<15} {}",
        contact.name, contact.phone, contact.email
    )
}

pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}\n? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
