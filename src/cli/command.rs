use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_EXPORT_PATH, DEFAULT_STORAGE_PATH};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the JSON file contacts are kept in
    #[arg(long, env = "JSON_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },
    /// List contacts in their stored order
    List,
    /// Edit the contact at a listed position
    /// followed by optional arguments of as many field you wish to update
    Edit {
        /// Position shown by `list`, starting at 1
        #[arg(long)]
        index: usize,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the contact at a listed position
    Delete {
        /// Position shown by `list`, starting at 1
        #[arg(long)]
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Search contacts by name, ignoring case
    Search {
        /// Part of the name to look for; empty lists everything
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Sort contacts by name and keep that order
    Sort,
    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long, env = "EXPORT_PATH", default_value = DEFAULT_EXPORT_PATH)]
        des: PathBuf,
    },
}
