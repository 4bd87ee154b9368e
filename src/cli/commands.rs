use super::render::{contacts_json, contacts_table};
use crate::codec::{export_to_file, import_from_file};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Contact, ContactUpdate};
use crate::store::ContactStore;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Interactive contact manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Import contacts from this file before anything else
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Export contacts to this file before exiting
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new contact
    Add {
        #[arg(long)]
        name: String,

        /// Ten-digit phone number, also the contact's identifier
        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        info: String,
    },

    /// Edit an existing contact; omitted fields are kept
    Edit {
        /// Phone number of the contact to edit
        phone: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        new_phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        info: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Phone number of the contact to delete
        phone: String,
    },

    /// Search contacts by name or phone number
    Search {
        term: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display all contacts
    List {
        /// Print contacts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export contacts to a text file (defaults to CONTACTS_FILE)
    Export { file: Option<PathBuf> },

    /// Import contacts from a text file (defaults to CONTACTS_FILE)
    Import { file: Option<PathBuf> },
}

/// CLI application: owns the contact store for the whole session.
pub struct App {
    store: ContactStore,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            store: ContactStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a single command against the store and print its result.
    pub async fn run_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add {
                name,
                phone,
                email,
                info,
            } => self.add_contact(&name, &phone, &email, &info),
            Commands::Edit {
                phone,
                name,
                new_phone,
                email,
                info,
            } => {
                let update = ContactUpdate {
                    name,
                    phone: new_phone,
                    email,
                    additional_info: info,
                };
                self.edit_contact(&phone, &update)
            },
            Commands::Delete { phone } => {
                self.store.delete(&phone)?;
                println!("{}", "Contact deleted successfully!".green());
                Ok(())
            },
            Commands::Search { term, json } => {
                let found = self.store.search(&term);
                if json {
                    return print_json(&found);
                }
                if found.is_empty() {
                    println!("{}", "No contacts found.".yellow());
                } else {
                    println!("Found {} contact(s):", found.len());
                    println!("{}", contacts_table(&found));
                }
                Ok(())
            },
            Commands::List { json } => {
                let contacts = self.store.list();
                if json {
                    return print_json(&contacts);
                }
                if self.store.is_empty() {
                    println!("{}", "No contacts found.".yellow());
                } else {
                    println!("All contacts:");
                    println!("{}", contacts_table(&contacts));
                }
                Ok(())
            },
            Commands::Export { file } => {
                let path = file.unwrap_or_else(|| self.config.contacts_file.clone());
                self.export_contacts(&path).await
            },
            Commands::Import { file } => {
                let path = file.unwrap_or_else(|| self.config.contacts_file.clone());
                self.import_contacts(&path).await
            },
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str, email: &str, info: &str) -> Result<()> {
        if let Some(previous) = self.store.add(name, phone, email, info)? {
            println!(
                "{} {}",
                "Replaced existing contact:".yellow(),
                previous.name
            );
        }
        println!("{}", "Contact added successfully!".green());
        Ok(())
    }

    fn edit_contact(&mut self, phone: &str, update: &ContactUpdate) -> Result<()> {
        let outcome = self.store.edit(phone, update)?;

        for field in &outcome.rejected {
            println!("{}", AppError::FieldRejected(*field).to_string().red());
        }
        if outcome.updated.is_empty() && outcome.rejected.is_empty() {
            println!("No changes entered. Keeping the current contact.");
        }
        if outcome.rekeyed(phone) {
            println!("Contact moved from {} to {}", phone, outcome.key);
        }
        if let Some(displaced) = &outcome.displaced {
            println!(
                "{} {}",
                "Replaced existing contact:".yellow(),
                displaced.name
            );
        }
        println!("{}", "Contact updated successfully!".green());
        Ok(())
    }

    async fn export_contacts(&self, path: &Path) -> Result<()> {
        let spinner = spinner(format!("Exporting contacts to {}", path.display()))?;
        let result = export_to_file(&self.store, path).await;
        spinner.finish_and_clear();

        let written = result?;
        println!(
            "{}",
            format!(
                "Contacts exported successfully to {} ({} contact(s))",
                path.display(),
                written
            )
            .green()
        );
        Ok(())
    }

    async fn import_contacts(&mut self, path: &Path) -> Result<()> {
        let spinner = spinner(format!("Importing contacts from {}", path.display()))?;
        let result = import_from_file(&mut self.store, path).await;
        spinner.finish_and_clear();

        let summary = result?;
        println!(
            "{}",
            format!("Contacts imported successfully from {}", path.display()).green()
        );
        println!(
            "{} accepted, {} skipped",
            summary.accepted, summary.skipped
        );
        info!(
            "Store holds {} contact(s) after import",
            self.store.len()
        );
        Ok(())
    }
}

fn print_json(contacts: &[Contact]) -> Result<()> {
    println!("{}", contacts_json(contacts)?);
    Ok(())
}

fn spinner(message: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
