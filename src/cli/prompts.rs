//! Interactive menu and prompts.
//!
//! Prompts only capture and trim text; all validation happens in the store.

use super::commands::{App, Commands};
use super::render::contacts_table;
use crate::error::{AppError, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Add,
    Edit,
    Delete,
    Search,
    List,
    Export,
    Import,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Add,
        MenuItem::Edit,
        MenuItem::Delete,
        MenuItem::Search,
        MenuItem::List,
        MenuItem::Export,
        MenuItem::Import,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Add => "Add a new contact",
            MenuItem::Edit => "Edit an existing contact",
            MenuItem::Delete => "Delete a contact",
            MenuItem::Search => "Search for a contact",
            MenuItem::List => "Display all contacts",
            MenuItem::Export => "Export contacts to a text file",
            MenuItem::Import => "Import contacts from a text file",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Shows the main menu. Cancelling (Esc / Ctrl+C) counts as `Quit`.
pub fn prompt_menu() -> Result<MenuItem> {
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection
        .and_then(|i| MenuItem::ALL.get(i).copied())
        .unwrap_or(MenuItem::Quit))
}

/// Asks for everything `item` needs and turns it into a command.
///
/// Returns `None` for `Quit`.
///
/// # Errors
///
/// Returns `AppError::NotFound` when editing a phone number that is not stored,
/// before asking for the new values.
pub fn prompt_command(item: MenuItem, app: &App) -> Result<Option<Commands>> {
    let command = match item {
        MenuItem::Add => Commands::Add {
            name: prompt_text("Enter name", false)?,
            phone: prompt_text("Enter phone number", false)?,
            email: prompt_text("Enter email address", false)?,
            info: prompt_text("Enter additional information", true)?,
        },
        MenuItem::Edit => {
            let phone = prompt_text("Enter the phone number of the contact to edit", false)?;
            let current = app
                .store()
                .get(&phone)
                .cloned()
                .ok_or_else(|| AppError::NotFound(phone.clone()))?;

            println!("Current contact information:");
            println!("{}", contacts_table(&[current]));

            Commands::Edit {
                phone,
                name: prompt_optional("Enter new name (press Enter to keep current)")?,
                new_phone: prompt_optional(
                    "Enter new phone number (press Enter to keep current)",
                )?,
                email: prompt_optional("Enter new email address (press Enter to keep current)")?,
                info: prompt_optional(
                    "Enter new additional information (press Enter to keep current)",
                )?,
            }
        },
        MenuItem::Delete => Commands::Delete {
            phone: prompt_text("Enter the phone number of the contact to delete", false)?,
        },
        MenuItem::Search => Commands::Search {
            term: prompt_text("Enter name or phone number to search", true)?,
            json: false,
        },
        MenuItem::List => Commands::List { json: false },
        MenuItem::Export => Commands::Export {
            file: Some(prompt_file("Enter the filename to export contacts", app)?.into()),
        },
        MenuItem::Import => Commands::Import {
            file: Some(prompt_file("Enter the filename to import contacts from", app)?.into()),
        },
        MenuItem::Quit => return Ok(None),
    };
    Ok(Some(command))
}

/// Waits for Enter before the menu is shown again.
pub fn pause() -> Result<()> {
    Input::<String>::new()
        .with_prompt("Press Enter to continue...")
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(())
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let value = prompt_text(prompt, true)?;
    Ok((!value.is_empty()).then_some(value))
}

fn prompt_file(prompt: &str, app: &App) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(app.config().contacts_file.display().to_string())
        .interact_text()?;
    Ok(value.trim().to_string())
}
