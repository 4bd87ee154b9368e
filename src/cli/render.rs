//! Terminal rendering of contacts.

use crate::models::Contact;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Builds a table with one row per contact.
pub fn contacts_table(contacts: &[Contact]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Phone", "Email", "Additional Info"]);

    for contact in contacts {
        table.add_row(vec![
            contact.name.as_str(),
            contact.phone.as_str(),
            contact.email.as_str(),
            contact.additional_info.as_str(),
        ]);
    }
    table
}

/// Renders contacts as pretty-printed JSON.
pub fn contacts_json(contacts: &[Contact]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(contacts)
}
