//! The `identifier | name | phone | email | additional_info` line format.
//!
//! There is no quoting or escaping: a field value that itself contains the separator
//! produces a line with the wrong number of parts, which decoding then skips.

use crate::models::Contact;
use crate::store::ContactStore;

/// Token between fields on a line.
pub const SEPARATOR: &str = " | ";

const FIELD_COUNT: usize = 5;

/// How many lines a decode accepted and how many it dropped as malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub accepted: usize,
    pub skipped: usize,
}

/// Formats one stored entry as a line, without a terminator.
pub fn encode_contact(identifier: &str, contact: &Contact) -> String {
    [
        identifier,
        contact.name.as_str(),
        contact.phone.as_str(),
        contact.email.as_str(),
        contact.additional_info.as_str(),
    ]
    .join(SEPARATOR)
}

/// Encodes every entry of the store, one line per contact, in store order.
pub fn encode(store: &ContactStore) -> Vec<String> {
    store
        .iter()
        .map(|(identifier, contact)| encode_contact(identifier, contact))
        .collect()
}

/// Parses one line into its identifier and contact.
///
/// Only the line terminator is stripped, so an empty trailing field survives.
/// Returns `None` unless splitting on [`SEPARATOR`] yields exactly five parts.
pub fn decode_line(line: &str) -> Option<(String, Contact)> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }

    let contact = Contact::new(parts[1], parts[2], parts[3], parts[4]);
    Some((parts[0].to_string(), contact))
}

/// Decodes `lines` into `store`.
///
/// Accepted lines are stored under their identifier column without validation:
/// import accepts pre-validated external data. Malformed lines are only counted.
pub fn decode<I, S>(lines: I, store: &mut ContactStore) -> DecodeSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = DecodeSummary::default();
    for line in lines {
        match decode_line(line.as_ref()) {
            Some((identifier, contact)) => {
                store.import_record(identifier, contact);
                summary.accepted += 1;
            },
            None => summary.skipped += 1,
        }
    }
    summary
}
