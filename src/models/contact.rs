//! Contact record and the types describing changes to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record.
///
/// `phone` doubles as the record's identifier inside a
/// [`ContactStore`](crate::store::ContactStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub additional_info: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            additional_info: additional_info.into(),
        }
    }
}

/// The editable fields of a [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
    AdditionalInfo,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone number",
            ContactField::Email => "email address",
            ContactField::AdditionalInfo => "additional information",
        };
        f.write_str(label)
    }
}

/// Requested changes to an existing contact.
///
/// `None` and empty strings both mean "keep the current value", matching the
/// interactive prompt where pressing Enter keeps a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub additional_info: Option<String>,
}

impl ContactUpdate {
    /// Returns the supplied, non-empty value for `field`, if any.
    pub fn value(&self, field: ContactField) -> Option<&str> {
        let value = match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::AdditionalInfo => self.additional_info.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// What an edit actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Identifier of the record after the edit (differs from the input on a rekey).
    pub key: String,
    /// Fields whose new value was applied.
    pub updated: Vec<ContactField>,
    /// Fields whose new value failed validation and were left unchanged.
    pub rejected: Vec<ContactField>,
    /// A different record that was overwritten because the new phone collided with it.
    pub displaced: Option<Contact>,
}

impl EditOutcome {
    pub fn rekeyed(&self, original: &str) -> bool {
        self.key != original
    }
}
