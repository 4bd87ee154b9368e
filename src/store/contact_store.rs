//! `ContactStore`: the identifier → contact mapping with validated mutation.
//!
//! Records are keyed by phone number. Adding or rekeying onto an identifier that is
//! already present overwrites the existing record (last write wins); the displaced
//! record is handed back to the caller and logged. Iteration is in ascending
//! identifier order, so `list`, `search` and export all agree on ordering.

use crate::error::{AppError, Result};
use crate::models::{Contact, ContactField, ContactUpdate, EditOutcome};
use crate::validator;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

const EDITABLE_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Phone,
    ContactField::Email,
    ContactField::AdditionalInfo,
];

/// Holds every contact of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: BTreeMap<String, Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact keyed by its phone number.
    ///
    /// Name, phone and email must all be valid; additional info is free-form.
    /// Returns the record previously stored under the same phone number, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` naming the offending fields. The store is untouched.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        additional_info: &str,
    ) -> Result<Option<Contact>> {
        if !validator::validate_all(name, phone, email) {
            let fields = validator::invalid_fields(name, phone, email)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            debug!("Rejected new contact, invalid fields: {}", fields);
            return Err(AppError::InvalidInput(format!("invalid {}", fields)));
        }

        let contact = Contact::new(name, phone, email, additional_info);
        let displaced = self.contacts.insert(phone.to_string(), contact);

        if displaced.is_some() {
            warn!("Contact {} already existed and was overwritten", phone);
        } else {
            info!("Added contact {}", phone);
        }
        Ok(displaced)
    }

    /// Edits the contact stored under `phone`, one field at a time.
    ///
    /// Each supplied field is validated on its own. Invalid fields keep their current
    /// value and are reported in `EditOutcome::rejected`; valid ones are applied. A valid
    /// new phone number moves the record to that identifier, and all other changes of
    /// the same call land on the moved record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no contact is stored under `phone`.
    pub fn edit(&mut self, phone: &str, update: &ContactUpdate) -> Result<EditOutcome> {
        let mut contact = self
            .contacts
            .get(phone)
            .cloned()
            .ok_or_else(|| AppError::NotFound(phone.to_string()))?;

        let mut updated = Vec::new();
        let mut rejected = Vec::new();

        for field in EDITABLE_FIELDS {
            let Some(value) = update.value(field) else {
                continue;
            };

            match validator::check_field(field, value) {
                Ok(()) => {
                    debug!("Updating {} of contact {}", field, phone);
                    set_field(&mut contact, field, value);
                    updated.push(field);
                },
                Err(AppError::FieldRejected(field)) => {
                    debug!("Keeping {} of contact {}: new value is invalid", field, phone);
                    rejected.push(field);
                },
                Err(e) => return Err(e),
            }
        }

        let key = if updated.contains(&ContactField::Phone) {
            contact.phone.clone()
        } else {
            phone.to_string()
        };

        let displaced = if key != phone {
            self.contacts.remove(phone);
            let displaced = self.contacts.insert(key.clone(), contact);
            if displaced.is_some() {
                warn!(
                    "Rekeying contact {} to {} overwrote an existing contact",
                    phone, key
                );
            }
            info!("Rekeyed contact {} to {}", phone, key);
            displaced
        } else {
            self.contacts.insert(key.clone(), contact);
            None
        };

        if !updated.is_empty() {
            info!("Updated contact {} ({} field(s))", key, updated.len());
        }

        Ok(EditOutcome {
            key,
            updated,
            rejected,
            displaced,
        })
    }

    /// Removes and returns the contact stored under `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no contact is stored under `phone`.
    pub fn delete(&mut self, phone: &str) -> Result<Contact> {
        let removed = self
            .contacts
            .remove(phone)
            .ok_or_else(|| AppError::NotFound(phone.to_string()))?;
        info!("Deleted contact {}", phone);
        Ok(removed)
    }

    /// Finds contacts whose name contains `term` (case-insensitive) or whose phone contains it.
    pub fn search(&self, term: &str) -> Vec<Contact> {
        let needle = term.to_lowercase();
        self.contacts
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(term))
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    pub fn get(&self, phone: &str) -> Option<&Contact> {
        self.contacts.get(phone)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates `(identifier, contact)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Stores `contact` under `identifier` without validation.
    ///
    /// Used by import, which accepts pre-validated external data and trusts the
    /// file's identifier column even when it differs from the embedded phone.
    pub fn import_record(
        &mut self,
        identifier: impl Into<String>,
        contact: Contact,
    ) -> Option<Contact> {
        self.contacts.insert(identifier.into(), contact)
    }
}

fn set_field(contact: &mut Contact, field: ContactField, value: &str) {
    let slot = match field {
        ContactField::Name => &mut contact.name,
        ContactField::Phone => &mut contact.phone,
        ContactField::Email => &mut contact.email,
        ContactField::AdditionalInfo => &mut contact.additional_info,
    };
    *slot = value.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE_PHONE: &str = "5551234567";

    fn store_with_jane() -> ContactStore {
        let mut store = ContactStore::new();
        store
            .add("Jane Doe", JANE_PHONE, "jane@x.com", "vip")
            .unwrap();
        store
    }

    fn update(
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        info: Option<&str>,
    ) -> ContactUpdate {
        ContactUpdate {
            name: name.map(String::from),
            phone: phone.map(String::from),
            email: email.map(String::from),
            additional_info: info.map(String::from),
        }
    }

    #[test]
    fn test_add_then_list_contains_single_contact() {
        let store = store_with_jane();
        let contacts = store.list();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].phone, JANE_PHONE);
        assert_eq!(contacts[0].additional_info, "vip");
    }

    #[test]
    fn test_add_invalid_email_leaves_store_unchanged() {
        let mut store = store_with_jane();
        let before = store.len();

        let result = store.add("John Roe", "5550000000", "john@x", "");
        match result {
            Err(AppError::InvalidInput(msg)) => assert!(msg.contains("email address")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert_eq!(store.len(), before);
        assert!(store.get("5550000000").is_none());
    }

    #[test]
    fn test_add_overwrites_existing_phone() {
        let mut store = store_with_jane();
        let displaced = store
            .add("Janet Doe", JANE_PHONE, "janet@x.com", "")
            .unwrap();

        assert_eq!(displaced.map(|c| c.name), Some("Jane Doe".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(JANE_PHONE).unwrap().name, "Janet Doe");
    }

    #[test]
    fn test_edit_missing_contact_is_not_found() {
        let mut store = store_with_jane();
        let result = store.edit("0000000000", &update(Some("Bob"), None, None, None));
        assert!(matches!(result, Err(AppError::NotFound(ref p)) if p == "0000000000"));
    }

    #[test]
    fn test_edit_rekeys_on_new_phone() {
        let mut store = store_with_jane();
        let outcome = store
            .edit(JANE_PHONE, &update(None, Some("5559876543"), None, None))
            .unwrap();

        assert_eq!(outcome.key, "5559876543");
        assert!(outcome.rekeyed(JANE_PHONE));
        assert!(store.get(JANE_PHONE).is_none());
        assert_eq!(store.get("5559876543").unwrap().phone, "5559876543");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_applies_other_fields_to_rekeyed_record() {
        let mut store = store_with_jane();
        let outcome = store
            .edit(
                JANE_PHONE,
                &update(
                    Some("Jane Smith"),
                    Some("5559876543"),
                    Some("jane.smith@x.com"),
                    Some("moved"),
                ),
            )
            .unwrap();

        assert_eq!(outcome.updated.len(), 4);
        assert!(outcome.rejected.is_empty());
        let contact = store.get("5559876543").unwrap();
        assert_eq!(contact.name, "Jane Smith");
        assert_eq!(contact.email, "jane.smith@x.com");
        assert_eq!(contact.additional_info, "moved");
        for (key, contact) in store.iter() {
            assert_eq!(key, contact.phone);
        }
    }

    #[test]
    fn test_edit_rejected_fields_keep_prior_value() {
        let mut store = store_with_jane();
        let outcome = store
            .edit(
                JANE_PHONE,
                &update(Some("J4ne"), Some("123"), Some("new@x.com"), None),
            )
            .unwrap();

        assert_eq!(outcome.key, JANE_PHONE);
        assert_eq!(
            outcome.rejected,
            vec![ContactField::Name, ContactField::Phone]
        );
        assert_eq!(outcome.updated, vec![ContactField::Email]);

        let contact = store.get(JANE_PHONE).unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, "new@x.com");
    }

    #[test]
    fn test_edit_ignores_empty_values() {
        let mut store = store_with_jane();
        let outcome = store
            .edit(JANE_PHONE, &update(Some(""), Some(""), None, Some("")))
            .unwrap();
        assert!(outcome.updated.is_empty());
        assert!(outcome.rejected.is_empty());
        assert_eq!(store.get(JANE_PHONE).unwrap().additional_info, "vip");
    }

    #[test]
    fn test_edit_rekey_onto_existing_contact_overwrites_it() {
        let mut store = store_with_jane();
        store
            .add("John Roe", "5550000000", "john@x.com", "")
            .unwrap();

        let outcome = store
            .edit(JANE_PHONE, &update(None, Some("5550000000"), None, None))
            .unwrap();

        assert_eq!(outcome.displaced.map(|c| c.name), Some("John Roe".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("5550000000").unwrap().name, "Jane Doe");
    }

    #[test]
    fn test_edit_same_phone_updates_in_place() {
        let mut store = store_with_jane();
        let outcome = store
            .edit(JANE_PHONE, &update(None, Some(JANE_PHONE), None, None))
            .unwrap();
        assert!(!outcome.rekeyed(JANE_PHONE));
        assert!(outcome.displaced.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = store_with_jane();
        let removed = store.delete(JANE_PHONE).unwrap();
        assert_eq!(removed.name, "Jane Doe");
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found_and_keeps_size() {
        let mut store = store_with_jane();
        let result = store.delete("0000000000");
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_by_name_and_phone() {
        let mut store = store_with_jane();
        store
            .add("John Roe", "4440000000", "john@x.com", "")
            .unwrap();

        let by_name = store.search("jane");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].phone, JANE_PHONE);

        let by_phone = store.search("555123");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Jane Doe");

        assert!(store.search("nobody").is_empty());
        assert_eq!(store.search("").len(), 2);
    }

    #[test]
    fn test_list_is_ordered_by_identifier() {
        let mut store = ContactStore::new();
        store.add("Zed", "9990000000", "z@x.com", "").unwrap();
        store.add("Amy", "1110000000", "a@x.com", "").unwrap();
        store.add("Max", "5550000000", "m@x.com", "").unwrap();

        let phones: Vec<_> = store.list().into_iter().map(|c| c.phone).collect();
        assert_eq!(phones, vec!["1110000000", "5550000000", "9990000000"]);
    }

    #[test]
    fn test_import_record_skips_validation() {
        let mut store = ContactStore::new();
        store.import_record("id-1", Contact::new("R2D2", "n/a", "none", ""));
        assert_eq!(store.get("id-1").unwrap().phone, "n/a");
    }
}
