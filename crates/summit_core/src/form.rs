//! Input surface of the registration page.

use std::collections::BTreeSet;

use shared::domain::{FieldName, SessionId};

use crate::catalog::Catalog;

/// Read access to whatever widgets hold the form. A missing field reads as `None`.
pub trait FormSource {
    fn field_value(&self, field: FieldName) -> Option<&str>;
    fn is_checked(&self, session: &SessionId) -> bool;
}

/// In-memory form widgets: five text inputs and one checkbox per catalog session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    institution: String,
    phone: String,
    checked: BTreeSet<SessionId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Institution => &self.institution,
            FieldName::Phone => &self.phone,
        }
    }

    pub fn field_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Institution => &mut self.institution,
            FieldName::Phone => &mut self.phone,
        }
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Flips the checkbox for a catalog session. Returns the new state, or `None`
    /// when the catalog has no such session.
    pub fn toggle_session(&mut self, catalog: &Catalog, id: &SessionId) -> Option<bool> {
        catalog.find_session_by_id(id)?;
        if self.checked.remove(id) {
            Some(false)
        } else {
            self.checked.insert(id.clone());
            Some(true)
        }
    }

    pub fn checked_sessions(&self) -> impl Iterator<Item = &SessionId> {
        self.checked.iter()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl FormSource for FormState {
    fn field_value(&self, field: FieldName) -> Option<&str> {
        Some(self.field(field))
    }

    fn is_checked(&self, session: &SessionId) -> bool {
        self.checked.contains(session)
    }
}
