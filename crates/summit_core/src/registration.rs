//! Registration record and the submit/confirm/reset state machine.

use chrono::{DateTime, Local, NaiveDate};
use shared::{
    domain::{FieldName, SessionId, SessionKind},
    error::SummitError,
};

use crate::{
    catalog::Catalog,
    confirmation::{self, ConfirmationDocument, ConfirmationSummary},
    form::FormSource,
    registration_id::RegistrationId,
    validation::{self, ValidationResult},
};

pub const SUCCESS_ANNOUNCEMENT: &str =
    "Registration completed successfully. You will receive a confirmation email shortly.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub institution: String,
    pub phone: String,
    lightning_talks: Vec<SessionId>,
    breakout_sessions: Vec<SessionId>,
    registration_id: Option<RegistrationId>,
    registration_date: Option<NaiveDate>,
}

impl RegistrationRecord {
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

    fn field_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Institution => &mut self.institution,
            FieldName::Phone => &mut self.phone,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn lightning_talks(&self) -> &[SessionId] {
        &self.lightning_talks
    }

    pub fn breakout_sessions(&self) -> &[SessionId] {
        &self.breakout_sessions
    }

    pub fn has_selections(&self) -> bool {
        !self.lightning_talks.is_empty() || !self.breakout_sessions.is_empty()
    }

    /// Adds a catalog session to the set matching its kind. Unknown or
    /// already-selected ids are ignored; returns whether the record changed.
    pub fn select_session(&mut self, catalog: &Catalog, id: &SessionId) -> bool {
        let set = match catalog.session_kind(id) {
            Some(SessionKind::LightningTalk) => &mut self.lightning_talks,
            Some(SessionKind::Breakout) => &mut self.breakout_sessions,
            None => return false,
        };
        if set.contains(id) {
            return false;
        }
        set.push(id.clone());
        true
    }

    pub fn deselect_session(&mut self, id: &SessionId) -> bool {
        let before = self.lightning_talks.len() + self.breakout_sessions.len();
        self.lightning_talks.retain(|s| s != id);
        self.breakout_sessions.retain(|s| s != id);
        before != self.lightning_talks.len() + self.breakout_sessions.len()
    }

    pub fn registration_id(&self) -> Option<&RegistrationId> {
        self.registration_id.as_ref()
    }

    pub fn registration_date(&self) -> Option<NaiveDate> {
        self.registration_date
    }

    pub fn confirm(&mut self, id: RegistrationId, date: NaiveDate) {
        self.registration_id = Some(id);
        self.registration_date = Some(date);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    Editing,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid {
        errors: ValidationResult,
        first_error: FieldName,
        announcement: String,
    },
    Confirmed {
        registration_id: RegistrationId,
        announcement: String,
    },
}

pub fn error_announcement(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Registration form has {count} error{plural}. Please correct the highlighted fields.")
}

#[derive(Debug, Clone)]
pub struct RegistrationFlow {
    record: RegistrationRecord,
    phase: RegistrationPhase,
    displayed_errors: ValidationResult,
    /// Snapshot taken at the last successful submit; later edits never touch it.
    confirmed: Option<RegistrationRecord>,
    summary: Option<ConfirmationSummary>,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFlow {
    pub fn new() -> Self {
        Self {
            record: RegistrationRecord::new(),
            phase: RegistrationPhase::Editing,
            displayed_errors: ValidationResult::default(),
            confirmed: None,
            summary: None,
        }
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn phase(&self) -> RegistrationPhase {
        self.phase
    }

    /// Errors currently annotated next to their fields.
    pub fn displayed_errors(&self) -> &ValidationResult {
        &self.displayed_errors
    }

    /// The record the confirmation page and the receipt describe.
    pub fn confirmed_record(&self) -> Option<&RegistrationRecord> {
        self.confirmed.as_ref()
    }

    pub fn confirmation(&self) -> Option<&ConfirmationSummary> {
        self.summary.as_ref()
    }

    /// Snapshots trimmed field values and checked sessions (catalog order) into the record.
    pub fn update_from_form(&mut self, catalog: &Catalog, form: &dyn FormSource) {
        for field in FieldName::ALL {
            *self.record.field_mut(field) = form
                .field_value(field)
                .map(|v| validation::trim_value(v).to_string())
                .unwrap_or_default();
        }

        self.record.lightning_talks.clear();
        self.record.breakout_sessions.clear();
        let checked: Vec<SessionId> = catalog
            .sessions()
            .filter(|session| form.is_checked(&session.id))
            .map(|session| session.id.clone())
            .collect();
        for id in &checked {
            self.record.select_session(catalog, id);
        }

        tracing::debug!(
            lightning_talks = self.record.lightning_talks.len(),
            breakout_sessions = self.record.breakout_sessions.len(),
            "registration data updated"
        );
    }

    /// Input in a field clears its annotation until the next check.
    pub fn field_edited(&mut self, field: FieldName) {
        self.displayed_errors.remove(field);
    }

    /// Validate-on-blur for one field.
    pub fn field_blurred(
        &mut self,
        catalog: &Catalog,
        form: &dyn FormSource,
        field: FieldName,
    ) -> Option<String> {
        self.update_from_form(catalog, form);
        let message = validation::validate_field(field, self.record.field(field))?;
        self.displayed_errors.insert(field, message.clone());
        Some(message)
    }

    pub fn submit(
        &mut self,
        catalog: &Catalog,
        form: &dyn FormSource,
        now: DateTime<Local>,
    ) -> SubmitOutcome {
        tracing::info!("submitting registration");
        self.update_from_form(catalog, form);

        let errors = validation::validate(&self.record);
        if let Some(first_error) = errors.first_field() {
            tracing::info!(errors = errors.len(), "registration rejected by validation");
            self.displayed_errors = errors.clone();
            return SubmitOutcome::Invalid {
                announcement: error_announcement(errors.len()),
                errors,
                first_error,
            };
        }

        self.displayed_errors.clear();
        let registration_id = RegistrationId::generate(&now);
        let mut confirmed = self.record.clone();
        confirmed.confirm(registration_id.clone(), now.date_naive());
        self.summary = Some(confirmation::render_confirmation(&confirmed, catalog));
        self.confirmed = Some(confirmed);
        self.phase = RegistrationPhase::Confirmed;
        tracing::info!(registration_id = %registration_id, "registration submitted");

        SubmitOutcome::Confirmed {
            registration_id,
            announcement: SUCCESS_ANNOUNCEMENT.to_string(),
        }
    }

    pub fn export(&self, catalog: &Catalog) -> Result<ConfirmationDocument, SummitError> {
        let record = self.confirmed.as_ref().ok_or_else(|| {
            SummitError::Export("no confirmed registration to export".to_string())
        })?;
        confirmation::export_confirmation_document(record, catalog)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("registration form reset");
    }
}

#[cfg(test)]
#[path = "tests/registration_tests.rs"]
mod tests;
