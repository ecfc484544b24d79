//! Command handlers tying the page state together. The UI layer turns widget
//! interactions into [`SiteCommand`]s and carries out the returned [`SiteEffect`]s.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use shared::{
    domain::{FieldName, PageId, SessionId, SpeakerKey},
    error::{ErrorReport, SummitError},
};

use crate::{
    announce::{Announcer, Politeness},
    catalog::Catalog,
    confirmation::ConfirmationDocument,
    directory::{BioModal, DirectoryState},
    form::FormState,
    navigation::Navigator,
    registration::{RegistrationFlow, SubmitOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub search_delay: Duration,
    pub result_announcement_ttl: Duration,
    pub selection_announcement_ttl: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(300),
            result_announcement_ttl: Duration::from_millis(3000),
            selection_announcement_ttl: Duration::from_millis(1000),
        }
    }
}

/// Monotonic time for timers plus wall-clock time for registration stamps.
#[derive(Debug, Clone, Copy)]
pub struct Moment {
    pub instant: Instant,
    pub local: DateTime<Local>,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            local: Local::now(),
        }
    }

    pub fn after(self, elapsed: Duration) -> Self {
        Self {
            instant: self.instant + elapsed,
            local: self.local
                + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteCommand {
    Navigate(String),
    Back,
    FieldEdited(FieldName),
    FieldBlurred(FieldName),
    ToggleSession(SessionId),
    Submit,
    Reset,
    ExportConfirmation,
    SearchInput(String),
    InstitutionSelected(String),
    ShowBio(SpeakerKey),
    CloseModals,
    DismissError,
    Tick,
}

impl SiteCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Back => "back",
            Self::FieldEdited(_) => "field_edited",
            Self::FieldBlurred(_) => "field_blurred",
            Self::ToggleSession(_) => "toggle_session",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::ExportConfirmation => "export_confirmation",
            Self::SearchInput(_) => "search_input",
            Self::InstitutionSelected(_) => "institution_selected",
            Self::ShowBio(_) => "show_bio",
            Self::CloseModals => "close_modals",
            Self::DismissError => "dismiss_error",
            Self::Tick => "tick",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEffect {
    FocusField(FieldName),
    ScrollToTop,
    SaveDocument(ConfirmationDocument),
}

pub struct SiteController {
    catalog: Catalog,
    form: FormState,
    flow: RegistrationFlow,
    directory: DirectoryState,
    navigator: Navigator,
    announcer: Announcer,
    bio_modal: Option<BioModal>,
    error: Option<ErrorReport>,
    timings: Timings,
}

impl SiteController {
    pub fn new(catalog: Catalog, timings: Timings) -> Self {
        let directory = DirectoryState::new(&catalog, timings.search_delay);
        Self {
            catalog,
            form: FormState::new(),
            flow: RegistrationFlow::new(),
            directory,
            navigator: Navigator::new(),
            announcer: Announcer::new(),
            bio_modal: None,
            error: None,
            timings,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Widgets write field text here directly, then send `FieldEdited`.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn flow(&self) -> &RegistrationFlow {
        &self.flow
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_page(&self) -> PageId {
        self.navigator.current()
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn bio_modal(&self) -> Option<&BioModal> {
        self.bio_modal.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorReport> {
        self.error.as_ref()
    }

    /// Logs a failure and surfaces its user-facing message.
    pub fn report_error(&mut self, err: SummitError) {
        tracing::error!(code = ?err.code(), "{err}");
        self.error = Some(ErrorReport::from(&err));
    }

    /// Time until the next debounce or announcement expiry needs a `Tick`.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match (
            self.directory.time_until_due(now),
            self.announcer.next_expiry(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle(&mut self, command: SiteCommand, at: Moment) -> Vec<SiteEffect> {
        if !matches!(command, SiteCommand::Tick) {
            tracing::debug!(command = command.name(), "handling site command");
        }
        let mut effects = Vec::new();

        match command {
            SiteCommand::Navigate(page_id) => match self.navigator.show_page(&page_id) {
                Ok(_) => effects.push(SiteEffect::ScrollToTop),
                Err(err) => self.report_error(err),
            },
            SiteCommand::Back => {
                if self.navigator.back().is_some() {
                    effects.push(SiteEffect::ScrollToTop);
                }
            }
            SiteCommand::FieldEdited(field) => self.flow.field_edited(field),
            SiteCommand::FieldBlurred(field) => {
                self.flow.field_blurred(&self.catalog, &self.form, field);
            }
            SiteCommand::ToggleSession(id) => {
                match self.form.toggle_session(&self.catalog, &id) {
                    Some(selected) => {
                        self.flow.update_from_form(&self.catalog, &self.form);
                        let text = if selected {
                            "Session selected"
                        } else {
                            "Session deselected"
                        };
                        self.announcer.announce(
                            Politeness::Polite,
                            text,
                            self.timings.selection_announcement_ttl,
                            at.instant,
                        );
                    }
                    None => tracing::warn!(session = %id, "toggle for unknown session ignored"),
                }
            }
            SiteCommand::Submit => {
                match self.flow.submit(&self.catalog, &self.form, at.local) {
                    SubmitOutcome::Invalid {
                        first_error,
                        announcement,
                        ..
                    } => {
                        effects.push(SiteEffect::FocusField(first_error));
                        self.announcer.announce(
                            Politeness::Assertive,
                            announcement,
                            self.timings.result_announcement_ttl,
                            at.instant,
                        );
                    }
                    SubmitOutcome::Confirmed { announcement, .. } => {
                        self.navigator.go(PageId::Confirmation);
                        effects.push(SiteEffect::ScrollToTop);
                        self.announcer.announce(
                            Politeness::Polite,
                            announcement,
                            self.timings.result_announcement_ttl,
                            at.instant,
                        );
                    }
                }
            }
            SiteCommand::Reset => {
                self.flow.reset();
                self.form.clear();
                self.navigator.go(PageId::Register);
                effects.push(SiteEffect::ScrollToTop);
            }
            SiteCommand::ExportConfirmation => match self.flow.export(&self.catalog) {
                Ok(document) => effects.push(SiteEffect::SaveDocument(document)),
                Err(err) => self.report_error(err),
            },
            SiteCommand::SearchInput(value) => {
                self.directory.search_input_changed(value, at.instant);
            }
            SiteCommand::InstitutionSelected(institution) => {
                self.directory.institution_selected(&self.catalog, institution);
            }
            SiteCommand::ShowBio(key) => match BioModal::open(&self.catalog, &key) {
                Ok(modal) => self.bio_modal = Some(modal),
                Err(err) => self.report_error(err),
            },
            SiteCommand::CloseModals => {
                self.bio_modal = None;
                self.error = None;
            }
            SiteCommand::DismissError => self.error = None,
            SiteCommand::Tick => {
                self.directory.poll(&self.catalog, at.instant);
                self.announcer.prune(at.instant);
            }
        }

        effects
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
