//! Conference registration desk: catalog, speaker directory, and the
//! registration flow, with no dependency on any UI toolkit.

pub mod announce;
pub mod catalog;
pub mod confirmation;
pub mod controller;
pub mod debounce;
pub mod directory;
pub mod event;
pub mod form;
pub mod navigation;
pub mod registration;
pub mod registration_id;
pub mod validation;

pub use catalog::Catalog;
pub use confirmation::{ConfirmationDocument, ConfirmationSummary, CONFIRMATION_FILENAME};
pub use controller::{Moment, SiteCommand, SiteController, SiteEffect, Timings};
pub use form::{FormSource, FormState};
pub use registration::{RegistrationFlow, RegistrationPhase, RegistrationRecord, SubmitOutcome};
pub use registration_id::RegistrationId;
pub use validation::{validate, ValidationResult};

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod directory_tests;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;
