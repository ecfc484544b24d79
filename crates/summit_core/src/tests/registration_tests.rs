use super::*;
use crate::form::FormState;
use chrono::TimeZone;

fn catalog() -> Catalog {
    Catalog::load().expect("catalog")
}

fn submitted_at() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 9, 12, 14, 30, 0)
        .single()
        .expect("timestamp")
}

fn filled_form(catalog: &Catalog) -> FormState {
    let mut form = FormState::new();
    form.set_field(FieldName::FirstName, "  Jane ");
    form.set_field(FieldName::LastName, "Doe");
    form.set_field(FieldName::Email, "jane@doe.edu");
    form.toggle_session(catalog, &SessionId::from("lt2"));
    form
}

#[test]
fn update_from_form_trims_and_is_idempotent() {
    let catalog = catalog();
    let mut form = filled_form(&catalog);
    form.toggle_session(&catalog, &SessionId::from("bs4"));
    form.toggle_session(&catalog, &SessionId::from("lt1"));

    let mut flow = RegistrationFlow::new();
    flow.update_from_form(&catalog, &form);
    let first = flow.record().clone();
    flow.update_from_form(&catalog, &form);

    assert_eq!(flow.record(), &first);
    assert_eq!(first.first_name, "Jane");
    assert_eq!(
        first.lightning_talks(),
        &[SessionId::from("lt1"), SessionId::from("lt2")]
    );
    assert_eq!(first.breakout_sessions(), &[SessionId::from("bs4")]);
    assert_eq!(flow.phase(), RegistrationPhase::Editing);
    assert!(flow.displayed_errors().is_empty());
}

#[test]
fn missing_form_fields_read_as_empty() {
    struct PartialForm;

    impl FormSource for PartialForm {
        fn field_value(&self, field: FieldName) -> Option<&str> {
            (field == FieldName::Email).then_some(" a@b.co ")
        }

        fn is_checked(&self, _session: &SessionId) -> bool {
            false
        }
    }

    let catalog = catalog();
    let mut flow = RegistrationFlow::new();
    flow.update_from_form(&catalog, &PartialForm);
    assert_eq!(flow.record().email, "a@b.co");
    assert_eq!(flow.record().first_name, "");
    assert!(!flow.record().has_selections());
}

#[test]
fn select_session_keeps_sets_distinct_and_catalog_backed() {
    let catalog = catalog();
    let mut record = RegistrationRecord::new();
    assert!(record.select_session(&catalog, &SessionId::from("lt3")));
    assert!(!record.select_session(&catalog, &SessionId::from("lt3")));
    assert!(!record.select_session(&catalog, &SessionId::from("lt42")));
    assert!(record.select_session(&catalog, &SessionId::from("bs1")));

    assert_eq!(record.lightning_talks(), &[SessionId::from("lt3")]);
    assert_eq!(record.breakout_sessions(), &[SessionId::from("bs1")]);

    assert!(record.deselect_session(&SessionId::from("bs1")));
    assert!(!record.deselect_session(&SessionId::from("bs1")));
    assert!(record.breakout_sessions().is_empty());
}

#[test]
fn invalid_submit_stays_editing_and_reports_first_field() {
    let catalog = catalog();
    let mut form = FormState::new();
    form.set_field(FieldName::Email, "not-an-email");
    form.set_field(FieldName::Phone, "abc");

    let mut flow = RegistrationFlow::new();
    let outcome = flow.submit(&catalog, &form, submitted_at());

    let SubmitOutcome::Invalid {
        errors,
        first_error,
        announcement,
    } = outcome
    else {
        panic!("expected validation failure");
    };
    assert_eq!(first_error, FieldName::FirstName);
    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors.get(FieldName::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        announcement,
        "Registration form has 4 errors. Please correct the highlighted fields."
    );
    assert_eq!(flow.phase(), RegistrationPhase::Editing);
    assert_eq!(flow.displayed_errors(), &errors);
    assert!(flow.confirmed_record().is_none());
    assert!(flow.confirmation().is_none());
}

#[test]
fn single_error_announcement_is_singular() {
    assert_eq!(
        error_announcement(1),
        "Registration form has 1 error. Please correct the highlighted fields."
    );
}

#[test]
fn valid_submit_confirms_with_id_and_date() {
    let catalog = catalog();
    let form = filled_form(&catalog);

    let mut flow = RegistrationFlow::new();
    let outcome = flow.submit(&catalog, &form, submitted_at());

    let SubmitOutcome::Confirmed {
        registration_id,
        announcement,
    } = outcome
    else {
        panic!("expected confirmation");
    };
    assert!(RegistrationId::is_well_formed(registration_id.as_str()));
    assert_eq!(announcement, SUCCESS_ANNOUNCEMENT);
    assert_eq!(flow.phase(), RegistrationPhase::Confirmed);
    let confirmed = flow.confirmed_record().expect("confirmed record");
    assert_eq!(confirmed.registration_id(), Some(&registration_id));
    assert!(flow.record().registration_id().is_none());
    assert_eq!(
        confirmed.registration_date(),
        NaiveDate::from_ymd_opt(2025, 9, 12)
    );

    let summary = flow.confirmation().expect("summary");
    assert_eq!(summary.attendee_name, "Jane Doe");
}

#[test]
fn blur_validation_uses_field_labels() {
    let catalog = catalog();
    let mut form = FormState::new();
    let mut flow = RegistrationFlow::new();

    assert_eq!(
        flow.field_blurred(&catalog, &form, FieldName::LastName),
        Some("Last Name is required".to_string())
    );
    assert_eq!(
        flow.displayed_errors().get(FieldName::LastName),
        Some("Last Name is required")
    );
    assert_eq!(flow.field_blurred(&catalog, &form, FieldName::Institution), None);

    form.set_field(FieldName::LastName, "Doe");
    flow.field_edited(FieldName::LastName);
    assert!(flow.displayed_errors().get(FieldName::LastName).is_none());
    assert_eq!(flow.field_blurred(&catalog, &form, FieldName::LastName), None);
}

#[test]
fn reset_twice_matches_reset_once() {
    let catalog = catalog();
    let form = filled_form(&catalog);
    let mut flow = RegistrationFlow::new();
    flow.submit(&catalog, &form, submitted_at());
    assert_eq!(flow.phase(), RegistrationPhase::Confirmed);

    flow.reset();
    let once = flow.record().clone();
    flow.reset();

    assert_eq!(flow.record(), &once);
    assert!(flow.record().is_empty());
    assert!(flow.confirmed_record().is_none());
    assert_eq!(flow.phase(), RegistrationPhase::Editing);
    assert!(flow.displayed_errors().is_empty());
    assert!(flow.confirmation().is_none());
}

#[test]
fn export_requires_confirmed_record() {
    let catalog = catalog();
    let flow = RegistrationFlow::new();
    let err = flow.export(&catalog).unwrap_err();
    assert!(matches!(err, SummitError::Export(_)));
}

#[test]
fn later_edits_leave_the_confirmed_receipt_alone() {
    let catalog = catalog();
    let mut form = filled_form(&catalog);
    let mut flow = RegistrationFlow::new();
    flow.submit(&catalog, &form, submitted_at());
    let receipt = flow.export(&catalog).expect("receipt").html;

    form.set_field(FieldName::FirstName, "Mallory");
    flow.field_blurred(&catalog, &form, FieldName::FirstName);
    form.toggle_session(&catalog, &SessionId::from("bs2"));
    flow.update_from_form(&catalog, &form);
    assert_eq!(flow.record().first_name, "Mallory");

    let after = flow.export(&catalog).expect("receipt").html;
    assert_eq!(after, receipt);
    assert!(!after.contains("Mallory"));
    assert_eq!(
        flow.confirmation().map(|s| s.attendee_name.as_str()),
        Some("Jane Doe")
    );

    // An invalid re-submit keeps the earlier confirmation intact too.
    form.set_field(FieldName::Email, "not-an-email");
    let outcome = flow.submit(&catalog, &form, submitted_at());
    assert!(matches!(outcome, SubmitOutcome::Invalid { .. }));
    assert_eq!(flow.export(&catalog).expect("receipt").html, receipt);
}
