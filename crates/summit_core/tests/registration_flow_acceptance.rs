use std::time::Duration;

use shared::domain::{FieldName, PageId, SessionId};
use summit_core::{
    confirmation::SessionSelection, Catalog, Moment, RegistrationId, SiteCommand, SiteController,
    SiteEffect, Timings, CONFIRMATION_FILENAME,
};

#[test]
fn jane_doe_registers_for_one_lightning_talk_and_downloads_confirmation() {
    let catalog = Catalog::load().expect("catalog");
    let mut site = SiteController::new(catalog, Timings::default());
    let start = Moment::now();

    site.handle(SiteCommand::Navigate("register".into()), start);
    assert_eq!(site.current_page(), PageId::Register);

    for (field, value) in [
        (FieldName::FirstName, "Jane"),
        (FieldName::LastName, "Doe"),
        (FieldName::Email, "jane.doe@example.edu"),
    ] {
        site.form_mut().set_field(field, value);
        site.handle(SiteCommand::FieldEdited(field), start);
        site.handle(SiteCommand::FieldBlurred(field), start);
    }
    assert!(site.flow().displayed_errors().is_empty());

    site.handle(SiteCommand::ToggleSession(SessionId::from("lt1")), start);
    let effects = site.handle(SiteCommand::Submit, start.after(Duration::from_secs(5)));
    assert_eq!(effects, vec![SiteEffect::ScrollToTop]);
    assert_eq!(site.current_page(), PageId::Confirmation);
    assert_eq!(
        site.navigator().title(),
        "Registration Confirmed - UNC QM Summit 2025"
    );

    let record = site.flow().confirmed_record().expect("confirmed record");
    let id = record.registration_id().expect("registration id").clone();
    assert!(RegistrationId::is_well_formed(id.as_str()));

    let summary = site.flow().confirmation().expect("summary");
    assert_eq!(summary.attendee_name, "Jane Doe");
    let SessionSelection::Selected {
        lightning_talks,
        breakout_sessions,
    } = &summary.sessions
    else {
        panic!("expected lt1 in the summary");
    };
    assert!(breakout_sessions.is_empty());
    assert_eq!(lightning_talks.len(), 1);
    let talk = &lightning_talks[0];
    assert_eq!(
        talk.title,
        "Student Know the Way: Exploring Student Experience in Online Courses"
    );
    assert_eq!(talk.time, "10:30-10:45 AM");
    assert_eq!(talk.room, "Room 2128");
    assert_eq!(talk.presenter, "Dr. Colleen M. Smith, Ed.D");

    let effects = site.handle(SiteCommand::ExportConfirmation, start);
    let [SiteEffect::SaveDocument(document)] = effects.as_slice() else {
        panic!("expected a document to save");
    };
    assert_eq!(document.filename, CONFIRMATION_FILENAME);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = document.write_to_dir(dir.path()).expect("write confirmation");
    let html = std::fs::read_to_string(path).expect("read back");
    assert!(html.contains("Jane Doe"));
    assert!(html.contains(id.as_str()));
    assert!(html.contains("Room 2128"));
    assert!(html.contains("Selected Lightning Talks (10:30-11:45 AM)"));
}
