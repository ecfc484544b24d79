use super::*;
use crate::registration_id::RegistrationId;
use shared::domain::Session;

fn catalog() -> Catalog {
    Catalog::load().expect("catalog")
}

/// Catalog with one extra breakout that the shipped catalog does not know.
fn catalog_with_retired_breakout() -> Catalog {
    let base = catalog();
    let mut breakouts = base.breakout_sessions().to_vec();
    breakouts.push(Session {
        id: SessionId::from("bs9"),
        title: "Retired Session".to_string(),
        time: "3:30-4:05 PM".to_string(),
        room: "Room 1000".to_string(),
        moderator: None,
        presenter: "Nobody".to_string(),
        presenter_keys: Vec::new(),
        description: "Withdrawn.".to_string(),
    });
    Catalog::from_parts(
        base.lightning_talks().to_vec(),
        breakouts,
        base.speakers().to_vec(),
    )
    .expect("catalog with extra breakout")
}

fn confirmed_record() -> RegistrationRecord {
    let mut record = RegistrationRecord::new();
    record.first_name = "Jane".to_string();
    record.last_name = "Doe".to_string();
    record.email = "jane@doe.edu".to_string();
    record.confirm(
        RegistrationId::generate(&chrono::Utc::now()),
        NaiveDate::from_ymd_opt(2025, 9, 26).expect("date"),
    );
    record
}

#[test]
fn unresolved_session_ids_are_skipped() {
    let selection_catalog = catalog_with_retired_breakout();
    let mut record = confirmed_record();
    record.select_session(&selection_catalog, &SessionId::from("lt1"));
    record.select_session(&selection_catalog, &SessionId::from("lt4"));
    record.select_session(&selection_catalog, &SessionId::from("bs9"));
    assert_eq!(record.breakout_sessions().len(), 1);

    let summary = render_confirmation(&record, &catalog());
    let SessionSelection::Selected {
        lightning_talks,
        breakout_sessions,
    } = &summary.sessions
    else {
        panic!("expected selected sessions");
    };
    let ids: Vec<&str> = lightning_talks.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["lt1", "lt4"]);
    assert!(breakout_sessions.is_empty());
    assert_eq!(summary.general_attendance_message(), None);
}

#[test]
fn empty_selection_falls_back_to_general_attendance() {
    let summary = render_confirmation(&confirmed_record(), &catalog());
    assert_eq!(summary.sessions, SessionSelection::GeneralAttendance);
    assert_eq!(
        summary.general_attendance_message(),
        Some(GENERAL_ATTENDANCE_MESSAGE)
    );
}

#[test]
fn optional_details_only_when_present() {
    let mut record = confirmed_record();
    let labels = |summary: &ConfirmationSummary| -> Vec<&'static str> {
        summary.details.iter().map(|row| row.label).collect()
    };

    let summary = render_confirmation(&record, &catalog());
    assert_eq!(
        labels(&summary),
        vec!["Name", "Email", "Registration ID", "Registration Date"]
    );

    record.institution = "NCCU".to_string();
    record.phone = "919-555-0100".to_string();
    let summary = render_confirmation(&record, &catalog());
    assert_eq!(
        labels(&summary),
        vec![
            "Name",
            "Email",
            "Institution",
            "Phone",
            "Registration ID",
            "Registration Date"
        ]
    );
    assert_eq!(summary.details[5].value, "September 26, 2025");
}

#[test]
fn export_is_byte_stable_for_identical_records() {
    let catalog = catalog();
    let mut record = confirmed_record();
    record.select_session(&catalog, &SessionId::from("bs1"));

    let first = export_confirmation_document(&record, &catalog).expect("export");
    let second = export_confirmation_document(&record.clone(), &catalog).expect("export");
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first.filename, CONFIRMATION_FILENAME);
}

#[test]
fn export_is_standalone_and_escapes_attendee_text() {
    let catalog = catalog();
    let mut record = confirmed_record();
    record.institution = "<script>alert('x')</script> & Co".to_string();
    record.select_session(&catalog, &SessionId::from("bs1"));

    let doc = export_confirmation_document(&record, &catalog).expect("export");
    let html = &doc.html;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; Co"));
    assert!(html.contains("Alanna Cates &amp; Kima Ellis"));
    assert!(html.contains("Selected Breakout Sessions (1:30-4:05 PM)"));
    assert!(!html.contains("Selected Lightning Talks"));
    assert!(html.contains(record.registration_id().expect("id").as_str()));
    assert!(html.contains("500 Nelson St, Durham, NC 27707"));
    assert!(html.contains("Latham Parking Deck"));
}

#[test]
fn export_writes_fixed_filename() {
    let catalog = catalog();
    let record = confirmed_record();
    let doc = export_confirmation_document(&record, &catalog).expect("export");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = doc.write_to_dir(dir.path()).expect("write");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(CONFIRMATION_FILENAME)
    );
    let written = std::fs::read(&path).expect("read back");
    assert_eq!(written, doc.as_bytes());
    assert!(doc.html.contains(GENERAL_ATTENDANCE_MESSAGE));
}

#[test]
fn write_failure_is_an_export_error() {
    let doc = export_confirmation_document(&confirmed_record(), &catalog()).expect("export");
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-dir");
    let err = doc.write_to_dir(&missing).unwrap_err();
    assert!(matches!(err, SummitError::Export(_)));
}
