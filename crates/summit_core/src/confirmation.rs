//! Confirmation summary and the standalone HTML receipt.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use shared::{
    domain::{Session, SessionId},
    error::SummitError,
};

use crate::{
    catalog::Catalog,
    event::{self, GENERAL_ATTENDANCE_MESSAGE},
    registration::RegistrationRecord,
};

pub const CONFIRMATION_FILENAME: &str = "QM_Summit_2025_Registration_Confirmation.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLine {
    pub id: SessionId,
    pub title: String,
    pub time: String,
    pub room: String,
    pub presenter: String,
}

impl From<&Session> for SessionLine {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            time: session.time.clone(),
            room: session.room.clone(),
            presenter: session.presenter.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSelection {
    GeneralAttendance,
    Selected {
        lightning_talks: Vec<SessionLine>,
        breakout_sessions: Vec<SessionLine>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub attendee_name: String,
    pub details: Vec<DetailRow>,
    pub sessions: SessionSelection,
}

impl ConfirmationSummary {
    pub fn general_attendance_message(&self) -> Option<&'static str> {
        matches!(self.sessions, SessionSelection::GeneralAttendance)
            .then_some(GENERAL_ATTENDANCE_MESSAGE)
    }
}

pub fn format_registration_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn resolve(catalog: &Catalog, ids: &[SessionId]) -> Vec<SessionLine> {
    ids.iter()
        .filter_map(|id| catalog.find_session_by_id(id))
        .map(SessionLine::from)
        .collect()
}

pub fn render_confirmation(record: &RegistrationRecord, catalog: &Catalog) -> ConfirmationSummary {
    let mut details = vec![
        DetailRow {
            label: "Name",
            value: record.full_name(),
        },
        DetailRow {
            label: "Email",
            value: record.email.clone(),
        },
    ];
    if !record.institution.is_empty() {
        details.push(DetailRow {
            label: "Institution",
            value: record.institution.clone(),
        });
    }
    if !record.phone.is_empty() {
        details.push(DetailRow {
            label: "Phone",
            value: record.phone.clone(),
        });
    }
    if let Some(id) = record.registration_id() {
        details.push(DetailRow {
            label: "Registration ID",
            value: id.to_string(),
        });
    }
    if let Some(date) = record.registration_date() {
        details.push(DetailRow {
            label: "Registration Date",
            value: format_registration_date(date),
        });
    }

    let sessions = if record.has_selections() {
        SessionSelection::Selected {
            lightning_talks: resolve(catalog, record.lightning_talks()),
            breakout_sessions: resolve(catalog, record.breakout_sessions()),
        }
    } else {
        SessionSelection::GeneralAttendance
    };

    ConfirmationSummary {
        attendee_name: record.full_name(),
        details,
        sessions,
    }
}

/// Standalone HTML receipt, ready to be written under [`CONFIRMATION_FILENAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDocument {
    pub filename: &'static str,
    pub html: String,
}

impl ConfirmationDocument {
    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), SummitError> {
        fs::write(path, self.as_bytes())
            .map_err(|err| SummitError::Export(format!("failed to write {}: {err}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = self.html.len(), "confirmation saved");
        Ok(())
    }

    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, SummitError> {
        let path = dir.join(self.filename);
        self.write_to_path(&path)?;
        Ok(path)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLESHEET: &str = r#"        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 0 auto; padding: 20px; background: white; }
        .header { background: linear-gradient(135deg, #8B2635, #A73145); color: white; padding: 30px; text-align: center; border-radius: 8px; margin-bottom: 30px; }
        .header h1 { margin: 0 0 10px 0; font-size: 2rem; }
        .header h2 { margin: 0 0 20px 0; font-weight: 300; font-size: 1.2rem; }
        .event-details { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #8B2635; }
        .attendee-info { background: white; padding: 25px; border: 2px solid #8B2635; border-radius: 8px; margin: 20px 0; }
        .session-section { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0; }
        .session-item { background: white; padding: 15px; margin: 10px 0; border-left: 4px solid #8B2635; border-radius: 4px; }
        .footer { background: #8B2635; color: white; padding: 20px; text-align: center; border-radius: 8px; margin-top: 30px; }
        .reg-id { text-align: center; font-size: 1.2rem; font-weight: bold; color: #8B2635; margin: 20px 0; padding: 15px; background: #f0f8ff; border-radius: 8px; }
        .important-info { background: #fff3cd; border: 1px solid #ffeaa7; padding: 20px; border-radius: 8px; margin: 20px 0; }
        h3 { color: #8B2635; margin-top: 0; }
        @media print {
            body { margin: 0; padding: 10px; }
            .header { background: #8B2635 !important; print-color-adjust: exact; }
        }
"#;

/// Renders the receipt. Output depends only on the record and catalog, so
/// identical records produce identical bytes.
pub fn export_confirmation_document(
    record: &RegistrationRecord,
    catalog: &Catalog,
) -> Result<ConfirmationDocument, SummitError> {
    let (Some(registration_id), Some(date)) = (record.registration_id(), record.registration_date())
    else {
        return Err(SummitError::Export(
            "record has not been confirmed".to_string(),
        ));
    };
    let reg_id = escape_html(registration_id.as_str());
    let date = escape_html(&format_registration_date(date));

    let mut html = String::new();
    write_document(&mut html, record, catalog, &reg_id, &date)
        .map_err(|err| SummitError::Export(err.to_string()))?;

    Ok(ConfirmationDocument {
        filename: CONFIRMATION_FILENAME,
        html,
    })
}

fn write_document(
    out: &mut String,
    record: &RegistrationRecord,
    catalog: &Catalog,
    reg_id: &str,
    date: &str,
) -> std::fmt::Result {
    let name = event::EVENT_NAME;
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "    <title>QM Summit 2025 Registration Confirmation</title>")?;
    writeln!(out, "    <style>")?;
    out.push_str(STYLESHEET);
    writeln!(out, "    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "    <div class=\"header\">")?;
    writeln!(out, "        <h1>{name}</h1>")?;
    writeln!(out, "        <h2>Registration Confirmation</h2>")?;
    writeln!(out, "        <p>{}</p>", event::EVENT_TAGLINE)?;
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"reg-id\">Registration ID: {reg_id}</div>")?;

    writeln!(out, "    <div class=\"event-details\">")?;
    writeln!(out, "        <h3>Event Details</h3>")?;
    writeln!(out, "        <p><strong>Date:</strong> {}</p>", event::EVENT_DATE)?;
    writeln!(out, "        <p><strong>Time:</strong> {}</p>", event::EVENT_TIME)?;
    writeln!(out, "        <p><strong>Location:</strong> {}</p>", event::EVENT_LOCATION)?;
    writeln!(out, "        <p><strong>Address:</strong> {}</p>", event::EVENT_ADDRESS)?;
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"attendee-info\">")?;
    writeln!(out, "        <h3>Attendee Information</h3>")?;
    writeln!(
        out,
        "        <p><strong>Name:</strong> {}</p>",
        escape_html(&record.full_name())
    )?;
    writeln!(
        out,
        "        <p><strong>Email:</strong> {}</p>",
        escape_html(&record.email)
    )?;
    if !record.institution.is_empty() {
        writeln!(
            out,
            "        <p><strong>Institution:</strong> {}</p>",
            escape_html(&record.institution)
        )?;
    }
    if !record.phone.is_empty() {
        writeln!(
            out,
            "        <p><strong>Phone:</strong> {}</p>",
            escape_html(&record.phone)
        )?;
    }
    writeln!(out, "        <p><strong>Registration Date:</strong> {date}</p>")?;
    writeln!(out, "    </div>")?;

    let lightning = resolve(catalog, record.lightning_talks());
    let breakouts = resolve(catalog, record.breakout_sessions());
    write_session_section(
        out,
        &format!("Selected Lightning Talks ({})", event::LIGHTNING_TALK_WINDOW),
        &lightning,
    )?;
    write_session_section(
        out,
        &format!("Selected Breakout Sessions ({})", event::BREAKOUT_WINDOW),
        &breakouts,
    )?;
    if !record.has_selections() {
        writeln!(out, "    <div class=\"session-section\">")?;
        writeln!(out, "        <p><em>{GENERAL_ATTENDANCE_MESSAGE}</em></p>")?;
        writeln!(out, "    </div>")?;
    }

    writeln!(out, "    <div class=\"important-info\">")?;
    writeln!(out, "        <h3>Important Information</h3>")?;
    for item in event::IMPORTANT_INFO {
        writeln!(
            out,
            "        <p><strong>{}:</strong> {}</p>",
            item.label,
            escape_html(item.text)
        )?;
    }
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"session-section\">")?;
    writeln!(out, "        <h3>Parking Information</h3>")?;
    for option in event::PARKING_OPTIONS {
        writeln!(out, "        <p><strong>{}</strong></p>", option.name)?;
        for line in option.details {
            writeln!(out, "        <p>{line}</p>")?;
        }
    }
    writeln!(
        out,
        "        <p><strong>Payment:</strong> {}</p>",
        event::PARKING_PAYMENT
    )?;
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"footer\">")?;
    writeln!(out, "        <h4>Contact Information</h4>")?;
    writeln!(out, "        <p><strong>Event Coordinators:</strong></p>")?;
    for contact in event::COORDINATORS {
        writeln!(
            out,
            "        <p>{}: <a href=\"mailto:{email}\" style=\"color: white;\">{email}</a></p>",
            contact.name,
            email = contact.email
        )?;
    }
    writeln!(
        out,
        "        <p style=\"margin-top: 20px; font-size: 0.9rem; opacity: 0.9;\">Generated: {date} | Registration ID: {reg_id}</p>"
    )?;
    writeln!(out, "    </div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_session_section(out: &mut String, heading: &str, sessions: &[SessionLine]) -> std::fmt::Result {
    if sessions.is_empty() {
        return Ok(());
    }
    writeln!(out, "    <div class=\"session-section\">")?;
    writeln!(out, "        <h3>{heading}</h3>")?;
    for session in sessions {
        writeln!(out, "        <div class=\"session-item\">")?;
        writeln!(out, "            <strong>{}</strong><br>", escape_html(&session.title))?;
        writeln!(
            out,
            "            <span style=\"color: #666;\">{} | {}</span><br>",
            escape_html(&session.time),
            escape_html(&session.room)
        )?;
        writeln!(
            out,
            "            <em>Presenter: {}</em>",
            escape_html(&session.presenter)
        )?;
        writeln!(out, "        </div>")?;
    }
    writeln!(out, "    </div>")
}

#[cfg(test)]
#[path = "tests/confirmation_tests.rs"]
mod tests;
