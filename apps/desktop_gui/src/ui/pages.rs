//! One renderer per page. Renderers only read state and queue commands.

use eframe::egui;
use shared::domain::{FieldName, PageId, Session, SessionKind};
use summit_core::{
    confirmation::{SessionLine, SessionSelection},
    directory::{DirectoryRender, SpeakerCard, NO_RESULTS_MESSAGE},
    event, FormSource, RegistrationPhase, SiteCommand,
};

use super::{
    app::{photo_placeholder, SummitApp},
    theme,
};

fn page_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    ui.heading(egui::RichText::new(text).color(theme::ACCENT).strong());
    ui.add_space(6.0);
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(17.0));
    ui.separator();
}

fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(6.0);
}

impl SummitApp {
    pub(super) fn show_page(&mut self, ui: &mut egui::Ui) {
        match self.site.current_page() {
            PageId::Home => self.show_home(ui),
            PageId::Register => self.show_register(ui),
            PageId::Speakers => self.show_speakers(ui),
            PageId::Confirmation => self.show_confirmation(ui),
            PageId::Agenda => self.show_agenda(ui),
            PageId::Keynote => show_keynote(ui),
            PageId::Parking => show_parking(ui),
            PageId::Survey => show_survey(ui),
        }
    }

    fn show_home(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, event::EVENT_NAME);
        ui.label(egui::RichText::new(event::EVENT_TAGLINE).italics());
        ui.add_space(8.0);

        egui::Grid::new("event_facts")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Date", event::EVENT_DATE),
                    ("Time", event::EVENT_TIME),
                    ("Location", event::EVENT_LOCATION),
                    ("Address", event::EVENT_ADDRESS),
                ] {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Register Now").clicked() {
                self.navigate(PageId::Register);
            }
            if ui.button("Meet the Speakers").clicked() {
                self.navigate(PageId::Speakers);
            }
            if ui.button("View Agenda").clicked() {
                self.navigate(PageId::Agenda);
            }
        });

        section_heading(ui, "Important Information");
        for item in event::IMPORTANT_INFO {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}:", item.label)).strong());
                ui.label(item.text);
            });
        }

        section_heading(ui, "Questions?");
        for contact in event::COORDINATORS {
            ui.horizontal(|ui| {
                ui.label(contact.name);
                ui.hyperlink_to(contact.email, format!("mailto:{}", contact.email));
            });
        }
    }

    fn show_agenda(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Agenda");
        egui::Grid::new("agenda_grid")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for slot in event::AGENDA {
                    ui.label(egui::RichText::new(slot.time).strong());
                    ui.label(slot.title);
                    ui.end_row();
                }
            });

        let catalog = self.site.catalog();
        for (kind, window, sessions) in [
            (
                SessionKind::LightningTalk,
                event::LIGHTNING_TALK_WINDOW,
                catalog.lightning_talks(),
            ),
            (
                SessionKind::Breakout,
                event::BREAKOUT_WINDOW,
                catalog.breakout_sessions(),
            ),
        ] {
            section_heading(ui, &format!("{} ({window})", kind.label()));
            for session in sessions {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&session.time).monospace());
                    ui.label(egui::RichText::new(&session.title).strong());
                    ui.label(format!("{}, {}", session.room, session.presenter));
                });
            }
        }
    }

    fn show_register(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Register for the Summit");

        if self.site.flow().phase() == RegistrationPhase::Confirmed {
            ui.horizontal_wrapped(|ui| {
                ui.label("You have already registered in this session.");
                if ui.button("View confirmation").clicked() {
                    self.navigate(PageId::Confirmation);
                }
            });
            ui.add_space(6.0);
        }

        section_heading(ui, "Your Information");
        ui.small("Fields marked * are required.");
        for field in FieldName::ALL {
            self.form_field(ui, field);
        }

        let lightning = self.site.catalog().lightning_talks().to_vec();
        let breakouts = self.site.catalog().breakout_sessions().to_vec();

        section_heading(
            ui,
            &format!(
                "{} ({})",
                SessionKind::LightningTalk.label(),
                event::LIGHTNING_TALK_WINDOW
            ),
        );
        for session in &lightning {
            self.session_card(ui, session);
        }

        section_heading(
            ui,
            &format!(
                "{} ({})",
                SessionKind::Breakout.label(),
                event::BREAKOUT_WINDOW
            ),
        );
        for session in &breakouts {
            self.session_card(ui, session);
        }

        ui.add_space(8.0);
        ui.small("Session selection is optional; without one you are registered for general attendance.");
        ui.add_space(4.0);
        if ui
            .add(egui::Button::new(
                egui::RichText::new("Complete Registration").strong(),
            ))
            .clicked()
        {
            self.pending.push(SiteCommand::Submit);
        }
    }

    fn form_field(&mut self, ui: &mut egui::Ui, field: FieldName) {
        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        ui.label(egui::RichText::new(label).strong());

        let error = self
            .site
            .flow()
            .displayed_errors()
            .get(field)
            .map(str::to_string);
        let edit = egui::TextEdit::singleline(self.site.form_mut().field_mut(field))
            .id_salt(("registration_field", field.as_str()))
            .desired_width(f32::INFINITY);
        let response = ui.add(edit);

        if self.focus_request == Some(field) {
            response.request_focus();
            self.focus_request = None;
        }
        if response.changed() {
            self.pending.push(SiteCommand::FieldEdited(field));
        }
        if response.lost_focus() {
            self.pending.push(SiteCommand::FieldBlurred(field));
        }
        if let Some(message) = error {
            ui.colored_label(theme::ERROR_TEXT, message);
        }
        ui.add_space(4.0);
    }

    fn session_card(&mut self, ui: &mut egui::Ui, session: &Session) {
        let info = self.site.catalog().presenter_info(session);
        let was_checked = self.site.form().is_checked(&session.id);

        card(ui, |ui| {
            let mut checked = was_checked;
            let title = egui::RichText::new(&session.title).strong();
            if ui.checkbox(&mut checked, title).changed() {
                self.pending
                    .push(SiteCommand::ToggleSession(session.id.clone()));
            }
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&session.time).monospace());
                ui.label(&session.room);
            });
            if let Some(moderator) = &session.moderator {
                ui.label(format!("Moderator: {moderator}"));
            }
            ui.label(format!("Presenter: {}", session.presenter));
            if let Some(title) = &info.title {
                ui.small(title);
            }
            if let Some(institution) = &info.institution {
                ui.small(institution);
            }
            ui.label(&session.description);
            if !info.bio_links.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for link in &info.bio_links {
                        if ui.link(&link.label).clicked() {
                            self.pending.push(SiteCommand::ShowBio(link.key.clone()));
                        }
                    }
                });
            }
        });
    }

    fn show_speakers(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Our Speakers");

        ui.horizontal_wrapped(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.search_text)
                    .id_salt("speaker_search")
                    .hint_text("Search speakers by name, title, institution, or bio")
                    .desired_width(360.0),
            );
            if search.changed() {
                self.pending
                    .push(SiteCommand::SearchInput(self.search_text.clone()));
            }

            let current = self.site.directory().institution().to_string();
            let selected_text = if current.is_empty() {
                "All Institutions".to_string()
            } else {
                current.clone()
            };
            let mut choice = current.clone();
            egui::ComboBox::from_id_salt("institution_filter")
                .selected_text(selected_text)
                .width(280.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut choice, String::new(), "All Institutions");
                    for institution in self.site.catalog().institutions() {
                        let label = institution.clone();
                        ui.selectable_value(&mut choice, institution, label);
                    }
                });
            if choice != current {
                self.pending.push(SiteCommand::InstitutionSelected(choice));
            }
        });
        ui.add_space(8.0);

        match self.site.directory().snapshot().clone() {
            DirectoryRender::NoResults => {
                ui.label(egui::RichText::new(NO_RESULTS_MESSAGE).italics());
            }
            DirectoryRender::Cards(cards) => {
                ui.small(format!("Showing {} speakers", cards.len()));
                for speaker in &cards {
                    self.speaker_card(ui, speaker);
                }
            }
        }
    }

    fn speaker_card(&mut self, ui: &mut egui::Ui, speaker: &SpeakerCard) {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                photo_placeholder(ui, &speaker.photo_label);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&speaker.name).strong().size(16.0));
                    ui.label(&speaker.title);
                    ui.label(egui::RichText::new(&speaker.institution).italics());
                    ui.add_space(4.0);
                    ui.label(&speaker.bio_preview);
                    if ui.button("Read Full Bio").clicked() {
                        self.pending.push(SiteCommand::ShowBio(speaker.key.clone()));
                    }
                });
            });
        });
    }

    fn show_confirmation(&mut self, ui: &mut egui::Ui) {
        let Some(summary) = self.site.flow().confirmation().cloned() else {
            page_heading(ui, "Registration Confirmation");
            ui.label("There is no completed registration to show yet.");
            if ui.button("Go to registration").clicked() {
                self.navigate(PageId::Register);
            }
            return;
        };

        page_heading(ui, "Registration Confirmed!");
        ui.label(format!(
            "Thank you, {}. Your spot at the {} is reserved.",
            summary.attendee_name,
            event::EVENT_NAME
        ));

        section_heading(ui, "Registration Details");
        egui::Grid::new("registration_details")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for row in &summary.details {
                    ui.label(egui::RichText::new(row.label).strong());
                    ui.label(&row.value);
                    ui.end_row();
                }
            });

        match &summary.sessions {
            SessionSelection::GeneralAttendance => {
                section_heading(ui, "Your Sessions");
                ui.label(event::GENERAL_ATTENDANCE_MESSAGE);
            }
            SessionSelection::Selected {
                lightning_talks,
                breakout_sessions,
            } => {
                session_group(
                    ui,
                    &format!("Selected Lightning Talks ({})", event::LIGHTNING_TALK_WINDOW),
                    lightning_talks,
                );
                session_group(
                    ui,
                    &format!("Selected Breakout Sessions ({})", event::BREAKOUT_WINDOW),
                    breakout_sessions,
                );
            }
        }

        section_heading(ui, "Event Information");
        ui.label(format!("{} | {}", event::EVENT_DATE, event::EVENT_TIME));
        ui.label(format!("{}, {}", event::EVENT_LOCATION, event::EVENT_ADDRESS));
        for item in event::IMPORTANT_INFO {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}:", item.label)).strong());
                ui.label(item.text);
            });
        }

        ui.add_space(12.0);
        let registration_id = self
            .site
            .flow()
            .confirmed_record()
            .and_then(|record| record.registration_id())
            .map(|id| id.as_str().to_string());
        ui.horizontal_wrapped(|ui| {
            if ui.button("Download Confirmation").clicked() {
                self.pending.push(SiteCommand::ExportConfirmation);
            }
            if let Some(id) = &registration_id {
                if ui.button("Copy Registration ID").clicked() {
                    self.copy_to_clipboard(id, "registration ID");
                }
            }
            if ui.button("Register Another Attendee").clicked() {
                self.pending.push(SiteCommand::Reset);
            }
        });
    }
}

fn session_group(ui: &mut egui::Ui, heading: &str, sessions: &[SessionLine]) {
    if sessions.is_empty() {
        return;
    }
    section_heading(ui, heading);
    for session in sessions {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&session.title).strong());
            ui.label(format!("{} | {}", session.time, session.room));
            ui.label(format!("Presenter: {}", session.presenter));
        });
    }
}

fn show_keynote(ui: &mut egui::Ui) {
    page_heading(ui, event::KEYNOTE_HEADING);
    ui.label(event::KEYNOTE_NOTE);
    ui.add_space(6.0);
    ui.label(format!("{} at {}", event::EVENT_DATE, event::EVENT_LOCATION));
}

fn show_parking(ui: &mut egui::Ui) {
    page_heading(ui, "Parking & Venue");
    ui.label(egui::RichText::new(event::EVENT_LOCATION).strong());
    ui.label(event::EVENT_ADDRESS);

    for option in event::PARKING_OPTIONS {
        section_heading(ui, option.name);
        for detail in option.details {
            ui.label(format!("- {detail}"));
        }
    }

    section_heading(ui, "Payment");
    ui.label(event::PARKING_PAYMENT);
}

fn show_survey(ui: &mut egui::Ui) {
    page_heading(ui, event::SURVEY_HEADING);
    ui.label(event::SURVEY_NOTE);
}
