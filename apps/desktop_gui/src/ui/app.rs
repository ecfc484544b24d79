use std::{
    panic::{self, AssertUnwindSafe},
    time::Instant,
};

use arboard::Clipboard;
use eframe::egui;
use shared::{
    domain::{FieldName, PageId},
    error::SummitError,
};
use summit_core::{announce::Politeness, event, Moment, SiteCommand, SiteController};

use crate::{
    config::Settings,
    controller::{
        events::{panic_to_error, StatusBanner, StatusBannerSeverity},
        orchestration::{dispatch_site_command, SaveDialog},
    },
    ui::theme::{self, ThemePreset, UiPreferences, SETTINGS_STORAGE_KEY},
};

/// Everything the shell needs at start-up.
pub struct StartupConfig {
    pub site: SiteController,
    pub settings: Settings,
    pub preferences: UiPreferences,
    pub startup_error: Option<SummitError>,
}

pub struct SummitApp {
    pub(super) site: SiteController,
    pub(super) settings: Settings,
    pub(super) prefs: UiPreferences,
    applied_prefs: Option<UiPreferences>,
    /// Commands raised while drawing; dispatched once the frame is laid out.
    pub(super) pending: Vec<SiteCommand>,
    pub(super) focus_request: Option<FieldName>,
    scroll_to_top: bool,
    pub(super) info_banner: Option<StatusBanner>,
    pub(super) search_text: String,
    settings_open: bool,
    window_title: Option<&'static str>,
}

impl SummitApp {
    pub fn new(startup: StartupConfig) -> Self {
        let StartupConfig {
            mut site,
            settings,
            preferences,
            startup_error,
        } = startup;
        if let Some(err) = startup_error {
            site.report_error(err);
        }
        let search_text = site.directory().search_input().to_string();

        Self {
            site,
            settings,
            prefs: preferences,
            applied_prefs: None,
            pending: Vec::new(),
            focus_request: None,
            scroll_to_top: false,
            info_banner: None,
            search_text,
            settings_open: false,
            window_title: None,
        }
    }

    pub(super) fn navigate(&mut self, page: PageId) {
        self.pending
            .push(SiteCommand::Navigate(page.as_str().to_string()));
    }

    pub(super) fn copy_to_clipboard(&mut self, text: &str, label: &str) {
        let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()));
        self.info_banner = Some(match result {
            Ok(()) => StatusBanner::info(format!("Copied {label} to clipboard")),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                StatusBanner::info(format!("Could not copy {label}: {err}"))
            }
        });
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_prefs == Some(self.prefs) {
            return;
        }
        theme::apply(ctx, self.prefs);
        self.applied_prefs = Some(self.prefs);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("site_navigation")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(event::EVENT_NAME)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.separator();

                    let current = self.site.current_page();
                    for page in PageId::ALL {
                        if page == PageId::Confirmation && current != PageId::Confirmation {
                            continue;
                        }
                        if ui
                            .selectable_label(current == page, page.nav_label())
                            .clicked()
                            && current != page
                        {
                            self.navigate(page);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Settings").clicked() {
                            self.settings_open = !self.settings_open;
                        }
                        if ui.button("Back").clicked() {
                            self.pending.push(SiteCommand::Back);
                        }
                    });
                });
            });
    }

    /// Stand-in for a screen-reader live region.
    fn show_announcements(&mut self, ctx: &egui::Context) {
        let live = self.site.announcer().live();
        if live.is_empty() {
            return;
        }

        egui::TopBottomPanel::bottom("live_region")
            .resizable(false)
            .show(ctx, |ui| {
                for announcement in live {
                    let text = egui::RichText::new(&announcement.text);
                    let text = match announcement.politeness {
                        Politeness::Assertive => text.strong().color(theme::ERROR_TEXT),
                        Politeness::Polite => text.italics(),
                    };
                    ui.label(text);
                }
            });
    }

    fn show_status_banners(&mut self, ui: &mut egui::Ui) {
        if let Some(report) = self.site.error() {
            let banner = StatusBanner::from_report(report);
            if banner_frame(ui, &banner) {
                self.pending.push(SiteCommand::DismissError);
            }
            ui.add_space(6.0);
        }

        if let Some(banner) = self.info_banner.clone() {
            if banner_frame(ui, &banner) {
                self.info_banner = None;
            }
            ui.add_space(6.0);
        }
    }

    fn show_bio_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.site.bio_modal().cloned() else {
            return;
        };

        let mut open = true;
        let mut close_requested = false;
        egui::Window::new(modal.name.as_str())
            .id(egui::Id::new("speaker_bio_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(520.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    photo_placeholder(ui, &modal.photo_label);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&modal.title).strong());
                        ui.label(&modal.institution);
                    });
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_salt("speaker_bio_scroll")
                    .max_height(360.0)
                    .show(ui, |ui| {
                        ui.label(&modal.bio);
                    });
                ui.separator();
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });

        if !open || close_requested {
            self.pending.push(SiteCommand::CloseModals);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Display settings")
            .open(&mut settings_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.prefs.theme.label())
                    .show_ui(ui, |ui| {
                        for preset in [ThemePreset::Light, ThemePreset::Dark] {
                            ui.selectable_value(&mut self.prefs.theme, preset, preset.label());
                        }
                    });
                ui.add(
                    egui::Slider::new(&mut self.prefs.text_scale, UiPreferences::text_scale_range())
                        .text("Text scale")
                        .step_by(0.05),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.prefs = UiPreferences::default();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banners(ui);

            let mut scroll = egui::ScrollArea::vertical()
                .id_salt(("page_scroll", self.site.current_page().as_str()))
                .auto_shrink([false, false]);
            if std::mem::take(&mut self.scroll_to_top) {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                ui.set_max_width(900.0);
                let rendered = panic::catch_unwind(AssertUnwindSafe(|| self.show_page(ui)));
                if let Err(payload) = rendered {
                    self.site.report_error(panic_to_error(payload.as_ref()));
                }
            });
        });
    }

    fn flush_commands(&mut self, ctx: &egui::Context) {
        let mut commands = std::mem::take(&mut self.pending);
        if !commands.is_empty() {
            ctx.request_repaint();
        }
        commands.push(SiteCommand::Tick);

        let mut save_target = SaveDialog {
            start_dir: self.settings.export_start_dir(),
        };
        for command in commands {
            let outcome =
                dispatch_site_command(&mut self.site, command, Moment::now(), &mut save_target);
            if let Some(field) = outcome.focus {
                self.focus_request = Some(field);
            }
            if outcome.scroll_to_top {
                self.scroll_to_top = true;
            }
            if let Some(status) = outcome.status {
                self.info_banner = Some(StatusBanner::info(status));
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.site.navigator().title();
        if self.window_title != Some(title) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
            self.window_title = Some(title);
        }
    }
}

/// Draws a banner; returns true when its Dismiss button was clicked.
fn banner_frame(ui: &mut egui::Ui, banner: &StatusBanner) -> bool {
    let (fill, stroke) = match banner.severity {
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
        StatusBannerSeverity::Info => (
            egui::Color32::from_rgb(38, 78, 112),
            egui::Stroke::new(1.0, theme::ACCENT),
        ),
    };

    let mut dismissed = false;
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}: {}", banner.heading, banner.message))
                        .color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

pub(super) fn photo_placeholder(ui: &mut egui::Ui, label: &str) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().weak_text_color()))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(88.0, 88.0));
            ui.centered_and_justified(|ui| {
                ui.small(label);
            });
        });
}

impl eframe::App for SummitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.pending.push(SiteCommand::CloseModals);
        }

        self.show_top_bar(ctx);
        self.show_announcements(ctx);
        self.show_central(ctx);
        self.show_bio_modal(ctx);
        self.show_settings_window(ctx);

        self.flush_commands(ctx);
        self.sync_window_title(ctx);

        if let Some(wait) = self.site.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.prefs.clamped()) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
