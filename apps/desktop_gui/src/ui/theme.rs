use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "summit_gui.preferences";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.6;

/// Summit brand blue, used for headings and primary actions.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(75, 156, 211);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 90, 90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreset {
    Dark,
    Light,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    pub theme: ThemePreset,
    pub text_scale: f32,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: ThemePreset::Light,
            text_scale: 1.0,
        }
    }
}

impl UiPreferences {
    pub fn from_storage(raw: Option<String>) -> Self {
        raw.and_then(|text| serde_json::from_str::<UiPreferences>(&text).ok())
            .unwrap_or_default()
            .clamped()
    }

    pub fn clamped(mut self) -> Self {
        if !self.text_scale.is_finite() {
            self.text_scale = 1.0;
        }
        self.text_scale = self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        self
    }

    pub fn text_scale_range() -> std::ops::RangeInclusive<f32> {
        MIN_TEXT_SCALE..=MAX_TEXT_SCALE
    }
}

pub fn apply(ctx: &egui::Context, prefs: UiPreferences) {
    let mut style = (*ctx.style()).clone();
    style.visuals = match prefs.theme {
        ThemePreset::Dark => egui::Visuals::dark(),
        ThemePreset::Light => egui::Visuals::light(),
    };
    style.visuals.hyperlink_color = ACCENT;
    style.visuals.selection.bg_fill = ACCENT;
    style.text_styles = scaled_text_styles(prefs.text_scale);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}

fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}
