//! Routes UI commands into the site controller and carries out the effects it returns.

use std::path::PathBuf;

use shared::{domain::FieldName, error::SummitError};
use summit_core::{
    Catalog, ConfirmationDocument, Moment, SiteCommand, SiteController, SiteEffect,
};

/// Picks where an exported document goes. `None` means the user cancelled.
pub trait SaveTarget {
    fn choose_path(&mut self, filename: &str) -> Option<PathBuf>;
}

/// Native "Save As" dialog.
pub struct SaveDialog {
    pub start_dir: Option<PathBuf>,
}

impl SaveTarget for SaveDialog {
    fn choose_path(&mut self, filename: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(filename)
            .add_filter("HTML document", &["html"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

/// Keeps the window usable when the catalog cannot be loaded: the site starts
/// empty and the error is handed back for the banner.
pub fn catalog_or_empty(loaded: Result<Catalog, SummitError>) -> (Catalog, Option<SummitError>) {
    match loaded {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            tracing::error!(code = ?err.code(), "catalog unavailable, starting empty: {err}");
            (Catalog::empty(), Some(err))
        }
    }
}

/// What the shell still has to do after a command was handled.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub focus: Option<FieldName>,
    pub scroll_to_top: bool,
    pub status: Option<String>,
}

pub fn dispatch_site_command(
    site: &mut SiteController,
    command: SiteCommand,
    at: Moment,
    save_target: &mut dyn SaveTarget,
) -> DispatchOutcome {
    let cmd_name = command.name();
    let effects = site.handle(command, at);
    if !effects.is_empty() {
        tracing::debug!(command = cmd_name, effects = effects.len(), "applying site effects");
    }

    let mut outcome = DispatchOutcome::default();
    for effect in effects {
        match effect {
            SiteEffect::FocusField(field) => outcome.focus = Some(field),
            SiteEffect::ScrollToTop => outcome.scroll_to_top = true,
            SiteEffect::SaveDocument(document) => {
                match save_document(&document, save_target) {
                    Ok(Some(path)) => {
                        outcome.status = Some(format!("Saved confirmation to {}", path.display()));
                    }
                    Ok(None) => tracing::info!("confirmation download cancelled"),
                    Err(err) => site.report_error(err),
                }
            }
        }
    }
    outcome
}

fn save_document(
    document: &ConfirmationDocument,
    save_target: &mut dyn SaveTarget,
) -> Result<Option<PathBuf>, SummitError> {
    let Some(path) = save_target.choose_path(&document.filename) else {
        return Ok(None);
    };
    document.write_to_path(&path)?;
    Ok(Some(path))
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
