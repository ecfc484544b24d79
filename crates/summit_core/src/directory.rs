//! Filterable speaker directory and the bio modal.

use std::time::{Duration, Instant};

use shared::{
    domain::{Speaker, SpeakerKey},
    error::SummitError,
};

use crate::{catalog::Catalog, debounce::Debouncer};

pub const NO_RESULTS_MESSAGE: &str = "No speakers found matching your criteria.";
pub const BIO_PREVIEW_CHARS: usize = 200;

/// Speakers matching `search_term` (case-insensitive, any of name/title/institution/bio)
/// and, when non-empty, exactly `institution`. Input order is preserved.
pub fn filter<'a>(speakers: &'a [Speaker], search_term: &str, institution: &str) -> Vec<&'a Speaker> {
    let term = search_term.to_lowercase();
    speakers
        .iter()
        .filter(|speaker| {
            let matches_search = term.is_empty()
                || [
                    &speaker.name,
                    &speaker.title,
                    &speaker.institution,
                    &speaker.bio,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            let matches_institution = institution.is_empty() || speaker.institution == institution;
            matches_search && matches_institution
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerCard {
    pub key: SpeakerKey,
    pub name: String,
    pub title: String,
    pub institution: String,
    pub photo_label: String,
    pub bio_preview: String,
}

impl SpeakerCard {
    fn from_speaker(speaker: &Speaker) -> Self {
        Self {
            key: speaker.key.clone(),
            name: speaker.name.clone(),
            title: speaker.title.clone(),
            institution: speaker.institution.clone(),
            photo_label: photo_label(&speaker.name),
            bio_preview: format!(
                "{}...",
                speaker.bio.chars().take(BIO_PREVIEW_CHARS).collect::<String>()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryRender {
    NoResults,
    Cards(Vec<SpeakerCard>),
}

impl DirectoryRender {
    pub fn len(&self) -> usize {
        match self {
            Self::NoResults => 0,
            Self::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn render(speakers: &[&Speaker]) -> DirectoryRender {
    if speakers.is_empty() {
        return DirectoryRender::NoResults;
    }
    DirectoryRender::Cards(speakers.iter().map(|s| SpeakerCard::from_speaker(s)).collect())
}

fn photo_label(name: &str) -> String {
    let surname = name.split(' ').next_back().unwrap_or(name);
    format!("{surname} Photo")
}

/// Full biography shown in the modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioModal {
    pub key: SpeakerKey,
    pub name: String,
    pub title: String,
    pub institution: String,
    pub photo_label: String,
    pub bio: String,
}

impl BioModal {
    pub fn open(catalog: &Catalog, key: &SpeakerKey) -> Result<Self, SummitError> {
        let speaker = catalog
            .speaker(key)
            .ok_or_else(|| SummitError::Render(format!("no bio for speaker {key}")))?;
        Ok(Self {
            key: speaker.key.clone(),
            name: speaker.name.clone(),
            title: speaker.title.clone(),
            institution: speaker.institution.clone(),
            photo_label: photo_label(&speaker.name),
            bio: speaker.bio.clone(),
        })
    }
}

/// Directory page state: the inputs, the pending search, and the last rendered snapshot.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    search_input: String,
    applied_search: String,
    institution: String,
    debouncer: Debouncer,
    snapshot: DirectoryRender,
}

impl DirectoryState {
    pub fn new(catalog: &Catalog, search_delay: Duration) -> Self {
        let all: Vec<&Speaker> = catalog.speakers().iter().collect();
        Self {
            search_input: String::new(),
            applied_search: String::new(),
            institution: String::new(),
            debouncer: Debouncer::new(search_delay),
            snapshot: render(&all),
        }
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn snapshot(&self) -> &DirectoryRender {
        &self.snapshot
    }

    /// Records a keystroke; the filter runs once input has been idle for the delay.
    pub fn search_input_changed(&mut self, value: impl Into<String>, now: Instant) {
        self.search_input = value.into();
        self.debouncer.arm(now);
    }

    /// Institution changes apply immediately, together with whatever is typed so far.
    pub fn institution_selected(&mut self, catalog: &Catalog, institution: impl Into<String>) {
        self.institution = institution.into();
        self.debouncer.cancel();
        self.applied_search = self.search_input.clone();
        self.refresh(catalog);
    }

    /// Applies a due search. Returns true when the snapshot was re-rendered.
    pub fn poll(&mut self, catalog: &Catalog, now: Instant) -> bool {
        if !self.debouncer.fire_if_due(now) {
            return false;
        }
        self.applied_search = self.search_input.clone();
        self.refresh(catalog);
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    fn refresh(&mut self, catalog: &Catalog) {
        let filtered = filter(catalog.speakers(), &self.applied_search, &self.institution);
        tracing::debug!(
            search = %self.applied_search,
            institution = %self.institution,
            matches = filtered.len(),
            "speaker directory filtered"
        );
        self.snapshot = render(&filtered);
    }
}
