//! Static session and speaker records, loaded once at startup.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Deserialize;
use shared::{
    domain::{Session, SessionId, SessionKind, Speaker, SpeakerKey},
    error::SummitError,
};

const SESSIONS_JSON: &str = include_str!("../data/sessions.json");
const SPEAKERS_JSON: &str = include_str!("../data/speakers.json");

#[derive(Debug, Deserialize)]
struct SessionTable {
    lightning_talks: Vec<Session>,
    breakout_sessions: Vec<Session>,
}

/// Bio link for one resolvable presenter of a session card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioLink {
    pub key: SpeakerKey,
    pub label: String,
}

/// Presenter details shown on a session card. Empty when no key resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterInfo {
    pub title: Option<String>,
    pub institution: Option<String>,
    pub bio_links: Vec<BioLink>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    lightning_talks: Vec<Session>,
    breakout_sessions: Vec<Session>,
    speakers: Vec<Speaker>,
    session_index: HashMap<SessionId, (SessionKind, usize)>,
    speaker_index: HashMap<SpeakerKey, usize>,
}

impl Catalog {
    /// Parses the embedded session and speaker tables.
    pub fn load() -> Result<Self, SummitError> {
        let sessions: SessionTable = serde_json::from_str(SESSIONS_JSON)?;
        let speakers: Vec<Speaker> = serde_json::from_str(SPEAKERS_JSON)?;
        let catalog = Self::from_parts(sessions.lightning_talks, sessions.breakout_sessions, speakers)?;
        tracing::info!(
            lightning_talks = catalog.lightning_talks.len(),
            breakout_sessions = catalog.breakout_sessions.len(),
            speakers = catalog.speakers.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// No sessions and no speakers; what the site runs on when loading fails.
    pub fn empty() -> Self {
        Self {
            lightning_talks: Vec::new(),
            breakout_sessions: Vec::new(),
            speakers: Vec::new(),
            session_index: HashMap::new(),
            speaker_index: HashMap::new(),
        }
    }

    pub fn from_parts(
        lightning_talks: Vec<Session>,
        breakout_sessions: Vec<Session>,
        speakers: Vec<Speaker>,
    ) -> Result<Self, SummitError> {
        let mut session_index = HashMap::new();
        for (kind, sessions) in [
            (SessionKind::LightningTalk, &lightning_talks),
            (SessionKind::Breakout, &breakout_sessions),
        ] {
            for (idx, session) in sessions.iter().enumerate() {
                if session_index
                    .insert(session.id.clone(), (kind, idx))
                    .is_some()
                {
                    return Err(SummitError::Catalog(format!(
                        "duplicate session id {}",
                        session.id
                    )));
                }
            }
        }

        let mut speaker_index = HashMap::new();
        for (idx, speaker) in speakers.iter().enumerate() {
            if speaker_index.insert(speaker.key.clone(), idx).is_some() {
                return Err(SummitError::Catalog(format!(
                    "duplicate speaker key {}",
                    speaker.key
                )));
            }
        }

        let dangling: HashSet<&SpeakerKey> = lightning_talks
            .iter()
            .chain(breakout_sessions.iter())
            .flat_map(|s| s.presenter_keys.iter())
            .filter(|key| !speaker_index.contains_key(*key))
            .collect();
        if !dangling.is_empty() {
            tracing::warn!(count = dangling.len(), "sessions reference speakers without a bio");
        }

        Ok(Self {
            lightning_talks,
            breakout_sessions,
            speakers,
            session_index,
            speaker_index,
        })
    }

    pub fn lightning_talks(&self) -> &[Session] {
        &self.lightning_talks
    }

    pub fn breakout_sessions(&self) -> &[Session] {
        &self.breakout_sessions
    }

    /// Lightning talks followed by breakouts, in catalog order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.lightning_talks
            .iter()
            .chain(self.breakout_sessions.iter())
    }

    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    pub fn find_session_by_id(&self, id: &SessionId) -> Option<&Session> {
        let (kind, idx) = self.session_index.get(id)?;
        match kind {
            SessionKind::LightningTalk => self.lightning_talks.get(*idx),
            SessionKind::Breakout => self.breakout_sessions.get(*idx),
        }
    }

    /// Catalog kind of a session; `None` for ids the catalog does not hold.
    pub fn session_kind(&self, id: &SessionId) -> Option<SessionKind> {
        self.session_index.get(id).map(|(kind, _)| *kind)
    }

    pub fn speaker(&self, key: &SpeakerKey) -> Option<&Speaker> {
        self.speaker_index
            .get(key)
            .and_then(|idx| self.speakers.get(*idx))
    }

    /// Title and institution follow the first listed presenter only; links
    /// cover every key that resolves. A one-key list is a single presenter.
    pub fn presenter_info(&self, session: &Session) -> PresenterInfo {
        let lead = session
            .presenter_keys
            .first()
            .and_then(|key| self.speaker(key));
        let resolved: Vec<&Speaker> = session
            .presenter_keys
            .iter()
            .filter_map(|key| self.speaker(key))
            .collect();

        let bio_links = match resolved.as_slice() {
            [only] if session.presenter_keys.len() == 1 => vec![BioLink {
                key: only.key.clone(),
                label: "View Full Bio".to_string(),
            }],
            _ => resolved
                .iter()
                .map(|speaker| BioLink {
                    key: speaker.key.clone(),
                    label: format!("View {}'s Bio", first_name(&speaker.name)),
                })
                .collect(),
        };

        PresenterInfo {
            title: lead.map(|speaker| speaker.title.clone()),
            institution: lead.map(|speaker| speaker.institution.clone()),
            bio_links,
        }
    }

    /// Distinct speaker institutions, sorted, for the directory filter.
    pub fn institutions(&self) -> Vec<String> {
        self.speakers
            .iter()
            .map(|s| s.institution.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_with_both_tracks() {
        let catalog = Catalog::load().expect("catalog");
        assert_eq!(catalog.lightning_talks().len(), 4);
        assert_eq!(catalog.breakout_sessions().len(), 4);
        assert_eq!(catalog.speakers().len(), 23);
        assert!(catalog
            .lightning_talks()
            .iter()
            .all(|s| s.kind() == Some(SessionKind::LightningTalk)));
        assert!(catalog
            .breakout_sessions()
            .iter()
            .all(|s| s.kind() == Some(SessionKind::Breakout)));
    }

    #[test]
    fn lookup_returns_none_for_unknown_session() {
        let catalog = Catalog::load().expect("catalog");
        assert_eq!(
            catalog
                .find_session_by_id(&SessionId::from("bs3"))
                .map(|s| s.title.as_str()),
            Some("Building AI-Powered Learning Partners")
        );
        assert!(catalog.find_session_by_id(&SessionId::from("bs99")).is_none());
        assert!(catalog.find_session_by_id(&SessionId::from("")).is_none());
    }

    #[test]
    fn presenter_without_bio_yields_empty_info() {
        let catalog = Catalog::load().expect("catalog");
        let tba = catalog
            .find_session_by_id(&SessionId::from("bs2"))
            .expect("bs2");
        assert_eq!(catalog.presenter_info(tba), PresenterInfo::default());
    }

    #[test]
    fn multi_presenter_links_use_first_names() {
        let catalog = Catalog::load().expect("catalog");
        let panel = catalog
            .find_session_by_id(&SessionId::from("lt3"))
            .expect("lt3");
        let info = catalog.presenter_info(panel);
        let labels: Vec<&str> = info.bio_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["View Amy's Bio", "View Brittany's Bio"]);
        assert_eq!(info.institution.as_deref(), Some("University of North Carolina Wilmington"));
    }

    #[test]
    fn unresolved_lead_presenter_leaves_title_blank() {
        let catalog = Catalog::load().expect("catalog");
        let mut session = catalog
            .find_session_by_id(&SessionId::from("lt3"))
            .expect("lt3")
            .clone();
        session.presenter_keys.insert(0, SpeakerKey::from("ghost"));

        let info = catalog.presenter_info(&session);
        assert_eq!(info.title, None);
        assert_eq!(info.institution, None);
        assert_eq!(info.bio_links.len(), 2);
    }

    #[test]
    fn single_presenter_gets_full_bio_label() {
        let catalog = Catalog::load().expect("catalog");
        let talk = catalog
            .find_session_by_id(&SessionId::from("lt1"))
            .expect("lt1");
        let info = catalog.presenter_info(talk);
        let labels: Vec<&str> = info.bio_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["View Full Bio"]);
        assert!(info.title.is_some());
    }

    #[test]
    fn duplicate_session_ids_are_rejected() {
        let catalog = Catalog::load().expect("catalog");
        let mut breakouts = catalog.breakout_sessions().to_vec();
        breakouts.push(catalog.lightning_talks()[0].clone());
        let err = Catalog::from_parts(
            catalog.lightning_talks().to_vec(),
            breakouts,
            catalog.speakers().to_vec(),
        )
        .unwrap_err();
        assert!(matches!(err, SummitError::Catalog(_)));
    }

    #[test]
    fn institutions_are_sorted_and_unique() {
        let catalog = Catalog::load().expect("catalog");
        let institutions = catalog.institutions();
        let mut sorted = institutions.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(institutions, sorted);
        assert!(institutions.contains(&"Winston-Salem State University".to_string()));
    }
}
