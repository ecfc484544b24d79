//! Short-lived screen-reader announcements.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub politeness: Politeness,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct Announcer {
    live: Vec<Announcement>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(
        &mut self,
        politeness: Politeness,
        text: impl Into<String>,
        ttl: Duration,
        now: Instant,
    ) {
        let text = text.into();
        tracing::debug!(?politeness, %text, "announcement");
        self.live.push(Announcement {
            politeness,
            text,
            expires_at: now + ttl,
        });
    }

    /// Drops expired announcements.
    pub fn prune(&mut self, now: Instant) {
        self.live.retain(|a| a.expires_at > now);
    }

    pub fn live(&self) -> &[Announcement] {
        &self.live
    }

    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.live
            .iter()
            .map(|a| a.expires_at.saturating_duration_since(now))
            .min()
    }
}
