use shared::{domain::PageId, error::SummitError};

const MAX_HISTORY: usize = 64;

/// Which page is showing, plus a back stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: PageId,
    history: Vec<PageId>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: PageId::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn title(&self) -> &'static str {
        self.current.window_title()
    }

    /// Resolves a page identifier and activates it; unknown identifiers leave the
    /// current page in place.
    pub fn show_page(&mut self, page_id: &str) -> Result<PageId, SummitError> {
        let page = page_id.parse::<PageId>()?;
        self.go(page);
        Ok(page)
    }

    pub fn go(&mut self, page: PageId) {
        tracing::info!(page = %page, "navigating");
        if page == self.current {
            return;
        }
        self.history.push(self.current);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.current = page;
    }

    pub fn back(&mut self) -> Option<PageId> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_is_rejected_and_current_kept() {
        let mut nav = Navigator::new();
        nav.show_page("speakers").expect("speakers");
        let err = nav.show_page("admin").unwrap_err();
        assert!(matches!(err, SummitError::Navigation(_)));
        assert_eq!(nav.current(), PageId::Speakers);
        assert_eq!(nav.title(), "Speakers - UNC QM Summit 2025");
    }

    #[test]
    fn back_walks_history() {
        let mut nav = Navigator::new();
        nav.go(PageId::Register);
        nav.go(PageId::Confirmation);
        assert_eq!(nav.back(), Some(PageId::Register));
        assert_eq!(nav.back(), Some(PageId::Home));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), PageId::Home);
    }
}
