//! Paginated viewer session with bounded navigation.

/// Lifecycle of a pager session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Accepting navigation events.
    Open,
    /// Terminal: the inactivity window elapsed.
    Expired,
}

/// A multi-page viewer. Navigation clamps at both bounds; out-of-range
/// requests are absorbed silently rather than surfaced as errors.
#[derive(Debug, Clone)]
pub struct PagerSession<P> {
    pages: Vec<P>,
    current: usize,
    state: PagerState,
}

impl<P> PagerSession<P> {
    /// Builds a session starting at the first page.
    ///
    /// # Panics
    ///
    /// Panics if `pages` is empty; a pager always has at least one page.
    #[must_use]
    pub fn new(pages: Vec<P>) -> Self {
        assert!(!pages.is_empty(), "pager requires at least one page");
        Self {
            pages,
            current: 0,
            state: PagerState::Open,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Zero-based index of the visible page.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The visible page.
    #[must_use]
    pub fn current_page(&self) -> &P {
        &self.pages[self.current]
    }

    /// Moves to the previous page. Returns `true` when the index changed and
    /// the message needs a re-render.
    pub fn previous(&mut self) -> bool {
        if self.state != PagerState::Open || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Moves to the next page, clamped at the last page.
    pub fn next(&mut self) -> bool {
        if self.state != PagerState::Open || self.current + 1 >= self.pages.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Fires the inactivity timeout. Returns `true` if the session expired
    /// now. The current page stays visible; only navigation is finalized.
    pub fn expire(&mut self) -> bool {
        if self.state != PagerState::Open {
            return false;
        }
        self.state = PagerState::Expired;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> PagerSession<&'static str> {
        PagerSession::new(vec!["one", "two", "three"])
    }

    #[test]
    fn starts_at_the_first_page() {
        let pager = three_pages();
        assert_eq!(pager.current_index(), 0);
        assert_eq!(*pager.current_page(), "one");
        assert_eq!(pager.state(), PagerState::Open);
    }

    #[test]
    fn previous_at_the_lower_bound_is_absorbed() {
        let mut pager = three_pages();
        assert!(!pager.previous());
        assert_eq!(pager.current_index(), 0);
    }

    #[test]
    fn next_clamps_at_the_upper_bound() {
        let mut pager = three_pages();
        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.current_index(), 2);
        assert_eq!(*pager.current_page(), "three");
    }

    #[test]
    fn navigation_round_trip() {
        let mut pager = three_pages();
        pager.next();
        pager.next();
        assert!(pager.previous());
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn expired_pager_ignores_navigation() {
        let mut pager = three_pages();
        pager.next();
        assert!(pager.expire());
        assert!(!pager.next());
        assert!(!pager.previous());
        assert_eq!(pager.current_index(), 1);
        assert!(!pager.expire());
    }

    #[test]
    #[should_panic(expected = "at least one page")]
    fn empty_pager_is_rejected() {
        let _ = PagerSession::<&str>::new(Vec::new());
    }
}
