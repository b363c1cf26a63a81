use routedeck_client::ListQuery;

/// Paging direction for a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Prev,
    Next,
}

/// What the list view is currently looking at: page index, page size, and
/// the active name filter. The single source of truth for what to request
/// next.
///
/// All mutation goes through the named transitions below so the reset rules
/// are enforced in one place; background polling never touches this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: usize,
    size: usize,
    filter: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            filter: String::new(),
        }
    }
}

impl ViewState {
    pub fn new(page: usize, size: usize, filter: impl Into<String>) -> Self {
        Self {
            page,
            size,
            filter: filter.into(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the name filter and reset to the first page.
    pub fn search(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.page = 0;
    }

    /// Drop the name filter and reset to the first page.
    pub fn clear_search(&mut self) {
        self.filter.clear();
        self.page = 0;
    }

    /// Change the page size and reset to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.size = size;
        self.page = 0;
    }

    /// Move one page in the given direction.
    ///
    /// Prev refuses at page 0; Next always advances (there is no client-side
    /// upper bound, an empty result page signals the end). Returns whether
    /// the page index actually changed, so callers can skip the re-sync on a
    /// refused move.
    pub fn paginate(&mut self, direction: PageMove) -> bool {
        match direction {
            PageMove::Prev => {
                if self.page == 0 {
                    false
                } else {
                    self.page -= 1;
                    true
                }
            }
            PageMove::Next => {
                self.page += 1;
                true
            }
        }
    }

    pub fn to_query(&self) -> ListQuery {
        ListQuery::new(self.page, self.size, self.filter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ViewState::default();
        assert_eq!(state.page(), 0);
        assert_eq!(state.size(), 10);
        assert_eq!(state.filter(), "");
    }

    #[test]
    fn search_resets_page() {
        let mut state = ViewState::default();
        state.paginate(PageMove::Next);
        state.paginate(PageMove::Next);
        state.search("north");
        assert_eq!(state.page(), 0);
        assert_eq!(state.filter(), "north");
    }

    #[test]
    fn clear_after_search_and_paging_resets_everything() {
        let mut state = ViewState::default();
        state.search("x");
        state.paginate(PageMove::Next);
        state.clear_search();
        assert_eq!(state.filter(), "");
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = ViewState::default();
        state.paginate(PageMove::Next);
        state.set_page_size(50);
        assert_eq!(state.size(), 50);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn prev_at_zero_is_refused() {
        let mut state = ViewState::default();
        assert!(!state.paginate(PageMove::Prev));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn next_is_unbounded() {
        let mut state = ViewState::default();
        for expected in 1..=100 {
            assert!(state.paginate(PageMove::Next));
            assert_eq!(state.page(), expected);
        }
    }

    #[test]
    fn prev_after_next_moves_back() {
        let mut state = ViewState::default();
        state.paginate(PageMove::Next);
        assert!(state.paginate(PageMove::Prev));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn query_mirrors_state() {
        let state = ViewState::new(3, 25, "ab");
        let query = state.to_query();
        assert_eq!(query.page, 3);
        assert_eq!(query.size, 25);
        assert_eq!(query.name, "ab");
    }
}
