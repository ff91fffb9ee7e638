//! # Paging Policy
//!
//! When to stop asking for more pages. Two independent stops:
//!
//! - an optional `max_page` bound, and
//! - the source reporting it has nothing left (see [`crate::api::CharacterPage::is_last`]
//!   and [`crate::api::FetchError::is_exhausted`]).

/// Where paging starts and, optionally, where it must stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePolicy {
    pub start_page: u32,
    pub max_page: Option<u32>,
}

impl Default for PagePolicy {
    fn default() -> Self {
        Self {
            start_page: 1,
            max_page: None,
        }
    }
}

impl PagePolicy {
    pub fn bounded(start_page: u32, max_page: u32) -> Self {
        Self {
            start_page,
            max_page: Some(max_page),
        }
    }

    /// Page that follows `current`, or the start page if nothing was requested yet.
    pub fn next_page(&self, current: Option<u32>) -> u32 {
        current.map_or(self.start_page, |page| page.saturating_add(1))
    }

    pub fn allows(&self, page: u32) -> bool {
        page >= 1 && self.max_page.is_none_or(|max| page <= max)
    }
}

/// Where the fetcher is in its `Idle → Fetching → Idle` cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching(u32),
}
