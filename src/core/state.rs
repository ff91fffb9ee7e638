//! # Application State
//!
//! Core explorer state. Domain data only; scroll offsets, picker
//! selection and other presentation state live in the `tui` module.
//!
//! ```text
//! Explorer
//! ├── characters: Vec<Character>   // accumulated, append-only
//! ├── statuses: StatusOptions      // distinct statuses, first-seen order
//! ├── filter: StatusFilter         // All (placeholder) or one status
//! ├── policy: PagePolicy           // start page + optional max page
//! ├── phase: FetchPhase            // Idle | Fetching(page)
//! ├── loaded_page: Option<u32>     // last page that loaded
//! ├── exhausted: bool              // source has nothing left
//! └── status_message: String       // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::Character;
use crate::core::filter::{StatusFilter, StatusOptions, filter_characters};
use crate::core::paging::{FetchPhase, PagePolicy};

pub struct Explorer {
    pub characters: Vec<Character>,
    pub statuses: StatusOptions,
    pub filter: StatusFilter,
    pub policy: PagePolicy,
    pub phase: FetchPhase,
    pub loaded_page: Option<u32>,
    pub exhausted: bool,
    pub status_message: String,
}

impl Explorer {
    pub fn new(policy: PagePolicy) -> Self {
        Self {
            characters: Vec::new(),
            statuses: StatusOptions::new(),
            filter: StatusFilter::All,
            policy,
            phase: FetchPhase::Idle,
            loaded_page: None,
            exhausted: false,
            status_message: String::from("Welcome to Character Explorer!"),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Fetching(_))
    }

    /// The page cursor: the in-flight page, else the last loaded one.
    pub fn cursor(&self) -> Option<u32> {
        match self.phase {
            FetchPhase::Fetching(page) => Some(page),
            FetchPhase::Idle => self.loaded_page,
        }
    }

    /// Characters matching the current filter.
    pub fn visible(&self) -> Vec<&Character> {
        filter_characters(&self.characters, &self.filter)
    }
}
