//! # Status Filter
//!
//! The filtered view is derived, never stored: every render calls
//! [`filter_characters`] with the accumulated list and the current
//! selection. The status options shown in the picker are tracked in
//! [`StatusOptions`], which only ever grows.

use std::fmt;

use crate::api::Character;

/// Label of the disabled placeholder entry, also shown when nothing is selected.
pub const PLACEHOLDER: &str = "Select Status";

/// Current filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No filter selected; the whole list is shown.
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub fn matches(&self, character: &Character) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => character.status == *status,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatusFilter::All => PLACEHOLDER,
            StatusFilter::Status(status) => status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Characters whose status equals the selection, in accumulation order.
pub fn filter_characters<'a>(
    characters: &'a [Character],
    filter: &StatusFilter,
) -> Vec<&'a Character> {
    characters.iter().filter(|c| filter.matches(c)).collect()
}

/// Distinct statuses in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    values: Vec<String>,
}

impl StatusOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every status not seen before. Returns how many were new.
    pub fn merge<'a>(&mut self, statuses: impl IntoIterator<Item = &'a str>) -> usize {
        let before = self.values.len();
        for status in statuses {
            if !self.contains(status) {
                self.values.push(status.to_string());
            }
        }
        self.values.len() - before
    }

    pub fn contains(&self, status: &str) -> bool {
        self.values.iter().any(|v| v == status)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}
