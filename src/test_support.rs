//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{Character, CharacterPage, CharacterSource, FetchError, PageInfo};

/// Builds a character whose other fields derive from `id`.
pub fn character(id: u32, status: &str) -> Character {
    Character {
        id,
        name: format!("Character {id}"),
        status: status.to_string(),
        species: "Human".to_string(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
    }
}

fn page(entries: &[(u32, &str)], next: Option<String>) -> CharacterPage {
    CharacterPage {
        info: Some(PageInfo {
            count: entries.len() as u32,
            pages: 0,
            next,
            prev: None,
        }),
        results: entries.iter().map(|(id, status)| character(*id, status)).collect(),
    }
}

/// A page that advertises a following page.
pub fn page_of(entries: &[(u32, &str)]) -> CharacterPage {
    page(entries, Some("next".to_string()))
}

/// A page whose `info.next` is null.
pub fn last_page_of(entries: &[(u32, &str)]) -> CharacterPage {
    page(entries, None)
}

/// Canned in-memory source. Pages not registered answer 404.
#[derive(Default)]
pub struct StubSource {
    pages: HashMap<u32, Result<CharacterPage, FetchError>>,
    requested: Mutex<Vec<u32>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, number: u32, page: CharacterPage) -> Self {
        self.pages.insert(number, Ok(page));
        self
    }

    pub fn with_error(mut self, number: u32, error: FetchError) -> Self {
        self.pages.insert(number, Err(error));
        self
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError> {
        self.requested.lock().unwrap().push(page);
        self.pages.get(&page).cloned().unwrap_or_else(|| {
            Err(FetchError::Api {
                status: 404,
                message: "There is nothing here".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_answers_404_for_unknown_pages() {
        let source = StubSource::new().with_page(1, page_of(&[(1, "Alive")]));

        let first = tokio_test::block_on(source.fetch_page(1)).unwrap();
        assert_eq!(first.results.len(), 1);

        let missing = tokio_test::block_on(source.fetch_page(2)).unwrap_err();
        assert!(missing.is_exhausted());
        assert_eq!(source.requested(), vec![1, 2]);
    }
}
