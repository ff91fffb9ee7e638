//! # Actions
//!
//! Everything that can happen in the explorer becomes an `Action`.
//! The list scrolled near its end? That's `Action::NearBottom`.
//! A page arrived? That's `Action::PageLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the single
//! `Effect` the adapter should carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{CharacterPage, FetchError};
use crate::core::filter::StatusFilter;
use crate::core::paging::FetchPhase;
use crate::core::state::Explorer;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The UI came up; load the start page.
    Mount,
    /// The debounced scroll check found the viewport near the end.
    NearBottom,
    PageLoaded { page: u32, payload: CharacterPage },
    PageFailed { page: u32, error: FetchError },
    SelectStatus(String),
    ClearFilter,
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchPage(u32),
    Quit,
}

pub fn update(app: &mut Explorer, action: Action) -> Effect {
    match action {
        Action::Mount | Action::NearBottom => request_next_page(app),
        Action::PageLoaded { page, payload } => {
            if app.phase != FetchPhase::Fetching(page) {
                warn!("Ignoring page {} (phase is {:?})", page, app.phase);
                return Effect::None;
            }
            let added = payload.results.len();
            let is_last = payload.is_last();
            let new_statuses = app
                .statuses
                .merge(payload.results.iter().map(|c| c.status.as_str()));
            app.characters.extend(payload.results);
            app.loaded_page = Some(page);
            app.phase = FetchPhase::Idle;
            if is_last {
                info!("Page {} is the last one, stopping", page);
                app.exhausted = true;
            }
            debug!(
                "Page {} applied: +{} characters ({} total), +{} statuses",
                page,
                added,
                app.characters.len(),
                new_statuses
            );
            app.status_message = format!("Loaded page {page}");
            Effect::None
        }
        Action::PageFailed { page, error } => {
            if app.phase != FetchPhase::Fetching(page) {
                warn!("Ignoring failure for page {} (phase is {:?})", page, app.phase);
                return Effect::None;
            }
            app.phase = FetchPhase::Idle;
            app.status_message.clear();
            if error.is_exhausted() {
                info!("Page {} does not exist, stopping", page);
                app.exhausted = true;
            } else {
                warn!("Error fetching page {}: {}", page, error);
            }
            Effect::None
        }
        Action::SelectStatus(status) => {
            if app.statuses.contains(&status) {
                debug!("Filter set to {:?}", status);
                app.filter = StatusFilter::Status(status);
            } else {
                warn!("Ignoring unknown status {:?}", status);
            }
            Effect::None
        }
        Action::ClearFilter => {
            app.filter = StatusFilter::All;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Advances the cursor by one page if nothing blocks it.
fn request_next_page(app: &mut Explorer) -> Effect {
    if app.is_loading() {
        debug!("Fetch already in flight, not advancing");
        return Effect::None;
    }
    if app.exhausted {
        debug!("Source exhausted, not advancing");
        return Effect::None;
    }
    let next = app.policy.next_page(app.loaded_page);
    if !app.policy.allows(next) {
        debug!("Page {} is past the configured bound", next);
        app.status_message = format!("Stopped at page limit ({})", app.loaded_page.unwrap_or(0));
        return Effect::None;
    }
    app.phase = FetchPhase::Fetching(next);
    app.status_message = format!("Loading page {next}...");
    Effect::FetchPage(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paging::PagePolicy;
    use crate::test_support::{character, last_page_of, page_of};

    fn explorer() -> Explorer {
        Explorer::new(PagePolicy::default())
    }

    /// Drives one full fetch cycle with the given payload.
    fn load(app: &mut Explorer, payload: CharacterPage) -> u32 {
        let Effect::FetchPage(page) = update(app, Action::NearBottom) else {
            panic!("expected a fetch");
        };
        update(app, Action::PageLoaded { page, payload });
        page
    }

    #[test]
    fn test_mount_requests_start_page() {
        let mut app = Explorer::new(PagePolicy {
            start_page: 20,
            max_page: None,
        });
        assert_eq!(update(&mut app, Action::Mount), Effect::FetchPage(20));
        assert!(app.is_loading());
        assert_eq!(app.cursor(), Some(20));
    }

    #[test]
    fn test_loading_gates_further_fetches() {
        let mut app = explorer();
        assert_eq!(update(&mut app, Action::Mount), Effect::FetchPage(1));
        assert_eq!(update(&mut app, Action::NearBottom), Effect::None);
        assert_eq!(update(&mut app, Action::NearBottom), Effect::None);
        assert_eq!(app.cursor(), Some(1));
    }

    #[test]
    fn test_page_loaded_appends_and_merges_statuses() {
        let mut app = explorer();
        load(&mut app, page_of(&[(1, "Alive"), (2, "Dead")]));

        assert!(!app.is_loading());
        assert_eq!(app.characters.len(), 2);
        assert_eq!(app.statuses.as_slice(), ["Alive", "Dead"]);
        assert_eq!(app.loaded_page, Some(1));
    }

    #[test]
    fn test_accumulated_list_never_shrinks_and_keeps_duplicates() {
        let mut app = explorer();
        let mut previous = 0;
        for payload in [
            page_of(&[(1, "Alive"), (2, "Dead")]),
            page_of(&[(2, "Dead"), (3, "unknown")]),
            page_of(&[(4, "Alive")]),
        ] {
            load(&mut app, payload);
            assert!(app.characters.len() >= previous);
            previous = app.characters.len();
        }
        assert_eq!(app.characters.len(), 5);
        assert_eq!(app.statuses.as_slice(), ["Alive", "Dead", "unknown"]);
        assert_eq!(app.loaded_page, Some(3));
    }

    #[test]
    fn test_failure_leaves_state_unchanged_and_rolls_cursor_back() {
        let mut app = explorer();
        load(&mut app, page_of(&[(1, "Alive")]));
        let before = app.characters.clone();

        assert_eq!(update(&mut app, Action::NearBottom), Effect::FetchPage(2));
        update(
            &mut app,
            Action::PageFailed {
                page: 2,
                error: FetchError::Network("connection refused".into()),
            },
        );

        assert!(!app.is_loading());
        assert!(!app.exhausted);
        assert_eq!(app.characters, before);
        assert_eq!(app.cursor(), Some(1));
        // Next trigger asks for the same page again
        assert_eq!(update(&mut app, Action::NearBottom), Effect::FetchPage(2));
    }

    #[test]
    fn test_not_found_marks_exhausted() {
        let mut app = explorer();
        update(&mut app, Action::Mount);
        update(
            &mut app,
            Action::PageFailed {
                page: 1,
                error: FetchError::Api {
                    status: 404,
                    message: "There is nothing here".into(),
                },
            },
        );
        assert!(app.exhausted);
        assert_eq!(update(&mut app, Action::NearBottom), Effect::None);
    }

    #[test]
    fn test_last_page_stops_polling() {
        let mut app = explorer();
        load(&mut app, last_page_of(&[(826, "Alive")]));
        assert!(app.exhausted);
        assert_eq!(update(&mut app, Action::NearBottom), Effect::None);
        assert_eq!(app.characters.len(), 1);
    }

    #[test]
    fn test_empty_page_stops_polling() {
        let mut app = explorer();
        load(&mut app, CharacterPage::default());
        assert!(app.exhausted);
        assert!(app.characters.is_empty());
    }

    #[test]
    fn test_bounded_cursor_never_exceeds_max() {
        let mut app = Explorer::new(PagePolicy::bounded(1, 3));
        for _ in 0..10 {
            if let Effect::FetchPage(page) = update(&mut app, Action::NearBottom) {
                update(
                    &mut app,
                    Action::PageLoaded {
                        page,
                        payload: page_of(&[(page, "Alive")]),
                    },
                );
            }
            assert!(app.cursor().is_some_and(|c| c <= 3));
        }
        assert_eq!(app.loaded_page, Some(3));
        assert_eq!(app.characters.len(), 3);
    }

    #[test]
    fn test_stale_page_is_ignored() {
        let mut app = explorer();
        update(&mut app, Action::Mount);
        update(
            &mut app,
            Action::PageLoaded {
                page: 7,
                payload: page_of(&[(1, "Alive")]),
            },
        );
        assert!(app.characters.is_empty());
        assert!(app.is_loading());
    }

    #[test]
    fn test_select_dead_filters_view() {
        let mut app = explorer();
        load(&mut app, page_of(&[(1, "Alive"), (2, "Dead")]));

        update(&mut app, Action::SelectStatus("Dead".into()));
        assert_eq!(app.visible(), vec![&character(2, "Dead")]);

        update(&mut app, Action::ClearFilter);
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn test_unknown_status_selection_is_ignored() {
        let mut app = explorer();
        load(&mut app, page_of(&[(1, "Alive")]));
        update(&mut app, Action::SelectStatus("Dead".into()));
        assert_eq!(app.filter, StatusFilter::All);
    }

    #[test]
    fn test_filter_survives_new_pages() {
        let mut app = explorer();
        load(&mut app, page_of(&[(1, "Alive"), (2, "Dead")]));
        update(&mut app, Action::SelectStatus("Alive".into()));
        load(&mut app, page_of(&[(3, "Alive"), (4, "Dead")]));

        let ids: Vec<u32> = app.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_quit() {
        let mut app = explorer();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
