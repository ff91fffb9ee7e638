//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! - Draws only when something changed (input, a finished fetch, a resize).
//! - Poll timeout is the idle interval, shortened while a fetch is in flight
//!   so its result is drawn promptly, and to the debounce deadline while a
//!   scroll burst is pending so the near-bottom check runs on time.
//! - The near-bottom check runs right after a draw, so it always sees the
//!   geometry of the frame on screen.
//! - Fetches run on tokio tasks and report back as `Action`s over an mpsc
//!   channel; state is only ever touched on this thread.
//!
//! ## Resource Scoping
//!
//! Mouse capture (the scroll "listener") is held by [`ScrollCaptureGuard`]
//! and released on drop. The in-flight fetch is owned by [`Fetcher`] and
//! aborted when the loop exits.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::task::{AbortHandle, JoinHandle};

use crate::api::{CharacterSource, RickAndMortyClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::scroll::ScrollMonitor;
use crate::core::state::Explorer;
use crate::tui::component::EventHandler;
use crate::tui::components::{CharacterListState, StatusPickerEvent, StatusPickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(500);
/// Poll interval while a fetch is in flight.
const BUSY_POLL: Duration = Duration::from_millis(80);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub character_list: CharacterListState,
    /// Filter dropdown overlay (None = hidden)
    pub status_picker: Option<StatusPickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            character_list: CharacterListState::new(),
            status_picker: None,
        }
    }
}

/// Holds mouse capture for as long as it lives.
struct ScrollCaptureGuard;

impl ScrollCaptureGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Mouse capture enabled");
        Ok(Self)
    }
}

impl Drop for ScrollCaptureGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), DisableMouseCapture) {
            warn!("Failed to disable mouse capture: {}", e);
        }
    }
}

/// Runs `update()` and carries out the resulting effect.
pub struct Fetcher {
    source: Arc<dyn CharacterSource>,
    tx: mpsc::Sender<Action>,
    in_flight: Option<AbortHandle>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn CharacterSource>, tx: mpsc::Sender<Action>) -> Self {
        Self {
            source,
            tx,
            in_flight: None,
        }
    }

    /// Returns `true` when the app should quit.
    pub fn apply(&mut self, app: &mut Explorer, action: Action) -> bool {
        match update(app, action) {
            Effect::None => false,
            Effect::Quit => true,
            Effect::FetchPage(page) => {
                let handle = spawn_fetch(self.source.clone(), page, self.tx.clone());
                self.in_flight = Some(handle.abort_handle());
                false
            }
        }
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                info!("Aborting in-flight fetch");
            }
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = RickAndMortyClient::new(config.base_url.clone(), config.timeout)
        .map_err(std::io::Error::other)?;
    info!(
        "Using {} at {} (policy {:?})",
        client.name(),
        client.base_url(),
        config.policy
    );
    let source: Arc<dyn CharacterSource> = Arc::new(client);

    let mut terminal = ratatui::init();
    let result = ScrollCaptureGuard::new()
        .and_then(|_capture| event_loop(&mut terminal, &config, source));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    source: Arc<dyn CharacterSource>,
) -> std::io::Result<()> {
    let mut app = Explorer::new(config.policy);
    let mut tui = TuiState::new();
    let mut monitor = ScrollMonitor::new(config.debounce, config.threshold_rows);

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();
    let mut fetcher = Fetcher::new(source, tx);

    fetcher.apply(&mut app, Action::Mount);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Debounced near-bottom check against the geometry just drawn
        if monitor.poll(Instant::now(), tui.character_list.metrics()) {
            debug!("Near bottom at {:?}", tui.character_list.metrics());
            fetcher.apply(&mut app, Action::NearBottom);
            needs_redraw = true;
            continue;
        }

        let timeout = poll_timeout(&monitor, app.is_loading(), Instant::now());
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Quit works even with the picker open
            if matches!(event, TuiEvent::Quit) {
                should_quit |= fetcher.apply(&mut app, Action::Quit);
                continue;
            }

            // While the picker is open it gets every event
            if let Some(ref mut picker) = tui.status_picker {
                match picker.handle_event(&event) {
                    Some(StatusPickerEvent::Select(status)) => {
                        fetcher.apply(&mut app, Action::SelectStatus(status));
                        tui.character_list.reset_scroll();
                        tui.status_picker = None;
                    }
                    Some(StatusPickerEvent::Dismiss) => tui.status_picker = None,
                    None => {}
                }
                continue;
            }

            let event = match event {
                TuiEvent::CursorUp => TuiEvent::ScrollUp,
                TuiEvent::CursorDown => TuiEvent::ScrollDown,
                other => other,
            };

            match event {
                TuiEvent::OpenFilter => {
                    tui.status_picker = Some(StatusPickerState::new(
                        app.statuses.as_slice().to_vec(),
                        &app.filter,
                    ));
                }
                TuiEvent::ClearFilter => {
                    fetcher.apply(&mut app, Action::ClearFilter);
                    tui.character_list.reset_scroll();
                }
                ref scroll if scroll.is_scroll() => {
                    tui.character_list.handle_event(scroll);
                    monitor.on_scroll(Instant::now());
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", summarize(&action));
            fetcher.apply(&mut app, action);
        }
    }

    monitor.cancel();
    info!(
        "Exiting with {} characters loaded (last page {:?})",
        app.characters.len(),
        app.loaded_page
    );
    Ok(())
}

/// How long to wait for input before the loop must run again.
fn poll_timeout(monitor: &ScrollMonitor, loading: bool, now: Instant) -> Duration {
    let base = if loading { BUSY_POLL } else { IDLE_POLL };
    monitor
        .time_until_due(now)
        .map_or(base, |due| due.min(base))
}

/// Short description of an action for logs (pages can be large).
fn summarize(action: &Action) -> String {
    match action {
        Action::PageLoaded { page, payload } => {
            format!("PageLoaded(page={}, results={})", page, payload.results.len())
        }
        other => format!("{other:?}"),
    }
}

/// Fetches one page on a tokio task and reports the outcome as an `Action`.
pub fn spawn_fetch(
    source: Arc<dyn CharacterSource>,
    page: u32,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!("Spawning fetch for page {} from {}", page, source.name());
    tokio::spawn(async move {
        let action = match source.fetch_page(page).await {
            Ok(payload) => Action::PageLoaded { page, payload },
            Err(error) => {
                info!("Fetch for page {} failed: {}", page, error);
                Action::PageFailed { page, error }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send result for page {}: receiver dropped", page);
        }
    })
}
