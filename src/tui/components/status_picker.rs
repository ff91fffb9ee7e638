//! # Status Picker Component
//!
//! Overlay dropdown for choosing the status filter. Opened with `f`.
//!
//! The first row is the "Select Status" placeholder. It is always shown
//! and can never be chosen; the cursor starts on the current selection.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StatusPickerState` lives in `TuiState` while the overlay is open
//! - `StatusPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::filter::{PLACEHOLDER, StatusFilter};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::character_card::status_style;
use crate::tui::event::TuiEvent;

/// Persistent state for the picker overlay.
pub struct StatusPickerState {
    /// Snapshot of the observed statuses when the overlay opened.
    pub options: Vec<String>,
    /// Index into `options`; `None` while there is nothing to pick.
    pub selected: Option<usize>,
    pub list_state: ListState,
}

impl StatusPickerState {
    pub fn new(options: Vec<String>, current: &StatusFilter) -> Self {
        let selected = match current {
            StatusFilter::Status(status) => options.iter().position(|o| o == status),
            StatusFilter::All => None,
        }
        .or(if options.is_empty() { None } else { Some(0) });

        let mut list_state = ListState::default();
        // Row 0 is the placeholder
        list_state.select(selected.map(|i| i + 1));
        Self {
            options,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.list_state.select(Some(index + 1));
    }
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusPickerEvent {
    Select(String),
    Dismiss,
}

impl EventHandler for StatusPickerState {
    type Event = StatusPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<StatusPickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::OpenFilter => Some(StatusPickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                if let Some(i) = self.selected {
                    self.select(i.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                if let Some(i) = self.selected {
                    self.select((i + 1).min(self.options.len() - 1));
                }
                None
            }
            TuiEvent::Submit => self
                .selected
                .and_then(|i| self.options.get(i))
                .map(|status| StatusPickerEvent::Select(status.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker overlay.
pub struct StatusPicker<'a> {
    state: &'a mut StatusPickerState,
}

impl<'a> StatusPicker<'a> {
    pub fn new(state: &'a mut StatusPickerState) -> Self {
        Self { state }
    }
}

impl<'a> Component for StatusPicker<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Placeholder + options + borders
        let wanted = self.state.options.len() as u16 + 3;
        let overlay = centered_rect(40, wanted, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filter By Status ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let mut items = vec![ListItem::new(PLACEHOLDER).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )];
        items.extend(
            self.state
                .options
                .iter()
                .map(|status| ListItem::new(status.as_str()).style(status_style(status))),
        );

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn options() -> Vec<String> {
        vec!["Alive".to_string(), "Dead".to_string()]
    }

    #[test]
    fn test_opens_on_first_option_when_unfiltered() {
        let state = StatusPickerState::new(options(), &StatusFilter::All);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_opens_on_current_selection() {
        let state = StatusPickerState::new(options(), &StatusFilter::Status("Dead".into()));
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_navigation_never_lands_on_placeholder() {
        let mut state = StatusPickerState::new(options(), &StatusFilter::All);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Some(1));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(StatusPickerEvent::Select("Dead".into()))
        );
    }

    #[test]
    fn test_empty_picker_cannot_select() {
        let mut state = StatusPickerState::new(Vec::new(), &StatusFilter::All);
        assert_eq!(state.selected, None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(StatusPickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_dropdown_shows_placeholder_and_observed_statuses() {
        let mut state = StatusPickerState::new(options(), &StatusFilter::All);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| StatusPicker::new(&mut state).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect();
        let entries: Vec<&str> = rows
            .iter()
            .filter_map(|row| {
                let inner = row.trim().trim_matches('│').trim();
                ["Select Status", "Alive", "Dead", "unknown"]
                    .into_iter()
                    .find(|label| inner == *label)
            })
            .collect();
        assert_eq!(entries, vec!["Select Status", "Alive", "Dead"]);
    }
}
