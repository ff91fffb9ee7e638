//! # CharacterList Component
//!
//! Scrollable column of character cards.
//!
//! `CharacterList` is a transient component (created each frame) that wraps
//! `&'a mut CharacterListState` (persistent state) and the filtered view
//! (props). Cards have a fixed height, so layout is arithmetic.
//!
//! The list itself can grow past what a `u16` row index addresses, so the
//! scroll position lives in `u32` rows on the state. Each frame only the
//! cards overlapping the viewport go into a window-sized `ScrollView`,
//! shifted by the remainder of the offset inside the first card. The
//! scrollbar is drawn separately against the full content height.
//!
//! The render pass records the viewport and content heights; the scroll
//! monitor reads them back through [`CharacterListState::metrics`].

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Character;
use crate::core::scroll::ScrollMetrics;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::character_card::{CARD_HEIGHT, CharacterCard};
use crate::tui::event::TuiEvent;

/// Scroll state for the list. Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct CharacterListState {
    /// First visible content row
    pub offset: u32,
    /// Last rendered viewport height
    pub viewport_height: u16,
    /// Last rendered content height
    pub content_height: u32,
}

impl CharacterListState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Jump back to the first card (used when the filter changes).
    pub fn reset_scroll(&mut self) {
        self.offset = 0;
    }

    fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.offset).saturating_add(delta);
        self.offset = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        self.clamp_scroll();
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset.min(self.max_offset()),
            viewport_height: self.viewport_height,
            content_height: self.content_height,
        }
    }
}

/// Content height for `count` cards.
pub fn content_height(count: usize) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(CARD_HEIGHT))
}

/// Indices of cards overlapping rows `offset..offset + viewport_height`.
fn visible_range(offset: u32, viewport_height: u16, count: usize) -> Range<usize> {
    let card = u32::from(CARD_HEIGHT);
    let start = (offset / card) as usize;
    let end = offset
        .saturating_add(u32::from(viewport_height))
        .div_ceil(card) as usize;
    start.min(count)..end.min(count)
}

pub struct CharacterList<'a> {
    pub state: &'a mut CharacterListState,
    pub characters: &'a [&'a Character],
    /// Shown instead of the list when `characters` is empty
    pub empty_message: &'a str,
}

impl<'a> CharacterList<'a> {
    pub fn new(
        state: &'a mut CharacterListState,
        characters: &'a [&'a Character],
        empty_message: &'a str,
    ) -> Self {
        Self {
            state,
            characters,
            empty_message,
        }
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        let max_scroll = self.state.max_offset();
        if max_scroll == 0 {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total rows
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.state.offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            width: 1,
            ..area
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl<'a> Component for CharacterList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;
        self.state.content_height = content_height(self.characters.len());

        if self.characters.is_empty() {
            self.state.reset_scroll();
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp_scroll();

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let offset = self.state.offset;
        let visible = visible_range(offset, area.height, self.characters.len());

        // Window covering only the visible cards; at most viewport + two cards tall
        let window_top = visible.start as u32 * u32::from(CARD_HEIGHT);
        let window_height = (visible.len() as u16).saturating_mul(CARD_HEIGHT);
        let mut scroll_view = ScrollView::new(Size::new(content_width, window_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (row, i) in visible.enumerate() {
            let card_rect = Rect::new(0, row as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            scroll_view.render_widget(CharacterCard::new(self.characters[i]), card_rect);
        }

        let mut window_state = ScrollViewState::new();
        window_state.set_offset(Position {
            x: 0,
            y: (offset - window_top) as u16,
        });
        let list_area = Rect {
            width: content_width,
            ..area
        };
        frame.render_stateful_widget(scroll_view, list_area, &mut window_state);

        self.render_scrollbar(frame, area);
    }
}

/// Implemented on the state: the list itself is rebuilt every frame.
impl EventHandler for CharacterListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = i64::from(self.viewport_height.max(1));
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            TuiEvent::ScrollToTop => self.reset_scroll(),
            TuiEvent::ScrollToBottom => self.offset = self.max_offset(),
            _ => return None,
        }
        None
    }
}
