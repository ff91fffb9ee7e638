//! # TitleBar Component
//!
//! Top status bar: application name, counts, the page cursor and the
//! latest status message.
//!
//! Stateless and props-based: it renders whatever it is handed. The
//! counts come from the core `Explorer`, which keeps this component
//! ignorant of filtering and paging.
//!
//! Layout, most important first so narrow terminals keep the essentials:
//!
//! ```text
//! Character Explorer | 12/40 shown | page 2 | Loaded page 2
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub shown: usize,
    pub loaded: usize,
    pub page: Option<u32>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(shown: usize, loaded: usize, page: Option<u32>, status_message: String) -> Self {
        Self {
            shown,
            loaded,
            page,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Character Explorer | {}/{} shown", self.shown, self.loaded);
        if let Some(page) = self.page {
            text.push_str(&format!(" | page {page}"));
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
