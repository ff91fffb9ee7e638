use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::api::Character;
use crate::core::filter::StatusFilter;
use crate::core::state::Explorer;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::character_card::status_style;
use crate::tui::components::{CharacterList, StatusPicker, TitleBar};

const HELP_TEXT: &str = " f Filter  x Clear  ↑↓ Scroll  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &Explorer, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, filter_area, list_area, footer_area] = layout.areas(frame.area());

    let visible: Vec<&Character> = app.visible();

    TitleBar::new(
        visible.len(),
        app.characters.len(),
        app.cursor(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    draw_filter_bar(frame, filter_area, app);

    CharacterList::new(&mut tui.character_list, &visible, empty_message(app))
        .render(frame, list_area);

    draw_footer(frame, footer_area, app);

    if let Some(ref mut picker) = tui.status_picker {
        StatusPicker::new(picker).render(frame, frame.area());
    }
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &Explorer) {
    let selection_style = match &app.filter {
        StatusFilter::All => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        StatusFilter::Status(status) => status_style(status),
    };
    let line = Line::from(vec![
        Span::raw("Filter By Status: "),
        Span::raw("[ "),
        Span::styled(app.filter.label().to_string(), selection_style),
        Span::raw(" ▾ ]"),
    ]);
    frame.render_widget(line, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &Explorer) {
    let [status_area, help_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(HELP_TEXT.width() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Line::from(Span::styled(
            footer_text(app),
            Style::default().fg(Color::Yellow),
        )),
        status_area,
    );
    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

/// Loading indicator line.
pub fn footer_text(app: &Explorer) -> &'static str {
    if app.is_loading() {
        "Loading more characters..."
    } else if app.exhausted {
        "No more characters."
    } else {
        ""
    }
}

fn empty_message(app: &Explorer) -> &'static str {
    if !app.characters.is_empty() {
        "No characters match this status."
    } else if app.is_loading() {
        "Loading characters..."
    } else {
        "No characters loaded."
    }
}
