use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::api::Character;

/// Rows taken by one card: top border, name, status, image, bottom border.
pub const CARD_HEIGHT: u16 = 5;

/// A stateless card for one character. Created per frame for visible rows only.
#[derive(Clone, Copy)]
pub struct CharacterCard<'a> {
    pub character: &'a Character,
}

impl<'a> CharacterCard<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }
}

/// Colour for a status value. Unknown values fall back to gray.
pub fn status_style(status: &str) -> Style {
    match status {
        "Alive" => Style::default().fg(Color::Green),
        "Dead" => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Gray),
    }
}

impl<'a> Widget for CharacterCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.character;
        let label = Style::default().fg(Color::DarkGray);

        let title = if c.species.is_empty() {
            format!(" #{} ", c.id)
        } else {
            format!(" #{} · {} ", c.id, c.species)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Name: ", label),
                Span::styled(c.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("Status: ", label),
                Span::styled(c.status.as_str(), status_style(&c.status)),
            ]),
            Line::from(vec![
                Span::styled("Image: ", label),
                Span::styled(c.image.as_str(), Style::default().fg(Color::Blue)),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().add_modifier(Modifier::DIM))
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}
