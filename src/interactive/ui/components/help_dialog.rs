use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Movie Scout - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("  Type        - Search as you type (fires after a quiet pause)"),
            Line::from("  ↑/↓         - Navigate results"),
            Line::from("  PgUp/PgDn   - Jump by page"),
            Line::from("  Home/End    - First / last result"),
            Line::from("  Ctrl+U      - Clear query before cursor"),
            Line::from("  Ctrl+W      - Delete word before cursor"),
            Line::from("  ?           - Show this help"),
            Line::from("  Esc         - Quit (or close this help)"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("An empty query shows the most popular movies; the"),
            Line::from("Trending panel lists the most frequent searches."),
        ]
    }

    fn centered_rect(area: Rect) -> Rect {
        let width = 62.min(area.width.saturating_sub(4));
        let height = (Self::get_help_text().len() as u16 + 2).min(area.height.saturating_sub(2));
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = Self::centered_rect(area);
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(Self::get_help_text())
            .alignment(Alignment::Left)
            .block(Block::default().title("Help").borders(Borders::ALL));
        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Message::CloseHelp)
            }
            _ => None,
        }
    }
}
