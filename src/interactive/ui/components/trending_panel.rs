use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::TrendingEntry;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Read-only side panel listing the most-searched titles.
#[derive(Default)]
pub struct TrendingPanel {
    entries: Vec<TrendingEntry>,
}

impl TrendingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entries(&mut self, entries: Vec<TrendingEntry>) {
        self.entries = entries;
    }
}

impl Component for TrendingPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Trending").borders(Borders::ALL);

        if self.entries.is_empty() {
            let empty = Paragraph::new("No trending searches yet").block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Magenta)),
                    Span::raw(entry.title.clone()),
                    Span::styled(
                        format!("  ({})", entry.search_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
