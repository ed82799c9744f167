use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::domain::models::RequestState;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::MovieSummary;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ResultList {
    results: Vec<MovieSummary>,
    selected_index: usize,
    scroll_offset: usize,
    request_state: Option<RequestState>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_results(&mut self, results: Vec<MovieSummary>) {
        if results.len() != self.results.len() {
            self.scroll_offset = 0;
        }
        self.results = results;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn set_request_state(&mut self, request_state: RequestState) {
        self.request_state = Some(request_state);
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results.get(self.selected_index)
    }

    fn format_line(movie: &MovieSummary) -> Line<'_> {
        let mut spans = vec![Span::styled(
            movie.title.clone(),
            Style::default().fg(Color::White),
        )];
        if let Some(year) = movie.release_year() {
            spans.push(Span::styled(
                format!(" ({year})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(rating) = movie.rating {
            spans.push(Span::styled(
                format!("  {rating:.1}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(language) = &movie.language {
            spans.push(Span::styled(
                format!("  {language}"),
                Style::default().fg(Color::Cyan),
            ));
        }
        Line::from(spans)
    }

    fn empty_text(&self) -> &'static str {
        match &self.request_state {
            Some(RequestState::Loading) => "Loading...",
            Some(RequestState::Error(_)) => "",
            _ => "No movies found",
        }
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = format!("Movies ({})", self.results.len());
        let block = Block::default().title(title).borders(Borders::ALL);

        // Error state renders its message instead of a list.
        if let Some(RequestState::Error(message)) = &self.request_state {
            let error = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )))
            .block(block);
            f.render_widget(error, area);
            return;
        }

        if self.results.is_empty() {
            let empty = Paragraph::new(self.empty_text()).block(block);
            f.render_widget(empty, area);
            return;
        }

        let visible_height = area.height.saturating_sub(2) as usize;
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if visible_height > 0 && self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index + 1 - visible_height;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_height.max(1))
            .map(|(i, movie)| {
                let line = Self::format_line(movie);
                if i == self.selected_index {
                    ListItem::new(line).style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.results.is_empty() {
            return None;
        }
        let last = self.results.len() - 1;
        match key.code {
            KeyCode::Up => Some(Message::ScrollUp),
            KeyCode::Down => Some(Message::ScrollDown),
            KeyCode::PageUp => Some(Message::SelectResult(
                self.selected_index.saturating_sub(PAGE_SIZE),
            )),
            KeyCode::PageDown => Some(Message::SelectResult(
                (self.selected_index + PAGE_SIZE).min(last),
            )),
            KeyCode::Home => Some(Message::SelectResult(0)),
            KeyCode::End => Some(Message::SelectResult(last)),
            _ => None,
        }
    }
}
