pub mod help_dialog;
pub mod result_list;
pub mod search_bar;
pub mod trending_panel;

#[cfg(test)]
mod result_list_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
