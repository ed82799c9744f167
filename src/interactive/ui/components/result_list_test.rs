#[cfg(test)]
mod tests {
    use crate::interactive::ui::components::result_list::ResultList;
    use crate::interactive::ui::components::Component;
    use crate::interactive::ui::events::Message;
    use crate::schemas::MovieSummary;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn movies(count: usize) -> Vec<MovieSummary> {
        (0..count)
            .map(|i| MovieSummary {
                id: i as u64,
                title: format!("Movie {i}"),
                poster_path: None,
                release_date: None,
                rating: None,
                language: None,
            })
            .collect()
    }

    #[test]
    fn keys_are_ignored_when_list_is_empty() {
        let mut list = ResultList::new();
        assert!(list.handle_key(key(KeyCode::Down)).is_none());
        assert!(list.handle_key(key(KeyCode::End)).is_none());
    }

    #[test]
    fn arrows_emit_scroll_messages() {
        let mut list = ResultList::new();
        list.set_results(movies(3));

        assert!(matches!(
            list.handle_key(key(KeyCode::Up)),
            Some(Message::ScrollUp)
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::Down)),
            Some(Message::ScrollDown)
        ));
    }

    #[test]
    fn page_and_edge_keys_emit_bounded_selection() {
        let mut list = ResultList::new();
        list.set_results(movies(25));
        list.set_selected_index(20);

        assert!(matches!(
            list.handle_key(key(KeyCode::PageDown)),
            Some(Message::SelectResult(24))
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::PageUp)),
            Some(Message::SelectResult(10))
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::Home)),
            Some(Message::SelectResult(0))
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::End)),
            Some(Message::SelectResult(24))
        ));
    }

    #[test]
    fn selected_movie_follows_index() {
        let mut list = ResultList::new();
        list.set_results(movies(3));
        list.set_selected_index(2);

        assert_eq!(list.selected_movie().map(|m| m.title.as_str()), Some("Movie 2"));
    }
}
