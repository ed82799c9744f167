#[cfg(test)]
mod tests {
    use crate::api::{MetadataClient, MetadataConfig};
    use crate::interactive::ui::commands::Command;
    use crate::interactive::InteractiveSearch;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn build_search() -> InteractiveSearch {
        let client = MetadataClient::new(MetadataConfig::new("test-token".to_string()));
        InteractiveSearch::new(client, None)
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    #[test]
    fn first_ctrl_c_shows_status_instead_of_quitting() {
        let mut search = build_search();

        let quit = search.handle_input(ctrl_c()).unwrap();

        assert!(!quit);
        assert_eq!(
            search.state.ui.message.as_deref(),
            Some("Press Ctrl+C again to exit")
        );
    }

    #[test]
    fn second_ctrl_c_quits() {
        let mut search = build_search();

        assert!(!search.handle_input(ctrl_c()).unwrap());
        assert!(search.handle_input(ctrl_c()).unwrap());
    }

    #[test]
    fn show_message_command_sets_status_line() {
        let mut search = build_search();

        search.execute_command(Command::ShowMessage("hello".to_string()));

        assert_eq!(search.state.ui.message.as_deref(), Some("hello"));
    }
}
