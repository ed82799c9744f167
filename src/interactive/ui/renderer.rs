use crate::interactive::constants::{SEARCH_BAR_HEIGHT, TRENDING_PANEL_WIDTH};
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    help_dialog::HelpDialog, result_list::ResultList, search_bar::SearchBar,
    trending_panel::TrendingPanel, Component,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    trending_panel: TrendingPanel,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            trending_panel: TrendingPanel::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);
        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Results + trending
            ])
            .split(f.area());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar
            .set_loading(state.search.request_state.is_loading());
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.render(f, rows[0]);

        self.result_list.set_results(state.search.results.clone());
        self.result_list
            .set_selected_index(state.search.selected_index);
        self.result_list
            .set_request_state(state.search.request_state.clone());

        if state.trending.entries.is_empty() {
            self.result_list.render(f, rows[1]);
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(TRENDING_PANEL_WIDTH),
                ])
                .split(rows[1]);

            self.result_list.render(f, columns[0]);
            self.trending_panel
                .set_entries(state.trending.entries.clone());
            self.trending_panel.render(f, columns[1]);
        }
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
