use anyhow::Result;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::api::{record_candidate, MetadataClient, TrendStoreClient};

pub mod constants;

mod application;
mod domain;
pub mod ui;

#[cfg(test)]
mod controller_test;

use self::application::{fetch_service::FetchService, trending_service::TrendingService};
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use self::domain::models::{FetchResponse, Mode, TrendingUpdate, WorkerRequest};
use self::ui::{app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer};

/// The interactive search screen: a debounced fetch-and-render cycle over the
/// movie metadata API, with a trending side panel fed by the counter store.
///
/// All state lives in [`AppState`] and is mutated only from this event loop.
/// Network I/O happens on a worker thread; requests and responses cross over
/// mpsc channels, tagged with a generation id so a late response for an old
/// query can never overwrite a newer one.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    fetch_service: Option<FetchService>,
    trending_service: Option<TrendingService>,
    request_sender: Option<Sender<WorkerRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    trending_receiver: Option<Receiver<TrendingUpdate>>,
    last_input_timer: Option<std::time::Instant>,
    scheduled_fetch_delay: Option<u64>,
    last_ctrl_c_press: Option<std::time::Instant>,
}

impl InteractiveSearch {
    pub fn new(metadata: MetadataClient, trend_store: Option<TrendStoreClient>) -> Self {
        let fetch_service = FetchService::new(Arc::new(metadata));
        let trending_service = TrendingService::new(trend_store.map(Arc::new));

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            fetch_service: Some(fetch_service),
            trending_service: Some(trending_service),
            request_sender: None,
            fetch_receiver: None,
            trending_receiver: None,
            last_input_timer: None,
            scheduled_fetch_delay: None,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, fetch_rx, trending_rx) = self.start_worker()?;
        self.request_sender = Some(tx);
        self.fetch_receiver = Some(fetch_rx);
        self.trending_receiver = Some(trending_rx);

        // Initial cycle: empty query shows the discover listing, and the
        // trending panel gets its first load.
        self.execute_command(Command::ExecuteFetch);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Check for fetch responses; stale ids are discarded inside
            // apply_fetch_response.
            if let Some(receiver) = &self.fetch_receiver {
                if let Ok(response) = receiver.try_recv() {
                    let command = self.state.apply_fetch_response(response);
                    self.execute_command(command);
                }
            }

            // Trending updates only arrive on success, so the previous list
            // survives any refresh failure.
            if let Some(receiver) = &self.trending_receiver {
                if let Ok(update) = receiver.try_recv() {
                    self.handle_message(Message::TrendingRefreshed(update.entries));
                }
            }

            // Debounce: fire the fetch once the quiet period has elapsed
            // since the last keystroke.
            if let Some(delay) = self.scheduled_fetch_delay {
                if let Some(timer) = self.last_input_timer {
                    if timer.elapsed() >= Duration::from_millis(delay) {
                        self.scheduled_fetch_delay = None;
                        self.last_input_timer = None;
                        self.execute_command(Command::ExecuteFetch);
                    }
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let should_quit = self.handle_input(key)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(std::time::Instant::now());
            self.execute_command(Command::ShowMessage(
                "Press Ctrl+C again to exit".to_string(),
            ));
            return Ok(false);
        }

        // Global keys
        if key.code == KeyCode::Char('?') && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return Ok(false);
        }

        let message = match self.state.mode {
            Mode::Search => {
                if key.code == KeyCode::Esc {
                    return Ok(true);
                }
                self.handle_search_mode_input(key)
            }
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => self.renderer.get_result_list_mut().handle_key(key),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteFetch => {
                self.execute_fetch();
            }
            Command::ScheduleFetch(delay) => {
                // Every keystroke resets the pending timer, so the fetch
                // fires exactly once per quiet period.
                self.last_input_timer = Some(std::time::Instant::now());
                self.scheduled_fetch_delay = Some(delay);
            }
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
            }
        }
    }

    fn execute_fetch(&mut self) {
        let request = self.state.begin_fetch();

        if let Some(sender) = &self.request_sender {
            let _ = sender.send(WorkerRequest::Fetch(request));
            // The trending list refreshes on every debounced-query change,
            // independent of how the main fetch turns out.
            let _ = sender.send(WorkerRequest::RefreshTrending);
        }
    }

    /// Spawn the worker thread that owns the HTTP clients and an async
    /// runtime. Requests are processed in order; each fetch always yields a
    /// response, and the counter increment runs after the response has been
    /// handed back so it can never delay or disturb the render state.
    fn start_worker(
        &mut self,
    ) -> Result<(
        Sender<WorkerRequest>,
        Receiver<FetchResponse>,
        Receiver<TrendingUpdate>,
    )> {
        let (request_tx, request_rx) = mpsc::channel::<WorkerRequest>();
        let (fetch_tx, fetch_rx) = mpsc::channel::<FetchResponse>();
        let (trending_tx, trending_rx) = mpsc::channel::<TrendingUpdate>();

        let fetch_service = self
            .fetch_service
            .take()
            .ok_or_else(|| anyhow::anyhow!("worker already started"))?;
        let trending_service = self
            .trending_service
            .take()
            .ok_or_else(|| anyhow::anyhow!("worker already started"))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                match request {
                    WorkerRequest::Fetch(req) => {
                        let response = runtime.block_on(fetch_service.fetch(req));

                        let record = match &response.outcome {
                            Ok(results) => record_candidate(&response.query, results)
                                .map(|top| (response.query.clone(), top.clone())),
                            Err(_) => None,
                        };

                        if fetch_tx.send(response).is_err() {
                            break;
                        }
                        if let Some((query, top)) = record {
                            runtime.block_on(trending_service.record(&query, &top));
                        }
                    }
                    WorkerRequest::RefreshTrending => {
                        if let Some(entries) = runtime.block_on(trending_service.refresh()) {
                            if trending_tx.send(TrendingUpdate { entries }).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Ok((request_tx, fetch_rx, trending_rx))
    }
}
