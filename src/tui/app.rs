use crate::dataset::Dataset;
use crate::list::ListModel;
use crate::logging;
use crate::query::QueryPipeline;
use crate::tui::search::SearchState;
use crate::tui::table::TableState;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

pub struct App {
    // Data
    pub model: ListModel,
    pub pipeline: QueryPipeline,

    // Sub-states
    pub search: SearchState,
    pub table: TableState,

    pub status_message: String,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(cities: Dataset) -> Self {
        let model = ListModel::new(cities);
        let mut table = TableState::default();
        table.reset(model.row_count());

        let mut app = Self {
            model,
            pipeline: QueryPipeline::new(),
            search: SearchState::default(),
            table,
            status_message: String::new(),
            should_quit: false,
        };
        app.update_status();
        app
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if let Some(query) = self.pipeline.poll(Instant::now()) {
                    self.apply_query(&query, "settled");
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Run an accepted query through the list model and refresh the
    /// table around it.
    fn apply_query(&mut self, query: &str, source: &str) {
        logging::log_query_emission(source, query);
        self.model.apply(query);
        self.table.reset(self.model.row_count());
        logging::log_filter_result(query, self.model.row_count(), self.model.total_count());
        self.update_status();
    }

    fn update_status(&mut self) {
        self.status_message = format!(
            "{} of {} cities",
            self.model.row_count(),
            self.model.total_count()
        );
    }

    /// Feed the current search text into the pipeline as a raw event.
    fn note_input(&mut self) {
        self.pipeline
            .note_input(Some(&self.search.query), Instant::now());
    }

    /// Explicit search: bypasses the coalescing window.
    fn commit_search(&mut self) {
        let query = self.pipeline.commit(Some(&self.search.query));
        self.apply_query(&query, "commit");
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && self.search.clear() {
                    self.note_input();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.commit_search();
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                self.note_input();
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.note_input();
                }
            }
            KeyCode::Delete => {
                if self.search.delete_forward() {
                    self.note_input();
                }
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Tab | KeyCode::Down => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.model.row_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // The search key works from table focus too
            KeyCode::Enter => self.commit_search(),

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.append(c);
                self.note_input();
            }

            _ => {}
        }
    }
}
