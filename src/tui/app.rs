use crossterm::event::KeyCode;
use ratatui::widgets::{ListState, ScrollbarState};

use crate::error::RenameError;
use crate::plan::RenamePlan;
use crate::rename_engine::RunSummary;

use super::models::{AppAction, PlanItem, ProcessingStats};

#[derive(Debug)]
pub struct App {
    pub files: Vec<PlanItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
    pub processing_progress: f64,
    pub show_help: bool,
    pub show_preview: bool,
    pub finished: bool,
    pub stats: ProcessingStats,
    pub apply_error: Option<RenameError>,
}

impl App {
    pub fn new(plan: &RenamePlan) -> Self {
        let files: Vec<PlanItem> = plan.iter().map(PlanItem::from).collect();

        let mut list_state = ListState::default();
        if !files.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            stats: ProcessingStats {
                total: files.len(),
                ..ProcessingStats::default()
            },
            scroll_state: ScrollbarState::new(files.len()),
            files,
            selected_index: 0,
            list_state,
            processing_progress: 0.0,
            show_help: false,
            show_preview: true,
            finished: false,
            apply_error: None,
        }
    }

    pub fn next(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.files.len() => i + 1,
            _ => 0,
        };
        self.select(i);
    }

    pub fn previous(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    fn select(&mut self, i: usize) {
        self.list_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i);
        self.selected_index = i;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.show_help {
                    self.toggle_help();
                    AppAction::None
                } else {
                    AppAction::Quit
                }
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.toggle_help();
                AppAction::None
            }
            KeyCode::Char('p') => {
                self.toggle_preview();
                AppAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                AppAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char('y') if !self.finished && !self.show_help => {
                AppAction::Apply
            }
            _ => AppAction::None,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            planned: self.stats.total,
            renamed: self.stats.successful,
            unchanged: self.stats.unchanged,
        }
    }
}
