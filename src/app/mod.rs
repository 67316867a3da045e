//! Demo application state.
//!
//! `DemoApp` is the single owner of a [`ViewStateController`]. Fetches run on
//! the tokio runtime and report back through [`DemoApp::finish_fetch`]; keys
//! arrive through [`DemoApp::handle_key`]. Nothing else writes the history.
//!
//! At most one fetch is in flight. A reset abandons it: the event loop aborts
//! the task and any outcome already queued for it is dropped on arrival.

mod fetch;

pub use fetch::{rows_for, simulate_fetch, FetchOutcome, FetchTasks};

use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::debug::DebugAction;
use crate::presentation::PresentationConfig;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};
use crate::ui::{ListRow, ModifyingList, StateView};
use crate::view_state::{ControllerSnapshot, ViewState, ViewStateController};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    None,
    Quit,
    /// Spawn a fetch for this attempt number.
    StartFetch { attempt: u32 },
    /// Abort running fetches; their outcomes are no longer wanted.
    CancelFetches,
}

pub struct DemoApp {
    controller: ViewStateController<Vec<ListRow>>,
    presentation: PresentationConfig,
    selected: usize,
    tick: u64,
    attempts: u32,
    in_flight: Option<u32>,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoApp {
    pub fn new() -> Self {
        Self {
            controller: ViewStateController::new(),
            presentation: PresentationConfig::default(),
            selected: 0,
            tick: 0,
            attempts: 0,
            in_flight: None,
        }
    }

    pub fn with_presentation(mut self, presentation: PresentationConfig) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn controller(&self) -> &ViewStateController<Vec<ListRow>> {
        &self.controller
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of fetches started so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempt number of the fetch whose outcome is awaited, if any.
    pub fn in_flight(&self) -> Option<u32> {
        self.in_flight
    }

    pub fn handle_key(&mut self, code: KeyCode) -> AppCommand {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Char('f') | KeyCode::Char('r') => match self.in_flight {
                Some(attempt) => {
                    tracing::debug!(attempt, "fetch already in flight");
                    AppCommand::None
                }
                None => AppCommand::StartFetch {
                    attempt: self.begin_fetch(),
                },
            },
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                AppCommand::None
            }
            KeyCode::Char('m') => {
                self.toggle_modifying();
                AppCommand::None
            }
            KeyCode::Char(c) => {
                let Some(action) = DebugAction::from_key(c) else {
                    return AppCommand::None;
                };
                let mock = rows_for(0);
                action.apply(&mut self.controller, &mock);
                self.clamp_selection();
                self.log_snapshot("debug");

                if action == DebugAction::Reset && self.in_flight.take().is_some() {
                    AppCommand::CancelFetches
                } else {
                    AppCommand::None
                }
            }
            _ => AppCommand::None,
        }
    }

    /// Record the start of a fetch and return its attempt number.
    ///
    /// The new attempt replaces any fetch still in flight.
    pub fn begin_fetch(&mut self) -> u32 {
        self.attempts += 1;
        self.in_flight = Some(self.attempts);
        self.controller.set_state(ViewState::Loading);
        self.log_snapshot("fetch-start");
        self.attempts
    }

    /// Record a fetch result. Returns false, leaving the history untouched,
    /// if `outcome` is not for the fetch in flight.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(outcome.attempt) {
            tracing::debug!(
                attempt = outcome.attempt,
                in_flight = ?self.in_flight,
                "dropping stale fetch outcome"
            );
            return false;
        }
        self.in_flight = None;

        let state = match outcome.result {
            Ok(rows) => ViewState::Loaded(rows),
            Err(err) => {
                tracing::warn!(
                    attempt = outcome.attempt,
                    code = err.error_code(),
                    error = %err,
                    "fetch failed"
                );
                ViewState::Errored(Arc::new(err))
            }
        };
        self.controller.set_state(state);
        self.clamp_selection();
        self.log_snapshot("fetch-finish");
        true
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn rows(&self) -> &[ListRow] {
        self.controller
            .latest_valid_info()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Flip the modifying flag of the selected row.
    fn toggle_modifying(&mut self) {
        let Some(id) = self.rows().get(self.selected).map(|row| row.id.clone()) else {
            return;
        };

        let mut ids = self.controller.modifying_ids().map(<[String]>::to_vec).unwrap_or_default();
        if let Some(pos) = ids.iter().position(|m| *m == id) {
            ids.remove(pos);
        } else {
            ids.push(id);
        }
        self.controller
            .set_modifying_ids(if ids.is_empty() { None } else { Some(ids) });
    }

    fn log_snapshot(&self, reason: &'static str) {
        let snapshot = ControllerSnapshot::capture(&self.controller);
        match serde_json::to_string(&snapshot) {
            Ok(json) => tracing::info!(reason, snapshot = %json, "controller updated"),
            Err(e) => tracing::warn!("Failed to serialize controller snapshot: {}", e),
        }
    }

    /// One-line summary of the derived queries.
    pub fn status_line(&self) -> Line<'static> {
        let c = &self.controller;
        let flag = |name: &'static str, on: bool, color: Color| {
            let style = if on {
                Style::default().fg(color)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Span::styled(format!("{}:{} ", name, if on { "yes" } else { "no" }), style)
        };

        let mut spans = vec![
            flag("loading", c.is_loading(), COLOR_LOADING),
            flag("initial", c.is_initial_loading(), COLOR_LOADING),
            flag("info", c.latest_valid_info().is_some(), COLOR_SUCCESS),
            flag("error", c.latest_valid_error().is_some(), COLOR_ERROR),
            Span::styled(
                format!("history:{}", c.history().len()),
                Style::default().fg(COLOR_DIM),
            ),
        ];
        if let Some(error) = c.latest_error() {
            spans.push(Span::styled(
                format!("  last error: {}", error),
                Style::default().fg(COLOR_DIM),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame) {
        let [header, body, status, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("View State Demo", Style::default().fg(COLOR_ACCENT)),
                Span::styled(
                    "  [f] Fetch  [j/k] Select  [m] Modify  [q] Quit",
                    Style::default().fg(COLOR_DIM),
                ),
            ])),
            header,
        );

        let selected = Some(self.selected);
        let view = StateView::new(&self.controller, |rows: &Vec<ListRow>| {
            ModifyingList::new(&self.controller, rows)
                .selected(selected)
                .tick(self.tick)
                .text()
        })
        .title(format!("Items ({})", self.controller.presentation().label()))
        .placeholder("Nothing loaded yet. Press f to fetch.")
        .config(self.presentation)
        .tick(self.tick);
        frame.render_widget(view, body);

        frame.render_widget(Paragraph::new(self.status_line()), status);
        frame.render_widget(
            Paragraph::new(DebugAction::hint_line()).style(Style::default().fg(COLOR_DIM)),
            hints,
        );
    }
}
