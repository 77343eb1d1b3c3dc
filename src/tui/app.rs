//! Planner application state and event handling.
//!
//! The `App` struct owns all screen state and runs the main event loop via
//! `run()`. Every user interaction triggers one full re-evaluation: the
//! action updates the [`TripQuery`] or selection, the filtered hotel view
//! is recomputed from the immutable catalog, and the screen is redrawn.
//!
//! State it manages:
//!
//! - **Trip form**: field focus and value stepping for the sidebar form
//! - **Filtered view**: recomputed through the filter engine on each change
//! - **Session booking**: written when the user confirms a hotel selection
//! - **Status messages**: transient feedback for bookings and empty states
//! - **Dirty state tracking**: redraw only when something changed

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::catalog::Catalog;
use crate::filters::filter_and_sort;
use crate::models::{Booking, Hotel, TripQuery};
use crate::session::Session;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Longest accepted source-city input
const SOURCE_CITY_MAX_LEN: usize = 48;

/// Which pane receives navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Results,
}

/// Sidebar form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SourceCity,
    Destination,
    TravelDate,
    NumDays,
    NumMembers,
    MinBudget,
    MaxBudget,
    MinRating,
    SortMode,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::SourceCity,
        FormField::Destination,
        FormField::TravelDate,
        FormField::NumDays,
        FormField::NumMembers,
        FormField::MinBudget,
        FormField::MaxBudget,
        FormField::MinRating,
        FormField::SortMode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::SourceCity => "From",
            FormField::Destination => "Destination",
            FormField::TravelDate => "Date",
            FormField::NumDays => "Days",
            FormField::NumMembers => "Members",
            FormField::MinBudget => "Min Budget",
            FormField::MaxBudget => "Max Budget",
            FormField::MinRating => "Min Rating",
            FormField::SortMode => "Sort By",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).expect("field is in ALL")
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    catalog: Catalog,
    query: TripQuery,
    results: Vec<Hotel>,
    session: Session,
    focus: Focus,
    form_field: FormField,
    selected_idx: usize,
    should_quit: bool,
    // Status message (booking feedback, etc.)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let query = TripQuery::new(Local::now().date_naive());

        let mut app = Self {
            catalog,
            query,
            results: Vec::new(),
            session: Session::new(),
            focus: Focus::Form,
            form_field: FormField::SourceCity,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        };
        app.refresh_results();
        app
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        query: &self.query,
                        cities: self.catalog.cities(),
                        results: &self.results,
                        selected_idx: self.selected_idx,
                        focus: self.focus,
                        form_field: self.form_field,
                        booking: self.session.current(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Recompute the filtered view from the current query.
    ///
    /// Skipped entirely when no destination is chosen; that state renders
    /// as guidance, not as an empty result.
    fn refresh_results(&mut self) {
        self.results = match self.query.criteria() {
            Some(criteria) => filter_and_sort(&self.catalog, &criteria),
            None => Vec::new(),
        };

        if self.selected_idx >= self.results.len() {
            self.selected_idx = 0;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Form => Focus::Results,
                    Focus::Results => Focus::Form,
                };
                self.needs_redraw = true;
            }
            Action::MoveUp => match self.focus {
                Focus::Form => {
                    self.form_field = self.form_field.prev();
                    self.needs_redraw = true;
                }
                Focus::Results => self.move_selection(-1),
            },
            Action::MoveDown => match self.focus {
                Focus::Form => {
                    self.form_field = self.form_field.next();
                    self.needs_redraw = true;
                }
                Focus::Results => self.move_selection(1),
            },
            Action::Increase => self.step_field(1),
            Action::Decrease => self.step_field(-1),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Confirm => match self.focus {
                Focus::Form => {
                    // Jump to the results pane once there is something to pick
                    if !self.results.is_empty() {
                        self.focus = Focus::Results;
                        self.needs_redraw = true;
                    }
                }
                Focus::Results => self.book_selected(),
            },
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(self.results.len() - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Adjust the focused form field by one step in either direction.
    fn step_field(&mut self, delta: i64) {
        if self.focus != Focus::Form {
            return;
        }

        match self.form_field {
            FormField::SourceCity => return, // free text, not stepped
            FormField::Destination => self.cycle_destination(delta),
            FormField::TravelDate => self.query.step_travel_date(delta),
            FormField::NumDays => self.query.step_num_days(delta),
            FormField::NumMembers => self.query.step_num_members(delta),
            FormField::MinBudget => self.query.step_min_budget(delta),
            FormField::MaxBudget => self.query.step_max_budget(delta),
            FormField::MinRating => self.query.step_min_rating(delta),
            FormField::SortMode => self.query.step_sort_mode(delta),
        }

        self.refresh_results();
        self.needs_redraw = true;
    }

    /// Cycle the destination through "no destination" plus the city index.
    fn cycle_destination(&mut self, delta: i64) {
        let cities = self.catalog.cities();
        let option_count = cities.len() as i64 + 1; // slot 0 = no destination

        let current = match &self.query.destination {
            None => 0,
            Some(city) => {
                cities.iter().position(|c| c == city).map(|i| i as i64 + 1).unwrap_or(0)
            }
        };

        let next = (current + delta).rem_euclid(option_count);
        self.query.destination =
            if next == 0 { None } else { Some(cities[next as usize - 1].clone()) };
    }

    fn input_char(&mut self, c: char) {
        if self.focus != Focus::Form || self.form_field != FormField::SourceCity {
            return;
        }
        if self.query.source_city.chars().count() < SOURCE_CITY_MAX_LEN {
            self.query.source_city.push(c);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.focus != Focus::Form || self.form_field != FormField::SourceCity {
            return;
        }
        if self.query.source_city.pop().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Snapshot the selected hotel and the current query into the session.
    fn book_selected(&mut self) {
        let Some(hotel) = self.results.get(self.selected_idx).cloned() else {
            self.set_status("✗ No hotel selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        let booking = Booking::new(&hotel, &self.query);
        self.session.select(booking);
        self.set_status(
            format!("✓ Booking selected for {}", hotel.name),
            MessageType::Success,
            STATUS_SUCCESS_DURATION_MS,
        );
    }
}
