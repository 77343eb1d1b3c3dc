use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the trip form sidebar, in columns.
const FORM_WIDTH: u16 = 36;
/// Height of the booking summary pane, including its border.
const BOOKING_HEIGHT: u16 = 7;

/// Planner screen layout.
///
/// A sidebar form on the left, a main column on the right holding the trip
/// plan strip and the results list, and a one-row status bar at the bottom.
/// The booking summary pane only exists while a booking is held.
pub struct AppLayout {
    pub form_area: Rect,
    pub plan_area: Rect,
    pub results_area: Rect,
    pub booking_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, has_booking: bool) -> Self {
        // Vertical split: main area + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        // Horizontal split: form sidebar + main column
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
            .split(vertical_chunks[0]);

        // Main column: plan strip, results, optional booking summary
        let main_constraints: Vec<Constraint> = if has_booking {
            vec![Constraint::Length(3), Constraint::Min(3), Constraint::Length(BOOKING_HEIGHT)]
        } else {
            vec![Constraint::Length(3), Constraint::Min(3)]
        };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(main_constraints)
            .split(horizontal_chunks[1]);

        Self {
            form_area: horizontal_chunks[0],
            plan_area: main_chunks[0],
            results_area: main_chunks[1],
            booking_area: has_booking.then(|| main_chunks[2]),
            status_area: vertical_chunks[1],
        }
    }
}
