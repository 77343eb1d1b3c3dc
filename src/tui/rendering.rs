use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{Focus, FormField, MessageType, StatusMessage};
use super::format::{format_count, format_date, format_money};
use super::layout::AppLayout;
use crate::models::{Booking, Hotel, TripQuery};

const TEXT_BRIGHT: Color = Color::Rgb(250, 250, 250);
const TEXT_MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame.
pub struct RenderState<'a> {
    pub query: &'a TripQuery,
    pub cities: &'a [String],
    pub results: &'a [Hotel],
    pub selected_idx: usize,
    pub focus: Focus,
    pub form_field: FormField,
    pub booking: Option<&'a Booking>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area(), state.booking.is_some());

    render_form(frame, layout.form_area, state);
    render_plan(frame, layout.plan_area, state.query);

    if state.query.destination.is_some() {
        render_results(frame, layout.results_area, state);
    } else {
        render_welcome(frame, layout.results_area, state.cities);
    }

    if let (Some(area), Some(booking)) = (layout.booking_area, state.booking) {
        render_booking(frame, area, booking);
    }

    render_status_bar(frame, layout.status_area, state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = FormField::ALL
        .iter()
        .map(|field| {
            let value = field_value(*field, state);
            let content = format!("{:<12} {}", format!("{}:", field.label()), value);

            let style = if state.focus == Focus::Form && *field == state.form_field {
                Style::default().fg(TEXT_BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let border_style = if state.focus == Focus::Form {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };

    let list = List::new(items).block(
        Block::default().borders(Borders::ALL).border_style(border_style).title(" Plan Your Trip "),
    );

    frame.render_widget(list, area);
}

fn field_value(field: FormField, state: &RenderState) -> String {
    let query = state.query;
    match field {
        FormField::SourceCity => {
            if query.source_city.is_empty() {
                "(type a city)".to_string()
            } else {
                query.source_city.clone()
            }
        }
        FormField::Destination => {
            query.destination.clone().unwrap_or_else(|| "(none)".to_string())
        }
        FormField::TravelDate => format_date(&query.travel_date),
        FormField::NumDays => format_count(query.num_days, "day"),
        FormField::NumMembers => format_count(query.num_members, "member"),
        FormField::MinBudget => format!("{}/night", format_money(query.min_budget as u64)),
        FormField::MaxBudget => format!("{}/night", format_money(query.max_budget as u64)),
        FormField::MinRating => format!("⭐ {:.1}", query.min_rating),
        FormField::SortMode => query.sort_mode.label().to_string(),
    }
}

fn render_plan(frame: &mut Frame, area: Rect, query: &TripQuery) {
    let from =
        if query.source_city.is_empty() { "Not specified" } else { query.source_city.as_str() };
    let to = query.destination.as_deref().unwrap_or("—");

    let line = Line::from(vec![
        Span::styled("From ", Style::default().fg(TEXT_MUTED)),
        Span::raw(from.to_string()),
        Span::styled("  To ", Style::default().fg(TEXT_MUTED)),
        Span::raw(to.to_string()),
        Span::styled("  On ", Style::default().fg(TEXT_MUTED)),
        Span::raw(format_date(&query.travel_date)),
        Span::styled("  For ", Style::default().fg(TEXT_MUTED)),
        Span::raw(format_count(query.num_days, "day")),
        Span::styled("  With ", Style::default().fg(TEXT_MUTED)),
        Span::raw(format_count(query.num_members, "member")),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_MUTED))
            .title(" Your Travel Plan "),
    );

    frame.render_widget(paragraph, area);
}

fn render_welcome(frame: &mut Frame, area: Rect, cities: &[String]) {
    let mut lines = vec![
        Line::from("Select a destination city to view available hotels."),
        Line::from(""),
        Line::from("Move to the Destination field and press ←/→ to choose one."),
        Line::from(""),
        Line::from(Span::styled("Available Destinations", Style::default().fg(ACCENT))),
    ];
    for city in cities {
        lines.push(Line::from(format!("  • {}", city)));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT_MUTED))
                .title(" Welcome "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &RenderState) {
    let trip_nights = state.query.num_days as u64 * state.query.num_members as u64;

    let items: Vec<ListItem> = state
        .results
        .iter()
        .enumerate()
        .map(|(idx, hotel)| {
            // Truncate descriptions so each hotel stays on one row
            let description: String = hotel.description.chars().take(40).collect();
            let total = hotel.price_per_night as u64 * trip_nights;

            let content = format!(
                "{} | {}/night | ⭐ {:.1} | Total {} | {}",
                hotel.name,
                format_money(hotel.price_per_night as u64),
                hotel.rating,
                format_money(total),
                description,
            );

            let style = if state.focus == Focus::Results && idx == state.selected_idx {
                Style::default().fg(TEXT_BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let destination = state.query.destination.as_deref().unwrap_or("");
    let title = if state.results.is_empty() {
        format!(" Hotels in {} ", destination)
    } else {
        format!(" Hotels in {} ({}) ", destination, state.results.len())
    };

    let border_style = if state.focus == Focus::Results {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };

    if items.is_empty() {
        let paragraph = Paragraph::new(format!(
            "No hotels found matching your criteria in {}. Try adjusting your filters.",
            destination
        ))
        .block(Block::default().borders(Borders::ALL).border_style(border_style).title(title))
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    } else {
        let list = List::new(items).block(
            Block::default().borders(Borders::ALL).border_style(border_style).title(title),
        );
        frame.render_widget(list, area);
    }
}

fn render_booking(frame: &mut Frame, area: Rect, booking: &Booking) {
    let from = if booking.source_city.is_empty() {
        "Not specified"
    } else {
        booking.source_city.as_str()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Hotel: ", Style::default().fg(TEXT_MUTED)),
            Span::raw(format!("{} ({})", booking.hotel_name, booking.city)),
        ]),
        Line::from(vec![
            Span::styled("Route: ", Style::default().fg(TEXT_MUTED)),
            Span::raw(format!("{} → {}", from, booking.destination)),
        ]),
        Line::from(vec![
            Span::styled("Stay: ", Style::default().fg(TEXT_MUTED)),
            Span::raw(format!(
                "{}, {}, {}",
                format_date(&booking.travel_date),
                format_count(booking.num_days, "day"),
                format_count(booking.num_members, "member"),
            )),
        ]),
        Line::from(vec![
            Span::styled("Rate: ", Style::default().fg(TEXT_MUTED)),
            Span::raw(format!(
                "{}/night, ⭐ {:.1}/5.0",
                format_money(booking.price_per_night as u64),
                booking.rating
            )),
        ]),
        Line::from(vec![
            Span::styled("Total Cost: ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format_money(booking.total_cost),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Booking Summary "),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(BAR_BG))
    } else {
        let mut parts = vec![];

        parts.push(
            match state.focus {
                Focus::Form => "[FORM]",
                Focus::Results => "[RESULTS]",
            }
            .to_string(),
        );

        if state.query.destination.is_none() {
            parts.push("No destination selected".to_string());
        } else if state.results.is_empty() {
            parts.push("No matching hotels".to_string());
        } else {
            parts.push(format!(
                "hotel {}/{}",
                state.selected_idx.min(state.results.len() - 1) + 1,
                state.results.len()
            ));
        }

        parts.push("Tab: switch pane".to_string());
        match state.focus {
            Focus::Form => parts.push("←/→: adjust".to_string()),
            Focus::Results => parts.push("Enter: book".to_string()),
        }
        parts.push("Esc: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(TEXT_BRIGHT).bg(BAR_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}
