use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use skiphire_core::{
    model::{SizeTier, SkipOption},
    pricing::format_price,
    workflow::{BookingStep, Confirmation},
};

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, stepper, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, stepper_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new(format!(
        "skiphire – choose your skip size · {}",
        app.source_label
    ))
    .block(Block::default().borders(Borders::ALL).title("Skip Hire"));
    frame.render_widget(header, *header_area);

    draw_stepper(frame, app.active_step(), *stepper_area);

    match &app.confirmation {
        Some(confirmation) => draw_confirmation(frame, confirmation, *content_area),
        None => draw_browser(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = if app.confirmation.is_some() {
        "Esc/b back to skip selection · q/Ctrl-C quit"
    } else if app.session.can_confirm() {
        "↑/↓ move · Space select · x clear selection · n/Tab continue → · q quit"
    } else {
        "↑/↓ move · Space select · q/Ctrl-C quit"
    };

    let status_text = match &app.error_message {
        Some(msg) => format!("{msg} · {nav_hint}"),
        None => nav_hint.to_owned(),
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_stepper(frame: &mut Frame<'_>, active: BookingStep, area: Rect) {
    let mut spans = Vec::with_capacity(BookingStep::ALL.len() * 2);
    for step in BookingStep::ALL {
        if step.index() > 0 {
            spans.push(Span::raw("  ›  "));
        }
        let style = if step == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if step.index() < active.index() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}. {step}", step.index() + 1), style));
    }

    let stepper = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Booking"));
    frame.render_widget(stepper, area);
}

fn draw_browser(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    let [filter_area, main_area] = columns.as_ref() else {
        return;
    };

    draw_filters(frame, app, *filter_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // result count
            Constraint::Min(0),    // table
            Constraint::Length(8), // details
        ])
        .split(*main_area);

    let [count_area, table_area, details_area] = rows.as_ref() else {
        return;
    };

    let visible = app.visible();

    let mut count = vec![Span::raw(format!("{} skips found", visible.len()))];
    if let Some(selected) = app.session.selected() {
        count.push(Span::styled(
            format!(" · {} Yard skip selected", selected.size),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(count)), *count_area);

    if visible.is_empty() {
        let paragraph = Paragraph::new(
            "No skips found matching your filter criteria. Press c to clear filters.",
        )
        .block(Block::default().borders(Borders::ALL).title("Skips"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *table_area);
    } else {
        draw_table(frame, app, &visible, *table_area);
    }

    draw_details(frame, app, *details_area);
}

fn draw_filters(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let criteria = app.session.criteria();
    let lines = vec![
        Line::from(Span::styled(
            "Features",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "[{}] r  Allowed on road",
            checkbox(criteria.allowed_on_road)
        )),
        Line::from(format!(
            "[{}] h  Accepts heavy waste",
            checkbox(criteria.allows_heavy_waste)
        )),
        Line::default(),
        Line::from(Span::styled(
            "Price (incl. VAT)",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Maximum: {}", format_price(criteria.max_price))),
        Line::from("-/+ adjust by £50"),
        Line::default(),
        Line::from(Span::styled(
            "Skip size (yards)",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} - {} Yard", criteria.min_size, criteria.max_size)),
        Line::from("[/] min · {/} max"),
        Line::default(),
        Line::from("c  Clear filters"),
    ];

    let filters = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Filters"))
        .wrap(Wrap { trim: false });
    frame.render_widget(filters, area);
}

fn draw_table(frame: &mut Frame<'_>, app: &App, visible: &[&SkipOption], area: Rect) {
    let rows = visible.iter().map(|option| {
        let selected = app.session.selection().is_selected(option.id);
        let marker = if selected { "✔" } else { " " };
        let transport = if option.transport_included() {
            "incl."
        } else {
            ""
        };

        let mut style = Style::default().fg(tier_color(SizeTier::of(option.size)));
        if selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        Row::new(vec![
            Cell::from(marker),
            Cell::from(format!("{} Yard", option.size)),
            Cell::from(format_price(option.total_price())),
            Cell::from(format!("{} days", option.hire_period_days)),
            Cell::from(yes_no(option.allowed_on_road)),
            Cell::from(yes_no(option.allows_heavy_waste)),
            Cell::from(transport),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(2),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Min(9),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["", "Size", "Total", "Hire", "Road", "Heavy", "Transport"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Skips (↑/↓, Space to select)"),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .highlight_symbol("> ")
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.list_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_details(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let Some(option) = app.highlighted() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Yard Skip Container", option.size),
            Style::default()
                .fg(tier_color(SizeTier::of(option.size)))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} total price including VAT ({} + {}% VAT)",
            format_price(option.total_price()),
            format_price(option.price_before_vat),
            option.vat
        )),
        Line::from(format!("{} days rental period", option.hire_period_days)),
        Line::from(format!(
            "On the road: {} · Heavy waste: {}",
            if option.allowed_on_road {
                "Permitted"
            } else {
                "Not Permitted"
            },
            if option.allows_heavy_waste {
                "Accepted"
            } else {
                "Not Accepted"
            }
        )),
    ];

    if let Some(cost) = option.transport_cost {
        lines.push(Line::from(format!("Transport included ({})", format_price(cost))));
    }
    if let Some(cost) = option.per_tonne_cost {
        lines.push(Line::from(format!("{} per tonne", format_price(cost))));
    }

    let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn draw_confirmation(frame: &mut Frame<'_>, confirmation: &Confirmation, area: Rect) {
    let option = &confirmation.option;
    let lines = vec![
        Line::from(Span::styled(
            confirmation.message(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "{} Yard skip · {} · {} days",
            option.size,
            format_price(option.total_price()),
            option.hire_period_days
        )),
        Line::from(format!("Next: {}", confirmation.next_step)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Confirmed"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn checkbox(on: bool) -> char {
    if on { 'x' } else { ' ' }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn tier_color(tier: SizeTier) -> Color {
    match tier {
        SizeTier::Small => Color::Green,
        SizeTier::Medium => Color::Yellow,
        SizeTier::Large => Color::Red,
    }
}
