use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};

use pruner_lib::{candidate::RemoveCandidate, constant::CARDS_PER_ROW};

use super::config::{CARD_HEIGHT, SPINNER_FRAMES};
use super::state::AppState;

// --- UI Rendering Function ---
pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let now = Utc::now();
    let visible = app.session.visible();

    render_header(f, chunks[0], app);
    render_stats(f, chunks[1], app, visible.len());
    render_grid(f, chunks[2], app, &visible, now);
    render_detail(f, chunks[3], &visible, app.cursor);
    render_logs(f, chunks[4], app);

    let footer = Paragraph::new(format!(
        " {} | \u{2190}\u{2191}\u{2192}\u{2193} select | k keep | r remove | f refresh | q quit ",
        app.status_msg
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let spinner = if app.is_loading {
        SPINNER_FRAMES[app.spinner_idx % SPINNER_FRAMES.len()]
    } else {
        "✓"
    };
    let header = Paragraph::new(format!(" PRUNER FOLLOW REVIEW | {spinner} "))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState, pending: usize) {
    let stats_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let kpi_text = vec![
        Line::from(vec![
            Span::raw("Pending:  "),
            Span::styled(
                format!("{pending}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Removed:  "),
            Span::styled(format!("{}", app.removals_requested), Style::default().fg(Color::Red)),
            Span::raw("   Kept: "),
            Span::styled(format!("{}", app.keeps), Style::default().fg(Color::Green)),
        ]),
    ];
    let kpi_block =
        Paragraph::new(kpi_text).block(Block::default().title(" Session ").borders(Borders::ALL));
    f.render_widget(kpi_block, stats_chunks[0]);

    let reviewed = app.session.reviewed_count();
    let total = reviewed + pending;
    let percent = if total == 0 { 0 } else { (reviewed * 100 / total) as u16 };
    let gauge = Gauge::default()
        .block(Block::default().title(" Session Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent)
        .label(format!("{reviewed}/{total} reviewed"));
    f.render_widget(gauge, stats_chunks[1]);
}

fn render_grid(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    visible: &[&RemoveCandidate],
    now: DateTime<Utc>,
) {
    if visible.is_empty() {
        let empty_msg = if app.is_loading {
            "Loading candidates..."
        } else {
            "No candidates left to review."
        };
        let placeholder = Paragraph::new(empty_msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Candidates "));
        f.render_widget(placeholder, area);
        return;
    }

    let max_rows = (area.height / CARD_HEIGHT) as usize;
    if max_rows == 0 {
        return;
    }

    // Keep the selected card's row in view.
    let rows: Vec<&[&RemoveCandidate]> = visible.chunks(CARDS_PER_ROW).collect();
    let cursor_row = app.cursor / CARDS_PER_ROW;
    let start_row = (cursor_row + 1).saturating_sub(max_rows);
    let end_row = (start_row + max_rows).min(rows.len());

    for (row_offset, row) in rows[start_row..end_row].iter().enumerate() {
        let row_index = start_row + row_offset;
        let row_area = Rect {
            x: area.x,
            y: area.y + (row_offset as u16) * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(row_area);

        for (col_index, candidate) in row.iter().enumerate() {
            let flat_index = row_index * CARDS_PER_ROW + col_index;
            render_card(f, cells[col_index], candidate, flat_index == app.cursor, now);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    candidate: &RemoveCandidate,
    selected: bool,
    now: DateTime<Utc>,
) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lock = if candidate.protected { " \u{1f512}" } else { "" };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}{}", candidate.name, lock),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}", candidate.screen_name),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(format!("{} posts", candidate.statuses_count)),
    ];
    // No last post means no recency line at all.
    if let Some(recency) = candidate.recency_label(now) {
        lines.push(Line::from(Span::styled(
            format!("{recency} ago"),
            Style::default().fg(Color::Magenta),
        )));
    }

    let following_style = if candidate.friends_count == 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::raw("Following: "),
        Span::styled(format!("{}", candidate.friends_count), following_style),
    ]));
    lines.push(Line::from(format!("Followers: {}", candidate.followers_count)));

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(card, area);
}

fn render_detail(f: &mut Frame, area: Rect, visible: &[&RemoveCandidate], cursor: usize) {
    let lines = match visible.get(cursor) {
        Some(candidate) => vec![
            Line::from(vec![
                Span::styled("Bio:    ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(candidate.description.clone()),
            ]),
            Line::from(vec![
                Span::styled("Avatar: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(candidate.bigger_profile_image()),
            ]),
        ],
        None => vec![Line::from("No candidate selected")],
    };
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Selected "));
    f.render_widget(detail, area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &AppState) {
    let header_cells = ["Account", "Details"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    let table_header = Row::new(header_cells).height(1);

    let rows = app.logs.iter().rev().map(|(who, details, color)| {
        Row::new(vec![
            Cell::from(who.clone()).style(Style::default().fg(*color).add_modifier(Modifier::BOLD)),
            Cell::from(details.clone()).style(Style::default().fg(*color)),
        ])
    });

    let t = Table::new(rows, [Constraint::Percentage(25), Constraint::Percentage(75)])
        .header(table_header)
        .block(Block::default().borders(Borders::ALL).title(" Activity "))
        .column_spacing(1);
    f.render_widget(t, area);
}
