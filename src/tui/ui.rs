//! UI rendering for the timer screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::features::session::timer::format_seconds_mmss;
use crate::features::session::Phase;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let ambience_height = if app.show_ambience { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Phase tabs
            Constraint::Min(7),                  // Timer
            Constraint::Length(ambience_height), // Ambience pane
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    if app.show_ambience {
        render_ambience(frame, app, chunks[2]);
    }
    render_status_bar(frame, app, chunks[3]);
}

/// Render the phase tabs.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let titles = [Phase::Work, Phase::ShortBreak, Phase::LongBreak]
        .iter()
        .map(|phase| Line::from(phase.display_name()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.phase_index())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" lomodoro "),
        );

    frame.render_widget(tabs, area);
}

/// Render the countdown readout.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let phase = app.controller.phase();

    let phase_color = if phase.is_break() {
        palette.breaks
    } else {
        palette.work
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // padding
            Constraint::Length(1), // state line
            Constraint::Length(1), // time
            Constraint::Length(1), // dots
            Constraint::Length(1), // padding
            Constraint::Length(1), // progress
            Constraint::Min(0),
        ])
        .split(area);

    let state = if app.controller.is_running() {
        "▶"
    } else {
        "⏸"
    };
    let state_line = Paragraph::new(Line::from(vec![
        Span::styled(state, Style::default().fg(palette.dim)),
        Span::raw(" "),
        Span::styled(
            phase.display_name(),
            Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(state_line, chunks[1]);

    let time = Paragraph::new(format_seconds_mmss(app.controller.remaining_seconds()))
        .style(
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(time, chunks[2]);

    let dots = Paragraph::new(app.session_dots())
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    frame.render_widget(dots, chunks[3]);

    // Keep the gauge narrow in wide terminals
    let gauge_area = centered_horizontal(chunks[5], 40);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color))
        .ratio(app.controller.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, gauge_area);
}

/// Render the ambience pane.
fn render_ambience(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let (title_line, credit_line) = app.ambience.current_track().map_or_else(
        || {
            let hint = if app.ambience.is_empty() {
                "No tracks. Add entries to ~/.lomodoro/media.json"
            } else {
                "Press p to play"
            };
            ("Lofi Radio".to_string(), hint.to_string())
        },
        |entry| (format!("♪ {}", entry.title), entry.credit),
    );

    let volume = if app.ambience.is_muted() {
        "muted".to_string()
    } else {
        format!("vol {}%", app.ambience.current_volume())
    };

    let lines = vec![
        Line::from(Span::styled(
            title_line,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(credit_line, Style::default().fg(palette.dim)),
            Span::raw("  "),
            Span::styled(volume, Style::default().fg(palette.accent)),
        ]),
    ];

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" ambience "),
    );

    frame.render_widget(pane, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let status = app.status.as_deref().unwrap_or("");
    let help = "space start/pause · r reset · w/s/l phase · p/n/m ambience · q quit";

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(status),
        Span::raw("  "),
        Span::styled(help, Style::default().fg(palette.dim)),
    ]));

    frame.render_widget(bar, area);
}

/// Center a fixed-width area horizontally within the given rect.
fn centered_horizontal(area: Rect, width: u16) -> Rect {
    if area.width <= width {
        return area;
    }
    let margin = (area.width - width) / 2;
    Rect {
        x: area.x + margin,
        width,
        ..area
    }
}
