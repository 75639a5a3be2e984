//! Panel rendering

use application::{ContentView, Highlight, STRIP_DAYS, WeatherView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use super::theme::{Palette, toggle_glyph};

/// Highlight cards per grid row
const HIGHLIGHT_COLUMNS: usize = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme.current());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], app, &palette);
    render_input(frame, chunks[1], app, &palette);

    match WeatherView::project(app.controller.state()) {
        WeatherView::Welcome { message } => {
            render_message(frame, chunks[2], Span::styled(message, palette.muted()), &palette);
        },
        WeatherView::Loading => {
            let text = format!("{} Loading...", app.spinner());
            render_message(frame, chunks[2], Span::styled(text, palette.accent()), &palette);
        },
        WeatherView::Error { message } => {
            render_message(frame, chunks[2], Span::styled(message, palette.error()), &palette);
        },
        WeatherView::Content(view) => render_content(frame, chunks[2], &view, &palette),
    }

    render_footer(frame, chunks[3], app, &palette);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(" Nimbus ", palette.accent()),
        Span::styled(
            format!("[{}] ", toggle_glyph(app.theme.toggle_icon())),
            palette.muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).style(palette.base()), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let input = Paragraph::new(app.input.as_str()).style(palette.base()).block(
        Block::default()
            .title(" City ")
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(input, area);

    let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    frame.set_cursor_position((area.x.saturating_add(1).saturating_add(typed).min(max_x), area.y + 1));
}

fn render_message(frame: &mut Frame, area: Rect, message: Span<'_>, palette: &Palette) {
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(message)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        )
        .style(palette.base());
    frame.render_widget(paragraph, area);
}

fn render_content(frame: &mut Frame, area: Rect, view: &ContentView, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let current = vec![
        Line::from(Span::styled(view.date_line.clone(), palette.muted())),
        Line::from(vec![
            Span::raw(format!("{} ", view.emoji)),
            Span::styled(view.temperature.clone(), palette.accent()),
            Span::raw(format!("  {}", view.description)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("Wind: {}   Humidity: {}", view.wind, view.humidity),
            palette.muted(),
        )),
    ];
    let current = Paragraph::new(current).style(palette.base()).block(
        Block::default()
            .title(format!(" {} ", view.header))
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(current, rows[0]);

    render_strip(frame, rows[1], view, palette);
    render_highlights(frame, rows[2], &view.highlights, palette);
}

fn render_strip(frame: &mut Frame, area: Rect, view: &ContentView, palette: &Palette) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, STRIP_DAYS as u32); STRIP_DAYS])
        .split(area);

    for (card, slot) in view.strip.iter().zip(slots.iter()) {
        let lines = vec![
            Line::from(Span::styled(card.day.clone(), palette.accent())),
            Line::from(card.emoji),
            Line::from(card.temperatures.clone()),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
        frame.render_widget(card, *slot);
    }
}

fn render_highlights(frame: &mut Frame, area: Rect, highlights: &[Highlight], palette: &Palette) {
    let block = Block::default()
        .title(" Today's Highlights ")
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = highlights.len().div_ceil(HIGHLIGHT_COLUMNS).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(inner);

    for (row, cards) in rows.iter().zip(highlights.chunks(HIGHLIGHT_COLUMNS)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, HIGHLIGHT_COLUMNS as u32); HIGHLIGHT_COLUMNS])
            .split(*row);

        for (highlight, cell) in cards.iter().zip(cells.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                highlight.value.clone(),
                palette.accent(),
            ))];
            if let Some(detail) = &highlight.detail {
                lines.push(Line::from(Span::styled(detail.clone(), palette.muted())));
            }

            let card = Paragraph::new(lines).style(palette.base()).block(
                Block::default()
                    .title(format!(" {} ", highlight.title))
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
            frame.render_widget(card, *cell);
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = app.status.as_ref().map_or_else(
        || {
            Line::from(vec![
                Span::styled(" Enter", palette.accent()),
                Span::styled(": search  ", palette.muted()),
                Span::styled("Ctrl+T", palette.accent()),
                Span::styled(": theme  ", palette.muted()),
                Span::styled("Esc", palette.accent()),
                Span::styled(": quit", palette.muted()),
            ])
        },
        |status| Line::from(Span::styled(format!(" {status}"), palette.error())),
    );
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}
