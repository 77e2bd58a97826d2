use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub mod icons;
pub mod layout;
pub mod theme;

use crate::app::{App, FlashMessage, FlashPhase};
use crate::core::NotifyLevel;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    app.ctx.narrow = size.width < layout::NARROW_WIDTH;

    let flash_lines = app.flashes.len().min(3) as u16;
    let areas = layout::areas(size, app.sidebar_open, flash_lines);

    draw_header(f, areas.header, app);
    if flash_lines > 0 {
        draw_flashes(f, areas.flash, app);
    }
    draw_content(f, areas.content, app);
    if let Some(sidebar) = areas.sidebar {
        if areas.narrow {
            f.render_widget(Clear, sidebar);
        }
        draw_sidebar(f, sidebar, app);
    }
    draw_status_line(f, areas.status_line, app);

    if app.help_open {
        draw_help_popup(f, size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut spans = Vec::new();
    if app.ctx.narrow {
        spans.push(Span::styled(
            format!("{} ", icons::glyph("menu")),
            theme::heading(),
        ));
    }
    spans.push(Span::styled("Messmate", theme::heading()));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(app.page_title.clone(), Style::default().add_modifier(Modifier::BOLD)));

    let left = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("URL ", theme::dim()),
        Span::raw(app.location.as_str().to_string()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_flashes(f: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let lines: Vec<Line> = app
        .flashes
        .iter()
        .rev()
        .take(area.height as usize)
        .map(|flash| flash_line(flash, now))
        .collect();
    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn flash_line(flash: &FlashMessage, now: Instant) -> Line<'static> {
    let color = match flash.level {
        NotifyLevel::Info => Color::Green,
        NotifyLevel::Warn => Color::Yellow,
        NotifyLevel::Error => Color::Red,
    };
    let style = match flash.phase(now) {
        FlashPhase::Fading | FlashPhase::Expired => theme::dim(),
        FlashPhase::Visible => Style::default().fg(color),
    };
    Line::from(Span::styled(format!(" {}", flash.text), style))
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .nav_items()
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::raw(format!("{} ", icons::glyph(item.icon))),
                Span::raw(item.title),
            ];
            if item.active {
                spans.push(Span::raw(" *"));
            }
            let style = if item.active {
                theme::heading()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let border_style = if app.ctx.narrow {
        theme::focused_border()
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sections")
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(app.active_module);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    match app.active_module {
        Some(idx) => app.modules[idx].render(f, area, &app.ctx),
        None => {
            // Every section hidden; an unknown module was requested.
            f.render_widget(Block::default().borders(Borders::ALL), area);
        }
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(area);

    let hints = Line::from(Span::styled(
        " q quit  m menu  r refresh  1-4 sections  ? help",
        theme::dim(),
    ));
    f.render_widget(Paragraph::new(hints), chunks[0]);

    let sync = match app.ctx.last_synced {
        Some(at) => format!("synced {} ", at.format("%H:%M:%S")),
        None => "waiting for data… ".to_string(),
    };
    let right = Paragraph::new(Line::from(Span::styled(sync, theme::dim())))
        .alignment(Alignment::Right);
    f.render_widget(right, chunks[1]);
}

fn draw_help_popup(f: &mut Frame, size: Rect) {
    let area = centered_rect(44, 12, size);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("Keys", theme::heading())),
        Line::from(""),
        Line::from("  1-4      switch section"),
        Line::from("  m        toggle sidebar"),
        Line::from("  r        refresh now"),
        Line::from("  Tab      cycle dashboard cards"),
        Line::from("  j/k      scroll announcements"),
        Line::from("  ?        close this help"),
        Line::from("  q        quit"),
    ];
    let popup = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, size: Rect) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y + (size.height - height) / 2,
        width,
        height,
    }
}
