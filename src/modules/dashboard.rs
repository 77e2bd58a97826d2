//! Dashboard module - bill, leave and notice-board cards

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{BillCard, LeaveCard, NoticeBoard, NO_NOTICES_PLACEHOLDER};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Bill,
    Leave,
    Notices,
}

pub struct Dashboard {
    active_panel: DashboardPanel,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            active_panel: DashboardPanel::Bill,
        }
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Bill => DashboardPanel::Leave,
            DashboardPanel::Leave => DashboardPanel::Notices,
            DashboardPanel::Notices => DashboardPanel::Bill,
        };
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Dashboard {
    fn slug(&self) -> &'static str {
        "dashboard"
    }

    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn icon(&self) -> &'static str {
        "layout-dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.next_panel();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let widgets = ctx.widgets.as_ref();
        render_bill_card(
            frame,
            cards[0],
            widgets.and_then(|w| w.bill.as_ref()),
            widgets.is_some(),
            self.active_panel == DashboardPanel::Bill,
        );
        render_leave_card(
            frame,
            cards[1],
            widgets.map(|w| &w.leave),
            self.active_panel == DashboardPanel::Leave,
        );
        render_notice_board(
            frame,
            rows[1],
            widgets.map(|w| &w.notices),
            self.active_panel == DashboardPanel::Notices,
        );
    }
}

fn panel_title(text: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(text)
    }
}

fn render_bill_card(
    frame: &mut Frame,
    area: Rect,
    bill: Option<&BillCard>,
    synced: bool,
    active: bool,
) {
    let (border, lines) = match bill {
        Some(card) => {
            let color = theme::accent_color(card.accent);
            let lines = vec![
                Line::from(Span::styled(
                    card.amount.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Due {}", card.due_date)),
                Line::from(Span::styled(
                    card.status_label.clone(),
                    Style::default().fg(color),
                )),
            ];
            (Style::default().fg(color), lines)
        }
        None => {
            let text = if synced {
                "No bill on record"
            } else {
                "Waiting for first sync…"
            };
            (theme::dim(), vec![Line::from(Span::styled(text, theme::dim()))])
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(panel_title("CURRENT BILL", active))
        .border_style(border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_leave_card(frame: &mut Frame, area: Rect, leave: Option<&LeaveCard>, active: bool) {
    let (border, lines) = match leave {
        Some(card) => {
            let color = theme::accent_color(card.accent);
            let lines = vec![Line::from(Span::styled(
                card.summary.clone(),
                Style::default().fg(color),
            ))];
            (Style::default().fg(color), lines)
        }
        None => (
            theme::dim(),
            vec![Line::from(Span::styled("Waiting for first sync…", theme::dim()))],
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(panel_title("LEAVE REQUESTS", active))
        .border_style(border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notice_board(frame: &mut Frame, area: Rect, notices: Option<&NoticeBoard>, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(panel_title("NOTICE BOARD", active));

    let paragraph = match notices {
        Some(board) if !board.is_empty() => {
            let lines: Vec<Line> = board.entries.iter().map(notice_line).collect();
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
        }
        Some(_) => Paragraph::new(Span::styled(NO_NOTICES_PLACEHOLDER, theme::dim()))
            .block(block)
            .alignment(Alignment::Center),
        None => Paragraph::new(Span::styled("Waiting for first sync…", theme::dim()))
            .block(block)
            .alignment(Alignment::Center),
    };
    frame.render_widget(paragraph, area);
}

pub(crate) fn notice_line(notice: &crate::domain::Notice) -> Line<'static> {
    Line::from(vec![
        Span::styled("[Admin Alert] ", theme::heading()),
        Span::raw(notice.message.clone()),
        Span::styled(format!("  {}", notice.date), theme::dim()),
    ])
}
