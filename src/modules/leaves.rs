//! Leave module - request summary and status legend

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::LeaveStatus;
use crate::ui::theme;

pub struct Leaves;

impl Leaves {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Leaves {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Leaves {
    fn slug(&self) -> &'static str {
        "leave"
    }

    fn title(&self) -> &'static str {
        "Leave Requests"
    }

    fn icon(&self) -> &'static str {
        "calendar-off"
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let (border, lines) = match (&ctx.widgets, &ctx.snapshot) {
            (Some(widgets), Some(snapshot)) => {
                let color = theme::accent_color(widgets.leave.accent);
                let latest = match snapshot.latest_leave_status {
                    LeaveStatus::Approved => "Approved",
                    LeaveStatus::Rejected => "Rejected",
                    LeaveStatus::None => "—",
                };
                let lines = vec![
                    Line::from(Span::styled(
                        widgets.leave.summary.clone(),
                        Style::default().fg(color),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Pending   ", theme::dim()),
                        Span::raw(snapshot.pending_leaves.to_string()),
                    ]),
                    Line::from(vec![
                        Span::styled("Latest    ", theme::dim()),
                        Span::raw(latest),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Apply for leave from the mess web portal; approvals show up here.",
                        theme::dim(),
                    )),
                ];
                (Style::default().fg(color), lines)
            }
            _ => (
                theme::dim(),
                vec![Line::from(Span::styled("Waiting for first sync…", theme::dim()))],
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("LEAVE REQUESTS")
            .border_style(border);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
