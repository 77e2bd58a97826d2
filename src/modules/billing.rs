//! Billing module - latest mess bill in detail

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::ui::theme;

pub struct Billing;

impl Billing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Billing {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Billing {
    fn slug(&self) -> &'static str {
        "billing"
    }

    fn title(&self) -> &'static str {
        "Bill Details"
    }

    fn icon(&self) -> &'static str {
        "receipt"
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let bill = ctx.widgets.as_ref().and_then(|w| w.bill.as_ref());

        let (border, lines) = match bill {
            Some(card) => {
                let color = theme::accent_color(card.accent);
                let lines = vec![
                    Line::from(vec![
                        Span::styled("Amount   ", theme::dim()),
                        Span::styled(
                            card.amount.clone(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Due by   ", theme::dim()),
                        Span::raw(card.due_date.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Status   ", theme::dim()),
                        Span::styled(card.status_label.clone(), Style::default().fg(color)),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Refreshes every {}s from {}", ctx.poll_secs, ctx.server),
                        theme::dim(),
                    )),
                ];
                (Style::default().fg(color), lines)
            }
            None => {
                let text = if ctx.widgets.is_some() {
                    "No bill on record for this month."
                } else {
                    "Waiting for first sync…"
                };
                (
                    theme::dim(),
                    vec![Line::from(Span::styled(text, theme::dim()))],
                )
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("MY MESS BILL")
            .border_style(border);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
