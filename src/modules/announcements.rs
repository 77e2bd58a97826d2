//! Announcements module - full admin notice board

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::NO_NOTICES_PLACEHOLDER;
use crate::modules::dashboard::notice_line;
use crate::ui::theme;

pub struct Announcements {
    selected: usize,
}

impl Announcements {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for Announcements {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Announcements {
    fn slug(&self) -> &'static str {
        "announcements"
    }

    fn title(&self) -> &'static str {
        "Announcements"
    }

    fn icon(&self) -> &'static str {
        "megaphone"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let count = ctx.notice_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default().borders(Borders::ALL).title("ANNOUNCEMENTS");

        let Some(widgets) = ctx.widgets.as_ref() else {
            let placeholder = Paragraph::new("Waiting for first sync…")
                .style(theme::dim())
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        };

        if widgets.notices.is_empty() {
            let placeholder = Paragraph::new(NO_NOTICES_PLACEHOLDER)
                .style(theme::dim())
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = widgets
            .notices
            .entries
            .iter()
            .map(|notice| ListItem::new(notice_line(notice)))
            .collect();
        let count = items.len();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("-> ");

        let mut state = ListState::default();
        state.select(Some(self.selected.min(count.saturating_sub(1))));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
