//! Module trait for the switchable dashboard sections

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// One mutually-exclusive content section. All modules exist from
/// startup; exactly the active one is rendered.
pub trait Module {
    /// Identifier used by navigation and the URL `module` parameter
    fn slug(&self) -> &'static str;

    /// Section heading, also used as the page title when revealed
    fn title(&self) -> &'static str;

    /// Glyph-table name for the nav item
    fn icon(&self) -> &'static str;

    /// Handle keyboard input routed to the active module
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Draw the section into its content area
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
