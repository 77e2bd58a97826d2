use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the sidebar becomes a toggleable overlay.
pub const NARROW_WIDTH: u16 = 80;
pub const SIDEBAR_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub flash: Rect,
    /// Fixed panel when wide; overlay when narrow and open; absent otherwise
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub status_line: Rect,
    pub narrow: bool,
}

pub fn areas(size: Rect, sidebar_open: bool, flash_lines: u16) -> UiAreas {
    let narrow = size.width < NARROW_WIDTH;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(flash_lines),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let (sidebar, content) = if narrow {
        let overlay = sidebar_open.then_some(Rect {
            x: vertical[2].x,
            y: vertical[2].y,
            width: SIDEBAR_WIDTH.min(vertical[2].width),
            height: vertical[2].height,
        });
        (overlay, vertical[2])
    } else {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(vertical[2]);
        (Some(main[0]), main[1])
    };

    UiAreas {
        size,
        header: vertical[0],
        flash: vertical[1],
        sidebar,
        content,
        status_line: vertical[3],
        narrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_always_has_a_sidebar() {
        let areas = areas(Rect::new(0, 0, 120, 40), false, 0);
        assert!(!areas.narrow);
        assert!(areas.sidebar.is_some());
    }

    #[test]
    fn narrow_layout_hides_the_sidebar_until_opened() {
        let closed = areas(Rect::new(0, 0, 60, 40), false, 0);
        assert!(closed.narrow);
        assert!(closed.sidebar.is_none());

        let open = areas(Rect::new(0, 0, 60, 40), true, 0);
        assert!(open.sidebar.is_some());
        // Overlay sits on top of the content area, not beside it.
        assert_eq!(open.content.width, 60);
    }
}
