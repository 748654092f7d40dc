//! Screen layout definitions for the TUI
//!
//! The page scrolls inside `body`; the header and key hint bar stay pinned.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + nav row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Key hint bar height
pub const HINTS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Fixed navigation header
    pub header: Rect,

    /// Scrolling page viewport
    pub body: Rect,

    /// Key hints for the current mode
    pub hints: Rect,
}

/// Split the terminal into header, scrolling body and hint bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(HINTS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        hints: chunks[2],
    }
}

/// Rows available to the scrolling page for a terminal of `area`
pub fn body_height(area: Rect) -> u16 {
    create(area).body.height
}

/// Center a `width` x `height` rectangle inside `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_body_height_tracks_terminal() {
        assert_eq!(body_height(Rect::new(0, 0, 100, 40)), 36);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(60, 6, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 2);
    }
}
