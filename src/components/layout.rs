//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Home screen layout areas
pub struct HomeLayout {
    pub scenario: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate home screen layout: scenario panel, status line, help bar
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    HomeLayout {
        scenario: chunks[0],
        status: chunks[1],
        help: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 50, 10);
        assert_eq!(popup, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let popup = centered_popup(Rect::new(0, 0, 30, 8), 50, 10);
        assert_eq!(popup, Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_home_layout_reserves_status_and_help() {
        let layout = calculate_home_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.scenario.height, 20);
    }
}
