//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Account list
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Account header: name, balance, last transaction
    pub header: Rect,
    /// Tab strip
    pub tabs: Rect,
    /// Error banner, empty when there is no error
    pub banner: Rect,
    /// Tab content
    pub content: Rect,
}

impl MainPanelLayout {
    pub fn new(area: Rect, show_banner: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(if show_banner { 1 } else { 0 }),
                Constraint::Min(3),
            ])
            .split(area);

        Self {
            header: chunks[0],
            tabs: chunks[1],
            banner: chunks[2],
            content: chunks[3],
        }
    }
}

/// Layout for the All Records tab
pub struct RecordsLayout {
    /// Filter bar (dates and search)
    pub filters: Rect,
    /// Income/expense chart
    pub chart: Rect,
    /// Records table
    pub table: Rect,
}

impl RecordsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(10),
                Constraint::Min(3),
            ])
            .split(area);

        Self {
            filters: chunks[0],
            chart: chunks[1],
            table: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_row_collapses() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(MainPanelLayout::new(area, false).banner.height, 0);
        assert_eq!(MainPanelLayout::new(area, true).banner.height, 1);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(80, 30, Rect::new(0, 0, 40, 10));
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 10);
    }
}
