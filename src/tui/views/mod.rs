//! TUI Views module
//!
//! Sidebar, account header and tab strip, one view per tab, the chart and
//! the status bar.

pub mod chart;
pub mod header;
pub mod management;
pub mod plans;
pub mod records;
pub mod sidebar;
pub mod status_bar;
pub mod transactions;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::panel::{Modal, Tab};

use super::app::{App, FocusedPanel};
use super::dialogs;
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    render_main(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.panel.state.has_modal() {
        render_dialog(frame, app);
    } else if app.show_help {
        dialogs::help::render(frame, app);
    }
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = &app.panel.state;
    // Dialogs show their own errors
    let show_banner = state.error.is_some() && !state.has_modal();
    let layout = MainPanelLayout::new(area, show_banner);

    header::render(frame, app, layout.header);
    header::render_tabs(frame, app, layout.tabs);
    if show_banner {
        render_banner(frame, app, layout.banner);
    }

    if app.panel.state.selected_account.is_none() {
        let key = if app.panel.state.loading {
            "loading"
        } else if app.panel.state.accounts.is_empty() {
            "no_accounts"
        } else {
            "select_account"
        };
        let text = Paragraph::new(app.panel.t(key))
            .block(content_block(app))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, layout.content);
        return;
    }

    match app.panel.state.active_tab {
        Tab::AllRecords => records::render(frame, app, layout.content),
        Tab::Transactions => transactions::render(frame, app, layout.content),
        Tab::Plans => plans::render(frame, app, layout.content),
        Tab::AccountManagement => management::render(frame, app, layout.content),
    }
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.panel.state.error.as_deref() else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", message), Style::default().fg(Color::Red)),
        Span::styled(" [Esc] dismiss", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    let Some(modal) = app.panel.state.modal.clone() else {
        return;
    };
    match modal {
        Modal::TransactionForm { .. } => dialogs::transaction::render(frame, app),
        Modal::PlanForm { .. } => dialogs::plan::render(frame, app),
        Modal::AddAccount | Modal::EditAccount => dialogs::account::render(frame, app),
        Modal::DeleteAccount => dialogs::delete_account::render(frame, app),
        Modal::BalanceAdjust => dialogs::adjustment::render(frame, app),
        Modal::AccountNotes => dialogs::notes::render(frame, app),
        Modal::ConfirmDeleteTransaction(_) | Modal::ConfirmDeletePlan(_) => {
            dialogs::confirm::render(frame, app)
        }
    }
}

/// Bordered block for the tab content, highlighted when focused
pub(crate) fn content_block(app: &App) -> Block<'static> {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Red for expenses, green for income
pub(crate) fn amount_color(negative: bool) -> Color {
    if negative {
        Color::Red
    } else {
        Color::Green
    }
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("coffee", 10), "coffee");
        assert_eq!(truncate_string("groceries and more", 8), "groceri…");
        assert_eq!(truncate_string("每月房租費用", 4), "每月房…");
    }
}
