//! Activity log viewer
//!
//! Read-only table of audit entries. Opening the viewer requests a refresh
//! from the audit log source; the table simply shows whatever snapshot the
//! source currently holds.

use crate::action::Action;
use crate::component::Component;
use crate::model::audit::{detail_lines, format_timestamp};
use crate::model::{AuditLogEntry, BadgeVariant, DateLocale};
use crate::services::AuditLogSource;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub const EMPTY_PLACEHOLDER: &str = "No activity logs found.";

/// Activity log dialog. Owns its own visibility.
#[derive(Debug, Default)]
pub struct ActivityLogViewer {
    is_open: bool,
    pub scroll: usize,
    /// Entry count last reported by the parent, bounds `scroll`
    entry_count: usize,
}

impl ActivityLogViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show the dialog and issue one fetch on the source
    pub fn open(&mut self, source: &mut dyn AuditLogSource) {
        self.is_open = true;
        self.scroll = 0;
        source.fetch();
        tracing::debug!("Activity log opened");
    }

    /// Record how many entries the source currently holds
    pub fn set_entry_count(&mut self, count: usize) {
        self.entry_count = count;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.entry_count.saturating_sub(1)
    }

    /// Hide the dialog. Never fetches.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn draw_with_entries(
        &self,
        frame: &mut Frame,
        area: Rect,
        entries: &[AuditLogEntry],
        locale: DateLocale,
    ) -> Result<()> {
        if !self.is_open {
            return Ok(());
        }

        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Activity Log ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        if entries.is_empty() {
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);

            let centered = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(inner);
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, centered[1]);
        } else {
            let header = Row::new(vec!["Date", "Action", "Scenario", "User", "Details"]).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

            let scroll = self.scroll.min(entries.len().saturating_sub(1));
            let rows = entries
                .iter()
                .skip(scroll)
                .map(|entry| entry_row(entry, locale));

            let table = Table::new(
                rows,
                [
                    Constraint::Length(22),
                    Constraint::Length(12),
                    Constraint::Percentage(25),
                    Constraint::Percentage(20),
                    Constraint::Min(20),
                ],
            )
            .header(header)
            .column_spacing(1)
            .block(block);

            frame.render_widget(table, chunks[0]);
        }

        frame.render_widget(help_bar(), chunks[1]);
        Ok(())
    }
}

impl Component for ActivityLogViewer {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => {
                Some(Action::CloseActivityLog)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll())
            }
            Action::PageUp => self.scroll = self.scroll.saturating_sub(10),
            Action::PageDown => {
                self.scroll = self.scroll.saturating_add(10).min(self.max_scroll())
            }
            Action::CloseActivityLog => self.close(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Entries live in the audit source, see draw_with_entries
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

fn badge_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Destructive => Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Default => Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Secondary => Style::default().bg(Color::DarkGray).fg(Color::White),
        BadgeVariant::Outline => Style::default().fg(Color::Gray),
    }
}

fn entry_row(entry: &AuditLogEntry, locale: DateLocale) -> Row<'static> {
    let details = detail_lines(entry, locale);
    let height = details.len().max(1) as u16;

    let badge = Line::from(Span::styled(
        format!(" {} ", entry.badge_label()),
        badge_style(entry.badge_variant()),
    ));
    let details = Text::from(details.into_iter().map(Line::from).collect::<Vec<_>>());

    Row::new(vec![
        Cell::from(format_timestamp(&entry.performed_at, locale)),
        Cell::from(badge),
        Cell::from(entry.scenario_name.clone()),
        Cell::from(entry.user_name.clone()),
        Cell::from(details),
    ])
    .height(height)
}

fn help_bar() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            " Esc/q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Close  "),
        Span::styled(
            " j/k ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Scroll"),
    ]))
    .block(Block::default().borders(Borders::ALL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::audit::AdditionalData;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    /// Source that records how many fetches were issued
    #[derive(Default)]
    struct RecordingSource {
        fetches: usize,
        entries: Vec<AuditLogEntry>,
    }

    impl AuditLogSource for RecordingSource {
        fn fetch(&mut self) {
            self.fetches += 1;
        }

        fn entries(&self) -> &[AuditLogEntry] {
            &self.entries
        }
    }

    fn create_test_entry(id: &str, action: &str, additional_data: Option<AdditionalData>) -> AuditLogEntry {
        AuditLogEntry {
            id: id.to_string(),
            performed_at: "2024-01-01T12:00:00Z".to_string(),
            action: action.to_string(),
            scenario_name: format!("Scenario {}", id),
            user_name: "Jordan".to_string(),
            additional_data,
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(viewer: &ActivityLogViewer, entries: &[AuditLogEntry]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| {
                viewer
                    .draw_with_entries(frame, frame.area(), entries, DateLocale::EnUs)
                    .unwrap();
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_open_issues_one_fetch_per_open() {
        let mut source = RecordingSource::default();
        let mut viewer = ActivityLogViewer::new();
        assert!(!viewer.is_open());

        viewer.open(&mut source);
        assert!(viewer.is_open());
        assert_eq!(source.fetches, 1);

        // Repeated opens without closing still fetch each time
        viewer.open(&mut source);
        assert_eq!(source.fetches, 2);

        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(source.fetches, 2);

        viewer.open(&mut source);
        assert_eq!(source.fetches, 3);
    }

    #[test]
    fn test_close_keys_emit_close_action() {
        let mut viewer = ActivityLogViewer::new();
        let action = viewer
            .handle_key_event(KeyEvent::from(KeyCode::Esc))
            .unwrap();
        assert_eq!(action, Some(Action::CloseActivityLog));

        let mut source = RecordingSource::default();
        viewer.open(&mut source);
        viewer.update(Action::CloseActivityLog).unwrap();
        assert!(!viewer.is_open());
        assert_eq!(source.fetches, 1);
    }

    #[test]
    fn test_scroll_resets_on_open() {
        let mut source = RecordingSource::default();
        let mut viewer = ActivityLogViewer::new();
        viewer.open(&mut source);
        viewer.set_entry_count(30);
        viewer.update(Action::PageDown).unwrap();
        viewer.update(Action::ScrollUp).unwrap();
        assert_eq!(viewer.scroll, 9);

        viewer.open(&mut source);
        assert_eq!(viewer.scroll, 0);
    }

    #[test]
    fn test_scroll_stays_within_entries() {
        let mut viewer = ActivityLogViewer::new();
        viewer.open(&mut RecordingSource::default());
        viewer.set_entry_count(3);

        for _ in 0..5 {
            viewer.update(Action::PageDown).unwrap();
        }
        assert_eq!(viewer.scroll, 2);

        viewer.update(Action::ScrollUp).unwrap();
        assert_eq!(viewer.scroll, 1);

        viewer.update(Action::ScrollDown).unwrap();
        viewer.update(Action::ScrollDown).unwrap();
        assert_eq!(viewer.scroll, 2);

        // A shorter refresh pulls the offset back in range
        viewer.set_entry_count(1);
        assert_eq!(viewer.scroll, 0);
    }

    #[test]
    fn test_hidden_viewer_draws_nothing() {
        let viewer = ActivityLogViewer::new();
        let text = render(&viewer, &[]);
        assert!(!text.contains("Activity Log"));
        assert!(!text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_empty_entries_render_placeholder_without_table() {
        let mut viewer = ActivityLogViewer::new();
        viewer.open(&mut RecordingSource::default());

        let text = render(&viewer, &[]);
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(!text.contains("Scenario"));
        assert!(!text.contains("Details"));
    }

    #[test]
    fn test_populated_entries_render_rows_in_source_order() {
        let mut viewer = ActivityLogViewer::new();
        viewer.open(&mut RecordingSource::default());
        let entries = vec![
            create_test_entry("B", "Created", None),
            create_test_entry("A", "archived", None),
        ];

        let text = render(&viewer, &entries);
        assert!(!text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Details"));
        assert!(text.contains(" CREATED "));
        assert!(text.contains(" ARCHIVED "));

        let b = text.find("Scenario B").unwrap();
        let a = text.find("Scenario A").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_details_render_deleted_before_restored() {
        let mut viewer = ActivityLogViewer::new();
        viewer.open(&mut RecordingSource::default());
        let entries = vec![create_test_entry(
            "1",
            "restored",
            Some(AdditionalData {
                deleted_at: Some("2024-01-01T00:00:00Z".to_string()),
                restored_at: Some("2024-01-02T00:00:00Z".to_string()),
            }),
        )];

        let text = render(&viewer, &entries);
        let deleted = text.find("Deleted at:").unwrap();
        let restored = text.find("Restored at:").unwrap();
        assert!(deleted < restored);
    }

    #[test]
    fn test_badge_styles_follow_variant() {
        let entry = create_test_entry("1", "DELETED", None);
        assert_eq!(badge_style(entry.badge_variant()).bg, Some(Color::Red));

        let entry = create_test_entry("2", "updated", None);
        assert_eq!(badge_style(entry.badge_variant()).bg, None);
    }
}
