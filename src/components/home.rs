//! Home component - Main application screen
//!
//! Shows the scenario's current pricing values, the last status message and
//! the key help bar. The activity log and pricing form open from here.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_home_layout;
use crate::model::pricing::closing_date_hint;
use crate::model::Scenario;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the home screen needs from the App to render
pub struct HomeRenderContext<'a> {
    pub scenario: &'a Scenario,
    pub status_message: Option<&'a str>,
}

#[derive(Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_with_context(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &HomeRenderContext,
    ) -> Result<()> {
        let layout = calculate_home_layout(area);

        let label_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let ltv = if ctx.scenario.current_ltv.is_empty() {
            "Not set".to_string()
        } else {
            format!("{}%", ctx.scenario.current_ltv)
        };

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Scenario:      ", label_style),
                Span::raw(ctx.scenario.name.clone()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Current LTV:   ", label_style),
                Span::raw(ltv),
            ]),
            Line::from(vec![
                Span::styled("  Closing date:  ", label_style),
                Span::raw(closing_date_hint(&ctx.scenario.current_closing_date)),
            ]),
        ];

        let panel = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" scenario-desk ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(panel, layout.scenario);

        if let Some(message) = ctx.status_message {
            let status = Paragraph::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            )));
            frame.render_widget(status, layout.status);
        }

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" a ", key_style),
            Span::raw("Activity log  "),
            Span::styled(" p ", key_style),
            Span::raw("Request pricing  "),
            Span::styled(" r ", key_style),
            Span::raw("Reload  "),
            Span::styled(" ? ", key_style),
            Span::raw("Help  "),
            Span::styled(" q ", key_style),
            Span::raw("Quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('a') => Some(Action::OpenActivityLog),
            KeyCode::Char('p') | KeyCode::Enter => Some(Action::OpenPricing),
            KeyCode::Char('r') => Some(Action::ReloadScenario),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the scenario, see draw_with_context
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_home_keys_map_to_actions() {
        let mut home = HomeComponent::new();
        let cases = [
            (KeyCode::Char('a'), Some(Action::OpenActivityLog)),
            (KeyCode::Char('p'), Some(Action::OpenPricing)),
            (KeyCode::Char('r'), Some(Action::ReloadScenario)),
            (KeyCode::Char('?'), Some(Action::OpenHelp)),
            (KeyCode::Char('q'), Some(Action::OpenQuitDialog)),
            (KeyCode::Char('z'), None),
        ];
        for (code, expected) in cases {
            assert_eq!(home.handle_key_event(KeyEvent::from(code)).unwrap(), expected);
        }
    }

    #[test]
    fn test_home_renders_scenario_values() {
        let scenario = Scenario {
            name: "Refinance A".to_string(),
            current_ltv: "75".to_string(),
            current_closing_date: "2024-06-01".to_string(),
        };
        let ctx = HomeRenderContext {
            scenario: &scenario,
            status_message: Some("Pricing requested"),
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                HomeComponent::new()
                    .draw_with_context(frame, frame.area(), &ctx)
                    .unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Refinance A"));
        assert!(text.contains("75%"));
        assert!(text.contains("June 1, 2024"));
        assert!(text.contains("Pricing requested"));
    }
}
