//! Pricing confirmation form
//!
//! Two text fields (desired LTV, desired closing date) seeded from the
//! scenario's current values. Visibility belongs to the parent; the form
//! only reports cancel/confirm through Actions.
//!
//! Whenever the parent's current values change, both fields are reset to
//! them. Unsaved edits are discarded (last write wins).

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::pricing::closing_date_hint;
use crate::model::{PricingFormState, PricingRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Field that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingField {
    #[default]
    Ltv,
    ClosingDate,
}

impl PricingField {
    fn toggle(self) -> Self {
        match self {
            PricingField::Ltv => PricingField::ClosingDate,
            PricingField::ClosingDate => PricingField::Ltv,
        }
    }
}

#[derive(Debug, Default)]
pub struct PricingConfirmationForm {
    pub state: PricingFormState,
    pub focus: PricingField,
    /// External values the fields were last seeded from
    synced_from: Option<(String, String)>,
}

impl PricingConfirmationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed both fields when the external values differ from the last
    /// seen ones (or on the first call). Returns true if fields were reset.
    pub fn sync_external(&mut self, current_ltv: &str, current_closing_date: &str) -> bool {
        let unchanged = self
            .synced_from
            .as_ref()
            .is_some_and(|(ltv, date)| ltv == current_ltv && date == current_closing_date);
        if unchanged {
            return false;
        }

        self.state = PricingFormState::seeded(current_ltv, current_closing_date);
        self.synced_from = Some((current_ltv.to_string(), current_closing_date.to_string()));
        tracing::debug!(
            current_ltv,
            current_closing_date,
            "Pricing form re-seeded from scenario"
        );
        true
    }

    pub fn desired_ltv(&self) -> &str {
        &self.state.desired_ltv
    }

    pub fn desired_closing_date(&self) -> &str {
        &self.state.desired_closing_date
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            PricingField::Ltv => &mut self.state.desired_ltv,
            PricingField::ClosingDate => &mut self.state.desired_closing_date,
        }
    }

    /// Current values as they would be confirmed
    pub fn request(&self) -> PricingRequest {
        self.state.to_request()
    }

    pub fn draw_with_visibility(&self, frame: &mut Frame, area: Rect, is_open: bool) -> Result<()> {
        if !is_open {
            return Ok(());
        }

        let popup_area = centered_popup(area, 56, 17);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Confirm the values to request pricing with.",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
        ];

        content.push(field_line(
            "Desired LTV (%)",
            &self.state.desired_ltv,
            self.focus == PricingField::Ltv,
        ));
        content.push(Line::from(Span::styled(
            "   0 - 100",
            Style::default().fg(Color::DarkGray),
        )));
        content.push(Line::from(""));

        content.push(field_line(
            "Desired closing date",
            &self.state.desired_closing_date,
            self.focus == PricingField::ClosingDate,
        ));
        content.push(Line::from(vec![
            Span::styled("   Closing: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                closing_date_hint(&self.state.desired_closing_date),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        content.push(Line::from(""));
        content.push(Line::from(""));

        content.push(Line::from(vec![
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Switch  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Confirm  "),
            Span::styled(
                " Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Request Pricing ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for PricingConfirmationForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::ClosePricing),
            KeyCode::Enter => Some(Action::ConfirmPricing(self.request())),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with_visibility(frame, area, true)
    }
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let prefix = if focused { " ▶ " } else { "   " };
    let display = if focused {
        format!("{}_", value)
    } else if value.is_empty() {
        "(empty)".to_string()
    } else {
        value.to_string()
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::raw(prefix),
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::Cyan)),
        Span::styled(display, value_style),
    ])
}
