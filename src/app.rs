//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It is the
//! parent of both dialogs: it injects the audit log source into the activity
//! log viewer, and it owns the pricing form's visibility and seed values.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    ActivityLogViewer, HelpDialog, HomeComponent, HomeRenderContext, PricingConfirmationForm,
    QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{PricingRequest, Scenario};
use crate::services::{AuditLogSource, FileAuditLogSource};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    pub config: Config,

    /// Current values of the scenario; the pricing form's external inputs
    pub scenario: Scenario,

    /// Modal overlay stack (quit, help)
    pub modals: ModalStack,

    /// Collaborator the activity log viewer fetches from
    pub audit_source: Box<dyn AuditLogSource>,

    /// Visibility of the pricing form, owned here rather than by the form
    pub pricing_open: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Most recent confirmed pricing request
    pub last_pricing_request: Option<PricingRequest>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub activity_log: ActivityLogViewer,
    pub pricing_form: PricingConfirmationForm,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create an App reading audit logs from the configured file
    pub fn new(config: Config) -> App {
        let source = FileAuditLogSource::new(&config.audit_log_path);
        Self::with_source(config, Box::new(source))
    }

    pub fn with_source(config: Config, audit_source: Box<dyn AuditLogSource>) -> App {
        let scenario = Scenario::from_config(&config);
        let mut app = App {
            should_quit: false,
            config,
            scenario,
            modals: ModalStack::new(),
            audit_source,
            pricing_open: false,
            status_message: None,
            last_pricing_request: None,
            home: HomeComponent::new(),
            activity_log: ActivityLogViewer::new(),
            pricing_form: PricingConfirmationForm::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        };
        app.sync_pricing_form();
        app
    }

    /// Push the scenario's current values into the pricing form
    fn sync_pricing_form(&mut self) {
        self.pricing_form
            .sync_external(&self.scenario.current_ltv, &self.scenario.current_closing_date);
    }

    fn handle_pricing_confirmed(&mut self, request: PricingRequest) {
        tracing::info!(
            scenario = %self.scenario.name,
            desired_ltv = %request.desired_ltv,
            desired_closing_date = %request.desired_closing_date,
            "Pricing requested"
        );

        self.status_message = Some(format!(
            "Pricing requested: LTV {} / closing {}",
            request.desired_ltv, request.desired_closing_date
        ));
        self.scenario.apply(&request);
        self.last_pricing_request = Some(request);
        self.pricing_open = false;
    }

    /// Re-read scenario values from the config file
    fn reload_scenario(&mut self) {
        match Config::load() {
            Some(config) => self.apply_reloaded_scenario(&config),
            None => {
                self.status_message = Some("No config file to reload from".to_string());
            }
        }
    }

    /// Take only the scenario fields from a reloaded config. The audit log
    /// path and locale stay as they were at startup, matching the source.
    fn apply_reloaded_scenario(&mut self, reloaded: &Config) {
        self.config.scenario_name = reloaded.scenario_name.clone();
        self.config.current_ltv = reloaded.current_ltv.clone();
        self.config.current_closing_date = reloaded.current_closing_date.clone();
        self.scenario = Scenario::from_config(&self.config);

        self.status_message = Some("Reloaded scenario values".to_string());
        tracing::info!(scenario = %self.scenario.name, "Scenario reloaded from config");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => return self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => return self.help_dialog.handle_key_event(key),
            None => {}
        }

        if self.pricing_open {
            self.pricing_form.handle_key_event(key)
        } else if self.activity_log.is_open() {
            self.activity_log.handle_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.audit_source.poll() {
                    self.activity_log
                        .set_entry_count(self.audit_source.entries().len());
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to the activity log)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.activity_log
                    .set_entry_count(self.audit_source.entries().len());
                self.activity_log.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Activity Log
            // ─────────────────────────────────────────────────────────────────
            Action::OpenActivityLog => {
                self.activity_log.open(self.audit_source.as_mut());
            }
            Action::CloseActivityLog => {
                self.activity_log.close();
            }

            // ─────────────────────────────────────────────────────────────────
            // Pricing
            // ─────────────────────────────────────────────────────────────────
            Action::OpenPricing => {
                self.pricing_open = true;
            }
            Action::ClosePricing => {
                self.pricing_open = false;
            }
            Action::ConfirmPricing(request) => {
                self.handle_pricing_confirmed(request);
            }
            Action::ReloadScenario => {
                self.reload_scenario();
            }
        }

        self.sync_pricing_form();
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.sync_pricing_form();

        let ctx = HomeRenderContext {
            scenario: &self.scenario,
            status_message: self.status_message.as_deref(),
        };
        self.home.draw_with_context(frame, area, &ctx)?;

        self.activity_log.draw_with_entries(
            frame,
            area,
            self.audit_source.entries(),
            self.config.date_locale,
        )?;
        self.pricing_form
            .draw_with_visibility(frame, area, self.pricing_open)?;

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}
