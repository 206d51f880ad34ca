//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod activity_log;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod pricing_form;
pub mod quit_dialog;

pub use activity_log::ActivityLogViewer;
pub use help_dialog::HelpDialog;
pub use home::{HomeComponent, HomeRenderContext};
pub use layout::{calculate_home_layout, centered_popup};
pub use pricing_form::PricingConfirmationForm;
pub use quit_dialog::QuitDialog;
