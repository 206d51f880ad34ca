//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::PricingRequest;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background fetches
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Activity Log
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the activity log and request fresh entries
    OpenActivityLog,
    /// Hide the activity log
    CloseActivityLog,

    // ─────────────────────────────────────────────────────────────────────────
    // Pricing
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the pricing confirmation form
    OpenPricing,
    /// Pricing form was cancelled
    ClosePricing,
    /// Pricing form was confirmed with these values
    ConfirmPricing(PricingRequest),
    /// Re-read the scenario's current values from the config file
    ReloadScenario,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::OpenActivityLog => write!(f, "OpenActivityLog"),
            Action::CloseActivityLog => write!(f, "CloseActivityLog"),
            Action::OpenPricing => write!(f, "OpenPricing"),
            Action::ClosePricing => write!(f, "ClosePricing"),
            Action::ConfirmPricing(request) => write!(
                f,
                "ConfirmPricing({}, {})",
                request.desired_ltv, request.desired_closing_date
            ),
            Action::ReloadScenario => write!(f, "ReloadScenario"),
        }
    }
}
