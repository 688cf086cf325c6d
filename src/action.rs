//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// Which end of the date range a date action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to the dashboard
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next sidebar field
    FocusNext,
    /// Focus the previous sidebar field
    FocusPrev,
    /// Move the cursor up in the focused list
    CursorUp,
    /// Move the cursor down in the focused list
    CursorDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the option under the cursor
    ToggleOption,
    /// Select every option of the focused list
    SelectAllOptions,
    /// Deselect every option of the focused list
    ClearOptions,
    /// Move a date bound by a number of days
    ShiftDate(DateBound, i64),
    /// Restore the all-selected defaults
    ResetFilters,
    /// Filter criteria changed; rebuild the dashboard view
    FiltersChanged,

    // ─────────────────────────────────────────────────────────────────────────
    // Data Table
    // ─────────────────────────────────────────────────────────────────────────
    /// Expand or collapse the filtered data table
    ToggleTable,
    /// Scroll the table up one page
    TablePageUp,
    /// Scroll the table down one page
    TablePageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the about dialog
    OpenAbout,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::CursorUp => write!(f, "CursorUp"),
            Action::CursorDown => write!(f, "CursorDown"),
            Action::ToggleOption => write!(f, "ToggleOption"),
            Action::SelectAllOptions => write!(f, "SelectAllOptions"),
            Action::ClearOptions => write!(f, "ClearOptions"),
            Action::ShiftDate(bound, days) => write!(f, "ShiftDate({:?}, {})", bound, days),
            Action::ResetFilters => write!(f, "ResetFilters"),
            Action::FiltersChanged => write!(f, "FiltersChanged"),
            Action::ToggleTable => write!(f, "ToggleTable"),
            Action::TablePageUp => write!(f, "TablePageUp"),
            Action::TablePageDown => write!(f, "TablePageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenAbout => write!(f, "OpenAbout"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
