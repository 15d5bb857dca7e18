//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all user inputs and internal
//! events the application responds to. Terminal events are mapped to actions
//! by the key handler; background results arrive through the event loop.

use crate::{error::AppError, model::entry::Catalog};

/// Represents a high-level action that the application can perform.
#[derive(Debug)]
pub enum Action {
    /// Result of the startup fetch.
    CatalogLoaded(Result<Catalog, AppError>),

    /// Open the category picker overlay.
    OpenCategoryPicker,

    /// Move the picker highlight down.
    PickerDown,

    /// Move the picker highlight up.
    PickerUp,

    /// Apply the highlighted picker row as the category filter.
    ConfirmCategory,

    /// Close the currently active overlay.
    CloseOverlay,

    /// Give the search field keyboard focus.
    FocusSearch,

    /// Leave the search field, keeping its text.
    LeaveSearch,

    /// Append a character to the search field.
    SearchInput(char),

    /// Delete the last character of the search field.
    SearchBackspace,

    /// Empty the search field.
    ClearSearch,

    /// Activate the tab at this position of the tab bar.
    SelectTab(usize),

    NextTab,

    PreviousTab,

    /// Move card selection down.
    MoveSelectionDown,

    /// Move card selection up.
    MoveSelectionUp,

    /// Page down (move selection by a screenful of cards).
    PageDown,

    /// Page up (move selection by a screenful of cards).
    PageUp,

    SelectFirst,

    SelectLast,

    /// Open the selected entry's link in the browser.
    OpenSelected,

    ToggleHelp,

    /// Terminal resized.
    Resize(u16, u16),

    /// Periodic housekeeping.
    Tick,

    /// No operation. Used when an event is consumed but no state change is needed.
    NoOp,

    /// Quit the application.
    Quit,
}
