// catalog-core/src/controller/key_handler.rs

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::controller::actions::Action;
use crate::model::tabs::TABS;
use crate::model::ui_state::{UIMode, UIOverlay, UIState};

/// Maps terminal events to actions according to the current input mode.
///
/// Priority: Ctrl+C, then the open overlay, then the search field, then
/// the browse bindings.
#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&self, ui_state: &UIState, event: TermEvent) -> Option<Action> {
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_key(ui_state, key)
            }
            TermEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        }
    }

    pub fn handle_key(&self, ui_state: &UIState, key: KeyEvent) -> Option<Action> {
        trace!(
            "KeyHandler: {:?} in mode {:?} overlay {:?}",
            key, ui_state.mode, ui_state.overlay
        );

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match ui_state.overlay {
            UIOverlay::Help => return Some(Self::help_key(key)),
            UIOverlay::CategoryPicker => return Some(Self::picker_key(key)),
            UIOverlay::None => {}
        }

        match ui_state.mode {
            UIMode::Search => Self::search_key(key),
            UIMode::Browse => Self::browse_key(key),
        }
    }

    fn help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                Action::ToggleHelp
            }
            _ => Action::NoOp,
        }
    }

    fn picker_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PickerUp,
            KeyCode::Down | KeyCode::Char('j') => Action::PickerDown,
            KeyCode::Enter => Action::ConfirmCategory,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => Action::CloseOverlay,
            _ => Action::NoOp,
        }
    }

    fn search_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::LeaveSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(Action::SearchInput(c))
            }
            KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Down => Some(Action::MoveSelectionDown),
            _ => None,
        }
    }

    fn browse_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) => Some(Action::Quit),

            // Tabs
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
                let index = c as usize - '1' as usize;
                (index < TABS.len()).then_some(Action::SelectTab(index))
            }
            (KeyCode::Tab | KeyCode::Right | KeyCode::Char('l'), _) => Some(Action::NextTab),
            (KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h'), _) => {
                Some(Action::PreviousTab)
            }

            // Filters
            (KeyCode::Char('/'), _) => Some(Action::FocusSearch),
            (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Action::OpenCategoryPicker),

            // Cards
            (KeyCode::Up | KeyCode::Char('k'), _) => Some(Action::MoveSelectionUp),
            (KeyCode::Down | KeyCode::Char('j'), _) => Some(Action::MoveSelectionDown),
            (KeyCode::PageUp, _) => Some(Action::PageUp),
            (KeyCode::PageDown, _) => Some(Action::PageDown),
            (KeyCode::Home | KeyCode::Char('g'), _) => Some(Action::SelectFirst),
            (KeyCode::End | KeyCode::Char('G'), _) => Some(Action::SelectLast),
            (KeyCode::Enter | KeyCode::Char('o'), _) => Some(Action::OpenSelected),

            (KeyCode::Char('?'), _) => Some(Action::ToggleHelp),
            (KeyCode::Esc, _) => Some(Action::CloseOverlay),

            _ => None,
        }
    }
}
