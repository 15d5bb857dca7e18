//! UI-only state: input mode, overlays, search buffer, transient messages.

use std::time::{Duration, Instant};

use compact_str::CompactString;

/// Where keystrokes go
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIMode {
    #[default]
    Browse = 0,
    /// Typing into the search field
    Search = 1,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIOverlay {
    #[default]
    None = 0,
    Help = 1,
    CategoryPicker = 2,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
}

/// Compact notification with timestamp
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
}

impl Notification {
    pub const LIFETIME: Duration = Duration::from_secs(4);

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.timestamp) >= Self::LIFETIME
    }
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub mode: UIMode,
    pub overlay: UIOverlay,
    /// Raw search field contents; the filter receives the trimmed form.
    pub search_input: String,
    /// Row in the category picker; 0 is "All Categories".
    pub picker_index: usize,
    pub notification: Option<Notification>,
    /// Terminal height, used for paging.
    pub viewport_height: u16,
    needs_redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            mode: UIMode::Browse,
            overlay: UIOverlay::None,
            search_input: String::with_capacity(64),
            picker_index: 0,
            notification: None,
            viewport_height: 0,
            needs_redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub fn toggle_help(&mut self) {
        self.overlay = if self.overlay == UIOverlay::Help {
            UIOverlay::None
        } else {
            UIOverlay::Help
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = UIOverlay::None;
    }

    pub fn show_info(&mut self, message: impl Into<CompactString>) {
        self.notify(message, NotificationLevel::Info);
    }

    pub fn show_warning(&mut self, message: impl Into<CompactString>) {
        self.notify(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<CompactString>) {
        self.notify(message, NotificationLevel::Error);
    }

    fn notify(&mut self, message: impl Into<CompactString>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
        });
    }

    /// Drops an expired notification. Returns true when something changed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_toggle() {
        let mut ui_state = UIState::new();
        assert_eq!(ui_state.overlay, UIOverlay::None);
        ui_state.toggle_help();
        assert_eq!(ui_state.overlay, UIOverlay::Help);
        ui_state.toggle_help();
        assert_eq!(ui_state.overlay, UIOverlay::None);
    }

    #[test]
    fn test_redraw_flag() {
        let mut ui_state = UIState::new();
        assert!(ui_state.needs_redraw());
        ui_state.clear_redraw();
        assert!(!ui_state.needs_redraw());
        ui_state.request_redraw();
        assert!(ui_state.needs_redraw());
    }

    #[test]
    fn test_notification_expiry() {
        let mut ui_state = UIState::new();
        ui_state.show_error("boom");
        let shown_at = ui_state.notification.as_ref().unwrap().timestamp;

        assert!(!ui_state.expire_notification(shown_at));
        assert!(ui_state.notification.is_some());

        assert!(ui_state.expire_notification(shown_at + Notification::LIFETIME));
        assert!(ui_state.notification.is_none());
        assert!(!ui_state.expire_notification(shown_at + Notification::LIFETIME));
    }
}
