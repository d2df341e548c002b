//! Kido Chat Widget - View Model

use contracts::domain::a001_kido_chat::session::SessionId;
use contracts::domain::a001_kido_chat::state::ChatWidgetState;
use leptos::prelude::*;

/// What happened when a response was handed back to the widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleReport {
    Applied,
    /// A newer request took over while this one was in flight
    Stale,
    /// The state signal was disposed, the widget is gone
    Unmounted,
}

impl From<Option<bool>> for SettleReport {
    /// Maps the result of `RwSignal::try_update(|s| s.settle_*(..))`
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => SettleReport::Applied,
            Some(false) => SettleReport::Stale,
            None => SettleReport::Unmounted,
        }
    }
}

#[derive(Clone, Copy)]
pub struct KidoChatVm {
    pub state: RwSignal<ChatWidgetState>,
    /// Bound to the input field, copied into `state` on submit
    pub question: RwSignal<String>,
}

impl KidoChatVm {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            state: RwSignal::new(ChatWidgetState::new(session_id)),
            question: RwSignal::new(String::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_drawing(&self) -> bool {
        self.state.with(|s| s.status.is_drawing())
    }

    pub fn ask_label(&self) -> &'static str {
        self.state.with(|s| s.status.ask_label())
    }

    pub fn answer(&self) -> Option<String> {
        self.state.with(|s| s.answer.clone())
    }

    pub fn image_url(&self) -> Option<String> {
        self.state.with(|s| s.image_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_report_tells_unmount_from_stale() {
        assert_eq!(SettleReport::from(Some(true)), SettleReport::Applied);
        assert_eq!(SettleReport::from(Some(false)), SettleReport::Stale);
        assert_eq!(SettleReport::from(None), SettleReport::Unmounted);
    }
}
