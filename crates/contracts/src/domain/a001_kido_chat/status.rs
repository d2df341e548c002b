use super::intent::RequestKind;

/// Sequence number of a dispatched request.
///
/// Only the response carrying the most recently issued ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) fn zero() -> Self {
        Self(0)
    }
}

/// How the last request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Answered,
    Failed,
    Reset,
    ResetFailed,
}

/// Idle → in flight → settled.
///
/// Replaces independent `loading` / `image_loading` flags, so a reset and an
/// ask can never both look in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Submitting {
        ticket: RequestTicket,
        kind: RequestKind,
    },
    Resetting {
        ticket: RequestTicket,
    },
    Settled(Outcome),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            RequestStatus::Submitting { .. } | RequestStatus::Resetting { .. }
        )
    }

    /// True only while a picture is being generated
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            RequestStatus::Submitting {
                kind: RequestKind::Image,
                ..
            }
        )
    }

    pub fn ticket(&self) -> Option<RequestTicket> {
        match self {
            RequestStatus::Submitting { ticket, .. } | RequestStatus::Resetting { ticket } => {
                Some(*ticket)
            }
            _ => None,
        }
    }

    /// Ask button caption for this status
    pub fn ask_label(&self) -> &'static str {
        match self {
            RequestStatus::Submitting { kind, .. } => kind.loading_label(),
            RequestStatus::Resetting { .. } => "Resetting...",
            _ => "Ask",
        }
    }
}
