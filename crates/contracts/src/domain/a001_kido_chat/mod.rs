//! Kido chat: the "ask a question, maybe get a picture" widget.
//!
//! Structure:
//! - dto.rs: request/response bodies for `/api/chat`, `/api/reset` and `/ask`
//! - intent.rs: image-request classification
//! - session.rs: session identifier
//! - status.rs: request status state machine
//! - state.rs: widget state and dispatch transitions
//! - error.rs: error taxonomy and user-facing messages

pub mod dto;
pub mod error;
pub mod intent;
pub mod session;
pub mod state;
pub mod status;

pub use dto::{AskBody, ChatReply, ChatRequest, LegacyAskRequest, ResetRequest};
pub use error::{ChatError, BACKEND_UNREACHABLE, RESET_FAILED};
pub use intent::{ImageKeywords, RequestKind};
pub use session::SessionId;
pub use state::{ChatWidgetState, PendingAsk, PendingReset};
pub use status::{Outcome, RequestStatus, RequestTicket};
