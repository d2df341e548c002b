//! Widget state and its transitions.
//!
//! The view owns one `ChatWidgetState`. Each dispatcher is split in two: a
//! `begin_*` call that mutates state and hands back the request to send, and
//! a `settle_*` call that applies whatever came back. Network code lives in
//! between and never touches state directly.

use super::dto::{AskBody, ChatReply, ChatRequest, LegacyAskRequest, Protocol, ResetRequest};
use super::error::{ChatError, BACKEND_UNREACHABLE, RESET_FAILED};
use super::intent::{ImageKeywords, RequestKind};
use super::session::SessionId;
use super::status::{Outcome, RequestStatus, RequestTicket};

/// Ask that has been started and still needs to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAsk {
    pub ticket: RequestTicket,
    pub kind: RequestKind,
    pub body: AskBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingReset {
    pub ticket: RequestTicket,
    pub body: ResetRequest,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatWidgetState {
    pub question: String,
    pub answer: Option<String>,
    pub image_url: Option<String>,
    /// Most recent picture of this conversation, sent along with the next ask
    pub last_image_url: Option<String>,
    pub status: RequestStatus,
    session_id: SessionId,
    latest: Option<RequestTicket>,
}

impl ChatWidgetState {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            ..Self::default()
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Start an ask. Returns `None` and leaves state untouched for blank input
    /// or while another request is in flight.
    pub fn begin_ask(&mut self, keywords: &ImageKeywords, protocol: Protocol) -> Option<PendingAsk> {
        if self.question.trim().is_empty() || self.is_loading() {
            return None;
        }

        let message = std::mem::take(&mut self.question);
        let kind = keywords.classify(&message);
        let ticket = self.issue_ticket();

        if let Some(shown) = self.image_url.take() {
            self.last_image_url = Some(shown);
        }
        self.answer = None;
        self.status = RequestStatus::Submitting { ticket, kind };

        let body = match protocol {
            Protocol::Chat => AskBody::Chat(ChatRequest {
                message,
                session_id: self.session_id.clone(),
                is_image_request: kind.is_image(),
                last_image_url: self.last_image_url.clone(),
            }),
            Protocol::LegacyAsk => AskBody::Legacy(LegacyAskRequest { question: message }),
        };

        Some(PendingAsk { ticket, kind, body })
    }

    /// Apply the result of an ask. Returns `false` if the ticket is stale.
    pub fn settle_ask(&mut self, ticket: RequestTicket, result: Result<ChatReply, ChatError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match result {
            Ok(reply) => {
                self.answer = reply.text().map(str::to_string);
                if let Some(url) = reply.image() {
                    self.image_url = Some(url.to_string());
                    self.last_image_url = Some(url.to_string());
                }
                self.status = RequestStatus::Settled(Outcome::Answered);
            }
            Err(_) => {
                self.answer = Some(BACKEND_UNREACHABLE.to_string());
                self.status = RequestStatus::Settled(Outcome::Failed);
            }
        }
        true
    }

    /// Start a new chat. Local state is cleared here, before the call is made.
    pub fn begin_reset(&mut self) -> PendingReset {
        let ticket = self.issue_ticket();
        self.question.clear();
        self.answer = None;
        self.image_url = None;
        self.last_image_url = None;
        self.status = RequestStatus::Resetting { ticket };

        PendingReset {
            ticket,
            body: ResetRequest {
                session_id: self.session_id.clone(),
            },
        }
    }

    /// Apply the result of a reset. The response body is never looked at.
    pub fn settle_reset(&mut self, ticket: RequestTicket, result: Result<(), ChatError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.status = match result {
            Ok(()) => RequestStatus::Settled(Outcome::Reset),
            Err(_) => {
                self.answer = Some(RESET_FAILED.to_string());
                RequestStatus::Settled(Outcome::ResetFailed)
            }
        };
        true
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        let ticket = self.latest.unwrap_or_else(RequestTicket::zero).next();
        self.latest = Some(ticket);
        ticket
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        // settled statuses carry no ticket, so a response applies at most once
        self.latest == Some(ticket) && self.status.ticket() == Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asking(text: &str) -> ChatWidgetState {
        let mut state = ChatWidgetState::default();
        state.question = text.to_string();
        state
    }

    #[test]
    fn test_blank_question_is_noop() {
        for text in ["", "   ", "\n\t"] {
            let mut state = asking(text);
            let before = state.clone();
            assert!(state
                .begin_ask(&ImageKeywords::default(), Protocol::Chat)
                .is_none());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_begin_ask_clears_previous_exchange() {
        let mut state = asking("What is gravity?");
        state.answer = Some("old".into());
        state.image_url = Some("http://x/old.png".into());

        let pending = state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .unwrap();

        assert_eq!(state.question, "");
        assert_eq!(state.answer, None);
        assert_eq!(state.image_url, None);
        assert!(state.is_loading());
        assert!(!state.status.is_drawing());
        assert_eq!(
            pending.body,
            AskBody::Chat(ChatRequest {
                message: "What is gravity?".into(),
                session_id: SessionId::default(),
                is_image_request: false,
                last_image_url: Some("http://x/old.png".into()),
            })
        );
    }

    #[test]
    fn test_legacy_protocol_sends_question_only() {
        let mut state = asking("Draw a cat");
        let pending = state
            .begin_ask(&ImageKeywords::default(), Protocol::LegacyAsk)
            .unwrap();
        assert_eq!(pending.kind, RequestKind::Image);
        assert_eq!(
            pending.body,
            AskBody::Legacy(LegacyAskRequest {
                question: "Draw a cat".into()
            })
        );
    }

    #[test]
    fn test_failure_sets_error_and_clears_loading() {
        let mut state = asking("Draw a cat");
        let pending = state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .unwrap();
        assert!(state.status.is_drawing());

        assert!(state.settle_ask(pending.ticket, Err(ChatError::Status(500))));
        assert!(!state.is_loading());
        assert_eq!(state.answer.as_deref(), Some(BACKEND_UNREACHABLE));
        assert_eq!(state.image_url, None);
        assert_eq!(state.status, RequestStatus::Settled(Outcome::Failed));
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut state = asking("first");
        let first = state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .unwrap();
        let reset = state.begin_reset();
        assert!(reset.ticket > first.ticket);

        let late = ChatReply {
            reply: Some("first answer".into()),
            ..ChatReply::default()
        };
        assert!(!state.settle_ask(first.ticket, Ok(late)));
        assert_eq!(state.answer, None);
        assert!(state.is_loading());
    }

    #[test]
    fn test_second_ask_while_asking_is_refused() {
        let mut state = asking("first");
        let first = state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .unwrap();

        state.question = "second".into();
        assert!(state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .is_none());
        assert_eq!(state.question, "second");
        assert_eq!(state.status.ticket(), Some(first.ticket));

        let reply = ChatReply {
            reply: Some("first answer".into()),
            ..ChatReply::default()
        };
        assert!(state.settle_ask(first.ticket, Ok(reply)));
        assert_eq!(state.answer.as_deref(), Some("first answer"));
    }

    #[test]
    fn test_ask_during_reset_keeps_reset_failure() {
        let mut state = ChatWidgetState::default();
        let reset = state.begin_reset();

        state.question = "Draw a cat".into();
        assert!(state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .is_none());
        assert_eq!(state.status, RequestStatus::Resetting { ticket: reset.ticket });

        assert!(state.settle_reset(
            reset.ticket,
            Err(ChatError::Transport("offline".into()))
        ));
        assert_eq!(state.answer.as_deref(), Some(RESET_FAILED));
        assert!(!state.is_loading());

        // usable again once the reset has settled
        assert!(state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .is_some());
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut state = asking("hello");
        let pending = state
            .begin_ask(&ImageKeywords::default(), Protocol::Chat)
            .unwrap();
        assert!(state.settle_ask(pending.ticket, Ok(ChatReply::default())));
        assert!(!state.settle_ask(pending.ticket, Err(ChatError::Status(500))));
        assert_eq!(state.answer, None);
    }

    #[test]
    fn test_reset_failure_reports_error() {
        let mut state = asking("hello");
        state.answer = Some("hi!".into());
        let pending = state.begin_reset();
        assert_eq!(state.answer, None);
        assert_eq!(pending.body.session_id, SessionId::default());

        assert!(state.settle_reset(
            pending.ticket,
            Err(ChatError::Transport("offline".into()))
        ));
        assert_eq!(state.answer.as_deref(), Some(RESET_FAILED));
        assert_eq!(state.question, "");
        assert_eq!(state.image_url, None);
        assert!(!state.is_loading());
    }
}
