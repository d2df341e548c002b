//! Kido Chat Widget - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_kido_chat::dto::{AskBody, ChatReply, ResetRequest, RESET_PATH};
use contracts::domain::a001_kido_chat::error::ChatError;
use gloo_net::http::{Request, Response};
use serde::Serialize;

/// POST a JSON body, treating any non-2xx status as failure
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ChatError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ChatError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ChatError::Status(response.status()));
    }

    Ok(response)
}

/// Send a question to `/api/chat` or `/ask`, depending on the protocol
pub async fn send_ask(base: &str, body: &AskBody) -> Result<ChatReply, ChatError> {
    let url = api_url(base, body.path());
    let response = match body {
        AskBody::Chat(req) => post_json(&url, req).await?,
        AskBody::Legacy(req) => post_json(&url, req).await?,
    };

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| ChatError::Decode(e.to_string()))
}

/// Ask the backend to drop the conversation. The response body is not read.
pub async fn send_reset(base: &str, body: &ResetRequest) -> Result<(), ChatError> {
    post_json(&api_url(base, RESET_PATH), body).await?;
    Ok(())
}
