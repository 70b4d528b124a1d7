use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_sessions::Session;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    chat::{format::format_content, ChatError, Message},
    go_home, res,
    session::{client_id, ChatStates},
    AppResult, AppState,
};

use super::room::room_html;

#[derive(Deserialize)]
pub(crate) struct SendMessageForm {
    content: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn send_msg(
    State(chats): State<ChatStates>,
    session: Session,

    Form(SendMessageForm { content }): Form<SendMessageForm>,
) -> AppResult<Response> {
    let client = client_id(&session).await?;

    let sent = chats
        .write(client, |state| {
            let sent = state.send_message(&content).map(|message| message.id);
            match sent {
                Ok(id) => Ok(id),
                Err(ChatError::Validation(err)) => Err(state
                    .room()
                    .map(|room| room_html(room, &content, &err.to_string()))),
                Err(_) => Err(None),
            }
        })
        .await;

    Ok(match sent {
        Ok(id) => {
            info!(%client, %id, "message sent");
            Redirect::to("/room").into_response()
        }
        Err(Some(page)) => {
            debug!(%client, "message rejected");
            res::rejected(page)
        }
        Err(None) => go_home(),
    })
}

/// A log entry as the client script sees it.
#[derive(Serialize)]
pub(crate) struct MessageView {
    id: Uuid,
    username: String,
    content: String,
    html: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        MessageView {
            id: message.id,
            username: message.username.clone(),
            content: message.content.clone(),
            html: format_content(&message.content),
            timestamp: message.timestamp,
        }
    }
}

#[debug_handler(state = AppState)]
pub(crate) async fn messages(
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    let log = chats
        .read(client, |state| {
            state
                .room()
                .map(|room| room.messages().iter().map(MessageView::from).collect::<Vec<_>>())
        })
        .await;

    Ok(match log {
        Some(log) => Json(log).into_response(),
        None => res::sorry("room"),
    })
}
