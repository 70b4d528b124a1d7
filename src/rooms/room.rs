use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::info;

use crate::{
    chat::{
        format::{format_content, format_time},
        Avatar, ChatError, RoomRegistry, RoomSession,
    },
    go_home, include_res,
    res::{self, escape_html},
    session::{client_id, ChatStates},
    AppResult, AppState,
};

pub(crate) fn room_html(session: &RoomSession, draft: &str, error: &str) -> Html<String> {
    let me = session.member();

    let mut members = String::new();
    for name in session.roster() {
        let is_me = name == me;
        let avatar = Avatar::for_user(name, is_me);
        let color = avatar.to_string();
        let initial = escape_html(&avatar.initial.to_string());
        let label = if is_me { "You".to_owned() } else { escape_html(name) };
        members += &res::fill(
            include_res!(str, "/pages/rooms/member.html"),
            &[
                ("color", color.as_str()),
                ("initial", initial.as_str()),
                ("you_class", if is_me { " you" } else { "" }),
                ("label", label.as_str()),
            ],
        );
    }

    let mut messages = String::new();
    for message in session.messages() {
        let avatar = Avatar::for_user(&message.username, message.username == me);
        let id = message.id.to_string();
        let color = avatar.to_string();
        let initial = escape_html(&avatar.initial.to_string());
        let username = escape_html(&message.username);
        let time = format_time(message.timestamp);
        let content = format_content(&message.content);
        messages += &res::fill(
            include_res!(str, "/pages/rooms/message.html"),
            &[
                ("id", id.as_str()),
                ("color", color.as_str()),
                ("initial", initial.as_str()),
                ("username", username.as_str()),
                ("time", time.as_str()),
                ("content", content.as_str()),
            ],
        );
    }

    let room_name = escape_html(session.room_name());
    let online = session.roster().len().to_string();
    let draft = escape_html(draft);
    let error = escape_html(error);
    res::page(
        session.room_name(),
        &res::fill(
            include_res!(str, "/pages/rooms/room.html"),
            &[
                ("room_name", room_name.as_str()),
                ("online", online.as_str()),
                ("members", members.as_str()),
                ("messages", messages.as_str()),
                ("draft", draft.as_str()),
                ("error", error.as_str()),
            ],
        ),
    )
}

#[debug_handler(state = AppState)]
pub(crate) async fn join(
    State(registry): State<RoomRegistry>,
    State(chats): State<ChatStates>,
    session: Session,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    let Some(room) = registry.find_room(&id) else {
        return Ok(res::sorry("room"));
    };

    match chats.write(client, |state| state.join(room).map(|_| ())).await {
        Ok(()) => {
            info!(%client, room = %room.id, "joined room");
            Ok(Redirect::to("/room").into_response())
        }
        Err(ChatError::NotLoggedIn) => Ok(go_home()),
        Err(err) => Err(err.into()),
    }
}

#[debug_handler(state = AppState)]
pub(crate) async fn room(
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    let page = chats
        .read(client, |state| state.room().map(|room| room_html(room, "", "")))
        .await;

    Ok(match page {
        Some(page) => page.into_response(),
        None => go_home(),
    })
}

#[debug_handler(state = AppState)]
pub(crate) async fn leave(
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    if chats.write(client, |state| state.leave()).await.is_ok() {
        info!(%client, "left room");
    }
    Ok(Redirect::to("/r").into_response())
}
