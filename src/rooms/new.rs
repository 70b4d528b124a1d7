use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::{
    chat::RoomRegistry,
    go_home, res,
    session::{client_id, ChatStates},
    AppResult, AppState,
};

use super::list::list_html;

#[derive(Debug, Deserialize)]
pub(crate) struct NewRoomForm {
    name: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_room(
    State(registry): State<RoomRegistry>,
    State(chats): State<ChatStates>,
    session: Session,

    Form(NewRoomForm { name }): Form<NewRoomForm>,
) -> AppResult<Response> {
    let client = client_id(&session).await?;

    // the room is handed to this session only, the catalog never sees it
    let outcome = chats
        .write(client, |state| {
            let username = match state.user() {
                Some(user) => user.username().to_owned(),
                None => return Err(None),
            };
            let room = registry
                .create_room(&name)
                .map_err(|err| Some((username, err)))?;
            match state.join(&room) {
                Ok(_) => Ok(room.id),
                Err(_) => Err(None),
            }
        })
        .await;

    match outcome {
        Ok(id) => {
            info!(%client, room = %id, "created room");
            Ok(Redirect::to("/room").into_response())
        }
        Err(Some((username, err))) => Ok(res::rejected(list_html(
            &registry,
            &username,
            &name,
            &err.to_string(),
        ))),
        Err(None) => Ok(go_home()),
    }
}
