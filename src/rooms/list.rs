use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{
    chat::RoomRegistry,
    go_home, include_res,
    res::{self, escape_html},
    session::{client_id, ChatStates},
    AppResult, AppState,
};

pub(crate) fn list_html(registry: &RoomRegistry, username: &str, name: &str, error: &str) -> Html<String> {
    let mut room_items = String::new();
    for room in registry.list_rooms() {
        let id = escape_html(&room.id);
        let room_name = escape_html(&room.name);
        let description = escape_html(&room.description);
        let occupancy = room.occupancy.to_string();
        room_items += &res::fill(
            include_res!(str, "/pages/rooms/room_item.html"),
            &[
                ("id", id.as_str()),
                ("name", room_name.as_str()),
                ("description", description.as_str()),
                ("occupancy", occupancy.as_str()),
            ],
        );
    }

    let username = escape_html(username);
    let name = escape_html(name);
    let error = escape_html(error);
    res::page(
        "Chat Rooms",
        &res::fill(
            include_res!(str, "/pages/rooms/list.html"),
            &[
                ("username", username.as_str()),
                ("name", name.as_str()),
                ("error", error.as_str()),
                ("room_items", room_items.as_str()),
            ],
        ),
    )
}

#[debug_handler(state = AppState)]
pub(crate) async fn room_list(
    State(registry): State<RoomRegistry>,
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    let Some(username) = chats
        .read(client, |state| state.user().map(|user| user.username().to_owned()))
        .await
    else {
        return Ok(go_home());
    };

    Ok(list_html(&registry, &username, "", "").into_response())
}
