use axum::{debug_handler, extract::State, response::Redirect};
use tower_sessions::Session;

use crate::{chat::View, session::{client_id, ChatStates}, AppResult, AppState};

/// Sends the browser to whichever chat screen its state calls for.
#[debug_handler(state = AppState)]
pub(crate) async fn index(
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Redirect> {
    let client = client_id(&session).await?;
    let target = chats
        .read(client, |state| match state.view() {
            View::Auth => "/login",
            View::RoomList => "/r",
            View::ChatRoom => "/room",
        })
        .await;
    Ok(Redirect::to(target))
}
