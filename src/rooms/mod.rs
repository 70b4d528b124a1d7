mod list;
mod msg;
mod new;
mod room;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/r", get(list::room_list))
        .route("/r/new", post(new::new_room))
        .route("/r/{id}/join", post(room::join))
        .route("/room", get(room::room))
        .route("/room/msg", post(msg::send_msg))
        .route("/room/messages", get(msg::messages))
        .route("/room/leave", get(room::leave))
}
