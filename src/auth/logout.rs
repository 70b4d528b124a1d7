use axum::{debug_handler, extract::{Query, State}, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::{session::{client_id, ChatStates}, AppResult, AppState};

#[derive(Deserialize)]
pub(crate) struct LogoutQuery {
    pub(crate) return_url: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn logout(
    Query(LogoutQuery { return_url }): Query<LogoutQuery>,
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Redirect> {
    let client = client_id(&session).await?;
    chats.logout(client).await;
    session.clear().await;
    info!(%client, "logged out");

    // only paths on this site
    let return_url = return_url
        .filter(|url| url.starts_with('/') && !url.starts_with("//"))
        .unwrap_or("/".to_string());
    Ok(Redirect::to(&return_url))
}
