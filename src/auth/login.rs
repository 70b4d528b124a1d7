use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{debug, info};

use crate::{
    chat::ChatError,
    config::Config,
    go_home, include_res,
    res::{self, escape_html},
    session::{client_id, ChatStates},
    AppResult, AppState,
};

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    username: String,
}

fn login_html(username: &str, error: &str) -> Html<String> {
    let username = escape_html(username);
    let error = escape_html(error);
    res::page(
        "Join ChatRoom",
        &res::fill(
            include_res!(str, "/pages/login.html"),
            &[("username", username.as_str()), ("error", error.as_str())],
        ),
    )
}

#[debug_handler(state = AppState)]
pub(crate) async fn login_page(
    State(chats): State<ChatStates>,
    session: Session,
) -> AppResult<Response> {
    let client = client_id(&session).await?;
    if chats.read(client, |state| state.user().is_some()).await {
        return Ok(go_home());
    }

    Ok(login_html("", "").into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn login(
    State(chats): State<ChatStates>,
    State(config): State<Config>,
    session: Session,

    Form(LoginForm { username }): Form<LoginForm>,
) -> AppResult<Response> {
    let client = client_id(&session).await?;

    let ticket = match chats.write(client, |state| state.begin_login(&username)).await {
        Ok(ticket) => ticket,
        Err(err) => {
            debug!(%client, %err, "login rejected");
            return Ok(res::rejected(login_html(&username, &err.to_string())));
        }
    };

    tokio::time::sleep(config.login_delay).await;

    let completed = chats
        .write(client, |state| {
            state
                .complete_login(ticket)
                .map(|user| user.username().to_owned())
        })
        .await;
    match completed {
        Ok(username) => {
            info!(%client, %username, "logged in");
            Ok(Redirect::to("/r").into_response())
        }
        Err(ChatError::StaleLogin) => {
            info!(%client, "login superseded while waiting");
            Ok(go_home())
        }
        Err(err) => Err(err.into()),
    }
}
