pub mod auth;
pub mod chat;
pub mod config;
mod index;
pub mod portfolio;
pub mod res;
pub mod rooms;
pub mod session;

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use chat::RoomRegistry;
use config::Config;
use session::ChatStates;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub registry: RoomRegistry,
    pub chats: ChatStates,
}

impl AppState {
    pub fn new(config: Config) -> AppState {
        AppState {
            config,
            registry: RoomRegistry::default(),
            chats: ChatStates::default(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(state.config.session_idle));

    Router::new()
        .route("/", get(index::index))
        .merge(auth::router())
        .merge(portfolio::router())
        .merge(rooms::router())
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

pub type AppResult<T> = Result<T, AppError>;
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}\n\n{}", self.0, self.0.backtrace()),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Where to go when a chat page is opened in the wrong state.
pub(crate) fn go_home() -> Response {
    Redirect::to("/").into_response()
}
