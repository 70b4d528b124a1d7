use std::{collections::HashMap, sync::Arc};

use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{chat::ChatState, AppResult};

pub const CLIENT_ID: &str = "client_id";

/// The browser's id, handed out on its first request.
pub async fn client_id(session: &Session) -> AppResult<Uuid> {
    if let Some(id) = session.get::<Uuid>(CLIENT_ID).await? {
        return Ok(id);
    }

    let id = Uuid::now_v7();
    session.insert(CLIENT_ID, id).await?;
    Ok(id)
}

/// Chat state per browser. Held in memory only; requests from the same
/// browser go through the lock one at a time, so a logout that lands while a
/// login is waiting is seen by it. Browsers with nothing but a logged-out
/// state have no entry.
#[derive(Clone, Default)]
pub struct ChatStates(Arc<RwLock<HashMap<Uuid, Entry>>>);

struct Entry {
    state: ChatState,
    seen: OffsetDateTime,
}

impl ChatStates {
    pub async fn read<T>(&self, client: Uuid, f: impl FnOnce(&ChatState) -> T) -> T {
        let mut states = self.0.write().await;
        match states.get_mut(&client) {
            Some(entry) => {
                entry.seen = OffsetDateTime::now_utc();
                f(&entry.state)
            }
            None => f(&ChatState::default()),
        }
    }

    pub async fn write<T>(&self, client: Uuid, f: impl FnOnce(&mut ChatState) -> T) -> T {
        let mut states = self.0.write().await;
        let mut state = states.remove(&client).map(|entry| entry.state).unwrap_or_default();
        let out = f(&mut state);
        if !state.is_idle() {
            let seen = OffsetDateTime::now_utc();
            states.insert(client, Entry { state, seen });
        }
        out
    }

    /// Logs the browser out and drops what was kept for it.
    pub async fn logout(&self, client: Uuid) {
        let mut states = self.0.write().await;
        if let Some(mut entry) = states.remove(&client) {
            entry.state.logout();
        }
    }

    /// Drops browsers not seen for longer than `idle`, the way their
    /// sessions expire.
    pub async fn prune(&self, idle: Duration) -> usize {
        let mut states = self.0.write().await;
        let before = states.len();
        let now = OffsetDateTime::now_utc();
        states.retain(|_, entry| now - entry.seen < idle);
        before - states.len()
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
