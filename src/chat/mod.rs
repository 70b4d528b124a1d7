//! The demo chat: logging in, picking a room and talking in it.
//!
//! Nothing here does I/O or keeps anything past the owning [`ChatState`].

mod avatar;
mod error;
pub mod format;
mod registry;
mod room;
mod state;
mod user;

pub use avatar::Avatar;
pub use error::{ChatError, ValidationError};
pub use registry::{slugify, Room, RoomRegistry};
pub use room::{Message, RoomSession, MESSAGE_MAX, SEED_USERS};
pub use state::{view, ChatState, PendingLogin, View};
pub use user::{User, RESERVED_USERNAMES, USERNAME_MAX, USERNAME_MIN};
