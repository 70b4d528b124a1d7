use serde::Serialize;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::{Room, User, ValidationError};

/// Demo users present in every room, whichever room it is.
pub const SEED_USERS: [&str; 2] = ["Alice", "Bob"];

pub const MESSAGE_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub username: String,
    /// Raw text as typed, see [`super::format::format_content`] for display.
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub room_id: String,
}

/// A joined room: who is "present" and the message log.
///
/// The log is append-only and ordered by timestamp. Consumed by
/// [`RoomSession::leave`].
#[derive(Debug, Clone)]
pub struct RoomSession {
    room_id: String,
    room_name: String,
    member: String,
    roster: Vec<String>,
    messages: Vec<Message>,
}

impl RoomSession {
    pub fn join(room: &Room, user: &User) -> RoomSession {
        Self::join_at(room, user, OffsetDateTime::now_utc())
    }

    pub fn join_at(room: &Room, user: &User, now: OffsetDateTime) -> RoomSession {
        let mut roster = vec![user.username().to_owned()];
        for seed in SEED_USERS {
            if !roster.iter().any(|name| name == seed) {
                roster.push(seed.to_owned());
            }
        }

        let seed_message = |username: &str, content: &str, ago: i64| Message {
            id: Uuid::now_v7(),
            username: username.to_owned(),
            content: content.to_owned(),
            timestamp: now - Duration::seconds(ago),
            room_id: room.id.clone(),
        };
        let messages = vec![
            seed_message(SEED_USERS[0], "Welcome to the chat room!", 300),
            seed_message(SEED_USERS[1], "Hey everyone! How is everyone doing today?", 180),
        ];

        RoomSession {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            member: user.username().to_owned(),
            roster,
            messages,
        }
    }

    pub fn send_message(&mut self, text: &str) -> Result<&Message, ValidationError> {
        self.send_message_at(text, OffsetDateTime::now_utc())
    }

    pub fn send_message_at(&mut self, text: &str, now: OffsetDateTime) -> Result<&Message, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        if text.chars().count() > MESSAGE_MAX {
            return Err(ValidationError::MessageTooLong);
        }

        // never earlier than the last entry, even if the clock stepped back
        let timestamp = match self.messages.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        self.messages.push(Message {
            id: Uuid::now_v7(),
            username: self.member.clone(),
            content: text.to_owned(),
            timestamp,
            room_id: self.room_id.clone(),
        });
        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn leave(self) {}

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// The user who joined.
    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn is_present(&self, username: &str) -> bool {
        self.roster.iter().any(|name| name == username)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::chat::RoomRegistry;

    fn general() -> Room {
        RoomRegistry::default().find_room("general").unwrap().clone()
    }

    fn dave() -> User {
        User::new("dave").unwrap()
    }

    #[test]
    fn join_seeds_roster_and_messages() {
        let now = datetime!(2024-05-01 12:00 UTC);
        let session = RoomSession::join_at(&general(), &dave(), now);

        assert_eq!(session.roster(), ["dave", "Alice", "Bob"]);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].username, "Alice");
        assert_eq!(session.messages()[0].timestamp, now - Duration::seconds(300));
        assert_eq!(session.messages()[1].username, "Bob");
        assert_eq!(session.messages()[1].timestamp, now - Duration::seconds(180));
        assert!(session.messages().iter().all(|m| m.room_id == "general"));
    }

    #[test]
    fn seeds_do_not_depend_on_room() {
        let room = RoomRegistry::default().create_room("Book Club").unwrap();
        let session = RoomSession::join(&room, &dave());
        assert_eq!(session.roster().len(), 3);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.room_id(), "book-club");
        assert_eq!(session.room_name(), "Book Club");
    }

    #[test]
    fn blank_messages_are_rejected() {
        let mut session = RoomSession::join(&general(), &dave());
        assert_eq!(session.send_message("").unwrap_err(), ValidationError::EmptyMessage);
        assert_eq!(session.send_message("   ").unwrap_err(), ValidationError::EmptyMessage);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn long_messages_are_rejected() {
        let mut session = RoomSession::join(&general(), &dave());
        assert!(session.send_message(&"x".repeat(MESSAGE_MAX)).is_ok());
        assert_eq!(
            session.send_message(&"x".repeat(MESSAGE_MAX + 1)).unwrap_err(),
            ValidationError::MessageTooLong
        );
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn send_appends_one_message() {
        let mut session = RoomSession::join(&general(), &dave());
        let before = session.messages().to_vec();

        let sent = session.send_message("hello").unwrap().clone();
        assert_eq!(sent.username, "dave");
        assert_eq!(sent.content, "hello");
        assert_eq!(sent.room_id, "general");
        let drift = OffsetDateTime::now_utc() - sent.timestamp;
        assert!(drift >= Duration::ZERO && drift < Duration::seconds(5));

        assert_eq!(session.messages().len(), before.len() + 1);
        assert_eq!(&session.messages()[..before.len()], &before[..]);
        assert_eq!(session.messages().last(), Some(&sent));
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let now = datetime!(2024-05-01 12:00 UTC);
        let mut session = RoomSession::join_at(&general(), &dave(), now);
        session.send_message_at("first", now).unwrap();
        let second = session.send_message_at("second", now - Duration::minutes(10)).unwrap();
        assert_eq!(second.timestamp, now);

        let stamps: Vec<_> = session.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn message_ids_are_unique() {
        let mut session = RoomSession::join(&general(), &dave());
        for i in 0..10 {
            session.send_message(&format!("msg {i}")).unwrap();
        }
        let mut ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn member_is_present() {
        let session = RoomSession::join(&general(), &dave());
        assert_eq!(session.member(), "dave");
        assert!(session.is_present("dave"));
        assert!(session.is_present("Alice"));
        assert!(!session.is_present("eve"));
    }
}
