use uuid::Uuid;

use super::{ChatError, Message, Room, RoomSession, User, ValidationError};

/// Everything one visitor has: who is logged in and the room they are in.
///
/// Logging in is two steps so that the caller can wait between them.
/// [`ChatState::begin_login`] validates the name and hands back a ticket,
/// [`ChatState::complete_login`] applies it. Anything that happens in between
/// (a logout, another login) makes the ticket stale. Ticket ids are unique
/// across states, so a ticket never matches a state created after its own
/// was discarded.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    user: Option<User>,
    room: Option<RoomSession>,
    pending: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    user: User,
    id: Uuid,
}

impl PendingLogin {
    pub fn username(&self) -> &str {
        self.user.username()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    RoomList,
    ChatRoom,
}

pub fn view(state: &ChatState) -> View {
    match (&state.user, &state.room) {
        (None, _) => View::Auth,
        (Some(_), None) => View::RoomList,
        (Some(_), Some(_)) => View::ChatRoom,
    }
}

impl ChatState {
    pub fn begin_login(&mut self, name: &str) -> Result<PendingLogin, ValidationError> {
        let user = User::new(name)?;
        let id = Uuid::now_v7();
        self.pending = Some(id);
        Ok(PendingLogin { user, id })
    }

    pub fn complete_login(&mut self, ticket: PendingLogin) -> Result<&User, ChatError> {
        if self.pending != Some(ticket.id) {
            return Err(ChatError::StaleLogin);
        }
        self.pending = None;
        self.room = None;
        Ok(&*self.user.insert(ticket.user))
    }

    pub fn login(&mut self, name: &str) -> Result<&User, ChatError> {
        let ticket = self.begin_login(name)?;
        self.complete_login(ticket)
    }

    /// Drops the user, their room and any login still in flight.
    pub fn logout(&mut self) {
        if let Some(room) = self.room.take() {
            room.leave();
        }
        self.user = None;
        self.pending = None;
    }

    pub fn join(&mut self, room: &Room) -> Result<&RoomSession, ChatError> {
        let user = self.user.as_ref().ok_or(ChatError::NotLoggedIn)?;
        if let Some(previous) = self.room.take() {
            previous.leave();
        }
        Ok(&*self.room.insert(RoomSession::join(room, user)))
    }

    pub fn send_message(&mut self, text: &str) -> Result<&Message, ChatError> {
        let room = self.room.as_mut().ok_or(ChatError::NotInRoom)?;
        Ok(room.send_message(text)?)
    }

    pub fn leave(&mut self) -> Result<(), ChatError> {
        self.room.take().ok_or(ChatError::NotInRoom)?.leave();
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn room(&self) -> Option<&RoomSession> {
        self.room.as_ref()
    }

    pub fn is_logging_in(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> View {
        view(self)
    }

    /// Logged out with no login in flight: nothing worth keeping.
    pub fn is_idle(&self) -> bool {
        self.user.is_none() && self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::RoomRegistry;

    fn general() -> Room {
        RoomRegistry::default().find_room("general").unwrap().clone()
    }

    #[test]
    fn starts_logged_out() {
        let state = ChatState::default();
        assert_eq!(state.view(), View::Auth);
        assert!(state.user().is_none());
        assert!(!state.is_logging_in());
    }

    #[test]
    fn login_and_errors() {
        let mut state = ChatState::default();
        assert_eq!(
            state.login("ab").unwrap_err(),
            ChatError::Validation(ValidationError::TooShort)
        );
        assert_eq!(
            state.login("ALICE").unwrap_err(),
            ChatError::Validation(ValidationError::NameTaken)
        );
        assert_eq!(state.view(), View::Auth);

        assert_eq!(state.login("dave").unwrap().username(), "dave");
        assert_eq!(state.user().map(User::username), Some("dave"));
        assert_eq!(state.view(), View::RoomList);
    }

    #[test]
    fn walks_the_views() {
        let mut state = ChatState::default();
        state.login("dave").unwrap();
        state.join(&general()).unwrap();
        assert_eq!(state.view(), View::ChatRoom);

        state.leave().unwrap();
        assert_eq!(state.view(), View::RoomList);
        assert_eq!(state.leave(), Err(ChatError::NotInRoom));

        state.join(&general()).unwrap();
        state.logout();
        assert_eq!(state.view(), View::Auth);
    }

    #[test]
    fn logout_ends_the_room_session() {
        let mut state = ChatState::default();
        state.login("dave").unwrap();
        state.join(&general()).unwrap();
        state.logout();

        assert!(state.user().is_none());
        assert!(state.room().is_none());
        assert_eq!(state.send_message("hi").unwrap_err(), ChatError::NotInRoom);
    }

    #[test]
    fn join_needs_a_user() {
        let mut state = ChatState::default();
        assert_eq!(state.join(&general()).unwrap_err(), ChatError::NotLoggedIn);
    }

    #[test]
    fn joining_again_replaces_the_room() {
        let registry = RoomRegistry::default();
        let mut state = ChatState::default();
        state.login("dave").unwrap();
        state.join(&general()).unwrap();
        state.send_message("in general").unwrap();

        let gaming = registry.find_room("gaming").unwrap();
        let session = state.join(gaming).unwrap();
        assert_eq!(session.room_id(), "gaming");
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn send_message_goes_to_the_room() {
        let mut state = ChatState::default();
        state.login("dave").unwrap();
        state.join(&general()).unwrap();

        assert_eq!(
            state.send_message("  ").unwrap_err(),
            ChatError::Validation(ValidationError::EmptyMessage)
        );
        let sent = state.send_message("hello").unwrap();
        assert_eq!(sent.username, "dave");
        assert_eq!(state.room().unwrap().messages().len(), 3);
    }

    #[test]
    fn pending_login_completes() {
        let mut state = ChatState::default();
        let ticket = state.begin_login("dave").unwrap();
        assert_eq!(ticket.username(), "dave");
        assert!(state.is_logging_in());
        assert_eq!(state.view(), View::Auth);

        state.complete_login(ticket).unwrap();
        assert!(!state.is_logging_in());
        assert_eq!(state.view(), View::RoomList);
    }

    #[test]
    fn logout_cancels_pending_login() {
        let mut state = ChatState::default();
        let ticket = state.begin_login("dave").unwrap();
        state.logout();

        assert_eq!(state.complete_login(ticket), Err(ChatError::StaleLogin));
        assert!(state.user().is_none());
        assert_eq!(state.view(), View::Auth);
    }

    #[test]
    fn newer_login_wins() {
        let mut state = ChatState::default();
        let first = state.begin_login("dave").unwrap();
        let second = state.begin_login("erin").unwrap();

        assert_eq!(state.complete_login(first), Err(ChatError::StaleLogin));
        assert_eq!(state.complete_login(second).unwrap().username(), "erin");
    }

    #[test]
    fn tickets_do_not_carry_over_to_a_new_state() {
        let mut old = ChatState::default();
        let ticket = old.begin_login("dave").unwrap();

        let mut fresh = ChatState::default();
        fresh.begin_login("erin").unwrap();
        assert_eq!(fresh.complete_login(ticket), Err(ChatError::StaleLogin));
        assert!(fresh.is_logging_in());
    }

    #[test]
    fn idle_until_logging_in() {
        let mut state = ChatState::default();
        assert!(state.is_idle());
        state.begin_login("dave").unwrap();
        assert!(!state.is_idle());
        state.logout();
        assert!(state.is_idle());
    }

    #[test]
    fn tickets_apply_once() {
        let mut state = ChatState::default();
        let ticket = state.begin_login("dave").unwrap();
        state.complete_login(ticket.clone()).unwrap();
        assert_eq!(state.complete_login(ticket), Err(ChatError::StaleLogin));
    }

    #[test]
    fn failed_validation_keeps_pending_login() {
        let mut state = ChatState::default();
        let ticket = state.begin_login("dave").unwrap();
        assert!(state.begin_login("x").is_err());
        assert!(state.complete_login(ticket).is_ok());
    }
}
