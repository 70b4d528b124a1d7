use thiserror::Error;

/// Input the user can fix and resubmit. The display strings are shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name")]
    EmptyName,
    #[error("Username must be at least 3 characters long")]
    TooShort,
    #[error("Username must be at most 20 characters long")]
    TooLong,
    #[error("This username is already taken. Please choose another one.")]
    NameTaken,
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Message cannot be longer than 500 characters")]
    MessageTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not logged in")]
    NotLoggedIn,
    #[error("not in a room")]
    NotInRoom,
    #[error("login was superseded before it completed")]
    StaleLogin,
}
