use serde::Serialize;

use super::ValidationError;

/// Names nobody may log in as, compared case-insensitively.
pub const RESERVED_USERNAMES: [&str; 4] = ["admin", "moderator", "alice", "bob"];

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(name: &str) -> Result<User, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let len = name.chars().count();
        if len < USERNAME_MIN {
            return Err(ValidationError::TooShort);
        }
        if len > USERNAME_MAX {
            return Err(ValidationError::TooLong);
        }

        let lower = name.to_lowercase();
        if RESERVED_USERNAMES.contains(&lower.as_str()) {
            return Err(ValidationError::NameTaken);
        }

        Ok(User { username: name.to_owned() })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
