use serde::Serialize;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Shown on the room card, nothing reads it.
    pub occupancy: u32,
    pub is_private: bool,
}

impl Room {
    fn catalog(id: &str, name: &str, description: &str, occupancy: u32) -> Room {
        Room {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            occupancy,
            is_private: false,
        }
    }
}

/// The rooms offered on the room list.
///
/// Rooms made with [`RoomRegistry::create_room`] are handed straight to the
/// caller and never added here, so later listings keep showing the same
/// catalog.
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        RoomRegistry {
            rooms: vec![
                Room::catalog("general", "General Discussion", "Open chat for everyone", 12),
                Room::catalog("tech-talk", "Tech Talk", "Discussions about technology and programming", 8),
                Room::catalog("random", "Random", "Random conversations and fun topics", 15),
                Room::catalog("gaming", "Gaming", "Chat about games and gaming culture", 6),
            ],
        }
    }
}

impl RoomRegistry {
    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn create_room(&self, name: &str) -> Result<Room, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Room {
            id: slugify(name),
            name: name.to_owned(),
            description: String::new(),
            occupancy: 0,
            is_private: false,
        })
    }
}

/// Lower-cases `name` and turns every run of whitespace into one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_catalog_in_declaration_order() {
        let registry = RoomRegistry::default();
        let ids: Vec<_> = registry.list_rooms().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["general", "tech-talk", "random", "gaming"]);
    }

    #[test]
    fn create_room_slugifies_name() {
        let registry = RoomRegistry::default();
        let room = registry.create_room("My Room").unwrap();
        assert_eq!(room.id, "my-room");
        assert_eq!(room.name, "My Room");
    }

    #[test]
    fn created_rooms_are_not_listed() {
        // ad hoc rooms only live as long as the session that joins them
        let registry = RoomRegistry::default();
        registry.create_room("My Room").unwrap();
        assert_eq!(registry.list_rooms().len(), 4);
        assert!(registry.find_room("my-room").is_none());
    }

    #[test]
    fn create_room_rejects_blank_names() {
        let registry = RoomRegistry::default();
        assert_eq!(registry.create_room(""), Err(ValidationError::EmptyName));
        assert_eq!(registry.create_room(" \t "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Late  Night\tTalk"), "late-night-talk");
        assert_eq!(slugify("RUST"), "rust");
    }

    #[test]
    fn find_room_by_id() {
        let registry = RoomRegistry::default();
        assert_eq!(registry.find_room("tech-talk").unwrap().name, "Tech Talk");
        assert!(registry.find_room("nope").is_none());
    }
}
