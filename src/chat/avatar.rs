use std::fmt;

/// Colour and letter drawn for a user's avatar. Same name, same colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub hue: u16,
    pub lightness: u8,
    pub initial: char,
}

impl Avatar {
    pub fn for_user(username: &str, is_current_user: bool) -> Avatar {
        let mut hash: i64 = 0;
        for unit in username.encode_utf16() {
            let shifted = (hash as i32).wrapping_shl(5);
            hash = i64::from(unit) + (i64::from(shifted) - hash);
        }

        Avatar {
            hue: (hash % 360).unsigned_abs() as u16,
            lightness: if is_current_user { 60 } else { 50 },
            initial: username
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())
                .unwrap_or('?'),
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsl({}, 70%, {}%)", self.hue, self.lightness)
    }
}
