//! Cards travel as their two-character token ("JS", "TD").
//!
//! `Suit` derives its serde form (`"SPADES"`) in `cards_types`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

// The effective suit is round state and is not serialized.
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_token())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
