//! Serialization and deserialization for card types

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Strain, Suit, STRAIN_ORDER};

/// Wire names; a suit shares the name of its strain.
fn strain_name(strain: Strain) -> &'static str {
    match strain {
        Strain::Clubs => "CLUBS",
        Strain::Diamonds => "DIAMONDS",
        Strain::Hearts => "HEARTS",
        Strain::Spades => "SPADES",
        Strain::NoTrump => "NO_TRUMP",
    }
}

fn strain_from_name(name: &str) -> Option<Strain> {
    STRAIN_ORDER.into_iter().find(|s| strain_name(*s) == name)
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(strain_name(Strain::from(*self)))
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        strain_from_name(&name)
            .and_then(|s| Suit::try_from(s).ok())
            .ok_or_else(|| de::Error::custom(format!("Invalid suit: {name}")))
    }
}

impl Serialize for Strain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(strain_name(*self))
    }
}

impl<'de> Deserialize<'de> for Strain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        strain_from_name(&name).ok_or_else(|| de::Error::custom(format!("Invalid strain: {name}")))
    }
}

// Cards travel as their two-character token, e.g. "AS", "TD".
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let token: String = [self.rank.to_char(), self.suit.to_char()].into_iter().collect();
        serializer.serialize_str(&token)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse::<Card>()
            .map_err(de::Error::custom)
    }
}
