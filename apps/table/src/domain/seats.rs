//! Seat / turn math helpers (4 fixed seats in clockwise order).
//!
//! Every engine shares this single source of truth for rotation,
//! partnership, and "who acts next".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// Clockwise rotation starting from North.
    pub const ALL: [Seat; PLAYERS] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub const fn index(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn from_index(index: usize) -> Seat {
        Self::ALL[index % PLAYERS]
    }

    /// Returns the seat `n` steps clockwise from `self`.
    #[inline]
    pub fn offset(self, n: usize) -> Seat {
        Self::from_index(self.index() + n)
    }

    #[inline]
    pub fn next(self) -> Seat {
        self.offset(1)
    }

    /// Partner sits opposite (index + 2).
    #[inline]
    pub fn partner(self) -> Seat {
        self.offset(2)
    }

    /// Clockwise rotation of all four seats beginning at `self`.
    pub fn rotation(self) -> [Seat; PLAYERS] {
        [self, self.offset(1), self.offset(2), self.offset(3)]
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    pub fn initial(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Seat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Seat::North),
            "E" | "EAST" => Ok(Seat::East),
            "S" | "SOUTH" => Ok(Seat::South),
            "W" | "WEST" => Ok(Seat::West),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCall,
                format!("Parse seat: {s}"),
            )),
        }
    }
}
