//! Rover heading in signed degrees.
//!
//! Rotation keeps the signed value produced by each step instead of
//! normalizing it, so `-90` and `270` are distinct headings that point the
//! same way.

use serde::{Deserialize, Serialize};

const QUARTER_TURN: i32 = 90;
const MIN_DEGREES: i32 = -270;
const MAX_DEGREES: i32 = 270;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Heading(i32);

impl Heading {
    pub const FORWARD: Heading = Heading(0);

    /// Accepts multiples of 90 in `-270..=270`, the values rotation can produce.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % QUARTER_TURN == 0 && (MIN_DEGREES..=MAX_DEGREES).contains(&degrees) {
            Some(Self(degrees))
        } else {
            None
        }
    }

    pub fn degrees(self) -> i32 {
        self.0
    }

    pub fn turn_left(self) -> Self {
        if self.0 >= -180 {
            Self(self.0 - QUARTER_TURN)
        } else {
            Self::FORWARD
        }
    }

    pub fn turn_right(self) -> Self {
        if self.0 <= 180 {
            Self(self.0 + QUARTER_TURN)
        } else {
            Self::FORWARD
        }
    }

    pub fn travel_direction(self) -> TravelDirection {
        match self.0.rem_euclid(360) {
            0 => TravelDirection::Up,
            90 => TravelDirection::Right,
            180 => TravelDirection::Down,
            _ => TravelDirection::Left,
        }
    }

    /// Compass needle rotation; the dial turns against the rover.
    pub fn needle_degrees(self) -> f32 {
        -(self.0 as f32)
    }

    pub fn sprite_degrees(self) -> f32 {
        self.0 as f32
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self::FORWARD
    }
}

impl TryFrom<i32> for Heading {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
            .ok_or_else(|| format!("heading {} is not a quarter turn in -270..=270", degrees))
    }
}

impl From<Heading> for i32 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelDirection {
    Up,
    Right,
    Down,
    Left,
}

impl TravelDirection {
    pub fn reversed(self) -> Self {
        match self {
            TravelDirection::Up => TravelDirection::Down,
            TravelDirection::Right => TravelDirection::Left,
            TravelDirection::Down => TravelDirection::Up,
            TravelDirection::Left => TravelDirection::Right,
        }
    }

    pub fn unit_delta(self) -> (i32, i32) {
        match self {
            TravelDirection::Up => (0, -1),
            TravelDirection::Right => (1, 0),
            TravelDirection::Down => (0, 1),
            TravelDirection::Left => (-1, 0),
        }
    }
}
