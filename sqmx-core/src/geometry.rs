//! Geometry definitions shared by addressing and rotation
//!
//! Pure enums with no storage: which axis a line runs along, which way
//! content shifts, which way and how far a matrix turns, and which side of
//! a square a ring segment lies on.

/// Number of sides of a square ring
pub const SIDE_COUNT: usize = 4;

/// Orientation of a line of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub const fn opposite(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Direction content moves in when shifting lines cyclically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Columns move right, rows move down
    RightDown,
    /// Columns move left, rows move up
    LeftUp,
}

/// Sense of a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl Rotation {
    pub const fn opposite(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::Counterclockwise,
            Rotation::Counterclockwise => Rotation::Clockwise,
        }
    }
}

/// Rotation angle in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Angle {
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Angle {
    /// Convert from a number of quarter turns, reduced modulo 4
    pub const fn from_quarter_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            0 => Angle::Deg0,
            1 => Angle::Deg90,
            2 => Angle::Deg180,
            _ => Angle::Deg270,
        }
    }

    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// 90° and 270° flip rows and columns
    pub const fn is_odd(self) -> bool {
        self.quarter_turns() % 2 != 0
    }

    /// One quarter turn less, wrapping 0° to 270°
    pub const fn previous(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() as i64 - 1)
    }

    /// Angle that undoes this one when turned the same way
    pub const fn opposite(self) -> Self {
        Self::from_quarter_turns(-(self.quarter_turns() as i64))
    }
}

impl core::fmt::Display for Angle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}°", self.quarter_turns() as u16 * 90)
    }
}

/// Side of a square a ring segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    Up,
    Right,
    Down,
    Left,
}
