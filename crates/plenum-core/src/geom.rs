//! Grid geometry: points and spread directions.
//!
//! Coordinates are signed so that a step off the grid edge produces an
//! ordinary out-of-range point instead of wrapping. Bounds checks live
//! with the grid itself.

use std::fmt;

/// The direction a quantity of pressure travelled to reach a cell.
///
/// `None` marks arrivals that did not travel through the grid at all,
/// such as a hop across a connection net or a fill pass entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No direction of travel.
    #[default]
    None,
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
}

impl Direction {
    /// The reverse direction. [`Direction::None`] is its own reverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use plenum_core::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::None.opposite(), Direction::None);
    /// ```
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The (dx, dy) offset of one step in this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// A cell coordinate. `x` grows rightward, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// Builds a point from column and row indices.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The point one step away in `dir`. Stepping [`Direction::None`]
    /// returns the point itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use plenum_core::{Direction, Point};
    ///
    /// let at = Point::new(3, 5);
    /// assert_eq!(at.step(Direction::Up), Point::new(3, 4));
    /// assert_eq!(at.step(Direction::None), at);
    /// ```
    #[must_use]
    pub fn step(self, dir: Direction) -> Point {
        let (dx, dy) = dir.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point::new(x, y)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
