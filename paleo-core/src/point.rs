//! Timestamped stroke points

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single sample of a pen path.
///
/// All components are 64-bit so nothing is truncated on the host side,
/// whatever width the native `long` has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: i64,
    /// Y coordinate
    pub y: i64,
    /// Time the point was drawn
    pub t: i64,
}

impl Point {
    /// Create a point
    pub const fn new(x: i64, y: i64, t: i64) -> Self {
        Self { x, y, t }
    }

    /// Create a point stamped with the current time
    pub fn now(x: i64, y: i64) -> Self {
        Self::new(x, y, now_micros())
    }
}

impl From<(i64, i64, i64)> for Point {
    fn from((x, y, t): (i64, i64, i64)) -> Self {
        Self::new(x, y, t)
    }
}

impl From<Point> for (i64, i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y, p.t)
    }
}

/// Microseconds since the Unix epoch, 0 if the clock is set before it.
pub fn now_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_micros()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
