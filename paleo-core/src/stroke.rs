//! Host-side stroke buffer

use crate::config::defaults;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of points making up one gesture.
///
/// Insertion order is the temporal path of the pen and is passed to the
/// native library unchanged. No coordinate validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

/// Axis-aligned extent of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Smallest x
    pub min_x: i64,
    /// Smallest y
    pub min_y: i64,
    /// Largest x
    pub max_x: i64,
    /// Largest y
    pub max_y: i64,
}

impl Stroke {
    /// Create an empty stroke sized for a typical gesture
    pub fn new() -> Self {
        Self::with_capacity(defaults::INITIAL_CAPACITY)
    }

    /// Create an empty stroke with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn push(&mut self, x: i64, y: i64, t: i64) {
        self.points.push(Point::new(x, y, t));
    }

    /// Append a point stamped with the current time in microseconds
    pub fn push_now(&mut self, x: i64, y: i64) {
        self.points.push(Point::now(x, y));
    }

    /// Append an existing point
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All points in drawing order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points in drawing order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Extent of the stroke, `None` when empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.points[1..].iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Take the points out of the stroke
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Stroke {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Stroke {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Stroke {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Stroke {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Create an empty stroke with the default capacity hint
pub fn new_stroke() -> Stroke {
    Stroke::new()
}

/// Append a point to `stroke`
pub fn append_point(stroke: &mut Stroke, x: i64, y: i64, t: i64) {
    stroke.push(x, y, t);
}
