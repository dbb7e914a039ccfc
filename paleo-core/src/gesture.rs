//! Gesture type codes returned by the native classifier

use crate::error::{RecognitionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A successfully recognized gesture, as the native code it was returned as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GestureType(i32);

impl GestureType {
    /// Interpret a raw classifier code against the library's sentinels.
    ///
    /// Valid iff `unrun < code < count`.
    pub fn from_native(code: i32, unrun: i32, count: i32) -> Result<Self> {
        if code <= unrun || code >= count {
            return Err(RecognitionError::Unknown);
        }
        Ok(Self(code))
    }

    /// The native code, unchanged
    pub const fn code(self) -> i32 {
        self.0
    }

    /// The paleo shape this code denotes, if it is one of paleo's codes
    pub fn shape(self) -> Option<PaleoShape> {
        PaleoShape::try_from(self.0).ok()
    }
}

impl From<GestureType> for i32 {
    fn from(g: GestureType) -> Self {
        g.0
    }
}

impl From<PaleoShape> for GestureType {
    fn from(shape: PaleoShape) -> Self {
        Self(shape as i32)
    }
}

impl fmt::Display for GestureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape() {
            Some(shape) => write!(f, "{shape}"),
            None => write!(f, "gesture #{}", self.0),
        }
    }
}

/// Primitive shapes recognized by paleo (`pal_type_e`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum PaleoShape {
    /// A single point or a tiny scribble
    Dot = 0,
    /// Straight line
    Line = 1,
    /// Circle
    Circle = 2,
    /// Ellipse
    Ellipse = 3,
    /// Circular arc
    Arc = 4,
    /// Bezier-like curve
    Curve = 5,
    /// Spiral
    Spiral = 6,
    /// Helix
    Helix = 7,
    /// Combination of primitives
    Complex = 8,
    /// Indeterminate
    Indet = 9,
}

impl PaleoShape {
    /// paleo's "not yet run" sentinel
    pub const UNRUN: i32 = -1;

    /// One past the last paleo shape code
    pub const COUNT: i32 = 10;

    /// Every shape, in code order
    pub const ALL: [PaleoShape; 10] = [
        PaleoShape::Dot,
        PaleoShape::Line,
        PaleoShape::Circle,
        PaleoShape::Ellipse,
        PaleoShape::Arc,
        PaleoShape::Curve,
        PaleoShape::Spiral,
        PaleoShape::Helix,
        PaleoShape::Complex,
        PaleoShape::Indet,
    ];

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            PaleoShape::Dot => "dot",
            PaleoShape::Line => "line",
            PaleoShape::Circle => "circle",
            PaleoShape::Ellipse => "ellipse",
            PaleoShape::Arc => "arc",
            PaleoShape::Curve => "curve",
            PaleoShape::Spiral => "spiral",
            PaleoShape::Helix => "helix",
            PaleoShape::Complex => "complex",
            PaleoShape::Indet => "indeterminate",
        }
    }
}

impl TryFrom<i32> for PaleoShape {
    type Error = RecognitionError;

    fn try_from(code: i32) -> Result<Self> {
        if code <= Self::UNRUN || code >= Self::COUNT {
            return Err(RecognitionError::Unknown);
        }
        Ok(Self::ALL[code as usize])
    }
}

impl fmt::Display for PaleoShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
