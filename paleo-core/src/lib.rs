//! Safe binding for libsr's paleo stroke recognizer
//!
//! A [`Stroke`] is an ordered run of timestamped points collected on the
//! Rust side. [`StrokeBinding::recognize`] copies it into a native stroke,
//! runs the native classifier, releases the native stroke on every exit
//! path and turns the result code into a [`GestureType`] or a
//! [`RecognitionError`].
//!
//! The native side is abstracted by [`NativeLibrary`]. With the `native`
//! feature enabled, [`PaleoLibrary`] binds the real libsr recognizer.
//!
//! # Example
//!
//! ```rust
//! use paleo_core::{NativeLibrary, Point, StrokeBinding};
//!
//! // Any C-ABI classifier can sit behind the trait; this one counts points.
//! struct CountPoints;
//!
//! impl NativeLibrary for CountPoints {
//!     type Handle = Vec<Point>;
//!     const UNRUN: i32 = -1;
//!     const COUNT: i32 = 10;
//!
//!     fn create_stroke(&self, capacity: usize) -> Vec<Point> {
//!         Vec::with_capacity(capacity)
//!     }
//!     fn append_point(&self, handle: &mut Vec<Point>, point: Point) {
//!         handle.push(point);
//!     }
//!     fn classify(&self, handle: &Vec<Point>) -> i32 {
//!         handle.len() as i32
//!     }
//!     fn destroy_stroke(&self, _handle: Vec<Point>) {}
//!     fn name(&self) -> &'static str {
//!         "count-points"
//!     }
//! }
//!
//! let binding = StrokeBinding::new(CountPoints);
//! let mut stroke = binding.new_stroke();
//! stroke.push(10, 10, 0);
//! stroke.push(12, 11, 5);
//! stroke.push(15, 9, 10);
//!
//! let gesture = binding.recognize(&stroke).unwrap();
//! assert_eq!(gesture.code(), 3);
//! ```

#![warn(missing_docs)]

pub mod binding;
pub mod config;
pub mod error;
pub mod gesture;
pub mod native;
#[cfg(feature = "native")]
pub mod paleo;
pub mod point;
pub mod stroke;

// Re-export key types
pub use binding::StrokeBinding;
pub use config::{CallPolicy, RecognizerConfig, RecognizerConfigBuilder};
pub use error::{ConfigError, RecognitionError, Result};
pub use gesture::{GestureType, PaleoShape};
pub use native::NativeLibrary;
#[cfg(feature = "native")]
pub use paleo::{recognize, PaleoLibrary, PaleoStroke};
pub use point::Point;
pub use stroke::{append_point, new_stroke, BoundingBox, Stroke};
