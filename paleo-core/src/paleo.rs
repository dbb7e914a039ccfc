//! libsr's paleo recognizer

use crate::error::Result;
use crate::gesture::{GestureType, PaleoShape};
use crate::native::NativeLibrary;
use crate::point::Point;
use crate::stroke::Stroke;
use crate::binding::lock_native;
use crate::StrokeBinding;
use paleo_sys as sys;
use std::alloc::{handle_alloc_error, Layout};
use std::ffi::{c_int, c_long};
use std::ptr::NonNull;
use std::sync::Once;

static PAL_INIT: Once = Once::new();

/// The paleo recognizer from libsr.
///
/// paleo keeps its working state in a process-global context, so it is not
/// reentrant; with the default [`crate::CallPolicy::Auto`] every call goes
/// through the binding's native lock.
#[derive(Debug, Clone, Copy)]
pub struct PaleoLibrary {
    _private: (),
}

impl PaleoLibrary {
    /// Initialize paleo's global context if this process has not yet
    pub fn new() -> Self {
        PAL_INIT.call_once(|| {
            tracing::debug!("initializing paleo");
            // SAFETY: resets paleo's static context; Once rules out races.
            unsafe { sys::pal_init() }
        });
        Self { _private: () }
    }

    /// The result of the most recent classification in this process.
    ///
    /// Fails with [`crate::RecognitionError::Unknown`] before the first
    /// classification, when paleo still reports its unrun sentinel.
    pub fn last_type(&self) -> Result<GestureType> {
        let _serial = lock_native();
        // SAFETY: reads paleo's static context under the native lock.
        let code = unsafe { sys::pal_last_type() };
        GestureType::from_native(code, Self::UNRUN, Self::COUNT)
    }
}

impl Default for PaleoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned `stroke_t` allocated by libsr
#[derive(Debug)]
pub struct PaleoStroke(NonNull<sys::stroke_t>);

impl NativeLibrary for PaleoLibrary {
    type Handle = PaleoStroke;

    const UNRUN: i32 = PaleoShape::UNRUN;
    const COUNT: i32 = PaleoShape::COUNT;

    fn create_stroke(&self, capacity: usize) -> PaleoStroke {
        // Only a hint; stroke_add_timed grows the array.
        let size = c_int::try_from(capacity).unwrap_or(c_int::MAX);
        // SAFETY: stroke_create has no preconditions.
        let raw = unsafe { sys::stroke_create(size) };
        match NonNull::new(raw) {
            Some(ptr) => PaleoStroke(ptr),
            None => handle_alloc_error(Layout::new::<sys::stroke_t>()),
        }
    }

    fn append_point(&self, handle: &mut PaleoStroke, point: Point) {
        // SAFETY: the handle is live and exclusively borrowed.
        unsafe {
            sys::stroke_add_timed(
                handle.0.as_ptr(),
                point.x as c_long,
                point.y as c_long,
                point.t as c_long,
            )
        }
    }

    fn classify(&self, handle: &PaleoStroke) -> i32 {
        // SAFETY: the handle is live; pal_recognize only reads it.
        unsafe { sys::pal_recognize(handle.0.as_ptr()) }
    }

    fn destroy_stroke(&self, handle: PaleoStroke) {
        // SAFETY: the handle came from stroke_create and is consumed here.
        unsafe { sys::stroke_destroy(handle.0.as_ptr()) }
    }

    fn name(&self) -> &'static str {
        "paleo"
    }
}

/// Classify `stroke` with libsr's paleo recognizer and default settings
pub fn recognize(stroke: &Stroke) -> Result<GestureType> {
    StrokeBinding::new(PaleoLibrary::new()).recognize(stroke)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_match_header() {
        assert_eq!(<PaleoLibrary as NativeLibrary>::UNRUN, sys::PAL_TYPE_UNRUN);
        assert_eq!(<PaleoLibrary as NativeLibrary>::COUNT, sys::PAL_TYPE_NUM);
        assert_eq!(PaleoShape::Circle as i32, sys::PAL_TYPE_CIRCLE);
        assert_eq!(PaleoShape::Indet as i32, sys::PAL_TYPE_INDET);
    }

    #[test]
    fn test_native_stroke_receives_points() {
        let lib = PaleoLibrary::new();
        let mut handle = lib.create_stroke(1);
        lib.append_point(&mut handle, Point::new(10, 10, 0));
        lib.append_point(&mut handle, Point::new(12, 11, 5));

        // SAFETY: the handle is live until destroy_stroke below.
        let raw = unsafe { handle.0.as_ref() };
        assert_eq!(raw.num, 2);
        // SAFETY: num points were written by stroke_add_timed.
        let second = unsafe { *raw.points.add(1) };
        assert_eq!((second.x, second.y, second.t, second.i), (12, 11, 5, 1));

        lib.destroy_stroke(handle);
    }

    fn assert_indeterminate(stroke: &Stroke) {
        let gesture = recognize(stroke).unwrap();
        assert_eq!(gesture.shape(), Some(PaleoShape::Indet));
        assert_eq!(gesture.code(), sys::PAL_TYPE_INDET);
    }

    #[test]
    fn test_empty_stroke_is_indeterminate() {
        assert_indeterminate(&Stroke::new());
    }

    #[test]
    fn test_single_point_is_indeterminate() {
        let stroke: Stroke = vec![Point::new(0, 0, 0)].into();
        assert_indeterminate(&stroke);
    }

    #[test]
    fn test_degenerate_stroke_is_indeterminate() {
        let stroke: Stroke = vec![Point::new(0, 0, 0); 40].into();
        assert_indeterminate(&stroke);
    }

    #[test]
    fn test_last_type_follows_recognize() {
        let lib = PaleoLibrary::new();
        let binding = StrokeBinding::new(lib);
        let stroke: Stroke = vec![Point::new(0, 0, 0)].into();

        let gesture = binding.recognize(&stroke).unwrap();
        assert_eq!(lib.last_type(), Ok(gesture));
        assert_eq!(gesture.shape(), Some(PaleoShape::Indet));
    }
}
