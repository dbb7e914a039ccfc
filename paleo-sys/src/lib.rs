//! Raw FFI declarations for libsr's paleo recognizer
//!
//! These mirror `common/point.h`, `common/stroke.h` and `paleo/paleo.h`.
//! Nothing here is safe to call without upholding the C library's own
//! contracts; the `paleo-core` crate wraps them in a safe API.
//!
//! Linking against `libsr` is controlled by the `link` feature. Set
//! `LIBSR_LIB_DIR` to the directory holding the built library and
//! `LIBSR_STATIC` to link the static archive instead of the shared one.

#![allow(non_camel_case_types)]

use libc::{c_int, c_long, c_void};

/// A point with coordinates in space, time and index (`point_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct point_t {
    /// X coordinate
    pub x: c_long,
    /// Y coordinate
    pub y: c_long,
    /// Time the point was drawn
    pub t: c_long,
    /// Index within the owning stroke
    pub i: c_long,
}

/// A growable array of points (`stroke_t`).
#[repr(C)]
#[derive(Debug)]
pub struct stroke_t {
    /// Number of points in use
    pub num: c_long,
    /// Allocated capacity of `points`
    pub size: c_long,
    /// The points
    pub points: *mut point_t,
}

/// Recognition result codes (`pal_type_e`).
pub type pal_type_e = c_int;

pub const PAL_TYPE_UNRUN: pal_type_e = -1;
pub const PAL_TYPE_DOT: pal_type_e = 0;
pub const PAL_TYPE_LINE: pal_type_e = 1;
pub const PAL_TYPE_CIRCLE: pal_type_e = 2;
pub const PAL_TYPE_ELLIPSE: pal_type_e = 3;
pub const PAL_TYPE_ARC: pal_type_e = 4;
pub const PAL_TYPE_CURVE: pal_type_e = 5;
pub const PAL_TYPE_SPIRAL: pal_type_e = 6;
pub const PAL_TYPE_HELIX: pal_type_e = 7;
pub const PAL_TYPE_COMPLEX: pal_type_e = 8;
pub const PAL_TYPE_INDET: pal_type_e = 9;
/// One past the last valid code.
pub const PAL_TYPE_NUM: pal_type_e = 10;

extern "C" {
    /// Creates a stroke with no points and room for `size` of them.
    pub fn stroke_create(size: c_int) -> *mut stroke_t;

    /// Appends a timed point, growing the array when full.
    pub fn stroke_add_timed(stroke: *mut stroke_t, x: c_long, y: c_long, t: c_long);

    /// Resets the recognizer's global context.
    pub fn pal_init();

    /// Classifies `stroke`. Does not take ownership of it.
    pub fn pal_recognize(stroke: *const stroke_t) -> pal_type_e;

    /// Returns the result of the most recent `pal_recognize` call.
    pub fn pal_last_type() -> pal_type_e;
}

/// Frees a stroke created by [`stroke_create`] together with its points.
///
/// `stroke.h` defines this as an `inline` function, so libsr does not
/// export a symbol for it.
///
/// # Safety
///
/// `stroke` must come from [`stroke_create`] and must not be used again.
pub unsafe fn stroke_destroy(stroke: *mut stroke_t) {
    if stroke.is_null() {
        return;
    }
    libc::free((*stroke).points as *mut c_void);
    libc::free(stroke as *mut c_void);
}
