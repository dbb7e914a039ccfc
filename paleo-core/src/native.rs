//! The native recognizer contract and its call-scoped stroke resource

use crate::point::Point;
use std::mem::ManuallyDrop;

/// A C-ABI stroke classifier.
///
/// Implementations wrap the four native primitives (construct, append,
/// classify, destroy) and the two sentinel codes that bound the valid
/// result range. [`crate::StrokeBinding`] drives them in a fixed order and
/// guarantees every created handle is destroyed exactly once.
pub trait NativeLibrary {
    /// Native stroke handle
    type Handle;

    /// Lower, exclusive bound of valid classification codes
    const UNRUN: i32;

    /// Upper, exclusive bound of valid classification codes
    const COUNT: i32;

    /// Allocate an empty native stroke with room for `capacity` points
    fn create_stroke(&self, capacity: usize) -> Self::Handle;

    /// Append a point to a native stroke
    fn append_point(&self, handle: &mut Self::Handle, point: Point);

    /// Classify a fully populated native stroke
    fn classify(&self, handle: &Self::Handle) -> i32;

    /// Release a native stroke
    fn destroy_stroke(&self, handle: Self::Handle);

    /// Get a human-readable name for this library
    fn name(&self) -> &'static str;

    /// Whether concurrent calls from several threads are safe
    fn is_reentrant(&self) -> bool {
        false
    }
}

/// A native stroke that lives for one recognition call.
///
/// Dropping it destroys the handle, so release happens on every exit path
/// including a panic unwinding out of [`NativeLibrary::classify`]. A hard
/// native fault (segfault, abort) does not unwind and is out of reach.
pub(crate) struct ScopedStroke<'lib, L: NativeLibrary> {
    library: &'lib L,
    handle: ManuallyDrop<L::Handle>,
}

impl<'lib, L: NativeLibrary> ScopedStroke<'lib, L> {
    pub(crate) fn new(library: &'lib L, capacity: usize) -> Self {
        tracing::trace!(library = library.name(), capacity, "allocating native stroke");
        Self {
            library,
            handle: ManuallyDrop::new(library.create_stroke(capacity)),
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.library.append_point(&mut self.handle, point);
    }

    pub(crate) fn classify(&self) -> i32 {
        self.library.classify(&self.handle)
    }
}

impl<L: NativeLibrary> Drop for ScopedStroke<'_, L> {
    fn drop(&mut self) {
        // SAFETY: drop runs once and the handle is never touched afterwards.
        let handle = unsafe { ManuallyDrop::take(&mut self.handle) };
        self.library.destroy_stroke(handle);
        tracing::trace!(library = self.library.name(), "released native stroke");
    }
}
