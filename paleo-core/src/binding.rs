//! Stroke recognition over a native library

use crate::config::RecognizerConfig;
use crate::error::Result;
use crate::gesture::GestureType;
use crate::native::{NativeLibrary, ScopedStroke};
use crate::stroke::Stroke;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Held around every serialized native call, across all bindings.
static NATIVE_LOCK: Mutex<()> = Mutex::new(());

/// Recognizes strokes with a [`NativeLibrary`].
///
/// Each call to [`recognize`](Self::recognize) builds its own native stroke
/// and releases it before returning. No state is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct StrokeBinding<L: NativeLibrary> {
    library: L,
    config: RecognizerConfig,
}

impl<L: NativeLibrary> StrokeBinding<L> {
    /// Create a binding with default configuration
    pub fn new(library: L) -> Self {
        Self::with_config(library, RecognizerConfig::default())
    }

    /// Create a binding with custom configuration
    pub fn with_config(library: L, config: RecognizerConfig) -> Self {
        Self { library, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Get the wrapped library
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Create an empty stroke sized by the configured capacity hint
    pub fn new_stroke(&self) -> Stroke {
        Stroke::with_capacity(self.config.initial_capacity)
    }

    /// Classify `stroke`.
    ///
    /// The points are copied into a fresh native stroke in insertion order,
    /// the native classifier runs, the native stroke is released, and the
    /// code is checked against the library's sentinels. An empty stroke is
    /// passed through like any other.
    pub fn recognize(&self, stroke: &Stroke) -> Result<GestureType> {
        let _serial = self
            .config
            .serializes(self.library.is_reentrant())
            .then(lock_native);

        tracing::debug!(
            library = self.library.name(),
            points = stroke.len(),
            "classifying stroke"
        );

        let code = {
            let mut native = ScopedStroke::new(&self.library, stroke.len());
            for point in stroke {
                native.push(*point);
            }
            native.classify()
        };

        GestureType::from_native(code, L::UNRUN, L::COUNT).inspect_err(|_| {
            tracing::warn!(
                library = self.library.name(),
                code,
                "native classifier returned out-of-range code"
            );
        })
    }
}

// A panic inside a serialized call poisons the lock; the native stroke was
// already released on unwind, so the next caller can proceed.
pub(crate) fn lock_native() -> MutexGuard<'static, ()> {
    NATIVE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
