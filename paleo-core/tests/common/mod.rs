//! Instrumented stand-in for a native recognizer

#![allow(dead_code)]

use paleo_core::{NativeLibrary, Point};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub const UNRUN: i32 = -1;
pub const COUNT: i32 = 10;

/// What the stub classifier does when asked
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Return this code for any input
    Fixed(i32),
    /// Return the number of points received
    PointCount,
    /// Return this code for strokes of exactly `len` points, UNRUN otherwise
    ForLength { len: usize, code: i32 },
    /// Panic, standing in for a native fault
    Fault,
    /// Sleep, then return the code; used to observe overlapping calls
    Slow { code: i32, millis: u64 },
}

/// Stub library that counts handle traffic and records what it is fed.
#[derive(Debug)]
pub struct StubLibrary {
    behavior: Behavior,
    reentrant: bool,
    created: AtomicUsize,
    destroyed: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    capacities: Mutex<Vec<usize>>,
    classified: Mutex<Vec<Vec<Point>>>,
}

impl StubLibrary {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            reentrant: false,
            created: AtomicUsize::new(0),
            destroyed: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            capacities: Mutex::new(Vec::new()),
            classified: Mutex::new(Vec::new()),
        }
    }

    pub fn reentrant(mut self) -> Self {
        self.reentrant = true;
        self
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.created() - self.destroyed()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn capacities(&self) -> Vec<usize> {
        self.capacities.lock().unwrap().clone()
    }

    /// Point sequences seen by the classifier, one entry per call
    pub fn classified(&self) -> Vec<Vec<Point>> {
        self.classified.lock().unwrap().clone()
    }
}

/// Handle: the points the native side has received so far
#[derive(Debug)]
pub struct StubStroke {
    pub points: Vec<Point>,
}

impl NativeLibrary for StubLibrary {
    type Handle = StubStroke;
    const UNRUN: i32 = UNRUN;
    const COUNT: i32 = COUNT;

    fn create_stroke(&self, capacity: usize) -> StubStroke {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.capacities.lock().unwrap().push(capacity);
        StubStroke {
            points: Vec::with_capacity(capacity),
        }
    }

    fn append_point(&self, handle: &mut StubStroke, point: Point) {
        handle.points.push(point);
    }

    fn classify(&self, handle: &StubStroke) -> i32 {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.classified.lock().unwrap().push(handle.points.clone());

        let code = match self.behavior {
            Behavior::Fixed(code) => code,
            Behavior::PointCount => handle.points.len() as i32,
            Behavior::ForLength { len, code } => {
                if handle.points.len() == len {
                    code
                } else {
                    UNRUN
                }
            }
            Behavior::Fault => {
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                panic!("native classifier fault");
            }
            Behavior::Slow { code, millis } => {
                thread::sleep(Duration::from_millis(millis));
                code
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        code
    }

    fn destroy_stroke(&self, _handle: StubStroke) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_reentrant(&self) -> bool {
        self.reentrant
    }
}
