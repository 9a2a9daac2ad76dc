use std::{cell::Cell, fmt::Display};

use parking_lot::Mutex;

/// Represents a trait responsible for handling diagnostics in the scanner.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

impl<T, H: Handler<T> + ?Sized> Handler<T> for &H {
    fn receive(&self, error: T) {
        (**self).receive(error);
    }
}

/// Handler that prints every received diagnostic to stderr.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one diagnostic has been printed.
    #[must_use]
    pub fn has_printed(&self) -> bool {
        self.printed.get()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Handler that only counts the diagnostics it receives.
#[derive(Debug, Default)]
pub struct SilentHandler {
    received: Cell<usize>,
}

impl SilentHandler {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.received.get()
    }

    /// Whether at least one diagnostic has been received.
    #[must_use]
    pub fn has_received(&self) -> bool {
        self.count() > 0
    }
}

impl<T> Handler<T> for SilentHandler {
    fn receive(&self, _error: T) {
        self.received.set(self.received.get() + 1);
    }
}

/// Handler that discards everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}
}

/// Handler that collects the received diagnostics in arrival order.
///
/// The storage is guarded by a mutex, so one instance may be shared by scanners running on
/// different threads.
#[derive(Debug)]
pub struct Storage<T> {
    errors: Mutex<Vec<T>>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self {
            errors: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Storage<T> {
    /// Creates an empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }

    /// Consumes the storage and returns the collected diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.errors.into_inner()
    }
}

impl<T> Handler<T> for Storage<T> {
    fn receive(&self, error: T) {
        self.errors.lock().push(error);
    }
}
