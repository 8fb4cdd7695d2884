use parking_lot::Mutex;
use std::sync::Arc;

use crate::catalog::navigator::{Navigator, Step};

/// Navigator that can be handed to several threads.
///
/// The whole cursor sits behind one lock, held for the duration of each move.
pub struct SharedNavigator<'a, T, const N: usize> {
    inner: Arc<Mutex<Navigator<'a, T, N>>>,
}

impl<'a, T, const N: usize> Clone for SharedNavigator<'a, T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'a, T, const N: usize> SharedNavigator<'a, T, N> {
    pub fn new(navigator: Navigator<'a, T, N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(navigator)),
        }
    }

    pub fn current(&self) -> &'a T {
        self.inner.lock().current()
    }

    pub fn next(&self) -> &'a T {
        self.inner.lock().next()
    }

    pub fn previous(&self) -> &'a T {
        self.inner.lock().previous()
    }

    pub fn go(&self, step: Step) -> &'a T {
        self.inner.lock().go(step)
    }

    pub fn position(&self) -> usize {
        self.inner.lock().position()
    }
}
