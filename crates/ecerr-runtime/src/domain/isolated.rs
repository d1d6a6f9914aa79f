//! Per-thread domain: one lazily created context per OS thread.
//!
//! Each thread's context is initialized on that thread's first access and
//! reclaimed at thread exit. No locking: threads never share a context.

use std::cell::RefCell;

use ecerr_core::ErrContext;

thread_local! {
    static CTX: RefCell<ErrContext> = RefCell::new(ErrContext::new());
}

pub fn with_active<R>(f: impl FnOnce(&mut ErrContext) -> R) -> R {
    CTX.with(|cell| f(&mut cell.borrow_mut()))
}

pub fn init_default() {
    // Touching the key forces the lazy initializer for this thread.
    CTX.with(|_| {});
}
