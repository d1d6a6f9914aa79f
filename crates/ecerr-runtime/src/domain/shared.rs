//! Shared-mode domain: one process-wide context.
//!
//! This is the error slot the library's execution-context object embeds
//! when thread isolation is off. The usage contract is a single logical
//! thread of control; the mutex keeps a contract violation memory-safe,
//! but provides no ordering or deduplication between offending threads.
//! Under the contract the lock is never contended.

use std::sync::{Mutex, OnceLock};

use ecerr_core::ErrContext;

static SHARED: OnceLock<Mutex<ErrContext>> = OnceLock::new();

fn slot() -> &'static Mutex<ErrContext> {
    SHARED.get_or_init(|| Mutex::new(ErrContext::new()))
}

pub fn with_active<R>(f: impl FnOnce(&mut ErrContext) -> R) -> R {
    let mut guard = match slot().lock() {
        Ok(guard) => guard,
        // A poisoned lock still holds a structurally valid record.
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

pub fn init_default() {
    let _ = slot();
}
