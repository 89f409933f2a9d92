#![doc(test(attr(deny(warnings))))]

//! Folder Budget offers the expense-folder data model, mutation and
//! aggregation logic, and per-user JSON persistence that power a personal
//! finance tracker UI.

pub mod budget;
pub mod errors;
pub mod session;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Folder Budget tracing initialized.");
    });
}
