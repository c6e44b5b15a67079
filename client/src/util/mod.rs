//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (local storage, the
//! document root) from page and component logic to improve reuse and
//! testability.

pub mod dark_mode;
pub mod storage;
