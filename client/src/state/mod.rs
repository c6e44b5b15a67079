//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui`, `toast`) so each component
//! depends on a small focused model. `App` creates one `RwSignal` per model
//! and hands it down through Leptos context.

pub mod session;
pub mod toast;
pub mod ui;
