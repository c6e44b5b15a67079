//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections while reading/writing shared
//! state from Leptos context providers. Decisions that depend on state (which
//! auth affordance to show, which label a button carries) live in small pure
//! functions next to each component.

pub mod auth_modal;
pub mod features;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod pricing;
pub mod toaster;
