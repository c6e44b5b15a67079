//! Session plumbing against the hosted auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the boundary the page consumes (query once, subscribe,
//! sign in/out), `listeners` the cancellable subscription registry,
//! `supabase` the concrete REST client, and `manager` the session manager
//! that mirrors provider events into UI state.

pub mod listeners;
pub mod manager;
pub mod provider;
pub mod supabase;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
