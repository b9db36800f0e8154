//! Host-integration primitives shared by the clockdial component crates.
//!
//! The selector core never talks to a windowing system or a renderer; its
//! entire outward surface is "the host hands us closures and shared state".
//! This crate provides the two building blocks for that surface:
//!
//! - [`Callback`] / [`CallbackWith`]: stable, identity-comparable closure
//!   handles that can live inside `PartialEq` args structs.
//! - [`State`]: a cheap, thread-safe handle to a shared mutable value, so a
//!   host can own a controller across an open/close cycle.
#![deny(missing_docs, clippy::unwrap_used)]

mod prop;
mod state;

pub use prop::{Callback, CallbackWith, Slot};
pub use state::State;
