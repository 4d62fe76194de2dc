//! Shared engine handle.
//!
//! Wraps the search state in a lock so several threads (or the protocol
//! loop and a background search) can drive one engine.

mod controller;

pub use controller::{EngineController, SearchJob};
