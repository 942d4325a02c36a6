//! Platform abstraction layer
//!
//! Handles browser input events. Everything here is plain Rust so it can be
//! driven from `web_sys` callbacks on wasm and from tests natively.

pub mod input;

pub use input::{Key, KeyboardState};
