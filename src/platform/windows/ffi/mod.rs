//! FFI helpers for Windows APIs.
//!
//! Conversions between crate types and the raw types `user32` expects.

pub mod types;

pub use types::*;
