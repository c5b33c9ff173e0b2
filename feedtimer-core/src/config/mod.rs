//! Configuration types
//!
//! Board-agnostic configuration, embedded into the firmware as postcard
//! binary data produced from `timer.toml` at build time.

pub mod types;

pub use types::*;
