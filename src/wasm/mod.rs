//! WebAssembly bindings for the emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU,
//! screen sampler and bundled demo, enabling browser-based frontends.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
