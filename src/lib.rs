//! Drive a 5×5 WS2812 LED matrix as a one-digit display on the Pico 1 and 2.
//!
//! Two push buttons select the digit: button A increments, button B
//! decrements, wrapping 9→0 and 0→9. Both buttons share a single 200 ms
//! debounce window. A separate indicator LED blinks a 400 ms heartbeat while
//! the main loop runs.
//!
//! The pure pieces — glyph table, panel layout, frame rendering, and the
//! debounced digit selection state — build and test on the host with no
//! feature flags. The hardware modules ([`panel`], [`button`], [`indicator`],
//! [`app`]) require the `pico1` or `pico2` feature.
//!
//! # Glossary
//!
//! - **Glyph:** a 5×5 bitmap describing how a digit lights the matrix.
//! - **Panel layout:** the wiring-order mapping from grid cell to the strip's
//!   physical transmission index (serpentine for the reference panel).
//! - **Debounce window:** minimum time between accepted button events.
//! - **Frame:** one full 25-pixel buffer ready for transmission.
#![no_std]

// Compile-time checks: at most one board, and a board is required for `arm`.
#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "arm", not(any(feature = "pico1", feature = "pico2"))))]
compile_error!("The 'arm' feature requires a board feature: 'pico1' or 'pico2'");

// These modules require embassy_rp and are excluded on the host.
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod app;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod button;
pub mod digit;
mod error;
pub mod frame;
pub mod glyph;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod indicator;
pub mod layout;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod panel;
pub mod render;
pub mod select;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
