// SPDX-License-Identifier: MPL-2.0
//! Pannable, zoomable image viewer.
//!
//! Split into two layers:
//!
//! - [`viewport`]: the transform state machine (scale, translation, gesture
//!   sessions) — pure, testable independent of any event-dispatch substrate.
//! - [`canvas`]: the Iced-facing widget that maps raw input events into
//!   viewport messages and draws the image with the computed transform.

pub mod canvas;
pub mod viewport;

pub use canvas::view;
pub use viewport::{Effect, Message, State};
