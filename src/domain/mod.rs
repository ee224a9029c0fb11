// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the UI layer.

pub mod newtypes;

pub use newtypes::{scale_bounds, ScaleFactor};
