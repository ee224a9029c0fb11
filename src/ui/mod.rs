// SPDX-License-Identifier: MPL-2.0
//! UI widgets and their state machines.

pub mod icon;
pub mod viewer;
