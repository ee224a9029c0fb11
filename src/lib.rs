// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` provides widgets for a document-viewing UI built with the
//! Iced GUI framework.
//!
//! The centerpiece is a pannable, zoomable image viewport: a bounded 2D
//! transform (scale + translation) over a fixed-aspect image inside a clipped
//! container, driven by wheel, drag, and pinch input. A small icon glyph
//! contract and a demo viewer application round out the crate.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod icon;
pub mod ui;
