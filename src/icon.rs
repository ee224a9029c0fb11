// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! Rasterizes the embedded project SVG into an RGBA window icon at startup.
//! Failures are logged and degrade to the platform's default icon; a missing
//! title-bar glyph is never worth refusing to launch over.

use iced::window::{icon, Icon};
use resvg::usvg;

// Embedded so packaging does not need to locate assets on disk.
const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to an RGBA buffer for the window title
/// bar. Returns `None` (and logs why) if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("window icon SVG failed to parse: {err}");
            return None;
        }
    };

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let Some(mut pixmap) = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE) else {
        log::warn!("window icon pixmap allocation failed");
        return None;
    };
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    match icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon conversion failed: {err}");
            None
        }
    }
}
