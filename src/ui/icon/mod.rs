// SPDX-License-Identifier: MPL-2.0
//! Icon glyph contract.
//!
//! Declarative boundary of the icon widget: a logical icon name, a numeric or
//! unit-suffixed size, a color, a looping-rotation (spin) flag, a static
//! rotation in degrees, and pressed/button flags, resolved into a glyph
//! visual. Unrecognized names pass through unchanged rather than erroring,
//! and custom content overrides the glyph when present.
//!
//! All failure handling here is best-effort fallback: an unparseable size
//! string is passed through raw instead of rejected, consistent with a UI
//! widget that must never crash on malformed attributes.

use iced::widget::{container, text};
use iced::{Background, Color, Element, Font};
use std::fmt;
use std::sync::OnceLock;

/// Default glyph size when no size attribute is given.
pub const DEFAULT_SIZE_PX: f32 = 24.0;

/// Pixels per `em` when resolving relative sizes for the Iced render sink.
const EM_PX: f32 = 16.0;

/// Background tint for glyphs in the pressed state.
const PRESSED_BACKGROUND: Color = Color::from_rgb(0.65, 0.65, 0.65);

/// Returns the symbols font used for glyph rendering.
///
/// Resolution happens once per process; repeated callers share the same
/// handle, replacing the original's per-document font-load flag with an
/// idempotent ensure-loaded guard.
pub fn glyph_font() -> Font {
    static FONT: OnceLock<Font> = OnceLock::new();
    *FONT.get_or_init(|| Font::with_name("Material Symbols Outlined"))
}

/// Maps a logical icon name to its glyph name.
///
/// Unmapped names are returned unchanged (identity mapping) so callers can
/// use raw glyph names directly.
#[must_use]
pub fn glyph(name: &str) -> &str {
    match name {
        "eo_page_view" => "content_copy",
        "eo_measure_view" => "align_items_stretch",
        "eo_reset_view" => "recenter",
        "eo_previous" => "arrow_left",
        "eo_next" => "arrow_right",
        "eo_voice_filter" => "checklist",
        "eo_sort_grid" => "dataset",
        "eo_sort_vertical" => "splitscreen_portrait",
        "eo_sort_horizontal" => "splitscreen_landscape",
        "eo_toggle_measures" => "pin",
        "eo_toggle_measures_off" => "capture",
        "eo_toggle_annotations" => "comment",
        "eo_toggle_annotations_off" => "comments_disabled",
        "eo_concordance_navigator" => "sync_alt",
        "eo_list_view" => "data_table",
        "eo_open_all" => "select_window",
        "eo_close_all" => "select_window_off",
        "eo_about" => "info",
        "eo_help" => "help",
        "eo_search" => "search",
        "eo_language_switch" => "language",
        other => other,
    }
}

// =============================================================================
// IconSize
// =============================================================================

/// Normalized icon size.
///
/// Parses the size attribute grammar of the icon contract: bare numbers are
/// pixels, `Nx` multipliers are ems, unit-suffixed strings pass through, and
/// anything unparseable falls back to raw passthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSize {
    /// Absolute size in pixels (`"32"` → 32px).
    Px(f32),
    /// Relative size in ems (`"2x"` → 2em).
    Em(f32),
    /// Unit-suffixed or unrecognized size passed through unchanged.
    Raw(String),
}

impl IconSize {
    /// Parses a size attribute. Empty input yields the default size.
    #[must_use]
    pub fn parse(size: &str) -> Self {
        let s = size.trim();
        if s.is_empty() {
            return Self::default();
        }
        if let Ok(value) = s.parse::<f32>() {
            if value.is_finite() && value >= 0.0 {
                return IconSize::Px(value);
            }
        }
        if let Some(multiplier) = s.strip_suffix('x') {
            if !multiplier.is_empty() && multiplier.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(value) = multiplier.parse::<f32>() {
                    return IconSize::Em(value);
                }
            }
        }
        IconSize::Raw(s.to_string())
    }

    /// Resolves the size to pixels for render sinks that need absolute
    /// dimensions. Raw sizes fall back to the default.
    #[must_use]
    pub fn resolve_px(&self) -> f32 {
        match self {
            IconSize::Px(value) => *value,
            IconSize::Em(value) => value * EM_PX,
            IconSize::Raw(_) => DEFAULT_SIZE_PX,
        }
    }
}

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Px(DEFAULT_SIZE_PX)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Px(value) => write!(f, "{}px", value),
            IconSize::Em(value) => write!(f, "{}em", value),
            IconSize::Raw(raw) => f.write_str(raw),
        }
    }
}

// =============================================================================
// Icon
// =============================================================================

/// What an icon resolves to once its name and content are considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Custom slotted content overrides the glyph.
    Custom,
    /// A glyph from the symbols font.
    Glyph(String),
    /// No name and no content: render nothing.
    Empty,
}

/// Declarative icon description.
///
/// Spin is a visual property ("looping rotation enabled") interpreted by the
/// render sink; no timer-driven state lives here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    name: String,
    size: IconSize,
    color: Option<Color>,
    spin: bool,
    rotation: Option<f32>,
    pressed: bool,
    button: bool,
}

impl Icon {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Enables looping rotation.
    #[must_use]
    pub fn spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    /// Static rotation in degrees. Ignored while spinning, matching the
    /// source widget's behavior.
    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    #[must_use]
    pub fn button(mut self, button: bool) -> Self {
        self.button = button;
        self
    }

    /// Whether looping rotation is enabled.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spin
    }

    /// Whether the icon behaves as a button.
    #[must_use]
    pub fn is_button(&self) -> bool {
        self.button
    }

    /// The static rotation to apply, if any. `None` while spinning.
    #[must_use]
    pub fn effective_rotation(&self) -> Option<f32> {
        if self.spin {
            None
        } else {
            self.rotation
        }
    }

    /// Resolves what this icon renders as, given whether the host slotted
    /// custom content into it.
    #[must_use]
    pub fn rendering(&self, has_custom_content: bool) -> Rendering {
        if has_custom_content {
            Rendering::Custom
        } else if self.name.is_empty() {
            Rendering::Empty
        } else {
            Rendering::Glyph(glyph(&self.name).to_string())
        }
    }

    /// Renders the icon as a glyph in the symbols font.
    ///
    /// Spin and static rotation are declarative properties; this sink only
    /// carries color, size, and the pressed tint.
    #[must_use]
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        match self.rendering(false) {
            Rendering::Glyph(glyph) => {
                let mut label = text(glyph).font(glyph_font()).size(self.size.resolve_px());
                if let Some(color) = self.color {
                    label = label.color(color);
                }
                if self.pressed {
                    container(label)
                        .style(|_| container::Style {
                            background: Some(Background::Color(PRESSED_BACKGROUND)),
                            ..container::Style::default()
                        })
                        .into()
                } else {
                    label.into()
                }
            }
            // Custom content is supplied through `view_custom`.
            Rendering::Custom | Rendering::Empty => text("").into(),
        }
    }

    /// Renders custom content in place of the glyph, sized like the glyph
    /// would be (the slotted-content fallback of the contract).
    #[must_use]
    pub fn view_custom<'a, Message: 'a>(
        &self,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let size = self.size.resolve_px();
        container(content).width(size).height(size).into()
    }
}
