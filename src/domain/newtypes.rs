// SPDX-License-Identifier: MPL-2.0
//! Viewer newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Scale factor bounds (1× to 5×).
pub mod scale_bounds {
    /// Minimum scale factor. At minimum scale the image exactly fills the
    /// viewport on at least one axis.
    pub const MIN: f32 = 1.0;
    /// Maximum scale factor.
    pub const MAX: f32 = 5.0;
    /// Default scale factor (identity).
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Viewport scale factor, guaranteed to be within valid range (1×–5×).
///
/// This type ensures that scale values are always valid and finite,
/// eliminating the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default scale so a degenerate
    /// gesture can never poison persisted transform state.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self(scale_bounds::DEFAULT);
        }
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}
