// SPDX-License-Identifier: MPL-2.0
//! Viewport transform state machine - pan and zoom managed together.
//!
//! Owns a bounded 2D transform (scale + translation) applied to a
//! fixed-aspect image inside a clipped container, and maps gesture messages
//! into transform updates under clamping invariants:
//!
//! - `scale` stays within [`scale_bounds::MIN`], [`scale_bounds::MAX`].
//! - `translate` stays within `[min(0, viewport − scaled), 0]` per axis, so
//!   the scaled image never reveals empty space on any edge. The bounds are
//!   scale-dependent and are recomputed on every mutation, never cached.
//!
//! Gesture tracking uses explicit session objects with a well-defined
//! open/close lifecycle instead of callback lifetimes: a session exists only
//! between its start and end messages, and continuation messages arriving
//! without an open session are silently ignored.

use crate::config::DEFAULT_WHEEL_ZOOM_STEP;
use crate::domain::ScaleFactor;
use iced::{Point, Size, Vector};

/// Transient state tracking an in-progress drag or pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single-pointer pan. `origin` is the pointer position minus the
    /// translation at press time, so motion stays origin-relative.
    Drag { origin: Vector },
    /// Two-contact pinch. `baseline` is the distance between the contacts at
    /// the previous update; scaling is incremental, not cumulative-from-start.
    Pinch { baseline: f32 },
}

/// Messages consumed by [`State::handle`].
///
/// Positions are in the coordinate space of the viewport container,
/// top-left origin.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom via mouse wheel, anchored at the cursor. Negative delta zooms in
    /// (browser-inverted wheel sign).
    ZoomWheel { delta: f32, cursor: Point },
    /// Open a drag session at the given pointer position.
    StartDrag { position: Point },
    /// Continue an open drag session. No-op without one.
    UpdateDrag(Point),
    /// Close the drag session (idempotent).
    EndDrag,
    /// Open a pinch session between two contacts.
    StartPinch { first: Point, second: Point },
    /// Continue an open pinch session. No-op without one.
    UpdatePinch { first: Point, second: Point },
    /// Close the pinch session (idempotent).
    EndPinch,
    /// Restore the identity transform (double-click / double-tap).
    Reset,
}

/// Effects produced by viewport operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The transform changed - the view needs a repaint.
    TransformChanged,
}

/// Viewport transform state.
///
/// The controller exclusively owns the transform and the gesture session;
/// the rendered image is a passive consumer of the computed transform.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Fixed pixel clip bounds, set once at mount.
    viewport: Size,
    scale: ScaleFactor,
    translate: Vector,
    session: Option<Gesture>,
    /// Exponent step applied per wheel notch (`exp(±step)`).
    wheel_step: f32,
}

impl State {
    /// Creates a controller for the given viewport clip bounds with the
    /// identity transform, applying the clamp invariant once (a no-op at
    /// defaults).
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut state = Self {
            viewport,
            scale: ScaleFactor::default(),
            translate: Vector::new(0.0, 0.0),
            session: None,
            wheel_step: DEFAULT_WHEEL_ZOOM_STEP,
        };
        state.clamp_translate();
        state
    }

    /// Overrides the wheel zoom step, clamped to a sane exponent range.
    #[must_use]
    pub fn with_wheel_step(mut self, step: f32) -> Self {
        self.wheel_step = step.clamp(0.01, 1.0);
        self
    }

    /// Handle a gesture message.
    ///
    /// All operations are pure state transitions over already-validated
    /// numeric input; degenerate geometry (zero pinch baseline, zero-sized
    /// viewport) skips the dependent update instead of propagating
    /// non-finite values.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomWheel { delta, cursor } => {
                self.zoom_at(cursor, delta < 0.0);
                Effect::TransformChanged
            }
            Message::StartDrag { position } => {
                self.session = Some(Gesture::Drag {
                    origin: Vector::new(
                        position.x - self.translate.x,
                        position.y - self.translate.y,
                    ),
                });
                Effect::None
            }
            Message::UpdateDrag(position) => match self.session {
                Some(Gesture::Drag { origin }) => {
                    self.translate = Vector::new(position.x - origin.x, position.y - origin.y);
                    self.clamp_translate();
                    Effect::TransformChanged
                }
                _ => Effect::None,
            },
            Message::EndDrag | Message::EndPinch => {
                self.session = None;
                Effect::None
            }
            Message::StartPinch { first, second } => {
                self.session = Some(Gesture::Pinch {
                    baseline: first.distance(second),
                });
                Effect::None
            }
            Message::UpdatePinch { first, second } => match self.session {
                Some(Gesture::Pinch { baseline }) => {
                    let distance = first.distance(second);
                    if baseline > 0.0 && distance.is_finite() {
                        self.scale = self.scale.scaled_by(distance / baseline);
                    }
                    // Re-baseline even when the update was skipped so the next
                    // move has a usable reference distance.
                    self.session = Some(Gesture::Pinch { baseline: distance });
                    self.clamp_translate();
                    Effect::TransformChanged
                }
                _ => Effect::None,
            },
            Message::Reset => {
                self.scale = ScaleFactor::default();
                self.translate = Vector::new(0.0, 0.0);
                self.clamp_translate();
                Effect::TransformChanged
            }
        }
    }

    /// Zoom by one wheel step, keeping the image point under `cursor`
    /// visually fixed (up to clamp correction at image edges).
    fn zoom_at(&mut self, cursor: Point, zoom_in: bool) {
        let direction = if zoom_in { 1.0 } else { -1.0 };
        let factor = (direction * self.wheel_step).exp();

        let old_scale = self.scale.value();
        let new_scale = self.scale.scaled_by(factor);
        let ratio = new_scale.value() / old_scale - 1.0;

        self.translate = Vector::new(
            self.translate.x - (cursor.x - self.translate.x) * ratio,
            self.translate.y - (cursor.y - self.translate.y) * ratio,
        );
        self.scale = new_scale;
        self.clamp_translate();
    }

    /// Clamps the translation to the edge bounds for the current scale.
    ///
    /// The image fills the viewport at scale 1, so the scaled dimensions are
    /// `viewport * scale` and the valid range per axis is
    /// `[min(0, viewport − scaled), 0]`.
    fn clamp_translate(&mut self) {
        let Size { width, height } = self.viewport;
        if width <= 0.0 || height <= 0.0 {
            // Degenerate viewport: skip rather than divide the state into NaN.
            return;
        }

        let scale = self.scale.value();
        let min_x = (width - width * scale).min(0.0);
        let min_y = (height - height * scale).min(0.0);

        self.translate = Vector::new(
            self.translate.x.clamp(min_x, 0.0),
            self.translate.y.clamp(min_y, 0.0),
        );
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The fixed viewport clip bounds.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current translation in pixels, top-left origin.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translate
    }

    /// Check if a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Some(Gesture::Drag { .. }))
    }

    /// Check if a pinch session is open.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.session, Some(Gesture::Pinch { .. }))
    }

    /// The transform as a 2D affine transform string with the origin fixed at
    /// the element's top-left corner, for render sinks that consume CSS-style
    /// transforms.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x,
            self.translate.y,
            self.scale.value()
        )
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Size::new(
            crate::config::DEFAULT_VIEWPORT_WIDTH,
            crate::config::DEFAULT_VIEWPORT_HEIGHT,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scale_bounds;

    fn viewport() -> State {
        State::new(Size::new(400.0, 300.0))
    }

    fn zoom_in(state: &mut State, cursor: Point) {
        state.handle(Message::ZoomWheel {
            delta: -1.0,
            cursor,
        });
    }

    fn zoom_out(state: &mut State, cursor: Point) {
        state.handle(Message::ZoomWheel { delta: 1.0, cursor });
    }

    #[test]
    fn starts_at_identity() {
        let state = viewport();
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.translation(), Vector::new(0.0, 0.0));
        assert!(!state.is_dragging());
    }

    #[test]
    fn wheel_zoom_in_increases_scale() {
        let mut state = viewport();
        zoom_in(&mut state, Point::new(200.0, 150.0));
        assert!(state.scale() > 1.0);
    }

    #[test]
    fn wheel_zoom_out_at_minimum_is_clamped() {
        let mut state = viewport();
        zoom_out(&mut state, Point::new(200.0, 150.0));
        assert_eq!(state.scale(), scale_bounds::MIN);
        assert_eq!(state.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn scale_never_leaves_bounds_under_any_sequence() {
        let mut state = viewport();
        for _ in 0..200 {
            zoom_in(&mut state, Point::new(37.0, 251.0));
        }
        assert_eq!(state.scale(), scale_bounds::MAX);
        for _ in 0..500 {
            zoom_out(&mut state, Point::new(399.0, 1.0));
        }
        assert_eq!(state.scale(), scale_bounds::MIN);
    }

    #[test]
    fn zoom_anchor_keeps_cursor_point_fixed() {
        let mut state = viewport();
        let cursor = Point::new(200.0, 150.0);

        // Image-space point under the cursor before the zoom.
        let before_x = (cursor.x - state.translation().x) / state.scale();
        let before_y = (cursor.y - state.translation().y) / state.scale();

        zoom_in(&mut state, cursor);

        let after_x = (cursor.x - state.translation().x) / state.scale();
        let after_y = (cursor.y - state.translation().y) / state.scale();

        assert!(state.scale() > 1.0);
        assert!((after_x - before_x).abs() < 1e-3);
        assert!((after_y - before_y).abs() < 1e-3);
    }

    #[test]
    fn translate_is_clamped_after_every_zoom() {
        let mut state = viewport();
        for _ in 0..50 {
            zoom_in(&mut state, Point::new(390.0, 290.0));
            let Size { width, height } = state.viewport();
            let min_x = (width - width * state.scale()).min(0.0);
            let min_y = (height - height * state.scale()).min(0.0);
            let t = state.translation();
            assert!(t.x >= min_x && t.x <= 0.0, "x out of bounds: {}", t.x);
            assert!(t.y >= min_y && t.y <= 0.0, "y out of bounds: {}", t.y);
        }
    }

    #[test]
    fn drag_pans_relative_to_origin() {
        let mut state = viewport();
        for _ in 0..10 {
            zoom_in(&mut state, Point::new(200.0, 150.0));
        }

        state.handle(Message::StartDrag {
            position: Point::new(100.0, 100.0),
        });
        assert!(state.is_dragging());

        let before = state.translation();
        let effect = state.handle(Message::UpdateDrag(Point::new(80.0, 90.0)));
        assert_eq!(effect, Effect::TransformChanged);

        let after = state.translation();
        assert!((after.x - (before.x - 20.0)).abs() < 1e-3);
        assert!((after.y - (before.y - 10.0)).abs() < 1e-3);

        state.handle(Message::EndDrag);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_cannot_reveal_empty_space() {
        let mut state = viewport();
        zoom_in(&mut state, Point::new(200.0, 150.0));

        state.handle(Message::StartDrag {
            position: Point::new(0.0, 0.0),
        });
        // Far beyond any valid pan range in both directions.
        state.handle(Message::UpdateDrag(Point::new(10_000.0, 10_000.0)));
        assert_eq!(state.translation(), Vector::new(0.0, 0.0));

        state.handle(Message::UpdateDrag(Point::new(-10_000.0, -10_000.0)));
        let Size { width, height } = state.viewport();
        let min_x = (width - width * state.scale()).min(0.0);
        let min_y = (height - height * state.scale()).min(0.0);
        assert_eq!(state.translation(), Vector::new(min_x, min_y));
    }

    #[test]
    fn update_drag_without_session_is_ignored() {
        let mut state = viewport();
        let effect = state.handle(Message::UpdateDrag(Point::new(50.0, 50.0)));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn update_drag_during_pinch_is_ignored() {
        let mut state = viewport();
        state.handle(Message::StartPinch {
            first: Point::new(100.0, 100.0),
            second: Point::new(200.0, 200.0),
        });
        let effect = state.handle(Message::UpdateDrag(Point::new(50.0, 50.0)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut state = viewport();
        assert_eq!(state.handle(Message::EndDrag), Effect::None);
        assert_eq!(state.handle(Message::EndDrag), Effect::None);
    }

    #[test]
    fn pinch_spread_zooms_in() {
        let mut state = viewport();
        state.handle(Message::StartPinch {
            first: Point::new(150.0, 150.0),
            second: Point::new(250.0, 150.0),
        });
        assert!(state.is_pinching());

        state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(300.0, 150.0),
        });
        assert_eq!(state.scale(), 2.0);

        state.handle(Message::EndPinch);
        assert!(!state.is_pinching());
    }

    #[test]
    fn pinch_is_incremental_not_cumulative() {
        let mut state = viewport();
        state.handle(Message::StartPinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(200.0, 150.0),
        });
        // Two moves at the same spread: the second must be a no-op because
        // the baseline was re-anchored by the first.
        state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(250.0, 150.0),
        });
        let after_first = state.scale();
        state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(250.0, 150.0),
        });
        assert_eq!(state.scale(), after_first);
    }

    #[test]
    fn replanted_pinch_re_baselines_instead_of_jumping() {
        let mut state = viewport();
        state.handle(Message::StartPinch {
            first: Point::new(150.0, 150.0),
            second: Point::new(250.0, 150.0),
        });
        state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(300.0, 150.0),
        });
        state.handle(Message::EndPinch);
        assert_eq!(state.scale(), 2.0);

        // Fingers land again much closer together. The new session must
        // anchor to the new spread, not scale against the old one.
        state.handle(Message::StartPinch {
            first: Point::new(190.0, 150.0),
            second: Point::new(210.0, 150.0),
        });
        let effect = state.handle(Message::UpdatePinch {
            first: Point::new(190.0, 150.0),
            second: Point::new(210.0, 150.0),
        });
        assert_eq!(effect, Effect::TransformChanged);
        assert_eq!(state.scale(), 2.0);

        // And growth from the re-planted baseline is relative to it.
        state.handle(Message::UpdatePinch {
            first: Point::new(185.0, 150.0),
            second: Point::new(215.0, 150.0),
        });
        assert_eq!(state.scale(), 3.0);
    }

    #[test]
    fn zero_baseline_pinch_never_produces_nan() {
        let mut state = viewport();
        let contact = Point::new(150.0, 150.0);
        state.handle(Message::StartPinch {
            first: contact,
            second: contact,
        });

        let effect = state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(300.0, 150.0),
        });
        assert_eq!(effect, Effect::TransformChanged);
        assert!(state.scale().is_finite());
        assert_eq!(state.scale(), 1.0);

        // The skipped update re-baselined, so the next move scales normally.
        state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(400.0, 150.0),
        });
        assert_eq!(state.scale(), 1.5);
    }

    #[test]
    fn update_pinch_without_session_is_ignored() {
        let mut state = viewport();
        let effect = state.handle(Message::UpdatePinch {
            first: Point::new(100.0, 150.0),
            second: Point::new(300.0, 150.0),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn reset_restores_identity_after_arbitrary_gestures() {
        let mut state = viewport();
        for _ in 0..7 {
            zoom_in(&mut state, Point::new(320.0, 40.0));
        }
        state.handle(Message::StartDrag {
            position: Point::new(200.0, 150.0),
        });
        state.handle(Message::UpdateDrag(Point::new(120.0, 60.0)));
        state.handle(Message::EndDrag);

        let effect = state.handle(Message::Reset);
        assert_eq!(effect, Effect::TransformChanged);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn zero_sized_viewport_skips_clamping() {
        let mut state = State::new(Size::new(0.0, 0.0));
        zoom_in(&mut state, Point::new(0.0, 0.0));
        assert!(state.scale().is_finite());
        assert!(state.translation().x.is_finite());
        assert!(state.translation().y.is_finite());
    }

    #[test]
    fn transform_css_at_identity() {
        let state = viewport();
        assert_eq!(state.transform_css(), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn transform_css_reflects_pan_and_zoom() {
        let mut state = viewport();
        for _ in 0..10 {
            zoom_in(&mut state, Point::new(200.0, 150.0));
        }
        state.handle(Message::StartDrag {
            position: Point::new(200.0, 150.0),
        });
        state.handle(Message::UpdateDrag(Point::new(180.0, 140.0)));

        let css = state.transform_css();
        assert!(css.starts_with("translate("));
        assert!(css.contains("px, "));
        assert!(css.contains(&format!("scale({})", state.scale())));
    }

    #[test]
    fn wheel_step_is_configurable() {
        let mut coarse = viewport().with_wheel_step(0.5);
        let mut fine = viewport();
        zoom_in(&mut coarse, Point::new(0.0, 0.0));
        zoom_in(&mut fine, Point::new(0.0, 0.0));
        assert!(coarse.scale() > fine.scale());
    }
}
