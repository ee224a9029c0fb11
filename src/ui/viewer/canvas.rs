// SPDX-License-Identifier: MPL-2.0
//! Canvas widget bridging raw Iced input events and the viewport controller.
//!
//! The canvas is the viewport's render sink and input surface: it draws the
//! image with the controller's transform inside its clipped bounds, and
//! translates mouse, wheel, and touch events into [`viewport::Message`]s.
//! All gesture policy lives in the controller; this layer only localizes
//! coordinates, tracks which fingers are down, and detects double-activation.

use super::viewport;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::image;
use iced::{mouse, touch, Color, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-click / double-tap detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Wheel "lines" are scaled to pixel-ish deltas before sign inversion.
const WHEEL_LINE_FACTOR: f32 = 50.0;

/// Viewport background behind letterboxed or panned-out image regions.
const BACKGROUND: Color = Color::from_rgb(0.07, 0.07, 0.07);

/// Builds the viewer canvas for the given controller state and image.
pub fn view<'a>(
    state: &'a viewport::State,
    handle: &image::Handle,
) -> Element<'a, viewport::Message> {
    let viewport = state.viewport();
    Canvas::new(ImageCanvas {
        state,
        handle: handle.clone(),
    })
    .width(Length::Fixed(viewport.width))
    .height(Length::Fixed(viewport.height))
    .into()
}

/// Canvas program rendering the transformed image.
struct ImageCanvas<'a> {
    state: &'a viewport::State,
    handle: image::Handle,
}

/// Host-side input bookkeeping: active touch contacts and the last press
/// instant for double-activation. Transform state never lives here.
#[derive(Debug, Default)]
pub struct Interaction {
    fingers: Vec<(touch::Finger, Point)>,
    last_press: Option<Instant>,
}

impl Interaction {
    /// Records a press and reports whether it completes a double-activation.
    fn register_press(&mut self) -> bool {
        let now = Instant::now();
        let is_double = self
            .last_press
            .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

        // Reset after a double so a third press starts a fresh cycle.
        self.last_press = if is_double { None } else { Some(now) };
        is_double
    }

    fn press_finger(&mut self, finger: touch::Finger, position: Point) {
        self.fingers.retain(|(id, _)| *id != finger);
        self.fingers.push((finger, position));
    }

    fn move_finger(&mut self, finger: touch::Finger, position: Point) {
        for (id, pos) in &mut self.fingers {
            if *id == finger {
                *pos = position;
            }
        }
    }

    fn lift_finger(&mut self, finger: touch::Finger) {
        self.fingers.retain(|(id, _)| *id != finger);
    }

    fn contact_pair(&self) -> Option<(Point, Point)> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Converts a window-space position into viewport-local coordinates.
fn to_local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

fn publish(message: viewport::Message) -> Option<iced::widget::Action<viewport::Message>> {
    Some(iced::widget::Action::publish(message).and_capture())
}

impl<'a> canvas::Program<viewport::Message> for ImageCanvas<'a> {
    type State = Interaction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<viewport::Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if interaction.register_press() {
                    publish(viewport::Message::Reset)
                } else {
                    publish(viewport::Message::StartDrag { position })
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                // Tracked past the widget edge so a drag that leaves the
                // viewport keeps following the pointer until release.
                if self.state.is_dragging() {
                    publish(viewport::Message::UpdateDrag(to_local(*position, bounds)))
                } else {
                    None
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Always sent: the press may have happened inside the bounds
                // while the release lands outside.
                publish(viewport::Message::EndDrag)
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let cursor_position = cursor.position_in(bounds)?;
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_FACTOR,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                // Wheel-up (positive y in Iced) zooms in; the controller
                // expects the browser-style inverted sign.
                publish(viewport::Message::ZoomWheel {
                    delta: -y,
                    cursor: cursor_position,
                })
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                let local = to_local(*position, bounds);
                interaction.press_finger(*id, local);
                match interaction.fingers.len() {
                    1 => {
                        if interaction.register_press() {
                            publish(viewport::Message::Reset)
                        } else {
                            publish(viewport::Message::StartDrag { position: local })
                        }
                    }
                    2 => {
                        let (first, second) = interaction.contact_pair()?;
                        publish(viewport::Message::StartPinch { first, second })
                    }
                    _ => None,
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let local = to_local(*position, bounds);
                interaction.move_finger(*id, local);
                match interaction.fingers.len() {
                    1 => publish(viewport::Message::UpdateDrag(local)),
                    2 => {
                        let (first, second) = interaction.contact_pair()?;
                        publish(viewport::Message::UpdatePinch { first, second })
                    }
                    _ => None,
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                let was_pinching = interaction.fingers.len() >= 2;
                interaction.lift_finger(*id);
                if was_pinching {
                    publish(viewport::Message::EndPinch)
                } else {
                    publish(viewport::Message::EndDrag)
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        // The image fills the viewport at scale 1; the scaled quad is the
        // viewport dimensions times the current scale, offset by the
        // translation. Canvas geometry is clipped to the widget bounds.
        let viewport = self.state.viewport();
        let translation: Vector = self.state.translation();
        let scale = self.state.scale();
        let destination = Rectangle::new(
            Point::new(translation.x, translation.y),
            Size::new(viewport.width * scale, viewport.height * scale),
        );
        frame.draw_image(destination, &self.handle);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
