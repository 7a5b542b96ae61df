// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The spinner holds no clock of its own: the caller derives the rotation
//! from elapsed time on every tick and rebuilds it.

use crate::config::SPINNER_RADIANS_PER_SEC;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;
use std::time::Duration;

const STROKE_WIDTH: f32 = 2.5;
const ARC_SEGMENTS: u16 = 24;

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: 0.0,
            color,
            size,
        }
    }

    /// Sets the rotation reached after `elapsed` of spinning.
    #[must_use]
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.rotation = rotation_after(elapsed);
        self.cache.clear();
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Rotation angle in `[0, 2π)` after spinning for `elapsed`.
#[must_use]
pub fn rotation_after(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * SPINNER_RADIANS_PER_SEC).rem_euclid(2.0 * PI)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Quarter-turn offset so rotation 0 starts at the top
                let start_angle = self.rotation - PI / 2.0;
                let sweep = PI * 0.75;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start_angle + sweep * f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
