#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Draggable parameter sliders.
//!
//! Each [`Slider`] maps a percentage onto a horizontal track. A press on the
//! handle binds the slider to the continuous pointer position until the next
//! release; while bound, the value is recomputed from the cursor every frame
//! whether or not new events arrived. [`SliderPanel`] owns both sliders and
//! guarantees that at most one of them drags at a time.

use lockfunnel_core::{
    CursorHint, Event, ParameterKind, Percentage, PointerKind, ScreenPoint, ScreenRect,
    SimulationParameters,
};
use lockfunnel_system_input::EventQueue;

/// Pixel geometry of a slider track and its handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderGeometry {
    track_origin: ScreenPoint,
    track_length: f32,
    handle_width: f32,
    handle_height: f32,
}

impl SliderGeometry {
    /// Creates a geometry whose track starts at `track_origin`.
    ///
    /// The origin's `y` is the top edge of the handle.
    #[must_use]
    pub const fn new(
        track_origin: ScreenPoint,
        track_length: f32,
        handle_width: f32,
        handle_height: f32,
    ) -> Self {
        Self {
            track_origin,
            track_length,
            handle_width,
            handle_height,
        }
    }

    /// Left end of the track; `y` is the handle's top edge.
    #[must_use]
    pub const fn track_origin(&self) -> ScreenPoint {
        self.track_origin
    }

    /// Length of the track in pixels.
    #[must_use]
    pub const fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Distance from the track origin that represents `value`.
    #[must_use]
    pub fn offset(&self, value: Percentage) -> f32 {
        self.track_length * value.fraction()
    }

    /// Hit region of the handle when the slider holds `value`.
    #[must_use]
    pub fn handle_region(&self, value: Percentage) -> ScreenRect {
        let left = self.track_origin.x() + self.offset(value) - self.handle_width / 2.0;
        ScreenRect::new(
            ScreenPoint::new(left, self.track_origin.y()),
            self.handle_width,
            self.handle_height,
        )
    }

    /// Value represented by a pointer at horizontal coordinate `x`.
    #[must_use]
    pub fn value_at(&self, x: f32) -> Percentage {
        if self.track_length <= f32::EPSILON {
            return Percentage::MIN;
        }

        Percentage::from_rounded((x - self.track_origin.x()) / self.track_length * 100.0)
    }
}

/// Single bounded parameter controlled by dragging a handle.
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    parameter: ParameterKind,
    geometry: SliderGeometry,
    value: Percentage,
    dragging: bool,
}

impl Slider {
    /// Creates an idle slider holding `value`.
    #[must_use]
    pub const fn new(
        parameter: ParameterKind,
        geometry: SliderGeometry,
        value: Percentage,
    ) -> Self {
        Self {
            parameter,
            geometry,
            value,
            dragging: false,
        }
    }

    /// Track and handle geometry.
    #[must_use]
    pub const fn geometry(&self) -> SliderGeometry {
        self.geometry
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> Percentage {
        self.value
    }

    /// Whether the slider currently follows the pointer.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle hit region at the current value.
    #[must_use]
    pub fn handle_region(&self) -> ScreenRect {
        self.geometry.handle_region(self.value)
    }

    /// Reports whether the point lies on the handle at its current position.
    #[must_use]
    pub fn hit_test(&self, point: ScreenPoint) -> bool {
        self.handle_region().contains(point)
    }

    /// Runs one frame of drag handling.
    ///
    /// `press_allowed` must be `false` while another slider is dragging.
    pub fn update(
        &mut self,
        queue: &mut EventQueue,
        pointer: Option<ScreenPoint>,
        press_allowed: bool,
        out: &mut Vec<Event>,
    ) {
        if self.dragging {
            if queue
                .claim(|event| event.kind() == PointerKind::Release)
                .is_some()
            {
                self.dragging = false;
                out.push(Event::DragReleased {
                    parameter: self.parameter,
                });
            }
        } else if press_allowed {
            let region = self.handle_region();
            let pressed = queue.claim(|event| {
                event.kind() == PointerKind::Press && region.contains(event.position())
            });
            if pressed.is_some() {
                self.dragging = true;
                out.push(Event::DragStarted {
                    parameter: self.parameter,
                });
            }
        }

        if !self.dragging {
            return;
        }

        let Some(pointer) = pointer else {
            return;
        };

        let value = self.geometry.value_at(pointer.x());
        if value != self.value {
            self.value = value;
            out.push(Event::ParameterChanged {
                parameter: self.parameter,
                value,
            });
        }
    }
}

/// Pair of sliders for lock prevalence and lock effectiveness.
#[derive(Clone, Copy, Debug)]
pub struct SliderPanel {
    prevalence: Slider,
    effectiveness: Slider,
}

impl SliderPanel {
    /// Creates a panel from the two track geometries and initial values.
    #[must_use]
    pub const fn new(
        prevalence: SliderGeometry,
        effectiveness: SliderGeometry,
        initial: SimulationParameters,
    ) -> Self {
        Self {
            prevalence: Slider::new(
                ParameterKind::LockPrevalence,
                prevalence,
                initial.lock_prevalence,
            ),
            effectiveness: Slider::new(
                ParameterKind::LockEffectiveness,
                effectiveness,
                initial.lock_effectiveness,
            ),
        }
    }

    /// Updates both sliders; prevalence claims events before effectiveness.
    pub fn update(
        &mut self,
        queue: &mut EventQueue,
        pointer: Option<ScreenPoint>,
        out: &mut Vec<Event>,
    ) {
        let prevalence_may_press = !self.effectiveness.is_dragging();
        self.prevalence
            .update(queue, pointer, prevalence_may_press, out);

        let effectiveness_may_press = !self.prevalence.is_dragging();
        self.effectiveness
            .update(queue, pointer, effectiveness_may_press, out);
    }

    /// Slider controlling the requested parameter.
    #[must_use]
    pub const fn slider(&self, kind: ParameterKind) -> &Slider {
        match kind {
            ParameterKind::LockPrevalence => &self.prevalence,
            ParameterKind::LockEffectiveness => &self.effectiveness,
        }
    }

    /// Current parameter values.
    #[must_use]
    pub const fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.prevalence.value(), self.effectiveness.value())
    }

    /// Cursor shape implied by drag state and hovering.
    #[must_use]
    pub fn cursor_hint(&self, pointer: Option<ScreenPoint>) -> CursorHint {
        let dragging = self.prevalence.is_dragging() || self.effectiveness.is_dragging();
        let hovering = pointer.map_or(false, |point| {
            self.prevalence.hit_test(point) || self.effectiveness.hit_test(point)
        });

        if dragging || hovering {
            CursorHint::ResizeHorizontal
        } else {
            CursorHint::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SliderGeometry {
        SliderGeometry::new(ScreenPoint::new(168.0, 84.0), 156.0, 12.0, 24.0)
    }

    #[test]
    fn offset_scales_with_value() {
        let geometry = geometry();
        assert!((geometry.offset(Percentage::saturating(50)) - 78.0).abs() < 1e-4);
        assert!(geometry.offset(Percentage::MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn handle_region_is_centered_on_offset() {
        let region = geometry().handle_region(Percentage::MAX);
        assert!((region.origin().x() - (168.0 + 156.0 - 6.0)).abs() < 1e-4);
        assert!((region.origin().y() - 84.0).abs() < f32::EPSILON);
    }

    #[test]
    fn value_at_inverts_offset_and_clamps() {
        let geometry = geometry();
        assert_eq!(geometry.value_at(168.0 + 78.0).get(), 50);
        assert_eq!(geometry.value_at(0.0), Percentage::MIN);
        assert_eq!(geometry.value_at(900.0), Percentage::MAX);
    }

    #[test]
    fn degenerate_track_pins_value_to_zero() {
        let geometry = SliderGeometry::new(ScreenPoint::new(0.0, 0.0), 0.0, 12.0, 24.0);
        assert_eq!(geometry.value_at(50.0), Percentage::MIN);
    }
}
