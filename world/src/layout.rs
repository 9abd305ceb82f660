use lockfunnel_core::{ScreenPoint, ScreenRect};
use lockfunnel_system_lifecycle::SpawnArea;
use lockfunnel_system_sliders::SliderGeometry;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_MARGIN: f32 = 12.0;

const SLIDER_TOP: f32 = 84.0;
const SLIDER_TRACK_LENGTH: f32 = 156.0;
const SLIDER_GAP: f32 = 72.0;
const SLIDER_HANDLE_WIDTH: f32 = 12.0;
const SLIDER_HANDLE_HEIGHT: f32 = 24.0;

const DECISION_CENTER: ScreenPoint = ScreenPoint::new(102.0, 310.0);
const DECISION_RADIUS: f32 = 90.0;
const SPAWN_INSET: f32 = 10.0;

/// Narrowest canvas that still fits both sliders side by side.
pub const MIN_CANVAS_WIDTH: f32 = SLIDER_TRACK_LENGTH * 2.0 + SLIDER_GAP + 2.0 * 48.0;

/// Interactive geometry of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    canvas_width: f32,
    canvas_height: f32,
    button: ScreenRect,
    prevalence_slider: SliderGeometry,
    effectiveness_slider: SliderGeometry,
    decision_center: ScreenPoint,
    decision_radius: f32,
}

impl Layout {
    /// Lays out the button and sliders centered on a canvas of the given size.
    #[must_use]
    pub fn for_canvas(canvas_width: f32, canvas_height: f32) -> Self {
        let button = ScreenRect::new(
            ScreenPoint::new((canvas_width - BUTTON_WIDTH) / 2.0, BUTTON_MARGIN),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let left_margin = (canvas_width - SLIDER_TRACK_LENGTH * 2.0 - SLIDER_GAP) / 2.0;
        let slider = |left: f32| {
            SliderGeometry::new(
                ScreenPoint::new(left, SLIDER_TOP),
                SLIDER_TRACK_LENGTH,
                SLIDER_HANDLE_WIDTH,
                SLIDER_HANDLE_HEIGHT,
            )
        };

        Self {
            canvas_width,
            canvas_height,
            button,
            prevalence_slider: slider(left_margin),
            effectiveness_slider: slider(left_margin + SLIDER_TRACK_LENGTH + SLIDER_GAP),
            decision_center: DECISION_CENTER,
            decision_radius: DECISION_RADIUS,
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    /// Region of the start/stop button.
    #[must_use]
    pub const fn button(&self) -> ScreenRect {
        self.button
    }

    /// Track of the lock prevalence slider.
    #[must_use]
    pub const fn prevalence_slider(&self) -> SliderGeometry {
        self.prevalence_slider
    }

    /// Track of the lock effectiveness slider.
    #[must_use]
    pub const fn effectiveness_slider(&self) -> SliderGeometry {
        self.effectiveness_slider
    }

    /// Center of the decision circle persons spawn into.
    #[must_use]
    pub const fn decision_center(&self) -> ScreenPoint {
        self.decision_center
    }

    /// Radius of the decision circle boundary.
    #[must_use]
    pub const fn decision_radius(&self) -> f32 {
        self.decision_radius
    }

    /// Spawn region: the decision circle shrunk so persons clear its outline.
    #[must_use]
    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea::new(
            self.decision_center,
            (self.decision_radius - SPAWN_INSET).max(0.0),
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_canvas(720.0, 444.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_centers_controls() {
        let layout = Layout::default();
        assert!((layout.button().origin().x() - 260.0).abs() < f32::EPSILON);
        assert!((layout.prevalence_slider().track_origin().x() - 168.0).abs() < f32::EPSILON);
        assert!((layout.effectiveness_slider().track_origin().x() - 396.0).abs() < f32::EPSILON);
    }

    #[test]
    fn spawn_area_is_inset_from_decision_circle() {
        let area = Layout::default().spawn_area();
        assert!((area.radius() - 80.0).abs() < f32::EPSILON);
        assert_eq!(area.center(), ScreenPoint::new(102.0, 310.0));
    }
}
