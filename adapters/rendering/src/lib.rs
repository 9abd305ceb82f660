#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for lock funnel adapters.

mod funnel;

use anyhow::Result as AnyResult;
use glam::Vec2;
use lockfunnel_core::{CursorHint, ParameterKind, Percentage, PersonStage, PointerEvent, ScreenRect};
use std::{error::Error, fmt, time::Duration};

pub use self::funnel::{CaptionPlacement, DecisionCircle, FunnelBox, FunnelDiagram};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Fixed colors of the funnel visualization.
pub mod palette {
    use super::Color;

    /// Canvas background.
    pub const BACKGROUND: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
    /// Outlines and regular text.
    pub const BOUNDARY: Color = Color::from_rgb_u8(0x00, 0x00, 0x00);
    /// Persons that are still spawning.
    pub const PERSON_DEFAULT: Color = Color::from_rgb_u8(0x20, 0x35, 0x3c);
    /// Persons who keep a gun lock; also the prevalence handle.
    pub const PERSON_WITH_LOCK: Color = Color::from_rgb_u8(0x2c, 0x28, 0x63);
    /// Gun lock accent; also the effectiveness handle and active persons.
    pub const GUN_LOCK: Color = Color::from_rgb_u8(0x07, 0xa1, 0xc5);
    /// Suicide attempt accent.
    pub const ATTEMPT: Color = Color::from_rgb_u8(0xef, 0x5f, 0x48);
    /// Saved outcome accent.
    pub const SAVED: Color = Color::from_rgb_u8(0x88, 0xca, 0x41);
    /// Unsuccessful attempt accent.
    pub const UNSUCCESSFUL: Color = Color::from_rgb_u8(0xfa, 0xa8, 0x21);
    /// Fatal attempt accent.
    pub const FATAL: Color = Color::from_rgb_u8(0x3a, 0x00, 0x31);
    /// Debug crosshair and coordinates.
    pub const CROSSHAIR: Color = Color::from_rgb_u8(0xcc, 0x33, 0x33);
    /// Debug grid lines.
    pub const GRID: Color = Color::from_rgb_u8(0xcc, 0xcc, 0xcc);
    /// Button fill while hovered.
    pub const BUTTON_HOVER: Color = Color::from_rgb_u8(0xcc, 0xcc, 0xcc);
    /// Button fill while stopped.
    pub const BUTTON_OFF: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
    /// Button fill while running.
    pub const BUTTON_ON: Color = Color::from_rgb_u8(0x77, 0x77, 0x77);
    /// Button label.
    pub const BUTTON_TEXT: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer notifications observed since the previous frame, in arrival order.
    pub pointer_events: Vec<PointerEvent>,
}

/// Start/stop button drawn at the top of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonPresentation {
    /// Clickable region of the button.
    pub region: ScreenRect,
    /// Whether the simulation is running.
    pub running: bool,
    /// Whether the cursor hovers the button.
    pub hovered: bool,
}

impl ButtonPresentation {
    /// Creates a new button descriptor.
    #[must_use]
    pub const fn new(region: ScreenRect, running: bool, hovered: bool) -> Self {
        Self {
            region,
            running,
            hovered,
        }
    }

    /// Text describing the action a click performs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.running {
            "STOP SIMULATION"
        } else {
            "START SIMULATION"
        }
    }

    /// Fill color; hovering overrides the run state.
    #[must_use]
    pub const fn fill_color(&self) -> Color {
        if self.hovered {
            palette::BUTTON_HOVER
        } else if self.running {
            palette::BUTTON_ON
        } else {
            palette::BUTTON_OFF
        }
    }
}

/// Parameter slider drawn below the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderPresentation {
    /// Parameter controlled by the slider.
    pub parameter: ParameterKind,
    /// Left end of the track; `y` is the handle's top edge.
    pub track_origin: Vec2,
    /// Track length in pixels.
    pub track_length: f32,
    /// Handle rectangle at the current value.
    pub handle: ScreenRect,
    /// Current value.
    pub value: Percentage,
    /// Whether the handle is hovered or dragged.
    pub highlighted: bool,
}

impl SliderPresentation {
    /// Creates a new slider descriptor.
    #[must_use]
    pub const fn new(
        parameter: ParameterKind,
        track_origin: Vec2,
        track_length: f32,
        handle: ScreenRect,
        value: Percentage,
        highlighted: bool,
    ) -> Self {
        Self {
            parameter,
            track_origin,
            track_length,
            handle,
            value,
            highlighted,
        }
    }

    /// Caption shown under the track.
    #[must_use]
    pub const fn caption(&self) -> &'static str {
        match self.parameter {
            ParameterKind::LockPrevalence => "% of people with gun locks",
            ParameterKind::LockEffectiveness => "% effectiveness of gun locks",
        }
    }

    /// Value label shown above the handle.
    #[must_use]
    pub fn value_label(&self) -> String {
        format!("{}%", self.value.get())
    }

    /// Handle fill color.
    #[must_use]
    pub fn handle_color(&self) -> Color {
        let base = match self.parameter {
            ParameterKind::LockPrevalence => palette::PERSON_WITH_LOCK,
            ParameterKind::LockEffectiveness => palette::GUN_LOCK,
        };
        if self.highlighted {
            base.lighten(0.3)
        } else {
            base
        }
    }
}

/// Spawned person rendered as a filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersonPresentation {
    /// Circle center in canvas pixels.
    pub center: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Lifecycle stage selecting the fill color.
    pub stage: PersonStage,
}

impl PersonPresentation {
    /// Creates a new person descriptor.
    #[must_use]
    pub const fn new(center: Vec2, radius: f32, stage: PersonStage) -> Self {
        Self {
            center,
            radius,
            stage,
        }
    }

    /// Fill color for the current stage.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self.stage {
            PersonStage::Spawning => palette::PERSON_DEFAULT,
            PersonStage::Active => palette::GUN_LOCK,
        }
    }
}

/// Debug grid and pointer crosshair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugOverlay {
    grid_spacing: f32,
    /// Last known pointer position.
    pub pointer: Option<Vec2>,
}

impl DebugOverlay {
    /// Grid spacing used by the default overlay.
    pub const DEFAULT_GRID_SPACING: f32 = 12.0;

    /// Creates an overlay with the provided grid spacing.
    ///
    /// Returns an error when the spacing is not a positive finite number.
    pub fn new(grid_spacing: f32, pointer: Option<Vec2>) -> Result<Self, RenderingError> {
        if !grid_spacing.is_finite() || grid_spacing <= 0.0 {
            return Err(RenderingError::InvalidGridSpacing {
                spacing: grid_spacing,
            });
        }

        Ok(Self {
            grid_spacing,
            pointer,
        })
    }

    /// Offsets of every grid line along an axis of the given extent, both ends included.
    #[must_use]
    pub fn grid_lines(&self, extent: f32) -> Vec<f32> {
        let mut lines = Vec::new();
        let mut index = 0u32;
        loop {
            let offset = index as f32 * self.grid_spacing;
            if offset > extent {
                break;
            }
            lines.push(offset);
            index += 1;
        }
        lines
    }

    /// Coordinate read-out for the pointer, one line per axis.
    #[must_use]
    pub fn pointer_labels(&self) -> Option<[String; 2]> {
        self.pointer.map(|pointer| {
            [
                format!("x: {}", pointer.x.round()),
                format!("y: {}", pointer.y.round()),
            ]
        })
    }
}

/// Scene description combining the controls, the funnel and the population.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas size in pixels.
    pub canvas: Vec2,
    /// Start/stop button.
    pub button: ButtonPresentation,
    /// Parameter sliders, prevalence first.
    pub sliders: Vec<SliderPresentation>,
    /// Static funnel diagram.
    pub funnel: FunnelDiagram,
    /// Spawned persons.
    pub persons: Vec<PersonPresentation>,
    /// Cursor shape requested by the sliders.
    pub cursor: CursorHint,
    /// Optional debug grid and crosshair.
    pub debug: Option<DebugOverlay>,
}

impl Scene {
    /// Creates a scene without persons or debug overlay.
    #[must_use]
    pub fn new(
        canvas: Vec2,
        button: ButtonPresentation,
        sliders: Vec<SliderPresentation>,
        funnel: FunnelDiagram,
    ) -> Self {
        Self {
            canvas,
            button,
            sliders,
            funnel,
            persons: Vec::new(),
            cursor: CursorHint::Default,
            debug: None,
        }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting lock funnel scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// pointer input captured by the adapter, and rebuilds the scene from the
    /// world before it is drawn.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Grid spacing must be positive and finite to terminate the grid.
    InvalidGridSpacing {
        /// Provided spacing that failed validation.
        spacing: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSpacing { spacing } => {
                write!(f, "grid spacing must be positive (received {spacing})")
            }
        }
    }
}

impl Error for RenderingError {}
