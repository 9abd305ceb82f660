#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the lock funnel simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and the pure systems it composes. Adapters submit
//! [`Command`] values carrying pointer input and frame timing, the world
//! executes them via its `apply` entry point, and then reports [`Event`]
//! values describing every observable state change of the frame.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of pointer interaction reported by the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    /// Primary button went down.
    Press,
    /// Pointer moved; only updates the continuous cursor position.
    Move,
    /// Primary button went up.
    Release,
    /// A completed press/release pair on the surface.
    Click,
}

/// Position on the drawing surface measured in pixels from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    x: f32,
    y: f32,
}

impl ScreenPoint {
    /// Creates a new surface position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in pixels.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in pixels.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Axis-aligned rectangle on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    origin: ScreenPoint,
    width: f32,
    height: f32,
}

impl ScreenRect {
    /// Creates a rectangle anchored at its top-left corner.
    #[must_use]
    pub const fn new(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Top-left corner of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> ScreenPoint {
        self.origin
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Reports whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x() >= self.origin.x()
            && point.x() <= self.origin.x() + self.width
            && point.y() >= self.origin.y()
            && point.y() <= self.origin.y() + self.height
    }
}

/// Single pointer notification delivered by the host for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    kind: PointerKind,
    position: ScreenPoint,
}

impl PointerEvent {
    /// Creates a pointer event of the provided kind.
    #[must_use]
    pub const fn new(kind: PointerKind, position: ScreenPoint) -> Self {
        Self { kind, position }
    }

    /// Primary button press at the given coordinates.
    #[must_use]
    pub const fn press(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Press, ScreenPoint::new(x, y))
    }

    /// Pointer motion to the given coordinates.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, ScreenPoint::new(x, y))
    }

    /// Primary button release at the given coordinates.
    #[must_use]
    pub const fn release(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Release, ScreenPoint::new(x, y))
    }

    /// Click at the given coordinates.
    #[must_use]
    pub const fn click(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Click, ScreenPoint::new(x, y))
    }

    /// Kind of interaction.
    #[must_use]
    pub const fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Surface coordinates attached to the event.
    #[must_use]
    pub const fn position(&self) -> ScreenPoint {
        self.position
    }
}

/// Whole-number percentage that is always within `0..=100`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Percentage(u8);

impl Percentage {
    /// Smallest representable percentage.
    pub const MIN: Self = Self(0);

    /// Largest representable percentage.
    pub const MAX: Self = Self(100);

    /// Creates a percentage, saturating values above one hundred.
    #[must_use]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Rounds a fractional percentage to the nearest whole value and clamps it.
    ///
    /// Non-finite inputs collapse to zero.
    #[must_use]
    pub fn from_rounded(value: f32) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }

        let rounded = value.round().clamp(0.0, 100.0);
        Self(rounded as u8)
    }

    /// Numeric value in `0..=100`.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Fraction of one hundred in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

/// Identifies one of the two user-tunable simulation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Share of people who keep a lock on their firearm.
    LockPrevalence,
    /// Share of attempts a fitted lock prevents.
    LockEffectiveness,
}

impl ParameterKind {
    /// Both parameters in their fixed update order.
    pub const ALL: [Self; 2] = [Self::LockPrevalence, Self::LockEffectiveness];
}

/// Current values of the user-tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Share of people with gun locks.
    pub lock_prevalence: Percentage,
    /// Effectiveness of a fitted gun lock.
    pub lock_effectiveness: Percentage,
}

impl SimulationParameters {
    /// Creates a parameter set from explicit values.
    #[must_use]
    pub const fn new(lock_prevalence: Percentage, lock_effectiveness: Percentage) -> Self {
        Self {
            lock_prevalence,
            lock_effectiveness,
        }
    }

    /// Value of the requested parameter.
    #[must_use]
    pub const fn get(&self, kind: ParameterKind) -> Percentage {
        match kind {
            ParameterKind::LockPrevalence => self.lock_prevalence,
            ParameterKind::LockEffectiveness => self.lock_effectiveness,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(Percentage::saturating(0), Percentage::saturating(68))
    }
}

/// Unique identifier assigned to a person within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(u32);

impl PersonId {
    /// Creates a new person identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Phase of a spawned person's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonStage {
    /// Growing into view after leaving the pending pool.
    Spawning,
    /// Fully visible. No further transitions exist yet.
    Active,
}

impl PersonStage {
    /// Lower-case label used by displays and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spawning => "spawning",
            Self::Active => "active",
        }
    }
}

/// Immutable representation of a spawned person used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersonSnapshot {
    /// Identifier of the person.
    pub id: PersonId,
    /// Current lifecycle stage.
    pub stage: PersonStage,
    /// Position sampled when the person spawned.
    pub position: ScreenPoint,
    /// Visual radius in whole pixels.
    pub radius: u32,
    /// Time spent in the current stage.
    pub stage_elapsed: Duration,
}

/// Cursor shape the display layer should present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Regular arrow cursor.
    #[default]
    Default,
    /// Horizontal resize cursor shown over or while dragging a slider handle.
    ResizeHorizontal,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Delivers a pointer notification for the current frame.
    Pointer {
        /// Event reported by the host.
        event: PointerEvent,
    },
    /// Runs one frame of the update cycle.
    Tick {
        /// Wall-clock time elapsed since the previous frame.
        dt: Duration,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A new run started with a freshly seeded population.
    RunStarted {
        /// Number of persons seeded into the pending pool.
        capacity: usize,
    },
    /// The running run was halted.
    RunStopped,
    /// A slider became bound to pointer motion.
    DragStarted {
        /// Parameter controlled by the slider.
        parameter: ParameterKind,
    },
    /// A slider stopped following pointer motion.
    DragReleased {
        /// Parameter controlled by the slider.
        parameter: ParameterKind,
    },
    /// A parameter value changed while dragging.
    ParameterChanged {
        /// Parameter that changed.
        parameter: ParameterKind,
        /// New clamped value.
        value: Percentage,
    },
    /// The lifecycle clock advanced while running.
    TimeAdvanced {
        /// Duration that elapsed in the tick.
        dt: Duration,
    },
    /// A person left the pending pool.
    PersonSpawned {
        /// Identifier of the spawned person.
        person: PersonId,
        /// Sampled spawn position.
        position: ScreenPoint,
    },
    /// A person finished its spawn animation.
    PersonActivated {
        /// Identifier of the activated person.
        person: PersonId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_saturates_above_one_hundred() {
        assert_eq!(Percentage::saturating(250), Percentage::MAX);
        assert_eq!(Percentage::saturating(42).get(), 42);
    }

    #[test]
    fn percentage_rounds_and_clamps() {
        assert_eq!(Percentage::from_rounded(49.5).get(), 50);
        assert_eq!(Percentage::from_rounded(-12.0), Percentage::MIN);
        assert_eq!(Percentage::from_rounded(140.2), Percentage::MAX);
        assert_eq!(Percentage::from_rounded(f32::NAN), Percentage::MIN);
    }

    #[test]
    fn rect_contains_its_edges() {
        let rect = ScreenRect::new(ScreenPoint::new(10.0, 20.0), 5.0, 4.0);
        assert!(rect.contains(ScreenPoint::new(10.0, 20.0)));
        assert!(rect.contains(ScreenPoint::new(15.0, 24.0)));
        assert!(!rect.contains(ScreenPoint::new(15.1, 24.0)));
        assert!(!rect.contains(ScreenPoint::new(9.9, 22.0)));
    }

    #[test]
    fn default_parameters_match_initial_slider_positions() {
        let parameters = SimulationParameters::default();
        assert_eq!(parameters.get(ParameterKind::LockPrevalence).get(), 0);
        assert_eq!(parameters.get(ParameterKind::LockEffectiveness).get(), 68);
    }

    #[test]
    fn pointer_event_round_trips_through_bincode() {
        let event = PointerEvent::click(260.5, 30.0);
        let bytes = bincode::serialize(&event).expect("serialize");
        let restored: PointerEvent = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, event);
    }
}
