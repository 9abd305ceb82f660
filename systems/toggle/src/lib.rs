#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Start/stop button that owns the simulation's running flag.

use lockfunnel_core::{PointerKind, ScreenPoint, ScreenRect};
use lockfunnel_system_input::EventQueue;

/// Direction of a running-flag flip produced by a frame update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunTransition {
    /// The simulation switched from stopped to running.
    Started,
    /// The simulation switched from running to stopped.
    Stopped,
}

/// Toggle button that flips the running flag on clicks inside its region.
#[derive(Clone, Copy, Debug)]
pub struct ToggleButton {
    region: ScreenRect,
    running: bool,
}

impl ToggleButton {
    /// Creates a stopped button covering the provided region.
    #[must_use]
    pub const fn new(region: ScreenRect) -> Self {
        Self {
            region,
            running: false,
        }
    }

    /// Reports whether the point lies on the button.
    #[must_use]
    pub fn hit_test(&self, point: ScreenPoint) -> bool {
        self.region.contains(point)
    }

    /// Claims every click that landed on the button and flips the flag once.
    ///
    /// Clicks outside the region stay queued for other consumers. Several
    /// qualifying clicks in one frame still produce a single flip.
    pub fn update(&mut self, queue: &mut EventQueue) -> Option<RunTransition> {
        let region = self.region;
        let clicks = queue.drain(|event| {
            event.kind() == PointerKind::Click && region.contains(event.position())
        });
        if clicks.is_empty() {
            return None;
        }

        self.running = !self.running;
        if self.running {
            Some(RunTransition::Started)
        } else {
            Some(RunTransition::Stopped)
        }
    }

    /// Current running flag.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Region covered by the button.
    #[must_use]
    pub const fn region(&self) -> ScreenRect {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let button = ToggleButton::new(ScreenRect::new(ScreenPoint::new(0.0, 0.0), 10.0, 10.0));
        assert!(!button.is_running());
    }
}
