#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Per-frame pointer input buffering.
//!
//! Discrete pointer notifications (press, release, click) are collected in an
//! [`EventQueue`] that consumers claim from during a frame. Motion never enters
//! the queue; it only updates the continuous cursor position held by the
//! [`PointerTracker`].

use lockfunnel_core::{PointerEvent, PointerKind, ScreenPoint};

/// Ordered buffer of the pointer events delivered during the current frame.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<PointerEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the end of the frame's sequence.
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Removes and returns every queued event matching the predicate.
    ///
    /// Matches are returned in insertion order; non-matching events keep their
    /// relative order in the queue.
    pub fn drain<P>(&mut self, mut predicate: P) -> Vec<PointerEvent>
    where
        P: FnMut(&PointerEvent) -> bool,
    {
        let (claimed, kept): (Vec<PointerEvent>, Vec<PointerEvent>) = self
            .events
            .drain(..)
            .partition(|event| predicate(event));
        self.events = kept;
        claimed
    }

    /// Removes and returns the earliest queued event matching the predicate.
    pub fn claim<P>(&mut self, mut predicate: P) -> Option<PointerEvent>
    where
        P: FnMut(&PointerEvent) -> bool,
    {
        let index = self.events.iter().position(|event| predicate(event))?;
        Some(self.events.remove(index))
    }

    /// Empties the queue unconditionally.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events still waiting to be claimed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Reports whether no events remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterator over the unclaimed events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
    }
}

/// Continuous cursor position fed by motion notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    position: Option<ScreenPoint>,
}

impl PointerTracker {
    /// Records the latest cursor position.
    pub fn move_to(&mut self, position: ScreenPoint) {
        self.position = Some(position);
    }

    /// Last observed cursor position, if the pointer has moved at all.
    #[must_use]
    pub const fn position(&self) -> Option<ScreenPoint> {
        self.position
    }
}

/// Input owned by the frame loop: the queue plus the continuous cursor.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    queue: EventQueue,
    pointer: PointerTracker,
}

impl InputState {
    /// Routes a host notification to the tracker or the frame queue.
    pub fn receive(&mut self, event: PointerEvent) {
        match event.kind() {
            PointerKind::Move => self.pointer.move_to(event.position()),
            PointerKind::Press | PointerKind::Release | PointerKind::Click => {
                self.queue.push(event);
            }
        }
    }

    /// Mutable access to the frame queue for consumers.
    pub fn queue_mut(&mut self) -> &mut EventQueue {
        &mut self.queue
    }

    /// Read-only view of the frame queue.
    #[must_use]
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Continuous cursor position.
    #[must_use]
    pub const fn pointer(&self) -> Option<ScreenPoint> {
        self.pointer.position()
    }

    /// Discards every unclaimed event at the end of a frame.
    pub fn end_frame(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_takes_only_the_first_match() {
        let mut queue = EventQueue::new();
        queue.push(PointerEvent::release(1.0, 1.0));
        queue.push(PointerEvent::release(2.0, 2.0));

        let claimed = queue.claim(|event| event.kind() == PointerKind::Release);

        assert_eq!(claimed, Some(PointerEvent::release(1.0, 1.0)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn claim_without_match_leaves_queue_untouched() {
        let mut queue = EventQueue::new();
        queue.push(PointerEvent::press(1.0, 1.0));
        assert!(queue.claim(|event| event.kind() == PointerKind::Click).is_none());
        assert_eq!(queue.len(), 1);
    }
}
