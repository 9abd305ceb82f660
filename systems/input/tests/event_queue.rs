use lockfunnel_core::{PointerEvent, PointerKind, ScreenPoint};
use lockfunnel_system_input::{EventQueue, InputState};

#[test]
fn drain_removes_every_match_and_keeps_the_rest_in_order() {
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::press(10.0, 10.0));
    queue.push(PointerEvent::click(20.0, 20.0));
    queue.push(PointerEvent::release(30.0, 30.0));
    queue.push(PointerEvent::click(40.0, 40.0));

    let clicks = queue.drain(|event| event.kind() == PointerKind::Click);

    assert_eq!(
        clicks,
        vec![PointerEvent::click(20.0, 20.0), PointerEvent::click(40.0, 40.0)]
    );
    let remaining: Vec<PointerEvent> = queue.iter().copied().collect();
    assert_eq!(
        remaining,
        vec![PointerEvent::press(10.0, 10.0), PointerEvent::release(30.0, 30.0)]
    );
}

#[test]
fn drained_events_cannot_be_claimed_twice() {
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::click(5.0, 5.0));

    let first = queue.drain(|event| event.kind() == PointerKind::Click);
    let second = queue.drain(|event| event.kind() == PointerKind::Click);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn clear_discards_unclaimed_events() {
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::press(1.0, 2.0));
    queue.push(PointerEvent::click(1.0, 2.0));

    queue.clear();

    assert!(queue.is_empty());
}

#[test]
fn motion_updates_pointer_without_queueing() {
    let mut input = InputState::default();
    assert_eq!(input.pointer(), None);

    input.receive(PointerEvent::moved(12.0, 34.0));
    input.receive(PointerEvent::press(12.0, 34.0));
    input.receive(PointerEvent::moved(50.0, 34.0));

    assert_eq!(input.pointer(), Some(ScreenPoint::new(50.0, 34.0)));
    assert_eq!(input.queue().len(), 1);
    assert_eq!(
        input.queue().iter().next().map(PointerEvent::kind),
        Some(PointerKind::Press)
    );
}

#[test]
fn end_frame_keeps_pointer_but_empties_queue() {
    let mut input = InputState::default();
    input.receive(PointerEvent::moved(3.0, 4.0));
    input.receive(PointerEvent::release(3.0, 4.0));

    input.end_frame();

    assert!(input.queue().is_empty());
    assert_eq!(input.pointer(), Some(ScreenPoint::new(3.0, 4.0)));
}
