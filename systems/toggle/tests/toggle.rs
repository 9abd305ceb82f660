use lockfunnel_core::{PointerEvent, PointerKind, ScreenPoint, ScreenRect};
use lockfunnel_system_input::EventQueue;
use lockfunnel_system_toggle::{RunTransition, ToggleButton};

fn button() -> ToggleButton {
    ToggleButton::new(ScreenRect::new(ScreenPoint::new(260.0, 12.0), 200.0, 36.0))
}

#[test]
fn click_inside_region_starts_then_stops() {
    let mut button = button();
    let mut queue = EventQueue::new();

    queue.push(PointerEvent::click(300.0, 30.0));
    assert_eq!(button.update(&mut queue), Some(RunTransition::Started));
    assert!(button.is_running());

    queue.push(PointerEvent::click(459.0, 47.0));
    assert_eq!(button.update(&mut queue), Some(RunTransition::Stopped));
    assert!(!button.is_running());
}

#[test]
fn several_clicks_in_one_frame_flip_once() {
    let mut button = button();
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::click(300.0, 30.0));
    queue.push(PointerEvent::click(310.0, 30.0));
    queue.push(PointerEvent::click(320.0, 30.0));

    assert_eq!(button.update(&mut queue), Some(RunTransition::Started));
    assert!(button.is_running());
    assert!(queue.is_empty(), "all qualifying clicks are claimed");
}

#[test]
fn clicks_outside_region_remain_queued() {
    let mut button = button();
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::click(100.0, 100.0));

    assert_eq!(button.update(&mut queue), None);
    assert!(!button.is_running());
    assert_eq!(queue.len(), 1);
}

#[test]
fn presses_and_releases_are_ignored() {
    let mut button = button();
    let mut queue = EventQueue::new();
    queue.push(PointerEvent::press(300.0, 30.0));
    queue.push(PointerEvent::release(300.0, 30.0));

    assert_eq!(button.update(&mut queue), None);
    let kinds: Vec<PointerKind> = queue.iter().map(PointerEvent::kind).collect();
    assert_eq!(kinds, vec![PointerKind::Press, PointerKind::Release]);
}

#[test]
fn hit_test_includes_edges() {
    let button = button();
    assert!(button.hit_test(ScreenPoint::new(260.0, 12.0)));
    assert!(button.hit_test(ScreenPoint::new(460.0, 48.0)));
    assert!(!button.hit_test(ScreenPoint::new(460.5, 48.0)));
}
