use glam::Vec2;
use lockfunnel_core::{PointerEvent, PointerKind};
use lockfunnel_rendering_macroquad::PointerInputState;

#[derive(Clone, Copy)]
struct Frame {
    position: Vec2,
    pressed: bool,
    released: bool,
}

fn frame(x: f32, y: f32, pressed: bool, released: bool) -> Frame {
    Frame {
        position: Vec2::new(x, y),
        pressed,
        released,
    }
}

fn run_sequence(frames: &[Frame]) -> Vec<Vec<PointerEvent>> {
    let mut state = PointerInputState::default();
    frames
        .iter()
        .map(|frame| state.observe(frame.position, frame.pressed, frame.released))
        .collect()
}

fn kinds(events: &[PointerEvent]) -> Vec<PointerKind> {
    events.iter().map(PointerEvent::kind).collect()
}

#[test]
fn first_observation_reports_the_cursor_position() {
    let frames = run_sequence(&[frame(10.0, 20.0, false, false), frame(10.0, 20.0, false, false)]);

    assert_eq!(frames[0], vec![PointerEvent::moved(10.0, 20.0)]);
    assert!(frames[1].is_empty());
}

#[test]
fn press_then_release_produces_a_click() {
    let frames = run_sequence(&[
        frame(300.0, 30.0, true, false),
        frame(310.0, 30.0, false, false),
        frame(310.0, 30.0, false, true),
    ]);

    assert_eq!(kinds(&frames[0]), vec![PointerKind::Move, PointerKind::Press]);
    assert_eq!(kinds(&frames[1]), vec![PointerKind::Move]);
    assert_eq!(
        frames[2],
        vec![
            PointerEvent::release(310.0, 30.0),
            PointerEvent::click(310.0, 30.0)
        ]
    );
}

#[test]
fn quick_click_within_one_frame_keeps_event_order() {
    let frames = run_sequence(&[frame(5.0, 5.0, true, true)]);

    assert_eq!(
        kinds(&frames[0]),
        vec![
            PointerKind::Move,
            PointerKind::Press,
            PointerKind::Release,
            PointerKind::Click
        ]
    );
}

#[test]
fn release_without_observed_press_does_not_click() {
    let frames = run_sequence(&[frame(5.0, 5.0, false, true)]);

    assert_eq!(kinds(&frames[0]), vec![PointerKind::Move, PointerKind::Release]);
}

#[test]
fn pointer_sequence_is_deterministic() {
    let sequence = [
        frame(0.0, 0.0, false, false),
        frame(168.0, 96.0, true, false),
        frame(200.0, 96.0, false, false),
        frame(200.0, 96.0, false, true),
        frame(360.0, 30.0, true, true),
    ];

    assert_eq!(run_sequence(&sequence), run_sequence(&sequence));
}
