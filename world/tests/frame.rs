use std::time::Duration;

use lockfunnel_core::{
    Command, CursorHint, Event, ParameterKind, Percentage, PointerEvent, ScreenPoint,
    SimulationParameters,
};
use lockfunnel_world::{self as world, query, Config, Layout, PoolSizes, PopulationConfig, World};

const FRAME: Duration = Duration::from_millis(16);

fn pointer(world: &mut World, event: PointerEvent, events: &mut Vec<Event>) {
    world::apply(world, Command::Pointer { event }, events);
}

fn tick(world: &mut World, dt: Duration, events: &mut Vec<Event>) {
    world::apply(world, Command::Tick { dt }, events);
}

fn button_center(world: &World) -> ScreenPoint {
    let region = query::button_region(world);
    ScreenPoint::new(
        region.origin().x() + region.width() / 2.0,
        region.origin().y() + region.height() / 2.0,
    )
}

fn click_button(world: &mut World, events: &mut Vec<Event>) {
    let center = button_center(world);
    pointer(world, PointerEvent::click(center.x(), center.y()), events);
}

fn handle_center(world: &World, kind: ParameterKind) -> ScreenPoint {
    let geometry = query::slider_geometry(world, kind);
    let region = geometry.handle_region(query::parameter(world, kind));
    ScreenPoint::new(
        region.origin().x() + region.width() / 2.0,
        region.origin().y() + region.height() / 2.0,
    )
}

#[test]
fn start_click_seeds_the_pending_pool_and_spawns_on_the_same_frame() {
    let mut world = World::new();
    let mut events = Vec::new();

    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);

    assert!(query::is_running(&world));
    assert_eq!(events.first(), Some(&Event::RunStarted { capacity: 50 }));
    assert_eq!(
        query::pool_sizes(&world),
        PoolSizes {
            pending: 49,
            active: 1,
            done: 0,
        }
    );
}

#[test]
fn stopped_frames_leave_the_population_untouched() {
    let mut world = World::new();
    let mut events = Vec::new();

    for _ in 0..100 {
        tick(&mut world, FRAME, &mut events);
    }

    assert!(events.is_empty());
    assert_eq!(query::pool_sizes(&world), PoolSizes::default());
    assert!(query::person_view(&world).is_empty());
    assert_eq!(query::frame_index(&world), 100);
}

#[test]
fn stopping_freezes_persons_until_the_next_start() {
    let mut world = World::new();
    let mut events = Vec::new();

    click_button(&mut world, &mut events);
    for _ in 0..30 {
        tick(&mut world, FRAME, &mut events);
    }
    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);
    assert!(!query::is_running(&world));

    let frozen = query::person_view(&world);
    let sizes = query::pool_sizes(&world);
    for _ in 0..30 {
        tick(&mut world, FRAME, &mut events);
    }
    assert_eq!(query::person_view(&world), frozen);
    assert_eq!(query::pool_sizes(&world), sizes);
    assert!(events.contains(&Event::RunStopped));
}

#[test]
fn restarting_discards_the_previous_run() {
    let mut world = World::new();
    let mut events = Vec::new();

    click_button(&mut world, &mut events);
    for _ in 0..60 {
        tick(&mut world, FRAME, &mut events);
    }
    assert!(query::pool_sizes(&world).active > 1);

    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);
    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);

    assert!(query::is_running(&world));
    assert_eq!(
        query::pool_sizes(&world),
        PoolSizes {
            pending: 49,
            active: 1,
            done: 0,
        }
    );
}

#[test]
fn two_clicks_in_one_frame_flip_once() {
    let mut world = World::new();
    let mut events = Vec::new();

    click_button(&mut world, &mut events);
    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);

    assert!(query::is_running(&world));
    let starts = events
        .iter()
        .filter(|event| matches!(event, Event::RunStarted { .. }))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn clicks_outside_the_button_are_ignored() {
    let mut world = World::new();
    let mut events = Vec::new();

    pointer(&mut world, PointerEvent::click(5.0, 5.0), &mut events);
    tick(&mut world, FRAME, &mut events);
    assert!(!query::is_running(&world));

    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);
    assert!(query::is_running(&world));
}

#[test]
fn dragging_a_slider_updates_its_parameter() {
    let mut world = World::new();
    let mut events = Vec::new();
    let handle = handle_center(&world, ParameterKind::LockPrevalence);
    let track = query::slider_geometry(&world, ParameterKind::LockPrevalence);

    pointer(&mut world, PointerEvent::moved(handle.x(), handle.y()), &mut events);
    assert_eq!(query::cursor_hint(&world), CursorHint::ResizeHorizontal);

    pointer(&mut world, PointerEvent::press(handle.x(), handle.y()), &mut events);
    tick(&mut world, FRAME, &mut events);
    assert!(query::slider_dragging(&world, ParameterKind::LockPrevalence));

    let target = track.track_origin().x() + track.track_length() * 0.25;
    pointer(&mut world, PointerEvent::moved(target, 300.0), &mut events);
    tick(&mut world, FRAME, &mut events);
    assert_eq!(
        query::parameter(&world, ParameterKind::LockPrevalence),
        Percentage::saturating(25)
    );

    pointer(&mut world, PointerEvent::release(target, 300.0), &mut events);
    tick(&mut world, FRAME, &mut events);
    assert!(!query::slider_dragging(&world, ParameterKind::LockPrevalence));
    assert_eq!(
        query::parameter(&world, ParameterKind::LockEffectiveness).get(),
        68
    );
    assert!(events.contains(&Event::DragReleased {
        parameter: ParameterKind::LockPrevalence
    }));
}

#[test]
fn slider_changes_do_not_affect_the_running_population() {
    let mut world = World::new();
    let mut events = Vec::new();
    click_button(&mut world, &mut events);
    tick(&mut world, FRAME, &mut events);

    let handle = handle_center(&world, ParameterKind::LockEffectiveness);
    pointer(&mut world, PointerEvent::moved(handle.x(), handle.y()), &mut events);
    pointer(&mut world, PointerEvent::press(handle.x(), handle.y()), &mut events);
    tick(&mut world, FRAME, &mut events);
    pointer(&mut world, PointerEvent::moved(0.0, handle.y()), &mut events);
    tick(&mut world, FRAME, &mut events);

    assert_eq!(
        query::parameter(&world, ParameterKind::LockEffectiveness),
        Percentage::MIN
    );
    assert!(query::is_running(&world));
    assert_eq!(query::pool_sizes(&world).total(), 50);
}

#[test]
fn button_hover_follows_the_pointer() {
    let mut world = World::new();
    let mut events = Vec::new();
    assert!(!query::button_hovered(&world));

    let center = button_center(&world);
    pointer(&mut world, PointerEvent::moved(center.x(), center.y()), &mut events);
    assert!(query::button_hovered(&world));

    pointer(&mut world, PointerEvent::moved(center.x(), 400.0), &mut events);
    assert!(!query::button_hovered(&world));
}

#[test]
fn configured_capacity_and_parameters_are_honoured() {
    let config = Config::new(
        Layout::for_canvas(640.0, 480.0),
        SimulationParameters::new(Percentage::saturating(40), Percentage::saturating(90)),
        PopulationConfig::new(3, Duration::from_millis(100), 9),
    );
    let mut world = World::with_config(config);
    let mut events = Vec::new();

    assert_eq!(query::parameters(&world), config.parameters());
    click_button(&mut world, &mut events);
    for _ in 0..20 {
        tick(&mut world, Duration::from_millis(50), &mut events);
    }

    assert_eq!(
        query::pool_sizes(&world),
        PoolSizes {
            pending: 0,
            active: 3,
            done: 0,
        }
    );
}

#[test]
fn identical_input_replays_identically() {
    let run = || {
        let mut world = World::new();
        let mut events = Vec::new();
        click_button(&mut world, &mut events);
        for frame in 0..240u64 {
            let dt = Duration::from_millis(10 + frame % 7);
            tick(&mut world, dt, &mut events);
        }
        (events, query::person_view(&world).into_vec())
    };

    let (first_events, first_persons) = run();
    let (second_events, second_persons) = run();
    assert_eq!(first_events, second_events);
    assert_eq!(first_persons, second_persons);
}
