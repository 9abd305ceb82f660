//! Translation of world queries into renderer scene descriptors.

use anyhow::Result;
use glam::Vec2;
use lockfunnel_core::{ParameterKind, ScreenPoint};
use lockfunnel_rendering::{
    ButtonPresentation, DebugOverlay, FunnelDiagram, PersonPresentation, Scene,
    SliderPresentation,
};
use lockfunnel_world::{query, World};

fn to_vec2(point: ScreenPoint) -> Vec2 {
    Vec2::new(point.x(), point.y())
}

/// Builds the initial scene, with the debug overlay when requested.
pub(crate) fn build_scene(world: &World, debug: bool) -> Result<Scene> {
    let layout = query::layout(world);
    let mut scene = Scene::new(
        Vec2::new(layout.canvas_width(), layout.canvas_height()),
        button(world),
        sliders(world),
        funnel(world),
    );
    if debug {
        scene.debug = Some(DebugOverlay::new(
            DebugOverlay::DEFAULT_GRID_SPACING,
            query::pointer(world).map(to_vec2),
        )?);
    }
    refresh_scene(world, &mut scene);
    Ok(scene)
}

/// Replaces every dynamic part of the scene with the world's current state.
pub(crate) fn refresh_scene(world: &World, scene: &mut Scene) {
    scene.button = button(world);
    scene.sliders = sliders(world);
    scene.funnel = funnel(world);
    scene.persons = query::person_view(world)
        .iter()
        .map(|person| {
            PersonPresentation::new(to_vec2(person.position), person.radius as f32, person.stage)
        })
        .collect();
    scene.cursor = query::cursor_hint(world);
    if let Some(overlay) = scene.debug.as_mut() {
        overlay.pointer = query::pointer(world).map(to_vec2);
    }
}

fn button(world: &World) -> ButtonPresentation {
    ButtonPresentation::new(
        query::button_region(world),
        query::is_running(world),
        query::button_hovered(world),
    )
}

fn sliders(world: &World) -> Vec<SliderPresentation> {
    let pointer = query::pointer(world);
    ParameterKind::ALL
        .iter()
        .map(|&kind| {
            let geometry = query::slider_geometry(world, kind);
            let value = query::parameter(world, kind);
            let handle = geometry.handle_region(value);
            let highlighted = query::slider_dragging(world, kind)
                || pointer.map_or(false, |point| handle.contains(point));
            SliderPresentation::new(
                kind,
                to_vec2(geometry.track_origin()),
                geometry.track_length(),
                handle,
                value,
                highlighted,
            )
        })
        .collect()
}

fn funnel(world: &World) -> FunnelDiagram {
    let layout = query::layout(world);
    FunnelDiagram::new(
        to_vec2(layout.decision_center()),
        layout.decision_radius(),
        query::parameter(world, ParameterKind::LockEffectiveness),
    )
}
