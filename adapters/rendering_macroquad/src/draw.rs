//! Immediate-mode drawing of a [`Scene`] with macroquad primitives.
//!
//! All coordinates are canvas pixels. Text is anchored the way the layout
//! describes it (centered horizontally, with an explicit vertical anchor),
//! which macroquad does not do natively since `draw_text` takes a baseline.

use glam::Vec2;
use lockfunnel_core::CursorHint;
use lockfunnel_rendering::{
    palette, ButtonPresentation, CaptionPlacement, Color, DebugOverlay, FunnelBox, FunnelDiagram,
    PersonPresentation, Scene, SliderPresentation,
};
use macroquad::{
    math::Vec2 as MacroquadVec2,
    shapes::{
        draw_circle, draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines,
        draw_triangle,
    },
    text::{draw_text, measure_text},
};

const OUTLINE: f32 = 3.0;
const LABEL_SIZE: u16 = 14;
const HEADLINE_SIZE: u16 = 16;
const DEBUG_TEXT_SIZE: u16 = 12;
const LINE_HEIGHT: f32 = 14.0;
const TRACK_THICKNESS: f32 = 3.0;
const OUTCOME_TEXT_OFFSET: f32 = 52.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Top,
    Middle,
    Bottom,
}

pub(crate) fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

/// Draws every element of the scene back to front.
pub(crate) fn draw_scene(scene: &Scene, cursor: Vec2) {
    if let Some(overlay) = &scene.debug {
        draw_debug_overlay(overlay, scene.canvas);
    }

    draw_button(&scene.button);
    for slider in &scene.sliders {
        draw_slider(slider);
    }
    draw_funnel(&scene.funnel);
    draw_persons(&scene.persons);

    if scene.cursor == CursorHint::ResizeHorizontal {
        draw_resize_hint(cursor);
    }
}

fn draw_text_at(text: &str, x: f32, y: f32, anchor: Anchor, size: u16, color: Color, center: bool) {
    let dimensions = measure_text(text, None, size, 1.0);
    let left = if center { x - dimensions.width / 2.0 } else { x };
    let baseline = match anchor {
        Anchor::Top => y + dimensions.offset_y,
        Anchor::Middle => y - dimensions.height / 2.0 + dimensions.offset_y,
        Anchor::Bottom => y,
    };
    draw_text(text, left, baseline, f32::from(size), to_macroquad_color(color));
}

fn draw_centered(text: &str, x: f32, y: f32, anchor: Anchor, size: u16, color: Color) {
    draw_text_at(text, x, y, anchor, size, color, true);
}

fn draw_button(button: &ButtonPresentation) {
    let region = button.region;
    let origin = region.origin();
    draw_rectangle(
        origin.x(),
        origin.y(),
        region.width(),
        region.height(),
        to_macroquad_color(button.fill_color()),
    );
    draw_centered(
        button.label(),
        origin.x() + region.width() / 2.0,
        origin.y() + region.height() / 2.0,
        Anchor::Middle,
        HEADLINE_SIZE,
        palette::BUTTON_TEXT,
    );
}

fn draw_slider(slider: &SliderPresentation) {
    let ink = to_macroquad_color(palette::BOUNDARY);
    let origin = slider.track_origin;
    let handle = slider.handle;
    let tick_height = handle.height();

    draw_rectangle(
        origin.x,
        origin.y + tick_height / 2.0 - 1.0,
        slider.track_length,
        TRACK_THICKNESS,
        ink,
    );
    draw_rectangle(origin.x, origin.y, TRACK_THICKNESS, tick_height, ink);
    draw_rectangle(
        origin.x + slider.track_length,
        origin.y,
        TRACK_THICKNESS,
        tick_height,
        ink,
    );
    draw_centered(
        slider.caption(),
        origin.x + slider.track_length / 2.0,
        origin.y + tick_height + 12.0,
        Anchor::Middle,
        LABEL_SIZE,
        palette::BOUNDARY,
    );

    draw_rectangle(
        handle.origin().x(),
        handle.origin().y(),
        handle.width(),
        handle.height(),
        to_macroquad_color(slider.handle_color()),
    );
    draw_centered(
        &slider.value_label(),
        handle.origin().x() + handle.width() / 2.0,
        origin.y - 4.0,
        Anchor::Bottom,
        LABEL_SIZE,
        palette::BOUNDARY,
    );
}

fn draw_funnel(funnel: &FunnelDiagram) {
    let decision = &funnel.decision;
    draw_circle_lines(
        decision.center.x,
        decision.center.y,
        decision.radius,
        OUTLINE,
        to_macroquad_color(palette::BOUNDARY),
    );
    let top = decision.center.y - decision.radius;
    draw_centered(
        decision.caption[0],
        decision.center.x,
        top - 20.0,
        Anchor::Bottom,
        LABEL_SIZE,
        palette::BOUNDARY,
    );
    draw_centered(
        decision.caption[1],
        decision.center.x,
        top - 4.0,
        Anchor::Bottom,
        LABEL_SIZE,
        palette::BOUNDARY,
    );

    for panel in &funnel.boxes {
        draw_funnel_box(panel);
    }
}

fn draw_funnel_box(panel: &FunnelBox) {
    let FunnelBox {
        origin,
        size,
        accent,
        ..
    } = *panel;
    let half = OUTLINE / 2.0;
    draw_rectangle_lines(
        origin.x - half,
        origin.y - half,
        size.x + OUTLINE,
        size.y + OUTLINE,
        OUTLINE,
        to_macroquad_color(palette::BOUNDARY),
    );
    draw_line(
        origin.x,
        origin.y - 2.0,
        origin.x,
        origin.y + size.y + 2.0,
        OUTLINE,
        to_macroquad_color(accent),
    );

    match panel.placement {
        CaptionPlacement::Above => {
            let center = origin.x + size.x / 2.0;
            let count = panel.lines.len();
            for (index, line) in panel.lines.iter().enumerate() {
                let lines_below = (count - 1 - index) as f32;
                draw_centered(
                    line,
                    center,
                    origin.y - 4.0 - lines_below * LINE_HEIGHT,
                    Anchor::Bottom,
                    LABEL_SIZE,
                    palette::BOUNDARY,
                );
            }
        }
        CaptionPlacement::Right => {
            let center = origin.x + size.x + OUTCOME_TEXT_OFFSET;
            let middle = origin.y + size.y / 2.0;
            if let Some(headline) = &panel.headline {
                draw_centered(headline, center, middle, Anchor::Bottom, HEADLINE_SIZE, accent);
            }
            for (index, line) in panel.lines.iter().enumerate() {
                draw_centered(
                    line,
                    center,
                    middle + index as f32 * LINE_HEIGHT,
                    Anchor::Top,
                    LABEL_SIZE,
                    palette::BOUNDARY,
                );
            }
        }
    }
}

fn draw_persons(persons: &[PersonPresentation]) {
    for person in persons {
        if person.radius <= 0.0 {
            continue;
        }
        draw_circle(
            person.center.x,
            person.center.y,
            person.radius,
            to_macroquad_color(person.color()),
        );
    }
}

fn draw_debug_overlay(overlay: &DebugOverlay, canvas: Vec2) {
    let grid = to_macroquad_color(palette::GRID);
    for x in overlay.grid_lines(canvas.x) {
        draw_line(x, 0.0, x, canvas.y, 1.0, grid);
    }
    for y in overlay.grid_lines(canvas.y) {
        draw_line(0.0, y, canvas.x, y, 1.0, grid);
    }

    let Some(pointer) = overlay.pointer else {
        return;
    };

    let crosshair = to_macroquad_color(palette::CROSSHAIR);
    draw_line(pointer.x, 0.0, pointer.x, canvas.y, 1.0, crosshair);
    draw_line(0.0, pointer.y, canvas.x, pointer.y, 1.0, crosshair);

    if let Some([x_label, y_label]) = overlay.pointer_labels() {
        let left = canvas.x - 40.0;
        draw_text_at(&x_label, left, 12.0, Anchor::Top, DEBUG_TEXT_SIZE, palette::CROSSHAIR, false);
        draw_text_at(&y_label, left, 24.0, Anchor::Top, DEBUG_TEXT_SIZE, palette::CROSSHAIR, false);
    }
}

fn draw_resize_hint(cursor: Vec2) {
    let color = to_macroquad_color(palette::BOUNDARY);
    let tip = 8.0;
    let half_height = 4.0;
    let y = cursor.y + 14.0;

    draw_triangle(
        MacroquadVec2::new(cursor.x - tip, y),
        MacroquadVec2::new(cursor.x - 2.0, y - half_height),
        MacroquadVec2::new(cursor.x - 2.0, y + half_height),
        color,
    );
    draw_triangle(
        MacroquadVec2::new(cursor.x + tip, y),
        MacroquadVec2::new(cursor.x + 2.0, y - half_height),
        MacroquadVec2::new(cursor.x + 2.0, y + half_height),
        color,
    );
}
