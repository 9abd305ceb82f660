#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for the lock funnel.
//!
//! The window is sized to the scene's canvas and drawn in canvas pixels, so
//! pointer coordinates reported by macroquad are forwarded unchanged.

mod draw;

use anyhow::Result;
use glam::Vec2;
use lockfunnel_core::PointerEvent;
use lockfunnel_rendering::{FrameInput, Presentation, RenderingBackend, Scene};
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, is_mouse_button_released, mouse_position, KeyCode,
    MouseButton,
};
use std::time::Duration;
use tracing::info;

/// Translates polled mouse state into the ordered pointer events of a frame.
///
/// Macroquad reports button transitions per frame rather than as discrete
/// events; this latch recreates the press, release and click sequence a
/// browser would deliver for the same interaction.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerInputState {
    last_position: Option<Vec2>,
    press_latched: bool,
}

impl PointerInputState {
    /// Records one frame of mouse state and returns the events it produced.
    ///
    /// A moved cursor yields a move first. A click follows every release
    /// whose press was observed earlier or on the same frame.
    pub fn observe(&mut self, position: Vec2, pressed: bool, released: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if self.last_position != Some(position) {
            self.last_position = Some(position);
            events.push(PointerEvent::moved(position.x, position.y));
        }

        if pressed {
            self.press_latched = true;
            events.push(PointerEvent::press(position.x, position.y));
        }

        if released {
            events.push(PointerEvent::release(position.x, position.y));
            if self.press_latched {
                self.press_latched = false;
                events.push(PointerEvent::click(position.x, position.y));
            }
        }

        events
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend logs frame rate once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

/// Counts frames and reports the rate once a full second has been rendered.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    slowest: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct FpsReport {
    frames_per_second: f32,
    slowest_frame: Duration,
}

impl FpsCounter {
    fn record_frame(&mut self, frame: Duration) -> Option<FpsReport> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);
        self.slowest = self.slowest.max(frame);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let report = FpsReport {
            frames_per_second: self.frames as f32 / self.elapsed.as_secs_f32(),
            slowest_frame: self.slowest,
        };
        *self = Self::default();
        Some(report)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: scene.canvas.x.round() as i32,
            window_height: scene.canvas.y.round() as i32,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = draw::to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut pointer_input = PointerInputState::default();

            loop {
                if is_key_pressed(KeyCode::Escape) {
                    break;
                }

                macroquad::window::clear_background(background);

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                let (cursor_x, cursor_y) = mouse_position();
                let cursor = Vec2::new(cursor_x, cursor_y);
                let pointer_events = pointer_input.observe(
                    cursor,
                    is_mouse_button_pressed(MouseButton::Left),
                    is_mouse_button_released(MouseButton::Left),
                );

                update_scene(frame_dt, FrameInput { pointer_events }, &mut scene);
                draw::draw_scene(&scene, cursor);

                if let Some(report) = fps_counter.record_frame(frame_dt) {
                    if show_fps {
                        info!(
                            fps = report.frames_per_second,
                            slowest_frame_ms = report.slowest_frame.as_secs_f32() * 1000.0,
                            "frame rate"
                        );
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}
