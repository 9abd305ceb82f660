#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for the lock funnel.
//!
//! The [`World`] owns the frame input, the start/stop button, both parameter
//! sliders and the population. Adapters feed it [`Command`] values through
//! [`apply`]; a [`Command::Tick`] runs one complete frame in a fixed order:
//!
//! 1. the toggle button claims clicks on its region,
//! 2. the sliders claim presses and releases (prevalence before
//!    effectiveness) and follow the cursor while dragging,
//! 3. the population ticks if the simulation is running,
//! 4. every unclaimed event is discarded.

mod layout;

use std::time::Duration;

use lockfunnel_core::{Command, Event, PersonStage, PointerKind, SimulationParameters};
use lockfunnel_system_input::InputState;
use lockfunnel_system_lifecycle::Population;
use lockfunnel_system_sliders::SliderPanel;
use lockfunnel_system_toggle::{RunTransition, ToggleButton};
use tracing::{debug, trace};

pub use self::layout::{Layout, MIN_CANVAS_WIDTH};
pub use lockfunnel_system_lifecycle::{
    Config as PopulationConfig, PersonTemplate, PoolSizes, SpawnArea,
};
pub use lockfunnel_system_sliders::SliderGeometry;

/// Configuration required to construct a world.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Config {
    layout: Layout,
    parameters: SimulationParameters,
    population: PopulationConfig,
}

impl Config {
    /// Creates a configuration from explicit parts.
    ///
    /// The population's spawn area is always derived from the layout.
    #[must_use]
    pub const fn new(
        layout: Layout,
        parameters: SimulationParameters,
        population: PopulationConfig,
    ) -> Self {
        Self {
            layout,
            parameters,
            population,
        }
    }

    /// Surface geometry.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Initial slider values.
    #[must_use]
    pub const fn parameters(&self) -> SimulationParameters {
        self.parameters
    }

    /// Population capacity, timing and seed.
    #[must_use]
    pub const fn population(&self) -> &PopulationConfig {
        &self.population
    }
}

/// Represents the authoritative simulation state.
#[derive(Debug)]
pub struct World {
    layout: Layout,
    input: InputState,
    toggle: ToggleButton,
    sliders: SliderPanel,
    population: Population,
    frame_index: u64,
}

impl World {
    /// Creates a stopped world using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a stopped world from the provided configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let layout = *config.layout();
        let population = config
            .population()
            .with_spawn_area(layout.spawn_area());

        Self {
            layout,
            input: InputState::default(),
            toggle: ToggleButton::new(layout.button()),
            sliders: SliderPanel::new(
                layout.prevalence_slider(),
                layout.effectiveness_slider(),
                config.parameters(),
            ),
            population: Population::new(population),
            frame_index: 0,
        }
    }

    fn run_frame(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.frame_index = self.frame_index.saturating_add(1);
        let first_event = out_events.len();
        let pointer = self.input.pointer();

        match self.toggle.update(self.input.queue_mut()) {
            Some(RunTransition::Started) => {
                self.population.reset();
                out_events.push(Event::RunStarted {
                    capacity: self.population.config().capacity(),
                });
            }
            Some(RunTransition::Stopped) => out_events.push(Event::RunStopped),
            None => {}
        }

        self.sliders
            .update(self.input.queue_mut(), pointer, out_events);

        if self.toggle.is_running() {
            out_events.push(Event::TimeAdvanced { dt });
            self.population.tick(dt, out_events);
        }

        let discarded = self.input.queue().len();
        if discarded > 0 {
            trace!(frame = self.frame_index, discarded, "dropping unclaimed pointer events");
        }
        self.input.end_frame();

        for event in &out_events[first_event..] {
            log_event(self.frame_index, event);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn log_event(frame: u64, event: &Event) {
    match event {
        Event::RunStarted { capacity } => debug!(frame, capacity, "simulation started"),
        Event::RunStopped => debug!(frame, "simulation stopped"),
        Event::DragStarted { parameter } => debug!(frame, ?parameter, "slider drag started"),
        Event::DragReleased { parameter } => debug!(frame, ?parameter, "slider drag released"),
        Event::ParameterChanged { parameter, value } => {
            debug!(frame, ?parameter, value = value.get(), "parameter changed");
        }
        Event::PersonSpawned { person, position } => trace!(
            frame,
            person = person.get(),
            stage = PersonStage::Spawning.label(),
            x = position.x(),
            y = position.y(),
            "person spawned"
        ),
        Event::PersonActivated { person } => trace!(
            frame,
            person = person.get(),
            stage = PersonStage::Active.label(),
            "person entered stage"
        ),
        Event::TimeAdvanced { .. } => {}
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Pointer { event } => {
            if event.kind() != PointerKind::Move {
                debug!(
                    kind = ?event.kind(),
                    x = event.position().x(),
                    y = event.position().y(),
                    "pointer event queued"
                );
            }
            world.input.receive(event);
        }
        Command::Tick { dt } => world.run_frame(dt, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use lockfunnel_core::{
        CursorHint, ParameterKind, Percentage, PersonSnapshot, ScreenPoint, ScreenRect,
        SimulationParameters,
    };

    use super::{Layout, PoolSizes, SliderGeometry, World};

    /// Reports whether the simulation is running.
    #[must_use]
    pub fn is_running(world: &World) -> bool {
        world.toggle.is_running()
    }

    /// Current value of a single parameter.
    #[must_use]
    pub fn parameter(world: &World, kind: ParameterKind) -> Percentage {
        world.sliders.parameters().get(kind)
    }

    /// Current values of both parameters.
    #[must_use]
    pub fn parameters(world: &World) -> SimulationParameters {
        world.sliders.parameters()
    }

    /// Whether the slider for `kind` is following the cursor.
    #[must_use]
    pub fn slider_dragging(world: &World, kind: ParameterKind) -> bool {
        world.sliders.slider(kind).is_dragging()
    }

    /// Track geometry of the slider for `kind`.
    #[must_use]
    pub fn slider_geometry(world: &World, kind: ParameterKind) -> SliderGeometry {
        world.sliders.slider(kind).geometry()
    }

    /// Cursor shape implied by the sliders.
    #[must_use]
    pub fn cursor_hint(world: &World) -> CursorHint {
        world.sliders.cursor_hint(world.input.pointer())
    }

    /// Last reported cursor position.
    #[must_use]
    pub fn pointer(world: &World) -> Option<ScreenPoint> {
        world.input.pointer()
    }

    /// Region of the start/stop button.
    #[must_use]
    pub fn button_region(world: &World) -> ScreenRect {
        world.toggle.region()
    }

    /// Whether the cursor hovers the start/stop button.
    #[must_use]
    pub fn button_hovered(world: &World) -> bool {
        world
            .input
            .pointer()
            .map_or(false, |point| world.toggle.hit_test(point))
    }

    /// Surface geometry the world was built with.
    #[must_use]
    pub fn layout(world: &World) -> &Layout {
        &world.layout
    }

    /// Sizes of the pending, active and done pools.
    #[must_use]
    pub fn pool_sizes(world: &World) -> PoolSizes {
        world.population.pool_sizes()
    }

    /// Number of frames processed so far.
    #[must_use]
    pub fn frame_index(world: &World) -> u64 {
        world.frame_index
    }

    /// Captures a read-only view of every spawned person.
    #[must_use]
    pub fn person_view(world: &World) -> PersonView {
        PersonView {
            snapshots: world.population.snapshots(),
        }
    }

    /// Read-only snapshot describing all spawned persons.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct PersonView {
        snapshots: Vec<PersonSnapshot>,
    }

    impl PersonView {
        /// Iterator over the captured snapshots ordered by identifier.
        pub fn iter(&self) -> impl Iterator<Item = &PersonSnapshot> {
            self.snapshots.iter()
        }

        /// Number of spawned persons.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether nobody has spawned.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<PersonSnapshot> {
            self.snapshots
        }
    }
}
