//! Windowless driver that starts the simulation and runs a fixed number of frames.

use std::time::Duration;

use lockfunnel_core::{Command, Event, PersonStage, PointerEvent, SimulationParameters};
use lockfunnel_world::{self as world, query, PoolSizes, World};
use tracing::info;

/// State of the world after a headless run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HeadlessSummary {
    pub(crate) frames: u32,
    pub(crate) running: bool,
    pub(crate) parameters: SimulationParameters,
    pub(crate) pools: PoolSizes,
    pub(crate) spawning: usize,
    pub(crate) active: usize,
    pub(crate) spawned_events: usize,
}

impl HeadlessSummary {
    fn stage_count(&self, stage: PersonStage) -> usize {
        match stage {
            PersonStage::Spawning => self.spawning,
            PersonStage::Active => self.active,
        }
    }

    pub(crate) fn log(&self) {
        info!(
            frames = self.frames,
            running = self.running,
            lock_prevalence = self.parameters.lock_prevalence.get(),
            lock_effectiveness = self.parameters.lock_effectiveness.get(),
            pending = self.pools.pending,
            active_pool = self.pools.active,
            done = self.pools.done,
            spawned = self.spawned_events,
            "headless run finished"
        );
        for stage in [PersonStage::Spawning, PersonStage::Active] {
            info!(stage = stage.label(), count = self.stage_count(stage), "persons by stage");
        }
    }
}

/// Clicks the start button, then runs `frames` ticks of `frame_dt`.
///
/// The click is only processed by the first tick, so zero frames leave the
/// simulation stopped.
pub(crate) fn run(world: &mut World, frames: u32, frame_dt: Duration) -> HeadlessSummary {
    let mut events = Vec::new();
    let region = query::button_region(world);
    let x = region.origin().x() + region.width() / 2.0;
    let y = region.origin().y() + region.height() / 2.0;

    for event in [PointerEvent::moved(x, y), PointerEvent::click(x, y)] {
        world::apply(world, Command::Pointer { event }, &mut events);
    }
    events.clear();

    let mut spawned_events = 0;
    for _ in 0..frames {
        world::apply(world, Command::Tick { dt: frame_dt }, &mut events);
        spawned_events += events
            .iter()
            .filter(|event| matches!(event, Event::PersonSpawned { .. }))
            .count();
        events.clear();
    }

    let persons = query::person_view(world);
    let spawning = persons
        .iter()
        .filter(|person| person.stage == PersonStage::Spawning)
        .count();

    HeadlessSummary {
        frames,
        running: query::is_running(world),
        parameters: query::parameters(world),
        pools: query::pool_sizes(world),
        spawning,
        active: persons.len() - spawning,
        spawned_events,
    }
}
