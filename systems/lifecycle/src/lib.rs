#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Timed spawn-and-advance lifecycle for the simulated population.
//!
//! A [`Population`] keeps its members in three disjoint pools. Resetting
//! seeds the pending pool to capacity; every tick then releases at most one
//! pending person once the spawn countdown expires and advances each active
//! person's stage timer by the same delta.
//!
//! Persons never leave the active pool: the outcome model that would route
//! them into the done pool is not defined yet, so that pool stays empty.

mod person;

use std::{f32::consts::TAU, time::Duration};

use lockfunnel_core::{Event, PersonId, PersonSnapshot, PersonStage, ScreenPoint};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use self::person::{Person, PersonTemplate};

const DEFAULT_CAPACITY: usize = 50;
const DEFAULT_SPAWN_INTERVAL: Duration = Duration::from_millis(200);
const DEFAULT_SPAWN_DURATION: Duration = Duration::from_millis(250);
const DEFAULT_PERSON_SIZE: u32 = 8;
const DEFAULT_RNG_SEED: u64 = 0x6c6f_636b_6675_6e6c;

/// Circular region that spawn positions are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnArea {
    center: ScreenPoint,
    radius: f32,
}

impl SpawnArea {
    /// Creates a spawn area centered on `center`.
    #[must_use]
    pub const fn new(center: ScreenPoint, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center of the area.
    #[must_use]
    pub const fn center(&self) -> ScreenPoint {
        self.center
    }

    /// Largest sampled distance from the center.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Samples a position using a uniform angle and a uniform distance.
    ///
    /// Distances are uniform along the radius rather than over the area, so
    /// positions cluster towards the center. Offsets are floored to whole
    /// pixels.
    pub fn sample<R>(&self, rng: &mut R) -> ScreenPoint
    where
        R: Rng + ?Sized,
    {
        let theta = rng.gen::<f32>() * TAU;
        let distance = (rng.gen::<f32>() * self.radius).floor();
        ScreenPoint::new(
            self.center.x() + (distance * theta.cos()).floor(),
            self.center.y() + (distance * theta.sin()).floor(),
        )
    }
}

/// Configuration parameters required to construct a population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    capacity: usize,
    spawn_interval: Duration,
    template: PersonTemplate,
    spawn_area: SpawnArea,
    rng_seed: u64,
}

impl Config {
    /// Creates a configuration with the provided capacity, spawn cadence and seed.
    #[must_use]
    pub const fn new(capacity: usize, spawn_interval: Duration, rng_seed: u64) -> Self {
        Self {
            capacity,
            spawn_interval,
            template: PersonTemplate::new(DEFAULT_PERSON_SIZE, DEFAULT_SPAWN_DURATION),
            spawn_area: SpawnArea::new(ScreenPoint::new(102.0, 310.0), 80.0),
            rng_seed,
        }
    }

    /// Replaces the size and spawn animation length of every person.
    #[must_use]
    pub const fn with_template(mut self, template: PersonTemplate) -> Self {
        self.template = template;
        self
    }

    /// Replaces the region spawn positions are drawn from.
    #[must_use]
    pub const fn with_spawn_area(mut self, spawn_area: SpawnArea) -> Self {
        self.spawn_area = spawn_area;
        self
    }

    /// Number of persons seeded into each run.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Minimum time between two spawns.
    #[must_use]
    pub const fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }

    /// Person size and animation timing.
    #[must_use]
    pub const fn template(&self) -> PersonTemplate {
        self.template
    }

    /// Region spawn positions are drawn from.
    #[must_use]
    pub const fn spawn_area(&self) -> SpawnArea {
        self.spawn_area
    }

    /// Seed of the spawn position generator.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_SPAWN_INTERVAL, DEFAULT_RNG_SEED)
    }
}

/// Number of persons held in each pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PoolSizes {
    /// Persons waiting to spawn.
    pub pending: usize,
    /// Spawned persons being advanced.
    pub active: usize,
    /// Persons that completed their lifecycle.
    pub done: usize,
}

impl PoolSizes {
    /// Total number of persons across all pools.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.active + self.done
    }
}

/// Population of persons moving through the spawn lifecycle.
#[derive(Debug)]
pub struct Population {
    config: Config,
    pending: Vec<PersonId>,
    active: Vec<Person>,
    done: Vec<Person>,
    time_until_next_spawn: Duration,
    rng: ChaCha8Rng,
}

impl Population {
    /// Creates an empty population; call [`Population::reset`] to seed a run.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pending: Vec::new(),
            active: Vec::new(),
            done: Vec::new(),
            time_until_next_spawn: Duration::ZERO,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed()),
        }
    }

    /// Discards every person and seeds the pending pool to capacity.
    pub fn reset(&mut self) {
        self.active.clear();
        self.done.clear();
        self.pending = (0..self.config.capacity())
            .filter_map(|index| u32::try_from(index).ok())
            .map(PersonId::new)
            .collect();
        self.time_until_next_spawn = Duration::ZERO;
    }

    /// Advances the population by `dt`, spawning at most one person.
    ///
    /// The person spawned by this tick is advanced by the same `dt`.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<Event>) {
        self.time_until_next_spawn = self.time_until_next_spawn.saturating_sub(dt);

        if self.time_until_next_spawn.is_zero() {
            if let Some(id) = self.pending.pop() {
                let position = self.config.spawn_area().sample(&mut self.rng);
                self.active
                    .push(Person::spawn(id, position, self.config.template()));
                self.time_until_next_spawn = self.config.spawn_interval();
                out.push(Event::PersonSpawned {
                    person: id,
                    position,
                });
            }
        }

        for person in &mut self.active {
            if person.advance(dt) == Some(PersonStage::Active) {
                out.push(Event::PersonActivated { person: person.id() });
            }
        }
    }

    /// Current pool sizes.
    #[must_use]
    pub fn pool_sizes(&self) -> PoolSizes {
        PoolSizes {
            pending: self.pending.len(),
            active: self.active.len(),
            done: self.done.len(),
        }
    }

    /// Identifiers still waiting to spawn, next to spawn last.
    #[must_use]
    pub fn pending(&self) -> &[PersonId] {
        &self.pending
    }

    /// Remaining time before the next spawn may happen.
    #[must_use]
    pub const fn time_until_next_spawn(&self) -> Duration {
        self.time_until_next_spawn
    }

    /// Configuration the population was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshots of every spawned person ordered by identifier.
    #[must_use]
    pub fn snapshots(&self) -> Vec<PersonSnapshot> {
        let mut snapshots: Vec<PersonSnapshot> = self
            .active
            .iter()
            .chain(self.done.iter())
            .map(Person::snapshot)
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        snapshots
    }
}
