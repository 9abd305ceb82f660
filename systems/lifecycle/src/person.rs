use std::time::Duration;

use lockfunnel_core::{PersonId, PersonSnapshot, PersonStage, ScreenPoint};

/// Size and timing shared by every person of a population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonTemplate {
    size: u32,
    spawn_duration: Duration,
}

impl PersonTemplate {
    /// Creates a template with the full radius and the spawn animation length.
    #[must_use]
    pub const fn new(size: u32, spawn_duration: Duration) -> Self {
        Self {
            size,
            spawn_duration,
        }
    }

    /// Radius of a fully spawned person.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Time a person spends growing before it becomes active.
    #[must_use]
    pub const fn spawn_duration(&self) -> Duration {
        self.spawn_duration
    }
}

/// Spawned member of the population, advanced by elapsed time alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Person {
    id: PersonId,
    stage: PersonStage,
    stage_elapsed: Duration,
    position: ScreenPoint,
    template: PersonTemplate,
}

impl Person {
    /// Places a person at `position` and starts its spawn animation.
    #[must_use]
    pub const fn spawn(id: PersonId, position: ScreenPoint, template: PersonTemplate) -> Self {
        Self {
            id,
            stage: PersonStage::Spawning,
            stage_elapsed: Duration::ZERO,
            position,
            template,
        }
    }

    /// Accumulates `dt` into the current stage.
    ///
    /// Returns the new stage when this call caused a transition.
    pub fn advance(&mut self, dt: Duration) -> Option<PersonStage> {
        self.stage_elapsed = self.stage_elapsed.saturating_add(dt);
        match self.stage {
            PersonStage::Spawning if self.stage_elapsed > self.template.spawn_duration() => {
                self.stage = PersonStage::Active;
                self.stage_elapsed = Duration::ZERO;
                Some(PersonStage::Active)
            }
            PersonStage::Spawning | PersonStage::Active => None,
        }
    }

    /// Identifier of the person.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> PersonStage {
        self.stage
    }

    /// Time spent in the current stage.
    #[must_use]
    pub const fn stage_elapsed(&self) -> Duration {
        self.stage_elapsed
    }

    /// Spawn position.
    #[must_use]
    pub const fn position(&self) -> ScreenPoint {
        self.position
    }

    /// Visual radius: grows linearly while spawning, constant once active.
    #[must_use]
    pub fn radius(&self) -> u32 {
        let size = self.template.size();
        match self.stage {
            PersonStage::Active => size,
            PersonStage::Spawning => {
                let duration = self.template.spawn_duration().as_nanos();
                if duration == 0 {
                    return size;
                }

                let grown = u128::from(size) * self.stage_elapsed.as_nanos() / duration;
                u32::try_from(grown).unwrap_or(size)
            }
        }
    }

    /// Immutable snapshot for queries and drawing.
    #[must_use]
    pub fn snapshot(&self) -> PersonSnapshot {
        PersonSnapshot {
            id: self.id,
            stage: self.stage,
            position: self.position,
            radius: self.radius(),
            stage_elapsed: self.stage_elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person::spawn(
            PersonId::new(7),
            ScreenPoint::new(100.0, 300.0),
            PersonTemplate::new(8, Duration::from_millis(250)),
        )
    }

    #[test]
    fn radius_grows_linearly_while_spawning() {
        let mut person = person();
        assert_eq!(person.radius(), 0);

        assert_eq!(person.advance(Duration::from_millis(100)), None);
        assert_eq!(person.radius(), 3);

        assert_eq!(person.advance(Duration::from_millis(150)), None);
        assert_eq!(person.stage(), PersonStage::Spawning);
        assert_eq!(person.radius(), 8);
    }

    #[test]
    fn activates_once_elapsed_exceeds_spawn_duration() {
        let mut person = person();
        assert_eq!(person.advance(Duration::from_millis(250)), None);
        assert_eq!(
            person.advance(Duration::from_millis(1)),
            Some(PersonStage::Active)
        );
        assert_eq!(person.radius(), 8);

        for _ in 0..10 {
            assert_eq!(person.advance(Duration::from_secs(1)), None);
            assert_eq!(person.stage(), PersonStage::Active);
        }
    }

    #[test]
    fn zero_spawn_duration_uses_full_size() {
        let mut person = Person::spawn(
            PersonId::new(0),
            ScreenPoint::default(),
            PersonTemplate::new(8, Duration::ZERO),
        );
        assert_eq!(person.radius(), 8);
        assert_eq!(person.advance(Duration::ZERO), None);
        assert_eq!(
            person.advance(Duration::from_nanos(1)),
            Some(PersonStage::Active)
        );
    }
}
