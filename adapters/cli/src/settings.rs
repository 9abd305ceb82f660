//! TOML settings file overriding the default world configuration.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use lockfunnel_core::{Percentage, SimulationParameters};
use lockfunnel_world::{Config, Layout, PersonTemplate, PopulationConfig, MIN_CANVAS_WIDTH};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),
    #[error("canvas size {width}x{height} must be positive and finite")]
    InvalidCanvasSize { width: f32, height: f32 },
    #[error("canvas width {width} px is narrower than the {minimum} px control strip")]
    CanvasTooNarrow { width: f32, minimum: f32 },
}

/// User-tunable values; every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) capacity: usize,
    pub(crate) spawn_interval_ms: u64,
    pub(crate) spawn_duration_ms: u64,
    pub(crate) person_size: u32,
    pub(crate) seed: u64,
    pub(crate) lock_prevalence: u32,
    pub(crate) lock_effectiveness: u32,
    pub(crate) canvas_width: f32,
    pub(crate) canvas_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        let population = PopulationConfig::default();
        let template = population.template();
        let parameters = SimulationParameters::default();
        let layout = Layout::default();

        Self {
            capacity: population.capacity(),
            spawn_interval_ms: whole_millis(population.spawn_interval()),
            spawn_duration_ms: whole_millis(template.spawn_duration()),
            person_size: template.size(),
            seed: population.rng_seed(),
            lock_prevalence: u32::from(parameters.lock_prevalence.get()),
            lock_effectiveness: u32::from(parameters.lock_effectiveness.get()),
            canvas_width: layout.canvas_width(),
            canvas_height: layout.canvas_height(),
        }
    }
}

impl Settings {
    /// Reads and validates the settings file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates settings from TOML text.
    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = (self.canvas_width, self.canvas_height);
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(SettingsError::InvalidCanvasSize { width, height });
        }
        if width < MIN_CANVAS_WIDTH {
            return Err(SettingsError::CanvasTooNarrow {
                width,
                minimum: MIN_CANVAS_WIDTH,
            });
        }
        Ok(())
    }

    /// Replaces the seed when one was given on the command line.
    pub(crate) fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }

    /// World configuration described by these settings.
    pub(crate) fn world_config(&self) -> Config {
        let template = PersonTemplate::new(
            self.person_size,
            Duration::from_millis(self.spawn_duration_ms),
        );
        let population = PopulationConfig::new(
            self.capacity,
            Duration::from_millis(self.spawn_interval_ms),
            self.seed,
        )
        .with_template(template);
        let parameters = SimulationParameters::new(
            clamp_parameter("lock_prevalence", self.lock_prevalence),
            clamp_parameter("lock_effectiveness", self.lock_effectiveness),
        );

        Config::new(
            Layout::for_canvas(self.canvas_width, self.canvas_height),
            parameters,
            population,
        )
    }
}

fn clamp_parameter(name: &'static str, value: u32) -> Percentage {
    if value > 100 {
        warn!(parameter = name, value, "parameter above 100%, clamping");
    }
    Percentage::saturating(u8::try_from(value).unwrap_or(u8::MAX))
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
