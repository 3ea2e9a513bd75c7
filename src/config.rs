//! Simulator configuration.
//!
//! Every tuning constant of the effect lives here so hosts can adjust it
//! without touching the stepping code. Defaults reproduce the site's
//! celebratory burst: 20 particles, 10% spawn chance per step for the first
//! 70% of a three second run, gravity of 0.1 px/step².
//!
//! ```ignore
//! let config = ConfettiConfig::new()
//!     .with_duration(Duration::from_millis(5000))
//!     .with_burst_count(40);
//! config.validate()?;
//! ```

use crate::error::ConfigError;
use crate::palette::Palette;
use std::ops::Range;
use std::time::Duration;

/// Default effect duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Tunable parameters for [`ParticleSimulator`](crate::ParticleSimulator).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiConfig {
    /// Total run time before the deadline clears the active set.
    pub duration: Duration,
    /// Particles spawned immediately by `start`.
    pub burst_count: u32,
    /// Probability of spawning one extra particle per step.
    pub spawn_chance: f32,
    /// Fraction of `duration` during which extra particles may spawn.
    pub spawn_cutoff: f32,
    /// Added to vertical velocity every step.
    pub gravity: f32,
    /// How far outside the viewport a particle may travel before it is culled.
    pub cull_margin: f32,
    /// Vertical spawn coordinate (negative is above the top edge).
    pub spawn_height: f32,
    /// Horizontal velocity is drawn from `-horizontal_speed..horizontal_speed`.
    pub horizontal_speed: f32,
    /// Initial downward velocity range.
    pub fall_speed: Range<f32>,
    /// Lifespan range in steps.
    pub lifespan: Range<u32>,
    /// Render radius range.
    pub size: Range<f32>,
    /// Colors to draw from.
    pub palette: Palette,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            burst_count: 20,
            spawn_chance: 0.1,
            spawn_cutoff: 0.7,
            gravity: 0.1,
            cull_margin: 10.0,
            spawn_height: -10.0,
            horizontal_speed: 2.0,
            fall_speed: 2.0..5.0,
            lifespan: 100..200,
            size: 2.0..6.0,
            palette: Palette::Brand,
        }
    }
}

impl ConfettiConfig {
    /// Create a configuration with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total run time.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the size of the initial burst.
    pub fn with_burst_count(mut self, count: u32) -> Self {
        self.burst_count = count;
        self
    }

    /// Set the per-step spawn probability.
    pub fn with_spawn_chance(mut self, chance: f32) -> Self {
        self.spawn_chance = chance;
        self
    }

    /// Set the fraction of the duration during which spawning continues.
    pub fn with_spawn_cutoff(mut self, cutoff: f32) -> Self {
        self.spawn_cutoff = cutoff;
        self
    }

    /// Set the per-step gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the off-screen culling margin.
    pub fn with_cull_margin(mut self, margin: f32) -> Self {
        self.cull_margin = margin;
        self
    }

    /// Set the vertical spawn coordinate.
    pub fn with_spawn_height(mut self, y: f32) -> Self {
        self.spawn_height = y;
        self
    }

    /// Set the maximum absolute horizontal velocity.
    pub fn with_horizontal_speed(mut self, speed: f32) -> Self {
        self.horizontal_speed = speed;
        self
    }

    /// Set the initial downward velocity range.
    pub fn with_fall_speed(mut self, range: Range<f32>) -> Self {
        self.fall_speed = range;
        self
    }

    /// Set the lifespan range, in steps.
    pub fn with_lifespan(mut self, range: Range<u32>) -> Self {
        self.lifespan = range;
        self
    }

    /// Set the render radius range.
    pub fn with_size(mut self, range: Range<f32>) -> Self {
        self.size = range;
        self
    }

    /// Set the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The point in a run of `duration` after which no more particles spawn.
    ///
    /// Rounded to the microsecond so `0.7` of 3000ms is exactly 2100ms.
    pub fn spawn_window(&self, duration: Duration) -> Duration {
        let micros = duration.as_micros() as f64 * f64::from(self.spawn_cutoff);
        Duration::from_micros(micros.round() as u64)
    }

    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::NonPositiveDuration(0));
        }
        unit("spawn_chance", self.spawn_chance)?;
        unit("spawn_cutoff", self.spawn_cutoff)?;
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidScalar {
                name: "gravity",
                value: self.gravity,
            });
        }
        non_negative("cull_margin", self.cull_margin)?;
        non_negative("horizontal_speed", self.horizontal_speed)?;
        if !self.spawn_height.is_finite() || self.spawn_height < -self.cull_margin {
            return Err(ConfigError::SpawnOutsideBounds {
                spawn_height: self.spawn_height,
                cull_margin: self.cull_margin,
            });
        }
        positive_range("fall_speed", &self.fall_speed)?;
        positive_range("size", &self.size)?;
        if self.lifespan.start < 1 || self.lifespan.is_empty() {
            return Err(ConfigError::InvalidRange {
                name: "lifespan",
                range: format!("{:?}", self.lifespan),
            });
        }
        Ok(())
    }
}

/// Convert a host-supplied millisecond count into a duration.
///
/// Hosts pass durations as plain integers; zero and negative values are
/// rejected here so the simulator only ever sees a usable deadline.
pub fn duration_from_millis(ms: i64) -> Result<Duration, ConfigError> {
    if ms <= 0 {
        return Err(ConfigError::NonPositiveDuration(ms));
    }
    Ok(Duration::from_millis(ms as u64))
}

fn unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScalar { name, value })
    }
}

fn positive_range(name: &'static str, range: &Range<f32>) -> Result<(), ConfigError> {
    let valid = range.start.is_finite()
        && range.end.is_finite()
        && range.start > 0.0
        && range.start < range.end;
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            name,
            range: format!("{:?}", range),
        })
    }
}
