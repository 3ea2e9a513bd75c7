//! The confetti stepper.
//!
//! [`ParticleSimulator`] owns the active set and moves it forward one step per
//! frame. Physics lives in [`advance`], a pure function with no randomness;
//! the simulator adds spawning and deadline handling around it.
//!
//! ```ignore
//! let rng = SmallRng::seed_from_u64(1);
//! let mut sim = ParticleSimulator::new(ConfettiConfig::default(), rng, SystemClock::new())?;
//! sim.set_viewport(Viewport::new(1280.0, 720.0));
//! sim.start(Duration::from_millis(3000));
//! while sim.is_active() {
//!     for instance in sim.step().iter().map(Particle::to_instance) {
//!         // draw
//!     }
//! }
//! ```

use crate::config::ConfettiConfig;
use crate::error::ConfigError;
use crate::particle::{Particle, ParticleInstance};
use crate::spawn::{spawn_particle, SpawnContext};
use crate::time::{Clock, SystemClock};
use crate::viewport::Viewport;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Constants consumed by [`advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Added to vertical velocity each step.
    pub gravity: f32,
    /// Distance outside the viewport at which particles are culled.
    pub cull_margin: f32,
}

impl From<&ConfettiConfig> for Physics {
    fn from(config: &ConfettiConfig) -> Self {
        Self {
            gravity: config.gravity,
            cull_margin: config.cull_margin,
        }
    }
}

/// Advance `particles` by `ticks` steps and drop the ones that expire or leave
/// the viewport.
///
/// Each particle's next state depends only on its own previous state, so the
/// result does not depend on iteration order. Culling happens after every
/// tick, so no returned particle has `age >= lifespan`.
pub fn advance(
    mut particles: Vec<Particle>,
    ticks: u32,
    physics: Physics,
    viewport: Viewport,
) -> Vec<Particle> {
    for _ in 0..ticks {
        if particles.is_empty() {
            break;
        }
        for particle in particles.iter_mut() {
            particle.advance(physics.gravity);
        }
        particles
            .retain(|p| !p.is_expired() && viewport.contains(p.position(), physics.cull_margin));
    }
    particles
}

/// Lifecycle state of a [`ParticleSimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// Not running; `step` does nothing.
    Inactive,
    /// Running since `started_at` (clock reading) for `duration`.
    Active {
        /// Clock reading when `start` was called.
        started_at: Duration,
        /// Total run time.
        duration: Duration,
    },
}

/// Time-stepped confetti burst.
///
/// Generic over the random source and the clock so tests can seed the RNG
/// and drive time by hand.
pub struct ParticleSimulator<R: Rng = SmallRng, C: Clock = SystemClock> {
    config: ConfettiConfig,
    rng: R,
    clock: C,
    viewport: Viewport,
    state: SimState,
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleSimulator<SmallRng, SystemClock> {
    /// Create a simulator with an entropy-seeded RNG and the wall clock.
    pub fn with_config(config: ConfettiConfig) -> Result<Self, ConfigError> {
        Self::new(config, SmallRng::from_entropy(), SystemClock::new())
    }
}

impl<R: Rng, C: Clock> ParticleSimulator<R, C> {
    /// Create an inactive simulator after validating `config`.
    pub fn new(config: ConfettiConfig, rng: R, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            clock,
            viewport: Viewport::default(),
            state: SimState::Inactive,
            particles: Vec::new(),
            next_id: 0,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Whether the simulator is running.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SimState::Active { .. })
    }

    /// The active set.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Viewport used for spawning and culling.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport. Takes effect on the next spawn or step.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Time since `start`, or `None` while inactive.
    pub fn elapsed(&self) -> Option<Duration> {
        match self.state {
            SimState::Active { started_at, .. } => {
                Some(self.clock.now().saturating_sub(started_at))
            }
            SimState::Inactive => None,
        }
    }

    /// Activate and spawn the initial burst.
    ///
    /// Calling this while already active resets: the old particles are
    /// discarded, ids restart at zero and the deadline is measured from now.
    pub fn start(&mut self, duration: Duration) {
        if self.is_active() {
            tracing::debug!(particles = self.particles.len(), "confetti restarted while active");
        }
        self.particles.clear();
        self.next_id = 0;
        self.state = SimState::Active {
            started_at: self.clock.now(),
            duration,
        };
        for _ in 0..self.config.burst_count {
            self.spawn_one();
        }
        tracing::debug!(
            duration_ms = duration.as_millis() as u64,
            burst = self.config.burst_count,
            "confetti started"
        );
    }

    /// Deactivate and clear the active set immediately.
    pub fn stop(&mut self) {
        if self.is_active() {
            tracing::debug!(particles = self.particles.len(), "confetti stopped");
        }
        self.state = SimState::Inactive;
        self.particles.clear();
    }

    /// Advance one step and return the surviving particles.
    ///
    /// A no-op while inactive. Once the elapsed time reaches the duration the
    /// set is cleared and the simulator becomes inactive.
    pub fn step(&mut self) -> &[Particle] {
        let SimState::Active { started_at, duration } = self.state else {
            return &self.particles;
        };

        let elapsed = self.clock.now().saturating_sub(started_at);
        if elapsed >= duration {
            tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                remaining = self.particles.len(),
                "confetti deadline reached"
            );
            self.state = SimState::Inactive;
            self.particles.clear();
            return &self.particles;
        }

        let in_window = elapsed < self.config.spawn_window(duration);
        if in_window && self.rng.gen::<f32>() < self.config.spawn_chance {
            self.spawn_one();
        }

        let physics = Physics::from(&self.config);
        let particles = std::mem::take(&mut self.particles);
        self.particles = advance(particles, 1, physics, self.viewport);

        tracing::trace!(
            elapsed_ms = elapsed.as_millis() as u64,
            particles = self.particles.len(),
            "confetti step"
        );
        &self.particles
    }

    /// Render view of the active set, computed lazily.
    pub fn instances(&self) -> impl Iterator<Item = ParticleInstance> + '_ {
        self.particles.iter().map(Particle::to_instance)
    }

    fn spawn_one(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let mut ctx = SpawnContext::new(&mut self.rng, self.viewport);
        let particle = spawn_particle(&self.config, &mut ctx, id);
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;
    use glam::{Vec2, Vec3};

    const FRAME: Duration = Duration::from_millis(16);

    fn sim(
        config: ConfettiConfig,
        seed: u64,
    ) -> (ParticleSimulator<SmallRng, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let sim =
            ParticleSimulator::new(config, SmallRng::seed_from_u64(seed), clock.clone()).unwrap();
        (sim, clock)
    }

    #[test]
    fn test_advance_is_pure_and_culls() {
        let physics = Physics {
            gravity: 0.0,
            cull_margin: 10.0,
        };
        let viewport = Viewport::new(100.0, 100.0);
        let particles = vec![
            Particle::new(0, Vec2::new(50.0, 50.0), Vec2::new(0.0, 1.0), 3, Vec3::ONE, 2.0),
            Particle::new(1, Vec2::new(105.0, 50.0), Vec2::new(5.0, 0.0), 100, Vec3::ONE, 2.0),
            Particle::new(2, Vec2::new(50.0, 50.0), Vec2::ZERO, 100, Vec3::ONE, 2.0),
        ];

        let after_one = advance(particles.clone(), 1, physics, viewport);
        let ids: Vec<u64> = after_one.iter().map(Particle::id).collect();
        assert_eq!(ids, vec![0, 2]);

        let after_three = advance(particles, 3, physics, viewport);
        let ids: Vec<u64> = after_three.iter().map(Particle::id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(after_three[0].age(), 3);
    }

    #[test]
    fn test_step_is_noop_when_inactive() {
        let (mut sim, _clock) = sim(ConfettiConfig::default(), 1);
        assert!(sim.step().is_empty());
        assert_eq!(sim.state(), SimState::Inactive);
        assert_eq!(sim.elapsed(), None);
    }

    #[test]
    fn test_start_spawns_burst() {
        let (mut sim, _clock) = sim(ConfettiConfig::default(), 1);
        sim.start(Duration::from_millis(3000));
        assert!(sim.is_active());
        assert_eq!(sim.particles().len(), 20);
        let ids: Vec<u64> = sim.particles().iter().map(Particle::id).collect();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_restart_resets_from_empty() {
        let config = ConfettiConfig::default().with_spawn_chance(1.0);
        let (mut sim, clock) = sim(config, 2);
        sim.start(Duration::from_millis(3000));
        for _ in 0..10 {
            clock.advance(FRAME);
            sim.step();
        }
        assert!(sim.particles().len() > 20);

        sim.start(Duration::from_millis(3000));
        assert_eq!(sim.particles().len(), 20);
        assert_eq!(sim.elapsed(), Some(Duration::ZERO));
        assert!(sim.particles().iter().all(|p| p.age() == 0 && p.id() < 20));
    }

    #[test]
    fn test_deadline_clears_and_deactivates() {
        let (mut sim, clock) = sim(ConfettiConfig::default(), 3);
        sim.start(Duration::from_millis(100));
        clock.advance(Duration::from_millis(50));
        assert!(!sim.step().is_empty());
        clock.advance(Duration::from_millis(50));
        assert!(sim.step().is_empty());
        assert!(!sim.is_active());
    }

    #[test]
    fn test_spawn_chance_one_adds_every_step() {
        let config = ConfettiConfig::default()
            .with_spawn_chance(1.0)
            .with_burst_count(0)
            .with_horizontal_speed(0.0);
        let (mut sim, clock) = sim(config, 4);
        sim.set_viewport(Viewport::new(800.0, 6000.0));
        sim.start(Duration::from_millis(3000));
        for expected in 1..=5 {
            clock.advance(FRAME);
            assert_eq!(sim.step().len(), expected);
        }
    }

    #[test]
    fn test_spawn_chance_zero_never_adds() {
        let config = ConfettiConfig::default()
            .with_spawn_chance(0.0)
            .with_horizontal_speed(0.0);
        let (mut sim, clock) = sim(config, 5);
        sim.set_viewport(Viewport::new(800.0, 6000.0));
        sim.start(Duration::from_millis(3000));
        for _ in 0..50 {
            clock.advance(FRAME);
            sim.step();
        }
        assert_eq!(sim.particles().len(), 20);
    }

    #[test]
    fn test_instances_match_particles() {
        let (mut sim, _clock) = sim(ConfettiConfig::default(), 6);
        sim.start(Duration::from_millis(3000));
        let instances: Vec<ParticleInstance> = sim.instances().collect();
        assert_eq!(instances.len(), sim.particles().len());
        assert!(instances.iter().all(|i| i.opacity == 1.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ConfettiConfig::default().with_spawn_chance(2.0);
        let result = ParticleSimulator::new(config, SmallRng::seed_from_u64(0), ManualClock::new());
        assert!(result.is_err());
    }
}
