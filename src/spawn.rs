//! Particle creation.
//!
//! Spawning is the only place randomness enters the simulation. The random
//! source is passed in rather than pulled from a global, so a seeded
//! [`SmallRng`](rand::rngs::SmallRng) replays the exact same confetti.
//!
//! ```ignore
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut ctx = SpawnContext::new(&mut rng, Viewport::new(800.0, 600.0));
//! let p = spawn_particle(&ConfettiConfig::default(), &mut ctx, 0);
//! ```

use crate::config::ConfettiConfig;
use crate::palette::Palette;
use crate::particle::Particle;
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::ops::Range;

/// Random helpers bound to one RNG and the current viewport.
pub struct SpawnContext<'a, R: Rng> {
    /// Viewport the particle spawns into.
    pub viewport: Viewport,
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    /// Wrap an RNG for spawning into `viewport`.
    pub fn new(rng: &'a mut R, viewport: Viewport) -> Self {
        Self { viewport, rng }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in a non-empty range.
    #[inline]
    pub fn random_range(&mut self, range: Range<f32>) -> f32 {
        self.rng.gen_range(range)
    }

    /// Random u32 in a non-empty range.
    #[inline]
    pub fn random_uint(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// Random f32 in `-half_width..half_width`. A zero width yields zero.
    #[inline]
    pub fn random_symmetric(&mut self, half_width: f32) -> f32 {
        (self.random() - 0.5) * 2.0 * half_width
    }

    /// Random x coordinate across the viewport width.
    #[inline]
    pub fn random_x(&mut self) -> f32 {
        self.random() * self.viewport.width
    }

    /// Uniform pick from a palette.
    #[inline]
    pub fn pick_color(&mut self, palette: Palette) -> Vec3 {
        palette.pick(self.rng)
    }
}

/// Create one particle on the top edge of the viewport.
///
/// `config` must have passed [`ConfettiConfig::validate`]; empty ranges
/// would panic inside the RNG.
pub fn spawn_particle<R: Rng>(
    config: &ConfettiConfig,
    ctx: &mut SpawnContext<'_, R>,
    id: u64,
) -> Particle {
    let position = Vec2::new(ctx.random_x(), config.spawn_height);
    let velocity = Vec2::new(
        ctx.random_symmetric(config.horizontal_speed),
        ctx.random_range(config.fall_speed.clone()),
    );
    let lifespan = ctx.random_uint(config.lifespan.clone());
    let color = ctx.pick_color(config.palette);
    let size = ctx.random_range(config.size.clone());

    Particle::new(id, position, velocity, lifespan, color, size)
}
