//! # Confetti
//!
//! A frame-driven confetti burst: colored particles drop from the top edge,
//! fall under gravity, fade out over their lifespan and are culled once they
//! leave the viewport.
//!
//! The crate separates three concerns so each can be tested on its own:
//!
//! - **Simulation** - [`advance`] is a pure transform over the active set,
//!   wrapped by [`ParticleSimulator`] which adds spawning and the deadline
//! - **Scheduling** - [`FrameScheduler`] is an explicit handle for per-frame
//!   callbacks; [`ConfettiEffect`] keeps at most one request outstanding and
//!   cancels it on stop or teardown
//! - **Rendering** - [`ParticleInstance`] is a `bytemuck::Pod` record ready for
//!   a vertex buffer; the renderer reports its size through [`ViewportSource`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use confetti::prelude::*;
//!
//! let host = Viewport::new(1280.0, 720.0);
//! let config = ConfettiConfig::default();
//! let mut effect = ConfettiEffect::with_config(config, ManualScheduler::new())?;
//! effect.set_active(true, Some(3000), &host)?;
//!
//! while let Some(request) = effect.pending_frame() {
//!     effect.scheduler_mut().take_due();
//!     for instance in effect.on_frame(request, &host) {
//!         // draw a disc at instance.position with instance.size and instance.opacity
//!     }
//! }
//! ```
//!
//! ## Determinism
//!
//! Randomness only enters through the RNG handed to [`ParticleSimulator::new`]
//! and time only through its [`Clock`]. A seeded `SmallRng` with a
//! [`ManualClock`](time::ManualClock) replays identical runs.
//!
//! ## Defaults
//!
//! | Parameter | Default |
//! |-----------|---------|
//! | Duration | 3000 ms |
//! | Initial burst | 20 particles |
//! | Spawn chance | 10% per step, first 70% of the run |
//! | Gravity | 0.1 px/step² |
//! | Lifespan | 100-200 steps |
//! | Cull margin | 10 px |

mod config;
mod effect;
mod error;
mod palette;
mod particle;
pub mod scheduler;
mod simulation;
pub mod spawn;
pub mod time;
mod viewport;

pub use config::{duration_from_millis, ConfettiConfig, DEFAULT_DURATION_MS};
pub use effect::ConfettiEffect;
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use palette::Palette;
pub use particle::{Particle, ParticleInstance, SPIN_PER_STEP_DEGREES};
pub use scheduler::{FrameRequest, FrameScheduler, ManualScheduler};
pub use simulation::{advance, ParticleSimulator, Physics, SimState};
pub use time::{Clock, SystemClock};
pub use viewport::{Viewport, ViewportSource};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use confetti::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ConfettiConfig;
    pub use crate::effect::ConfettiEffect;
    pub use crate::palette::Palette;
    pub use crate::particle::{Particle, ParticleInstance};
    pub use crate::scheduler::{FrameRequest, FrameScheduler, ManualScheduler};
    pub use crate::simulation::ParticleSimulator;
    pub use crate::time::{Clock, ManualClock, SystemClock};
    pub use crate::viewport::{Viewport, ViewportSource};
    pub use glam::{Vec2, Vec3};
}
