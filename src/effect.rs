//! The hosting component for a confetti burst.
//!
//! A page hands [`ConfettiEffect`] an `active` flag and an optional duration.
//! The effect owns both the simulator and the frame scheduler handle, and
//! keeps at most one frame request outstanding:
//!
//! - activating cancels any pending request before restarting, so repeated
//!   activation never stacks a second stepping loop
//! - deactivating, [`teardown`](ConfettiEffect::teardown) and `Drop` cancel the
//!   pending request before returning
//! - once the simulator stops on its own, no further frame is requested
//!
//! # Example
//!
//! ```ignore
//! let config = ConfettiConfig::default();
//! let mut effect = ConfettiEffect::with_config(config, ManualScheduler::new())?;
//! effect.set_active(true, Some(3000), &renderer)?;
//! while let Some(request) = effect.pending_frame() {
//!     for instance in effect.on_frame(request, &renderer) {
//!         // draw
//!     }
//! }
//! ```

use crate::config::{duration_from_millis, ConfettiConfig};
use crate::error::ConfigError;
use crate::particle::{Particle, ParticleInstance};
use crate::scheduler::{FrameRequest, FrameScheduler};
use crate::simulation::ParticleSimulator;
use crate::time::{Clock, SystemClock};
use crate::viewport::ViewportSource;
use rand::rngs::SmallRng;
use rand::Rng;

/// Confetti overlay bound to a frame scheduler.
pub struct ConfettiEffect<S: FrameScheduler, R: Rng = SmallRng, C: Clock = SystemClock> {
    simulator: ParticleSimulator<R, C>,
    scheduler: S,
    pending: Option<FrameRequest>,
}

impl<S: FrameScheduler> ConfettiEffect<S, SmallRng, SystemClock> {
    /// Create an effect with an entropy-seeded RNG and the wall clock.
    pub fn with_config(config: ConfettiConfig, scheduler: S) -> Result<Self, ConfigError> {
        Ok(Self::new(ParticleSimulator::with_config(config)?, scheduler))
    }
}

impl<S: FrameScheduler, R: Rng, C: Clock> ConfettiEffect<S, R, C> {
    /// Wrap an existing simulator. The simulator is stopped first.
    pub fn new(mut simulator: ParticleSimulator<R, C>, scheduler: S) -> Self {
        simulator.stop();
        Self {
            simulator,
            scheduler,
            pending: None,
        }
    }

    /// Apply the host's signal.
    ///
    /// Activating reads the host's bounds so the burst spans its top edge.
    /// `duration_ms` falls back to the configured duration and is validated
    /// before anything changes, so a rejected activation leaves the effect as
    /// it was. Activating while already active restarts the burst.
    /// Deactivating always stops and releases the pending request;
    /// `duration_ms` is ignored.
    pub fn set_active<V>(
        &mut self,
        active: bool,
        duration_ms: Option<i64>,
        viewport: &V,
    ) -> Result<(), ConfigError>
    where
        V: ViewportSource + ?Sized,
    {
        if !active {
            self.cancel_pending();
            self.simulator.stop();
            return Ok(());
        }

        let duration = match duration_ms {
            Some(ms) => duration_from_millis(ms)?,
            None => self.simulator.config().duration,
        };

        self.cancel_pending();
        self.simulator.set_viewport(viewport.viewport());
        self.simulator.start(duration);
        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// Handle a fired frame request and return what to draw.
    ///
    /// Requests other than the one currently pending (already cancelled or
    /// superseded by a restart) do not step the simulation; the current set
    /// is returned unchanged.
    pub fn on_frame<V>(
        &mut self,
        request: FrameRequest,
        viewport: &V,
    ) -> impl Iterator<Item = ParticleInstance> + '_
    where
        V: ViewportSource + ?Sized,
    {
        if self.pending == Some(request) {
            self.pending = None;
            self.simulator.set_viewport(viewport.viewport());
            self.simulator.step();
            if self.simulator.is_active() {
                self.pending = Some(self.scheduler.request_frame());
            } else {
                tracing::debug!("confetti finished, frame loop released");
            }
        } else {
            tracing::trace!(request = request.to_raw(), "ignoring stale frame request");
        }
        self.simulator.instances()
    }

    /// Stop the burst and release the pending frame request.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.simulator.stop();
    }

    /// Frame request currently outstanding, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Whether the simulator is running.
    pub fn is_active(&self) -> bool {
        self.simulator.is_active()
    }

    /// The active set.
    pub fn particles(&self) -> &[Particle] {
        self.simulator.particles()
    }

    /// Simulator owned by this effect.
    pub fn simulator(&self) -> &ParticleSimulator<R, C> {
        &self.simulator
    }

    /// Scheduler owned by this effect.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, e.g. to fire due frames.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
    }
}

impl<S: FrameScheduler, R: Rng, C: Clock> Drop for ConfettiEffect<S, R, C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
