//! The confetti particle and its render-facing representation.
//!
//! A [`Particle`] only stores simulation state. Everything the renderer needs
//! beyond that (opacity, spin, glow) is derived from age and size on demand,
//! and packed into a [`ParticleInstance`] for upload as a vertex buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Degrees of spin added per step survived.
pub const SPIN_PER_STEP_DEGREES: f32 = 10.0;

/// One piece of confetti.
///
/// Fields are read through accessors; only the simulator moves particles.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    id: u64,
    position: Vec2,
    velocity: Vec2,
    age: u32,
    lifespan: u32,
    color: Vec3,
    size: f32,
}

impl Particle {
    /// Create a fresh particle with age zero.
    pub fn new(
        id: u64,
        position: Vec2,
        velocity: Vec2,
        lifespan: u32,
        color: Vec3,
        size: f32,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            age: 0,
            lifespan,
            color,
            size,
        }
    }

    /// Identity within the active set.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current location in viewport space.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Per-step displacement.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Steps survived.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Age at which the particle expires. Fixed at creation.
    #[inline]
    pub fn lifespan(&self) -> u32 {
        self.lifespan
    }

    /// Palette color.
    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Render radius.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Whether the particle has reached its lifespan.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifespan
    }

    /// Linear fade: 1 at birth, 0 at expiry.
    pub fn opacity(&self) -> f32 {
        if self.lifespan == 0 {
            return 0.0;
        }
        (1.0 - self.age as f32 / self.lifespan as f32).clamp(0.0, 1.0)
    }

    /// Accumulated spin in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.age as f32 * SPIN_PER_STEP_DEGREES
    }

    /// Radius of the soft glow drawn around the particle.
    pub fn glow_radius(&self) -> f32 {
        self.size * 2.0
    }

    /// Advance one step: move by the current velocity, then accelerate and age.
    ///
    /// Displacement uses the velocity from before gravity is applied.
    pub fn advance(&mut self, gravity: f32) {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.age += 1;
    }

    /// Pack the render attributes for GPU upload.
    pub fn to_instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            size: self.size,
            opacity: self.opacity(),
            color: self.color.to_array(),
            rotation: self.rotation_degrees().to_radians(),
        }
    }
}

/// Per-instance vertex data for drawing one particle.
///
/// 32 bytes, tightly packed, matching the `@location`s of the preview shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Center in viewport pixels.
    pub position: [f32; 2],
    /// Radius in pixels.
    pub size: f32,
    /// Alpha multiplier.
    pub opacity: f32,
    /// Linear RGB.
    pub color: [f32; 3],
    /// Spin in radians.
    pub rotation: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(velocity: Vec2, lifespan: u32) -> Particle {
        Particle::new(0, Vec2::ZERO, velocity, lifespan, Vec3::ONE, 4.0)
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut p = particle(Vec2::new(0.0, 2.0), 100);
        let expected = [2.1, 2.2, 2.3];
        for vy in expected {
            p.advance(0.1);
            assert!((p.velocity().y - vy).abs() < 1e-5, "vy = {}", p.velocity().y);
        }
        assert_eq!(p.age(), 3);
    }

    #[test]
    fn test_position_uses_pre_gravity_velocity() {
        let mut p = particle(Vec2::new(1.0, 2.0), 100);
        p.advance(0.1);
        assert_eq!(p.position(), Vec2::new(1.0, 2.0));
        p.advance(0.1);
        assert!((p.position().y - 4.1).abs() < 1e-5);
        assert_eq!(p.position().x, 2.0);
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut p = particle(Vec2::ZERO, 4);
        assert_eq!(p.opacity(), 1.0);
        p.advance(0.0);
        assert_eq!(p.opacity(), 0.75);
        p.advance(0.0);
        p.advance(0.0);
        p.advance(0.0);
        assert_eq!(p.opacity(), 0.0);
        assert!(p.is_expired());
        p.advance(0.0);
        assert_eq!(p.opacity(), 0.0);
    }

    #[test]
    fn test_derived_render_attributes() {
        let mut p = particle(Vec2::ZERO, 100);
        p.advance(0.0);
        p.advance(0.0);
        assert_eq!(p.rotation_degrees(), 20.0);
        assert_eq!(p.glow_radius(), 8.0);
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);

        let p = Particle::new(
            3,
            Vec2::new(10.0, 20.0),
            Vec2::ZERO,
            10,
            Vec3::new(0.1, 0.2, 0.3),
            5.0,
        );
        let instance = p.to_instance();
        assert_eq!(instance.position, [10.0, 20.0]);
        assert_eq!(instance.size, 5.0);
        assert_eq!(instance.opacity, 1.0);
        assert_eq!(instance.color, [0.1, 0.2, 0.3]);
        assert_eq!(instance.rotation, 0.0);

        let bytes: &[u8] = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 32);
    }
}
