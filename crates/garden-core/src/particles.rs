use crate::constants::{PARTICLE_DAMPING, PARTICLE_GRAVITY};
use glam::Vec3;

/// A short-lived world-space point spawned by a burst.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
}

/// Owns the live particle set and the fixed-capacity flat position buffer
/// handed to the renderer.
///
/// The buffer always holds `capacity * 3` scalars after `integrate`; slots
/// past the visible count are zeroed so removed particles never linger as
/// ghosts in a point draw.
pub struct ParticlePool {
    particles: Vec<Particle>,
    positions: Vec<f32>,
    capacity: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::new(),
            positions: vec![0.0; capacity * 3],
            capacity,
        }
    }

    /// Append one particle. Over-capacity spawns are still simulated; the
    /// buffer writer truncates them per [`Self::visible_count`].
    pub fn spawn(&mut self, position: Vec3, velocity: Vec3, life: f32) {
        self.particles.push(Particle {
            position,
            velocity,
            life,
        });
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Flat xyz triples, one per buffer slot, zero-filled past the visible
    /// count. Suitable for direct upload to a point-rendering primitive.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Saturation policy for an over-full pool: first-come wins, newest
    /// particles go unrendered while still paying simulation cost. Kept as a
    /// single choke point so the policy can be swapped without touching
    /// `integrate`.
    #[inline]
    fn visible_count(&self) -> usize {
        self.particles.len().min(self.capacity)
    }

    /// Advance every live particle by `dt` seconds and refresh the output
    /// buffer. Expired particles are swap-removed, so live order is not
    /// insertion order after the first expiry.
    pub fn integrate(&mut self, dt: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.life -= dt;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
                continue;
            }
            // damp, then gravity, then advance
            p.velocity *= PARTICLE_DAMPING;
            p.velocity.y -= PARTICLE_GRAVITY * dt;
            p.position += p.velocity * dt;
            i += 1;
        }

        let visible = self.visible_count();
        for (slot, p) in self.particles.iter().take(visible).enumerate() {
            let base = slot * 3;
            self.positions[base] = p.position.x;
            self.positions[base + 1] = p.position.y;
            self.positions[base + 2] = p.position.z;
        }
        for s in &mut self.positions[visible * 3..] {
            *s = 0.0;
        }
    }
}
