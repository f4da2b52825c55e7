use crate::constants::{
    BURST_COUNT, BURST_LIFE_MIN, BURST_LIFE_SPAN, BURST_SPEED_MIN, BURST_SPEED_SPAN,
    BURST_UPWARD_BIAS,
};
use crate::particles::ParticlePool;
use glam::Vec3;
use rand::prelude::*;

/// Spawns the release burst: a fixed-count cloud of particles with randomized
/// directions and speeds, biased upward.
///
/// Seeded so bursts are reproducible in tests; pure generation, no knowledge
/// of rendering.
pub struct BurstEmitter {
    rng: StdRng,
}

impl BurstEmitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Emit exactly [`BURST_COUNT`] particles at `origin` into `pool`.
    pub fn emit(&mut self, pool: &mut ParticlePool, origin: Vec3) {
        for _ in 0..BURST_COUNT {
            let dir = Vec3::new(
                self.rng.gen::<f32>() * 2.0 - 1.0,
                self.rng.gen::<f32>() * 2.0 - 1.0 + BURST_UPWARD_BIAS,
                self.rng.gen::<f32>() * 2.0 - 1.0,
            );
            let dir = dir.try_normalize().unwrap_or(Vec3::Y);
            let speed = BURST_SPEED_MIN + self.rng.gen::<f32>() * BURST_SPEED_SPAN;
            let life = BURST_LIFE_MIN + self.rng.gen::<f32>() * BURST_LIFE_SPAN;
            pool.spawn(origin, dir * speed, life);
        }
        log::debug!(
            "burst: {} particles at ({:.1}, {:.1}, {:.1}), live={}",
            BURST_COUNT,
            origin.x,
            origin.y,
            origin.z,
            pool.live_count()
        );
    }
}
