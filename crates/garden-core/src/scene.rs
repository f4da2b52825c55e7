//! Frame orchestration: owns the cluster, the particle pool and the drag
//! state machine, and runs the fixed per-frame order the renderer relies on.
//!
//! Pointer events mutate state directly as they arrive (same logical
//! thread); `advance` then clamps the frame delta, drifts every non-dragged
//! node, recomputes hover and integrates particles, in that order.

use crate::burst::BurstEmitter;
use crate::camera::Camera;
use crate::constants::{
    BURST_COUNT, CLUSTER_RING_MIN, CLUSTER_RING_SPAN, CLUSTER_Y_SPAN, CLUSTER_Z_SQUASH,
    IDLE_PHASE_STEP, IDLE_RING_BASE, IDLE_RING_STEP, IDLE_TIME_RATE, IDLE_Y_AMPLITUDE, IDLE_Y_RATE,
    IDLE_Z_SQUASH, MAX_FRAME_DT, NODE_COLORS, NODE_COUNT, NODE_RADIUS_MIN, NODE_RADIUS_SPAN,
    PARTICLE_CAPACITY,
};
use crate::drag::{Interaction, PressOutcome};
use crate::node::ThoughtNode;
use crate::particles::ParticlePool;
use crate::picking::update_hover;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Idle orbital drift: a pure function of elapsed time and node index, so
/// non-dragged nodes trace smooth elliptical paths with distinct phase and
/// radius per node.
#[inline]
pub fn idle_position(index: usize, elapsed: f32) -> Vec3 {
    let i = index as f32;
    let phase = i * IDLE_PHASE_STEP + elapsed * IDLE_TIME_RATE;
    let r = IDLE_RING_BASE + i * IDLE_RING_STEP;
    Vec3::new(
        phase.cos() * r,
        (phase * IDLE_Y_RATE + i).sin() * IDLE_Y_AMPLITUDE,
        phase.sin() * r * IDLE_Z_SQUASH,
    )
}

pub struct Scene {
    pub nodes: Vec<ThoughtNode>,
    pub pool: ParticlePool,
    pub camera: Camera,
    emitter: BurstEmitter,
    interaction: Interaction,
    pointer_ndc: Vec2,
    elapsed: f32,
}

impl Scene {
    /// Build the default cluster. One seed drives both the initial layout
    /// and the burst emitter, so a run is reproducible end to end.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = Vec::with_capacity(NODE_COUNT);
        for i in 0..NODE_COUNT {
            let radius = NODE_RADIUS_MIN + rng.gen::<f32>() * NODE_RADIUS_SPAN;
            let mut node = ThoughtNode::new(
                format!("t{i}"),
                NODE_COLORS[i % NODE_COLORS.len()],
                radius,
            );
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let ring = CLUSTER_RING_MIN + rng.gen::<f32>() * CLUSTER_RING_SPAN;
            node.set_position(
                theta.cos() * ring,
                (rng.gen::<f32>() - 0.5) * CLUSTER_Y_SPAN,
                theta.sin() * ring * CLUSTER_Z_SQUASH,
            );
            nodes.push(node);
        }
        Self {
            nodes,
            pool: ParticlePool::new(PARTICLE_CAPACITY),
            camera: Camera::default(),
            emitter: BurstEmitter::new(seed ^ 0x9E37_79B9_7F4A_7C15),
            interaction: Interaction::new(),
            pointer_ndc: Vec2::ZERO,
            elapsed: 0.0,
        }
    }

    /// Viewport change: the core only tracks the camera aspect; the
    /// frontends own surface and backing-store sizing.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    #[inline]
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_ndc
    }

    #[inline]
    pub fn dragged_node(&self) -> Option<usize> {
        self.interaction.active_node()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Pointer moved: remember the normalized coordinates and, if a drag is
    /// active, apply the plane-projected displacement immediately.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer_ndc = ndc;
        let ray = self.camera.screen_ray(ndc);
        self.interaction.drag(&mut self.nodes, &ray);
    }

    /// Pointer pressed at the last known position.
    pub fn pointer_down(&mut self) -> PressOutcome {
        let ray = self.camera.screen_ray(self.pointer_ndc);
        let view_dir = self.camera.view_dir();
        self.interaction.press(&mut self.nodes, &ray, view_dir)
    }

    /// Pointer released: ends any drag with an expand + burst.
    pub fn pointer_up(&mut self) -> Option<usize> {
        self.interaction
            .release(&mut self.nodes, &mut self.emitter, &mut self.pool)
    }

    /// One frame: clamp dt, drift non-dragged nodes, recompute hover,
    /// integrate particles. The renderer reads node and buffer state after
    /// this returns.
    pub fn advance(&mut self, dt_raw: f32) {
        let dt = dt_raw.min(MAX_FRAME_DT);
        self.elapsed += dt_raw;

        let dragged = self.interaction.active_node();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            if dragged == Some(i) {
                continue;
            }
            let p = idle_position(i, self.elapsed);
            node.set_position(p.x, p.y, p.z);
        }

        let ray = self.camera.screen_ray(self.pointer_ndc);
        update_hover(&mut self.nodes, &ray);

        self.pool.integrate(dt);
    }

    /// Emit one burst directly, bypassing the drag machinery. Test hook.
    pub fn burst_at(&mut self, origin: Vec3) {
        self.emitter.emit(&mut self.pool, origin);
        debug_assert!(self.pool.live_count() >= BURST_COUNT);
    }
}
