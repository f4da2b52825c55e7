use glam::Vec3;

// Shared scene/interaction tuning constants used by both web and native frontends.

// Frame loop
pub const MAX_FRAME_DT: f32 = 0.04; // clamp against tab-background pauses

// Node cluster
pub const NODE_COUNT: usize = 8;
pub const NODE_RADIUS_MIN: f32 = 12.0;
pub const NODE_RADIUS_SPAN: f32 = 8.0;
pub const CLUSTER_RING_MIN: f32 = 120.0;
pub const CLUSTER_RING_SPAN: f32 = 160.0;
pub const CLUSTER_Z_SQUASH: f32 = 0.6;
pub const CLUSTER_Y_SPAN: f32 = 40.0;

// Idle orbital drift
pub const IDLE_PHASE_STEP: f32 = 0.9; // per-node phase offset
pub const IDLE_TIME_RATE: f32 = 0.25;
pub const IDLE_RING_BASE: f32 = 140.0;
pub const IDLE_RING_STEP: f32 = 8.0;
pub const IDLE_Z_SQUASH: f32 = 0.7;
pub const IDLE_Y_AMPLITUDE: f32 = 18.0;
pub const IDLE_Y_RATE: f32 = 0.6;

// Visual presets
pub const BASE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.25;
pub const EXPAND_SCALE: f32 = 1.6;
pub const BASE_EMISSIVE: f32 = 0.6;
pub const HOVER_EMISSIVE: f32 = 2.0;
pub const EXPAND_EMISSIVE: f32 = 3.0;
pub const BASE_ROUGHNESS: f32 = 0.35;
pub const HOVER_ROUGHNESS: f32 = 0.08;

// Particles
pub const PARTICLE_CAPACITY: usize = 600; // rendered-buffer slots, fixed
pub const BURST_COUNT: usize = 120;
pub const PARTICLE_DAMPING: f32 = 0.98; // per integrate call, not dt-scaled
pub const PARTICLE_GRAVITY: f32 = 40.0; // units/s^2, downward
pub const BURST_SPEED_MIN: f32 = 40.0;
pub const BURST_SPEED_SPAN: f32 = 200.0;
pub const BURST_LIFE_MIN: f32 = 0.9;
pub const BURST_LIFE_SPAN: f32 = 0.9;
pub const BURST_UPWARD_BIAS: f32 = 0.4; // shifts the sampled y component upward

// Camera (fixed look-at; orbit interaction lives in the frontends)
pub const CAMERA_EYE: [f32; 3] = [0.0, 80.0, 420.0];
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 4000.0;

// Default node palette
pub const NODE_COLORS: [[f32; 3]; 6] = [
    [0.478, 0.969, 0.722], // mint
    [0.761, 0.631, 1.000], // lavender
    [1.000, 0.835, 0.478], // amber
    [0.541, 0.890, 1.000], // sky
    [1.000, 0.478, 0.635], // rose
    [1.000, 0.706, 0.561], // peach
];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
