use crate::constants::{
    BASE_EMISSIVE, BASE_ROUGHNESS, BASE_SCALE, EXPAND_EMISSIVE, EXPAND_SCALE, HOVER_EMISSIVE,
    HOVER_ROUGHNESS, HOVER_SCALE,
};
use glam::Vec3;

/// One draggable, hoverable "thought" in the cluster.
///
/// Identity, base color and radius are fixed at creation; position and the
/// visual fields are mutated every frame by idle drift, hover recomputation
/// or an active drag. All operations are total over the node's own state.
#[derive(Clone, Debug)]
pub struct ThoughtNode {
    pub id: String,
    pub color: [f32; 3],
    pub radius: f32,
    pub position: Vec3,
    pub hovered: bool,
    pub expanded: bool,
    pub scale: f32,
    pub emissive: f32,
    pub roughness: f32,
}

impl ThoughtNode {
    pub fn new(id: impl Into<String>, color: [f32; 3], radius: f32) -> Self {
        Self {
            id: id.into(),
            color,
            radius,
            position: Vec3::ZERO,
            hovered: false,
            expanded: false,
            scale: BASE_SCALE,
            emissive: BASE_EMISSIVE,
            roughness: BASE_ROUGHNESS,
        }
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    /// Toggle the hover preset. Idempotent; called for every node each frame,
    /// so it also winds down the expand pop once the pointer moves on.
    pub fn set_hover(&mut self, on: bool) {
        self.hovered = on;
        self.scale = if on { HOVER_SCALE } else { BASE_SCALE };
        self.emissive = if on { HOVER_EMISSIVE } else { BASE_EMISSIVE };
        self.roughness = if on { HOVER_ROUGHNESS } else { BASE_ROUGHNESS };
    }

    /// Instant pop on release. Spawning the burst is the emitter's job,
    /// triggered by the same release event.
    pub fn expand_instant(&mut self) {
        self.expanded = true;
        self.scale = EXPAND_SCALE;
        self.emissive = EXPAND_EMISSIVE;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
        self.scale = BASE_SCALE;
        self.emissive = BASE_EMISSIVE;
    }

    /// Radius of the sphere used for ray picking: the rendered size, which
    /// tracks the current visual scale.
    #[inline]
    pub fn pick_radius(&self) -> f32 {
        self.radius * self.scale
    }
}
