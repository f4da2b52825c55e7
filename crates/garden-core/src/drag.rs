use crate::burst::BurstEmitter;
use crate::node::ThoughtNode;
use crate::particles::ParticlePool;
use crate::picking::{pick_nearest, DragPlane, Ray};
use glam::Vec3;

/// Ephemeral state of one active drag: which node, the fixed projection
/// plane, and the grab offset that keeps the node anchored under the
/// original grab point instead of snapping to the pointer.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    pub node_index: usize,
    pub plane: DragPlane,
    pub grab_offset: Vec3,
}

/// Outcome of a pointer press, for callers that want to log or react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// A node was hit and a drag session started.
    Grabbed(usize),
    /// Empty space: every node collapsed, no session.
    CollapsedAll,
}

/// Single-active-drag state machine (Idle <-> Dragging).
///
/// Press, drag and release arrive from pointer events; hover is a separate
/// per-frame concern (see [`crate::picking::update_hover`]). If a pointer-up
/// is lost the session simply persists until the next event; this is an
/// accepted limitation, not handled defensively.
#[derive(Default)]
pub struct Interaction {
    session: Option<DragSession>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the node currently being dragged, if any.
    #[inline]
    pub fn active_node(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.node_index)
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pointer-down. The nearest intersected node starts a drag; the drag
    /// plane faces the viewer (normal = camera view direction) through the
    /// hit point. A miss collapses every expanded node.
    pub fn press(&mut self, nodes: &mut [ThoughtNode], ray: &Ray, view_dir: Vec3) -> PressOutcome {
        match pick_nearest(nodes, ray) {
            Some(hit) => {
                let grab_offset = hit.point - nodes[hit.index].position;
                self.session = Some(DragSession {
                    node_index: hit.index,
                    plane: DragPlane::from_normal_and_point(view_dir, hit.point),
                    grab_offset,
                });
                log::info!("begin drag on node {}", nodes[hit.index].id);
                PressOutcome::Grabbed(hit.index)
            }
            None => {
                for node in nodes.iter_mut() {
                    node.collapse();
                }
                PressOutcome::CollapsedAll
            }
        }
    }

    /// Pointer-move while dragging: project the ray onto the stored plane
    /// and move the node so the grab point stays under the pointer. A ray
    /// parallel to the plane leaves the node where it is.
    pub fn drag(&mut self, nodes: &mut [ThoughtNode], ray: &Ray) {
        let Some(session) = &self.session else {
            return;
        };
        if let Some(hit) = session.plane.intersect(ray) {
            let p = hit - session.grab_offset;
            nodes[session.node_index].set_position(p.x, p.y, p.z);
        }
    }

    /// Pointer-up. Ends the session unconditionally; every release is an
    /// expand, with one burst at the node's current position. No distance or
    /// duration threshold distinguishes a click from a drag-then-release.
    pub fn release(
        &mut self,
        nodes: &mut [ThoughtNode],
        emitter: &mut BurstEmitter,
        pool: &mut ParticlePool,
    ) -> Option<usize> {
        let session = self.session.take()?;
        let node = &mut nodes[session.node_index];
        node.expand_instant();
        emitter.emit(pool, node.position);
        log::info!("release node {}: expand + burst", node.id);
        Some(session.node_index)
    }
}
