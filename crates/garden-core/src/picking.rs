use crate::node::ThoughtNode;
use glam::Vec3;

/// World-space ray with a unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Nearest ray/node intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
    pub point: Vec3,
}

/// Plane fixed for the duration of one drag, defined by a normal and a point
/// on the plane.
#[derive(Clone, Copy, Debug)]
pub struct DragPlane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl DragPlane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// Intersect a ray with the plane. A ray parallel to the plane (or
    /// pointing away from it) yields `None`, which callers treat as a no-op.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = self.normal.dot(self.point - ray.origin) / denom;
        (t >= 0.0).then(|| ray.origin + ray.dir * t)
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Resolve the nearest intersection along `ray` against every node's
/// renderable sphere. First hit along the ray wins ties.
pub fn pick_nearest(nodes: &[ThoughtNode], ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (i, node) in nodes.iter().enumerate() {
        if let Some(t) = ray_sphere(ray.origin, ray.dir, node.position, node.pick_radius()) {
            match best {
                Some(ref h) if t >= h.distance => {}
                _ => {
                    best = Some(Hit {
                        index: i,
                        distance: t,
                        point: ray.origin + ray.dir * t,
                    });
                }
            }
        }
    }
    best
}

/// Recompute hover for the whole cluster: the nearest hit (if any) becomes
/// the sole hovered node. Runs every frame, including mid-drag.
pub fn update_hover(nodes: &mut [ThoughtNode], ray: &Ray) {
    let hovered = pick_nearest(nodes, ray).map(|h| h.index);
    for (i, node) in nodes.iter_mut().enumerate() {
        node.set_hover(hovered == Some(i));
    }
}
