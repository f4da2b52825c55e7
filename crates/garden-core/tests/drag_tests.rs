// Drag state machine: grab offset, fixed plane projection, release semantics
// and the click-on-empty-space collapse policy.

use garden_core::constants::{BURST_COUNT, NODE_COLORS, PARTICLE_CAPACITY};
use garden_core::{BurstEmitter, Interaction, ParticlePool, PressOutcome, Ray, ThoughtNode};
use glam::Vec3;

fn cluster() -> Vec<ThoughtNode> {
    // overlapping along +Z: "near" is hit at t=2, "far" at t=5
    let mut near = ThoughtNode::new("near", NODE_COLORS[0], 10.0);
    near.set_position(0.0, 0.0, 12.0);
    let mut far = ThoughtNode::new("far", NODE_COLORS[1], 10.0);
    far.set_position(0.0, 0.0, 15.0);
    vec![near, far]
}

fn ray(origin: Vec3, dir: Vec3) -> Ray {
    Ray {
        origin,
        dir: dir.normalize(),
    }
}

const VIEW_DIR: Vec3 = Vec3::Z;

#[test]
fn press_grabs_nearest_node_with_stable_grab_offset() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();

    let outcome = interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    assert_eq!(outcome, PressOutcome::Grabbed(0));
    assert_eq!(interaction.active_node(), Some(0));

    let session = interaction.session().expect("session must exist");
    // hit point (0,0,2) on the sphere front, node center (0,0,12)
    assert!((session.grab_offset - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
    assert!((session.plane.point - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    assert_eq!(session.plane.normal, VIEW_DIR);
}

#[test]
fn drag_moves_node_to_plane_hit_minus_offset() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();
    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);

    interaction.drag(&mut nodes, &ray(Vec3::new(5.0, 3.0, 0.0), Vec3::Z));
    assert!((nodes[0].position - Vec3::new(5.0, 3.0, 12.0)).length() < 1e-5);

    // the plane never changes once a drag starts
    let session = interaction.session().unwrap();
    assert_eq!(session.plane.normal, VIEW_DIR);
    assert!((session.plane.point - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);

    interaction.drag(&mut nodes, &ray(Vec3::new(-8.0, 1.0, 0.0), Vec3::Z));
    assert!((nodes[0].position - Vec3::new(-8.0, 1.0, 12.0)).length() < 1e-5);
}

#[test]
fn drag_with_plane_parallel_ray_is_a_noop() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();
    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    let before = nodes[0].position;

    interaction.drag(&mut nodes, &ray(Vec3::new(0.0, 50.0, 2.0), Vec3::X));
    assert_eq!(nodes[0].position, before);
}

#[test]
fn drag_without_session_is_a_noop() {
    let mut nodes = cluster();
    let before = nodes[0].position;
    Interaction::new().drag(&mut nodes, &ray(Vec3::new(5.0, 3.0, 0.0), Vec3::Z));
    assert_eq!(nodes[0].position, before);
}

#[test]
fn release_expands_and_bursts_exactly_once() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();
    let mut emitter = BurstEmitter::new(3);
    let mut pool = ParticlePool::new(PARTICLE_CAPACITY);

    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    let released = interaction.release(&mut nodes, &mut emitter, &mut pool);
    assert_eq!(released, Some(0));
    assert!(nodes[0].expanded);
    assert_eq!(pool.live_count(), BURST_COUNT);
    assert!(
        pool.particles()
            .iter()
            .all(|p| p.position == nodes[0].position),
        "burst must originate at the node's release position"
    );
    assert_eq!(interaction.active_node(), None);

    // pointer-up without a session does nothing
    let again = interaction.release(&mut nodes, &mut emitter, &mut pool);
    assert_eq!(again, None);
    assert_eq!(pool.live_count(), BURST_COUNT);
}

#[test]
fn release_after_drag_bursts_at_current_position() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();
    let mut emitter = BurstEmitter::new(3);
    let mut pool = ParticlePool::new(PARTICLE_CAPACITY);

    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    interaction.drag(&mut nodes, &ray(Vec3::new(40.0, -7.0, 0.0), Vec3::Z));
    interaction.release(&mut nodes, &mut emitter, &mut pool);

    let origin = nodes[0].position;
    assert!((origin - Vec3::new(40.0, -7.0, 12.0)).length() < 1e-4);
    assert!(pool.particles().iter().all(|p| p.position == origin));
}

#[test]
fn press_on_empty_space_collapses_every_node() {
    let mut nodes = cluster();
    nodes[0].expand_instant();
    nodes[1].expand_instant();
    let mut interaction = Interaction::new();

    let outcome = interaction.press(&mut nodes, &ray(Vec3::ZERO, -Vec3::Y), VIEW_DIR);
    assert_eq!(outcome, PressOutcome::CollapsedAll);
    assert!(nodes.iter().all(|n| !n.expanded));
    assert_eq!(interaction.active_node(), None);
}

#[test]
fn multiple_nodes_may_stay_expanded_concurrently() {
    let mut nodes = cluster();
    let mut interaction = Interaction::new();
    let mut emitter = BurstEmitter::new(9);
    let mut pool = ParticlePool::new(PARTICLE_CAPACITY);

    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    interaction.release(&mut nodes, &mut emitter, &mut pool);

    // move the first node out of the way, then grab the second
    nodes[0].set_position(1000.0, 0.0, 0.0);
    interaction.press(&mut nodes, &ray(Vec3::ZERO, Vec3::Z), VIEW_DIR);
    interaction.release(&mut nodes, &mut emitter, &mut pool);

    assert!(nodes[0].expanded && nodes[1].expanded);
}
