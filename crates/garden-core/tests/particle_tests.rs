// Particle pool and burst emitter behavior: lifecycle, integration order,
// buffer contract and the over-capacity saturation policy.

use garden_core::constants::*;
use garden_core::{BurstEmitter, ParticlePool};
use glam::Vec3;

#[test]
fn burst_emits_exact_count_with_bounded_life_and_speed() {
    let mut pool = ParticlePool::new(PARTICLE_CAPACITY);
    let mut emitter = BurstEmitter::new(7);
    emitter.emit(&mut pool, Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(pool.live_count(), BURST_COUNT);
    for p in pool.particles() {
        assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(
            p.life >= BURST_LIFE_MIN && p.life < BURST_LIFE_MIN + BURST_LIFE_SPAN,
            "life out of range: {}",
            p.life
        );
        let speed = p.velocity.length();
        assert!(
            speed >= BURST_SPEED_MIN - 1e-3 && speed < BURST_SPEED_MIN + BURST_SPEED_SPAN + 1e-3,
            "speed out of range: {speed}"
        );
    }
}

#[test]
fn burst_is_reproducible_for_same_seed() {
    let mut pool_a = ParticlePool::new(PARTICLE_CAPACITY);
    let mut pool_b = ParticlePool::new(PARTICLE_CAPACITY);
    BurstEmitter::new(42).emit(&mut pool_a, Vec3::ZERO);
    BurstEmitter::new(42).emit(&mut pool_b, Vec3::ZERO);

    for (a, b) in pool_a.particles().iter().zip(pool_b.particles()) {
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.life, b.life);
    }
}

#[test]
fn reseeding_restarts_the_burst_stream() {
    let mut pool_a = ParticlePool::new(PARTICLE_CAPACITY);
    let mut pool_b = ParticlePool::new(PARTICLE_CAPACITY);
    let mut emitter = BurstEmitter::new(11);
    emitter.emit(&mut pool_a, Vec3::ZERO);
    emitter.emit(&mut pool_a, Vec3::ZERO);

    // reseeding rewinds the emitter to its initial stream
    emitter.reseed(11);
    emitter.emit(&mut pool_b, Vec3::ZERO);

    for (a, b) in pool_b.particles().iter().zip(pool_a.particles()) {
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.life, b.life);
    }
}

#[test]
fn integrate_damps_then_applies_gravity_then_advances() {
    let mut pool = ParticlePool::new(8);
    let v0 = Vec3::new(10.0, 20.0, -30.0);
    pool.spawn(Vec3::ZERO, v0, 1.0);

    let dt = 0.01;
    pool.integrate(dt);

    let p = pool.particles()[0];
    let expected_v = Vec3::new(
        v0.x * PARTICLE_DAMPING,
        v0.y * PARTICLE_DAMPING - PARTICLE_GRAVITY * dt,
        v0.z * PARTICLE_DAMPING,
    );
    assert!((p.velocity - expected_v).length() < 1e-5, "damp/gravity order wrong");
    assert!((p.position - expected_v * dt).length() < 1e-5, "position must advance by post-update velocity");
    assert!((p.life - (1.0 - dt)).abs() < 1e-6);
}

#[test]
fn damping_is_per_call_not_dt_scaled() {
    let mut a = ParticlePool::new(4);
    let mut b = ParticlePool::new(4);
    a.spawn(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 10.0);
    b.spawn(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 10.0);

    // one big step vs two half steps: x velocity decays per call by design
    a.integrate(0.02);
    b.integrate(0.01);
    b.integrate(0.01);

    let va = a.particles()[0].velocity.x;
    let vb = b.particles()[0].velocity.x;
    assert!((va - 98.0).abs() < 1e-4);
    assert!((vb - 100.0 * PARTICLE_DAMPING * PARTICLE_DAMPING).abs() < 1e-4);
    assert!(vb < va, "two calls must decay more than one");
}

#[test]
fn life_decreases_until_removal() {
    let mut pool = ParticlePool::new(4);
    pool.spawn(Vec3::ZERO, Vec3::ZERO, 0.05);

    pool.integrate(0.04);
    assert_eq!(pool.live_count(), 1, "particle with remaining life must survive");

    pool.integrate(0.04);
    assert_eq!(pool.live_count(), 0, "expired particle must be absent next frame");
}

#[test]
fn life_exactly_zero_is_removed() {
    let mut pool = ParticlePool::new(4);
    pool.spawn(Vec3::ZERO, Vec3::ZERO, 0.04);
    pool.integrate(0.04);
    assert_eq!(pool.live_count(), 0);
}

#[test]
fn buffer_is_always_capacity_times_three_and_zero_filled() {
    let mut pool = ParticlePool::new(4);
    pool.spawn(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, 1.0);
    pool.spawn(Vec3::new(2.0, 2.0, 2.0), Vec3::ZERO, 0.01);
    pool.integrate(0.005);

    let buf = pool.positions();
    assert_eq!(buf.len(), 4 * 3);
    assert!(buf[0..6].iter().all(|s| *s != 0.0), "live slots populated");
    assert!(buf[6..].iter().all(|s| *s == 0.0), "trailing slots zeroed");

    // expire the second particle; its old slot must not ghost
    pool.integrate(0.01);
    let buf = pool.positions();
    assert_eq!(pool.live_count(), 1);
    assert!(buf[3..].iter().all(|s| *s == 0.0));
}

#[test]
fn over_capacity_pool_truncates_buffer_but_keeps_simulating() {
    let mut pool = ParticlePool::new(5);
    for i in 0..7 {
        pool.spawn(Vec3::new(10.0 + i as f32, 10.0, 10.0), Vec3::ZERO, 5.0);
    }
    pool.integrate(0.01);

    assert_eq!(pool.live_count(), 7, "overflow particles stay in the live set");
    let buf = pool.positions();
    assert_eq!(buf.len(), 15);
    let non_zero_triples = buf.chunks(3).filter(|c| c.iter().any(|s| *s != 0.0)).count();
    assert_eq!(non_zero_triples, 5, "at most capacity triples are written");
}

#[test]
fn repeated_bursts_beyond_capacity_write_at_most_capacity_triples() {
    let mut pool = ParticlePool::new(PARTICLE_CAPACITY);
    let mut emitter = BurstEmitter::new(1);
    for _ in 0..6 {
        emitter.emit(&mut pool, Vec3::new(50.0, 50.0, 50.0));
    }
    assert_eq!(pool.live_count(), 6 * BURST_COUNT);

    pool.integrate(0.016);
    let non_zero_triples = pool
        .positions()
        .chunks(3)
        .filter(|c| c.iter().any(|s| *s != 0.0))
        .count();
    assert!(non_zero_triples <= PARTICLE_CAPACITY);
    assert_eq!(pool.positions().len(), PARTICLE_CAPACITY * 3);
}
