use std::time::Instant;

use crate::simulation::forces::{Force, ForceSet, Friction, Gravity, Spring};
use crate::simulation::integrator::{euler_step, rk4_step, verlet_step};
use crate::simulation::solver::VerletSolver;
use crate::simulation::states::{NVec2, Particle};

/// Build a deterministic particle, no rand needed
fn bench_particle(i: usize) -> Particle {
    let i_f = i as f64;
    Particle::new(
        1.0 + (i_f * 0.11).sin().abs(),
        NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0 + 10.0),
        NVec2::new((i_f * 0.07).sin() * 2.0, (i_f * 0.19).cos() * 2.0),
    )
}

/// Full force stack used by both benchmarks
fn bench_forces_set() -> ForceSet {
    ForceSet::new()
        .with(Gravity::default())
        .with(Friction { coefficient: 0.1 })
        .with(Spring {
            anchor: NVec2::new(0.0, 0.0),
            k: 2.0,
            rest_length: 1.0,
        })
}

pub fn bench_forces() {
    // Different evaluation counts to test
    let ns = [10_000, 40_000, 160_000, 640_000];

    let forces = bench_forces_set();

    for n in ns {
        let particles: Vec<Particle> = (0..n).map(bench_particle).collect();

        // Warm up
        let mut acc = NVec2::zeros();
        for p in &particles {
            acc += forces.net_force(p);
        }

        // Time n net-force evaluations over the three-term set
        let t0 = Instant::now();
        let mut total = NVec2::zeros();
        for p in &particles {
            total += forces.net_force(p);
        }
        let dt_set = t0.elapsed().as_secs_f64();

        // Time the same against a single bare term for comparison
        let gravity = Gravity::default();
        let t1 = Instant::now();
        for p in &particles {
            total += gravity.force(p);
        }
        let dt_single = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:7}, set(3 terms) = {:8.6} s, gravity only = {:8.6} s   (checksum {:.3})",
            dt_set, dt_single, total.norm()
        );
    }
}

pub fn bench_integrators() {
    // Steps per integrator per run
    let steps = 200_000;
    let dt = 0.001;

    let forces = bench_forces_set();

    // =======================================================
    // Euler
    // =======================================================
    let mut p = bench_particle(0);
    let t0 = Instant::now();
    for _ in 0..steps {
        let net = forces.net_force(&p);
        euler_step(&mut p, net, dt);
    }
    let dt_euler = t0.elapsed().as_secs_f64();

    // =======================================================
    // Verlet (through the stateful solver)
    // =======================================================
    let mut p = bench_particle(0);
    let mut solver = VerletSolver::new(dt);
    let handle = solver.register();
    let t1 = Instant::now();
    for _ in 0..steps {
        let net = forces.net_force(&p);
        solver.step(handle, &mut p, net);
    }
    let dt_verlet = t1.elapsed().as_secs_f64();
    solver.unregister(handle);

    // =======================================================
    // RK4 (four force evaluations per step)
    // =======================================================
    let mut p = bench_particle(0);
    let t2 = Instant::now();
    for _ in 0..steps {
        rk4_step(&mut p, |p| forces.net_force(p), dt);
    }
    let dt_rk4 = t2.elapsed().as_secs_f64();

    // A raw verlet_step run without the solver, to see the map overhead
    let mut p = bench_particle(0);
    let mut prev = None;
    let t3 = Instant::now();
    for _ in 0..steps {
        let net = forces.net_force(&p);
        let current = p.x;
        verlet_step(&mut p, net, dt, prev);
        prev = Some(current);
    }
    let dt_raw = t3.elapsed().as_secs_f64();

    println!(
        "steps = {steps}, euler = {:8.6} s, verlet = {:8.6} s (raw {:8.6} s), rk4 = {:8.6} s",
        dt_euler, dt_verlet, dt_raw, dt_rk4
    );
}
