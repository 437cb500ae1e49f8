//! Gravity Well
//!
//! Headless driver for the n-body simulation: steps the physics once per
//! frame, builds the frame's render data and logs what a renderer would show.

use std::collections::VecDeque;
use std::time::Instant;

use glam::DVec2;
use gravity_physics::Body;
use gravity_simulation::{orbital_speed, Scenario, Simulation};
use rand::Rng;
use spacetime_renderer::{to_world, Camera, FrameGeometry, SpacetimeMesh};

const FRAME_COUNT: u64 = 5000;
const LOG_INTERVAL: u64 = 500;
const RANDOM_ORBITERS: usize = 3;
const SPAWN_MIN_RADIUS: f64 = 18.0;
const SPAWN_MAX_RADIUS: f64 = 24.0;
const VIEWPORT: (u32, u32) = (1280, 720);

/// Add a few light bodies on roughly circular orbits around the barycenter
fn spawn_orbiters(sim: &mut Simulation, count: usize) -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let center = sim.center_of_mass();
    let total_mass: f64 = sim.bodies().iter().map(Body::mass).sum();

    for _ in 0..count {
        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let radius = rng.random_range(SPAWN_MIN_RADIUS..SPAWN_MAX_RADIUS);
        let offset = DVec2::from_angle(angle) * radius;

        // Counter-clockwise, matching the preset planets
        let speed = if total_mass > 0.0 {
            orbital_speed(sim.params.g, total_mass, radius)
        } else {
            0.0
        };
        let vel = offset.perp().normalize() * speed;

        let color = [
            rng.random_range(0.4..1.0),
            rng.random_range(0.4..1.0),
            rng.random_range(0.4..1.0),
        ];
        let mass = rng.random_range(0.5..3.0);
        sim.add_body(Body::try_new(center + offset, vel, mass, 0.15, color)?);
    }

    log::info!("✓ Spawned {} random orbiters", count);
    Ok(())
}

/// Rolling frame timing, in milliseconds
struct FrameStats {
    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
    }

    fn avg_frame_time(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

/// Energy change as a percentage of the starting energy, or zero when the
/// starting energy is zero (an empty system)
fn energy_drift_percent(energy: f64, initial_energy: f64) -> f64 {
    if initial_energy == 0.0 {
        return 0.0;
    }
    (energy - initial_energy) / initial_energy.abs() * 100.0
}

/// Step one preset for `FRAME_COUNT` frames, keeping the camera on the barycenter
fn run_scenario(
    sim: &mut Simulation,
    camera: &mut Camera,
    mesh: &SpacetimeMesh,
    stats: &mut FrameStats,
) {
    let initial_energy = sim.total_energy();
    let initial_momentum = sim.total_momentum();
    log::info!(
        "  {:?}: {} bodies, E0={:.3}, p0={}",
        sim.scenario(),
        sim.len(),
        initial_energy,
        initial_momentum
    );

    for frame in 1..=FRAME_COUNT {
        sim.update_physics();
        camera.target = to_world(sim.center_of_mass(), 0.0);
        let geometry = FrameGeometry::build(sim.bodies(), mesh, camera);
        stats.tick();

        if frame % LOG_INTERVAL == 0 {
            let energy = sim.total_energy();
            log::info!(
                "frame {:5}  t={:.3}  E={:.3} (drift {:+.4}%)  verts={}  {:.3} ms/frame",
                frame,
                sim.elapsed_time(),
                energy,
                energy_drift_percent(energy, initial_energy),
                geometry.vertex_count(),
                stats.avg_frame_time()
            );
            for (i, b) in sim.bodies().iter().enumerate() {
                log::debug!(
                    "    [{}] pos={:.3} vel={:.3} trail={}",
                    i,
                    b.pos,
                    b.vel,
                    b.trail().len()
                );
            }
        }
    }

    let momentum_drift = (sim.total_momentum() - initial_momentum).length();
    log::info!(
        "✓ Finished {} steps of {:?}, momentum drift {:.3e}",
        sim.step_count(),
        sim.scenario(),
        momentum_drift
    );
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting gravity well simulation...");

    let mut sim = Simulation::new();
    let mut camera = Camera::new(VIEWPORT.0, VIEWPORT.1);
    let mesh = SpacetimeMesh::default();
    let mut stats = FrameStats::new();

    for scenario in [Scenario::SunEarthMars, Scenario::BinaryStar] {
        sim.set_scenario(scenario);
        spawn_orbiters(&mut sim, RANDOM_ORBITERS)?;
        run_scenario(&mut sim, &mut camera, &mesh, &mut stats);
    }

    sim.reset();
    log::info!("✓ Reset to {:?} with {} bodies", sim.scenario(), sim.len());

    Ok(())
}
