use std::error::Error;
use std::io;

use leapfrog::energy::{total_energy, total_momentum};
use leapfrog::{gravity, output, DirectSummation, DistrParticleCreator, ParticleCreator, Simulation};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::Uniform;

const NUM_PARS: u32 = 100;
const NUM_STEPS: usize = 500;
const RECORDED_STEPS: usize = 100;
const SAMPLE: usize = 5;

const TIME_STEP: f64 = 3_600.;
const EPSILON_SQUARED: f64 = 1e16;

fn main() -> Result<(), Box<dyn Error>> {
    let rng = StdRng::seed_from_u64(0);
    let mut creator = DistrParticleCreator::rng(
        Uniform::new(6.0e23, 6.0e25),
        Uniform::new(-1.5e11, 1.5e11),
        Uniform::new(-3.0e4, 3.0e4),
        rng,
    );
    let particles = creator.create_particles(NUM_PARS)?;

    let mut sim = Simulation::new(particles, DirectSummation::new(), EPSILON_SQUARED);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    println!(
        "initial energy: {:e}",
        total_energy(sim.particles(), gravity::G, EPSILON_SQUARED)
    );
    print!("initial momentum: ");
    output::write_state(&mut out, &[total_momentum(sim.particles())])?;

    for t in 0..NUM_STEPS {
        if t % 100 == 0 {
            println!("{t} out of {NUM_STEPS} time steps done.");
        }

        sim.step(TIME_STEP);
    }

    println!(
        "final energy: {:e}",
        total_energy(sim.particles(), gravity::G, EPSILON_SQUARED)
    );
    print!("final momentum: ");
    output::write_state(&mut out, &[total_momentum(sim.particles())])?;

    println!("positions of the first {SAMPLE} particles:");
    output::write_state(&mut out, &sim.particles().positions()[..SAMPLE])?;
    println!("velocities of the first {SAMPLE} particles:");
    output::write_state(&mut out, &sim.particles().velocities()[..SAMPLE])?;

    let history = sim.simulate(TIME_STEP, RECORDED_STEPS);
    output::write_csv_positions(&history, "positions.csv")?;
    println!("recorded {RECORDED_STEPS} further steps to positions.csv");

    Ok(())
}
