//! Gravitational N-body simulation: softened pairwise forces accumulated by
//! direct summation, advanced with kick-drift-kick leapfrog integration over
//! structure-of-arrays particle state.

pub mod energy;
pub mod gravity;
pub mod output;

mod direct_summation;
mod error;
mod particles;

pub use direct_summation::*;
pub use error::*;
pub use particles::*;

use std::ops::Mul;

use nalgebra::{DMatrix, RealField, Vector3};
use num_traits::FromPrimitive;

/// Floating-point scalar driving the simulation arithmetic.
pub trait Float: RealField + FromPrimitive + Copy + Send + Sync {}

impl<F> Float for F where F: RealField + FromPrimitive + Copy + Send + Sync {}

/// Strategy computing the net gravitational force on every particle.
///
/// Implementations overwrite `forces` completely; nothing carries over from
/// the previous call. The slices share the particle index and must have equal
/// length, and no borrow outlives the call.
pub trait ForceSolver<F: Float> {
    fn compute_forces(
        &self,
        positions: &[Vector3<F>],
        masses: &[F],
        forces: &mut [Vector3<F>],
        g: F,
        epsilon_squared: F,
    );
}

/// A gravitational N-body simulation advanced by leapfrog steps.
#[derive(Clone, Debug)]
pub struct Simulation<F, S>
where
    F: Float,
    S: ForceSolver<F>,
{
    particles: Particles<F>,
    solver: S,
    g: F,
    epsilon_squared: F,
}

impl<F, S> Simulation<F, S>
where
    F: Float,
    S: ForceSolver<F>,
    Vector3<F>: Mul<F, Output = Vector3<F>>,
{
    /// Creates a simulation using the SI gravitational constant.
    ///
    /// Runs the force accumulator once, so the stored forces match the
    /// initial positions before the first kick.
    pub fn new(particles: Particles<F>, solver: S, epsilon_squared: F) -> Self {
        let mut sim = Self {
            particles,
            solver,
            g: F::from_f64(gravity::G).unwrap(),
            epsilon_squared,
        };
        sim.accumulate_forces();
        sim
    }

    /// Replaces the gravitational constant and redoes the setup force pass.
    #[must_use]
    pub fn gravitational_constant(mut self, g: F) -> Self {
        self.g = g;
        self.accumulate_forces();
        self
    }

    #[must_use]
    pub fn particles(&self) -> &Particles<F> {
        &self.particles
    }

    fn accumulate_forces(&mut self) {
        let Particles {
            masses,
            positions,
            forces,
            ..
        } = &mut self.particles;

        self.solver
            .compute_forces(positions, masses, forces, self.g, self.epsilon_squared);
    }

    /// Advances the system by one time step of length `dt`.
    ///
    /// Kick-drift-kick: half velocity kick from the stored forces, full
    /// position drift, force recomputation at the new positions, second half
    /// kick from the fresh forces. The recomputed forces stay in the
    /// container for the next call.
    pub fn step(&mut self, dt: F) {
        let half_dt = dt / F::from_f64(2.).unwrap();

        let Particles {
            masses,
            positions,
            velocities,
            forces,
        } = &mut self.particles;

        for ((v, f), m) in velocities.iter_mut().zip(forces.iter()).zip(masses.iter()) {
            *v += *f * (half_dt / *m);
        }

        for (p, v) in positions.iter_mut().zip(velocities.iter()) {
            *p += *v * dt;
        }

        self.solver
            .compute_forces(positions, masses, forces, self.g, self.epsilon_squared);

        for ((v, f), m) in velocities.iter_mut().zip(forces.iter()).zip(masses.iter()) {
            *v += *f * (half_dt / *m);
        }
    }

    /// Steps `num_steps` times, recording every intermediate position.
    ///
    /// Row t holds the positions after t steps; row 0 is the initial state.
    pub fn simulate(&mut self, dt: F, num_steps: usize) -> DMatrix<Vector3<F>> {
        let n = self.particles.len();
        let mut positions = DMatrix::from_element(num_steps + 1, n, Vector3::zeros());

        for (rec, pos) in positions
            .row_mut(0)
            .iter_mut()
            .zip(&self.particles.positions)
        {
            *rec = *pos;
        }

        for t in 1..=num_steps {
            self.step(dt);
            for (rec, pos) in positions
                .row_mut(t)
                .iter_mut()
                .zip(&self.particles.positions)
            {
                *rec = *pos;
            }
        }

        positions
    }
}
