//! Energy and momentum diagnostics.

use std::ops::Mul;

use nalgebra::Vector3;

use crate::{Float, Particles};

/// Kinetic energy: sum of m v² / 2.
pub fn kinetic_energy<F: Float>(particles: &Particles<F>) -> F {
    let twice = particles
        .masses
        .iter()
        .zip(&particles.velocities)
        .fold(F::zero(), |acc, (m, v)| acc + *m * v.norm_squared());

    twice / F::from_f64(2.).unwrap()
}

/// Gravitational potential energy over all unordered pairs,
/// softened to match the force kernel:
///
/// PE = -sum G m_i m_j / sqrt(r² + ε²)
pub fn potential_energy<F: Float>(particles: &Particles<F>, g: F, epsilon_squared: F) -> F {
    let mut pe = F::zero();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let r_square =
                (particles.positions[j] - particles.positions[i]).norm_squared();
            pe -= g * particles.masses[i] * particles.masses[j]
                / (r_square + epsilon_squared).sqrt();
        }
    }

    pe
}

/// Total mechanical energy (kinetic + potential).
pub fn total_energy<F: Float>(particles: &Particles<F>, g: F, epsilon_squared: F) -> F {
    kinetic_energy(particles) + potential_energy(particles, g, epsilon_squared)
}

/// Net linear momentum: sum of m v.
pub fn total_momentum<F: Float>(particles: &Particles<F>) -> Vector3<F>
where
    Vector3<F>: Mul<F, Output = Vector3<F>>,
{
    particles
        .masses
        .iter()
        .zip(&particles.velocities)
        .fold(Vector3::zeros(), |acc, (m, v)| acc + *v * *m)
}
