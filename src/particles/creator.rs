use nalgebra::Vector3;
#[cfg(feature = "randomization")]
pub use random::*;

use crate::{Float, Particles, Result};

/// Source of initial particle states.
pub trait ParticleCreator<F: Float> {
    fn create_particle(&mut self) -> (F, Vector3<F>, Vector3<F>);

    fn create_particles(&mut self, n: u32) -> Result<Particles<F>> {
        let mut masses = Vec::with_capacity(n as usize);
        let mut positions = Vec::with_capacity(n as usize);
        let mut velocities = Vec::with_capacity(n as usize);

        for _ in 0..n {
            let (m, pos, vel) = self.create_particle();
            masses.push(m);
            positions.push(pos);
            velocities.push(vel);
        }

        Particles::new(masses, positions, velocities)
    }
}

#[cfg(feature = "randomization")]
mod random {
    #![allow(clippy::wildcard_imports)]

    use std::marker::PhantomData;
    use std::ops::Range;

    use nalgebra::Vector3;
    use rand::distributions::uniform::SampleUniform;
    use rand::rngs::ThreadRng;
    use rand::Rng;
    use rand_distr::{Distribution, Uniform};

    use super::*;

    /// Draws every particle independently from per-component distributions.
    ///
    /// Masses pass through the validating constructor, so a distribution that
    /// can produce a non-positive mass fails the whole creation.
    pub struct DistrParticleCreator<F, R, MD, PD, VD>
    where
        F: Float,
        R: Rng,
        MD: Distribution<F>,
        PD: Distribution<F>,
        VD: Distribution<F>,
    {
        rng: R,
        mass_distr: MD,
        position_distr: PD,
        velocity_distr: VD,
        phantom: PhantomData<F>,
    }

    impl<F, MD, PD, VD> DistrParticleCreator<F, ThreadRng, MD, PD, VD>
    where
        F: Float,
        MD: Distribution<F>,
        PD: Distribution<F>,
        VD: Distribution<F>,
    {
        pub fn new(mass_distr: MD, position_distr: PD, velocity_distr: VD) -> Self {
            Self {
                rng: rand::thread_rng(),
                mass_distr,
                position_distr,
                velocity_distr,
                phantom: PhantomData,
            }
        }
    }

    impl<F> DistrParticleCreator<F, ThreadRng, Uniform<F>, Uniform<F>, Uniform<F>>
    where
        F: Float + SampleUniform,
    {
        /// Uniform mass, position-component, and velocity-component ranges.
        ///
        /// `masses` must be strictly positive.
        pub fn uniform(masses: Range<F>, positions: Range<F>, velocities: Range<F>) -> Self {
            Self::new(
                Uniform::new(masses.start, masses.end),
                Uniform::new(positions.start, positions.end),
                Uniform::new(velocities.start, velocities.end),
            )
        }
    }

    impl<F, R, MD, PD, VD> DistrParticleCreator<F, R, MD, PD, VD>
    where
        F: Float,
        R: Rng,
        MD: Distribution<F>,
        PD: Distribution<F>,
        VD: Distribution<F>,
    {
        /// Like `new`, but with a caller-supplied generator, e.g. a seeded one.
        pub fn rng(mass_distr: MD, position_distr: PD, velocity_distr: VD, rng: R) -> Self {
            Self {
                rng,
                mass_distr,
                position_distr,
                velocity_distr,
                phantom: PhantomData,
            }
        }
    }

    impl<F, R, MD, PD, VD> ParticleCreator<F> for DistrParticleCreator<F, R, MD, PD, VD>
    where
        F: Float,
        R: Rng,
        MD: Distribution<F>,
        PD: Distribution<F>,
        VD: Distribution<F>,
    {
        fn create_particle(&mut self) -> (F, Vector3<F>, Vector3<F>) {
            let rng = &mut self.rng;

            let m = self.mass_distr.sample(rng);
            let pos = Vector3::new(
                self.position_distr.sample(rng),
                self.position_distr.sample(rng),
                self.position_distr.sample(rng),
            );
            let vel = Vector3::new(
                self.velocity_distr.sample(rng),
                self.velocity_distr.sample(rng),
                self.velocity_distr.sample(rng),
            );

            (m, pos, vel)
        }
    }

}
