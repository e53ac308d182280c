mod creator;

pub use creator::*;

use nalgebra::Vector3;

use crate::{Error, Float, Result};

/// A collection of particles.
///
/// This struct is used to utilize the Struct-of-Arrays (SOA) architecture:
/// masses, positions, velocities, and forces are parallel arrays sharing one
/// particle index. The arrays always have equal length; no particle is added
/// or removed after construction.
#[derive(Clone, Debug)]
pub struct Particles<F: Float> {
    pub(crate) masses: Vec<F>,
    pub(crate) positions: Vec<Vector3<F>>,
    pub(crate) velocities: Vec<Vector3<F>>,
    pub(crate) forces: Vec<Vector3<F>>,
}

impl<F: Float> Particles<F> {
    /// Assembles a particle system from parallel mass, position, and velocity arrays.
    ///
    /// Forces start out zeroed and are filled by the simulation before the
    /// first step. Fails if the arrays differ in length or if any mass is not
    /// strictly positive and finite; a rejected call leaves nothing partially
    /// built.
    pub fn new(
        masses: Vec<F>,
        positions: Vec<Vector3<F>>,
        velocities: Vec<Vector3<F>>,
    ) -> Result<Self> {
        let len = masses.len();
        if positions.len() != len || velocities.len() != len {
            return Err(Error::LengthMismatch {
                masses: len,
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }

        if let Some(index) = masses
            .iter()
            .position(|m| !(*m > F::zero()) || !m.is_finite())
        {
            return Err(Error::InvalidMass { index });
        }

        Ok(Self {
            masses,
            positions,
            velocities,
            forces: vec![Vector3::zeros(); len],
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    #[must_use]
    pub fn masses(&self) -> &[F] {
        &self.masses
    }

    #[must_use]
    pub fn positions(&self) -> &[Vector3<F>] {
        &self.positions
    }

    #[must_use]
    pub fn velocities(&self) -> &[Vector3<F>] {
        &self.velocities
    }

    /// The net force on each particle, as of the most recent accumulator call.
    #[must_use]
    pub fn forces(&self) -> &[Vector3<F>] {
        &self.forces
    }

    /// Whether every position, velocity, and force component is finite.
    ///
    /// The stepping loops never check this themselves; callers watching long
    /// runs probe it between steps. Masses are excluded since they are
    /// validated at construction and never written afterwards.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.positions
            .iter()
            .chain(&self.velocities)
            .chain(&self.forces)
            .all(|v| v.iter().all(|c| c.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_construction() {
        let particles = Particles::new(
            vec![1., 2.],
            vec![Vector3::new(1., 0., 0.), Vector3::new(-1., 0., 0.)],
            vec![Vector3::zeros(); 2],
        )
        .unwrap();

        assert_eq!(particles.len(), 2);
        assert!(!particles.is_empty());
        assert_eq!(particles.forces(), &[Vector3::zeros(); 2]);
        assert!(particles.is_finite());
    }

    #[test]
    fn length_mismatch() {
        let err = Particles::new(
            vec![1., 2., 3.],
            vec![Vector3::zeros(); 2],
            vec![Vector3::zeros(); 3],
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::LengthMismatch {
                masses: 3,
                positions: 2,
                velocities: 3,
            }
        );
    }

    #[test]
    fn invalid_mass() {
        let positions = vec![Vector3::zeros(); 2];
        let velocities = vec![Vector3::zeros(); 2];

        for bad in [0., -1., f64::NAN, f64::INFINITY] {
            let err = Particles::new(vec![1., bad], positions.clone(), velocities.clone())
                .unwrap_err();
            assert_eq!(err, Error::InvalidMass { index: 1 });
        }
    }

    #[test]
    fn empty_system() {
        let particles = Particles::<f64>::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(particles.is_empty());
        assert_eq!(particles.len(), 0);
    }
}
