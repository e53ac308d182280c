use std::ops::Mul;

use nalgebra::Vector3;

use crate::Float;

/// Gravitational constant in SI units.
pub const G: f64 = 6.674e-11;

/// The softened gravitational force exerted on the first particle by the second.
///
/// The softening `epsilon_squared` is added to the squared distance before the
/// inverse-cube factor, bounding the force as the separation approaches zero.
/// Raising the squared distance to the power 3/2 stands in for the unit vector
/// times the inverse-square law, saving the normalization.
pub fn force<F: Float>(
    position1: Vector3<F>,
    mass1: F,
    position2: Vector3<F>,
    mass2: F,
    g: F,
    epsilon_squared: F,
) -> Vector3<F>
where
    Vector3<F>: Mul<F, Output = Vector3<F>>,
{
    let r = position2 - position1;
    let r_square = r.norm_squared();
    r * g * mass1 * mass2 / (r_square + epsilon_squared).sqrt().powi(3)
}

#[cfg(test)]
mod tests {
    use approx::{assert_relative_eq, assert_ulps_eq};

    use super::*;

    #[test]
    fn attractive() {
        let f = force(
            Vector3::new(1., 0., 0.),
            1.,
            Vector3::new(-1., 0., 0.),
            1.,
            G,
            1e-5,
        );

        assert!(f[0] < 0.);
        assert_eq!(f[1], 0.);
        assert_eq!(f[2], 0.);
    }

    #[test]
    fn antisymmetric() {
        let p1 = Vector3::new(3., -1., 0.5);
        let p2 = Vector3::new(-2., 4., 1.5);

        let f12 = force(p1, 2e3, p2, 5e4, G, 1e-4);
        let f21 = force(p2, 5e4, p1, 2e3, G, 1e-4);

        assert_ulps_eq!(f12, -f21);
    }

    #[test]
    fn two_body_magnitude() {
        let m = 6.0e24;
        let f = force(
            Vector3::zeros(),
            m,
            Vector3::new(100., 0., 0.),
            m,
            6.674e-11,
            1e-9,
        );

        // At d = 100 the softening correction is far below the tolerance.
        assert_relative_eq!(f[0], 6.674e-11 * m * m / 1e4, max_relative = 1e-9);
        assert_eq!(f[1], 0.);
        assert_eq!(f[2], 0.);
    }
}
