//! Validation errors raised at the particle-ingestion boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(
        "particle arrays differ in length: {masses} masses, {positions} positions, {velocities} velocities"
    )]
    LengthMismatch {
        masses: usize,
        positions: usize,
        velocities: usize,
    },

    #[error("mass of particle {index} is not strictly positive and finite")]
    InvalidMass { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
