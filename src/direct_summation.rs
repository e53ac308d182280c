use std::ops::Mul;
use std::{sync::mpsc, thread};

use nalgebra::Vector3;

use crate::{gravity, Float, ForceSolver};

#[derive(Copy, Clone, Debug, Default)]
pub enum Execution {
    #[default]
    SingleThreaded,
    Multithreaded {
        num_threads: usize,
    },
    #[cfg(feature = "rayon")]
    RayonPool,
}

/// Pairwise force accumulation over all unordered particle pairs.
///
/// Each pair is evaluated once and applied to both particles with opposite
/// sign, so a system of n particles costs n(n-1)/2 kernel evaluations.
#[derive(Copy, Clone, Debug, Default)]
pub struct DirectSummation {
    execution: Execution,
}

impl DirectSummation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            execution: Execution::SingleThreaded,
        }
    }

    /// Calculate the forces with multiple threads.
    ///
    /// Every thread gets its own full-length force buffer and a contiguous
    /// range of outer pair indices; the buffers are merged by summation.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads` is zero.
    #[must_use]
    pub fn multithreaded(mut self, num_threads: usize) -> Self {
        assert!(num_threads > 0, "at least one thread is required");
        self.execution = Execution::Multithreaded { num_threads };
        self
    }

    /// Use Rayon to calculate the forces with multiple threads.
    ///
    /// Every pool thread gets its own full-length force buffer and a
    /// contiguous range of outer pair indices; the buffers are merged by
    /// summation.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn rayon_pool(mut self) -> Self {
        self.execution = Execution::RayonPool;
        self
    }
}

impl<F: Float> ForceSolver<F> for DirectSummation
where
    Vector3<F>: Mul<F, Output = Vector3<F>>,
{
    fn compute_forces(
        &self,
        positions: &[Vector3<F>],
        masses: &[F],
        forces: &mut [Vector3<F>],
        g: F,
        epsilon_squared: F,
    ) {
        let n = positions.len();

        match self.execution {
            Execution::SingleThreaded => {
                for f in forces.iter_mut() {
                    *f = Vector3::zeros();
                }

                for i in 0..n {
                    for j in (i + 1)..n {
                        let f = gravity::force(
                            positions[i],
                            masses[i],
                            positions[j],
                            masses[j],
                            g,
                            epsilon_squared,
                        );
                        forces[i] += f;
                        forces[j] -= f;
                    }
                }
            }
            Execution::Multithreaded { num_threads } => {
                let (tx, rx) = mpsc::channel();

                let mut chunks: Vec<_> = (0..=num_threads)
                    .map(|i| i * (n / num_threads))
                    .collect();
                chunks[num_threads] += n % num_threads;

                thread::scope(|s| {
                    for t in 0..num_threads {
                        let tx = &tx;
                        let outer = chunks[t]..chunks[t + 1];

                        s.spawn(move || {
                            let mut partial = vec![Vector3::zeros(); n];
                            for i in outer {
                                for j in (i + 1)..n {
                                    let f = gravity::force(
                                        positions[i],
                                        masses[i],
                                        positions[j],
                                        masses[j],
                                        g,
                                        epsilon_squared,
                                    );
                                    partial[i] += f;
                                    partial[j] -= f;
                                }
                            }
                            tx.send(partial).unwrap();
                        });
                    }
                });

                for f in forces.iter_mut() {
                    *f = Vector3::zeros();
                }

                for partial in rx.iter().take(num_threads) {
                    for (f, p) in forces.iter_mut().zip(partial) {
                        *f += p;
                    }
                }
            }
            #[cfg(feature = "rayon")]
            Execution::RayonPool => {
                let num_threads = rayon::current_num_threads();

                let mut chunks: Vec<_> = (0..=num_threads)
                    .map(|i| i * (n / num_threads))
                    .collect();
                chunks[num_threads] += n % num_threads;

                let partials = rayon::broadcast(|ctx| {
                    let mut partial = vec![Vector3::zeros(); n];
                    for i in chunks[ctx.index()]..chunks[ctx.index() + 1] {
                        for j in (i + 1)..n {
                            let f = gravity::force(
                                positions[i],
                                masses[i],
                                positions[j],
                                masses[j],
                                g,
                                epsilon_squared,
                            );
                            partial[i] += f;
                            partial[j] -= f;
                        }
                    }
                    partial
                });

                for f in forces.iter_mut() {
                    *f = Vector3::zeros();
                }

                for partial in partials {
                    for (f, p) in forces.iter_mut().zip(partial) {
                        *f += p;
                    }
                }
            }
        }
    }
}
