use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use leapfrog::{DirectSummation, ForceSolver, Particles, Simulation};
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_particles(rng: &mut StdRng, n_par: usize) -> Particles<f64> {
    let masses = (0..n_par).map(|_| rng.gen_range(1.0..1000.)).collect();
    let positions = (0..n_par).map(|_| 10. * Vector3::new_random()).collect();
    let velocities = (0..n_par).map(|_| Vector3::new_random()).collect();
    Particles::new(masses, positions, velocities).unwrap()
}

fn direct_summation_forces(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("direct summation forces");
    for n_par in [100, 1_000] {
        for (name, ds) in [
            ("single", DirectSummation::new()),
            ("multithreaded", DirectSummation::new().multithreaded(4)),
            ("rayon", DirectSummation::new().rayon_pool()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n_par), &n_par, |b, &n_par| {
                b.iter_batched_ref(
                    || {
                        let par = random_particles(&mut rng, n_par);
                        let forces = vec![Vector3::zeros(); n_par];
                        (par, forces)
                    },
                    |(par, forces)| {
                        ds.compute_forces(par.positions(), par.masses(), forces, 1., 1e-5);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

fn direct_summation_particles(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("direct summation particles");
    for n_par in [100, 1_000] {
        group.bench_with_input(BenchmarkId::new("single", n_par), &n_par, |b, &n_par| {
            b.iter_batched_ref(
                || {
                    let par = random_particles(&mut rng, n_par);
                    Simulation::new(par, DirectSummation::new(), 1e-5)
                },
                |sim| sim.simulate(0.1, 10),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("multithreaded", n_par),
            &n_par,
            |b, &n_par| {
                b.iter_batched_ref(
                    || {
                        let par = random_particles(&mut rng, n_par);
                        Simulation::new(par, DirectSummation::new().multithreaded(4), 1e-5)
                    },
                    |sim| sim.simulate(0.1, 10),
                    BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("rayon", n_par), &n_par, |b, &n_par| {
            b.iter_batched_ref(
                || {
                    let par = random_particles(&mut rng, n_par);
                    Simulation::new(par, DirectSummation::new().rayon_pool(), 1e-5)
                },
                |sim| sim.simulate(0.1, 10),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, direct_summation_forces, direct_summation_particles);
criterion_main!(benches);
