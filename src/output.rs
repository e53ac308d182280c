use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use nalgebra::{DMatrix, Scalar, Vector3};

/// Writes one `(x, y, z)` line per vector.
pub fn write_state<T, W>(out: &mut W, vectors: &[Vector3<T>]) -> Result<(), io::Error>
where
    T: Scalar + Display,
    W: Write,
{
    for v in vectors {
        writeln!(out, "({}, {}, {})", v[0], v[1], v[2])?;
    }

    Ok(())
}

/// Writes the position history of a simulation run as CSV:
/// one row per time step, three columns per particle.
pub fn write_csv_positions<T: Scalar + Display>(
    positions: &DMatrix<Vector3<T>>,
    path: impl AsRef<Path>,
) -> Result<(), io::Error> {
    let mut file = BufWriter::new(File::create(path)?);
    let (_, num_particles) = positions.shape();

    write!(file, "t")?;
    for i in 0..num_particles {
        write!(file, ",x{i},y{i},z{i}")?;
    }
    writeln!(file)?;

    // time
    for (t, row) in positions.row_iter().enumerate() {
        write!(file, "{t}")?;

        // all particles
        for vec in row.iter() {
            for elem in vec.iter() {
                write!(file, ",{elem}")?;
            }
        }

        writeln!(file)?;
    }

    Ok(())
}
