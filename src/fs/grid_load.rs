use std::path::Path;

use npyz::{NpyFile, Order};

use crate::{
    fs::{LoadError, LoadResult},
    ranking::RankedResult,
};

/// Reads a two-dimensional `.npy` array of coefficients from disk.
///
/// See [`grid_from_npy_bytes`] for the layout rules.
pub fn load_grid_from_npy(path: impl AsRef<Path>) -> LoadResult<Vec<RankedResult>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let results = grid_from_npy_bytes(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        count = results.len(),
        "loaded coefficient grid"
    );
    Ok(results)
}

/// Parses an in-memory `.npy` array of shape `(rows, cols)` into one result per element.
///
/// Element `[r, c]` becomes `RankedResult::new(value, r, c)`. Results are returned in
/// row-major order whatever the storage order of the file. `f64` arrays are read as is,
/// `f32` arrays are widened. Non-finite values are kept and reported through a warning.
pub fn grid_from_npy_bytes(bytes: &[u8]) -> LoadResult<Vec<RankedResult>> {
    let npy = NpyFile::new(bytes)?;
    let (rows, cols) = match npy.shape() {
        &[rows, cols] => (rows, cols),
        other => return Err(LoadError::Shape(other.to_vec())),
    };
    for dim in [rows, cols] {
        if i32::try_from(dim.saturating_sub(1)).is_err() {
            return Err(LoadError::CoordinateOverflow(dim));
        }
    }
    let fortran = matches!(npy.order(), Order::Fortran);
    let values = read_values(bytes, npy)?;

    let (rows, cols) = (rows as usize, cols as usize);
    let mut results = Vec::with_capacity(values.len());
    for r in 0..rows {
        for c in 0..cols {
            let offset = if fortran { c * rows + r } else { r * cols + c };
            results.push(RankedResult::new(values[offset], r as i32, c as i32));
        }
    }

    let non_finite = results
        .iter()
        .filter(|r| !r.coefficient.is_finite())
        .count();
    if non_finite > 0 {
        tracing::warn!(
            non_finite,
            "coefficient grid holds non-finite values, their extraction order is unspecified"
        );
    }

    Ok(results)
}

fn read_values(bytes: &[u8], npy: NpyFile<&[u8]>) -> LoadResult<Vec<f64>> {
    match npy.data::<f64>() {
        Ok(reader) => Ok(reader.collect::<std::io::Result<Vec<f64>>>()?),
        Err(f64_err) => {
            // the header was consumed by the first attempt, parse it again
            let reader = NpyFile::new(bytes)?
                .data::<f32>()
                .map_err(|_| LoadError::Npy(f64_err.to_string()))?;
            let values = reader.collect::<std::io::Result<Vec<f32>>>()?;
            Ok(values.into_iter().map(f64::from).collect())
        }
    }
}
