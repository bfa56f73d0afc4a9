// src/analysis/proximity.rs

//! Distance scans around a reference (metal) atom.
//!
//! Ties are broken on ascending atom index everywhere: the nearest-atom
//! search keeps the first minimum it meets and the sorted variants use a
//! stable sort, so equal distances keep their original order.

use super::selection::matching_indices;
use crate::error::{GeometryError, Result};
use crate::utils::geometry::{distance, Point3};
use rayon::prelude::*;
use std::fmt;

/// Default atom count above which [`get_dist_matrix`] runs rows in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 500;

/// Checks that element and coordinate arrays are index-aligned
pub(crate) fn check_aligned(elements: usize, coordinates: usize) -> Result<()> {
    if elements != coordinates {
        return Err(GeometryError::LengthMismatch {
            elements,
            coordinates,
        });
    }
    Ok(())
}

/// Checks that `index` selects a row of an array of length `len`
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(GeometryError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Pairs each candidate index with its distance to `center`
fn distances_to(center: Point3, candidates: &[usize], coordinates: &[Point3]) -> Vec<(usize, f64)> {
    candidates
        .iter()
        .map(|&i| (i, distance(center, coordinates[i])))
        .collect()
}

/// Index of the atom of type `atom` closest to the metal at `metal_idx`
///
/// Fails with `EmptySelection` when no atom of that type exists.
pub fn get_closest_atom_to_metal<A, E>(
    atom: A,
    elements: &[E],
    metal_idx: usize,
    coordinates: &[Point3],
) -> Result<usize>
where
    A: PartialEq<E> + fmt::Display,
{
    check_aligned(elements.len(), coordinates.len())?;
    check_index(metal_idx, coordinates.len())?;

    let candidates = matching_indices(&atom, elements);
    let metal = coordinates[metal_idx];

    // min_by returns the first of several equal minima
    let closest = distances_to(metal, &candidates, coordinates)
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match closest {
        Some((idx, dist)) => {
            log::debug!("closest {} to metal #{}: #{} at {:.4} Å", atom, metal_idx, idx, dist);
            Ok(idx)
        }
        None => Err(GeometryError::EmptySelection {
            atom: atom.to_string(),
        }),
    }
}

/// Every atom of type `atom`, sorted nearest-first to the metal at `metal_idx`
///
/// Returns an empty vector when no atom of that type exists.
pub fn get_all_closest_atom_to_metal<A, E>(
    atom: A,
    elements: &[E],
    metal_idx: usize,
    coordinates: &[Point3],
) -> Result<Vec<usize>>
where
    A: PartialEq<E>,
{
    check_aligned(elements.len(), coordinates.len())?;
    check_index(metal_idx, coordinates.len())?;

    let candidates = matching_indices(&atom, elements);
    let mut ranked = distances_to(coordinates[metal_idx], &candidates, coordinates);
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(ranked.into_iter().map(|(i, _)| i).collect())
}

/// Distance from the atom at `atom_idx` to every atom, in atom-index order
///
/// The entry at `atom_idx` itself is 0.
pub fn get_dist_vector(atom_idx: usize, coordinates: &[Point3]) -> Result<Vec<f64>> {
    check_index(atom_idx, coordinates.len())?;
    let center = coordinates[atom_idx];
    Ok(coordinates.iter().map(|&p| distance(center, p)).collect())
}

/// Full N x N distance matrix; row `i` equals `get_dist_vector(i, ..)`
///
/// Rows are computed on the rayon pool once the structure has more than
/// `parallel_threshold` atoms.
pub fn get_dist_matrix(coordinates: &[Point3], parallel_threshold: usize) -> Vec<Vec<f64>> {
    let row = |center: &Point3| -> Vec<f64> {
        coordinates.iter().map(|&p| distance(*center, p)).collect()
    };

    if coordinates.len() > parallel_threshold {
        log::debug!("distance matrix: {} atoms, parallel", coordinates.len());
        coordinates.par_iter().map(row).collect()
    } else {
        coordinates.iter().map(row).collect()
    }
}

/// All other atoms within `cutoff` Å of the metal, sorted nearest-first
pub fn atoms_within(metal_idx: usize, coordinates: &[Point3], cutoff: f64) -> Result<Vec<usize>> {
    check_index(metal_idx, coordinates.len())?;
    let metal = coordinates[metal_idx];

    let mut shell: Vec<(usize, f64)> = coordinates
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != metal_idx)
        .map(|(i, &p)| (i, distance(metal, p)))
        .filter(|&(_, d)| d <= cutoff)
        .collect();
    shell.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(shell.into_iter().map(|(i, _)| i).collect())
}
