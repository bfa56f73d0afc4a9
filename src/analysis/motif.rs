// src/analysis/motif.rs

use super::proximity::{check_aligned, check_index};
use super::selection::symbol_indices;
use crate::error::{GeometryError, Result};
use crate::model::elements::validate_symbol;
use crate::utils::geometry::{distance, Point3};
use serde::{Deserialize, Serialize};

// --- CONFIGURATION ---

/// Element symbols used by the coordination-motif heuristics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotifConfig {
    /// Backbone atom the heuristic picks (usually carbon)
    pub carbon_symbol: String,

    /// Donor atom bound to the metal (usually nitrogen)
    pub nitrogen_symbol: String,
}

impl Default for MotifConfig {
    fn default() -> Self {
        Self {
            carbon_symbol: "C".to_string(),
            nitrogen_symbol: "N".to_string(),
        }
    }
}

impl MotifConfig {
    /// Carbon bridging two phosphorus donors (e.g. dppm-type ligands)
    pub fn phosphine() -> Self {
        Self {
            nitrogen_symbol: "P".to_string(),
            ..Default::default()
        }
    }

    /// Carbon bridging two oxygen donors (e.g. acac-type ligands)
    pub fn oxygen_donor() -> Self {
        Self {
            nitrogen_symbol: "O".to_string(),
            ..Default::default()
        }
    }

    /// Both symbols must be in the periodic table
    pub fn validate(&self) -> Result<()> {
        validate_symbol(&self.carbon_symbol)?;
        validate_symbol(&self.nitrogen_symbol)?;
        Ok(())
    }
}

// --- HEURISTICS ---

/// Carbon minimizing the summed distance to the metal and the first
/// `donor_count` donors (ascending index)
fn closest_bridging_carbon<S: AsRef<str>>(
    config: &MotifConfig,
    elements: &[S],
    coordinates: &[Point3],
    metal_idx: usize,
    donor_count: usize,
) -> Result<usize> {
    check_aligned(elements.len(), coordinates.len())?;
    check_index(metal_idx, coordinates.len())?;

    let carbons = symbol_indices(&config.carbon_symbol, elements);
    if carbons.is_empty() {
        return Err(GeometryError::InsufficientAtoms {
            element: config.carbon_symbol.clone(),
            required: 1,
            found: 0,
        });
    }

    let donors = symbol_indices(&config.nitrogen_symbol, elements);
    if donors.len() < donor_count {
        return Err(GeometryError::InsufficientAtoms {
            element: config.nitrogen_symbol.clone(),
            required: donor_count,
            found: donors.len(),
        });
    }

    let mut anchors = vec![coordinates[metal_idx]];
    anchors.extend(donors[..donor_count].iter().map(|&i| coordinates[i]));

    let (best, score) = carbons
        .iter()
        .map(|&c| {
            let total: f64 = anchors.iter().map(|&a| distance(coordinates[c], a)).sum();
            (c, total)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| GeometryError::EmptySelection {
            atom: config.carbon_symbol.clone(),
        })?;

    log::debug!(
        "bridging {} for metal #{} and {} donor(s): #{} (sum {:.4} Å)",
        config.carbon_symbol,
        metal_idx,
        donor_count,
        best,
        score
    );
    Ok(best)
}

/// Central carbon of a metal-bis(nitrogen) chelate
///
/// Picks the carbon closest to the metal and the first two nitrogens
/// combined. Needs at least one carbon and two nitrogens.
pub fn get_central_carbon<S: AsRef<str>>(
    elements: &[S],
    coordinates: &[Point3],
    metal_idx: usize,
) -> Result<usize> {
    get_central_carbon_with(&MotifConfig::default(), elements, coordinates, metal_idx)
}

/// [`get_central_carbon`] with configurable carbon/donor symbols
pub fn get_central_carbon_with<S: AsRef<str>>(
    config: &MotifConfig,
    elements: &[S],
    coordinates: &[Point3],
    metal_idx: usize,
) -> Result<usize> {
    closest_bridging_carbon(config, elements, coordinates, metal_idx, 2)
}

/// Carbon next to a single metal-bound nitrogen
///
/// Same criterion as [`get_central_carbon`] using only the first nitrogen.
pub fn get_carbon_single_nitro<S: AsRef<str>>(
    elements: &[S],
    coordinates: &[Point3],
    metal_idx: usize,
) -> Result<usize> {
    get_carbon_single_nitro_with(&MotifConfig::default(), elements, coordinates, metal_idx)
}

/// [`get_carbon_single_nitro`] with configurable carbon/donor symbols
pub fn get_carbon_single_nitro_with<S: AsRef<str>>(
    config: &MotifConfig,
    elements: &[S],
    coordinates: &[Point3],
    metal_idx: usize,
) -> Result<usize> {
    closest_bridging_carbon(config, elements, coordinates, metal_idx, 1)
}
