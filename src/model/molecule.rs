// src/model/molecule.rs

use crate::analysis::{motif, proximity, selection};
use crate::error::{GeometryError, Result};
use crate::model::elements;
use crate::utils::geometry::{self, Point3};
use serde::{Deserialize, Serialize};

/// A single molecule: element symbols index-aligned with Cartesian coordinates
///
/// `elements[i]` is the symbol of the atom at `coordinates[i]`. The two vectors
/// always have the same length; [`Molecule::new`] enforces it and the fields
/// are private so it cannot be broken afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMolecule", into = "RawMolecule")]
pub struct Molecule {
    elements: Vec<String>,
    coordinates: Vec<Point3>,
}

// Unchecked mirror used for (de)serialization
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawMolecule {
    elements: Vec<String>,
    coordinates: Vec<Point3>,
}

impl TryFrom<RawMolecule> for Molecule {
    type Error = GeometryError;

    fn try_from(raw: RawMolecule) -> Result<Self> {
        Molecule::new(raw.elements, raw.coordinates)
    }
}

impl From<Molecule> for RawMolecule {
    fn from(m: Molecule) -> Self {
        RawMolecule {
            elements: m.elements,
            coordinates: m.coordinates,
        }
    }
}

impl Molecule {
    /// Builds a molecule from index-aligned symbols and coordinates
    pub fn new<S: Into<String>>(elements: Vec<S>, coordinates: Vec<Point3>) -> Result<Self> {
        let elements: Vec<String> = elements.into_iter().map(Into::into).collect();
        proximity::check_aligned(elements.len(), coordinates.len())?;
        Ok(Self {
            elements,
            coordinates,
        })
    }

    /// Builds a molecule from atomic numbers instead of symbols
    pub fn from_numbers(numbers: &[u8], coordinates: Vec<Point3>) -> Result<Self> {
        let symbols = elements::convert_to_symbol(numbers)?;
        Self::new(symbols, coordinates)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn coordinates(&self) -> &[Point3] {
        &self.coordinates
    }

    /// Symbol and position of atom `idx`
    pub fn atom(&self, idx: usize) -> Result<(&str, Point3)> {
        proximity::check_index(idx, self.len())?;
        Ok((self.elements[idx].as_str(), self.coordinates[idx]))
    }

    /// Atomic numbers of every atom, failing on unknown symbols
    pub fn atomic_numbers(&self) -> Result<Vec<u8>> {
        elements::convert_to_numbers(&self.elements)
    }

    /// Hill-ordered formula string, e.g. "C2H6CuN2"
    pub fn formula(&self) -> String {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for el in &self.elements {
            match counts.iter_mut().find(|(s, _)| *s == el.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((el.as_str(), 1)),
            }
        }

        let has_carbon = counts.iter().any(|(s, _)| *s == "C");
        counts.sort_by(|a, b| {
            let rank = |s: &str| match (has_carbon, s) {
                (true, "C") => 0,
                (true, "H") => 1,
                _ => 2,
            };
            rank(a.0).cmp(&rank(b.0)).then_with(|| a.0.cmp(b.0))
        });

        counts
            .iter()
            .map(|(el, n)| if *n == 1 { el.to_string() } else { format!("{}{}", el, n) })
            .collect()
    }

    pub fn all_idx(&self, atom: &str) -> Vec<usize> {
        selection::get_all_idx(atom, &self.elements)
    }

    pub fn first_idx(&self, atom: &str) -> Option<usize> {
        selection::get_first_idx(atom, &self.elements)
    }

    /// Distance between atoms `i` and `j` (Angstroms)
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        let (_, a) = self.atom(i)?;
        let (_, b) = self.atom(j)?;
        Ok(geometry::distance(a, b))
    }

    /// Angle `i`-`center`-`j` in degrees
    pub fn angle(&self, i: usize, center: usize, j: usize) -> Result<f64> {
        let (_, c) = self.atom(center)?;
        let (_, a) = self.atom(i)?;
        let (_, b) = self.atom(j)?;
        geometry::get_three_point_angle(c, a, b)
    }

    pub fn closest_atom_to_metal(&self, atom: &str, metal_idx: usize) -> Result<usize> {
        proximity::get_closest_atom_to_metal(atom, &self.elements, metal_idx, &self.coordinates)
    }

    pub fn all_closest_atom_to_metal(&self, atom: &str, metal_idx: usize) -> Result<Vec<usize>> {
        proximity::get_all_closest_atom_to_metal(atom, &self.elements, metal_idx, &self.coordinates)
    }

    pub fn dist_vector(&self, atom_idx: usize) -> Result<Vec<f64>> {
        proximity::get_dist_vector(atom_idx, &self.coordinates)
    }

    pub fn dist_matrix(&self, parallel_threshold: usize) -> Vec<Vec<f64>> {
        proximity::get_dist_matrix(&self.coordinates, parallel_threshold)
    }

    pub fn atoms_within(&self, metal_idx: usize, cutoff: f64) -> Result<Vec<usize>> {
        proximity::atoms_within(metal_idx, &self.coordinates, cutoff)
    }

    pub fn central_carbon(&self, metal_idx: usize, config: &motif::MotifConfig) -> Result<usize> {
        motif::get_central_carbon_with(config, &self.elements, &self.coordinates, metal_idx)
    }

    pub fn carbon_single_nitro(&self, metal_idx: usize, config: &motif::MotifConfig) -> Result<usize> {
        motif::get_carbon_single_nitro_with(config, &self.elements, &self.coordinates, metal_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethylenediamine_cu() -> Molecule {
        Molecule::new(
            vec!["Cu", "N", "N", "C", "C", "H", "H"],
            vec![
                [0.0, 0.0, 0.0],
                [1.4, 1.4, 0.0],
                [-1.4, 1.4, 0.0],
                [0.7, 2.5, 0.0],
                [-0.7, 2.7, 0.0],
                [1.3, 3.5, 0.0],
                [-1.3, 3.5, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_misaligned() {
        let err = Molecule::new(vec!["Cu", "N"], vec![[0.0; 3]]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::LengthMismatch {
                elements: 2,
                coordinates: 1
            }
        );
    }

    #[test]
    fn test_from_numbers() {
        let m = Molecule::from_numbers(&[29, 7], vec![[0.0; 3], [2.0, 0.0, 0.0]]).unwrap();
        assert_eq!(m.elements(), &["Cu".to_string(), "N".to_string()]);
        assert_eq!(m.atomic_numbers().unwrap(), vec![29, 7]);
        assert!(Molecule::from_numbers(&[0], vec![[0.0; 3]]).is_err());
    }

    #[test]
    fn test_formula_hill_order() {
        let m = ethylenediamine_cu();
        assert_eq!(m.formula(), "C2H2CuN2");

        let water = Molecule::new(vec!["O", "H", "H"], vec![[0.0; 3]; 3]).unwrap();
        assert_eq!(water.formula(), "H2O");
    }

    #[test]
    fn test_wrappers_delegate() {
        let m = ethylenediamine_cu();
        assert_eq!(m.all_idx("N"), vec![1, 2]);
        assert_eq!(m.first_idx("C"), Some(3));
        assert_eq!(m.closest_atom_to_metal("N", 0).unwrap(), 1);
        assert_eq!(m.all_closest_atom_to_metal("C", 0).unwrap(), vec![3, 4]);
        assert_eq!(m.dist_vector(0).unwrap()[0], 0.0);
        assert_eq!(m.central_carbon(0, &motif::MotifConfig::default()).unwrap(), 3);

        let bite = m.angle(1, 0, 2).unwrap();
        assert!((bite - 90.0).abs() < 1e-10);
        assert!(m.distance(0, 99).is_err());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let m = ethylenediamine_cu();
        let json = serde_json::to_string(&m).unwrap();
        let back: Molecule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let bad = r#"{"elements":["Cu","N"],"coordinates":[[0.0,0.0,0.0]]}"#;
        assert!(serde_json::from_str::<Molecule>(bad).is_err());
    }
}
