//! Coordination-geometry helpers for metal complexes.
//!
//! A flat set of pure functions over small in-memory arrays: an element
//! sequence (symbols or atomic numbers) index-aligned with Cartesian
//! coordinates. They answer the questions a complex-analysis pipeline asks
//! about the atoms around a metal center:
//!
//! - element symbol <-> atomic number conversion ([`convert_to_symbol`], [`convert_to_numbers`])
//! - distances ([`euclid_dist`], [`get_dist_vector`], [`get_dist_matrix`])
//! - nearest atoms of a given element ([`get_closest_atom_to_metal`], [`get_all_closest_atom_to_metal`])
//! - chelate backbone heuristics ([`get_central_carbon`], [`get_carbon_single_nitro`])
//! - bond and torsion angles ([`get_three_point_angle`], [`dihedral_angle`])
//!
//! ```
//! use coordgeom::{get_central_carbon, get_three_point_angle};
//!
//! let elements = ["Cu", "N", "N", "C"];
//! let coordinates = [
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [-1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! ];
//! assert_eq!(get_central_carbon(&elements, &coordinates, 0)?, 3);
//!
//! let angle = get_three_point_angle(coordinates[0], coordinates[1], coordinates[3])?;
//! assert!((angle - 90.0).abs() < 1e-10);
//! # Ok::<(), coordgeom::GeometryError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod utils;

pub use analysis::{
    atoms_within, count_atoms, get_all_closest_atom_to_metal, get_all_idx,
    get_carbon_single_nitro, get_carbon_single_nitro_with, get_central_carbon,
    get_central_carbon_with, get_closest_atom_to_metal, get_dist_matrix, get_dist_vector,
    get_first_idx, MotifConfig,
};
pub use config::Config;
pub use error::{ConfigError, GeometryError, Result};
pub use model::{atomic_number, atomic_symbol, convert_to_numbers, convert_to_symbol, Molecule};
pub use utils::geometry::{dihedral_angle, distance, euclid_dist, get_three_point_angle, Point3};
pub use utils::report::coordination_report;
