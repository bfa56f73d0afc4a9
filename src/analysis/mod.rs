// src/analysis/mod.rs

pub mod motif;
pub mod proximity;
pub mod selection;

// Re-export commonly used items
pub use motif::{
    get_carbon_single_nitro,
    get_carbon_single_nitro_with,
    get_central_carbon,
    get_central_carbon_with,
    MotifConfig,
};
pub use proximity::{
    atoms_within,
    get_all_closest_atom_to_metal,
    get_closest_atom_to_metal,
    get_dist_matrix,
    get_dist_vector,
};
pub use selection::{count_atoms, get_all_idx, get_first_idx};
