//src/model/mod.rs
pub mod elements;
pub mod molecule;

// Re-exports for cleaner imports
pub use elements::{atomic_number, atomic_symbol, convert_to_numbers, convert_to_symbol};
pub use molecule::Molecule;
