// src/model/elements.rs

//! Periodic table lookup: element symbol <-> atomic number.
//!
//! The table is indexed by atomic number, so `ELEMENT_SYMBOLS[z - 1]` is the
//! symbol of element `z`. Lookups are exact and case-sensitive ("Cu", not "CU").

use crate::error::{GeometryError, Result};

/// Highest atomic number in the table.
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Element symbols, H (Z = 1) through Og (Z = 118).
pub const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    // --- Period 1 ---
    "H", "He",
    // --- Period 2 ---
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    // --- Period 3 ---
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    // --- Period 4 ---
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr",
    // --- Period 5 ---
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe",
    // --- Period 6 ---
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy",
    "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt",
    "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    // --- Period 7 ---
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf",
    "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Returns the atomic number (Z) for an element symbol, or `None` if unknown.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    ELEMENT_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| (i + 1) as u8)
}

/// Returns the element symbol for an atomic number, or `None` if out of range.
pub fn atomic_symbol(z: u8) -> Option<&'static str> {
    if z == 0 {
        return None;
    }
    ELEMENT_SYMBOLS.get(usize::from(z) - 1).copied()
}

/// Converts an element vector from number format to symbol format.
///
/// Order and length are preserved. Fails on the first number that has no
/// table entry.
pub fn convert_to_symbol(elements: &[u8]) -> Result<Vec<&'static str>> {
    elements
        .iter()
        .map(|&z| atomic_symbol(z).ok_or(GeometryError::UnknownAtomicNumber(u32::from(z))))
        .collect()
}

/// Converts an element vector from symbol format to number format.
pub fn convert_to_numbers<S: AsRef<str>>(elements: &[S]) -> Result<Vec<u8>> {
    elements
        .iter()
        .map(|s| {
            let s = s.as_ref();
            atomic_number(s).ok_or_else(|| GeometryError::UnknownSymbol(s.to_string()))
        })
        .collect()
}

/// Checks that a symbol is in the table, returning it unchanged.
pub fn validate_symbol(symbol: &str) -> Result<&str> {
    match atomic_number(symbol) {
        Some(_) => Ok(symbol),
        None => Err(GeometryError::UnknownSymbol(symbol.to_string())),
    }
}
