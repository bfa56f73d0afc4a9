// src/error.rs

//! Error types for the geometry helpers.
//!
//! Every operation in this crate is a pure function, so a failure aborts only
//! the call that produced it. Nothing is retried and no partial result is
//! returned.

use thiserror::Error;

/// Convenience alias used by every fallible helper in the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by element lookup, atom selection and geometry routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Element symbol is not in the periodic table.
    #[error("unknown element symbol: '{0}'")]
    UnknownSymbol(String),

    /// Atomic number is not in the periodic table.
    #[error("unknown atomic number: {0}")]
    UnknownAtomicNumber(u32),

    /// A nearest-atom search had no candidates of the requested element.
    #[error("no atom of type '{atom}' in the structure")]
    EmptySelection {
        /// Element that was searched for.
        atom: String,
    },

    /// A coordination heuristic needs more atoms of an element than exist.
    #[error("need at least {required} '{element}' atom(s), found {found}")]
    InsufficientAtoms {
        /// Element symbol that is short.
        element: String,
        /// Minimum count the heuristic needs.
        required: usize,
        /// Count actually present.
        found: usize,
    },

    /// The vertex of an angle coincides with one of its arms.
    #[error("degenerate geometry: angle vertex coincides with an arm point")]
    DegenerateGeometry,

    /// Two points of different dimensionality were compared.
    #[error("dimension mismatch: {left}-D point vs {right}-D point")]
    DimensionMismatch { left: usize, right: usize },

    /// An atom index points past the end of the coordinate array.
    #[error("atom index {index} out of range for {len} atoms")]
    IndexOutOfRange { index: usize, len: usize },

    /// Element and coordinate arrays are not index-aligned.
    #[error("{elements} element(s) but {coordinates} coordinate row(s)")]
    LengthMismatch { elements: usize, coordinates: usize },
}

/// Errors raised while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured element symbol is not in the periodic table.
    #[error("invalid config: {0}")]
    Invalid(#[from] GeometryError),
}
