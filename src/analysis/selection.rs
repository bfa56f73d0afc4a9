// src/analysis/selection.rs

//! Index lookups over an element sequence.
//!
//! These work on either representation of an element sequence: symbols
//! (`&[&str]`, `&[String]`) or atomic numbers (`&[u8]`). The query only needs
//! to be comparable with the sequence's item type.

/// All indexes where `elements[i] == atom`, in ascending order
///
/// Returns an empty vector when the element is absent.
pub fn get_all_idx<A, E>(atom: A, elements: &[E]) -> Vec<usize>
where
    A: PartialEq<E>,
{
    matching_indices(&atom, elements)
}

/// Borrowing form of [`get_all_idx`], for callers that still need the query
pub(crate) fn matching_indices<A, E>(atom: &A, elements: &[E]) -> Vec<usize>
where
    A: PartialEq<E>,
{
    elements
        .iter()
        .enumerate()
        .filter_map(|(i, el)| (*atom == *el).then_some(i))
        .collect()
}

/// Lowest index where `elements[i] == atom`, or `None`
pub fn get_first_idx<A, E>(atom: A, elements: &[E]) -> Option<usize>
where
    A: PartialEq<E>,
{
    elements.iter().position(|el| atom == *el)
}

/// Number of atoms of the given element
pub fn count_atoms<A, E>(atom: A, elements: &[E]) -> usize
where
    A: PartialEq<E>,
{
    elements.iter().filter(|el| atom == **el).count()
}

/// Symbol-keyed variant of [`get_all_idx`] for any string-like sequence
pub(crate) fn symbol_indices<S: AsRef<str>>(symbol: &str, elements: &[S]) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(i, el)| (el.as_ref() == symbol).then_some(i))
        .collect()
}
