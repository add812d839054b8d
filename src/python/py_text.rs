//! Title normalization bindings for Python.

use pyo3::prelude::*;

use crate::text;

/// Human-readable form of a card title.
#[pyfunction]
pub fn display_title(title: &str) -> String {
    text::display_title(title)
}

/// Key two titles must share to name the same card.
#[pyfunction]
pub fn comparison_key(title: &str) -> String {
    text::comparison_key(title)
}

/// Lowercase alphanumeric form used to compare archetype names.
#[pyfunction]
pub fn comparable_string(input: &str) -> String {
    text::comparable_string(input)
}
