//! Python bindings for swccg-decklists.
//!
//! # Quick Start
//!
//! ```python
//! import swccg_decklists as sw
//!
//! sw.comparison_key("Artoo-Deetoo")  # "artoo-detoo"
//!
//! records, archetypes = sw.classify(
//!     open("Dark.json").read(),
//!     open("Light.json").read(),
//!     [open(path).read() for path in paths],
//!     config=sw.ClassifierConfig(tie_threshold=5),
//! )
//! ```

use pyo3::prelude::*;

mod py_classify;
mod py_text;

pub use py_classify::*;
pub use py_text::*;

/// swccg_decklists: Star Wars CCG decklist classification.
#[pymodule]
fn swccg_decklists(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Normalization
    m.add_function(wrap_pyfunction!(display_title, m)?)?;
    m.add_function(wrap_pyfunction!(comparison_key, m)?)?;
    m.add_function(wrap_pyfunction!(comparable_string, m)?)?;

    // Classification
    m.add_class::<PyClassifierConfig>()?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;

    Ok(())
}
