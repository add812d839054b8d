//! Classification bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Catalog;
use crate::core::ClassifierConfig;
use crate::pipeline::Pipeline;

/// Python wrapper for ClassifierConfig.
#[pyclass(name = "ClassifierConfig")]
#[derive(Clone, Debug)]
pub struct PyClassifierConfig(pub ClassifierConfig);

#[pymethods]
impl PyClassifierConfig {
    /// Create a configuration; omitted values keep their defaults.
    #[new]
    #[pyo3(signature = (
        legal_deck_size = None,
        species = None,
        species_threshold = None,
        battleground_system_threshold = None,
        jedi_test_threshold = None,
        tie_threshold = None,
    ))]
    fn new(
        legal_deck_size: Option<u32>,
        species: Option<Vec<String>>,
        species_threshold: Option<usize>,
        battleground_system_threshold: Option<usize>,
        jedi_test_threshold: Option<usize>,
        tie_threshold: Option<usize>,
    ) -> Self {
        let defaults = ClassifierConfig::default();
        Self(ClassifierConfig {
            legal_deck_size: legal_deck_size.unwrap_or(defaults.legal_deck_size),
            species: species.unwrap_or(defaults.species),
            species_threshold: species_threshold.unwrap_or(defaults.species_threshold),
            battleground_system_threshold: battleground_system_threshold
                .unwrap_or(defaults.battleground_system_threshold),
            jedi_test_threshold: jedi_test_threshold.unwrap_or(defaults.jedi_test_threshold),
            tie_threshold: tie_threshold.unwrap_or(defaults.tie_threshold),
        })
    }

    #[getter]
    fn legal_deck_size(&self) -> u32 {
        self.0.legal_deck_size
    }

    #[getter]
    fn species(&self) -> Vec<String> {
        self.0.species.clone()
    }

    #[getter]
    fn species_threshold(&self) -> usize {
        self.0.species_threshold
    }

    #[getter]
    fn tie_threshold(&self) -> usize {
        self.0.tie_threshold
    }

    fn __repr__(&self) -> String {
        format!(
            "ClassifierConfig(legal_deck_size={}, species={:?}, species_threshold={})",
            self.0.legal_deck_size, self.0.species, self.0.species_threshold
        )
    }
}

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{e}"))
}

/// Classify plaintext decklists.
///
/// Takes the Dark and Light catalog JSON documents and the decklist texts.
/// Returns `(decklists_json, archetypes_json)`.
#[pyfunction]
#[pyo3(signature = (dark_json, light_json, decklists, config = None))]
pub fn classify(
    dark_json: &str,
    light_json: &str,
    decklists: Vec<String>,
    config: Option<PyClassifierConfig>,
) -> PyResult<(String, String)> {
    let catalog = Catalog::load(dark_json, light_json).map_err(value_error)?;
    let config = config.map(|c| c.0).unwrap_or_default();
    let output = Pipeline::new(&catalog, config).run(&decklists);

    let records = serde_json::to_string(&output.records).map_err(value_error)?;
    let archetypes = serde_json::to_string(&output.archetypes).map_err(value_error)?;
    Ok((records, archetypes))
}
