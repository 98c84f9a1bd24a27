use pyo3::prelude::*;
use pyo3::exceptions;

use crate::autocorrect::Index;
use crate::error::Error;
use crate::query::{NGramRange, Query};
use crate::utils;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyErr::new::<exceptions::PyValueError, _>(err.to_string())
    }
}

#[pyclass(name = "Autocorrect")]
pub struct PyAutocorrect {
    index: Index,
}

// Python wrapper for the index.
#[pymethods]
impl PyAutocorrect {
    #[new]
    fn new(words: Vec<String>, min_ngram: Option<usize>,
           max_ngram: Option<usize>) -> PyResult<Self> {
        let defaults = NGramRange::default();
        let range = NGramRange::new(min_ngram.unwrap_or(defaults.min),
                                    max_ngram.unwrap_or(defaults.max))?;
        let index = crate::build_index_with(&words, range)?;
        Ok(PyAutocorrect { index })
    }

    fn suggest(&self, py: Python, word: &str, threshold: Option<usize>,
               max_candidates: Option<usize>,
               length_delta: Option<usize>) -> PyResult<Vec<(String, usize)>> {
        let mut query = Query::new(word);
        if let Some(threshold) = threshold {
            query = query.threshold(threshold);
        }
        if let Some(max_candidates) = max_candidates {
            query = query.max_candidates(max_candidates);
        }
        if let Some(length_delta) = length_delta {
            query = query.length_delta(length_delta);
        }

        let index = &self.index;
        let suggestions = py.allow_threads(move || {
            index.search(&query).map(|suggestions| {
                suggestions.iter()
                    .map(|s| (s.word.to_string(), s.distance))
                    .collect::<Vec<(String, usize)>>()
            })
        })?;
        Ok(suggestions)
    }

    fn __len__(&self) -> usize {
        self.index.len()
    }
}

/* Helper to calculate levenshtein distance from Python without additional libs */
#[pyfunction]
fn distance(side_a: &str, side_b: &str) -> PyResult<usize> {
    Ok(utils::distance(side_a, side_b))
}

#[pyfunction]
fn ngrams(word: &str, min_ngram: usize, max_ngram: usize) -> PyResult<Vec<u64>> {
    let range = NGramRange::new(min_ngram, max_ngram)?;
    Ok(utils::ngrams(word, &range))
}

#[pymodule]
fn autocorrect(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__doc__", "N-gram indexed spelling suggestions")?;
    m.add_class::<PyAutocorrect>()?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(ngrams, m)?)?;
    Ok(())
}
