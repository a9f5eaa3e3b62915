//! Data store: holds the loaded dataset for each language.
//!
//! Populated once at startup and read-only afterwards. An empty store is the
//! degraded state after a failed load; every renderer then no-ops on its own.

use crate::dataset::Dataset;
use crate::i18n::Language;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    datasets: HashMap<Language, Dataset>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: Language, dataset: Dataset) {
        self.datasets.insert(language, dataset);
    }

    pub fn get(&self, language: Language) -> Option<&Dataset> {
        self.datasets.get(&language)
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }
}
