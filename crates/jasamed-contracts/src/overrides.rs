//! Tariff overrides from an uploaded price list.
//!
//! An override supersedes the tariff stored on the admission record, keyed
//! by claim/admission identifier.  Absence of a key means "no override",
//! never "tariff is zero".  Ingestion of the uploaded file (CSV in
//! production) is the collaborator's concern; this type is the resolved map
//! the engine consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A resolved map of admission id → overriding tariff amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TariffOverrides {
    #[serde(default)]
    overrides: BTreeMap<String, f64>,
}

impl TariffOverrides {
    /// An empty map: every admission keeps its stored tariff.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, admission_id: impl Into<String>, tariff: f64) {
        self.overrides.insert(admission_id.into(), tariff);
    }

    /// The tariff to allocate against: the override when one exists for
    /// `admission_id`, otherwise `stored_tariff`.
    pub fn resolve(&self, admission_id: &str, stored_tariff: f64) -> f64 {
        self.overrides
            .get(admission_id)
            .copied()
            .unwrap_or(stored_tariff)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
