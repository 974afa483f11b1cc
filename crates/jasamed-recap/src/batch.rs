//! The whole-batch driver: classify, allocate, fold.
//!
//! `run_batch` is the one entry point report renderers need: it resolves
//! each admission's tariff against the overrides, classifies its visits,
//! allocates the claim, and folds everything into the totals and the
//! monthly recap.  Each admission is independent; the folds are commutative
//! and associative, so the sequential loop here could equally be a parallel
//! map with a `merge` reduction.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use jasamed_alloc::allocate;
use jasamed_classify::{classify_admission, VisitClassification};
use jasamed_contracts::{
    AdmissionRecord, AllocationResult, JasamedError, JasamedResult, TariffOverrides,
};

use crate::recap::MonthlyRecap;
use crate::totals::TotalsAccumulator;

/// One admission's line in a batch report.
#[derive(Debug, Clone, Serialize)]
pub struct AdmissionRow {
    pub admission_id: String,
    /// The override-resolved tariff the allocation ran against.
    pub tariff: f64,
    pub classification: VisitClassification,
    pub allocation: AllocationResult,
}

/// Everything a period report renders: per-admission rows, claim totals,
/// and the monthly per-staff recap.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub rows: Vec<AdmissionRow>,
    pub totals: TotalsAccumulator,
    pub recap: MonthlyRecap,
}

/// Classify and allocate one admission against the override-resolved tariff.
pub fn allocate_admission(
    record: &AdmissionRecord,
    overrides: &TariffOverrides,
) -> (f64, VisitClassification, AllocationResult) {
    let tariff = overrides.resolve(&record.id, record.tariff);
    let classification = classify_admission(record);
    let allocation = allocate(record, &classification, tariff);
    (tariff, classification, allocation)
}

/// Run the engine over a period's admissions.
pub fn run_batch(records: &[AdmissionRecord], overrides: &TariffOverrides) -> BatchReport {
    let mut rows = Vec::with_capacity(records.len());
    let mut totals = TotalsAccumulator::default();
    let mut recap = MonthlyRecap::new();

    for record in records {
        let (tariff, classification, allocation) = allocate_admission(record, overrides);
        totals = totals.fold(tariff, &allocation);
        recap.add(record, &classification, &allocation);
        rows.push(AdmissionRow {
            admission_id: record.id.clone(),
            tariff,
            classification,
            allocation,
        });
    }

    debug!(
        records = records.len(),
        overrides = overrides.len(),
        distributed_total = totals.distributed_total,
        "batch complete"
    );

    BatchReport {
        rows,
        totals,
        recap,
    }
}

/// Parse a tariff-override document.
///
/// ```toml
/// [overrides]
/// "SEP-0001" = 450000.0
/// "SEP-0002" = 1250000.0
/// ```
pub fn overrides_from_toml_str(s: &str) -> JasamedResult<TariffOverrides> {
    toml::from_str(s).map_err(|e| JasamedError::ConfigError {
        reason: format!("failed to parse tariff overrides: {}", e),
    })
}

/// Read and parse the tariff-override file at `path`.
pub fn load_overrides(path: &Path) -> JasamedResult<TariffOverrides> {
    let contents = std::fs::read_to_string(path).map_err(|e| JasamedError::ConfigError {
        reason: format!("failed to read override file '{}': {}", path.display(), e),
    })?;
    overrides_from_toml_str(&contents)
}
