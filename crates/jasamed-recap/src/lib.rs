//! # jasamed-recap
//!
//! Batch aggregation for the Jasamed remuneration engine: claim totals and
//! the monthly per-staff recap.
//!
//! ## Overview
//!
//! [`run_batch`] drives the whole pipeline for a period — override-resolved
//! tariff, visit classification, allocation — and folds the results into a
//! [`TotalsAccumulator`] and a [`MonthlyRecap`].  Both folds are pure,
//! commutative, and associative; `merge` on either side makes a parallel
//! map-reduce produce bit-identical results to the sequential loop.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use jasamed_recap::{run_batch, load_overrides};
//!
//! let overrides = load_overrides(Path::new("overrides.toml"))?;
//! let report = run_batch(&admissions, &overrides);
//! for row in report.recap.rows(RecapRole::Attending) {
//!     println!("{} {}", row.display_name, row.total_amount);
//! }
//! ```

pub mod batch;
pub mod recap;
pub mod totals;

pub use batch::{
    allocate_admission, load_overrides, overrides_from_toml_str, run_batch, AdmissionRow,
    BatchReport,
};
pub use recap::{MonthlyRecap, RecapEntry, RecapRole, RecapRow};
pub use totals::TotalsAccumulator;

// ── Tests ─────────────────────────────────────────────────────────────────────
