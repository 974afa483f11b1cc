//! # jasamed-alloc
//!
//! The outpatient and inpatient allocation formulas for the Jasamed
//! remuneration engine.
//!
//! ## Overview
//!
//! [`allocate`] dispatches one admission to [`outpatient::allocate_outpatient`]
//! or [`inpatient::allocate_inpatient`] by care kind.  Both formulas are pure
//! and total: malformed inputs recover to the zero case, a non-positive
//! tariff forces the percent to 0, and nothing here ever errors — one bad
//! record must not abort a batch report.
//!
//! Rate constants live in [`rates`].  Monetary values stay fractional here;
//! rounding belongs to report rendering.

pub mod engine;
pub mod inpatient;
pub mod outpatient;
pub mod rates;

pub use engine::allocate;
pub use inpatient::{allocate_inpatient, InpatientInput};
pub use outpatient::{allocate_outpatient, OutpatientInput};

// ── Tests ─────────────────────────────────────────────────────────────────────
