//! Per-admission allocation results.
//!
//! Outpatient and inpatient claims split differently, so the result is a
//! tagged variant rather than one record full of nullable fields.  The
//! common subset (lab, radiology, total, percent) is exposed through
//! accessor methods so the aggregator and report renderers do not need to
//! match on the variant for it.
//!
//! All monetary fields stay fractional; rounding to whole units happens
//! only on final report rows, never here.

use serde::{Deserialize, Serialize};

/// The split of one outpatient encounter's claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutpatientAllocation {
    /// 20% of the tariff, or 0 for an IGD visit without a consult.
    pub claim_share: f64,

    pub lab_share: f64,

    pub radiology_share: f64,

    /// Claim share minus lab and radiology; may go negative and is
    /// deliberately not clamped.
    pub attending_share: f64,

    /// Half the attending share when a real inter-doctor consult occurred.
    pub consult_share: f64,

    pub total_distributed: f64,

    /// Floor of `total_distributed / tariff × 100`, clamped to ≥ 0; exactly
    /// 0 when the tariff is non-positive.
    pub percent_of_claim: i64,
}

/// The split of one inpatient stay's claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InpatientAllocation {
    pub lab_share: f64,

    pub radiology_share: f64,

    /// Flat fee per general-duty ward-round entry.
    pub general_duty_share: f64,

    pub attending_share: f64,

    pub anesthesia_consult_share: f64,

    pub secondary_consult_share: f64,

    pub tertiary_consult_share: f64,

    /// Surgeon's cut of the operation pool; 0 without an operation.
    pub operator_share: f64,

    /// Anesthesiologist's cut when no substitution was recorded.
    pub anesthesia_share: f64,

    /// Stand-in's cut when the designation encoded a substitute.  Mutually
    /// exclusive with `anesthesia_share`: exactly one is non-zero for an
    /// operated admission.
    pub anesthesia_substitute_share: f64,

    pub total_distributed: f64,

    pub percent_of_claim: i64,
}

/// One admission's allocation, tagged by care kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "care", rename_all = "snake_case")]
pub enum AllocationResult {
    Outpatient(OutpatientAllocation),
    Inpatient(InpatientAllocation),
}

impl AllocationResult {
    pub fn lab_share(&self) -> f64 {
        match self {
            Self::Outpatient(a) => a.lab_share,
            Self::Inpatient(a) => a.lab_share,
        }
    }

    pub fn radiology_share(&self) -> f64 {
        match self {
            Self::Outpatient(a) => a.radiology_share,
            Self::Inpatient(a) => a.radiology_share,
        }
    }

    pub fn attending_share(&self) -> f64 {
        match self {
            Self::Outpatient(a) => a.attending_share,
            Self::Inpatient(a) => a.attending_share,
        }
    }

    pub fn total_distributed(&self) -> f64 {
        match self {
            Self::Outpatient(a) => a.total_distributed,
            Self::Inpatient(a) => a.total_distributed,
        }
    }

    pub fn percent_of_claim(&self) -> i64 {
        match self {
            Self::Outpatient(a) => a.percent_of_claim,
            Self::Inpatient(a) => a.percent_of_claim,
        }
    }
}

/// Floor of `total / tariff × 100` as an integer percentage.
///
/// Defined as 0 when the tariff is non-positive, and clamped to ≥ 0 so a
/// negative distributable pool cannot produce a negative percentage.
pub fn percent_of_claim(total_distributed: f64, tariff: f64) -> i64 {
    if tariff > 0.0 {
        ((total_distributed / tariff * 100.0).floor() as i64).max(0)
    } else {
        0
    }
}
