//! The inpatient allocation formula.
//!
//! An inpatient stay distributes 20% of its tariff.  Support fees and the
//! general-duty flat fees come off first; the remaining pool is split across
//! the attending and the consult tiers by visit-count weight.  An operation
//! adds a separate pool on top, split 70/30 between the surgeon and the
//! anesthesiologist — or the anesthesiologist's recorded stand-in.

use tracing::debug;

use jasamed_classify::VisitClassification;
use jasamed_contracts::{percent_of_claim, AnesthesiaDesignation, InpatientAllocation};

use crate::rates::{
    ANESTHESIA_POOL_SPLIT, GENERAL_DUTY_VISIT_FEE, INPATIENT_CLAIM_FRACTION, INPATIENT_LAB_FEE,
    OPERATION_POOL_FRACTION, OPERATOR_POOL_SPLIT, RADIOLOGY_EXAM_FEE,
};

/// Inputs for one inpatient allocation.
#[derive(Debug, Clone, Copy)]
pub struct InpatientInput<'a> {
    pub tariff: f64,
    pub lab_request_count: u32,
    pub radiology_request_count: u32,
    pub classification: &'a VisitClassification,
    pub has_operation: bool,
    pub anesthesia: &'a AnesthesiaDesignation,
}

/// Compute the claim split for one inpatient stay.
pub fn allocate_inpatient(input: &InpatientInput<'_>) -> InpatientAllocation {
    let lab_share = f64::from(input.lab_request_count) * INPATIENT_LAB_FEE;
    let radiology_share = f64::from(input.radiology_request_count) * RADIOLOGY_EXAM_FEE;

    let base_allocation = input.tariff * INPATIENT_CLAIM_FRACTION - lab_share - radiology_share;

    let classification = input.classification;
    let general_duty_share =
        classification.general_duty_visits.len() as f64 * GENERAL_DUTY_VISIT_FEE;

    // The pool split across the attending and consult tiers by visit weight.
    let attending_pool = base_allocation - general_duty_share;

    let total_visits = classification.total_visits();
    let weight = |bucket_size: f64| -> f64 {
        if total_visits == 0 {
            // Cannot happen for a classified admission (attending count ≥ 1),
            // guarded anyway so a hand-built classification divides safely.
            debug!("zero total visits; visit-weighted shares default to 0");
            0.0
        } else {
            bucket_size / f64::from(total_visits) * attending_pool
        }
    };

    let attending_share = weight(f64::from(classification.attending_visit_count));
    let anesthesia_consult_share = weight(classification.anesthesia_consults.len() as f64);
    let secondary_consult_share = weight(classification.secondary_consults.len() as f64);
    let tertiary_consult_share = weight(classification.tertiary_consults.len() as f64);

    // Operation pool: 70% of base, split surgeon 70 / anesthesia 30.  A
    // recorded stand-in takes the anesthesia cut on a distinct field so the
    // recap credits the right person without changing the formula.
    let (operator_share, anesthesia_share, anesthesia_substitute_share) = if input.has_operation {
        let operator = base_allocation * OPERATION_POOL_FRACTION * OPERATOR_POOL_SPLIT;
        let anesthesia = base_allocation * OPERATION_POOL_FRACTION * ANESTHESIA_POOL_SPLIT;
        if input.anesthesia.is_substituted() {
            (operator, 0.0, anesthesia)
        } else {
            (operator, anesthesia, 0.0)
        }
    } else {
        (0.0, 0.0, 0.0)
    };

    let total_distributed = lab_share
        + radiology_share
        + general_duty_share
        + attending_share
        + anesthesia_consult_share
        + secondary_consult_share
        + tertiary_consult_share
        + operator_share
        + anesthesia_share
        + anesthesia_substitute_share;

    InpatientAllocation {
        lab_share,
        radiology_share,
        general_duty_share,
        attending_share,
        anesthesia_consult_share,
        secondary_consult_share,
        tertiary_consult_share,
        operator_share,
        anesthesia_share,
        anesthesia_substitute_share,
        total_distributed,
        percent_of_claim: percent_of_claim(total_distributed, input.tariff),
    }
}
