//! The outpatient allocation formula.
//!
//! An outpatient encounter distributes 20% of its tariff.  Lab and radiology
//! support is paid first at flat (or ultrasound-scaled) fees, the attending
//! keeps the remainder, and a genuine inter-doctor consult halves the
//! attending share.  An IGD visit with no recorded consult distributes
//! nothing from the claim itself — support fees still apply.

use tracing::debug;

use jasamed_classify::taxonomy::{classify_treatment_name, is_ultrasound, TreatmentKind};
use jasamed_contracts::{
    percent_of_claim, OutpatientAllocation, RadiologyExam, TreatmentEntry,
};

use crate::rates::{
    EMERGENCY_DEPARTMENT, OUTPATIENT_CLAIM_FRACTION, OUTPATIENT_LAB_FEE, RADIOLOGY_EXAM_FEE,
    ULTRASOUND_TARIFF_DEDUCTIBLE, ULTRASOUND_TARIFF_FRACTION,
};

/// Inputs for one outpatient allocation.
///
/// `treatments` and `attending_identity` exist only for the consult
/// suppression check; pass `None` when the raw entries are unavailable and
/// the consult count alone decides.
#[derive(Debug, Clone, Copy)]
pub struct OutpatientInput<'a> {
    pub tariff: f64,
    pub lab_request_count: u32,
    pub radiology_request_count: u32,
    pub radiology_exams: &'a [RadiologyExam],
    /// Department / poli name of the visit.
    pub department: &'a str,
    pub consult_count: u32,
    pub treatments: Option<&'a [TreatmentEntry]>,
    pub attending_identity: Option<&'a str>,
}

/// Compute the claim split for one outpatient encounter.
pub fn allocate_outpatient(input: &OutpatientInput<'_>) -> OutpatientAllocation {
    let emergency_no_consult =
        input.department == EMERGENCY_DEPARTMENT && input.consult_count < 1;

    let claim_share = if emergency_no_consult {
        0.0
    } else {
        input.tariff * OUTPATIENT_CLAIM_FRACTION
    };

    let lab_share = f64::from(input.lab_request_count) * OUTPATIENT_LAB_FEE;
    let radiology_share = radiology_share(
        input.tariff,
        input.radiology_request_count,
        input.radiology_exams,
    );

    // The attending keeps what the support fees leave of the claim share.
    // A negative remainder is carried as-is so the totals stay honest.
    let attending_share = if emergency_no_consult {
        0.0
    } else {
        claim_share - lab_share - radiology_share
    };

    let consult_share = if should_split_consult(input) {
        attending_share / 2.0
    } else {
        0.0
    };

    let total_distributed = attending_share + consult_share + radiology_share + lab_share;

    if emergency_no_consult {
        debug!(
            department = input.department,
            "IGD visit without consult: claim share suppressed"
        );
    }

    OutpatientAllocation {
        claim_share,
        lab_share,
        radiology_share,
        attending_share,
        consult_share,
        total_distributed,
        percent_of_claim: percent_of_claim(total_distributed, input.tariff),
    }
}

/// Radiology pricing with the ultrasound rule.
///
/// Ultrasound exams price as a fraction of the post-deductible tariff;
/// everything else pays the flat per-exam fee.  The request count, not the
/// exam list length, is the billed quantity.
fn radiology_share(tariff: f64, request_count: u32, exams: &[RadiologyExam]) -> f64 {
    let usg_count = exams.iter().filter(|e| is_ultrasound(&e.name)).count() as u32;
    if usg_count > 0 {
        let non_usg = f64::from(request_count) - f64::from(usg_count);
        (tariff - ULTRASOUND_TARIFF_DEDUCTIBLE).max(0.0)
            * f64::from(usg_count)
            * ULTRASOUND_TARIFF_FRACTION
            + non_usg * RADIOLOGY_EXAM_FEE
    } else {
        f64::from(request_count) * RADIOLOGY_EXAM_FEE
    }
}

/// Whether the consult split applies.
///
/// The consult count gates it; when the raw treatment entries are available
/// the consult-flagged entries are inspected, and a "consult" performed
/// exclusively by the attending is not a real inter-doctor consult, so the
/// split is suppressed.  An empty consult-entry list suppresses vacuously —
/// the observed upstream behavior, kept as-is.
fn should_split_consult(input: &OutpatientInput<'_>) -> bool {
    if input.consult_count < 1 {
        return false;
    }

    match (input.treatments, input.attending_identity) {
        (Some(treatments), Some(attending)) => {
            let all_by_attending = treatments
                .iter()
                .filter(|t| classify_treatment_name(&t.name) == TreatmentKind::Consult)
                .all(|t| t.staff_identity() == attending);
            !all_by_attending
        }
        _ => true,
    }
}
