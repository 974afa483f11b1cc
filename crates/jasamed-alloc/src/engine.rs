//! Care-kind dispatch over the two allocation formulas.

use jasamed_classify::VisitClassification;
use jasamed_contracts::{AdmissionRecord, AllocationResult, AnesthesiaDesignation, CareKind};

use crate::inpatient::{allocate_inpatient, InpatientInput};
use crate::outpatient::{allocate_outpatient, OutpatientInput};

/// Allocate one admission against `tariff` (the override-resolved claim
/// amount, which may differ from `record.tariff`).
///
/// Total over its inputs: degenerate tariffs, empty lists, and zero-visit
/// classifications all produce a numeric result rather than an error.
pub fn allocate(
    record: &AdmissionRecord,
    classification: &VisitClassification,
    tariff: f64,
) -> AllocationResult {
    match &record.care {
        CareKind::Outpatient {
            department,
            consult_count,
        } => AllocationResult::Outpatient(allocate_outpatient(&OutpatientInput {
            tariff,
            lab_request_count: record.lab_request_count,
            radiology_request_count: record.radiology_request_count,
            radiology_exams: &record.radiology_exams,
            department: department.as_str(),
            consult_count: *consult_count,
            treatments: Some(&record.treatments),
            attending_identity: Some(record.attending_identity()),
        })),
        CareKind::Inpatient => {
            let anesthesia = AnesthesiaDesignation::parse(&record.anesthesia_designation);
            AllocationResult::Inpatient(allocate_inpatient(&InpatientInput {
                tariff,
                lab_request_count: record.lab_request_count,
                radiology_request_count: record.radiology_request_count,
                classification,
                has_operation: record.has_operation,
                anesthesia: &anesthesia,
            }))
        }
    }
}
