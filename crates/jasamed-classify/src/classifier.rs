//! Partitioning of an admission's treatment entries into visit buckets.
//!
//! The classification drives the inpatient allocation weights: the attending
//! visit count and each bucket size divide the distributable pool.  Buckets
//! are deduplicated by staff identity in priority order — anesthesia, then
//! secondary, then tertiary, then general-duty — so one staff member is
//! never weighted under two consult buckets for the same admission.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use jasamed_contracts::{AdmissionRecord, TreatmentEntry};

use crate::taxonomy::{classify_treatment_name, TreatmentKind};

/// The derived visit buckets for one admission.
///
/// Computed fresh per allocation call, never cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitClassification {
    /// Length-of-stay visits plus emergency add-ons by the attending.
    /// At least 1 for any classified admission.
    pub attending_visit_count: u32,

    /// Entries naming an anesthesia consult, regardless of performer.
    pub anesthesia_consults: Vec<TreatmentEntry>,

    /// Qualified ward-round entries by non-attending staff.
    pub secondary_consults: Vec<TreatmentEntry>,

    /// Residual qualified ward-round entries by staff absent from the
    /// anesthesia and secondary buckets.
    pub tertiary_consults: Vec<TreatmentEntry>,

    /// Exact "visite dokter" entries by non-attending staff.
    pub general_duty_visits: Vec<TreatmentEntry>,
}

impl VisitClassification {
    /// Sum of the attending count and all bucket sizes — the divisor for
    /// the inpatient visit weights.
    pub fn total_visits(&self) -> u32 {
        self.attending_visit_count
            + self.anesthesia_consults.len() as u32
            + self.secondary_consults.len() as u32
            + self.tertiary_consults.len() as u32
            + self.general_duty_visits.len() as u32
    }

    /// Fold the tertiary bucket into secondary when secondary came out
    /// empty.  Tertiary is evaluated unconditionally even when it is
    /// conceptually the same tier as secondary; this normalization keeps
    /// downstream consumers from seeing a phantom third tier.  Idempotent.
    pub fn normalize(&mut self) {
        if self.secondary_consults.is_empty() && !self.tertiary_consults.is_empty() {
            self.secondary_consults = std::mem::take(&mut self.tertiary_consults);
        }
    }
}

/// Classify an admission's treatment entries into visit buckets.
///
/// Dates drive the attending visit count: `max(discharge − admission, 1)`
/// days when both are present, else 1, plus one visit per emergency entry
/// the attending performed.  Missing or malformed inputs fall back to the
/// empty or minimal case; classification never fails.
pub fn classify_visits(
    treatments: &[TreatmentEntry],
    attending_identity: &str,
    admission_date: Option<NaiveDate>,
    discharge_date: Option<NaiveDate>,
) -> VisitClassification {
    let mut classification = VisitClassification {
        attending_visit_count: attending_base_count(admission_date, discharge_date),
        ..Default::default()
    };

    // Emergency add-ons by the attending reward same-day emergency visits
    // on top of the length-of-stay count.
    classification.attending_visit_count += treatments
        .iter()
        .filter(|t| {
            t.staff_identity() == attending_identity
                && classify_treatment_name(&t.name) == TreatmentKind::EmergencyCare
        })
        .count() as u32;

    // Anesthesia consults are bucketed regardless of performer.
    for entry in treatments {
        if classify_treatment_name(&entry.name) == TreatmentKind::AnesthesiaConsult {
            classification.anesthesia_consults.push(entry.clone());
        }
    }
    let anesthesia_staff: HashSet<&str> = classification
        .anesthesia_consults
        .iter()
        .map(|e| e.staff_identity())
        .collect();

    // Secondary consults: qualified ward rounds by non-attending staff not
    // already counted under anesthesia.
    for entry in treatments {
        if classify_treatment_name(&entry.name) == TreatmentKind::QualifiedWardRound
            && entry.staff_identity() != attending_identity
            && !anesthesia_staff.contains(entry.staff_identity())
        {
            classification.secondary_consults.push(entry.clone());
        }
    }
    let secondary_staff: HashSet<&str> = classification
        .secondary_consults
        .iter()
        .map(|e| e.staff_identity())
        .collect();

    // Tertiary consults: the same predicate minus staff already present in
    // the anesthesia or secondary buckets.  A residual catch for doctors
    // appearing under multiple qualifying names.
    for entry in treatments {
        if classify_treatment_name(&entry.name) == TreatmentKind::QualifiedWardRound
            && entry.staff_identity() != attending_identity
            && !anesthesia_staff.contains(entry.staff_identity())
            && !secondary_staff.contains(entry.staff_identity())
        {
            classification.tertiary_consults.push(entry.clone());
        }
    }
    let tertiary_staff: HashSet<&str> = classification
        .tertiary_consults
        .iter()
        .map(|e| e.staff_identity())
        .collect();

    // General-duty rounds: the exact "visite dokter" entries by staff not
    // yet counted under any consult bucket.
    for entry in treatments {
        let identity = entry.staff_identity();
        if classify_treatment_name(&entry.name) == TreatmentKind::GeneralWardRound
            && identity != attending_identity
            && !anesthesia_staff.contains(identity)
            && !secondary_staff.contains(identity)
            && !tertiary_staff.contains(identity)
        {
            classification.general_duty_visits.push(entry.clone());
        }
    }

    classification.normalize();

    debug!(
        attending_visits = classification.attending_visit_count,
        anesthesia = classification.anesthesia_consults.len(),
        secondary = classification.secondary_consults.len(),
        tertiary = classification.tertiary_consults.len(),
        general_duty = classification.general_duty_visits.len(),
        total = classification.total_visits(),
        "classified admission visits"
    );

    classification
}

/// Classify directly from an `AdmissionRecord`.
pub fn classify_admission(record: &AdmissionRecord) -> VisitClassification {
    classify_visits(
        &record.treatments,
        record.attending_identity(),
        record.admission_date,
        record.discharge_date,
    )
}

/// `max(discharge − admission, 1)` in days when both dates are present,
/// else 1.  A discharge before the admission date counts as a one-day stay.
fn attending_base_count(
    admission_date: Option<NaiveDate>,
    discharge_date: Option<NaiveDate>,
) -> u32 {
    match (admission_date, discharge_date) {
        (Some(admitted), Some(discharged)) => {
            (discharged - admitted).num_days().max(1) as u32
        }
        _ => 1,
    }
}
