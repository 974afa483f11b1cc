//! The admission record — one billable encounter, fully resolved.
//!
//! By the time a record reaches the engine, the persistence layer has
//! already joined in the treatment, lab, and radiology detail.  The engine
//! never fetches anything: a record is a plain value and every allocation
//! computed from it is a pure function of that value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::treatment::{LabExam, RadiologyExam, TreatmentEntry};

/// Whether the encounter was an outpatient visit or an inpatient stay,
/// with the fields that only exist for outpatient encounters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CareKind {
    /// An outpatient (poli) visit.
    Outpatient {
        /// Department / poli name.  "IGD" is the emergency department and
        /// suppresses the claim share when no consult was recorded.
        department: String,
        /// Number of inter-doctor consults recorded against the visit.
        consult_count: u32,
    },
    /// An inpatient stay.
    Inpatient,
}

/// One outpatient visit or inpatient stay, with all detail lines resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    /// Claim / admission identifier, also the tariff-override key.
    pub id: String,

    #[serde(default)]
    pub admission_date: Option<NaiveDate>,

    /// Absent while the patient is still admitted.
    #[serde(default)]
    pub discharge_date: Option<NaiveDate>,

    /// Claim amount for the encounter.  May be superseded by an uploaded
    /// tariff override; resolve through `TariffOverrides` before allocating.
    pub tariff: f64,

    /// Number of laboratory requests (drives lab pricing).
    pub lab_request_count: u32,

    /// Number of radiology requests (drives radiology pricing; may differ
    /// from the resolved exam list when detail rows are missing).
    pub radiology_request_count: u32,

    pub treatments: Vec<TreatmentEntry>,

    /// Lab detail, present when the support recap needs staff attribution.
    #[serde(default)]
    pub lab_exams: Vec<LabExam>,

    pub radiology_exams: Vec<RadiologyExam>,

    /// True when an operation was performed during the stay.
    pub has_operation: bool,

    /// Display name of the operating surgeon (meaningful only with
    /// `has_operation`).
    #[serde(default)]
    pub operator_staff_name: String,

    /// Raw anesthesia-staff designation; may encode a substitution as
    /// `"code:substitute name"`.  Decode once via `AnesthesiaDesignation::parse`.
    #[serde(default)]
    pub anesthesia_designation: String,

    /// Display name of the attending physician (DPJP) of record.
    pub attending_staff_name: String,

    #[serde(default)]
    pub attending_staff_code: String,

    pub care: CareKind,
}

impl AdmissionRecord {
    /// The attending physician's identity string, comparable against
    /// `TreatmentEntry::staff_identity`: the code when present, otherwise
    /// the name.
    pub fn attending_identity(&self) -> &str {
        if self.attending_staff_code.is_empty() {
            &self.attending_staff_name
        } else {
            &self.attending_staff_code
        }
    }

    /// True for outpatient encounters.
    pub fn is_outpatient(&self) -> bool {
        matches!(self.care, CareKind::Outpatient { .. })
    }
}
