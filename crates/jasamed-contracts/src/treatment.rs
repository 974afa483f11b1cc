//! Billable-act detail lines attached to an admission.
//!
//! `TreatmentEntry`, `LabExam`, and `RadiologyExam` arrive from the
//! persistence layer already resolved to staff codes and names.  Every field
//! carries a serde default because upstream rows are frequently sparse;
//! a missing field decodes to the empty string rather than failing the row.

use serde::{Deserialize, Serialize};

/// One billable act performed during an admission.
///
/// Treatment names are free text and are matched case-insensitively against
/// the keyword taxonomy in `jasamed-classify`.  Entries are immutable once
/// decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentEntry {
    /// Treatment code as billed.
    #[serde(default)]
    pub code: String,

    /// Free-text treatment name ("Visite Dokter Spesialis", "Konsul Anastesi", …).
    #[serde(default)]
    pub name: String,

    /// Code of the staff member who performed the act.
    #[serde(default)]
    pub staff_code: String,

    /// Display name of the staff member who performed the act.
    #[serde(default)]
    pub staff_name: String,

    /// Ward the act was performed on, when recorded.
    #[serde(default)]
    pub ward_name: Option<String>,
}

impl TreatmentEntry {
    /// The identity string used for staff comparisons and bucket dedupe:
    /// the staff code when present, otherwise the staff name.
    pub fn staff_identity(&self) -> &str {
        if self.staff_code.is_empty() {
            &self.staff_name
        } else {
            &self.staff_code
        }
    }

    /// The name to show on recap rows: the staff name when present,
    /// otherwise the staff code.
    pub fn staff_display(&self) -> &str {
        if self.staff_name.is_empty() {
            &self.staff_code
        } else {
            &self.staff_name
        }
    }
}

/// One laboratory order line, resolved with the performing staff.
///
/// Lab pricing uses only the admission's request count; the exam detail
/// exists so the support recap can attribute the lab share to staff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabExam {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub staff_code: String,

    #[serde(default)]
    pub staff_name: String,
}

impl LabExam {
    /// Identity string for support-recap dedupe (code, falling back to name).
    pub fn staff_identity(&self) -> &str {
        if self.staff_code.is_empty() {
            &self.staff_name
        } else {
            &self.staff_code
        }
    }

    /// Display name for support-recap rows.
    pub fn staff_display(&self) -> &str {
        if self.staff_name.is_empty() {
            &self.staff_code
        } else {
            &self.staff_name
        }
    }
}

/// One radiology order line.
///
/// The exam name is matched against "usg" (case-insensitive) to detect
/// ultrasound procedures, which price against the tariff instead of the flat
/// per-exam fee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiologyExam {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    /// Identifier of the order this exam belongs to.
    #[serde(default)]
    pub order_id: String,

    #[serde(default)]
    pub staff_code: String,

    #[serde(default)]
    pub staff_name: String,
}

impl RadiologyExam {
    /// Identity string for support-recap dedupe (code, falling back to name).
    pub fn staff_identity(&self) -> &str {
        if self.staff_code.is_empty() {
            &self.staff_name
        } else {
            &self.staff_code
        }
    }

    /// Display name for support-recap rows.
    pub fn staff_display(&self) -> &str {
        if self.staff_name.is_empty() {
            &self.staff_code
        } else {
            &self.staff_name
        }
    }
}
