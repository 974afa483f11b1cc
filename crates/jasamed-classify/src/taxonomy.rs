//! The treatment-name keyword taxonomy.
//!
//! Visit classification runs on free-text treatment names, matched
//! case-insensitively against a fixed keyword set inherited from the billing
//! data ("anastesi", "visite dokter", "emergency", "konsul").  This is
//! fragile by nature, so the matching lives behind exactly one function —
//! swapping it for a controlled vocabulary must not touch any allocation
//! math.
//!
//! A name can contain more than one keyword; `classify_treatment_name`
//! assigns a single kind by the priority order of the variants below
//! (anesthesia first, free-text residual last).

use serde::{Deserialize, Serialize};

/// Substring marking an anesthesia consult entry.
pub const KW_ANESTHESIA: &str = "anastesi";

/// The general-duty ward round, matched exactly; qualified variants
/// ("visite dokter spesialis") are consult-tier visits instead.
pub const KW_WARD_ROUND: &str = "visite dokter";

/// Substring marking an emergency add-on act.
pub const KW_EMERGENCY: &str = "emergency";

/// Substring marking an inter-doctor consult entry (outpatient).
pub const KW_CONSULT: &str = "konsul";

/// Substring marking an ultrasound exam in radiology order names.
pub const KW_ULTRASOUND: &str = "usg";

/// The kind a free-text treatment name resolves to.
///
/// Declaration order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentKind {
    /// Name contains "anastesi".
    AnesthesiaConsult,
    /// Name is exactly "visite dokter" (after trimming).
    GeneralWardRound,
    /// Name contains "visite dokter" but is not the exact general round,
    /// e.g. "visite dokter spesialis".
    QualifiedWardRound,
    /// Name contains "emergency".
    EmergencyCare,
    /// Name contains "konsul".
    Consult,
    /// Anything else.
    Other,
}

/// Resolve a free-text treatment name to its `TreatmentKind`.
///
/// Matching is case-insensitive and whitespace around the name is ignored.
pub fn classify_treatment_name(name: &str) -> TreatmentKind {
    let name = name.trim().to_lowercase();

    if name.contains(KW_ANESTHESIA) {
        TreatmentKind::AnesthesiaConsult
    } else if name == KW_WARD_ROUND {
        TreatmentKind::GeneralWardRound
    } else if name.contains(KW_WARD_ROUND) {
        TreatmentKind::QualifiedWardRound
    } else if name.contains(KW_EMERGENCY) {
        TreatmentKind::EmergencyCare
    } else if name.contains(KW_CONSULT) {
        TreatmentKind::Consult
    } else {
        TreatmentKind::Other
    }
}

/// True when a radiology exam name denotes an ultrasound procedure.
pub fn is_ultrasound(exam_name: &str) -> bool {
    exam_name.to_lowercase().contains(KW_ULTRASOUND)
}
