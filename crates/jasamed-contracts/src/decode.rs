//! Decoding of string-encoded detail lists from the persistence layer.
//!
//! Upstream rows often carry the treatment and radiology detail as a JSON
//! string column rather than joined rows.  Per the input contract, a decode
//! failure or absent value is an *empty list*, never an error: one bad row
//! must not abort a whole-batch report.  Null members inside an otherwise
//! valid list are skipped the same way.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::treatment::{LabExam, RadiologyExam, TreatmentEntry};

/// Decode a string-encoded treatment list.  `None`, empty, or malformed
/// input yields the empty list; null members are dropped.
pub fn decode_treatments(raw: Option<&str>) -> Vec<TreatmentEntry> {
    decode_list(raw, "treatment")
}

/// Decode a string-encoded lab-exam list with the same recovery rules.
pub fn decode_lab_exams(raw: Option<&str>) -> Vec<LabExam> {
    decode_list(raw, "lab exam")
}

/// Decode a string-encoded radiology-exam list with the same recovery rules.
pub fn decode_radiology_exams(raw: Option<&str>) -> Vec<RadiologyExam> {
    decode_list(raw, "radiology exam")
}

fn decode_list<T: DeserializeOwned>(raw: Option<&str>, what: &str) -> Vec<T> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Vec::new(),
    };

    // Members decode as Option<T> so a literal `null` drops out instead of
    // failing the whole list.
    match serde_json::from_str::<Vec<Option<T>>>(raw) {
        Ok(members) => {
            let total = members.len();
            let entries: Vec<T> = members.into_iter().flatten().collect();
            if entries.len() < total {
                warn!(
                    list = what,
                    skipped = total - entries.len(),
                    "skipped null members in encoded list"
                );
            }
            entries
        }
        Err(e) => {
            warn!(list = what, error = %e, "undecodable encoded list treated as empty");
            Vec::new()
        }
    }
}
