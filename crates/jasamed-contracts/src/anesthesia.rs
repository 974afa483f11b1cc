//! The anesthesia-staff designation and its substitution encoding.
//!
//! The admission row carries the anesthesiologist as a raw string that may
//! encode a stand-in: `"D001"` names staff D001 directly, while
//! `"D001:Nurse Jane"` means the operation share is credited to the
//! substitute "Nurse Jane" instead of D001.  The `:` split lives here and
//! nowhere else — every consumer works with the decoded structure.

use serde::{Deserialize, Serialize};

/// The decoded anesthesia-staff designation for one admission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnesthesiaDesignation {
    /// Code of the anesthesiologist of record.
    pub primary_staff_code: String,

    /// Display name of the stand-in, when the raw designation encoded one.
    /// When set, the operation's anesthesia share is attributed to the
    /// substitute and the primary receives nothing for this admission.
    pub substitute_display_name: Option<String>,
}

impl AnesthesiaDesignation {
    /// Decode a raw designation string.
    ///
    /// Text after the first `:` is the substitute's display name; a missing
    /// or empty remainder means no substitution.  Both halves are trimmed.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((code, substitute)) => {
                let substitute = substitute.trim();
                Self {
                    primary_staff_code: code.trim().to_string(),
                    substitute_display_name: if substitute.is_empty() {
                        None
                    } else {
                        Some(substitute.to_string())
                    },
                }
            }
            None => Self {
                primary_staff_code: raw.trim().to_string(),
                substitute_display_name: None,
            },
        }
    }

    /// True when the operation share goes to a stand-in.
    pub fn is_substituted(&self) -> bool {
        self.substitute_display_name.is_some()
    }

    /// The name the anesthesia share is credited to on recap rows:
    /// the substitute when present, otherwise the primary staff code.
    pub fn credited_name(&self) -> &str {
        self.substitute_display_name
            .as_deref()
            .unwrap_or(&self.primary_staff_code)
    }
}
