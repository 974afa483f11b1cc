//! # jasamed-contracts
//!
//! Shared types, boundary decoding, and error types for the Jasamed
//! remuneration allocation engine.
//!
//! All crates in the workspace import from here. No allocation math lives in
//! this crate — only data definitions, the input-boundary decoders, and
//! error types.

pub mod admission;
pub mod allocation;
pub mod anesthesia;
pub mod decode;
pub mod error;
pub mod overrides;
pub mod treatment;

pub use admission::{AdmissionRecord, CareKind};
pub use allocation::{
    percent_of_claim, AllocationResult, InpatientAllocation, OutpatientAllocation,
};
pub use anesthesia::AnesthesiaDesignation;
pub use decode::{decode_lab_exams, decode_radiology_exams, decode_treatments};
pub use error::{JasamedError, JasamedResult};
pub use overrides::TariffOverrides;
pub use treatment::{LabExam, RadiologyExam, TreatmentEntry};

#[cfg(test)]
mod tests {
    use super::*;

    // ── AnesthesiaDesignation ────────────────────────────────────────────────

    #[test]
    fn designation_without_separator_has_no_substitute() {
        let d = AnesthesiaDesignation::parse("D001");
        assert_eq!(d.primary_staff_code, "D001");
        assert_eq!(d.substitute_display_name, None);
        assert!(!d.is_substituted());
        assert_eq!(d.credited_name(), "D001");
    }

    #[test]
    fn designation_with_separator_names_the_substitute() {
        let d = AnesthesiaDesignation::parse("D001:Nurse Jane");
        assert_eq!(d.primary_staff_code, "D001");
        assert_eq!(d.substitute_display_name.as_deref(), Some("Nurse Jane"));
        assert!(d.is_substituted());
        assert_eq!(d.credited_name(), "Nurse Jane");
    }

    #[test]
    fn designation_trims_both_halves() {
        let d = AnesthesiaDesignation::parse("  D007 :  dr. Sari  ");
        assert_eq!(d.primary_staff_code, "D007");
        assert_eq!(d.substitute_display_name.as_deref(), Some("dr. Sari"));
    }

    #[test]
    fn designation_with_empty_remainder_has_no_substitute() {
        let d = AnesthesiaDesignation::parse("D001:");
        assert_eq!(d.primary_staff_code, "D001");
        assert!(!d.is_substituted());
    }

    #[test]
    fn designation_splits_on_first_separator_only() {
        let d = AnesthesiaDesignation::parse("D001:dr. A: locum");
        assert_eq!(d.primary_staff_code, "D001");
        assert_eq!(d.substitute_display_name.as_deref(), Some("dr. A: locum"));
    }

    // ── Encoded-list decoding ────────────────────────────────────────────────

    #[test]
    fn decode_treatments_parses_a_valid_list() {
        let raw = r#"[
            {"code":"T1","name":"Visite Dokter","staff_code":"D2","staff_name":"dr. Budi"},
            {"code":"T2","name":"Konsul Anastesi","staff_code":"D3","staff_name":"dr. Citra"}
        ]"#;
        let entries = decode_treatments(Some(raw));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Visite Dokter");
        assert_eq!(entries[1].staff_identity(), "D3");
    }

    #[test]
    fn decode_treatments_skips_null_members() {
        let raw = r#"[null, {"name":"Visite Dokter","staff_name":"dr. Budi"}, null]"#;
        let entries = decode_treatments(Some(raw));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].staff_identity(), "dr. Budi");
    }

    #[test]
    fn decode_treatments_recovers_from_garbage() {
        assert!(decode_treatments(Some("not json at all")).is_empty());
        assert!(decode_treatments(Some("{\"a\":1}")).is_empty());
    }

    #[test]
    fn decode_treatments_treats_absent_and_blank_as_empty() {
        assert!(decode_treatments(None).is_empty());
        assert!(decode_treatments(Some("")).is_empty());
        assert!(decode_treatments(Some("   ")).is_empty());
    }

    #[test]
    fn decode_radiology_exams_parses_order_ids() {
        let raw = r#"[{"code":"R1","name":"USG Abdomen","order_id":"ORD-9","staff_name":"dr. Dewi"}]"#;
        let exams = decode_radiology_exams(Some(raw));
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].order_id, "ORD-9");
        assert_eq!(exams[0].staff_display(), "dr. Dewi");
    }

    #[test]
    fn decode_lab_exams_defaults_missing_fields() {
        let raw = r#"[{"name":"Darah Lengkap"}]"#;
        let exams = decode_lab_exams(Some(raw));
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].staff_code, "");
        assert_eq!(exams[0].staff_identity(), "");
    }

    // ── Staff identity fallbacks ─────────────────────────────────────────────

    #[test]
    fn staff_identity_prefers_code_and_falls_back_to_name() {
        let coded = TreatmentEntry {
            staff_code: "D9".into(),
            staff_name: "dr. Eka".into(),
            ..Default::default()
        };
        let uncoded = TreatmentEntry {
            staff_name: "dr. Eka".into(),
            ..Default::default()
        };
        assert_eq!(coded.staff_identity(), "D9");
        assert_eq!(coded.staff_display(), "dr. Eka");
        assert_eq!(uncoded.staff_identity(), "dr. Eka");
    }

    // ── AllocationResult accessors and serde ─────────────────────────────────

    #[test]
    fn allocation_result_exposes_the_common_subset() {
        let outpatient = AllocationResult::Outpatient(OutpatientAllocation {
            lab_share: 10_000.0,
            radiology_share: 15_000.0,
            total_distributed: 80_000.0,
            percent_of_claim: 40,
            ..Default::default()
        });
        assert_eq!(outpatient.lab_share(), 10_000.0);
        assert_eq!(outpatient.radiology_share(), 15_000.0);
        assert_eq!(outpatient.total_distributed(), 80_000.0);
        assert_eq!(outpatient.percent_of_claim(), 40);

        let inpatient = AllocationResult::Inpatient(InpatientAllocation {
            lab_share: 5_000.0,
            total_distributed: 120_000.0,
            ..Default::default()
        });
        assert_eq!(inpatient.lab_share(), 5_000.0);
        assert_eq!(inpatient.total_distributed(), 120_000.0);
    }

    #[test]
    fn allocation_result_round_trips_with_its_tag() {
        let original = AllocationResult::Inpatient(InpatientAllocation {
            attending_share: 42_500.5,
            anesthesia_substitute_share: 21_000.0,
            ..Default::default()
        });
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"care\":\"inpatient\""));
        let decoded: AllocationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── percent_of_claim ─────────────────────────────────────────────────────

    #[test]
    fn percent_of_claim_floors_the_quotient() {
        assert_eq!(percent_of_claim(38_000.0, 300_000.0), 12);
        assert_eq!(percent_of_claim(300_000.0, 300_000.0), 100);
    }

    #[test]
    fn percent_of_claim_is_zero_for_non_positive_tariff() {
        assert_eq!(percent_of_claim(50_000.0, 0.0), 0);
        assert_eq!(percent_of_claim(50_000.0, -100.0), 0);
    }

    #[test]
    fn percent_of_claim_never_goes_negative() {
        assert_eq!(percent_of_claim(-40_000.0, 100_000.0), 0);
    }

    // ── TariffOverrides ──────────────────────────────────────────────────────

    #[test]
    fn override_supersedes_the_stored_tariff() {
        let mut overrides = TariffOverrides::empty();
        overrides.insert("SEP-001", 450_000.0);
        assert_eq!(overrides.resolve("SEP-001", 300_000.0), 450_000.0);
    }

    #[test]
    fn absent_override_keeps_the_stored_tariff() {
        let overrides = TariffOverrides::empty();
        assert_eq!(overrides.resolve("SEP-002", 300_000.0), 300_000.0);
        assert!(overrides.is_empty());
    }

    // ── Error display ────────────────────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = JasamedError::ConfigError {
            reason: "missing override file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing override file"));
    }

    #[test]
    fn error_input_decode_display() {
        let err = JasamedError::InputDecode {
            reason: "bad admissions document".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("input decode error"));
        assert!(msg.contains("bad admissions document"));
    }
}
