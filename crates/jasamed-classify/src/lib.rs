//! # jasamed-classify
//!
//! Visit classification for the Jasamed remuneration engine.
//!
//! ## Overview
//!
//! Given one admission's treatment entries, [`classify_visits`] partitions
//! them into named buckets — attending visits, anesthesia consults,
//! secondary/tertiary consults, general-duty rounds — whose sizes become the
//! allocation weights in `jasamed-alloc`.  The fragile part, free-text
//! keyword matching, is isolated in [`taxonomy::classify_treatment_name`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use jasamed_classify::classify_admission;
//!
//! let classification = classify_admission(&record);
//! assert!(classification.total_visits() >= 1);
//! ```

pub mod classifier;
pub mod taxonomy;

pub use classifier::{classify_admission, classify_visits, VisitClassification};
pub use taxonomy::{classify_treatment_name, is_ultrasound, TreatmentKind};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use jasamed_contracts::TreatmentEntry;

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a treatment entry with a name and performing staff identity.
    fn entry(name: &str, staff: &str) -> TreatmentEntry {
        TreatmentEntry {
            name: name.to_string(),
            staff_code: staff.to_string(),
            staff_name: format!("dr. {staff}"),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn staff_identities(bucket: &[TreatmentEntry]) -> HashSet<String> {
        bucket.iter().map(|e| e.staff_identity().to_string()).collect()
    }

    // ── Taxonomy ──────────────────────────────────────────────────────────────

    /// Each keyword resolves to its kind, case-insensitively.
    #[test]
    fn taxonomy_resolves_each_keyword() {
        assert_eq!(
            classify_treatment_name("Konsul ANASTESI pre-op"),
            TreatmentKind::AnesthesiaConsult
        );
        assert_eq!(
            classify_treatment_name("Visite Dokter"),
            TreatmentKind::GeneralWardRound
        );
        assert_eq!(
            classify_treatment_name("visite dokter spesialis"),
            TreatmentKind::QualifiedWardRound
        );
        assert_eq!(
            classify_treatment_name("EMERGENCY wound care"),
            TreatmentKind::EmergencyCare
        );
        assert_eq!(
            classify_treatment_name("Konsul Gizi"),
            TreatmentKind::Consult
        );
        assert_eq!(classify_treatment_name("Fisioterapi"), TreatmentKind::Other);
    }

    /// The exact ward round is matched after trimming, and any decoration
    /// demotes it to the qualified variant.
    #[test]
    fn taxonomy_exact_versus_qualified_ward_round() {
        assert_eq!(
            classify_treatment_name("  VISITE DOKTER  "),
            TreatmentKind::GeneralWardRound
        );
        assert_eq!(
            classify_treatment_name("Visite Dokter IGD"),
            TreatmentKind::QualifiedWardRound
        );
    }

    /// "anastesi" wins over every other keyword in the same name.
    #[test]
    fn taxonomy_anesthesia_has_top_priority() {
        assert_eq!(
            classify_treatment_name("Visite Dokter Anastesi"),
            TreatmentKind::AnesthesiaConsult
        );
    }

    #[test]
    fn ultrasound_detection_is_case_insensitive() {
        assert!(is_ultrasound("USG Abdomen"));
        assert!(is_ultrasound("usg thorax"));
        assert!(!is_ultrasound("Thorax PA"));
    }

    // ── Attending visit count ─────────────────────────────────────────────────

    /// A three-day stay yields three attending visits.
    #[test]
    fn attending_count_from_length_of_stay() {
        let c = classify_visits(&[], "D1", Some(date(2025, 3, 10)), Some(date(2025, 3, 13)));
        assert_eq!(c.attending_visit_count, 3);
        assert_eq!(c.total_visits(), 3);
    }

    /// Missing discharge (still admitted) or missing admission date
    /// defaults to a single visit.
    #[test]
    fn attending_count_defaults_to_one_without_both_dates() {
        let c = classify_visits(&[], "D1", Some(date(2025, 3, 10)), None);
        assert_eq!(c.attending_visit_count, 1);

        let c = classify_visits(&[], "D1", None, None);
        assert_eq!(c.attending_visit_count, 1);
    }

    /// Same-day (or inverted) dates still count one visit.
    #[test]
    fn attending_count_floors_at_one() {
        let c = classify_visits(&[], "D1", Some(date(2025, 3, 10)), Some(date(2025, 3, 10)));
        assert_eq!(c.attending_visit_count, 1);

        let c = classify_visits(&[], "D1", Some(date(2025, 3, 10)), Some(date(2025, 3, 8)));
        assert_eq!(c.attending_visit_count, 1);
    }

    /// Emergency entries by the attending add to the count; the same entry
    /// by another doctor does not.
    #[test]
    fn attending_count_adds_own_emergency_entries() {
        let treatments = vec![
            entry("Emergency suturing", "D1"),
            entry("Emergency observation", "D1"),
            entry("Emergency triage", "D2"),
        ];
        let c = classify_visits(
            &treatments,
            "D1",
            Some(date(2025, 3, 10)),
            Some(date(2025, 3, 12)),
        );
        assert_eq!(c.attending_visit_count, 2 + 2);
    }

    // ── Bucketing ─────────────────────────────────────────────────────────────

    /// Anesthesia entries are bucketed even when the attending performed them.
    #[test]
    fn anesthesia_bucket_ignores_performer() {
        let treatments = vec![
            entry("Konsul Anastesi", "D1"),
            entry("Anastesi umum", "D3"),
        ];
        let c = classify_visits(&treatments, "D1", None, None);
        assert_eq!(c.anesthesia_consults.len(), 2);
    }

    /// Qualified ward rounds by other doctors land in secondary; the
    /// attending's own and the exact general round do not.
    #[test]
    fn secondary_bucket_takes_qualified_rounds_by_others() {
        let treatments = vec![
            entry("Visite Dokter Spesialis", "D2"),
            entry("Visite Dokter Spesialis", "D1"), // attending's own
            entry("Visite Dokter", "D4"),           // general duty, not secondary
        ];
        let c = classify_visits(&treatments, "D1", None, None);
        assert_eq!(c.secondary_consults.len(), 1);
        assert_eq!(c.secondary_consults[0].staff_identity(), "D2");
        assert_eq!(c.general_duty_visits.len(), 1);
        assert_eq!(c.general_duty_visits[0].staff_identity(), "D4");
    }

    /// A doctor already in the anesthesia bucket is not counted again under
    /// secondary, even with a qualifying ward-round entry.
    #[test]
    fn anesthesia_staff_excluded_from_secondary() {
        let treatments = vec![
            entry("Konsul Anastesi", "D3"),
            entry("Visite Dokter Spesialis", "D3"),
            entry("Visite Dokter Spesialis", "D2"),
        ];
        let c = classify_visits(&treatments, "D1", None, None);
        assert_eq!(c.anesthesia_consults.len(), 1);
        assert_eq!(c.secondary_consults.len(), 1);
        assert_eq!(c.secondary_consults[0].staff_identity(), "D2");
    }

    /// One staff identity never appears in more than one consult bucket,
    /// across randomized treatment lists.
    #[test]
    fn consult_buckets_are_staff_disjoint() {
        // Small deterministic xorshift so the case mix is reproducible.
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        let names = [
            "Konsul Anastesi",
            "Visite Dokter",
            "Visite Dokter Spesialis",
            "Visite Dokter IGD",
            "Emergency care",
            "Konsul Gizi",
            "Fisioterapi",
        ];
        let staff = ["D1", "D2", "D3", "D4", "D5"];

        for _ in 0..200 {
            let len = (next() % 12) as usize;
            let treatments: Vec<TreatmentEntry> = (0..len)
                .map(|_| {
                    entry(
                        names[(next() % names.len() as u64) as usize],
                        staff[(next() % staff.len() as u64) as usize],
                    )
                })
                .collect();

            let c = classify_visits(&treatments, "D1", None, None);
            let anesthesia = staff_identities(&c.anesthesia_consults);
            let secondary = staff_identities(&c.secondary_consults);
            let tertiary = staff_identities(&c.tertiary_consults);
            let general = staff_identities(&c.general_duty_visits);

            assert!(anesthesia.is_disjoint(&secondary));
            assert!(anesthesia.is_disjoint(&tertiary));
            assert!(secondary.is_disjoint(&tertiary));
            assert!(general.is_disjoint(&anesthesia));
            assert!(general.is_disjoint(&secondary));
            assert!(general.is_disjoint(&tertiary));
        }
    }

    // ── Normalization ─────────────────────────────────────────────────────────

    /// Tertiary contents move into an empty secondary bucket; applying the
    /// step twice changes nothing further.
    #[test]
    fn normalize_merges_tertiary_into_empty_secondary_idempotently() {
        let mut c = VisitClassification {
            attending_visit_count: 2,
            tertiary_consults: vec![entry("Visite Dokter Spesialis", "D2")],
            ..Default::default()
        };

        c.normalize();
        assert_eq!(c.secondary_consults.len(), 1);
        assert!(c.tertiary_consults.is_empty());

        let once = c.clone();
        c.normalize();
        assert_eq!(c, once);
    }

    /// A populated secondary bucket keeps tertiary where it is.
    #[test]
    fn normalize_leaves_populated_secondary_alone() {
        let mut c = VisitClassification {
            attending_visit_count: 1,
            secondary_consults: vec![entry("Visite Dokter Spesialis", "D2")],
            tertiary_consults: vec![entry("Visite Dokter Spesialis", "D3")],
            ..Default::default()
        };
        c.normalize();
        assert_eq!(c.secondary_consults.len(), 1);
        assert_eq!(c.tertiary_consults.len(), 1);
    }

    // ── total_visits ──────────────────────────────────────────────────────────

    /// Every bucket member counts once; the attending count counts as itself.
    #[test]
    fn total_visits_sums_count_and_buckets() {
        let treatments = vec![
            entry("Konsul Anastesi", "D3"),
            entry("Visite Dokter Spesialis", "D2"),
            entry("Visite Dokter Spesialis", "D2"),
            entry("Visite Dokter", "D4"),
        ];
        let c = classify_visits(
            &treatments,
            "D1",
            Some(date(2025, 5, 1)),
            Some(date(2025, 5, 4)),
        );
        // 3 attending + 1 anesthesia + 2 secondary + 1 general duty.
        assert_eq!(c.total_visits(), 7);
    }
}
