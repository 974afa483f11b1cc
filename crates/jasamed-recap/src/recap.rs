//! The monthly per-staff recap.
//!
//! Every admission's allocation is attributed to the staff who earned it,
//! bucketed by role.  A bucket whose share was earned by several distinct
//! staff members splits equally across them — by performer, not by how many
//! entries each performed.  Amounts accumulate unrounded; rounding to whole
//! units happens only when rows are produced.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use jasamed_classify::{classify_treatment_name, TreatmentKind, VisitClassification};
use jasamed_contracts::{
    AdmissionRecord, AllocationResult, AnesthesiaDesignation, TreatmentEntry,
};

/// The role buckets a recap reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecapRole {
    Attending,
    AnesthesiaConsult,
    /// Secondary and tertiary consult tiers, combined.
    OtherConsult,
    GeneralDuty,
    Operator,
    /// The anesthesiologist of record or their recorded stand-in.
    Anesthesia,
    /// Lab and radiology staff, accumulated together.
    Support,
}

/// One staff member's accumulated position inside a role bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecapEntry {
    pub display_name: String,
    /// Visits credited; fractional when a bucket split across performers.
    pub visit_count: f64,
    /// Unrounded accumulated amount.
    pub total_amount: f64,
}

/// A finished recap row: rounded amount, filtered to positive, sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecapRow {
    pub display_name: String,
    pub visit_count: f64,
    /// Rounded to whole units at row production, never earlier.
    pub total_amount: i64,
}

/// The monthly recap: one staff→entry map per role bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyRecap {
    attending: BTreeMap<String, RecapEntry>,
    anesthesia_consult: BTreeMap<String, RecapEntry>,
    other_consult: BTreeMap<String, RecapEntry>,
    general_duty: BTreeMap<String, RecapEntry>,
    operator: BTreeMap<String, RecapEntry>,
    anesthesia: BTreeMap<String, RecapEntry>,
    support: BTreeMap<String, RecapEntry>,
}

impl MonthlyRecap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute one admission's allocation to its staff.
    pub fn add(
        &mut self,
        record: &AdmissionRecord,
        classification: &VisitClassification,
        result: &AllocationResult,
    ) {
        // Attending of record.
        let attending_share = result.attending_share();
        if attending_share > 0.0 {
            credit(
                &mut self.attending,
                record.attending_identity(),
                &record.attending_staff_name,
                f64::from(classification.attending_visit_count),
                attending_share,
            );
        }

        match result {
            AllocationResult::Outpatient(a) => {
                if a.consult_share > 0.0 {
                    // The consult half goes to the non-attending doctors on
                    // the consult-flagged entries.
                    let consults: Vec<&TreatmentEntry> = record
                        .treatments
                        .iter()
                        .filter(|t| {
                            classify_treatment_name(&t.name) == TreatmentKind::Consult
                                && t.staff_identity() != record.attending_identity()
                        })
                        .collect();
                    split_entries(&mut self.other_consult, &consults, a.consult_share);
                }
            }
            AllocationResult::Inpatient(a) => {
                split_bucket(
                    &mut self.anesthesia_consult,
                    &classification.anesthesia_consults,
                    a.anesthesia_consult_share,
                );
                split_bucket(
                    &mut self.other_consult,
                    &classification.secondary_consults,
                    a.secondary_consult_share,
                );
                split_bucket(
                    &mut self.other_consult,
                    &classification.tertiary_consults,
                    a.tertiary_consult_share,
                );
                split_bucket(
                    &mut self.general_duty,
                    &classification.general_duty_visits,
                    a.general_duty_share,
                );

                if a.operator_share > 0.0 && !record.operator_staff_name.is_empty() {
                    credit(
                        &mut self.operator,
                        &record.operator_staff_name,
                        &record.operator_staff_name,
                        1.0,
                        a.operator_share,
                    );
                }

                // The anesthesia cut goes to the stand-in when one was
                // recorded, otherwise to the anesthesiologist of record.
                let designation = AnesthesiaDesignation::parse(&record.anesthesia_designation);
                if a.anesthesia_substitute_share > 0.0 {
                    let name = designation.credited_name();
                    if !name.is_empty() {
                        credit(&mut self.anesthesia, name, name, 1.0, a.anesthesia_substitute_share);
                    }
                } else if a.anesthesia_share > 0.0 && !designation.primary_staff_code.is_empty() {
                    credit(
                        &mut self.anesthesia,
                        &designation.primary_staff_code,
                        &designation.primary_staff_code,
                        1.0,
                        a.anesthesia_share,
                    );
                }
            }
        }

        // Support: lab and radiology staff accumulate into the same bucket.
        let lab_share = result.lab_share();
        if lab_share > 0.0 {
            let performers: Vec<(&str, &str)> = record
                .lab_exams
                .iter()
                .map(|e| (e.staff_identity(), e.staff_display()))
                .collect();
            split_performers(&mut self.support, &performers, lab_share);
        }
        let radiology_share = result.radiology_share();
        if radiology_share > 0.0 {
            let performers: Vec<(&str, &str)> = record
                .radiology_exams
                .iter()
                .map(|e| (e.staff_identity(), e.staff_display()))
                .collect();
            split_performers(&mut self.support, &performers, radiology_share);
        }

        debug!(admission_id = %record.id, "recap updated");
    }

    /// Combine two recaps (the parallel-reduce merge step).
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (ours, theirs) in self.buckets_mut().into_iter().zip(other.into_buckets()) {
            for (identity, entry) in theirs {
                let slot = ours.entry(identity).or_insert_with(|| RecapEntry {
                    display_name: entry.display_name.clone(),
                    ..Default::default()
                });
                slot.visit_count += entry.visit_count;
                slot.total_amount += entry.total_amount;
            }
        }
        self
    }

    /// Finished rows for one role: positive amounts only, sorted descending
    /// by amount, rounded to whole units.
    pub fn rows(&self, role: RecapRole) -> Vec<RecapRow> {
        finish_rows(self.bucket(role).values().cloned())
    }

    /// The cross-role recap: every bucket entry summed by display name.
    pub fn combined_rows(&self) -> Vec<RecapRow> {
        let mut by_name: BTreeMap<String, RecapEntry> = BTreeMap::new();
        for bucket in self.buckets() {
            for entry in bucket.values() {
                let slot = by_name
                    .entry(entry.display_name.clone())
                    .or_insert_with(|| RecapEntry {
                        display_name: entry.display_name.clone(),
                        ..Default::default()
                    });
                slot.visit_count += entry.visit_count;
                slot.total_amount += entry.total_amount;
            }
        }
        finish_rows(by_name.into_values())
    }

    /// Sum of every role-bucket amount, rounded to whole units.
    pub fn grand_total(&self) -> i64 {
        self.buckets()
            .into_iter()
            .flat_map(|b| b.values())
            .map(|e| e.total_amount)
            .sum::<f64>()
            .round() as i64
    }

    /// Raw (unfiltered, unrounded) entries for one role, pre-sort and
    /// pre-rounding.  For diagnostics and order-independence checks;
    /// renderers should use `rows`.
    pub fn raw_entries(&self, role: RecapRole) -> &BTreeMap<String, RecapEntry> {
        self.bucket(role)
    }

    fn bucket(&self, role: RecapRole) -> &BTreeMap<String, RecapEntry> {
        match role {
            RecapRole::Attending => &self.attending,
            RecapRole::AnesthesiaConsult => &self.anesthesia_consult,
            RecapRole::OtherConsult => &self.other_consult,
            RecapRole::GeneralDuty => &self.general_duty,
            RecapRole::Operator => &self.operator,
            RecapRole::Anesthesia => &self.anesthesia,
            RecapRole::Support => &self.support,
        }
    }

    fn buckets(&self) -> [&BTreeMap<String, RecapEntry>; 7] {
        [
            &self.attending,
            &self.anesthesia_consult,
            &self.other_consult,
            &self.general_duty,
            &self.operator,
            &self.anesthesia,
            &self.support,
        ]
    }

    fn buckets_mut(&mut self) -> [&mut BTreeMap<String, RecapEntry>; 7] {
        [
            &mut self.attending,
            &mut self.anesthesia_consult,
            &mut self.other_consult,
            &mut self.general_duty,
            &mut self.operator,
            &mut self.anesthesia,
            &mut self.support,
        ]
    }

    fn into_buckets(self) -> [BTreeMap<String, RecapEntry>; 7] {
        [
            self.attending,
            self.anesthesia_consult,
            self.other_consult,
            self.general_duty,
            self.operator,
            self.anesthesia,
            self.support,
        ]
    }
}

/// Credit one staff member inside a bucket.
fn credit(
    bucket: &mut BTreeMap<String, RecapEntry>,
    identity: &str,
    display_name: &str,
    visits: f64,
    amount: f64,
) {
    let entry = bucket
        .entry(identity.to_string())
        .or_insert_with(|| RecapEntry {
            display_name: display_name.to_string(),
            ..Default::default()
        });
    entry.visit_count += visits;
    entry.total_amount += amount;
}

/// Split a classified bucket's share equally across its distinct performers.
fn split_bucket(
    target: &mut BTreeMap<String, RecapEntry>,
    entries: &[TreatmentEntry],
    share: f64,
) {
    let refs: Vec<&TreatmentEntry> = entries.iter().collect();
    split_entries(target, &refs, share);
}

fn split_entries(
    target: &mut BTreeMap<String, RecapEntry>,
    entries: &[&TreatmentEntry],
    share: f64,
) {
    if share <= 0.0 {
        return;
    }
    let performers: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.staff_identity(), e.staff_display()))
        .collect();
    split_performers(target, &performers, share);
}

/// Equal split of `share` across distinct performers: each receives
/// `share / n` and `entry count / n` visits, regardless of how many entries
/// each performed.  Performers with no identity are not attributable and
/// are dropped.
fn split_performers(
    target: &mut BTreeMap<String, RecapEntry>,
    performers: &[(&str, &str)],
    share: f64,
) {
    if share <= 0.0 {
        return;
    }

    let mut distinct: Vec<(&str, &str)> = Vec::new();
    for &(identity, display) in performers {
        if identity.is_empty() {
            continue;
        }
        if !distinct.iter().any(|(id, _)| *id == identity) {
            distinct.push((identity, display));
        }
    }
    if distinct.is_empty() {
        return;
    }

    let n = distinct.len() as f64;
    let amount_each = share / n;
    let visits_each = performers.len() as f64 / n;
    for (identity, display) in distinct {
        credit(target, identity, display, visits_each, amount_each);
    }
}

/// Filter to positive amounts, sort descending by amount (name ties break
/// alphabetically for determinism), and round at the very end.
fn finish_rows(entries: impl Iterator<Item = RecapEntry>) -> Vec<RecapRow> {
    let mut kept: Vec<RecapEntry> = entries.filter(|e| e.total_amount > 0.0).collect();
    kept.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    kept.into_iter()
        .map(|e| RecapRow {
            display_name: e.display_name,
            visit_count: e.visit_count,
            total_amount: e.total_amount.round() as i64,
        })
        .collect()
}
